//! Catalog records and the lenient CSV feed parser for vitrine.
//!
//! - **Records**: [`Record`], [`ProductId`], [`Money`]
//! - **Parsing**: [`CsvRecordParser`] turns raw feed text into records
//! - **Catalog**: [`Catalog`], the ordered result of a parse
//!
//! # Example
//!
//! ```
//! use vitrine_catalog::{CatalogFieldMap, CsvRecordParser};
//!
//! let raw = "id,nome,preco\n1,\"Bolo, fatia\",15.50\nx,Invalido,10\n";
//! let records = CsvRecordParser::new(CatalogFieldMap::default()).parse(raw);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "Bolo, fatia");
//! assert_eq!(records[0].unit_price.display(), "R$ 15.50");
//! ```

pub mod catalog;
pub mod csv;
pub mod fields;
pub mod ids;
pub mod money;
pub mod numeric;
pub mod record;

pub use catalog::Catalog;
pub use csv::{parse_catalog, CsvRecordParser};
pub use fields::CatalogFieldMap;
pub use ids::{InvalidProductId, ProductId};
pub use money::{Currency, Money};
pub use record::Record;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::csv::{parse_catalog, CsvRecordParser};
    pub use crate::fields::CatalogFieldMap;
    pub use crate::ids::{InvalidProductId, ProductId};
    pub use crate::money::{Currency, Money};
    pub use crate::record::Record;
}
