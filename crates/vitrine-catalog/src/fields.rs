//! Mapping from feed header names to record fields.

use serde::{Deserialize, Serialize};

/// Declares which feed header supplies each record field, and the
/// placeholders used when a text field is blank.
///
/// Keeping this outside the parser means a feed can rename its columns
/// without touching parsing code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFieldMap {
    /// Header of the identifier column.
    pub id: String,
    /// Header of the display name column.
    pub name: String,
    /// Header of the description column.
    pub description: String,
    /// Header of the unit price column.
    pub price: String,
    /// Header of the image reference column.
    pub image: String,
    /// Name used when the name cell is blank or missing.
    pub name_placeholder: String,
    /// Description used when the description cell is blank or missing.
    pub description_placeholder: String,
}

impl Default for CatalogFieldMap {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            name: "nome".to_string(),
            description: "descricao".to_string(),
            price: "preco".to_string(),
            image: "imagem".to_string(),
            name_placeholder: "Produto sem nome".to_string(),
            description_placeholder: "Sem descrição".to_string(),
        }
    }
}

impl CatalogFieldMap {
    /// Set the id header.
    pub fn with_id(mut self, header: impl Into<String>) -> Self {
        self.id = header.into();
        self
    }

    /// Set the name header.
    pub fn with_name(mut self, header: impl Into<String>) -> Self {
        self.name = header.into();
        self
    }

    /// Set the description header.
    pub fn with_description(mut self, header: impl Into<String>) -> Self {
        self.description = header.into();
        self
    }

    /// Set the price header.
    pub fn with_price(mut self, header: impl Into<String>) -> Self {
        self.price = header.into();
        self
    }

    /// Set the image header.
    pub fn with_image(mut self, header: impl Into<String>) -> Self {
        self.image = header.into();
        self
    }

    /// Set both text placeholders.
    pub fn with_placeholders(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.name_placeholder = name.into();
        self.description_placeholder = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let map = CatalogFieldMap::default();
        assert_eq!(map.id, "id");
        assert_eq!(map.name, "nome");
        assert_eq!(map.price, "preco");
        assert_eq!(map.description_placeholder, "Sem descrição");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let map: CatalogFieldMap = serde_json::from_str(r#"{"name": "title"}"#).unwrap();
        assert_eq!(map.name, "title");
        assert_eq!(map.id, "id");
        assert_eq!(map.image, "imagem");
    }
}
