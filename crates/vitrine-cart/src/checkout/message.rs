//! Plain-text order message and share link.

use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::checkout::OrderSummary;

/// Base URL of the messaging service the share link points at.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://wa.me";

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Wording of the order message.
///
/// Asterisks are bold markers understood by the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    pub greeting: String,
    pub quantity_label: String,
    pub unit_price_label: String,
    pub subtotal_label: String,
    pub total_label: String,
    pub closing: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            greeting: "*Ola! Gostaria de fazer um pedido:*".to_string(),
            quantity_label: "Quantidade:".to_string(),
            unit_price_label: "Preco unitario:".to_string(),
            subtotal_label: "Subtotal:".to_string(),
            total_label: "TOTAL:".to_string(),
            closing: "Aguardo confirmacao!".to_string(),
        }
    }
}

impl MessageTemplate {
    /// Render a summary as the order message.
    ///
    /// ```text
    /// *Ola! Gostaria de fazer um pedido:*
    ///
    /// *Bolo, fatia*
    /// Quantidade: 2
    /// Preco unitario: R$ 15.50
    /// Subtotal: R$ 31.00
    ///
    /// *TOTAL: R$ 31.00*
    ///
    /// Aguardo confirmacao!
    /// ```
    pub fn render(&self, summary: &OrderSummary) -> String {
        let mut message = String::new();
        // Writing into a String cannot fail.
        let _ = write!(message, "{}\n\n", self.greeting);

        for line in &summary.lines {
            let _ = write!(
                message,
                "*{}*\n{} {}\n{} {}\n{} {}\n\n",
                line.name,
                self.quantity_label,
                line.quantity,
                self.unit_price_label,
                line.unit_price.display(),
                self.subtotal_label,
                line.subtotal.display(),
            );
        }

        let _ = write!(
            message,
            "*{} {}*\n\n{}",
            self.total_label,
            summary.total.display(),
            self.closing
        );
        message
    }
}

/// Build `<base_url>/<phone>?text=<message>` with the message percent-encoded.
pub fn share_link(base_url: &str, phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        phone,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::OrderLine;
    use vitrine_catalog::{Currency, Money};

    fn summary() -> OrderSummary {
        OrderSummary {
            lines: vec![
                OrderLine {
                    name: "Bolo, fatia".to_string(),
                    quantity: 2,
                    unit_price: Money::new(1550, Currency::BRL),
                    subtotal: Money::new(3100, Currency::BRL),
                },
                OrderLine {
                    name: "Torta".to_string(),
                    quantity: 1,
                    unit_price: Money::new(2200, Currency::BRL),
                    subtotal: Money::new(2200, Currency::BRL),
                },
            ],
            total_items: 3,
            total: Money::new(5300, Currency::BRL),
        }
    }

    #[test]
    fn test_render_default_template() {
        let message = MessageTemplate::default().render(&summary());
        let expected = "*Ola! Gostaria de fazer um pedido:*\n\n\
            *Bolo, fatia*\nQuantidade: 2\nPreco unitario: R$ 15.50\nSubtotal: R$ 31.00\n\n\
            *Torta*\nQuantidade: 1\nPreco unitario: R$ 22.00\nSubtotal: R$ 22.00\n\n\
            *TOTAL: R$ 53.00*\n\n\
            Aguardo confirmacao!";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_render_custom_labels() {
        let template = MessageTemplate {
            greeting: "Order:".to_string(),
            quantity_label: "Qty:".to_string(),
            unit_price_label: "Each:".to_string(),
            subtotal_label: "Line:".to_string(),
            total_label: "Total:".to_string(),
            closing: "Thanks".to_string(),
        };
        let message = template.render(&summary());
        assert!(message.starts_with("Order:\n\n*Bolo, fatia*\nQty: 2\n"));
        assert!(message.ends_with("*Total: R$ 53.00*\n\nThanks"));
    }

    #[test]
    fn test_share_link_encoding() {
        let link = share_link("https://wa.me/", "5500000000000", "*Oi!* R$ 1.00\nok (sim)");
        assert_eq!(
            link,
            "https://wa.me/5500000000000?text=*Oi!*%20R%24%201.00%0Aok%20(sim)"
        );
    }

    #[test]
    fn test_share_link_encodes_utf8() {
        let link = share_link(DEFAULT_SHARE_BASE_URL, "1", "descrição");
        assert_eq!(link, "https://wa.me/1?text=descri%C3%A7%C3%A3o");
    }
}
