//! Outbound WhatsApp deep links.

/// Pre-filled message for the "Get a Free Quote" button
pub const QUOTE_MESSAGE: &str = "Hello INK Spire, I'd like to get a free quote.";

/// Pre-filled message for ordering a product
pub fn order_message(product_name: &str) -> String {
    format!(
        "Hello INK Spire, I'm interested in ordering the \"{}\". Can we discuss the details?",
        product_name
    )
}

/// `https://wa.me/<number>?text=<message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Chat link with no pre-filled text
pub fn whatsapp_chat(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_link() {
        assert_eq!(
            whatsapp_link("+940742200156", QUOTE_MESSAGE),
            "https://wa.me/+940742200156?text=Hello%20INK%20Spire%2C%20I%27d%20like%20to%20get%20a%20free%20quote."
        );
    }

    #[test]
    fn test_order_link_encodes_product_name() {
        let link = whatsapp_link("+94", &order_message("Mugs & \"Cups\""));
        assert!(link.contains("Mugs%20%26%20%22Cups%22"));
        assert!(!link.contains(' '));
    }
}
