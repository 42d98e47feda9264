//! Output formatting for the CLI.

use console::style;
use turbo_commerce::{CartState, LineItem};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a cart as a table, or as its stored JSON form in JSON mode.
    pub fn cart(&self, cart: &CartState) {
        if self.json {
            self.json(cart);
            return;
        }

        if cart.is_empty() {
            self.info("Cart is empty.");
            return;
        }

        let widths = [6, 32, 10, 6];
        self.table_row(&["ID", "TITLE", "PRICE", "QTY"], &widths);
        for item in cart {
            let row = CartRow::from(item);
            self.table_row(
                &[
                    row.id.as_str(),
                    row.title.as_str(),
                    row.price.as_str(),
                    row.quantity.as_str(),
                ],
                &widths,
            );
        }
        println!();
        self.kv("Items", &cart.total_quantity().to_string());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// One rendered table row.
struct CartRow {
    id: String,
    title: String,
    price: String,
    quantity: String,
}

impl From<&LineItem> for CartRow {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: truncate(&item.title, 32),
            price: format_price(item.unit_price),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Format a price with two decimals. Display only.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::ProductId;

    fn item(id: u64, price: f64, quantity: i64) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            title: "Tênis de Caminhada Leve Confortável".to_string(),
            unit_price: price,
            image_ref: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(179.9), "179.90");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Tênis", 10), "Tênis");
        assert_eq!(truncate("Tênis de Caminhada", 6), "Tênis…");
    }

    #[test]
    fn test_cart_row() {
        let cart = CartState::from_items(vec![item(1, 10.5, 2), item(2, 100.0, 1)]).unwrap();

        let row = CartRow::from(&cart.items()[0]);
        assert_eq!(row.id, "1");
        assert_eq!(row.price, "10.50");
        assert_eq!(row.quantity, "2");
        assert_eq!(row.title.chars().count(), 32);
    }
}
