//! Output formatting for the CLI.

use console::style;
use glow_core::commerce::catalog::Product;
use glow_core::commerce::cart::CartPricing;
use indicatif::{ProgressBar, ProgressStyle};

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

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
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

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print one product card as a table row.
    pub fn product_row(&self, product: &Product) {
        if self.json {
            return;
        }
        let price = match product.original_price {
            Some(original) => format!(
                "{} {}",
                product.price.display_short(),
                style(original.display_short()).dim().strikethrough()
            ),
            None => product.price.display_short(),
        };
        println!(
            "  {:>4}  {:34}  {:13}  {:>6}  {}  {}",
            product.id,
            product.name,
            product.category.display_name(),
            price,
            rating(product),
            product_badge(product),
        );
    }

    /// Print the cart order summary.
    pub fn pricing(&self, pricing: &CartPricing) {
        if self.json {
            return;
        }
        self.kv("Subtotal", &pricing.subtotal.display());
        self.kv("Shipping", &pricing.shipping_display());
        self.kv("Tax", &pricing.tax_total.display());
        println!(
            "  {}: {}",
            style("Total").bold(),
            style(pricing.grand_total.display()).bold()
        );
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Star rating with review count, e.g. `★★★★☆ 4.7 (298)`.
pub fn rating(product: &Product) -> String {
    let full = product.full_stars();
    format!(
        "{}{} {:.1} ({})",
        style("★".repeat(full)).yellow(),
        style("☆".repeat(5usize.saturating_sub(full))).dim(),
        product.rating,
        product.reviews
    )
}

/// NEW / BESTSELLER / SALE badge for a product.
pub fn product_badge(product: &Product) -> String {
    if product.is_bestseller {
        style("BESTSELLER").magenta().bold().to_string()
    } else if product.is_new {
        style("NEW").green().bold().to_string()
    } else if product.is_on_sale() {
        style("SALE").red().to_string()
    } else {
        String::new()
    }
}
