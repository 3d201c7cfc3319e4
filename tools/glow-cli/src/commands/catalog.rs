//! List catalog products.

use anyhow::Result;
use glow_core::commerce::catalog::{CategoryFilter, Product};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront();

    let (title, products): (String, Vec<&Product>) = if args.gift_sets {
        ("Luxury Gift Sets".to_string(), store.gift_sets().iter().collect())
    } else {
        let filter: CategoryFilter = args.category.parse()?;
        ctx.output.debug(&format!("category filter: {}", filter.as_str()));
        (filter.display_name().to_string(), store.products_in(filter))
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", title, products.len()));
    for product in &products {
        ctx.output.product_row(product);
        if let Some(savings) = product.savings().filter(|_| product.is_gift_set()) {
            ctx.output.kv("Includes", &product.includes.join(", "));
            ctx.output.kv("Save", &savings.display_short());
        }
    }

    if products.is_empty() {
        ctx.output.warn("No products in this category");
    } else {
        ctx.output.info("");
        ctx.output.info("Add to a cart with `glow checkout <id>...`");
    }

    Ok(())
}
