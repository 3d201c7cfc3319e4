//! Search products.

use anyhow::Result;
use glow_core::Page;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront();
    store.search(args.query.join(" "));

    if store.page() != Page::Search {
        ctx.output.warn("Enter a search term to find products");
        if ctx.output.is_json() {
            ctx.output.json(&store.search_results());
        }
        return Ok(());
    }

    let results = store.search_results();
    tracing::debug!(query = %results.query, matches = results.len(), "search");

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&results.summary());

    if results.is_empty() {
        ctx.output.warn(&results.empty_message());
        ctx.output.info("Continue browsing with `glow catalog`");
        return Ok(());
    }

    for product in &results.items {
        ctx.output.product_row(product);
    }

    Ok(())
}
