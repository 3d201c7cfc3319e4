//! Build a cart and run the simulated checkout.

use std::cell::Cell;

use anyhow::{Context as _, Result};
use glow_core::commerce::checkout::{CheckoutStatus, CheckoutTimings};
use glow_core::Storefront;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if args.no_wait {
        config.checkout = CheckoutTimings::instant();
    }
    let mut store = Storefront::new(config);

    for id in &args.ids {
        store
            .add_to_cart(*id)
            .with_context(|| format!("Cannot add product {} to the cart", id))?;
    }

    ctx.output.header(&format!(
        "Shopping Cart ({})",
        store.cart().unique_item_count()
    ));
    for item in store.cart().items() {
        ctx.output.list_item(&format!(
            "{} x{}  {}",
            item.name,
            item.quantity,
            item.line_total().display()
        ));
    }
    ctx.output.info("");
    ctx.output.pricing(&store.pricing());
    ctx.output.info("");

    store.open_cart();
    let spinner = ctx.output.spinner(CheckoutStatus::Processing.button_label());
    let sleeps = Cell::new(0u8);

    // First sleep is processing, second holds the confirmation.
    let result = store
        .checkout(|delay| {
            if sleeps.get() == 1 {
                spinner.set_message("Order Successful!");
            }
            sleeps.set(sleeps.get() + 1);
            tokio::time::sleep(delay)
        })
        .await;
    spinner.finish_and_clear();
    let confirmation = result?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success(confirmation.headline());
    ctx.output.info(confirmation.message());
    ctx.output.kv("Order", confirmation.order_id.as_str());
    ctx.output.kv("Items", &confirmation.total_items().to_string());
    ctx.output.kv("Total", &confirmation.pricing.grand_total.display());
    ctx.output.kv(
        "Placed",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    Ok(())
}
