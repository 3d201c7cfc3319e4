//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use glow_core::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { path, force } => init_config(path, force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("email", &config.store.email);
    ctx.output.kv("phone", &config.store.phone);
    ctx.output.kv("address", &config.store.address);

    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv(
        "tax_rate_bps",
        &format!("{} ({}%)", config.pricing.tax_rate_bps, config.pricing.tax_percent()),
    );
    ctx.output.kv("shipping_cents", &config.pricing.shipping_cents.to_string());

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("processing_ms", &config.checkout.processing_ms.to_string());
    ctx.output.kv("confirmation_ms", &config.checkout.confirmation_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[ui]");
    ctx.output.kv(
        "header_scroll_threshold_px",
        &config.ui.header_scroll_threshold_px.to_string(),
    );
    ctx.output.kv("added_feedback_ms", &config.ui.added_feedback_ms.to_string());
    ctx.output.kv("newsletter_reset_ms", &config.ui.newsletter_reset_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[auth]");
    ctx.output.kv("sign_in_policy", config.auth.sign_in_policy.as_str());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());
    ctx.output.kv("level", &config.logging.level);

    Ok(())
}

async fn init_config(path: Option<String>, force: bool, ctx: &Context) -> Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| ctx.cwd.join(CONFIG_NAMES[0]));

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    StorefrontConfig::default().save(&config_path)?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
