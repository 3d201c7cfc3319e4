//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod login;
pub mod search;

use clap::{Args, Subcommand};
use glow_core::commerce::ProductId;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category to show (all, cleansers, serums, moisturizers, treatments).
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// List gift sets instead of single products.
    #[arg(long, conflicts_with = "category")]
    pub gift_sets: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text (matched against name, category and description).
    #[arg(num_args = 0.., trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product ids to add, one unit per occurrence.
    #[arg(required = true)]
    pub ids: Vec<ProductId>,

    /// Skip the processing and confirmation delays.
    #[arg(long)]
    pub no_wait: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Create an account instead of signing in.
    #[arg(long)]
    pub sign_up: bool,

    /// Full name (prompted if omitted).
    #[arg(long)]
    pub name: Option<String>,

    /// Email address (prompted if omitted).
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (prompted if omitted).
    #[arg(long)]
    pub phone: Option<String>,

    /// Password (prompted if omitted).
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a config file with every default spelled out.
    Init {
        /// Target path (default: glow.toml).
        path: Option<String>,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
