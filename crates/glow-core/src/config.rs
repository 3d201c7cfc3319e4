//! Storefront configuration.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock storefront. Files ending in `.json` are read as JSON, everything
//! else as TOML.

use crate::CoreError;
use glow_auth::SignInPolicy;
use glow_commerce::cart::PricingPolicy;
use glow_commerce::checkout::CheckoutTimings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,

    /// Tax and shipping.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Simulated checkout delays.
    #[serde(default)]
    pub checkout: CheckoutTimings,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    /// Load config if the file exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config text, choosing the format from the path's extension.
    pub fn parse(path: &Path, content: &str) -> Result<Self, CoreError> {
        let parsed = if is_json(path) {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            toml::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Serialize in the format matching `path`.
    pub fn render(&self, path: &Path) -> Result<String, CoreError> {
        let rendered = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| e.to_string())
        } else {
            toml::to_string_pretty(self).map_err(|e| e.to_string())
        };

        rendered.map_err(|message| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let content = self.render(path)?;

        std::fs::write(path, content).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Store identity and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Brand name shown in the header and footer.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "SKINCARE".to_string(),
            email: "hello@skincare.example".to_string(),
            phone: "(555) 010-0200".to_string(),
            address: "100 Glow Avenue, Suite 5, New York, NY".to_string(),
        }
    }
}

/// UI timing and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Scroll offset past which the header turns solid.
    pub header_scroll_threshold_px: f64,
    /// How long a product card shows "Added!".
    pub added_feedback_ms: u64,
    /// How long the newsletter form shows its thank-you.
    pub newsletter_reset_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold_px: 20.0,
            added_feedback_ms: 1500,
            newsletter_reset_ms: 3000,
        }
    }
}

impl UiConfig {
    /// Whether the header uses its solid style at this scroll offset.
    pub fn header_is_solid(&self, scroll_y: f64) -> bool {
        scroll_y > self.header_scroll_threshold_px
    }
}

/// Login behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub sign_in_policy: SignInPolicy,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::parse(Path::new("glow.toml"), "").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.pricing.tax_rate_bps, 800);
        assert_eq!(config.checkout.processing_ms, 2000);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = StorefrontConfig::parse(
            Path::new("glow.toml"),
            r#"
                [pricing]
                tax_rate_bps = 1000

                [auth]
                sign_in_policy = "from-credentials"
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tax_rate_bps, 1000);
        assert_eq!(config.pricing.shipping_cents, 0);
        assert_eq!(config.auth.sign_in_policy, SignInPolicy::FromCredentials);
        assert_eq!(config.store.name, "SKINCARE");
        assert_eq!(config.ui.added_feedback_ms, 1500);
    }

    #[test]
    fn test_json_by_extension() {
        let config = StorefrontConfig::parse(
            Path::new("glow.JSON"),
            r#"{ "logging": { "format": "json" } }"#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let path = Path::new("glow.toml");
        let text = StorefrontConfig::default().render(path).unwrap();
        let back = StorefrontConfig::parse(path, &text).unwrap();
        assert_eq!(back, StorefrontConfig::default());
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let err = StorefrontConfig::parse(Path::new("bad.toml"), "[pricing\n").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/glow.toml").unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
        assert!(StorefrontConfig::load_or_default("/nonexistent/glow.toml").is_ok());
    }

    #[test]
    fn test_header_threshold() {
        let ui = UiConfig::default();
        assert!(!ui.header_is_solid(20.0));
        assert!(ui.header_is_solid(20.5));
    }
}
