use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub cart: CartConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CartConfig {
    /// ISO 4217 code reported alongside cart totals
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Removing an item that is not in the cart is an error instead of a no-op
    #[serde(default)]
    pub strict_removal: bool,
}

fn default_currency() -> String { "USD".to_string() }

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            strict_removal: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = file_layers(with_defaults(config::Config::builder())?, Path::new("config"), &run_mode)
            // Eg.. `SHOPKIT__CART__STRICT_REMOVAL=true`
            .add_source(
                config::Environment::with_prefix("SHOPKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        tracing::info!(run_mode = %run_mode, currency = %config.cart.currency, "Loaded configuration");
        Ok(config)
    }

    /// Load the file layers under `dir` only. The environment is not consulted.
    pub fn load_from_dir(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        file_layers(with_defaults(config::Config::builder())?, dir, run_mode)
            .build()?
            .try_deserialize()
    }

    /// Build from an in-memory TOML document layered over the defaults
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        with_defaults(config::Config::builder())?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { cart: CartConfig::default() }
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    builder
        .set_default("cart.currency", default_currency())?
        .set_default("cart.strict_removal", false)
}

fn file_layers(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    dir: &Path,
    run_mode: &str,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    let layer = |name: &str| {
        config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
    };

    builder
        .add_source(layer("default"))
        // Per-environment overrides, e.g. config/test.toml
        .add_source(layer(run_mode))
        // Not checked in
        .add_source(layer("local"))
}
