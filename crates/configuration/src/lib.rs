use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use settings::ServerArgs;
pub use settings::{Config, CreditSettings, CreditTier, LeaseProgram, LoggingSettings, ServerSettings};
pub use telemetry::init_tracing;

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional. Environment variables prefixed with `APP` override
/// it, using `__` to descend into sections (`APP__SERVER__PORT=9000`).
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Same as [`load_config`], reading the given file instead.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    load_config_with(path, app_environment())
}

/// The `APP__SECTION__KEY` environment source.
fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_config_with(path: &Path, environment: config::Environment) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
