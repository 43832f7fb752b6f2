use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing sections fall back to
/// their `Default` implementations.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub lease_program: LeaseProgram,
    pub credit: CreditSettings,
}

impl Config {
    /// Checks every section for values the calculator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lease_program.validate()?;
        self.credit.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            // The browser front end calls the API on port 8000.
            port: 8000,
        }
    }
}

impl ServerSettings {
    /// The `host:port` string handed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log filtering and the optional rolling log file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `web_server=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    /// Prefix of the rolling log file names.
    pub file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "auto-finance.log".to_string(),
        }
    }
}

/// The fixed assumption set of one lease financing program.
///
/// The defaults describe a typical captive-lender program: 60% residual,
/// a 5% negotiated discount off MSRP, a 650 acquisition fee, 6.25% sales
/// tax and the industry APR / 2400 money factor convention.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaseProgram {
    /// Residual value as a percentage of MSRP (60 means 60%).
    pub residual_percent: f64,
    /// Negotiated discount off MSRP as a fraction (0.05 means 5%).
    pub cap_cost_discount: f64,
    /// Flat fee added to the capitalized cost.
    pub acquisition_fee: f64,
    /// Sales tax applied to the monthly payment, as a fraction.
    pub sales_tax_rate: f64,
    /// Divisor converting an APR in percent into a money factor.
    pub money_factor_divisor: f64,
    /// Reject leases whose adjusted capitalized cost falls below the residual
    /// value. When false the signed payment is returned and a warning logged.
    pub reject_negative_depreciation: bool,
}

impl Default for LeaseProgram {
    fn default() -> Self {
        Self {
            residual_percent: 60.0,
            cap_cost_discount: 0.05,
            acquisition_fee: 650.0,
            sales_tax_rate: 0.0625,
            money_factor_divisor: 2400.0,
            reject_negative_depreciation: true,
        }
    }
}

impl LeaseProgram {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("residual_percent", self.residual_percent),
            ("cap_cost_discount", self.cap_cost_discount),
            ("acquisition_fee", self.acquisition_fee),
            ("sales_tax_rate", self.sales_tax_rate),
            ("money_factor_divisor", self.money_factor_divisor),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "lease_program.{name} must be a finite number"
            )));
        }
        if !(0.0..=100.0).contains(&self.residual_percent) {
            return Err(ConfigError::ValidationError(
                "lease_program.residual_percent must be between 0 and 100".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.cap_cost_discount) {
            return Err(ConfigError::ValidationError(
                "lease_program.cap_cost_discount must be in [0, 1)".to_string(),
            ));
        }
        if self.acquisition_fee < 0.0 {
            return Err(ConfigError::ValidationError(
                "lease_program.acquisition_fee must not be negative".to_string(),
            ));
        }
        if self.sales_tax_rate < 0.0 {
            return Err(ConfigError::ValidationError(
                "lease_program.sales_tax_rate must not be negative".to_string(),
            ));
        }
        if self.money_factor_divisor <= 0.0 {
            return Err(ConfigError::ValidationError(
                "lease_program.money_factor_divisor must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Maps a minimum credit score to the APR a borrower in that band is assumed to get.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CreditTier {
    pub min_score: u32,
    pub apr: f64,
}

/// The credit score to APR table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreditSettings {
    pub tiers: Vec<CreditTier>,
    /// APR for scores below every tier.
    pub fallback_apr: f64,
}

impl Default for CreditSettings {
    fn default() -> Self {
        Self {
            tiers: vec![
                CreditTier { min_score: 760, apr: 3.5 },
                CreditTier { min_score: 700, apr: 4.9 },
                CreditTier { min_score: 640, apr: 6.9 },
                CreditTier { min_score: 580, apr: 10.5 },
            ],
            fallback_apr: 15.0,
        }
    }
}

impl CreditSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let aprs = self.tiers.iter().map(|t| t.apr).chain([self.fallback_apr]);
        for apr in aprs {
            if !apr.is_finite() || apr < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "credit APRs must be finite and non-negative, got {apr}"
                )));
            }
        }
        Ok(())
    }
}

/// Command-line overrides for [`ServerSettings`].
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServerArgs {
    /// Interface to bind, overriding `server.host`.
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind, overriding `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(feature = "clap")]
impl ServerSettings {
    pub fn apply(&mut self, args: &ServerArgs) {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
    }
}
