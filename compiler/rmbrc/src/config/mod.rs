//! Generation run configuration.
//!
//! Sources apply in order, later ones overriding earlier ones:
//! defaults, then processor-style `key=value` options, then CLI flags.

use rmbr_ir::InjectionMode;

pub const OPTION_INJECTION: &str = "rmbr.injectionType";
/// Option key of the original annotation processor, still accepted.
pub const OPTION_INJECTION_LEGACY: &str = "genrmbr.injectionType";
pub const OPTION_PARALLEL: &str = "rmbr.parallel";
pub const OPTION_TIMESTAMP: &str = "rmbr.timestamp";

/// Settings shared by every class of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Default injection mode; a class-level marker may override it.
    pub injection_mode: InjectionMode,
    /// Process classes on the rayon pool.
    pub parallel: bool,
    /// Append a `// Generated at` trailer to every unit.
    pub timestamp: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            injection_mode: InjectionMode::None,
            parallel: true,
            timestamp: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{key}`")]
    UnknownOption { key: String },

    #[error("invalid value `{value}` for `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("malformed option `{arg}`, expected `key=value`")]
    Malformed { arg: String },

    #[error("unknown flag `{flag}`")]
    UnknownFlag { flag: String },

    #[error("missing {what}")]
    Missing { what: &'static str },
}

impl GenConfig {
    /// Apply one processor-style option.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            OPTION_INJECTION | OPTION_INJECTION_LEGACY => {
                self.injection_mode = value.parse().map_err(|reason| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    reason,
                })?;
            }
            OPTION_PARALLEL => self.parallel = parse_bool(key, value)?,
            OPTION_TIMESTAMP => self.timestamp = parse_bool(key, value)?,
            _ => {
                return Err(ConfigError::UnknownOption {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Build a configuration from an ordered option list.
    pub fn from_options<'a, I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = GenConfig::default();
        for (key, value) in options {
            config.apply_option(key, value)?;
        }
        Ok(config)
    }
}

/// Split a `key=value` argument.
pub fn parse_option_arg(arg: &str) -> Result<(&str, &str), ConfigError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ConfigError::Malformed {
            arg: arg.to_string(),
        }),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected `true` or `false`".to_string(),
        }),
    }
}
