//! # Configuration
//!
//! Runtime settings read from the environment. The binary loads a `.env` file
//! with `dotenvy` before calling [`PosConfig::from_env`]; tests go through
//! [`PosConfig::from_lookup`] and never touch the process environment.
//!
//! | Variable               | Default | Meaning                                  |
//! |------------------------|---------|------------------------------------------|
//! | `POS_TAX_RATE_BPS`     | `625`   | Sales tax in basis points (6.25%)        |
//! | `POS_ACTOR_BUFFER`     | `32`    | Channel capacity of each actor           |
//! | `POS_ORDER_LIST_LIMIT` | `50`    | Orders returned when no limit is given   |
//! | `POS_ORDER_LIST_MAX`   | `500`   | Larger requested limits are clamped here |

use crate::model::TaxRate;
use std::str::FromStr;
use thiserror::Error;

pub const TAX_RATE_BPS: &str = "POS_TAX_RATE_BPS";
pub const ACTOR_BUFFER: &str = "POS_ACTOR_BUFFER";
pub const ORDER_LIST_LIMIT: &str = "POS_ORDER_LIST_LIMIT";
pub const ORDER_LIST_MAX: &str = "POS_ORDER_LIST_MAX";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosConfig {
    pub tax_rate: TaxRate,
    pub actor_buffer: usize,
    pub default_list_limit: usize,
    pub max_list_limit: usize,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::DEFAULT,
            actor_buffer: 32,
            default_list_limit: 50,
            max_list_limit: 500,
        }
    }
}

impl PosConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            tax_rate: TaxRate(read(&lookup, TAX_RATE_BPS, defaults.tax_rate.basis_points())?),
            actor_buffer: read_positive(&lookup, ACTOR_BUFFER, defaults.actor_buffer)?,
            default_list_limit: read_positive(
                &lookup,
                ORDER_LIST_LIMIT,
                defaults.default_list_limit,
            )?,
            max_list_limit: read_positive(&lookup, ORDER_LIST_MAX, defaults.max_list_limit)?,
        };

        if config.default_list_limit > config.max_list_limit {
            return Err(ConfigError::Invalid {
                key: ORDER_LIST_LIMIT,
                value: config.default_list_limit.to_string(),
                reason: format!("exceeds {ORDER_LIST_MAX} ({})", config.max_list_limit),
            });
        }
        Ok(config)
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn read_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let value = read(lookup, key, default)?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: "0".into(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(value)
}
