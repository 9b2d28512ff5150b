use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Factory errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown discriminator '{discriminator}' (known: {})", .known.join(", "))]
    UnknownDiscriminator {
        discriminator: String,
        known: Vec<String>,
    },

    #[error("Fallback family '{family}' is not registered")]
    UnknownFallbackFamily { family: String },
}

impl FactoryError {
    pub fn unknown_discriminator(discriminator: impl Into<String>, known: Vec<String>) -> Self {
        Self::UnknownDiscriminator {
            discriminator: discriminator.into(),
            known,
        }
    }

    pub fn discriminator(&self) -> Option<&str> {
        match self {
            FactoryError::UnknownDiscriminator { discriminator, .. } => {
                Some(discriminator.as_str())
            }
            FactoryError::UnknownFallbackFamily { .. } => None,
        }
    }
}

// =============================================================================
// Delivery errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("No operator assigned to the {mode} order")]
    MissingOperator { mode: String },

    #[error("No vehicle assigned to the {mode} order")]
    MissingVehicle { mode: String },

    #[error("{operator} does not hold a valid {license} license")]
    InvalidLicense { operator: String, license: String },

    #[error("{operator} holds a {held} license but the order needs a {required} license")]
    WrongLicense {
        operator: String,
        held: String,
        required: String,
    },
}

// =============================================================================
// Showroom errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowroomError {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value '{value}' for '{field}' (known: {})", .known.join(", "))]
    InvalidValue {
        field: String,
        value: String,
        known: Vec<String>,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
