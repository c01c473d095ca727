//! Error types for the core crate.
//!
//! Sensor errors never escape a component: they only select which simulated
//! fallback is active and which status text the front-end shows.

use thiserror::Error;

/// Why a live sensor could not be used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("sensor not supported on this device")]
    CapabilityAbsent,
    #[error("sensor access denied")]
    PermissionDenied,
    #[error("sensor error: {0}")]
    Transient(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrompterError {
    #[error("script is empty")]
    EmptyScript,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("could not write to storage: {0}")]
    Write(String),
}
