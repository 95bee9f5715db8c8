use std::path::PathBuf;

use crate::{common::money::Money, io::avatar::AvatarError};

/// Domain failures raised by ledger commands. A command that returns one of
/// these has left the ledger untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown consultant: {0}")]
    UnknownConsultant(String),
    #[error("unknown segment: {0}")]
    UnknownSegment(String),
    #[error("invalid target: {0} (must be positive)")]
    InvalidTarget(Money),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("avatar error: {0}")]
    Avatar(#[from] AvatarError),
}
