use std::path::PathBuf;
use thiserror::Error;

use super::{IoError, NamingError};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("content of '{path}' contains the raw string terminator '\"#' and cannot be quoted")]
    RawDelimiterInLiteral { path: PathBuf },

    #[error("constant '{name}' contains the raw string terminator '\"#' and cannot be rendered")]
    RawDelimiterInConstant { name: String },
}
