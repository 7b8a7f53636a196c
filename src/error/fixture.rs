use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("unrecognized input fixture name: {path}")]
    UnrecognizedInput { path: PathBuf },

    #[error("unrecognized output fixture name: {path}")]
    UnrecognizedOutput { path: PathBuf },

    #[error("output fixture '{base}' star {star} has no matching input in {dir}")]
    MissingInput {
        base: String,
        star: u8,
        dir: PathBuf,
    },

    #[error("day directory name is not a number: {path}")]
    InvalidDayDirectory { path: PathBuf },
}

impl FixtureError {
    pub fn unrecognized_input(path: impl Into<PathBuf>) -> Self {
        Self::UnrecognizedInput { path: path.into() }
    }

    pub fn unrecognized_output(path: impl Into<PathBuf>) -> Self {
        Self::UnrecognizedOutput { path: path.into() }
    }

    pub fn invalid_day_directory(path: impl Into<PathBuf>) -> Self {
        Self::InvalidDayDirectory { path: path.into() }
    }
}
