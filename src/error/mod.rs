mod fixture;
mod io;
mod naming;
mod registry;

pub use fixture::FixtureError;
pub use io::IoError;
pub use naming::NamingError;
pub use registry::RegistryError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, Error>;
