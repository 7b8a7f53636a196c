pub mod fixtures;
pub mod walk;

pub use fixtures::{FixtureKind, Star};
pub use walk::{walk_data_dirs, DayDir};
