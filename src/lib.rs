/// star-testgen
///
/// Scans a tree of puzzle input/output fixture files and appends generated
/// test modules to the matching solution source files. Naming collisions are
/// resolved with deterministic one-character suffixes, and repeated fixture
/// content is deduplicated into shared constants.
pub mod cli;
pub mod codegen;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod writer;

pub use codegen::generate_day;
pub use discovery::{walk_data_dirs, DayDir};
