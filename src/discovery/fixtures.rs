use std::path::Path;

use crate::error::FixtureError;

/// Puzzle sub-part identifier in the fixture naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    One,
    Two,
}

impl Star {
    pub fn number(self) -> u8 {
        match self {
            Star::One => 1,
            Star::Two => 2,
        }
    }

    /// Marker passed to the generated `star_test!` invocation.
    pub fn marker(self) -> &'static str {
        match self {
            Star::One => "star1",
            Star::Two => "star2",
        }
    }
}

/// What a directory entry in a day directory means, by filename suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureKind {
    /// Puzzle input, applying to one or both stars.
    Input { base: String, stars: Vec<Star> },
    /// Expected output for one star.
    Output { base: String, star: Star },
    /// Not part of the fixture convention.
    Ignored,
}

impl FixtureKind {
    /// Classifies `path` by its filename.
    ///
    /// A name containing `in`/`out` that matches none of the known suffixes
    /// is an error rather than silently ignored; anything else is ignored.
    pub fn classify(path: &Path) -> Result<FixtureKind, FixtureError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(base) = name.strip_suffix(".in.1") {
            return Ok(FixtureKind::Input {
                base: base.to_string(),
                stars: vec![Star::One],
            });
        }
        if let Some(base) = name.strip_suffix(".in.2") {
            return Ok(FixtureKind::Input {
                base: base.to_string(),
                stars: vec![Star::Two],
            });
        }
        if let Some(base) = name.strip_suffix(".in") {
            return Ok(FixtureKind::Input {
                base: base.to_string(),
                stars: vec![Star::One, Star::Two],
            });
        }
        if name.contains("in") {
            return Err(FixtureError::unrecognized_input(path));
        }

        if let Some(base) = name.strip_suffix(".out.1") {
            return Ok(FixtureKind::Output {
                base: base.to_string(),
                star: Star::One,
            });
        }
        if let Some(base) = name.strip_suffix(".out.2") {
            return Ok(FixtureKind::Output {
                base: base.to_string(),
                star: Star::Two,
            });
        }
        if name.contains("out") {
            return Err(FixtureError::unrecognized_output(path));
        }

        Ok(FixtureKind::Ignored)
    }
}
