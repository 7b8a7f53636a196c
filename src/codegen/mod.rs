use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{FixtureKind, Star};
use crate::error::{FixtureError, IoError, Result};
use crate::naming::{NameCache, Tag};
use crate::registry::{ContentRole, StringRegistry};

/// One generated test line: which star it exercises and the resolved
/// references to its input and expected output.
struct TestCase {
    star: Star,
    input: Tag,
    output: Tag,
}

/// Generates the test module block for one day directory of fixtures.
///
/// Pure apart from reading the fixture files: the returned text is exactly
/// what gets appended to the solution file, and no state survives the call.
pub fn generate_day(day_path: &Path) -> Result<String> {
    let entries = classified_entries(day_path)?;

    // Inputs first, so outputs can look up their tag by (base, star).
    let mut registry = StringRegistry::new();
    let mut inputs: HashMap<(String, Star), Tag> = HashMap::new();
    for (path, kind) in &entries {
        if let FixtureKind::Input { base, stars } = kind {
            let tag = registry.register(base, ContentRole::Input, path)?;
            for star in stars {
                inputs.insert((base.clone(), *star), tag.clone());
            }
        }
    }

    let mut test_names: NameCache<TestCase> = NameCache::new();
    for (path, kind) in &entries {
        if let FixtureKind::Output { base, star } = kind {
            let output = registry.register(base, ContentRole::Output, path)?;
            let input = inputs
                .get(&(base.clone(), *star))
                .ok_or_else(|| FixtureError::MissingInput {
                    base: base.clone(),
                    star: star.number(),
                    dir: day_path.to_path_buf(),
                })?
                .clone();
            test_names.register(
                &base.to_lowercase(),
                "example",
                TestCase {
                    star: *star,
                    input,
                    output,
                },
            );
        }
    }

    let content_names = registry.resolve()?;
    let case_names = test_names.resolve()?;

    let mut star1 = Vec::new();
    let mut star2 = Vec::new();
    for (id, case) in test_names.iter() {
        let line = format!(
            "    star_test!({}, {}, {}, {});",
            case_names.get(id)?,
            case.star.marker(),
            case.input.render(&content_names)?,
            case.output.render(&content_names)?,
        );
        match case.star {
            Star::One => star1.push(line),
            Star::Two => star2.push(line),
        }
    }

    let star1_block = join_block(&star1);
    let star2_block = join_block(&star2);
    let consts = registry.dump(&content_names)?;
    let indoc_import = if consts.is_empty() {
        ""
    } else {
        "\n    use indoc::indoc;"
    };

    Ok(format!(
        "\n#[cfg(test)]\nmod test {{\n    use super::*;{indoc_import}{star1_block}{star2_block}{consts}\n}}\n"
    ))
}

/// Directory entries in sorted name order, each with its fixture kind.
/// Sorting here fixes the registration order, and with it every
/// disambiguation suffix downstream.
fn classified_entries(day_path: &Path) -> Result<Vec<(PathBuf, FixtureKind)>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(day_path)
        .map_err(|e| IoError::read_error(day_path, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(|e| IoError::read_error(day_path, e))?;
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let kind = FixtureKind::classify(&path)?;
            tracing::trace!(path = %path.display(), ?kind, "classified fixture");
            Ok((path, kind))
        })
        .collect()
}

fn join_block(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("\n\n{}", lines.join("\n"))
    }
}
