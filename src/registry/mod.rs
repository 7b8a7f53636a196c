use std::fs;
use std::path::Path;

use crate::error::{IoError, NamingError, RegistryError};
use crate::naming::{NameCache, ResolvedNames, Tag};

/// Whether registered content is puzzle input or expected output. Picks the
/// prefix used to turn a purely numeric base name into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRole {
    Input,
    Output,
}

impl ContentRole {
    fn numeric_prefix(self) -> &'static str {
        match self {
            ContentRole::Input => "IN",
            ContentRole::Output => "OUT",
        }
    }
}

/// Content at or above this many characters is promoted to a named constant
/// even when it fits on one line.
const CONSTANT_THRESHOLD: usize = 100;

/// Closing delimiter of the emitted raw string literals. Content containing
/// it cannot be represented and is rejected.
const RAW_TERMINATOR: &str = "\"#";

/// Deduplicating store of file-derived text content.
///
/// Short single-line content becomes an inline string literal; everything
/// else is registered as a named constant through a [`NameCache`], so that
/// repeated fixtures share one declaration.
pub struct StringRegistry {
    cache: NameCache<String>,
}

impl StringRegistry {
    pub fn new() -> Self {
        Self {
            cache: NameCache::new(),
        }
    }

    /// Reads the fixture at `path` and returns a tag for its content.
    ///
    /// Trailing whitespace is stripped from the end of the whole content
    /// before anything else. Content byte-identical to an earlier
    /// registration returns the previously issued tag.
    pub fn register(
        &mut self,
        name: &str,
        role: ContentRole,
        path: &Path,
    ) -> Result<Tag, RegistryError> {
        let raw = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        let content = raw.trim_end();

        for (id, value) in self.cache.iter() {
            if value == content {
                tracing::debug!(path = %path.display(), "deduplicated fixture content");
                return Ok(Tag::Deferred(id));
            }
        }

        if content.chars().count() >= CONSTANT_THRESHOLD || content.contains('\n') {
            let id = self.cache.register(
                &name.to_uppercase(),
                role.numeric_prefix(),
                content.to_string(),
            );
            Ok(Tag::Deferred(id))
        } else if content.contains('"') {
            if content.contains(RAW_TERMINATOR) {
                return Err(RegistryError::RawDelimiterInLiteral {
                    path: path.to_path_buf(),
                });
            }
            Ok(Tag::Literal(format!("r#\"{content}\"#")))
        } else {
            Ok(Tag::Literal(format!("\"{content}\"")))
        }
    }

    pub fn resolve(&self) -> Result<ResolvedNames, NamingError> {
        self.cache.resolve()
    }

    /// Renders one `const NAME: &str = indoc!{…};` declaration per stored
    /// value, in registration order, separated by blank lines.
    ///
    /// Inline literal tags never enter the cache, so they never appear here.
    pub fn dump(&self, names: &ResolvedNames) -> Result<String, RegistryError> {
        let mut result = String::new();
        for (id, value) in self.cache.iter() {
            let name = names.get(id)?;
            let raw_str = value.contains('"');

            result.push_str(&format!("\n\n    const {name}: &str = indoc!{{"));
            if raw_str {
                if value.contains(RAW_TERMINATOR) {
                    return Err(RegistryError::RawDelimiterInConstant {
                        name: name.to_string(),
                    });
                }
                result.push_str("r#\"\n");
            } else {
                result.push_str("\"\n");
            }

            for line in value.lines() {
                let line = line.trim_end();
                if line.is_empty() {
                    result.push('\n');
                } else {
                    result.push_str("        ");
                    result.push_str(line);
                    result.push('\n');
                }
            }

            result.push_str(if raw_str { "    \"#};" } else { "    \"};" });
        }
        Ok(result)
    }
}

impl Default for StringRegistry {
    fn default() -> Self {
        Self::new()
    }
}
