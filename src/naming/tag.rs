use crate::error::NamingError;

/// Handle issued by a [`NameCache`](super::NameCache) at registration time.
///
/// Carries no name of its own; the final display name only exists once the
/// cache has been resolved into a [`ResolvedNames`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub(super) usize);

impl TagId {
    pub(super) fn index(self) -> usize {
        self.0
    }
}

/// Reference to a piece of generated text: either an inline literal that
/// needed no naming pass, or a deferred handle into a name cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Literal(String),
    Deferred(TagId),
}

impl Tag {
    /// Final display text for this tag.
    ///
    /// Deferred tags are looked up in `names`; asking for a tag the table
    /// does not know is a [`NamingError::UnresolvedTag`].
    pub fn render<'a>(&'a self, names: &'a ResolvedNames) -> Result<&'a str, NamingError> {
        match self {
            Tag::Literal(text) => Ok(text),
            Tag::Deferred(id) => names.get(*id),
        }
    }
}

/// Lookup table produced by a resolution pass over one [`NameCache`].
#[derive(Debug, Clone, Default)]
pub struct ResolvedNames {
    names: Vec<String>,
}

impl ResolvedNames {
    pub(super) fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn get(&self, id: TagId) -> Result<&str, NamingError> {
        self.names
            .get(id.index())
            .map(String::as_str)
            .ok_or(NamingError::UnresolvedTag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_renders_without_table() {
        let tag = Tag::Literal("\"10\"".to_string());
        let names = ResolvedNames::default();
        assert_eq!(tag.render(&names).unwrap(), "\"10\"");
    }

    #[test]
    fn test_deferred_render_before_resolution_is_an_error() {
        let tag = Tag::Deferred(TagId(0));
        let names = ResolvedNames::default();
        assert!(matches!(
            tag.render(&names),
            Err(NamingError::UnresolvedTag)
        ));
    }

    #[test]
    fn test_deferred_renders_from_table() {
        let tag = Tag::Deferred(TagId(1));
        let names = ResolvedNames::new(vec!["IN1".to_string(), "ME".to_string()]);
        assert_eq!(tag.render(&names).unwrap(), "ME");
    }
}
