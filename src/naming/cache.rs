use std::collections::HashMap;

use crate::error::NamingError;

use super::{ResolvedNames, TagId};

/// Collision-aware naming table with a two-phase register/resolve protocol.
///
/// Values are registered under a logical key and receive an opaque [`TagId`];
/// once every registration for a run is in, [`NameCache::resolve`] assigns
/// each entry its final unique display name. Keys keep their insertion order
/// and entries keep their registration order within a key.
pub struct NameCache<T> {
    buckets: Vec<Bucket<T>>,
    index: HashMap<String, usize>,
    issued: usize,
}

struct Bucket<T> {
    key: String,
    entries: Vec<(TagId, T)>,
}

impl<T> NameCache<T> {
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
            issued: 0,
        }
    }

    /// Registers `value` under `name` and returns its handle.
    ///
    /// A purely numeric name is rewritten to `numeric_prefix + name` before
    /// lookup, so that the eventual display name is a valid identifier.
    pub fn register(&mut self, name: &str, numeric_prefix: &str, value: T) -> TagId {
        let key = if is_all_digits(name) {
            format!("{numeric_prefix}{name}")
        } else {
            name.to_string()
        };

        let id = TagId(self.issued);
        self.issued += 1;

        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].entries.push((id, value)),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    key,
                    entries: vec![(id, value)],
                });
            }
        }
        id
    }

    /// All (handle, value) pairs in key-insertion order, then registration
    /// order within each key.
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &T)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.entries.iter().map(|(id, value)| (*id, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Assigns final names to every registered entry.
    ///
    /// A key with a single entry resolves to the key itself. Colliding
    /// entries get a one-character suffix in registration order: digits when
    /// the key does not already end in one, otherwise letters matching the
    /// case of the key's first character. More collisions than the suffix
    /// alphabet holds is an error.
    pub fn resolve(&self) -> Result<ResolvedNames, NamingError> {
        let mut names = vec![String::new(); self.issued];

        for bucket in &self.buckets {
            if let [(id, _)] = bucket.entries.as_slice() {
                names[id.index()] = bucket.key.clone();
                continue;
            }

            let alphabet = SuffixAlphabet::for_key(&bucket.key);
            if bucket.entries.len() > alphabet.capacity() {
                return Err(NamingError::SuffixesExhausted {
                    key: bucket.key.clone(),
                    count: bucket.entries.len(),
                });
            }

            for (offset, (id, _)) in bucket.entries.iter().enumerate() {
                names[id.index()] = format!("{}{}", bucket.key, alphabet.suffix(offset));
            }
        }

        Ok(ResolvedNames::new(names))
    }
}

impl<T> Default for NameCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixAlphabet {
    Digits,
    Upper,
    Lower,
}

impl SuffixAlphabet {
    /// Prefer numeric suffixes unless the key already ends with a digit.
    fn for_key(key: &str) -> Self {
        if !key.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            Self::Digits
        } else if key.chars().next().is_some_and(char::is_uppercase) {
            Self::Upper
        } else {
            Self::Lower
        }
    }

    fn capacity(self) -> usize {
        match self {
            Self::Digits => 9,
            Self::Upper | Self::Lower => 26,
        }
    }

    fn suffix(self, offset: usize) -> char {
        let first = match self {
            Self::Digits => b'1',
            Self::Upper => b'A',
            Self::Lower => b'a',
        };
        (first + offset as u8) as char
    }
}

fn is_all_digits(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_digit())
}
