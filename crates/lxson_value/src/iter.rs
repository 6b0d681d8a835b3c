//! Iteration over container values.
//!
//! [`ValueIter`] snapshots a container's entries when it is created, so the
//! container may be mutated while iteration is in progress. The snapshot is
//! shallow; entries of container kind still share storage with the tree.

use crate::error::Error;
use crate::kind::Kind;
use crate::value::Value;
use crate::Result;

/// One element yielded while iterating a container value.
#[derive(Debug, Clone)]
pub struct IterEntry {
    key: Option<String>,
    value: Value,
}

impl IterEntry {
    /// Returns the entry's key.
    ///
    /// # Errors
    /// Returns a type error for entries of a keyless container (an array).
    pub fn key(&self) -> Result<&str> {
        self.key
            .as_deref()
            .ok_or_else(|| Error::wrong_kind("key", Kind::Array))
    }

    /// Returns the entry's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the entry, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Snapshot iterator over the entries of one container value.
///
/// Created by [`Value::iter`].
#[derive(Debug)]
pub struct ValueIter {
    entries: std::vec::IntoIter<IterEntry>,
}

impl ValueIter {
    pub(crate) fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            entries: values
                .into_iter()
                .map(|value| IterEntry { key: None, value })
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| IterEntry {
                    key: Some(key),
                    value,
                })
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl Iterator for ValueIter {
    type Item = IterEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for ValueIter {}
