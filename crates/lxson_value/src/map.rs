//! Map storage variants backing the map-family value kinds.
//!
//! [`OrderedMap`] remembers insertion order; [`DecoratedMap`] attaches
//! per-key flags and validator callbacks so writes can be checked and
//! normalized before they land.

use crate::error::Error;
use crate::validate::Validator;
use crate::value::Value;
use crate::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of per-key properties registered on a [`DecoratedMap`].
///
/// The accepted-coercion bits are introspective metadata for external
/// consumers (e.g., a CLI binder deciding how to parse a flag); only
/// [`Flags::READ_ONLY`] changes write behavior.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// No properties registered.
    pub const NONE: Self = Self(0);
    /// The key is meant to be written from string input.
    pub const ACCEPTS_STRING: Self = Self(1);
    /// The key is meant to be written from integer input.
    pub const ACCEPTS_INT: Self = Self(1 << 1);
    /// The key rejects all writes after registration.
    pub const READ_ONLY: Self = Self(1 << 2);

    /// Returns true if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut first = true;
        for (bit, name) in [
            (Self::ACCEPTS_STRING, "ACCEPTS_STRING"),
            (Self::ACCEPTS_INT, "ACCEPTS_INT"),
            (Self::READ_ONLY, "READ_ONLY"),
        ] {
            if self.contains(bit) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A string-keyed map that iterates in insertion order.
///
/// Re-inserting an existing key updates the value in place and keeps the
/// key's original position.
#[derive(Clone, Default)]
pub struct OrderedMap {
    order: Vec<String>,
    entries: BTreeMap<String, Value>,
}

impl OrderedMap {
    /// Creates an empty ordered map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts or updates `key`. New keys append to the iteration order;
    /// existing keys keep their position.
    pub fn insert(&mut self, key: &str, value: Value) {
        if self.entries.insert(key.to_owned(), value).is_none() {
            self.order.push(key.to_owned());
        }
    }

    /// Returns a mutable reference to the slot for `key`, inserting an
    /// undefined slot (appended to the iteration order) if absent.
    pub fn entry(&mut self, key: &str) -> &mut Value {
        if !self.entries.contains_key(key) {
            self.order.push(key.to_owned());
        }
        self.entries.entry(key.to_owned()).or_default()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get_key_value(key.as_str()))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns an independent copy whose values are themselves deep clones.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), value.deep_clone()))
                .collect(),
        }
    }
}

impl fmt::Debug for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        write!(f, "}}")
    }
}

/// One registered slot of a [`DecoratedMap`].
#[derive(Clone)]
struct DecoratedEntry {
    flags: Flags,
    validator: Option<Validator>,
    value: Value,
}

/// A string-keyed map whose registered keys carry flags and an optional
/// validator callback that every subsequent write must pass.
#[derive(Clone, Default)]
pub struct DecoratedMap {
    entries: BTreeMap<String, DecoratedEntry>,
}

impl DecoratedMap {
    /// Creates an empty decorated map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up the current value for `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the flags registered for `key`, or [`Flags::NONE`] if the key
    /// is absent or was stored without registration.
    #[must_use]
    pub fn flags(&self, key: &str) -> Flags {
        self.entries.get(key).map_or(Flags::NONE, |entry| entry.flags)
    }

    /// Registers `key` with its flags and validator, storing `default` as the
    /// current value. The default is stored as-is; the validator first runs on
    /// the next [`DecoratedMap::insert`].
    ///
    /// # Panics
    /// Panics if `key` is already registered.
    pub fn add(&mut self, key: &str, flags: Flags, validator: Option<Validator>, default: Value) {
        assert!(
            !self.entries.contains_key(key),
            "decorated map key '{key}' registered twice"
        );
        self.entries.insert(
            key.to_owned(),
            DecoratedEntry {
                flags,
                validator,
                value: default,
            },
        );
    }

    /// Writes `value` to `key`, running the key's registered validator.
    ///
    /// A validator may normalize the incoming value; the value it returns is
    /// what gets stored. Writes to unregistered keys are stored unvalidated
    /// with empty flags.
    ///
    /// # Errors
    /// Returns a validation error if the key is read-only or the validator
    /// rejects the value; the prior value is left unchanged.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<()> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                if entry.flags.contains(Flags::READ_ONLY) {
                    return Err(Error::validation(key, "key is read-only"));
                }
                let accepted = match &entry.validator {
                    Some(validator) => validator(&value),
                    None => Some(value),
                };
                match accepted {
                    Some(normalized) => {
                        entry.value = normalized;
                        Ok(())
                    }
                    None => Err(Error::validation(key, "value rejected by validator")),
                }
            }
            None => {
                self.entries.insert(
                    key.to_owned(),
                    DecoratedEntry {
                        flags: Flags::NONE,
                        validator: None,
                        value,
                    },
                );
                Ok(())
            }
        }
    }

    /// Iterates `(key, current value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), &entry.value))
    }

    /// Returns an independent copy whose values are deep clones. Validators
    /// are shared with the original; they are stateless callbacks.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| {
                    (
                        key.clone(),
                        DecoratedEntry {
                            flags: entry.flags,
                            validator: entry.validator.clone(),
                            value: entry.value.deep_clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl fmt::Debug for DecoratedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        write!(f, "}}")
    }
}
