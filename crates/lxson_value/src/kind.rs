//! Kind descriptors for dynamic values.
//!
//! Every [`Value`](crate::Value) holds exactly one kind at a time; operations
//! dispatch on it and error messages report it.

use std::fmt;

/// The closed set of kinds a value can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value (the default state).
    Undefined,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Immutable string.
    String,
    /// Ordered sequence of values.
    Array,
    /// String-keyed map with unspecified iteration order.
    Map,
    /// String-keyed map iterated in insertion order.
    OrderedMap,
    /// String-keyed map with per-key flags and validators.
    DecoratedMap,
    /// Opaque native object.
    Handle,
}

impl Kind {
    /// Returns true for the value-semantic kinds (copied, never shared).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float | Self::String)
    }

    /// Returns true for kinds that hold elements (arrays and all map variants).
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Map | Self::OrderedMap | Self::DecoratedMap
        )
    }

    /// Returns true for the map-family kinds.
    #[must_use]
    pub const fn is_map(self) -> bool {
        matches!(self, Self::Map | Self::OrderedMap | Self::DecoratedMap)
    }

    /// Returns true for kinds whose copies share storage until deep-cloned.
    #[must_use]
    pub const fn is_shared(self) -> bool {
        self.is_container() || matches!(self, Self::Handle)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
            Self::OrderedMap => "ordered map",
            Self::DecoratedMap => "decorated map",
            Self::Handle => "handle",
        };
        write!(f, "{name}")
    }
}
