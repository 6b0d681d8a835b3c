//! The dynamic value handle at the center of the LxSON data model.

use std::any::Any;
use std::cell::{RefCell, RefMut};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::Result;
use crate::convert::FromValue;
use crate::error::Error;
use crate::iter::ValueIter;
use crate::kind::Kind;
use crate::map::{DecoratedMap, Flags, OrderedMap};
use crate::validate::Validator;

/// Dynamic value holding exactly one [`Kind`] at a time.
///
/// Scalar kinds (`Bool`, `Int`, `Float`, `String`) behave as plain values:
/// every copy is independent. Container and handle kinds are reference-counted
/// handles: `Clone` produces another handle to the *same* storage, and
/// mutations made through one handle are observed through every other. The
/// only way to sever that sharing is an explicit [`Value::deep_clone`].
///
/// A default-constructed value is `Undefined`. Writing into an `Undefined`
/// value through an indexed or keyed operation vivifies it into the matching
/// container kind first.
#[derive(Clone, Default)]
pub struct Value {
    repr: Repr,
}

#[derive(Clone, Default)]
enum Repr {
    #[default]
    Undefined,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Rc<str>),
    Array(Rc<RefCell<Vec<Value>>>),
    Map(Rc<RefCell<BTreeMap<String, Value>>>),
    Ordered(Rc<RefCell<OrderedMap>>),
    Decorated(Rc<RefCell<DecoratedMap>>),
    Handle(Rc<HandleRepr>),
}

struct HandleRepr {
    type_name: Rc<str>,
    object: Rc<dyn Any>,
}

impl Value {
    /// Creates an empty array value.
    #[must_use]
    pub fn array() -> Self {
        Self {
            repr: Repr::Array(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    /// Creates an empty unordered map value.
    #[must_use]
    pub fn map() -> Self {
        Self {
            repr: Repr::Map(Rc::new(RefCell::new(BTreeMap::new()))),
        }
    }

    /// Creates an empty insertion-ordered map value.
    #[must_use]
    pub fn ordered_map() -> Self {
        Self {
            repr: Repr::Ordered(Rc::new(RefCell::new(OrderedMap::new()))),
        }
    }

    /// Creates an empty decorated (schema-validated) map value.
    #[must_use]
    pub fn decorated_map() -> Self {
        Self {
            repr: Repr::Decorated(Rc::new(RefCell::new(DecoratedMap::new()))),
        }
    }

    /// Wraps a native object in a handle value.
    ///
    /// The type name is carried for diagnostics and introspection; the object
    /// itself is recovered with [`Value::downcast_handle`].
    #[must_use]
    pub fn handle<T: Any>(type_name: impl Into<Rc<str>>, object: T) -> Self {
        Self {
            repr: Repr::Handle(Rc::new(HandleRepr {
                type_name: type_name.into(),
                object: Rc::new(object),
            })),
        }
    }

    fn from_cells(cells: Vec<Value>) -> Self {
        Self {
            repr: Repr::Array(Rc::new(RefCell::new(cells))),
        }
    }

    /// Returns the active kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match &self.repr {
            Repr::Undefined => Kind::Undefined,
            Repr::Bool(_) => Kind::Bool,
            Repr::Int(_) => Kind::Int,
            Repr::Float(_) => Kind::Float,
            Repr::String(_) => Kind::String,
            Repr::Array(_) => Kind::Array,
            Repr::Map(_) => Kind::Map,
            Repr::Ordered(_) => Kind::OrderedMap,
            Repr::Decorated(_) => Kind::DecoratedMap,
            Repr::Handle(_) => Kind::Handle,
        }
    }

    /// Returns true if this value is undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self.repr, Repr::Undefined)
    }

    /// Returns true if this value holds any kind other than undefined.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Returns true if this value is a bool.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self.repr, Repr::Bool(_))
    }

    /// Returns true if this value is an int.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self.repr, Repr::Int(_))
    }

    /// Returns true if this value is a float.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self.repr, Repr::Float(_))
    }

    /// Returns true if this value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self.repr, Repr::String(_))
    }

    /// Returns true if this value is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.repr, Repr::Array(_))
    }

    /// Returns true if this value is any map-family kind.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(
            self.repr,
            Repr::Map(_) | Repr::Ordered(_) | Repr::Decorated(_)
        )
    }

    /// Returns true if this value is a handle to a native object.
    #[must_use]
    pub const fn is_handle(&self) -> bool {
        matches!(self.repr, Repr::Handle(_))
    }

    /// Returns the element count of a container value.
    ///
    /// # Errors
    /// Returns a type error for non-container kinds.
    pub fn size(&self) -> Result<usize> {
        match &self.repr {
            Repr::Array(cells) => Ok(cells.borrow().len()),
            Repr::Map(entries) => Ok(entries.borrow().len()),
            Repr::Ordered(entries) => Ok(entries.borrow().len()),
            Repr::Decorated(entries) => Ok(entries.borrow().len()),
            _ => Err(Error::wrong_kind("size", self.kind())),
        }
    }

    /// Reads the array element at `index`.
    ///
    /// An out-of-range index reads as `Undefined`; this is the graceful path
    /// content code relies on when probing optional elements.
    ///
    /// # Errors
    /// Returns a type error for non-array kinds.
    pub fn at(&self, index: usize) -> Result<Value> {
        match &self.repr {
            Repr::Array(cells) => Ok(cells.borrow().get(index).cloned().unwrap_or_default()),
            _ => Err(Error::wrong_kind("at", self.kind())),
        }
    }

    /// Writes the array element at `index`.
    ///
    /// Writing at exactly `size()` extends the array by one slot.
    ///
    /// # Errors
    /// Returns a type error for non-array kinds and an index error for any
    /// other out-of-range index.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        match &self.repr {
            Repr::Array(cells) => {
                let mut items = cells.borrow_mut();
                match index.cmp(&items.len()) {
                    Ordering::Less => items[index] = value.into(),
                    Ordering::Equal => items.push(value.into()),
                    Ordering::Greater => {
                        return Err(Error::index_out_of_bounds(index, items.len()));
                    }
                }
                Ok(())
            }
            _ => Err(Error::wrong_kind("set_at", self.kind())),
        }
    }

    /// Appends a value, vivifying an undefined value into an array first.
    ///
    /// # Errors
    /// Returns a type error for defined non-array kinds.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        if self.is_undefined() {
            *self = Self::array();
        }
        match &self.repr {
            Repr::Array(cells) => {
                cells.borrow_mut().push(value.into());
                Ok(())
            }
            _ => Err(Error::wrong_kind("push", self.kind())),
        }
    }

    /// Returns a mutable reference guard to the array slot at `index`,
    /// vivifying an undefined value into an array first.
    ///
    /// Indexing at exactly `size()` appends an `Undefined` slot before
    /// returning it, so `v.at_mut(v.size()?)?` always lands on a fresh slot.
    ///
    /// # Errors
    /// Returns a type error for defined non-array kinds and an index error
    /// beyond `size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<ValueMut<'_>> {
        if self.is_undefined() {
            *self = Self::array();
        }
        match &self.repr {
            Repr::Array(cells) => {
                {
                    let mut items = cells.borrow_mut();
                    match index.cmp(&items.len()) {
                        Ordering::Less => {}
                        Ordering::Equal => items.push(Value::default()),
                        Ordering::Greater => {
                            return Err(Error::index_out_of_bounds(index, items.len()));
                        }
                    }
                }
                Ok(ValueMut {
                    slot: RefMut::map(cells.borrow_mut(), |items| &mut items[index]),
                })
            }
            _ => Err(Error::wrong_kind("at_mut", self.kind())),
        }
    }

    /// Returns a mutable reference guard to the map slot for `key`, vivifying
    /// an undefined value into a map and an absent key into an `Undefined`
    /// slot first.
    ///
    /// # Errors
    /// Returns a type error for defined non-map kinds, and for decorated maps,
    /// whose registered keys must be written through the validated
    /// [`Value::insert`] path.
    pub fn key_mut(&mut self, key: &str) -> Result<ValueMut<'_>> {
        if self.is_undefined() {
            *self = Self::map();
        }
        match &self.repr {
            Repr::Map(entries) => Ok(ValueMut {
                slot: RefMut::map(entries.borrow_mut(), |entries| {
                    entries.entry(key.to_owned()).or_default()
                }),
            }),
            Repr::Ordered(entries) => Ok(ValueMut {
                slot: RefMut::map(entries.borrow_mut(), |entries| entries.entry(key)),
            }),
            _ => Err(Error::wrong_kind("key_mut", self.kind())),
        }
    }

    /// Looks up `key` without ever vivifying; absent keys read as `Undefined`.
    ///
    /// # Errors
    /// Returns a type error for non-map kinds.
    pub fn find(&self, key: &str) -> Result<Value> {
        match &self.repr {
            Repr::Map(entries) => Ok(entries.borrow().get(key).cloned().unwrap_or_default()),
            Repr::Ordered(entries) => Ok(entries.borrow().find(key).cloned().unwrap_or_default()),
            Repr::Decorated(entries) => {
                Ok(entries.borrow().find(key).cloned().unwrap_or_default())
            }
            _ => Err(Error::wrong_kind("find", self.kind())),
        }
    }

    /// Returns true if the map contains `key`.
    ///
    /// # Errors
    /// Returns a type error for non-map kinds.
    pub fn has_key(&self, key: &str) -> Result<bool> {
        match &self.repr {
            Repr::Map(entries) => Ok(entries.borrow().contains_key(key)),
            Repr::Ordered(entries) => Ok(entries.borrow().contains_key(key)),
            Repr::Decorated(entries) => Ok(entries.borrow().contains_key(key)),
            _ => Err(Error::wrong_kind("has_key", self.kind())),
        }
    }

    /// Inserts or overwrites `key`, vivifying an undefined value into an
    /// unordered map first.
    ///
    /// On a decorated map the write is validated against the key's registered
    /// flags and validator; a rejected write leaves the prior value unchanged.
    ///
    /// # Errors
    /// Returns a type error for defined non-map kinds and a validation error
    /// for rejected decorated-map writes.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        if self.is_undefined() {
            *self = Self::map();
        }
        match &self.repr {
            Repr::Map(entries) => {
                entries.borrow_mut().insert(key.to_owned(), value.into());
                Ok(())
            }
            Repr::Ordered(entries) => {
                entries.borrow_mut().insert(key, value.into());
                Ok(())
            }
            Repr::Decorated(entries) => entries.borrow_mut().insert(key, value.into()),
            _ => Err(Error::wrong_kind("insert", self.kind())),
        }
    }

    /// Registers schema for `key` on a decorated map and stores `default` as
    /// its current value, vivifying an undefined value into a decorated map
    /// first. The default is stored as-is, without running the validator.
    ///
    /// # Errors
    /// Returns a type error for defined non-decorated kinds.
    ///
    /// # Panics
    /// Panics if `key` is already registered; registering the same key twice
    /// is a programmer error, not a recoverable condition.
    pub fn add(
        &mut self,
        key: &str,
        flags: Flags,
        validator: Option<Validator>,
        default: impl Into<Value>,
    ) -> Result<()> {
        if self.is_undefined() {
            *self = Self::decorated_map();
        }
        match &self.repr {
            Repr::Decorated(entries) => {
                entries.borrow_mut().add(key, flags, validator, default.into());
                Ok(())
            }
            _ => Err(Error::wrong_kind("add", self.kind())),
        }
    }

    /// Returns the flags registered for `key` on a decorated map.
    ///
    /// Unregistered keys report empty flags.
    ///
    /// # Errors
    /// Returns a type error for non-decorated kinds.
    pub fn flags(&self, key: &str) -> Result<Flags> {
        match &self.repr {
            Repr::Decorated(entries) => Ok(entries.borrow().flags(key)),
            _ => Err(Error::wrong_kind("flags", self.kind())),
        }
    }

    /// Returns an iterator over a container's elements.
    ///
    /// The iterator takes a snapshot of the container's entries at this call;
    /// elements of container kind still share storage with the tree.
    ///
    /// # Errors
    /// Returns a type error for non-container kinds.
    pub fn iter(&self) -> Result<ValueIter> {
        match &self.repr {
            Repr::Array(cells) => Ok(ValueIter::from_values(cells.borrow().iter().cloned())),
            Repr::Map(entries) => Ok(ValueIter::from_pairs(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            )),
            Repr::Ordered(entries) => Ok(ValueIter::from_pairs(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.clone())),
            )),
            Repr::Decorated(entries) => Ok(ValueIter::from_pairs(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.clone())),
            )),
            _ => Err(Error::wrong_kind("iter", self.kind())),
        }
    }

    /// Compares two values for equality.
    ///
    /// Defined only between two `Undefined`s or two scalars of the same kind;
    /// container and handle comparison is not yet supported.
    ///
    /// # Errors
    /// Returns a type error for any other kind pairing.
    pub fn equal(&self, other: &Value) -> Result<bool> {
        match (&self.repr, &other.repr) {
            (Repr::Undefined, Repr::Undefined) => Ok(true),
            (Repr::Bool(a), Repr::Bool(b)) => Ok(a == b),
            (Repr::Int(a), Repr::Int(b)) => Ok(a == b),
            (Repr::Float(a), Repr::Float(b)) => Ok(a == b),
            (Repr::String(a), Repr::String(b)) => Ok(a == b),
            _ => Err(Error::wrong_kind(
                "equality comparison (not yet supported)",
                self.kind(),
            )),
        }
    }

    /// Returns true if this value equals `s`, directly or after rendering the
    /// scalar to its textual form.
    #[must_use]
    pub fn equiv(&self, s: &str) -> bool {
        match &self.repr {
            Repr::String(value) => &**value == s,
            Repr::Int(n) => n.to_string() == s,
            Repr::Float(n) => n.to_string() == s,
            Repr::Bool(b) => (*b && s == "true") || (!*b && s == "false"),
            _ => false,
        }
    }

    /// Returns a fully independent deep copy of this value.
    ///
    /// The result shares no container storage with the source; deep-cloning a
    /// deep clone is equivalent to deep-cloning once. Handle values receive a
    /// fresh handle slot, but the opaque native object itself is re-shared
    /// since it cannot be copied.
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        let repr = match &self.repr {
            Repr::Undefined => Repr::Undefined,
            Repr::Bool(b) => Repr::Bool(*b),
            Repr::Int(n) => Repr::Int(*n),
            Repr::Float(n) => Repr::Float(*n),
            Repr::String(s) => Repr::String(Rc::clone(s)),
            Repr::Array(cells) => Repr::Array(Rc::new(RefCell::new(
                cells.borrow().iter().map(Value::deep_clone).collect(),
            ))),
            Repr::Map(entries) => Repr::Map(Rc::new(RefCell::new(
                entries
                    .borrow()
                    .iter()
                    .map(|(key, value)| (key.clone(), value.deep_clone()))
                    .collect(),
            ))),
            Repr::Ordered(entries) => {
                Repr::Ordered(Rc::new(RefCell::new(entries.borrow().deep_clone())))
            }
            Repr::Decorated(entries) => {
                Repr::Decorated(Rc::new(RefCell::new(entries.borrow().deep_clone())))
            }
            Repr::Handle(handle) => Repr::Handle(Rc::new(HandleRepr {
                type_name: Rc::clone(&handle.type_name),
                object: Rc::clone(&handle.object),
            })),
        };
        Value { repr }
    }

    /// Returns true if this value's storage is currently referenced by more
    /// than one handle. Diagnostic only; scalar kinds always report false.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        match &self.repr {
            Repr::Array(cells) => Rc::strong_count(cells) > 1,
            Repr::Map(entries) => Rc::strong_count(entries) > 1,
            Repr::Ordered(entries) => Rc::strong_count(entries) > 1,
            Repr::Decorated(entries) => Rc::strong_count(entries) > 1,
            Repr::Handle(handle) => Rc::strong_count(handle) > 1,
            _ => false,
        }
    }

    /// Returns the type name carried by a handle value.
    ///
    /// # Errors
    /// Returns a type error for non-handle kinds.
    pub fn handle_type(&self) -> Result<&str> {
        match &self.repr {
            Repr::Handle(handle) => Ok(&handle.type_name),
            _ => Err(Error::wrong_kind("handle_type", self.kind())),
        }
    }

    /// Recovers the native object carried by a handle value.
    ///
    /// # Errors
    /// Returns a type error for non-handle kinds and when the carried object
    /// is not a `T`.
    pub fn downcast_handle<T: Any>(&self) -> Result<Rc<T>> {
        match &self.repr {
            Repr::Handle(handle) => Rc::clone(&handle.object)
                .downcast::<T>()
                .map_err(|_| Error::wrong_kind("downcast to the requested native type", Kind::Handle)),
            _ => Err(Error::wrong_kind("downcast_handle", self.kind())),
        }
    }
}

// Conversion layer
impl Value {
    /// Returns the payload of a `Bool` value.
    ///
    /// # Errors
    /// Returns a type error for every other kind.
    pub fn as_bool(&self) -> Result<bool> {
        match &self.repr {
            Repr::Bool(b) => Ok(*b),
            _ => Err(Error::wrong_kind("conversion to bool", self.kind())),
        }
    }

    /// Returns the payload of an `Int` value.
    ///
    /// There is no implicit narrowing; a `Float` does not convert.
    ///
    /// # Errors
    /// Returns a type error for every other kind.
    pub fn as_int(&self) -> Result<i64> {
        match &self.repr {
            Repr::Int(n) => Ok(*n),
            _ => Err(Error::wrong_kind("conversion to int", self.kind())),
        }
    }

    /// Returns the payload of a `Float` value, upcasting an `Int`.
    ///
    /// # Errors
    /// Returns a type error for non-numeric kinds.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64> {
        match &self.repr {
            Repr::Float(n) => Ok(*n),
            Repr::Int(n) => Ok(*n as f64),
            _ => Err(Error::wrong_kind("conversion to float", self.kind())),
        }
    }

    /// Borrows the payload of a `String` value.
    ///
    /// # Errors
    /// Returns a type error for every other kind.
    pub fn as_str(&self) -> Result<&str> {
        match &self.repr {
            Repr::String(s) => Ok(s),
            _ => Err(Error::wrong_kind("conversion to string", self.kind())),
        }
    }

    /// Returns an owned copy of a `String` value's payload.
    ///
    /// # Errors
    /// Returns a type error for every other kind.
    pub fn as_string(&self) -> Result<String> {
        self.as_str().map(str::to_owned)
    }

    /// Converts this value to `T` through its [`FromValue`] implementation.
    ///
    /// # Errors
    /// Returns a type error when this value's kind cannot convert to `T`.
    pub fn convert<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }

    /// Converts this value to `T`, returning `default` if the conversion
    /// fails for any reason.
    #[must_use]
    pub fn query<T: FromValue>(&self, default: T) -> T {
        self.convert().unwrap_or(default)
    }
}

/// Mutable reference guard into a container slot.
///
/// Dereferences to the slot's [`Value`]; the borrow of the owning container
/// is held for the guard's lifetime.
#[derive(Debug)]
pub struct ValueMut<'a> {
    slot: RefMut<'a, Value>,
}

impl Deref for ValueMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.slot
    }
}

impl DerefMut for ValueMut<'_> {
    fn deref_mut(&mut self) -> &mut Value {
        &mut self.slot
    }
}

// Typed equality helpers: strict kind + value match, never an error.

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(&self.repr, Repr::Int(n) if n == other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(&self.repr, Repr::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(&self.repr, Repr::Bool(b) if b == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(&self.repr, Repr::String(s) if &**s == *other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Undefined => write!(f, "undefined"),
            Repr::Bool(b) => write!(f, "{b}"),
            Repr::Int(n) => write!(f, "{n}"),
            Repr::Float(n) => write!(f, "{n}"),
            Repr::String(s) => write!(f, "{s:?}"),
            Repr::Array(cells) => {
                write!(f, "[")?;
                for (i, item) in cells.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
            Repr::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value:?}")?;
                }
                write!(f, "}}")
            }
            Repr::Ordered(entries) => write!(f, "{:?}", entries.borrow()),
            Repr::Decorated(entries) => write!(f, "{:?}", entries.borrow()),
            Repr::Handle(handle) => write!(f, "<handle {}>", handle.type_name),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Undefined => write!(f, "undefined"),
            Repr::Bool(b) => write!(f, "{b}"),
            Repr::Int(n) => write!(f, "{n}"),
            Repr::Float(n) => write!(f, "{n}"),
            Repr::String(s) => write!(f, "{s}"),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self {
            repr: Repr::Bool(b),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self { repr: Repr::Int(n) }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self {
            repr: Repr::Int(i64::from(n)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self {
            repr: Repr::Float(n),
        }
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self {
            repr: Repr::Float(f64::from(n)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self {
            repr: Repr::String(s.into()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self {
            repr: Repr::String(s.into()),
        }
    }
}

impl From<(f64, f64)> for Value {
    fn from((x, y): (f64, f64)) -> Self {
        Self::from_cells(vec![Value::from(x), Value::from(y)])
    }
}

impl From<(f64, f64, f64)> for Value {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_cells(vec![Value::from(x), Value::from(y), Value::from(z)])
    }
}

impl From<(f64, f64, f64, f64)> for Value {
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        Self::from_cells(vec![
            Value::from(x),
            Value::from(y),
            Value::from(z),
            Value::from(w),
        ])
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::from_cells(items.into_iter().map(Into::into).collect())
    }
}
