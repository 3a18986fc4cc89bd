//! Variable store for one interpreter session.
//!
//! A flat map from identifier to `Value`. There is a single scope: the
//! language has no blocks or functions. Every binding is created by a
//! declaration and keeps its declared `ValueKind` until the store is dropped.

use rustc_hash::FxHashMap;

use lino_ir::{Value, ValueKind};


/// A value whose kind differs from the kind already bound to the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindMismatch {
    /// Kind the variable was declared with.
    pub declared: ValueKind,
    /// Kind of the rejected value.
    pub found: ValueKind,
}

/// Error returned by `VariableStore::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No variable with that name has been declared.
    Undeclared,
    /// The new value would change the variable's kind.
    KindMismatch(KindMismatch),
}

/// Mapping from identifier to its current value.
///
/// Invariant: every name present was added by `declare`, and its kind never
/// changes afterwards. Both mutating operations check the invariant and leave
/// the store untouched on failure.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    bindings: FxHashMap<String, Value>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        VariableStore {
            bindings: FxHashMap::default(),
        }
    }

    /// Declare `name`, or re-declare it with a value of the same kind.
    ///
    /// Returns the replaced value on re-declaration.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<Option<Value>, KindMismatch> {
        self.check_kind(name, &value)?;
        let previous = self.bindings.insert(name.to_owned(), value);
        tracing::debug!(name, redeclared = previous.is_some(), "declared variable");
        Ok(previous)
    }

    /// Replace the value of an already declared variable.
    ///
    /// Returns the replaced value.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, AssignError> {
        self.check_kind(name, &value)
            .map_err(AssignError::KindMismatch)?;
        let slot = self
            .bindings
            .get_mut(name)
            .ok_or(AssignError::Undeclared)?;
        tracing::debug!(name, "assigned variable");
        Ok(std::mem::replace(slot, value))
    }

    /// Borrow the current value of `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// An independent copy of the current value of `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// The declared kind of `name`.
    #[inline]
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.bindings.get(name).map(Value::kind)
    }

    /// Whether `name` has been declared.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn check_kind(&self, name: &str, value: &Value) -> Result<(), KindMismatch> {
        match self.kind_of(name) {
            Some(declared) if declared != value.kind() => Err(KindMismatch {
                declared,
                found: value.kind(),
            }),
            _ => Ok(()),
        }
    }
}
