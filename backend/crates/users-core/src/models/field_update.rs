//! Optional field in a partial update.
//!
//! An omitted field and a field explicitly set to a value are different
//! requests; `FieldUpdate` keeps them apart instead of coalescing `None`.

/// A single field of a partial update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field was not supplied; keep the stored value
    Unchanged,
    /// Field was supplied; overwrite the stored value
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FieldUpdate<U> {
        match self {
            Self::Set(value) => FieldUpdate::Set(f(value)),
            Self::Unchanged => FieldUpdate::Unchanged,
        }
    }

    /// Like [`FieldUpdate::map`] but for fallible conversions such as validation.
    /// `Unchanged` never calls `f`.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<FieldUpdate<U>, E> {
        match self {
            Self::Set(value) => f(value).map(FieldUpdate::Set),
            Self::Unchanged => Ok(FieldUpdate::Unchanged),
        }
    }

    /// Overwrite `target` if this field was supplied
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Unchanged,
        }
    }
}
