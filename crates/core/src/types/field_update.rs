//! Tri-state field for partial updates.

use serde::{Deserialize, Deserializer};

/// One field of a partial update request.
///
/// Distinguishes a field the client left out from one it sent as `null`.
/// Use with `#[serde(default)]` so missing keys become [`FieldUpdate::Unchanged`]:
///
/// ```
/// use serde::Deserialize;
/// use tickoff_core::FieldUpdate;
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default)]
///     title: FieldUpdate<String>,
/// }
///
/// let absent: Patch = serde_json::from_str("{}").unwrap();
/// assert_eq!(absent.title, FieldUpdate::Unchanged);
///
/// let null: Patch = serde_json::from_str(r#"{"title":null}"#).unwrap();
/// assert_eq!(null.title, FieldUpdate::Null);
///
/// let set: Patch = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
/// assert_eq!(set.title, FieldUpdate::Set("Buy milk".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// The field was not present in the request.
    #[default]
    Unchanged,
    /// The field was present with an explicit `null`.
    Null,
    /// The field was present with a value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// The new value, if one was provided.
    ///
    /// Fields of a todo are never nullable, so `Null` keeps the current value
    /// just like `Unchanged`.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged | Self::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_value() {
        assert_eq!(FieldUpdate::Set(true).into_value(), Some(true));
        assert_eq!(FieldUpdate::<bool>::Null.into_value(), None);
        assert_eq!(FieldUpdate::<bool>::Unchanged.into_value(), None);
    }
}
