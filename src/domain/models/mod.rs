pub mod destination;
pub mod package;
pub mod blog;
pub mod comment;
pub mod booking;

use serde::{Deserialize, Deserializer};

/// For draft fields that can be cleared: a missing key deserializes to
/// `None` (via `#[serde(default)]`), an explicit `null` to `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
