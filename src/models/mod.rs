pub mod collectible;
pub mod insights;
pub mod sale;

pub use collectible::*;
pub use insights::*;
pub use sale::*;

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same way as a missing key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
