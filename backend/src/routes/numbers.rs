//! Decoding of integer fields that upstream may write as whole floats
//! (`1.0`), as nullable integer columns often are.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

fn whole_u32<E: Error>(value: f64) -> Result<u32, E> {
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(E::custom(format!("expected a non-negative whole number, got {}", value)))
    }
}

/// `u32` from any JSON number with no fractional part.
pub(crate) fn u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    whole_u32(f64::deserialize(deserializer)?)
}

/// Nullable variant of [`u32_from_number`].
pub(crate) fn opt_u32_from_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(whole_u32)
        .transpose()
}
