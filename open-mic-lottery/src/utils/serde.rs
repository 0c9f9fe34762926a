use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Marker used by the signup sheet for a ticked box.
pub const FLAG_MARKER: &str = "X";

/// Whether a raw sheet value marks a ticked box.
pub fn is_marked(value: &str) -> bool {
    value.eq_ignore_ascii_case(FLAG_MARKER)
}

struct MarkedFlagVisitor;

impl<'de> Visitor<'de> for MarkedFlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a signup sheet cell")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        Ok(is_marked(value))
    }

    // Anything that is not text can't be the marker, so the box is not ticked.
    fn visit_bool<E: de::Error>(self, _: bool) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MarkedFlagVisitor)
    }
}

/// Deserialize a checkbox column: `true` only for an `X` (any case), `false` for
/// everything else, including empty cells, numbers and nulls.
pub fn deserialize_marked_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MarkedFlagVisitor)
}
