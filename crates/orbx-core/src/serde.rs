// Module name shadows the `serde` crate; use `::serde` for the external crate.
use std::fmt::Display;

use ::serde::Serializer;

/// Serialize a number as its decimal string.
///
/// Used on response DTO fields holding big integers so JSON clients never parse
/// them into a lossy double.
pub fn to_decimal_string<T, S>(value: &T, s: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    s.collect_str(value)
}
