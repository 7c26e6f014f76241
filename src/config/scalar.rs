//! Lenient field deserializers used by the schema.
//!
//! Configuration authors write `port: 8080` as often as `port: "8080"`, and an
//! empty key (`routers:`) parses as YAML `null`. Scalars are read through
//! `deserialize_str`, so a `String` field keeps the text exactly as written
//! (`1.10`, `0x1F`, `08080`); `null` behaves like a missing key. Sequences or
//! mappings in a scalar position remain an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Deserialize a flat scalar-to-scalar mapping; `null` yields an empty map
/// and a `null` value an empty string.
pub(crate) fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

/// Deserialize `T`, treating `null` as `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
