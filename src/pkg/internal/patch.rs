use serde::{Deserialize, Deserializer};

/// Lets a patch tell "field absent" (`None`) apart from "field set to null"
/// (`Some(None)`). Pair with `#[serde(default)]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> core::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn deserialize_trimmed<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}
