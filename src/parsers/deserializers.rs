use std::path::{Component, Path};

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Custom deserializer for snapshot IDs
///
/// The ID doubles as the content file name next to `entries.json`, so it must be a
/// single normal path component.
pub fn deserialize_snapshot_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.is_empty() {
        return Err(Error::custom("snapshot ID cannot be empty"));
    }

    let mut components = Path::new(&s).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !s.contains(['/', '\\']) => Ok(s),
        _ => Err(Error::custom(format!("snapshot ID must be a plain file name: {}", s))),
    }
}
