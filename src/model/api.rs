use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Deserializes a field into `Option<Option<T>>` so that an explicitly null
/// value can be told apart from an absent one.
///
/// Absent fields stay `None` through `#[serde(default)]`; a present field
/// becomes `Some(None)` for JSON null and `Some(Some(value))` otherwise.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
