use serde::{Deserialize, Deserializer};

/// Form inputs always carry a value, so a `null` from the client reads
/// as an empty input rather than a parse failure
pub fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let input_string: Option<String> = Option::deserialize(deserializer)?;

    Ok(input_string.unwrap_or_default())
}
