use serde::de::DeserializeOwned;

/// Decodes the first JSON value in the body. Anything after it is ignored,
/// since the service may append data (such as a trailing newline or stray
/// characters) after the object.
pub(crate) fn decode_first_json_value<T: DeserializeOwned>(
    body: &str,
) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_str(body)
        .into_iter::<T>()
        .next()
    {
        Some(result) => result,
        // Blank body; let serde_json produce its usual EOF error.
        None => serde_json::from_str(body),
    }
}
