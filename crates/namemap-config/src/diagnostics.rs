use serde::de::DeserializeOwned;

/// Non-fatal findings produced while loading a config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    /// Keys present in the input TOML that the schema does not recognize, as dotted paths
    /// (`mappings.pathh`).
    pub unknown_keys: Vec<String>,
}

impl ConfigDiagnostics {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unknown_keys.is_empty()
    }
}

pub(crate) fn deserialize_toml_with_unknown_keys<T: DeserializeOwned>(
    text: &str,
) -> Result<(T, Vec<String>), toml::de::Error> {
    let mut unknown = Vec::<String>::new();
    let deserializer = toml::de::Deserializer::new(text);
    let value = serde_ignored::deserialize(deserializer, |path| {
        unknown.push(path.to_string().trim_start_matches('.').to_owned());
    })?;
    unknown.sort();
    unknown.dedup();
    Ok((value, unknown))
}
