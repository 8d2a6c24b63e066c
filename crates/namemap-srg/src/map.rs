use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use namemap_config::MappingsConfig;
use namemap_descriptor::{internal_name_of, remap_descriptor};

use crate::bijection::Bijection;
use crate::error::{MappingError, Result};
use crate::member::MemberReference;
use crate::parse::{parse_srg_with, ParseOptions};

/// Immutable human ↔ mapped name tables.
///
/// Class names are dotted binary names (`a.b.Outer$Inner`). Every table is one-to-one, so each
/// lookup has exactly one answer in either direction. `lookup_*` methods return `None` on a
/// miss; `to_*` methods fall back to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    classes: Bijection<String, String>,
    fields: Bijection<MemberReference, MemberReference>,
    methods: Bijection<MemberReference, MemberReference>,
}

impl SymbolMap {
    pub(crate) fn from_tables(
        classes: Bijection<String, String>,
        fields: Bijection<MemberReference, MemberReference>,
        methods: Bijection<MemberReference, MemberReference>,
    ) -> Self {
        Self {
            classes,
            fields,
            methods,
        }
    }

    /// Load a mapping file with default parse options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, ParseOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(target: "namemap.srg", path = %path.display(), "loading mappings");

        let file = File::open(path).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = parse_srg_with(BufReader::new(file), options)?;

        tracing::debug!(
            target: "namemap.srg",
            path = %path.display(),
            classes = map.class_count(),
            fields = map.field_count(),
            methods = map.method_count(),
            "loaded mappings"
        );
        Ok(map)
    }

    /// Load the mapping file named by `config`, or `Ok(None)` if none is configured.
    pub fn load_configured(config: &MappingsConfig) -> Result<Option<Self>> {
        match &config.path {
            Some(path) => Self::load_with(path, ParseOptions::from(config)).map(Some),
            None => Ok(None),
        }
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.fields.is_empty() && self.methods.is_empty()
    }

    pub fn lookup_mapped_class(&self, human: &str) -> Option<&str> {
        self.classes.get(human).map(String::as_str)
    }

    pub fn to_mapped_class(&self, human: &str) -> String {
        self.lookup_mapped_class(human).unwrap_or(human).to_string()
    }

    pub fn lookup_human_class(&self, mapped: &str) -> Option<&str> {
        self.classes.get_inverse(mapped).map(String::as_str)
    }

    pub fn to_human_class(&self, mapped: &str) -> String {
        self.lookup_human_class(mapped).unwrap_or(mapped).to_string()
    }

    pub fn lookup_mapped_field(&self, human: &MemberReference) -> Option<&MemberReference> {
        self.fields.get(human)
    }

    pub fn to_mapped_field(&self, human: &MemberReference) -> MemberReference {
        self.lookup_mapped_field(human).unwrap_or(human).clone()
    }

    pub fn lookup_human_field(&self, mapped: &MemberReference) -> Option<&MemberReference> {
        self.fields.get_inverse(mapped)
    }

    pub fn to_human_field(&self, mapped: &MemberReference) -> MemberReference {
        self.lookup_human_field(mapped).unwrap_or(mapped).clone()
    }

    pub fn lookup_mapped_method(&self, human: &MemberReference) -> Option<&MemberReference> {
        self.methods.get(human)
    }

    pub fn to_mapped_method(&self, human: &MemberReference) -> MemberReference {
        self.lookup_mapped_method(human).unwrap_or(human).clone()
    }

    pub fn lookup_human_method(&self, mapped: &MemberReference) -> Option<&MemberReference> {
        self.methods.get_inverse(mapped)
    }

    pub fn to_human_method(&self, mapped: &MemberReference) -> MemberReference {
        self.lookup_human_method(mapped).unwrap_or(mapped).clone()
    }

    /// Rewrite the class names inside a human descriptor to their mapped names.
    pub fn to_mapped_descriptor(&self, desc: &str) -> Result<String, namemap_descriptor::Error> {
        remap_descriptor(desc, |internal| {
            self.lookup_mapped_class(&internal.replace('/', "."))
                .map(internal_name_of)
        })
    }

    /// Rewrite the class names inside a mapped descriptor to their human names.
    pub fn to_human_descriptor(&self, desc: &str) -> Result<String, namemap_descriptor::Error> {
        remap_descriptor(desc, |internal| {
            self.lookup_human_class(&internal.replace('/', "."))
                .map(internal_name_of)
        })
    }

    pub(crate) fn classes(&self) -> &Bijection<String, String> {
        &self.classes
    }

    pub(crate) fn fields(&self) -> &Bijection<MemberReference, MemberReference> {
        &self.fields
    }

    pub(crate) fn methods(&self) -> &Bijection<MemberReference, MemberReference> {
        &self.methods
    }
}
