use std::fmt;
use std::str::FromStr;

use crate::state::error::ResourceIdError;

/// Namespaced identifier (`namespace:path`) for items and status effects.
///
/// Identifiers are canonical: parsing a bare path fills in
/// [`ResourceId::DEFAULT_NAMESPACE`], so `apple` and `minecraft:apple` compare
/// equal once parsed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Namespace assumed when the input carries no `namespace:` prefix.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Builds an identifier from already-split parts.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty or contains characters the
    /// host registry would reject.
    pub fn new(namespace: &str, path: &str) -> Result<Self, ResourceIdError> {
        if namespace.is_empty() {
            return Err(ResourceIdError::EmptyNamespace);
        }
        if path.is_empty() {
            return Err(ResourceIdError::EmptyPath);
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(ResourceIdError::InvalidNamespaceChar(c));
        }
        if let Some(c) = path.chars().find(|c| !is_path_char(*c)) {
            return Err(ResourceIdError::InvalidPathChar(c));
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Identifier in the default namespace.
    ///
    /// # Errors
    ///
    /// Same rules as [`ResourceId::new`].
    pub fn vanilla(path: &str) -> Result<Self, ResourceIdError> {
        Self::new(Self::DEFAULT_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ResourceIdError::Empty);
        }
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::vanilla(s),
        }
    }
}

impl TryFrom<String> for ResourceId {
    type Error = ResourceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Identifier of a host-side player entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
