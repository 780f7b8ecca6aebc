//! Configuration options for delegation declarations.

use serde::{Deserialize, Serialize};

use crate::group::MethodGroup;

/// Method name prefix forwarded to the delegation primitive.
///
/// `true` prefixes generated methods with the target name; a string sets a
/// custom prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prefix {
    /// Use the delegation target name as the prefix (no prefix when `false`).
    Target(bool),
    /// Use a custom prefix.
    Custom(String),
}

/// Raw options for a delegation declaration.
///
/// Every field is optional. Group toggles default to `true` when absent, so
/// an empty set of options delegates everything. Unknown keys in serialized
/// input are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateOptions {
    /// The association the generated methods forward to. Must be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Whether the target association may be nil. Passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_nil: Option<bool>,
    /// Method name prefix. Passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
    /// Whether to delegate the reader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reader: Option<bool>,
    /// Whether to delegate the writer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<bool>,
    /// Whether to delegate the predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<bool>,
    /// Whether to delegate the `before_type_cast` accessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_cast: Option<bool>,
    /// Whether to delegate the dirty tracking methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty: Option<bool>,
    /// Delegate only these groups. Incompatible with `skip`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<MethodGroup>>,
    /// Delegate every group except these. Incompatible with `only`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<Vec<MethodGroup>>,
}

impl DelegateOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delegation target.
    #[must_use]
    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.to = Some(target.into());
        self
    }

    /// Sets whether the target association may be nil.
    #[must_use]
    pub fn allow_nil(mut self, value: bool) -> Self {
        self.allow_nil = Some(value);
        self
    }

    /// Prefixes generated methods with the target name.
    #[must_use]
    pub fn prefix(mut self, value: bool) -> Self {
        self.prefix = Some(Prefix::Target(value));
        self
    }

    /// Prefixes generated methods with a custom string.
    #[must_use]
    pub fn prefix_with(mut self, value: impl Into<String>) -> Self {
        self.prefix = Some(Prefix::Custom(value.into()));
        self
    }

    /// Toggles reader delegation.
    #[must_use]
    pub fn reader(mut self, value: bool) -> Self {
        self.reader = Some(value);
        self
    }

    /// Toggles writer delegation.
    #[must_use]
    pub fn writer(mut self, value: bool) -> Self {
        self.writer = Some(value);
        self
    }

    /// Toggles predicate delegation.
    #[must_use]
    pub fn predicate(mut self, value: bool) -> Self {
        self.predicate = Some(value);
        self
    }

    /// Toggles `before_type_cast` delegation.
    #[must_use]
    pub fn type_cast(mut self, value: bool) -> Self {
        self.type_cast = Some(value);
        self
    }

    /// Toggles dirty tracking delegation.
    #[must_use]
    pub fn dirty(mut self, value: bool) -> Self {
        self.dirty = Some(value);
        self
    }

    /// Restricts delegation to the given groups.
    #[must_use]
    pub fn only(mut self, groups: &[MethodGroup]) -> Self {
        self.only = Some(groups.to_vec());
        self
    }

    /// Excludes the given groups from delegation.
    #[must_use]
    pub fn skip(mut self, groups: &[MethodGroup]) -> Self {
        self.skip = Some(groups.to_vec());
        self
    }

    /// Returns whether a group's toggle resolves truthy (absent means on).
    pub fn group_enabled(&self, group: MethodGroup) -> bool {
        let toggle = match group {
            MethodGroup::Reader => self.reader,
            MethodGroup::Writer => self.writer,
            MethodGroup::Predicate => self.predicate,
            MethodGroup::TypeCast => self.type_cast,
            MethodGroup::Dirty => self.dirty,
        };
        toggle.unwrap_or(true)
    }
}

/// The option subset forwarded verbatim to the delegation primitive.
///
/// Keys absent from the declaration stay absent here; only `to` is
/// guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassthroughOptions {
    /// The delegation target.
    pub to: String,
    /// Whether the target association may be nil.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_nil: Option<bool>,
    /// Method name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
}
