//! Resolution of delegation declarations into method generation plans.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{DelegateError, Result};
use crate::group::{MethodGroup, MethodTemplate};
use crate::options::{DelegateOptions, PassthroughOptions};

/// The resolved output of a delegation declaration: the concrete method
/// names to define plus the options forwarded to the delegation primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegationPlan {
    /// Method names to define, in generation order.
    pub methods: Vec<String>,
    /// Options forwarded verbatim.
    pub options: PassthroughOptions,
}

/// A validated delegation declaration.
///
/// Construction validates the declaration eagerly; queries derive the group
/// selection, method names, and pass-through options lazily and memoize them
/// for the lifetime of the instance.
///
/// # Example
///
/// ```rust
/// use oxide_delegate::{DelegateOptions, Delegation, MethodGroup};
///
/// let delegation = Delegation::new(
///     &["status"],
///     DelegateOptions::new()
///         .to("child")
///         .only(&[MethodGroup::Reader, MethodGroup::Predicate]),
/// )?;
///
/// assert_eq!(delegation.methods(), ["status", "status?"]);
/// # Ok::<(), oxide_delegate::DelegateError>(())
/// ```
#[derive(Debug)]
pub struct Delegation {
    attributes: Vec<String>,
    options: DelegateOptions,
    groups: OnceLock<Vec<MethodGroup>>,
    templates: OnceLock<Vec<MethodTemplate>>,
    methods: OnceLock<Vec<String>>,
    passthrough: OnceLock<PassthroughOptions>,
}

impl Delegation {
    /// Validates a delegation declaration.
    ///
    /// # Errors
    ///
    /// Returns [`DelegateError::NoAttributes`] when `attributes` is empty,
    /// [`DelegateError::MissingTarget`] when `to` is unset or empty, and
    /// [`DelegateError::ConflictingSelectors`] when both `only` and `skip`
    /// are set (regardless of their values).
    pub fn new(attributes: &[&str], options: DelegateOptions) -> Result<Self> {
        if attributes.is_empty() {
            return Err(DelegateError::NoAttributes);
        }
        if options.to.as_deref().map_or(true, str::is_empty) {
            return Err(DelegateError::MissingTarget);
        }
        if options.only.is_some() && options.skip.is_some() {
            return Err(DelegateError::ConflictingSelectors {
                first: "only",
                second: "skip",
            });
        }

        Ok(Self {
            attributes: attributes.iter().map(|a| (*a).to_string()).collect(),
            options,
            groups: OnceLock::new(),
            templates: OnceLock::new(),
            methods: OnceLock::new(),
            passthrough: OnceLock::new(),
        })
    }

    /// Returns the attributes being delegated, in declaration order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the active method groups, in canonical order.
    ///
    /// `only` keeps the intersection with the listed groups, `skip` removes
    /// the listed groups, and otherwise every group whose toggle resolves
    /// truthy is active.
    pub fn groups(&self) -> &[MethodGroup] {
        self.groups.get_or_init(|| {
            if let Some(only) = &self.options.only {
                MethodGroup::ALL
                    .into_iter()
                    .filter(|group| only.contains(group))
                    .collect()
            } else if let Some(skip) = &self.options.skip {
                MethodGroup::ALL
                    .into_iter()
                    .filter(|group| !skip.contains(group))
                    .collect()
            } else {
                MethodGroup::ALL
                    .into_iter()
                    .filter(|group| self.options.group_enabled(*group))
                    .collect()
            }
        })
    }

    /// Returns the name templates of the active groups, flattened in
    /// generation order.
    pub fn templates(&self) -> &[MethodTemplate] {
        self.templates.get_or_init(|| {
            self.groups()
                .iter()
                .flat_map(|group| group.templates().iter().copied())
                .collect()
        })
    }

    /// Returns the delegated method names: each attribute crossed with each
    /// active template, attribute-major.
    pub fn methods(&self) -> &[String] {
        self.methods.get_or_init(|| {
            let templates = self.templates();
            self.attributes
                .iter()
                .flat_map(|attribute| {
                    templates.iter().map(move |template| template.apply(attribute))
                })
                .collect()
        })
    }

    /// Returns the options forwarded to the delegation primitive.
    pub fn passthrough(&self) -> &PassthroughOptions {
        self.passthrough.get_or_init(|| PassthroughOptions {
            // `to` is validated present and non-empty in `new`.
            to: self.options.to.clone().unwrap_or_default(),
            allow_nil: self.options.allow_nil,
            prefix: self.options.prefix.clone(),
        })
    }

    /// Returns the complete resolved plan.
    pub fn plan(&self) -> DelegationPlan {
        DelegationPlan {
            methods: self.methods().to_vec(),
            options: self.passthrough().clone(),
        }
    }
}
