//! Per-model delegation registration for host framework wiring.

use std::any::TypeId;

use tracing::debug;

use crate::delegation::{Delegation, DelegationPlan};
use crate::error::Result;
use crate::options::DelegateOptions;

/// A delegation plan registered for a model type.
#[derive(Debug, Clone)]
pub struct ModelDelegation {
    /// Model name (e.g., "User", "Post").
    pub model: String,
    /// Type ID of the model.
    pub type_id: TypeId,
    /// The resolved plan.
    pub plan: DelegationPlan,
}

/// Collects delegation declarations for model types.
///
/// Host wiring creates the registry once the model subsystem is ready; from
/// then on declarations can be registered for every model type and handed to
/// the method generation layer in one place.
///
/// # Example
///
/// ```rust
/// use oxide_delegate::{DelegateOptions, DelegationRegistry, MethodGroup};
///
/// struct Post;
///
/// let registry = DelegationRegistry::new().register::<Post>(
///     &["status"],
///     DelegateOptions::new()
///         .to("author")
///         .only(&[MethodGroup::Reader]),
/// )?;
///
/// assert_eq!(registry.plans_for::<Post>().len(), 1);
/// # Ok::<(), oxide_delegate::DelegateError>(())
/// ```
#[derive(Debug, Default)]
pub struct DelegationRegistry {
    delegations: Vec<ModelDelegation>,
}

impl DelegationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a delegation declaration for model `M`.
    ///
    /// A model may register several declarations, one per call site.
    ///
    /// # Errors
    ///
    /// Propagates any [`DelegateError`](crate::DelegateError) raised while
    /// validating the declaration; the registry is unchanged on failure.
    pub fn register<M: 'static>(
        mut self,
        attributes: &[&str],
        options: DelegateOptions,
    ) -> Result<Self> {
        let delegation = Delegation::new(attributes, options)?;
        let plan = delegation.plan();

        let name = std::any::type_name::<M>()
            .rsplit("::")
            .next()
            .unwrap_or("Model")
            .to_string();
        debug!(
            model = %name,
            methods = plan.methods.len(),
            "registered delegated attributes"
        );

        self.delegations.push(ModelDelegation {
            model: name,
            type_id: TypeId::of::<M>(),
            plan,
        });
        Ok(self)
    }

    /// Returns all registered delegations, in registration order.
    pub fn delegations(&self) -> &[ModelDelegation] {
        &self.delegations
    }

    /// Returns the plans registered for model `M`, in registration order.
    pub fn plans_for<M: 'static>(&self) -> Vec<&DelegationPlan> {
        let type_id = TypeId::of::<M>();
        self.delegations
            .iter()
            .filter(|delegation| delegation.type_id == type_id)
            .map(|delegation| &delegation.plan)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DelegateError;
    use crate::group::MethodGroup;

    struct User;
    struct Post;

    #[test]
    fn test_register_resolves_plan() {
        let registry = DelegationRegistry::new()
            .register::<User>(&["email"], DelegateOptions::new().to("account"))
            .unwrap();

        let delegations = registry.delegations();
        assert_eq!(delegations.len(), 1);
        assert_eq!(delegations[0].model, "User");
        assert_eq!(delegations[0].plan.methods.len(), 9);
    }

    #[test]
    fn test_plans_are_per_model() {
        let registry = DelegationRegistry::new()
            .register::<User>(&["email"], DelegateOptions::new().to("account"))
            .unwrap()
            .register::<Post>(
                &["title"],
                DelegateOptions::new()
                    .to("revision")
                    .only(&[MethodGroup::Reader]),
            )
            .unwrap();

        assert_eq!(registry.plans_for::<User>().len(), 1);
        assert_eq!(registry.plans_for::<Post>().len(), 1);
        assert_eq!(registry.plans_for::<Post>()[0].methods, ["title"]);
    }

    #[test]
    fn test_register_propagates_validation_errors() {
        let err = DelegationRegistry::new()
            .register::<User>(&["email"], DelegateOptions::new())
            .unwrap_err();
        assert_eq!(err, DelegateError::MissingTarget);
    }
}
