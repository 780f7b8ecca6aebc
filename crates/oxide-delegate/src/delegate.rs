//! The declarative entry point and the host framework seam.

use tracing::debug;

use crate::delegation::{Delegation, DelegationPlan};
use crate::error::Result;
use crate::options::DelegateOptions;

/// The delegation primitive supplied by the host framework.
///
/// Implementors receive a resolved plan and define the listed methods on the
/// delegating model, forwarding each call to the plan's target association.
/// This crate never defines methods itself.
pub trait Delegator {
    /// Defines the planned methods on the delegating model.
    fn delegate(&mut self, plan: &DelegationPlan);
}

/// Declarative attribute delegation, available on every [`Delegator`].
///
/// # Example
///
/// ```rust
/// use oxide_delegate::{DelegateAttributes, DelegateOptions, DelegationPlan, Delegator};
///
/// #[derive(Default)]
/// struct Recorder {
///     plans: Vec<DelegationPlan>,
/// }
///
/// impl Delegator for Recorder {
///     fn delegate(&mut self, plan: &DelegationPlan) {
///         self.plans.push(plan.clone());
///     }
/// }
///
/// let mut recorder = Recorder::default();
/// recorder.delegate_attributes(&["email"], DelegateOptions::new().to("account"))?;
///
/// assert_eq!(recorder.plans.len(), 1);
/// assert_eq!(recorder.plans[0].options.to, "account");
/// # Ok::<(), oxide_delegate::DelegateError>(())
/// ```
pub trait DelegateAttributes: Delegator {
    /// Delegates `attributes` and all their meta methods to the association
    /// named by the options' `to`.
    ///
    /// # Errors
    ///
    /// Propagates any [`DelegateError`](crate::DelegateError) raised while
    /// validating the declaration; nothing is forwarded on failure.
    fn delegate_attributes(
        &mut self,
        attributes: &[&str],
        options: DelegateOptions,
    ) -> Result<()> {
        let delegation = Delegation::new(attributes, options)?;
        let plan = delegation.plan();
        debug!(
            to = %plan.options.to,
            methods = plan.methods.len(),
            "delegating attribute methods"
        );
        self.delegate(&plan);
        Ok(())
    }
}

impl<T: Delegator> DelegateAttributes for T {}
