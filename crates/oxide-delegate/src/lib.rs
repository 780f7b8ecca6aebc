//! # oxide-delegate
//!
//! Django-like delegated attributes for ORM models.
//!
//! A model often exposes an attribute that really lives on an associated
//! model. Declaring that attribute as delegated should carry its whole
//! accessor suite along — the reader, the writer, the predicate, the raw
//! `before_type_cast` accessor, and the dirty tracking methods — without
//! spelling every method name out by hand. This crate resolves such a
//! declaration into the concrete list of method names the host framework's
//! delegation primitive should define.
//!
//! This crate provides:
//! - `DelegateOptions` for configuring a declaration
//! - `Delegation` for validating a declaration and resolving its plan
//! - `Delegator` and `DelegateAttributes` as the host framework seam
//! - `DelegationRegistry` for collecting declarations per model type
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_delegate::{DelegateOptions, Delegation};
//!
//! // Delegate `email` and all its meta methods to the `account` association.
//! let delegation = Delegation::new(&["email"], DelegateOptions::new().to("account"))?;
//!
//! assert_eq!(
//!     delegation.methods(),
//!     [
//!         "email",
//!         "email=",
//!         "email?",
//!         "email_before_type_cast",
//!         "email_change",
//!         "email_changed?",
//!         "email_will_change!",
//!         "email_was",
//!         "reset_email!",
//!     ]
//! );
//! # Ok::<(), oxide_delegate::DelegateError>(())
//! ```
//!
//! ## Selecting method groups
//!
//! Every group is delegated by default. Individual toggles, `only`, or
//! `skip` narrow the selection; `only` and `skip` are mutually exclusive.
//!
//! ```rust
//! use oxide_delegate::{DelegateOptions, Delegation, MethodGroup};
//!
//! // Keep the readers, drop everything that can mutate.
//! let delegation = Delegation::new(
//!     &["name", "age"],
//!     DelegateOptions::new()
//!         .to("profile")
//!         .only(&[MethodGroup::Reader, MethodGroup::Predicate]),
//! )?;
//!
//! assert_eq!(delegation.methods(), ["name", "name?", "age", "age?"]);
//! # Ok::<(), oxide_delegate::DelegateError>(())
//! ```
//!
//! ## Forwarding to the host framework
//!
//! The resolved plan is the only thing the host needs: implement
//! [`Delegator`] where method generation happens and declare delegations
//! through [`DelegateAttributes::delegate_attributes`], or collect them in a
//! [`DelegationRegistry`] and drain it during model setup.

mod delegate;
mod delegation;
mod error;
mod group;
mod options;
mod registry;

pub use delegate::{DelegateAttributes, Delegator};
pub use delegation::{Delegation, DelegationPlan};
pub use error::{DelegateError, Result};
pub use group::{MethodGroup, MethodTemplate};
pub use options::{DelegateOptions, PassthroughOptions, Prefix};
pub use registry::{DelegationRegistry, ModelDelegation};
