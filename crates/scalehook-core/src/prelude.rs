//! Prelude module - commonly used types for convenient import.
//!
//! Use `use scalehook_core::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust,ignore
//! use scalehook_core::prelude::*;
//!
//! let spec = HookSpec::new("scale-in-drain", "web-asg", LifecycleTransition::Terminating)
//!     .with_heartbeat_timeout(300)
//!     .with_default_result(DefaultResult::Continue);
//!
//! let reconciler = HookReconciler::new(client);
//! let outcome = reconciler.reconcile_present(&spec).await?;
//! ```

// Domain types
pub use crate::{DefaultResult, HookParams, HookSpec, HookState, LifecycleTransition};

// Reconciler
pub use crate::{HookReconciler, Outcome};

// Provider seam
pub use crate::AutoScalingApi;

// Errors
pub use crate::{HookError, HookResult};
