//! Scalehook Core - Idempotent reconciliation of Auto Scaling lifecycle hooks.
//!
//! This crate holds everything that does not talk to AWS directly:
//! - The desired/current state model ([`HookSpec`], [`HookState`]) and the
//!   canonical parameter set ([`HookParams`]) derived from a spec.
//! - The typed drift comparator ([`diff::drift`]).
//! - The provider seam ([`AutoScalingApi`]) the reconciler runs against.
//! - The [`HookReconciler`] itself: read current state, diff, apply the
//!   minimal corrective call, report whether a change occurred.
//!
//! The provider is the sole source of truth: state is fetched per
//! reconciliation and never cached across invocations.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod client;
pub mod diff;
pub mod error;
pub mod reconciler;
pub mod types;

pub mod prelude;

pub use client::AutoScalingApi;
pub use diff::DriftReport;
pub use error::{HookError, HookResult};
pub use reconciler::{HookReconciler, Outcome};
pub use types::{DefaultResult, HookParams, HookSpec, HookState, LifecycleTransition};
