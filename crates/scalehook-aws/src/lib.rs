//! Scalehook AWS - the real provider behind [`scalehook_core::AutoScalingApi`].
//!
//! Three concerns live here:
//! - [`connect`]: region/credential resolution and SDK client construction.
//! - [`AwsAutoScaling`]: the `AutoScalingApi` implementation over
//!   `aws-sdk-autoscaling`, preserving provider error messages verbatim.
//! - Model conversion between the SDK's `LifecycleHook` and the core
//!   `HookState`.
//!
//! No retry/backoff policy is added on top of the SDK's own behavior.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod client;
pub mod connect;
mod convert;

pub use client::AwsAutoScaling;
pub use connect::{ConnectOptions, connect};
