//! The reconciler: read current state, diff, apply, report.
//!
//! One reconciliation per invocation, no retries, no cross-invocation
//! state. The provider's state may change between fetch and apply; the
//! apply is last-write-wins with no optimistic-concurrency token.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::client::AutoScalingApi;
use crate::diff;
use crate::error::HookResult;
use crate::types::{HookParams, HookSpec};

/// What a reconciliation did.
///
/// `changed` reflects *detected need*, not confirmed post-call state: the
/// provider call is trusted to have succeeded if it did not raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Outcome {
    /// No hook existed; one upsert was issued.
    Created,
    /// The hook existed but diverged on explicitly-set fields; one upsert
    /// was issued.
    Updated {
        /// The diverging field names.
        fields: Vec<String>,
    },
    /// The hook existed and matched the spec on every explicitly-set
    /// field; no call was issued.
    InSync,
    /// A matching hook existed and was deleted.
    Deleted,
    /// No matching hook existed; nothing to delete.
    AlreadyAbsent,
}

impl Outcome {
    /// Whether the invocation mutated (or needed to mutate) the provider.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Created | Self::Updated { .. } | Self::Deleted)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated { fields } => write!(f, "updated ({})", fields.join(", ")),
            Self::InSync => f.write_str("in sync"),
            Self::Deleted => f.write_str("deleted"),
            Self::AlreadyAbsent => f.write_str("already absent"),
        }
    }
}

/// Makes the provider's hook configuration match a desired spec (present)
/// or ensures it is absent, with minimal API calls.
pub struct HookReconciler<C> {
    client: C,
}

impl<C: AutoScalingApi> HookReconciler<C> {
    /// Create a reconciler over the given provider client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ensure the hook described by `spec` exists with that configuration.
    ///
    /// Fetches the current hook by `(group, name)`, compares it against
    /// the canonical parameter set on the explicitly-set fields only, and
    /// issues a single upsert when they diverge (or when no hook exists).
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::Validation`] for an invalid spec, or
    /// [`crate::HookError::Api`] if the describe or upsert call fails;
    /// the provider's message is preserved verbatim.
    pub async fn reconcile_present(&self, spec: &HookSpec) -> HookResult<Outcome> {
        let params = HookParams::from_spec(spec)?;

        let names = [params.name.clone()];
        let existing = self
            .client
            .describe_hooks(&params.group_name, &names)
            .await?;

        let outcome = match existing.iter().find(|h| h.name == params.name) {
            None => {
                debug!(
                    hook = %params.name,
                    group = %params.group_name,
                    "no existing hook, creating"
                );
                Outcome::Created
            },
            Some(state) => {
                let report = diff::drift(&params, state);
                if report.in_sync() {
                    debug!(hook = %params.name, group = %params.group_name, "hook in sync");
                    return Ok(Outcome::InSync);
                }
                debug!(
                    hook = %params.name,
                    group = %params.group_name,
                    drift = %report,
                    "hook configuration diverged"
                );
                Outcome::Updated {
                    fields: report.field_names().iter().map(ToString::to_string).collect(),
                }
            },
        };

        self.client.put_hook(&params).await?;
        info!(
            hook = %params.name,
            group = %params.group_name,
            outcome = %outcome,
            "lifecycle hook applied"
        );
        Ok(outcome)
    }

    /// Ensure no hook named `hook_name` is attached to `group_name`.
    ///
    /// Scans the group's full hook list and deletes every name match
    /// (identity uniqueness means at most one is expected). Absence is
    /// not an error: zero matches is already-satisfied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HookError::Api`] if the describe or a delete call
    /// fails; the provider's message is preserved verbatim.
    pub async fn reconcile_absent(&self, group_name: &str, hook_name: &str) -> HookResult<Outcome> {
        let hooks = self.client.describe_hooks(group_name, &[]).await?;

        let mut deleted = false;
        for hook in hooks.iter().filter(|h| h.name == hook_name) {
            self.client.delete_hook(group_name, &hook.name).await?;
            info!(hook = %hook.name, group = %group_name, "lifecycle hook deleted");
            deleted = true;
        }

        if deleted {
            Ok(Outcome::Deleted)
        } else {
            debug!(hook = %hook_name, group = %group_name, "no matching hook to delete");
            Ok(Outcome::AlreadyAbsent)
        }
    }
}
