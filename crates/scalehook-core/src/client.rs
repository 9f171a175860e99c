//! Provider seam: the minimum Auto Scaling surface the reconciler needs.

use async_trait::async_trait;

use crate::error::HookResult;
use crate::types::{HookParams, HookState};

/// Client contract against the Auto Scaling provider.
///
/// The reconciler needs exactly three operations: a describe (filtered or
/// unfiltered), an upsert, and a delete. Implementors own transport,
/// credentials, and any internal retry behavior; the reconciler adds no
/// retry policy of its own.
#[async_trait]
pub trait AutoScalingApi: Send + Sync {
    /// Describe the lifecycle hooks of a group.
    ///
    /// `hook_names` filters the result; an empty slice returns every hook
    /// attached to the group (used by the delete-path scan).
    async fn describe_hooks(
        &self,
        group_name: &str,
        hook_names: &[String],
    ) -> HookResult<Vec<HookState>>;

    /// Create or update a hook. The provider dedupes on
    /// `(group_name, name)`, so this is a single upsert operation.
    async fn put_hook(&self, params: &HookParams) -> HookResult<()>;

    /// Delete the hook identified by `(group_name, hook_name)`.
    async fn delete_hook(&self, group_name: &str, hook_name: &str) -> HookResult<()>;
}

/// Blanket implementation for shared references, so a caller can keep
/// ownership of its client while handing the reconciler a borrow.
#[async_trait]
impl<T: AutoScalingApi + ?Sized> AutoScalingApi for &T {
    async fn describe_hooks(
        &self,
        group_name: &str,
        hook_names: &[String],
    ) -> HookResult<Vec<HookState>> {
        (**self).describe_hooks(group_name, hook_names).await
    }

    async fn put_hook(&self, params: &HookParams) -> HookResult<()> {
        (**self).put_hook(params).await
    }

    async fn delete_hook(&self, group_name: &str, hook_name: &str) -> HookResult<()> {
        (**self).delete_hook(group_name, hook_name).await
    }
}

/// Blanket implementation allowing `Box<dyn AutoScalingApi>` to be used
/// wherever `C: AutoScalingApi` is required.
#[async_trait]
impl AutoScalingApi for Box<dyn AutoScalingApi> {
    async fn describe_hooks(
        &self,
        group_name: &str,
        hook_names: &[String],
    ) -> HookResult<Vec<HookState>> {
        (**self).describe_hooks(group_name, hook_names).await
    }

    async fn put_hook(&self, params: &HookParams) -> HookResult<()> {
        (**self).put_hook(params).await
    }

    async fn delete_hook(&self, group_name: &str, hook_name: &str) -> HookResult<()> {
        (**self).delete_hook(group_name, hook_name).await
    }
}
