//! `AutoScalingApi` implementation over the AWS SDK.

use async_trait::async_trait;
use aws_sdk_autoscaling::Client;
use aws_sdk_autoscaling::error::{DisplayErrorContext, SdkError};
use tracing::debug;

use scalehook_core::{AutoScalingApi, HookError, HookParams, HookResult, HookState};

use crate::convert;

/// Auto Scaling provider backed by `aws-sdk-autoscaling`.
///
/// A thin mapping layer: one SDK call per trait operation, SDK errors
/// surfaced with their full display context so the provider's own
/// message survives verbatim.
#[derive(Debug, Clone)]
pub struct AwsAutoScaling {
    client: Client,
}

impl AwsAutoScaling {
    /// Wrap an already-constructed SDK client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn api_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> HookError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    HookError::api(operation, DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl AutoScalingApi for AwsAutoScaling {
    async fn describe_hooks(
        &self,
        group_name: &str,
        hook_names: &[String],
    ) -> HookResult<Vec<HookState>> {
        let mut request = self
            .client
            .describe_lifecycle_hooks()
            .auto_scaling_group_name(group_name);
        if !hook_names.is_empty() {
            request = request.set_lifecycle_hook_names(Some(hook_names.to_vec()));
        }

        let output = request
            .send()
            .await
            .map_err(|e| api_error("DescribeLifecycleHooks", e))?;

        let states: Vec<HookState> = output
            .lifecycle_hooks()
            .iter()
            .map(convert::state_from_hook)
            .collect();
        debug!(group = %group_name, count = states.len(), "described lifecycle hooks");
        Ok(states)
    }

    async fn put_hook(&self, params: &HookParams) -> HookResult<()> {
        debug!(hook = %params.name, group = %params.group_name, "putting lifecycle hook");
        self.client
            .put_lifecycle_hook()
            .lifecycle_hook_name(&params.name)
            .auto_scaling_group_name(&params.group_name)
            .lifecycle_transition(params.transition.as_wire_str())
            .set_role_arn(params.role_arn.clone())
            .set_notification_target_arn(params.notification_target_arn.clone())
            .set_notification_metadata(params.notification_metadata.clone())
            .set_heartbeat_timeout(params.heartbeat_timeout)
            .set_default_result(params.default_result.map(|r| r.as_wire_str().to_owned()))
            .send()
            .await
            .map_err(|e| api_error("PutLifecycleHook", e))?;
        Ok(())
    }

    async fn delete_hook(&self, group_name: &str, hook_name: &str) -> HookResult<()> {
        debug!(hook = %hook_name, group = %group_name, "deleting lifecycle hook");
        self.client
            .delete_lifecycle_hook()
            .auto_scaling_group_name(group_name)
            .lifecycle_hook_name(hook_name)
            .send()
            .await
            .map_err(|e| api_error("DeleteLifecycleHook", e))?;
        Ok(())
    }
}
