//! Conversion from the SDK's wire model to the core state model.

use aws_sdk_autoscaling::types::LifecycleHook;
use tracing::warn;

use scalehook_core::{DefaultResult, HookState, LifecycleTransition};

/// Map an SDK `LifecycleHook` to the core [`HookState`].
///
/// Enum-valued fields the SDK reports as strings are parsed; a value
/// outside the documented vocabulary is treated as unset (and logged),
/// which makes the reconciler rewrite it rather than crash on it.
pub(crate) fn state_from_hook(hook: &LifecycleHook) -> HookState {
    HookState {
        name: hook.lifecycle_hook_name().unwrap_or_default().to_owned(),
        group_name: hook.auto_scaling_group_name().unwrap_or_default().to_owned(),
        transition: parse_enum::<LifecycleTransition>(hook.lifecycle_transition(), "transition"),
        role_arn: hook.role_arn().map(str::to_owned),
        notification_target_arn: hook.notification_target_arn().map(str::to_owned),
        notification_metadata: hook.notification_metadata().map(str::to_owned),
        heartbeat_timeout: hook.heartbeat_timeout(),
        default_result: parse_enum::<DefaultResult>(hook.default_result(), "default result"),
        global_timeout: hook.global_timeout(),
    }
}

fn parse_enum<T: std::str::FromStr>(value: Option<&str>, what: &str) -> Option<T> {
    let raw = value?;
    match raw.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(value = raw, "unrecognized {what} in provider response");
            None
        },
    }
}
