//! Domain types: desired state, current state, and canonical parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HookError, HookResult};

/// Heartbeat timeouts outside this range are rejected by the provider;
/// we reject them before making any API call.
pub const HEARTBEAT_TIMEOUT_RANGE: std::ops::RangeInclusive<i32> = 30..=172_800;

/// The instance state transition a lifecycle hook attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleTransition {
    /// Instance is entering service.
    #[serde(rename = "autoscaling:EC2_INSTANCE_LAUNCHING")]
    Launching,
    /// Instance is leaving service.
    #[serde(rename = "autoscaling:EC2_INSTANCE_TERMINATING")]
    Terminating,
}

impl LifecycleTransition {
    /// The provider's canonical wire form.
    #[must_use]
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Launching => "autoscaling:EC2_INSTANCE_LAUNCHING",
            Self::Terminating => "autoscaling:EC2_INSTANCE_TERMINATING",
        }
    }
}

impl fmt::Display for LifecycleTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for LifecycleTransition {
    type Err = HookError;

    /// Accepts both the short form (`launching`) and the provider's wire
    /// form (`autoscaling:EC2_INSTANCE_LAUNCHING`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autoscaling:EC2_INSTANCE_LAUNCHING" => Ok(Self::Launching),
            "autoscaling:EC2_INSTANCE_TERMINATING" => Ok(Self::Terminating),
            other => match other.to_ascii_lowercase().as_str() {
                "launching" => Ok(Self::Launching),
                "terminating" => Ok(Self::Terminating),
                _ => Err(HookError::validation(format!(
                    "unknown transition '{other}' (expected 'launching' or 'terminating')"
                ))),
            },
        }
    }
}

/// Action the group takes when a hook times out or fails unexpectedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultResult {
    /// Abandon the instance (default).
    #[default]
    Abandon,
    /// Continue the transition.
    Continue,
}

impl DefaultResult {
    /// The provider's canonical wire form.
    #[must_use]
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Abandon => "ABANDON",
            Self::Continue => "CONTINUE",
        }
    }
}

impl fmt::Display for DefaultResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for DefaultResult {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ABANDON" => Ok(Self::Abandon),
            "CONTINUE" => Ok(Self::Continue),
            other => Err(HookError::validation(format!(
                "unknown default result '{other}' (expected 'ABANDON' or 'CONTINUE')"
            ))),
        }
    }
}

/// Desired configuration of a lifecycle hook, supplied by the caller.
///
/// Optional fields distinguish "caller omitted" (`None`) from "caller
/// explicitly set" (`Some`). Omitted fields are neither transmitted nor
/// authoritative for drift detection.
///
/// Built fresh per invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookSpec {
    /// Hook name, unique within the Auto Scaling group.
    pub name: String,
    /// Name of the target Auto Scaling group.
    pub group_name: String,
    /// Transition the hook attaches to.
    pub transition: LifecycleTransition,
    /// IAM role the group assumes to publish to the notification target.
    #[serde(default)]
    pub role_arn: Option<String>,
    /// Notification target ARN (SQS queue or SNS topic). An empty string
    /// is a valid "clear" sentinel that overrides the current target.
    #[serde(default)]
    pub notification_target_arn: Option<String>,
    /// Free-form metadata included in notification messages.
    #[serde(default)]
    pub notification_metadata: Option<String>,
    /// Seconds before the hook times out (provider default 3600).
    #[serde(default)]
    pub heartbeat_timeout: Option<i32>,
    /// Action taken on timeout or unexpected failure.
    #[serde(default)]
    pub default_result: Option<DefaultResult>,
}

impl HookSpec {
    /// Create a spec with the required fields only.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        group_name: impl Into<String>,
        transition: LifecycleTransition,
    ) -> Self {
        Self {
            name: name.into(),
            group_name: group_name.into(),
            transition,
            role_arn: None,
            notification_target_arn: None,
            notification_metadata: None,
            heartbeat_timeout: None,
            default_result: None,
        }
    }

    /// Set the notification role ARN.
    #[must_use]
    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    /// Set the notification target ARN (empty string clears the target).
    #[must_use]
    pub fn with_notification_target_arn(mut self, arn: impl Into<String>) -> Self {
        self.notification_target_arn = Some(arn.into());
        self
    }

    /// Set the notification metadata.
    #[must_use]
    pub fn with_notification_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.notification_metadata = Some(metadata.into());
        self
    }

    /// Set the heartbeat timeout in seconds.
    #[must_use]
    pub fn with_heartbeat_timeout(mut self, seconds: i32) -> Self {
        self.heartbeat_timeout = Some(seconds);
        self
    }

    /// Set the default result.
    #[must_use]
    pub fn with_default_result(mut self, result: DefaultResult) -> Self {
        self.default_result = Some(result);
        self
    }
}

/// Current configuration of a lifecycle hook, as read from the provider.
///
/// Same shape as [`HookSpec`] plus the provider-computed `global_timeout`,
/// which is never user-settable and is excluded from drift comparison.
/// Fetched per reconciliation and discarded; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookState {
    /// Hook name.
    pub name: String,
    /// Name of the owning Auto Scaling group.
    pub group_name: String,
    /// Transition the hook is attached to.
    pub transition: Option<LifecycleTransition>,
    /// Notification role ARN.
    pub role_arn: Option<String>,
    /// Notification target ARN.
    pub notification_target_arn: Option<String>,
    /// Notification metadata.
    pub notification_metadata: Option<String>,
    /// Heartbeat timeout in seconds.
    pub heartbeat_timeout: Option<i32>,
    /// Default result on timeout.
    pub default_result: Option<DefaultResult>,
    /// Provider-computed overall timeout. Not user-settable; never
    /// participates in equality comparison.
    pub global_timeout: Option<i32>,
}

/// Canonical parameter set for the provider's upsert operation.
///
/// Carries the required identity fields plus only those optional fields
/// the caller explicitly supplied. This is a partial-update semantic:
/// omitted fields are not cleared, they are simply not sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookParams {
    /// Hook name.
    pub name: String,
    /// Name of the target Auto Scaling group.
    pub group_name: String,
    /// Transition the hook attaches to.
    pub transition: LifecycleTransition,
    /// Notification role ARN, if explicitly set.
    pub role_arn: Option<String>,
    /// Notification target ARN, if explicitly set. `Some("")` is the
    /// clear sentinel and is transmitted as-is.
    pub notification_target_arn: Option<String>,
    /// Notification metadata, if explicitly set.
    pub notification_metadata: Option<String>,
    /// Heartbeat timeout in seconds, if explicitly set.
    pub heartbeat_timeout: Option<i32>,
    /// Default result, if explicitly set.
    pub default_result: Option<DefaultResult>,
}

impl HookParams {
    /// Canonicalize a spec into the parameter set sent to the provider.
    ///
    /// Empty-string optionals are treated as unset, with one exception:
    /// an empty `notification_target_arn` is the documented clear
    /// sentinel and survives canonicalization.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Validation`] if a required field is empty or
    /// the heartbeat timeout is outside the provider's accepted range.
    pub fn from_spec(spec: &HookSpec) -> HookResult<Self> {
        if spec.name.is_empty() {
            return Err(HookError::validation("lifecycle hook name is required"));
        }
        if spec.group_name.is_empty() {
            return Err(HookError::validation(
                "autoscaling group name is required",
            ));
        }
        if let Some(seconds) = spec.heartbeat_timeout {
            if !HEARTBEAT_TIMEOUT_RANGE.contains(&seconds) {
                return Err(HookError::validation(format!(
                    "heartbeat timeout {seconds}s is outside the accepted range \
                     {}..={}",
                    HEARTBEAT_TIMEOUT_RANGE.start(),
                    HEARTBEAT_TIMEOUT_RANGE.end()
                )));
            }
        }

        Ok(Self {
            name: spec.name.clone(),
            group_name: spec.group_name.clone(),
            transition: spec.transition,
            role_arn: non_empty(spec.role_arn.as_deref()),
            notification_target_arn: spec.notification_target_arn.clone(),
            notification_metadata: non_empty(spec.notification_metadata.as_deref()),
            heartbeat_timeout: spec.heartbeat_timeout,
            default_result: spec.default_result,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_round_trip() {
        for (input, expected) in [
            ("launching", LifecycleTransition::Launching),
            ("Terminating", LifecycleTransition::Terminating),
            (
                "autoscaling:EC2_INSTANCE_LAUNCHING",
                LifecycleTransition::Launching,
            ),
            (
                "autoscaling:EC2_INSTANCE_TERMINATING",
                LifecycleTransition::Terminating,
            ),
        ] {
            assert_eq!(input.parse::<LifecycleTransition>().unwrap(), expected);
        }
        assert!("rebooting".parse::<LifecycleTransition>().is_err());
        assert_eq!(
            LifecycleTransition::Launching.to_string(),
            "autoscaling:EC2_INSTANCE_LAUNCHING"
        );
    }

    #[test]
    fn test_default_result_parse() {
        assert_eq!(
            "abandon".parse::<DefaultResult>().unwrap(),
            DefaultResult::Abandon
        );
        assert_eq!(
            "CONTINUE".parse::<DefaultResult>().unwrap(),
            DefaultResult::Continue
        );
        assert!("RETRY".parse::<DefaultResult>().is_err());
        assert_eq!(DefaultResult::default(), DefaultResult::Abandon);
    }

    #[test]
    fn test_spec_builder() {
        let spec = HookSpec::new("drain", "web-asg", LifecycleTransition::Terminating)
            .with_heartbeat_timeout(300)
            .with_default_result(DefaultResult::Continue);

        assert_eq!(spec.name, "drain");
        assert_eq!(spec.group_name, "web-asg");
        assert_eq!(spec.heartbeat_timeout, Some(300));
        assert_eq!(spec.default_result, Some(DefaultResult::Continue));
        assert_eq!(spec.role_arn, None);
    }

    #[test]
    fn test_params_omit_unset_fields() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching);
        let params = HookParams::from_spec(&spec).unwrap();

        assert_eq!(params.role_arn, None);
        assert_eq!(params.notification_target_arn, None);
        assert_eq!(params.notification_metadata, None);
        assert_eq!(params.heartbeat_timeout, None);
        assert_eq!(params.default_result, None);
    }

    #[test]
    fn test_params_drop_empty_optionals() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_role_arn("")
            .with_notification_metadata("");
        let params = HookParams::from_spec(&spec).unwrap();

        assert_eq!(params.role_arn, None);
        assert_eq!(params.notification_metadata, None);
    }

    #[test]
    fn test_empty_notification_target_is_clear_sentinel() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_notification_target_arn("");
        let params = HookParams::from_spec(&spec).unwrap();

        assert_eq!(params.notification_target_arn, Some(String::new()));
    }

    #[test]
    fn test_params_reject_missing_identity() {
        let spec = HookSpec::new("", "example", LifecycleTransition::Launching);
        assert!(matches!(
            HookParams::from_spec(&spec),
            Err(HookError::Validation { .. })
        ));

        let spec = HookSpec::new("example", "", LifecycleTransition::Launching);
        assert!(HookParams::from_spec(&spec).is_err());
    }

    #[test]
    fn test_params_reject_out_of_range_heartbeat() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_heartbeat_timeout(0);
        let err = HookParams::from_spec(&spec).unwrap_err();
        assert!(err.to_string().contains("heartbeat timeout"));

        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_heartbeat_timeout(200_000);
        assert!(HookParams::from_spec(&spec).is_err());
    }

    #[test]
    fn test_wire_serialization() {
        let json = serde_json::to_string(&LifecycleTransition::Launching).unwrap();
        assert_eq!(json, "\"autoscaling:EC2_INSTANCE_LAUNCHING\"");

        let json = serde_json::to_string(&DefaultResult::Abandon).unwrap();
        assert_eq!(json, "\"ABANDON\"");
    }
}
