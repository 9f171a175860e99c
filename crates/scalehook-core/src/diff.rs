//! Typed drift detection between desired parameters and live state.
//!
//! Only fields the caller explicitly supplied are authoritative: a field
//! set provider-side but omitted from the spec does not by itself force a
//! write. The provider-computed `global_timeout` is excluded by
//! construction (it is not a parameter field).

use serde::Serialize;
use std::fmt;

use crate::types::{HookParams, HookState};

/// Why a single field diverges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Divergence {
    /// Set in the spec but unset provider-side.
    Missing,
    /// Set on both sides with differing values.
    Differs,
}

/// One diverging field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDrift {
    /// The field name.
    pub field: &'static str,
    /// How it diverges.
    pub divergence: Divergence,
}

/// Result of comparing canonical parameters against live state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    /// Fields that diverge, in declaration order.
    pub fields: Vec<FieldDrift>,
}

impl DriftReport {
    /// Whether the live configuration matches the spec on every
    /// explicitly-set field.
    #[must_use]
    pub fn in_sync(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the diverging fields.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|d| d.field).collect()
    }
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_sync() {
            return f.write_str("in sync");
        }
        for (i, drift) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", drift.field)?;
        }
        Ok(())
    }
}

/// Compare the canonical parameter set against the fetched state,
/// restricted to the fields the parameters carry.
#[must_use]
pub fn drift(params: &HookParams, state: &HookState) -> DriftReport {
    let mut report = DriftReport::default();

    // Identity fields are always present in the params. The state was
    // fetched by (group, name), so only the transition can realistically
    // diverge here.
    compare(
        &mut report,
        "lifecycle_hook_name",
        Some(&params.name),
        Some(&state.name),
    );
    compare(
        &mut report,
        "autoscaling_group_name",
        Some(&params.group_name),
        Some(&state.group_name),
    );
    compare(
        &mut report,
        "transition",
        Some(&params.transition),
        state.transition.as_ref(),
    );

    compare(
        &mut report,
        "role_arn",
        params.role_arn.as_ref(),
        state.role_arn.as_ref(),
    );
    compare(
        &mut report,
        "notification_target_arn",
        params.notification_target_arn.as_ref(),
        state.notification_target_arn.as_ref(),
    );
    compare(
        &mut report,
        "notification_metadata",
        params.notification_metadata.as_ref(),
        state.notification_metadata.as_ref(),
    );
    compare(
        &mut report,
        "heartbeat_timeout",
        params.heartbeat_timeout.as_ref(),
        state.heartbeat_timeout.as_ref(),
    );
    compare(
        &mut report,
        "default_result",
        params.default_result.as_ref(),
        state.default_result.as_ref(),
    );

    report
}

fn compare<T: PartialEq>(
    report: &mut DriftReport,
    field: &'static str,
    desired: Option<&T>,
    current: Option<&T>,
) {
    match (desired, current) {
        // Caller omitted the field: not authoritative, ignore whatever
        // the provider has.
        (None, _) => {},
        (Some(_), None) => report.fields.push(FieldDrift {
            field,
            divergence: Divergence::Missing,
        }),
        (Some(d), Some(c)) if d != c => report.fields.push(FieldDrift {
            field,
            divergence: Divergence::Differs,
        }),
        (Some(_), Some(_)) => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DefaultResult, HookSpec, LifecycleTransition};

    fn state_for(params: &HookParams) -> HookState {
        HookState {
            name: params.name.clone(),
            group_name: params.group_name.clone(),
            transition: Some(params.transition),
            role_arn: params.role_arn.clone(),
            notification_target_arn: params.notification_target_arn.clone(),
            notification_metadata: params.notification_metadata.clone(),
            heartbeat_timeout: params.heartbeat_timeout,
            default_result: params.default_result,
            global_timeout: Some(172_800),
        }
    }

    fn example_params() -> HookParams {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_heartbeat_timeout(7000)
            .with_default_result(DefaultResult::Abandon);
        HookParams::from_spec(&spec).unwrap()
    }

    #[test]
    fn test_identical_state_is_in_sync() {
        let params = example_params();
        let state = state_for(&params);
        assert!(drift(&params, &state).in_sync());
    }

    #[test]
    fn test_global_timeout_never_participates() {
        let params = example_params();
        let mut state = state_for(&params);
        state.global_timeout = Some(1);
        assert!(drift(&params, &state).in_sync());
    }

    #[test]
    fn test_caller_omitted_fields_are_not_authoritative() {
        let params = example_params();
        let mut state = state_for(&params);
        // Provider has a role and target the caller never specified.
        state.role_arn = Some("arn:aws:iam::123456789012:role/asg-notify".into());
        state.notification_target_arn = Some("arn:aws:sqs:eu-central-1:123456789012:q".into());
        assert!(drift(&params, &state).in_sync());
    }

    #[test]
    fn test_single_field_divergence_detected() {
        let params = example_params();
        let mut state = state_for(&params);
        state.default_result = Some(DefaultResult::Continue);

        let report = drift(&params, &state);
        assert!(!report.in_sync());
        assert_eq!(report.field_names(), vec!["default_result"]);
        assert_eq!(report.fields[0].divergence, Divergence::Differs);
    }

    #[test]
    fn test_spec_set_but_state_unset_forces_change() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_notification_metadata("{\"drain\":true}");
        let params = HookParams::from_spec(&spec).unwrap();
        let mut state = state_for(&params);
        state.notification_metadata = None;

        let report = drift(&params, &state);
        assert_eq!(report.field_names(), vec!["notification_metadata"]);
        assert_eq!(report.fields[0].divergence, Divergence::Missing);
    }

    #[test]
    fn test_clear_sentinel_diffs_against_set_target() {
        let spec = HookSpec::new("example", "example", LifecycleTransition::Launching)
            .with_notification_target_arn("");
        let params = HookParams::from_spec(&spec).unwrap();
        let mut state = state_for(&params);
        state.notification_target_arn = Some("arn:aws:sns:eu-central-1:123456789012:t".into());

        let report = drift(&params, &state);
        assert_eq!(report.field_names(), vec!["notification_target_arn"]);
    }

    #[test]
    fn test_report_display() {
        let params = example_params();
        let mut state = state_for(&params);
        assert_eq!(drift(&params, &state).to_string(), "in sync");

        state.heartbeat_timeout = Some(3600);
        state.default_result = Some(DefaultResult::Continue);
        assert_eq!(
            drift(&params, &state).to_string(),
            "heartbeat_timeout, default_result"
        );
    }
}
