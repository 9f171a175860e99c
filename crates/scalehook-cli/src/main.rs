//! Scalehook CLI - reconcile a single Auto Scaling lifecycle hook.
//!
//! The binary is a thin front end: it gathers typed parameters, resolves
//! the AWS connection, runs one reconciliation, and reports a structured
//! result (`changed: bool` at minimum) or a structured failure with a
//! non-zero exit.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use clap::Parser;

mod logging;
mod output;

use scalehook_core::{
    DefaultResult, HookError, HookReconciler, HookResult, HookSpec, LifecycleTransition, Outcome,
};
use scalehook_aws::ConnectOptions;

use output::OutputFormat;

/// Create, update, or delete an Auto Scaling lifecycle hook.
#[derive(Parser)]
#[command(name = "scalehook")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Desired state of the hook
    #[arg(long, default_value = "present", value_parser = ["present", "absent"])]
    state: String,

    /// Name of the lifecycle hook
    #[arg(long)]
    lifecycle_hook_name: String,

    /// Name of the Auto Scaling group the hook attaches to
    #[arg(long)]
    autoscaling_group_name: String,

    /// Instance transition the hook attaches to: 'launching' or
    /// 'terminating' (the full autoscaling:EC2_INSTANCE_* form is also
    /// accepted). Required when state=present.
    #[arg(long, value_parser = parse_transition)]
    transition: Option<LifecycleTransition>,

    /// ARN of the IAM role that lets the group publish to the
    /// notification target
    #[arg(long)]
    role_arn: Option<String>,

    /// Notification target ARN (SQS queue or SNS topic); an empty string
    /// clears the current target
    #[arg(long)]
    notification_target_arn: Option<String>,

    /// Additional information included in notification messages
    #[arg(long, alias = "notification-meta-data")]
    notification_metadata: Option<String>,

    /// Seconds before the hook times out (provider default: 3600)
    #[arg(long)]
    heartbeat_timeout: Option<i32>,

    /// Action on timeout or unexpected failure
    #[arg(long, default_value = "ABANDON", value_parser = parse_default_result)]
    default_result: DefaultResult,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Named profile from the shared AWS config
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Endpoint URL override
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format: pretty (default) or json
    #[arg(long, default_value = "pretty")]
    format: String,
}

fn parse_transition(s: &str) -> Result<LifecycleTransition, String> {
    s.parse().map_err(|e: HookError| e.to_string())
}

fn parse_default_result(s: &str) -> Result<DefaultResult, String> {
    s.parse().map_err(|e: HookError| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = OutputFormat::from_flag(&cli.format);

    match run(&cli).await {
        Ok(outcome) => output::emit_outcome(format, &outcome),
        Err(err) => {
            output::emit_failure(format, &err.to_string());
            std::process::exit(1);
        },
    }
}

async fn run(cli: &Cli) -> HookResult<Outcome> {
    let options = ConnectOptions {
        region: cli.region.clone(),
        profile: cli.profile.clone(),
        endpoint_url: cli.endpoint_url.clone(),
    };

    if cli.state == "absent" {
        let client = scalehook_aws::connect(&options).await?;
        let reconciler = HookReconciler::new(client);
        return reconciler
            .reconcile_absent(&cli.autoscaling_group_name, &cli.lifecycle_hook_name)
            .await;
    }

    // Validate the full spec before touching the provider.
    let transition = cli.transition.ok_or_else(|| {
        HookError::validation("transition parameter is required when state=present")
    })?;
    let spec = build_spec(cli, transition);

    let client = scalehook_aws::connect(&options).await?;
    let reconciler = HookReconciler::new(client);
    reconciler.reconcile_present(&spec).await
}

fn build_spec(cli: &Cli, transition: LifecycleTransition) -> HookSpec {
    let mut spec = HookSpec::new(
        &cli.lifecycle_hook_name,
        &cli.autoscaling_group_name,
        transition,
    )
    .with_default_result(cli.default_result);

    if let Some(arn) = &cli.role_arn {
        spec = spec.with_role_arn(arn);
    }
    if let Some(arn) = &cli.notification_target_arn {
        spec = spec.with_notification_target_arn(arn);
    }
    if let Some(metadata) = &cli.notification_metadata {
        spec = spec.with_notification_metadata(metadata);
    }
    if let Some(seconds) = cli.heartbeat_timeout {
        spec = spec.with_heartbeat_timeout(seconds);
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_minimal_present_args() {
        let cli = parse(&[
            "scalehook",
            "--lifecycle-hook-name",
            "example",
            "--autoscaling-group-name",
            "example",
            "--transition",
            "launching",
        ]);

        assert_eq!(cli.state, "present");
        assert_eq!(cli.transition, Some(LifecycleTransition::Launching));
        // default_result defaults to ABANDON, matching the provider docs.
        assert_eq!(cli.default_result, DefaultResult::Abandon);
    }

    #[test]
    fn test_wire_form_transition_accepted() {
        let cli = parse(&[
            "scalehook",
            "--lifecycle-hook-name",
            "example",
            "--autoscaling-group-name",
            "example",
            "--transition",
            "autoscaling:EC2_INSTANCE_TERMINATING",
        ]);
        assert_eq!(cli.transition, Some(LifecycleTransition::Terminating));
    }

    #[test]
    fn test_required_args_enforced() {
        assert!(Cli::try_parse_from(["scalehook", "--state", "absent"]).is_err());
    }

    #[test]
    fn test_invalid_state_rejected() {
        assert!(
            Cli::try_parse_from([
                "scalehook",
                "--state",
                "latest",
                "--lifecycle-hook-name",
                "example",
                "--autoscaling-group-name",
                "example",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_build_spec_carries_explicit_fields_only() {
        let cli = parse(&[
            "scalehook",
            "--lifecycle-hook-name",
            "example",
            "--autoscaling-group-name",
            "example",
            "--transition",
            "launching",
            "--heartbeat-timeout",
            "7000",
        ]);

        let spec = build_spec(&cli, LifecycleTransition::Launching);
        assert_eq!(spec.heartbeat_timeout, Some(7000));
        assert_eq!(spec.role_arn, None);
        assert_eq!(spec.notification_target_arn, None);
        assert_eq!(spec.default_result, Some(DefaultResult::Abandon));
    }
}
