//! Region/credential resolution and SDK client construction.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use tracing::debug;

use scalehook_core::{HookError, HookResult};

use crate::client::AwsAutoScaling;

/// Connection parameters gathered from the front end.
///
/// Everything is optional: unset fields fall back to the SDK's standard
/// resolution chain (environment, shared config, instance metadata).
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Explicit region, tried before the default provider chain.
    pub region: Option<String>,
    /// Named profile from the shared AWS config files.
    pub profile: Option<String>,
    /// Endpoint URL override (e.g. a local Auto Scaling emulator).
    pub endpoint_url: Option<String>,
}

impl ConnectOptions {
    /// Set an explicit region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a named profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set an endpoint URL override.
    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

/// Resolve region and credentials, and build the Auto Scaling client.
///
/// Both checks happen before any Auto Scaling API call: an unresolvable
/// region is a [`HookError::Validation`], and a credential resolution
/// failure is a [`HookError::Auth`] with the SDK's message passed through.
///
/// # Errors
///
/// See above; no other failure modes exist at this stage.
pub async fn connect(options: &ConnectOptions) -> HookResult<AwsAutoScaling> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &options.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &options.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint) = &options.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    let Some(region) = sdk_config.region() else {
        return Err(HookError::validation(
            "region could not be resolved: pass --region or configure \
             AWS_REGION / a profile region",
        ));
    };
    debug!(region = %region, "resolved AWS region");

    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| HookError::auth("no credentials provider configured"))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| HookError::auth(e.to_string()))?;

    Ok(AwsAutoScaling::new(aws_sdk_autoscaling::Client::new(
        &sdk_config,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ConnectOptions::default()
            .with_region("eu-central-1")
            .with_profile("staging")
            .with_endpoint_url("http://localhost:4566");

        assert_eq!(options.region.as_deref(), Some("eu-central-1"));
        assert_eq!(options.profile.as_deref(), Some("staging"));
        assert_eq!(options.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
