//! Endpoint client: settings resolution and HTTP uploads
//!
//! Connection settings resolve from explicit arguments with environment
//! fallback (`RDF_<FIELD>`, then `{VARIANT}_<FIELD>`, each consulting
//! `.envrc` through `rdfpush_common::env`). Resolution failures surface
//! before any network call.

use crate::content_type::DEFAULT_CONTENT_TYPE;
use crate::endpoint::strategy::{AuthScheme, EndpointType};
use crate::error::{Result, UploadError};
use diqwest::WithDigestAuth;
use rdfpush_common::env;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

// ============================================================================
// Client Constants
// ============================================================================

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Username/password pair for endpoint authentication
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fully resolved connection settings for one endpoint
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub endpoint_url: String,
    pub endpoint_type: EndpointType,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
    pub content_type: Option<String>,
    pub store_name: Option<String>,
}

impl ConnectionSettings {
    /// Resolve settings from explicit values with environment fallback.
    ///
    /// Per field: explicit argument, then `RDF_<FIELD>`, then
    /// `{VARIANT}_<FIELD>`. The endpoint URL is required. A store name is
    /// resolved (and required) only for RDFox; other variants ignore it.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        endpoint: Option<&str>,
        endpoint_type: EndpointType,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
        store_name: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint_url = resolve_field(endpoint, endpoint_type, "ENDPOINT").ok_or_else(|| {
            UploadError::config(format!(
                "no endpoint URL given and neither RDF_ENDPOINT nor {}_ENDPOINT is set",
                endpoint_type.env_prefix()
            ))
        })?;

        let username = resolve_field(username, endpoint_type, "USERNAME");
        let password = resolve_field(password, endpoint_type, "PASSWORD");
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        let store_name = if endpoint_type.requires_store_name() {
            let resolved = store_name
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .or_else(|| env::lookup("RDFOX_STORE_NAME").filter(|name| !name.is_empty()));
            if resolved.is_none() {
                return Err(UploadError::config(
                    "RDFox uploads need a datastore name (--store-name or RDFOX_STORE_NAME)"
                        .to_string(),
                ));
            }
            resolved
        } else {
            None
        };

        Ok(Self {
            endpoint_url,
            endpoint_type,
            timeout,
            credentials,
            content_type: content_type.map(str::to_string),
            store_name,
        })
    }
}

/// One field's fallback chain: explicit, `RDF_*`, then variant-scoped
fn resolve_field(
    explicit: Option<&str>,
    endpoint_type: EndpointType,
    field: &str,
) -> Option<String> {
    if let Some(value) = explicit {
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    env::lookup(&format!("RDF_{field}"))
        .filter(|value| !value.is_empty())
        .or_else(|| {
            env::lookup(&format!("{}_{field}", endpoint_type.env_prefix()))
                .filter(|value| !value.is_empty())
        })
}

/// HTTP client bound to one endpoint's wire conventions
pub struct EndpointClient {
    http: Client,
    settings: ConnectionSettings,
}

impl EndpointClient {
    /// Build a client with the settings' timeout applied to every request
    pub fn new(settings: ConnectionSettings) -> Result<Self> {
        let http = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { http, settings })
    }

    /// The resolved settings this client was built with
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// POST one payload to the endpoint.
    ///
    /// Content type falls back caller argument -> client default ->
    /// `text/turtle`. Returns the HTTP status code; non-2xx responses
    /// surface as [`UploadError::HttpStatus`] with the response body.
    pub async fn upload_data(
        &self,
        data: String,
        graph: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<u16> {
        let content_type = content_type
            .or(self.settings.content_type.as_deref())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let url = self.settings.endpoint_type.upload_url(
            &self.settings.endpoint_url,
            graph,
            self.settings.store_name.as_deref(),
        );
        let params = self.settings.endpoint_type.query_params(graph);

        debug!(
            url = %url,
            content_type = %content_type,
            bytes = data.len(),
            "posting batch"
        );

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .body(data);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = match (&self.settings.credentials, self.settings.endpoint_type.auth_scheme())
        {
            (Some(credentials), AuthScheme::Digest) => {
                request
                    .send_with_digest_auth(&credentials.username, &credentials.password)
                    .await?
            },
            (Some(credentials), AuthScheme::Basic) => {
                request
                    .basic_auth(&credentials.username, Some(&credentials.password))
                    .send()
                    .await?
            },
            (None, _) => request.send().await?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(status.as_u16())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn default_timeout() -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    #[test]
    fn test_explicit_values_win() {
        let settings = ConnectionSettings::resolve(
            Some("http://example.org/sparql"),
            EndpointType::Generic,
            Some("alice"),
            Some("secret"),
            Some("application/n-quads"),
            None,
            default_timeout(),
        )
        .unwrap();

        assert_eq!(settings.endpoint_url, "http://example.org/sparql");
        let credentials = settings.credentials.unwrap();
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "secret");
        assert_eq!(settings.content_type.as_deref(), Some("application/n-quads"));
    }

    #[test]
    fn test_credentials_require_both_halves() {
        let settings = ConnectionSettings::resolve(
            Some("http://example.org"),
            EndpointType::Generic,
            Some("alice"),
            None,
            None,
            None,
            default_timeout(),
        )
        .unwrap();

        assert!(settings.credentials.is_none());
    }

    #[test]
    fn test_rdf_scoped_username_fallback() {
        std::env::set_var("RDF_USERNAME", "env-user");

        let settings = ConnectionSettings::resolve(
            Some("http://example.org"),
            EndpointType::Generic,
            None,
            Some("secret"),
            None,
            None,
            default_timeout(),
        )
        .unwrap();

        let credentials = settings.credentials.unwrap();
        assert_eq!(credentials.username, "env-user");
        assert_eq!(credentials.password, "secret");

        std::env::remove_var("RDF_USERNAME");
    }

    #[test]
    fn test_variant_scoped_endpoint_fallback() {
        std::env::set_var("BLAZEGRAPH_ENDPOINT", "http://blaze:9999/bigdata");

        let settings = ConnectionSettings::resolve(
            None,
            EndpointType::Blazegraph,
            None,
            None,
            None,
            None,
            default_timeout(),
        )
        .unwrap();
        assert_eq!(settings.endpoint_url, "http://blaze:9999/bigdata");

        std::env::remove_var("BLAZEGRAPH_ENDPOINT");
    }

    #[test]
    fn test_unresolvable_endpoint_is_config_error() {
        let err = ConnectionSettings::resolve(
            None,
            EndpointType::Stardog,
            None,
            None,
            None,
            None,
            default_timeout(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), "ConfigurationError");
        assert!(err.to_string().contains("STARDOG_ENDPOINT"));
    }

    #[test]
    fn test_rdfox_requires_store_name() {
        let err = ConnectionSettings::resolve(
            Some("http://rdfox:12110"),
            EndpointType::Rdfox,
            None,
            None,
            None,
            None,
            default_timeout(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
        assert!(err.to_string().contains("store"));

        let settings = ConnectionSettings::resolve(
            Some("http://rdfox:12110"),
            EndpointType::Rdfox,
            None,
            None,
            None,
            Some("catalog"),
            default_timeout(),
        )
        .unwrap();
        assert_eq!(settings.store_name.as_deref(), Some("catalog"));
    }

    #[test]
    fn test_store_name_not_applicable_outside_rdfox() {
        let settings = ConnectionSettings::resolve(
            Some("http://example.org"),
            EndpointType::Stardog,
            None,
            None,
            None,
            Some("ignored"),
            default_timeout(),
        )
        .unwrap();

        assert!(settings.store_name.is_none());
    }

    #[test]
    fn test_empty_explicit_value_falls_through() {
        let err = ConnectionSettings::resolve(
            Some(""),
            EndpointType::Stardog,
            None,
            None,
            None,
            None,
            default_timeout(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");
    }
}
