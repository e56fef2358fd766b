//! Endpoint-specific wire conventions
//!
//! Each supported store product differs slightly in upload URL shape, query
//! parameters, and authentication scheme. The set is closed, so it is a
//! tagged enum dispatched through pure builder functions; adding a product
//! means adding a variant and the compiler points at every match to extend.

use serde::{Deserialize, Serialize};

/// Authentication mechanism a store expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Basic,
    Digest,
}

/// Supported SPARQL-family store products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    /// Plain SPARQL 1.1 endpoint (`{base}/sparql`)
    #[default]
    Generic,
    Blazegraph,
    MarkLogic,
    Neptune,
    Rdfox,
    Stardog,
}

impl EndpointType {
    /// All supported variants, for help text and validation messages
    pub const ALL: [EndpointType; 6] = [
        EndpointType::Generic,
        EndpointType::Blazegraph,
        EndpointType::MarkLogic,
        EndpointType::Neptune,
        EndpointType::Rdfox,
        EndpointType::Stardog,
    ];

    /// Lowercase name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            EndpointType::Generic => "generic",
            EndpointType::Blazegraph => "blazegraph",
            EndpointType::MarkLogic => "marklogic",
            EndpointType::Neptune => "neptune",
            EndpointType::Rdfox => "rdfox",
            EndpointType::Stardog => "stardog",
        }
    }

    /// Uppercase prefix for variant-scoped environment variables
    /// (`BLAZEGRAPH_ENDPOINT`, `RDFOX_USERNAME`, ...)
    pub fn env_prefix(&self) -> &'static str {
        match self {
            EndpointType::Generic => "GENERIC",
            EndpointType::Blazegraph => "BLAZEGRAPH",
            EndpointType::MarkLogic => "MARKLOGIC",
            EndpointType::Neptune => "NEPTUNE",
            EndpointType::Rdfox => "RDFOX",
            EndpointType::Stardog => "STARDOG",
        }
    }

    /// Build the upload URL for this store.
    ///
    /// Some products carry the graph in the URL itself; those embed it
    /// percent-encoded. When `graph` is absent the default-graph form is
    /// produced, never a silently dropped parameter.
    pub fn upload_url(
        &self,
        base_url: &str,
        graph: Option<&str>,
        store_name: Option<&str>,
    ) -> String {
        match self {
            EndpointType::Generic | EndpointType::Blazegraph => format!("{base_url}/sparql"),
            EndpointType::MarkLogic => match graph {
                Some(graph) => format!(
                    "{base_url}/v1/graphs?graph={}",
                    urlencoding::encode(graph)
                ),
                None => format!("{base_url}/v1/graphs?default"),
            },
            EndpointType::Neptune => format!("{base_url}/gsp/"),
            EndpointType::Rdfox => format!(
                "{base_url}/datastores/{}/content",
                store_name.unwrap_or_default()
            ),
            EndpointType::Stardog => match graph {
                Some(graph) => format!("{base_url}?graph={}", urlencoding::encode(graph)),
                None => base_url.to_string(),
            },
        }
    }

    /// Query parameters appended to the upload URL
    pub fn query_params(&self, graph: Option<&str>) -> Vec<(&'static str, String)> {
        match self {
            EndpointType::Generic | EndpointType::Blazegraph => graph
                .map(|graph| vec![("context-uri", graph.to_string())])
                .unwrap_or_default(),
            EndpointType::Neptune => match graph {
                Some(graph) => vec![("graph", graph.to_string())],
                None => vec![("default", String::new())],
            },
            EndpointType::MarkLogic | EndpointType::Rdfox | EndpointType::Stardog => Vec::new(),
        }
    }

    /// Authentication scheme the store expects when credentials are set
    pub fn auth_scheme(&self) -> AuthScheme {
        match self {
            EndpointType::MarkLogic => AuthScheme::Digest,
            _ => AuthScheme::Basic,
        }
    }

    /// Whether this store addresses uploads at a named datastore
    pub fn requires_store_name(&self) -> bool {
        matches!(self, EndpointType::Rdfox)
    }
}

impl std::fmt::Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EndpointType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(EndpointType::Generic),
            "blazegraph" => Ok(EndpointType::Blazegraph),
            "marklogic" => Ok(EndpointType::MarkLogic),
            "neptune" => Ok(EndpointType::Neptune),
            "rdfox" => Ok(EndpointType::Rdfox),
            "stardog" => Ok(EndpointType::Stardog),
            other => Err(format!(
                "unknown endpoint type '{other}' (expected one of: {})",
                EndpointType::ALL.map(|t| t.name()).join(", ")
            )),
        }
    }
}
