//! GraphQL wire envelope for the review directory backend.
//!
//! Owns request construction, the `data`/`errors` response envelope,
//! and flattening of Relay-style connections.

use anyhow::{Result, anyhow};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// A GraphQL request body: query document plus variables.
#[derive(Debug, serde::Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: Value::Null,
        }
    }

    pub fn with_variables(query: &'static str, variables: Value) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// A page of a Relay-style connection.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Unwraps `edges[].node` into a plain vector, preserving order.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }
}

/// Decodes a raw GraphQL response body into the typed `data` payload.
///
/// GraphQL reports errors in-band: a response may carry both partial
/// data and an error list. Errors alongside usable data are logged and
/// the data is kept; errors with no data fail the decode.
///
/// # Errors
///
/// Returns an error if the body is not a valid GraphQL envelope, if the
/// backend reported errors without any data, or if the data does not
/// match `T`.
pub fn decode_data<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let resp: GraphqlResponse = serde_json::from_slice(bytes)?;

    if let Some(errors) = &resp.errors {
        for e in errors {
            warn!(message = %e.message, "GraphQL error in response");
        }
    }

    match resp.data {
        Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
        _ => {
            let detail = resp
                .errors
                .unwrap_or_default()
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            if detail.is_empty() {
                Err(anyhow!("GraphQL response contained no data"))
            } else {
                Err(anyhow!("GraphQL request failed: {detail}"))
            }
        }
    }
}
