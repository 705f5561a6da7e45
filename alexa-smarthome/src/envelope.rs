//! The directive and event envelopes wrapping every payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::discovery::{DiscoveryPayload, DISCOVERY_NAMESPACE};
use crate::error::Result;
use crate::limits::PAYLOAD_VERSION;

pub const DISCOVER: &str = "Discover";
pub const DISCOVER_RESPONSE: &str = "Discover.Response";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    pub payload_version: String,
}

impl Header {
    /// Create a header with a fresh message id.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            instance: None,
            message_id: Uuid::new_v4().to_string(),
            correlation_token: None,
            payload_version: PAYLOAD_VERSION.into(),
        }
    }

    /// Create a header answering `request`, carrying over its correlation
    /// token and payload version unmodified.
    pub fn response_to(
        request: &Header,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            correlation_token: request.correlation_token.clone(),
            payload_version: request.payload_version.clone(),
            ..Self::new(namespace, name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(rename = "type")]
    pub scope_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// The endpoint a directive or event is scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    pub endpoint_id: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub cookie: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointScope>,
    #[serde(default)]
    pub payload: Value,
}

/// An incoming directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub directive: Directive,
}

impl Request {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn header(&self) -> &Header {
        &self.directive.header
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        let header = self.header();
        header.namespace == namespace && header.name == name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointScope>,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyState {
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub name: String,
    pub value: Value,
    pub time_of_sample: String,
    pub uncertainty_in_milliseconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyState>,
}

/// An outgoing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub event: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl Response {
    pub fn new(header: Header, payload: Value) -> Self {
        Self {
            event: Event {
                header,
                endpoint: None,
                payload,
            },
            context: None,
        }
    }

    /// Wrap a discovery payload into an unsolicited `Discover.Response` event.
    pub fn discover(payload: &DiscoveryPayload) -> Result<Self> {
        Ok(Self::new(
            Header::new(DISCOVERY_NAMESPACE, DISCOVER_RESPONSE),
            serde_json::to_value(payload)?,
        ))
    }

    /// Wrap a discovery payload into the `Discover.Response` answering `request`.
    pub fn discover_reply(request: &Request, payload: &DiscoveryPayload) -> Result<Self> {
        Ok(Self::new(
            Header::response_to(request.header(), DISCOVERY_NAMESPACE, DISCOVER_RESPONSE),
            serde_json::to_value(payload)?,
        ))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
