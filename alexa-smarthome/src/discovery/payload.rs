use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result, SemanticActionLocation};
use crate::limits::MAX_ENDPOINTS;
use crate::utils::find_duplicates;

use super::{DiscoveryEndpoint, DiscoveryEndpointBuilder, SemanticActionName};

/// The payload of a `Discover.Response` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryPayload {
    pub endpoints: Vec<DiscoveryEndpoint>,
}

/// Top-level builder of a discovery response payload.
///
/// Besides realizing every endpoint, `build` checks the constraints that span
/// endpoints: the endpoint count, unique endpoint IDs, and that no semantic
/// action name is mapped by more than one capability.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryPayloadBuilder {
    endpoints: Vec<DiscoveryEndpointBuilder>,
}

impl DiscoveryPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new endpoint and return its builder.
    ///
    /// No check for an existing endpoint with the same ID is made here;
    /// duplicates are reported by `build`.
    pub fn add_discovery_endpoint(
        &mut self,
        endpoint_id: impl Into<String>,
        manufacturer_name: impl Into<String>,
        description: impl Into<String>,
        friendly_name: impl Into<String>,
    ) -> &mut DiscoveryEndpointBuilder {
        self.endpoints.push(DiscoveryEndpointBuilder::new(
            endpoint_id,
            manufacturer_name,
            description,
            friendly_name,
        ));
        let last = self.endpoints.len() - 1;
        &mut self.endpoints[last]
    }

    pub fn endpoints(&self) -> &[DiscoveryEndpointBuilder] {
        &self.endpoints
    }

    pub fn build(&self) -> Result<DiscoveryPayload> {
        self.build_checked().inspect_err(|e| {
            warn!("Discovery payload failed validation: {}", e);
        })
    }

    fn build_checked(&self) -> Result<DiscoveryPayload> {
        if self.endpoints.len() > MAX_ENDPOINTS {
            Err(Error::TooManyEndpoints(self.endpoints.len()))?;
        }

        let endpoints = self
            .endpoints
            .iter()
            .map(DiscoveryEndpointBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let duplicates = find_duplicates(endpoints.iter().map(|e| e.endpoint_id.as_str()));
        if !duplicates.is_empty() {
            Err(Error::DuplicateEndpointIds(
                duplicates.into_iter().map(str::to_string).collect(),
            ))?;
        }

        check_semantic_actions(&endpoints)?;

        debug!("Discovery payload built with {} endpoints", endpoints.len());

        Ok(DiscoveryPayload { endpoints })
    }
}

/// Fail if any semantic action name is claimed by more than one distinct
/// (endpoint, interface, instance) location, reporting every such location.
fn check_semantic_actions(endpoints: &[DiscoveryEndpoint]) -> Result<()> {
    let mut claims: IndexMap<SemanticActionName, IndexSet<SemanticActionLocation>> =
        IndexMap::new();

    for endpoint in endpoints {
        for capability in &endpoint.capabilities {
            for mapping in capability.action_mappings() {
                for action in &mapping.actions {
                    claims
                        .entry(*action)
                        .or_default()
                        .insert(SemanticActionLocation {
                            endpoint: endpoint.endpoint_id.clone(),
                            capability: capability.interface.clone(),
                            instance: capability.instance.clone(),
                        });
                }
            }
        }
    }

    match claims
        .into_iter()
        .find(|(_, locations)| locations.len() > 1)
    {
        Some((action, locations)) => Err(Error::SemanticActionCollision {
            action: action.to_string(),
            locations: locations.into_iter().collect(),
        }),
        None => Ok(()),
    }
}
