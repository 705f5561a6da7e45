use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::resources::{Locale, ResourceLabel};

use super::{
    ActionMapping, Properties, PropertiesBuilder, SemanticActionBuilder, SemanticStateBuilder,
    StateMapping,
};

/// The only capability type currently defined by the protocol.
pub const ALEXA_INTERFACE_TYPE: &str = "AlexaInterface";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityResources {
    pub friendly_names: Vec<ResourceLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semantics {
    pub action_mappings: Vec<ActionMapping>,
    pub state_mappings: Vec<StateMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum VerificationMethod {
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequired {
    pub directive: String,
    pub methods: Vec<VerificationMethod>,
}

/// One interface declaration of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    #[serde(rename = "type")]
    pub capability_type: String,
    pub interface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_resources: Option<CapabilityResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<Semantics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifications_required: Option<Vec<VerificationRequired>>,
}

impl Capability {
    /// Iterate over all action mappings declared by this capability.
    pub fn action_mappings(&self) -> impl Iterator<Item = &ActionMapping> {
        self.semantics
            .iter()
            .flat_map(|semantics| semantics.action_mappings.iter())
    }
}

/// Builds a single [`Capability`].
///
/// The interface name and version are fixed at construction. Properties are a
/// single child builder created on first access, while every
/// `add_semantic_action` / `add_semantic_state` call registers a new mapping.
#[derive(Debug, Clone)]
pub struct CapabilityBuilder {
    interface: String,
    version: String,
    instance: Option<String>,
    properties: Option<PropertiesBuilder>,
    friendly_names: Vec<ResourceLabel>,
    configuration: Option<Value>,
    semantic_actions: Vec<SemanticActionBuilder>,
    semantic_states: Vec<SemanticStateBuilder>,
    verifications: Vec<String>,
}

impl CapabilityBuilder {
    pub fn new(interface: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            version: version.into(),
            instance: None,
            properties: None,
            friendly_names: Vec::new(),
            configuration: None,
            semantic_actions: Vec::new(),
            semantic_states: Vec::new(),
            verifications: Vec::new(),
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Set the instance name distinguishing several uses of the same interface on an endpoint.
    pub fn with_instance(&mut self, instance: impl Into<String>) -> &mut Self {
        self.instance = Some(instance.into());
        self
    }

    /// Return the properties builder of this capability, creating it on first call.
    ///
    /// The returned borrow is the way back to this capability: once it ends,
    /// keep configuring through the `CapabilityBuilder` binding.
    pub fn add_properties(&mut self) -> &mut PropertiesBuilder {
        self.properties.get_or_insert_with(PropertiesBuilder::new)
    }

    pub fn with_asset_resource(&mut self, asset_id: impl Into<String>) -> &mut Self {
        self.friendly_names.push(ResourceLabel::asset(asset_id));
        self
    }

    pub fn with_text_resource(&mut self, text: impl Into<String>, locale: Locale) -> &mut Self {
        self.friendly_names.push(ResourceLabel::text(text, locale));
        self
    }

    /// Set the interface-specific configuration, replacing any previous one.
    pub fn with_configuration(&mut self, configuration: Value) -> &mut Self {
        self.configuration = Some(configuration);
        self
    }

    /// Register a new action mapping for `directive` and return its builder.
    ///
    /// Chaining continues on the mapping; bind the capability first when more
    /// capability setters follow.
    pub fn add_semantic_action(
        &mut self,
        directive: impl Into<String>,
    ) -> &mut SemanticActionBuilder {
        self.semantic_actions.push(SemanticActionBuilder::new(directive));
        let last = self.semantic_actions.len() - 1;
        &mut self.semantic_actions[last]
    }

    /// Register a new state mapping and return its builder. See
    /// [`add_semantic_action`](Self::add_semantic_action) for chaining.
    pub fn add_semantic_state(&mut self) -> &mut SemanticStateBuilder {
        self.semantic_states.push(SemanticStateBuilder::new());
        let last = self.semantic_states.len() - 1;
        &mut self.semantic_states[last]
    }

    /// Require a user confirmation before `directive` is sent to this capability.
    pub fn with_verification(&mut self, directive: impl Into<String>) -> &mut Self {
        self.verifications.push(directive.into());
        self
    }

    pub fn build(&self) -> Result<Capability> {
        let action_mappings = self
            .semantic_actions
            .iter()
            .map(SemanticActionBuilder::build)
            .collect::<Result<Vec<_>>>()?;
        let state_mappings = self
            .semantic_states
            .iter()
            .map(SemanticStateBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let semantics = (!action_mappings.is_empty() || !state_mappings.is_empty()).then(|| {
            Semantics {
                action_mappings,
                state_mappings,
            }
        });

        let capability_resources = (!self.friendly_names.is_empty()).then(|| CapabilityResources {
            friendly_names: self.friendly_names.clone(),
        });

        let verifications_required = (!self.verifications.is_empty()).then(|| {
            self.verifications
                .iter()
                .map(|directive| VerificationRequired {
                    directive: directive.clone(),
                    methods: vec![VerificationMethod::Confirmation],
                })
                .collect()
        });

        Ok(Capability {
            capability_type: ALEXA_INTERFACE_TYPE.into(),
            interface: self.interface.clone(),
            instance: self.instance.clone(),
            version: self.version.clone(),
            properties: self.properties.as_ref().and_then(PropertiesBuilder::build),
            capability_resources,
            configuration: self.configuration.clone(),
            semantics,
            verifications_required,
        })
    }
}
