use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::limits::{
    MAX_CAPABILITIES, MAX_COOKIE_SIZE, MAX_DESCRIPTION_LEN, MAX_ENDPOINT_ID_LEN,
    MAX_FRIENDLY_NAME_LEN, MAX_MANUFACTURER_NAME_LEN,
};

use super::{
    AdditionalAttributes, AdditionalAttributesBuilder, Capability, CapabilityBuilder, Connection,
    DisplayCategory,
};

static ENDPOINT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_ \-=#;:?@&]+$").expect("valid endpoint id pattern")
});

static FRIENDLY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} ]+$").expect("valid friendly name pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub endpoint_id: String,
}

/// A discoverable device, group or component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEndpoint {
    pub endpoint_id: String,
    pub manufacturer_name: String,
    pub description: String,
    pub friendly_name: String,
    pub display_categories: Vec<DisplayCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_attributes: Option<AdditionalAttributes>,
    pub capabilities: Vec<Capability>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub relationships: IndexMap<String, Relationship>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub cookie: IndexMap<String, String>,
}

/// Builds a single [`DiscoveryEndpoint`].
///
/// Created through [`DiscoveryPayloadBuilder::add_discovery_endpoint`](super::DiscoveryPayloadBuilder::add_discovery_endpoint);
/// the identity fields are fixed at that point.
#[derive(Debug, Clone)]
pub struct DiscoveryEndpointBuilder {
    endpoint_id: String,
    manufacturer_name: String,
    description: String,
    friendly_name: String,
    display_categories: IndexSet<DisplayCategory>,
    additional_attributes: Option<AdditionalAttributesBuilder>,
    capabilities: Vec<CapabilityBuilder>,
    connections: Vec<Connection>,
    relationships: IndexMap<String, Relationship>,
    cookie: IndexMap<String, String>,
}

impl DiscoveryEndpointBuilder {
    pub fn new(
        endpoint_id: impl Into<String>,
        manufacturer_name: impl Into<String>,
        description: impl Into<String>,
        friendly_name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            manufacturer_name: manufacturer_name.into(),
            description: description.into(),
            friendly_name: friendly_name.into(),
            display_categories: IndexSet::new(),
            additional_attributes: None,
            capabilities: Vec::new(),
            connections: Vec::new(),
            relationships: IndexMap::new(),
            cookie: IndexMap::new(),
        }
    }

    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    pub fn with_display_categories<I>(&mut self, categories: I) -> &mut Self
    where
        I: IntoIterator<Item = DisplayCategory>,
    {
        self.display_categories.extend(categories);
        self
    }

    /// Register a new capability. Adding the same interface twice yields two
    /// capabilities, which should then be told apart by their instance.
    ///
    /// The returned builder borrows this endpoint; bind the endpoint first
    /// when more endpoint setters follow, e.g.
    ///
    /// ```
    /// # use alexa_smarthome::discovery::{DiscoveryPayloadBuilder, DisplayCategory};
    /// let mut builder = DiscoveryPayloadBuilder::new();
    /// let endpoint = builder.add_discovery_endpoint("lamp", "Acme", "Smart lamp", "Lamp");
    /// endpoint
    ///     .add_capability("Alexa.PowerController", "3")
    ///     .add_properties()
    ///     .with_retrievable(true);
    /// endpoint.with_display_categories([DisplayCategory::Light]);
    /// assert_eq!(endpoint.build().unwrap().capabilities.len(), 1);
    /// ```
    pub fn add_capability(
        &mut self,
        interface: impl Into<String>,
        version: impl Into<String>,
    ) -> &mut CapabilityBuilder {
        self.capabilities.push(CapabilityBuilder::new(interface, version));
        let last = self.capabilities.len() - 1;
        &mut self.capabilities[last]
    }

    /// Return the additional attributes builder, creating it on first call.
    ///
    /// Endpoint setters continue through the endpoint binding once this borrow ends.
    pub fn add_additional_attributes(&mut self) -> &mut AdditionalAttributesBuilder {
        self.additional_attributes
            .get_or_insert_with(AdditionalAttributesBuilder::new)
    }

    pub fn with_tcp_ip_connection(&mut self, mac_address: Option<&str>) -> &mut Self {
        self.connections.push(Connection::tcp_ip(mac_address));
        self
    }

    pub fn with_zigbee_connection(&mut self, mac_address: Option<&str>) -> &mut Self {
        self.connections.push(Connection::zigbee(mac_address));
        self
    }

    pub fn with_zwave_connection(
        &mut self,
        home_id: Option<&str>,
        node_id: Option<&str>,
    ) -> Result<&mut Self> {
        self.connections.push(Connection::zwave(home_id, node_id)?);
        Ok(self)
    }

    pub fn with_unknown_connection(&mut self, value: &str) -> Result<&mut Self> {
        self.connections.push(Connection::unknown(value)?);
        Ok(self)
    }

    /// Relate this endpoint to another one, e.g. `isConnectedBy` a hub.
    pub fn with_relationship(
        &mut self,
        name: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let relationship = Relationship {
            endpoint_id: endpoint_id.into(),
        };
        if self.relationships.insert(name.clone(), relationship).is_some() {
            trace!("Endpoint {}: replaced relationship {}", self.endpoint_id, name);
        }
        self
    }

    pub fn with_cookie(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.cookie.insert(name.clone(), value.into()).is_some() {
            trace!("Endpoint {}: replaced cookie {}", self.endpoint_id, name);
        }
        self
    }

    pub fn build(&self) -> Result<DiscoveryEndpoint> {
        self.validate().inspect_err(|e| {
            warn!("Endpoint {} failed validation: {}", self.endpoint_id, e);
        })?;

        let capabilities = self
            .capabilities
            .iter()
            .map(CapabilityBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let additional_attributes = match &self.additional_attributes {
            Some(builder) => builder.build()?,
            None => None,
        };

        debug!(
            "Endpoint {}: {} capabilities, {} connections",
            self.endpoint_id,
            capabilities.len(),
            self.connections.len()
        );

        Ok(DiscoveryEndpoint {
            endpoint_id: self.endpoint_id.clone(),
            manufacturer_name: self.manufacturer_name.clone(),
            description: self.description.clone(),
            friendly_name: self.friendly_name.clone(),
            display_categories: self.display_categories.iter().copied().collect(),
            additional_attributes,
            capabilities,
            connections: self.connections.clone(),
            relationships: self.relationships.clone(),
            cookie: self.cookie.clone(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint_id.chars().count() > MAX_ENDPOINT_ID_LEN
            || !ENDPOINT_ID.is_match(&self.endpoint_id)
        {
            Err(Error::InvalidEndpointId(self.endpoint_id.clone()))?;
        }

        if self.manufacturer_name.is_empty() {
            Err(Error::EmptyManufacturerName)?;
        }
        if self.manufacturer_name.chars().count() > MAX_MANUFACTURER_NAME_LEN {
            Err(Error::ManufacturerNameTooLong(self.manufacturer_name.clone()))?;
        }

        if self.description.is_empty() {
            Err(Error::EmptyDescription)?;
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            Err(Error::DescriptionTooLong(self.description.clone()))?;
        }

        if self.friendly_name.chars().count() > MAX_FRIENDLY_NAME_LEN
            || !FRIENDLY_NAME.is_match(&self.friendly_name)
        {
            Err(Error::InvalidFriendlyName(self.friendly_name.clone()))?;
        }

        if self.display_categories.is_empty() {
            Err(Error::NoDisplayCategories(self.endpoint_id.clone()))?;
        }

        if self.capabilities.is_empty() {
            Err(Error::NoCapabilities(self.endpoint_id.clone()))?;
        }
        if self.capabilities.len() > MAX_CAPABILITIES {
            Err(Error::TooManyCapabilities {
                endpoint: self.endpoint_id.clone(),
                count: self.capabilities.len(),
            })?;
        }

        let size = serde_json::to_string(&self.cookie)?.len();
        if size > MAX_COOKIE_SIZE {
            Err(Error::CookieTooLarge {
                endpoint: self.endpoint_id.clone(),
                size,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::SemanticStateName;
    use crate::error::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    fn endpoint(id: &str, friendly_name: &str) -> DiscoveryEndpointBuilder {
        let mut builder = DiscoveryEndpointBuilder::new(
            id,
            "Sample Manufacturer",
            "Smart Thermostat by Sample Manufacturer",
            friendly_name,
        );
        builder
            .with_display_categories([DisplayCategory::Thermostat])
            .add_capability("Alexa", "3");
        builder
    }

    #[rstest]
    #[case("WC:e889552c8a25")]
    #[case("endpoint-001")]
    #[case("a b_c-d=e#f;g:h?i@j&k")]
    fn valid_endpoint_ids(#[case] id: &str) {
        assert!(endpoint(id, "My Home").build().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("bad,id")]
    #[case("slash/id")]
    #[case(&"a".repeat(MAX_ENDPOINT_ID_LEN + 1))]
    fn invalid_endpoint_ids(#[case] id: &str) {
        let err = endpoint(id, "My Home").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains(&format!("\"{}\"", id)));
    }

    #[test]
    fn endpoint_id_boundary_length() {
        assert!(endpoint(&"a".repeat(MAX_ENDPOINT_ID_LEN), "My Home")
            .build()
            .is_ok());
    }

    #[rstest]
    #[case("My Home")]
    #[case("Système Maison")]
    #[case("居間 2")]
    fn valid_friendly_names(#[case] name: &str) {
        assert!(endpoint("id", name).build().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("bad, name")]
    #[case("kitchen-light")]
    #[case(&"a".repeat(MAX_FRIENDLY_NAME_LEN + 1))]
    fn invalid_friendly_names(#[case] name: &str) {
        assert!(matches!(
            endpoint("id", name).build(),
            Err(Error::InvalidFriendlyName(n)) if n == name
        ));
    }

    #[test]
    fn manufacturer_and_description_bounds() {
        let mut builder = DiscoveryEndpointBuilder::new("id", "", "desc", "name");
        builder
            .with_display_categories([DisplayCategory::Light])
            .add_capability("Alexa", "3");
        assert!(matches!(builder.build(), Err(Error::EmptyManufacturerName)));

        let mut builder = DiscoveryEndpointBuilder::new("id", "m".repeat(129), "desc", "name");
        builder
            .with_display_categories([DisplayCategory::Light])
            .add_capability("Alexa", "3");
        assert!(matches!(builder.build(), Err(Error::ManufacturerNameTooLong(_))));

        let mut builder = DiscoveryEndpointBuilder::new("id", "m", "", "name");
        builder
            .with_display_categories([DisplayCategory::Light])
            .add_capability("Alexa", "3");
        assert!(matches!(builder.build(), Err(Error::EmptyDescription)));

        let mut builder = DiscoveryEndpointBuilder::new("id", "m", "d".repeat(129), "name");
        builder
            .with_display_categories([DisplayCategory::Light])
            .add_capability("Alexa", "3");
        assert!(matches!(builder.build(), Err(Error::DescriptionTooLong(_))));
    }

    #[test]
    fn validation_order_reports_first_failure() {
        let builder = DiscoveryEndpointBuilder::new("bad,id", "", "", "bad, name");
        assert!(matches!(builder.build(), Err(Error::InvalidEndpointId(_))));
    }

    #[test]
    fn display_categories_required_and_deduplicated() {
        let mut builder = DiscoveryEndpointBuilder::new("id", "m", "d", "n");
        builder.add_capability("Alexa", "3");
        assert!(matches!(builder.build(), Err(Error::NoDisplayCategories(id)) if id == "id"));

        builder
            .with_display_categories([DisplayCategory::Light, DisplayCategory::Switch])
            .with_display_categories([DisplayCategory::Light]);
        assert_eq!(
            builder.build().unwrap().display_categories,
            vec![DisplayCategory::Light, DisplayCategory::Switch]
        );
    }

    #[test]
    fn capability_bounds() {
        let mut builder = DiscoveryEndpointBuilder::new("id", "m", "d", "n");
        builder.with_display_categories([DisplayCategory::Light]);
        assert!(matches!(builder.build(), Err(Error::NoCapabilities(_))));

        for _ in 0..MAX_CAPABILITIES {
            builder.add_capability("Alexa", "3");
        }
        assert!(builder.build().is_ok());

        builder.add_capability("Alexa", "3");
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::TooManyCapabilities { count: 101, .. }));
    }

    #[test]
    fn cookie_size_limit() {
        let mut builder = endpoint("id", "n");
        // {"k":"<value>"} adds 8 bytes of framing
        builder.with_cookie("k", "v".repeat(MAX_COOKIE_SIZE - 8));
        assert!(builder.build().is_ok());

        builder.with_cookie("k", "v".repeat(MAX_COOKIE_SIZE - 7));
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::CookieTooLarge { size: 5001, .. }));
    }

    #[test]
    fn optional_blocks_are_omitted() {
        let mut builder = endpoint("id", "n");
        builder.add_additional_attributes().with_model("");

        let value = serde_json::to_value(builder.build().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["additionalAttributes", "connections", "relationships", "cookie"] {
            assert!(!object.contains_key(key), "{} should be omitted", key);
        }
    }

    #[test]
    fn full_endpoint() {
        let mut builder = endpoint("id", "n");
        builder
            .with_tcp_ip_connection(Some("00:11:22:AA:BB:33"))
            .with_zwave_connection(Some("0x00a1b2c3"), None)
            .unwrap()
            .with_relationship("isConnectedBy", "hub-1")
            .with_relationship("isConnectedBy", "hub-2")
            .with_cookie("a", "1")
            .with_cookie("a", "2")
            .add_additional_attributes()
            .with_manufacturer("Sample Manufacturer");
        builder.add_additional_attributes().with_model("T-1000");

        let value = serde_json::to_value(builder.build().unwrap()).unwrap();
        assert_eq!(
            value["additionalAttributes"],
            json!({"manufacturer": "Sample Manufacturer", "model": "T-1000"})
        );
        assert_eq!(
            value["connections"],
            json!([
                {"type": "TCP_IP", "macAddress": "00:11:22:AA:BB:33"},
                {"type": "ZWAVE", "homeId": "0x00a1b2c3"}
            ])
        );
        assert_eq!(
            value["relationships"],
            json!({"isConnectedBy": {"endpointId": "hub-2"}})
        );
        assert_eq!(value["cookie"], json!({"a": "2"}));
    }

    #[test]
    fn connection_arguments_fail_fast() {
        let mut builder = endpoint("id", "n");
        assert!(builder.with_unknown_connection("two words").is_err());
        assert!(builder.with_zwave_connection(None, Some("0x123")).is_err());

        assert!(!serde_json::to_value(builder.build().unwrap())
            .unwrap()
            .as_object()
            .unwrap()
            .contains_key("connections"));
    }

    #[test]
    fn parent_binding_resumes_after_child_chains() {
        let mut builder = endpoint("id", "n");
        builder
            .add_capability("Alexa.PowerController", "3")
            .add_properties()
            .with_retrievable(true);
        builder.add_additional_attributes().with_model("M-1");
        builder
            .add_capability("Alexa.ModeController", "3")
            .with_instance("Wash.Mode")
            .add_semantic_state()
            .with_states([SemanticStateName::Open])
            .with_value("Wash.Mode.On");
        builder.with_cookie("k", "v");

        let built = builder.build().unwrap();
        assert_eq!(built.capabilities.len(), 3);
        assert_eq!(built.capabilities[1].interface, "Alexa.PowerController");
        assert_eq!(built.capabilities[2].instance.as_deref(), Some("Wash.Mode"));
        assert_eq!(built.cookie["k"], "v");
    }
}
