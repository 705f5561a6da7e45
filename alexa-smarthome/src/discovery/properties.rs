use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedProperty {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported: Vec<SupportedProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proactively_reported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrievable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_controllable: Option<bool>,
}

/// Builds the `properties` block of a capability.
///
/// A builder that was never configured produces nothing, which keeps
/// "not configured" distinct from "configured as false".
#[derive(Debug, Clone, Default)]
pub struct PropertiesBuilder {
    supported: IndexSet<String>,
    proactively_reported: Option<bool>,
    retrievable: Option<bool>,
    non_controllable: Option<bool>,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supported_properties<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_proactively_reported(&mut self, proactively_reported: bool) -> &mut Self {
        self.proactively_reported = Some(proactively_reported);
        self
    }

    pub fn with_retrievable(&mut self, retrievable: bool) -> &mut Self {
        self.retrievable = Some(retrievable);
        self
    }

    pub fn with_non_controllable(&mut self, non_controllable: bool) -> &mut Self {
        self.non_controllable = Some(non_controllable);
        self
    }

    pub fn build(&self) -> Option<Properties> {
        if self.supported.is_empty()
            && self.proactively_reported.is_none()
            && self.retrievable.is_none()
            && self.non_controllable.is_none()
        {
            return None;
        }

        Some(Properties {
            supported: self
                .supported
                .iter()
                .map(|name| SupportedProperty { name: name.clone() })
                .collect(),
            proactively_reported: self.proactively_reported,
            retrievable: self.retrievable,
            non_controllable: self.non_controllable,
        })
    }
}
