use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::MAX_ATTRIBUTE_LEN;

/// Device identity metadata reported alongside an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_identifier: Option<String>,
}

impl AdditionalAttributes {
    fn is_empty(&self) -> bool {
        self.manufacturer.is_none()
            && self.model.is_none()
            && self.serial_number.is_none()
            && self.firmware_version.is_none()
            && self.software_version.is_none()
            && self.custom_identifier.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdditionalAttributesBuilder {
    attributes: AdditionalAttributes,
}

impl AdditionalAttributesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(&mut self, manufacturer: impl Into<String>) -> &mut Self {
        self.attributes.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model(&mut self, model: impl Into<String>) -> &mut Self {
        self.attributes.model = Some(model.into());
        self
    }

    pub fn with_serial_number(&mut self, serial_number: impl Into<String>) -> &mut Self {
        self.attributes.serial_number = Some(serial_number.into());
        self
    }

    pub fn with_firmware_version(&mut self, firmware_version: impl Into<String>) -> &mut Self {
        self.attributes.firmware_version = Some(firmware_version.into());
        self
    }

    pub fn with_software_version(&mut self, software_version: impl Into<String>) -> &mut Self {
        self.attributes.software_version = Some(software_version.into());
        self
    }

    pub fn with_custom_identifier(&mut self, custom_identifier: impl Into<String>) -> &mut Self {
        self.attributes.custom_identifier = Some(custom_identifier.into());
        self
    }

    /// Validate and return the attributes, or `None` when none of them is set.
    ///
    /// Empty strings count as unset.
    pub fn build(&self) -> Result<Option<AdditionalAttributes>> {
        let a = &self.attributes;
        let attributes = AdditionalAttributes {
            manufacturer: sanitize("manufacturer", a.manufacturer.as_deref())?,
            model: sanitize("model", a.model.as_deref())?,
            serial_number: sanitize("serialNumber", a.serial_number.as_deref())?,
            firmware_version: sanitize("firmwareVersion", a.firmware_version.as_deref())?,
            software_version: sanitize("softwareVersion", a.software_version.as_deref())?,
            custom_identifier: sanitize("customIdentifier", a.custom_identifier.as_deref())?,
        };

        Ok((!attributes.is_empty()).then_some(attributes))
    }
}

fn sanitize(field: &'static str, value: Option<&str>) -> Result<Option<String>> {
    match value {
        None | Some("") => Ok(None),
        Some(value) if value.chars().count() > MAX_ATTRIBUTE_LEN => Err(Error::AttributeTooLong {
            field,
            value: value.to_string(),
        }),
        Some(value) => Ok(Some(value.to_string())),
    }
}
