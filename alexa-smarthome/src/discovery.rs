//! Builders for the `Alexa.Discovery` response payload.
//!
//! A [`DiscoveryPayloadBuilder`] owns a tree of child builders
//! (endpoints, which own capabilities, which own properties and semantic mappings).
//! Nothing is validated while the tree is being configured; calling `build()`
//! on any node performs a full, fail-fast validation of that node and its
//! children and returns a plain, serializable value.
//!
//! ```
//! use alexa_smarthome::discovery::{DiscoveryPayloadBuilder, DisplayCategory};
//!
//! let mut builder = DiscoveryPayloadBuilder::new();
//! builder
//!     .add_discovery_endpoint(
//!         "WC:e889552c8a25",
//!         "Sample Manufacturer",
//!         "Smart Thermostat by Sample Manufacturer",
//!         "My Home",
//!     )
//!     .with_display_categories([DisplayCategory::Thermostat])
//!     .add_capability("Alexa", "3");
//!
//! let payload = builder.build().expect("valid payload");
//! assert_eq!(payload.endpoints.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub use attributes::*;
pub use capability::*;
pub use connection::*;
pub use endpoint::*;
pub use payload::*;
pub use properties::*;
pub use semantics::*;

mod attributes;
mod capability;
mod connection;
mod endpoint;
mod payload;
mod properties;
mod semantics;

/// The namespace of discovery directives and events.
pub const DISCOVERY_NAMESPACE: &str = "Alexa.Discovery";

/// How a device is shown in the companion app's device list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    ActivityTrigger,
    AirFreshener,
    AirPurifier,
    AutoAccessory,
    Camera,
    ChristmasTree,
    CoffeeMaker,
    Computer,
    ContactSensor,
    Door,
    Doorbell,
    ExteriorBlind,
    Fan,
    GameConsole,
    GarageDoor,
    Headphones,
    Hub,
    InteriorBlind,
    Laptop,
    Light,
    Microwave,
    MobilePhone,
    MotionSensor,
    MusicSystem,
    NetworkHardware,
    Other,
    Oven,
    Phone,
    Printer,
    Router,
    SceneTrigger,
    Screen,
    SecurityPanel,
    SecuritySystem,
    SlowCooker,
    Smartlock,
    Smartplug,
    Speaker,
    StreamingDevice,
    Switch,
    Tablet,
    TemperatureSensor,
    Thermostat,
    Tv,
    VacuumCleaner,
    Wearable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DisplayCategory::Thermostat, "THERMOSTAT")]
    #[case(DisplayCategory::ActivityTrigger, "ACTIVITY_TRIGGER")]
    #[case(DisplayCategory::Tv, "TV")]
    #[case(DisplayCategory::Smartlock, "SMARTLOCK")]
    fn display_category_names(#[case] category: DisplayCategory, #[case] name: &str) {
        assert_eq!(category.as_ref(), name);
        assert_eq!(name.parse::<DisplayCategory>().unwrap(), category);
        assert_eq!(serde_json::to_value(category).unwrap(), serde_json::json!(name));
    }
}
