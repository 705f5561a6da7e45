//! Friendly-name resource labels used by capability and mode/preset resources.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The locales a text resource label can be declared in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Locale {
    #[serde(rename = "de-DE")]
    #[strum(serialize = "de-DE")]
    DeDe,
    #[serde(rename = "en-AU")]
    #[strum(serialize = "en-AU")]
    EnAu,
    #[serde(rename = "en-CA")]
    #[strum(serialize = "en-CA")]
    EnCa,
    #[serde(rename = "en-GB")]
    #[strum(serialize = "en-GB")]
    EnGb,
    #[serde(rename = "en-IN")]
    #[strum(serialize = "en-IN")]
    EnIn,
    #[serde(rename = "en-US")]
    #[strum(serialize = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    #[strum(serialize = "es-ES")]
    EsEs,
    #[serde(rename = "es-MX")]
    #[strum(serialize = "es-MX")]
    EsMx,
    #[serde(rename = "es-US")]
    #[strum(serialize = "es-US")]
    EsUs,
    #[serde(rename = "fr-CA")]
    #[strum(serialize = "fr-CA")]
    FrCa,
    #[serde(rename = "fr-FR")]
    #[strum(serialize = "fr-FR")]
    FrFr,
    #[serde(rename = "hi-IN")]
    #[strum(serialize = "hi-IN")]
    HiIn,
    #[serde(rename = "it-IT")]
    #[strum(serialize = "it-IT")]
    ItIt,
    #[serde(rename = "ja-JP")]
    #[strum(serialize = "ja-JP")]
    JaJp,
    #[serde(rename = "pt-BR")]
    #[strum(serialize = "pt-BR")]
    PtBr,
}

/// A single friendly name: either a reference into the global asset
/// catalog or a literal text in a given locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", content = "value", rename_all = "camelCase")]
pub enum ResourceLabel {
    Asset {
        #[serde(rename = "assetId")]
        asset_id: String,
    },
    Text { text: String, locale: Locale },
}

impl ResourceLabel {
    pub fn asset(asset_id: impl Into<String>) -> Self {
        Self::Asset {
            asset_id: asset_id.into(),
        }
    }

    pub fn text(text: impl Into<String>, locale: Locale) -> Self {
        Self::Text {
            text: text.into(),
            locale,
        }
    }
}

/// Identifiers from the global friendly-name asset catalog.
pub mod asset_ids {
    pub const DEVICE_NAME_SHOWER: &str = "Alexa.DeviceName.Shower";
    pub const DEVICE_NAME_WASHER: &str = "Alexa.DeviceName.Washer";
    pub const DEVICE_NAME_ROUTER: &str = "Alexa.DeviceName.Router";
    pub const DEVICE_NAME_FAN: &str = "Alexa.DeviceName.Fan";
    pub const DEVICE_NAME_AIR_PURIFIER: &str = "Alexa.DeviceName.AirPurifier";
    pub const DEVICE_NAME_SPACE_HEATER: &str = "Alexa.DeviceName.SpaceHeater";
    pub const DEVICE_NAME_RAIN_HEAD: &str = "Alexa.Shower.RainHead";
    pub const DEVICE_NAME_HAND_HELD: &str = "Alexa.Shower.HandHeld";
    pub const SETTING_2G_GUEST_WIFI: &str = "Alexa.Setting.2GGuestWiFi";
    pub const SETTING_5G_GUEST_WIFI: &str = "Alexa.Setting.5GGuestWiFi";
    pub const SETTING_AUTO: &str = "Alexa.Setting.Auto";
    pub const SETTING_DIRECTION: &str = "Alexa.Setting.Direction";
    pub const SETTING_DRY_CYCLE: &str = "Alexa.Setting.DryCycle";
    pub const SETTING_FAN_SPEED: &str = "Alexa.Setting.FanSpeed";
    pub const SETTING_GUEST_WIFI: &str = "Alexa.Setting.GuestWiFi";
    pub const SETTING_HEAT: &str = "Alexa.Setting.Heat";
    pub const SETTING_MODE: &str = "Alexa.Setting.Mode";
    pub const SETTING_NIGHT: &str = "Alexa.Setting.Night";
    pub const SETTING_OPENING: &str = "Alexa.Setting.Opening";
    pub const SETTING_OSCILLATE: &str = "Alexa.Setting.Oscillate";
    pub const SETTING_PRESET: &str = "Alexa.Setting.Preset";
    pub const SETTING_QUIET: &str = "Alexa.Setting.Quiet";
    pub const SETTING_TEMPERATURE: &str = "Alexa.Setting.Temperature";
    pub const SETTING_WASH_CYCLE: &str = "Alexa.Setting.WashCycle";
    pub const SETTING_WATER_TEMPERATURE: &str = "Alexa.Setting.WaterTemperature";
    pub const VALUE_CLOSE: &str = "Alexa.Value.Close";
    pub const VALUE_DELICATE: &str = "Alexa.Value.Delicate";
    pub const VALUE_HIGH: &str = "Alexa.Value.High";
    pub const VALUE_LOW: &str = "Alexa.Value.Low";
    pub const VALUE_MAXIMUM: &str = "Alexa.Value.Maximum";
    pub const VALUE_MEDIUM: &str = "Alexa.Value.Medium";
    pub const VALUE_MINIMUM: &str = "Alexa.Value.Minimum";
    pub const VALUE_OPEN: &str = "Alexa.Value.Open";
    pub const VALUE_QUICK_WASH: &str = "Alexa.Value.QuickWash";
}
