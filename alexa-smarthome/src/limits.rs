//! Protocol limits enforced while realizing discovery payloads.

/// Maximum number of endpoints in one discovery response.
pub const MAX_ENDPOINTS: usize = 300;
/// Maximum number of capabilities on one endpoint.
pub const MAX_CAPABILITIES: usize = 100;

pub const MAX_ENDPOINT_ID_LEN: usize = 256;
pub const MAX_MANUFACTURER_NAME_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 128;
pub const MAX_FRIENDLY_NAME_LEN: usize = 128;

/// Maximum length of each additional attribute field.
pub const MAX_ATTRIBUTE_LEN: usize = 256;

/// Maximum size in bytes of the JSON-serialized endpoint cookie.
pub const MAX_COOKIE_SIZE: usize = 5000;

pub const MAX_UNKNOWN_CONNECTION_LEN: usize = 256;

/// The payload version stamped on every message header.
pub const PAYLOAD_VERSION: &str = "3";
