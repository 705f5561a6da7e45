use core::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::limits::{
    MAX_ATTRIBUTE_LEN, MAX_CAPABILITIES, MAX_COOKIE_SIZE, MAX_DESCRIPTION_LEN, MAX_ENDPOINTS,
    MAX_ENDPOINT_ID_LEN, MAX_FRIENDLY_NAME_LEN, MAX_MANUFACTURER_NAME_LEN,
    MAX_UNKNOWN_CONNECTION_LEN,
};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Coarse classification of an [`Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A field does not match its pattern or length bound.
    Format,
    /// A bounded collection has too few or too many entries.
    Cardinality,
    /// Independently built objects conflict with each other.
    Consistency,
    /// A mandatory either/or choice was never made.
    MissingChoice,
    /// No handler accepted a request.
    Dispatch,
    /// A message could not be (de)serialized.
    Serialization,
}

/// Where a semantic action name is claimed inside a discovery payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticActionLocation {
    pub endpoint: String,
    pub capability: String,
    pub instance: Option<String>,
}

impl fmt::Display for SemanticActionLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{endpoint: \"{}\", capability: \"{}\"",
            self.endpoint, self.capability
        )?;
        if let Some(instance) = &self.instance {
            write!(f, ", instance: \"{}\"", instance)?;
        }
        write!(f, "}}")
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Invalid endpointId \"{0}\": expected 1-{max} letters, digits, spaces or any of _-=#;:?@&", max = MAX_ENDPOINT_ID_LEN)]
    #[diagnostic(code(alexa::discovery::endpoint_id))]
    InvalidEndpointId(String),

    #[error("manufacturerName must not be empty")]
    #[diagnostic(code(alexa::discovery::manufacturer_name))]
    EmptyManufacturerName,

    #[error("manufacturerName \"{0}\" exceeds {max} characters", max = MAX_MANUFACTURER_NAME_LEN)]
    #[diagnostic(code(alexa::discovery::manufacturer_name))]
    ManufacturerNameTooLong(String),

    #[error("description must not be empty")]
    #[diagnostic(code(alexa::discovery::description))]
    EmptyDescription,

    #[error("description \"{0}\" exceeds {max} characters", max = MAX_DESCRIPTION_LEN)]
    #[diagnostic(code(alexa::discovery::description))]
    DescriptionTooLong(String),

    #[error("Invalid friendlyName \"{0}\": expected 1-{max} letters, digits or spaces", max = MAX_FRIENDLY_NAME_LEN)]
    #[diagnostic(code(alexa::discovery::friendly_name))]
    InvalidFriendlyName(String),

    #[error("Endpoint \"{0}\" must declare at least one display category")]
    #[diagnostic(code(alexa::discovery::display_categories))]
    NoDisplayCategories(String),

    #[error("Endpoint \"{0}\" must declare at least one capability")]
    #[diagnostic(code(alexa::discovery::capabilities))]
    NoCapabilities(String),

    #[error("Endpoint \"{endpoint}\" declares {count} capabilities, the number of capabilities cannot exceed {max}", max = MAX_CAPABILITIES)]
    #[diagnostic(code(alexa::discovery::capabilities))]
    TooManyCapabilities { endpoint: String, count: usize },

    #[error("Endpoint \"{endpoint}\" cookie is {size} bytes, the cookie size cannot exceed {max} bytes", max = MAX_COOKIE_SIZE)]
    #[diagnostic(code(alexa::discovery::cookie))]
    CookieTooLarge { endpoint: String, size: usize },

    #[error("Invalid Z-Wave homeId \"{0}\": expected 0x followed by 8 hex digits")]
    #[diagnostic(code(alexa::discovery::connection))]
    InvalidZWaveHomeId(String),

    #[error("Invalid Z-Wave nodeId \"{0}\": expected 0x followed by 2 hex digits")]
    #[diagnostic(code(alexa::discovery::connection))]
    InvalidZWaveNodeId(String),

    #[error("Invalid unknown connection value \"{0}\": expected 1-{max} non-whitespace characters", max = MAX_UNKNOWN_CONNECTION_LEN)]
    #[diagnostic(code(alexa::discovery::connection))]
    InvalidUnknownConnection(String),

    #[error("Additional attribute {field} \"{value}\" exceeds {max} characters", max = MAX_ATTRIBUTE_LEN)]
    #[diagnostic(code(alexa::discovery::additional_attributes))]
    AttributeTooLong { field: &'static str, value: String },

    #[error("At least one semantic action must be specified for directive \"{0}\"")]
    #[diagnostic(code(alexa::discovery::semantics))]
    NoSemanticActions(String),

    #[error("At least one semantic state must be specified")]
    #[diagnostic(code(alexa::discovery::semantics))]
    NoSemanticStates,

    #[error("Either a value or range must be specified for a semantic state mapping")]
    #[diagnostic(
        code(alexa::discovery::semantics),
        help("call `with_value` or `with_range` on the state builder")
    )]
    MissingStateTarget,

    #[error("{0} endpoints were added, the number of endpoints cannot exceed {max}", max = MAX_ENDPOINTS)]
    #[diagnostic(code(alexa::discovery::endpoints))]
    TooManyEndpoints(usize),

    #[error("Duplicate endpoint IDs found: {}", .0.join(", "))]
    #[diagnostic(code(alexa::discovery::endpoints))]
    DuplicateEndpointIds(Vec<String>),

    #[error("Semantic action \"{action}\" is claimed by multiple capabilities: {}", join_locations(.locations))]
    #[diagnostic(
        code(alexa::discovery::semantics),
        help("each semantic action name may be mapped by a single capability instance")
    )]
    SemanticActionCollision {
        action: String,
        locations: Vec<SemanticActionLocation>,
    },

    #[error("No request handler registered for {namespace}.{name}")]
    #[diagnostic(code(alexa::envelope::no_handler))]
    NoHandler { namespace: String, name: String },

    #[error("Invalid message JSON: {0}")]
    #[diagnostic(code(alexa::envelope::json))]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEndpointId(_)
            | Self::EmptyManufacturerName
            | Self::ManufacturerNameTooLong(_)
            | Self::EmptyDescription
            | Self::DescriptionTooLong(_)
            | Self::InvalidFriendlyName(_)
            | Self::CookieTooLarge { .. }
            | Self::InvalidZWaveHomeId(_)
            | Self::InvalidZWaveNodeId(_)
            | Self::InvalidUnknownConnection(_)
            | Self::AttributeTooLong { .. } => ErrorKind::Format,
            Self::NoDisplayCategories(_)
            | Self::NoCapabilities(_)
            | Self::TooManyCapabilities { .. }
            | Self::NoSemanticActions(_)
            | Self::NoSemanticStates
            | Self::TooManyEndpoints(_) => ErrorKind::Cardinality,
            Self::DuplicateEndpointIds(_) | Self::SemanticActionCollision { .. } => {
                ErrorKind::Consistency
            }
            Self::MissingStateTarget => ErrorKind::MissingChoice,
            Self::NoHandler { .. } => ErrorKind::Dispatch,
            Self::Json(_) => ErrorKind::Serialization,
        }
    }
}

fn join_locations(locations: &[SemanticActionLocation]) -> String {
    locations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
