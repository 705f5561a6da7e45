use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use strum::{AsRefStr, Display, EnumString};

use crate::error::{Error, Result};

/// Natural-language actions that can be mapped onto a capability directive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum SemanticActionName {
    #[serde(rename = "Alexa.Actions.Open")]
    #[strum(serialize = "Alexa.Actions.Open")]
    Open,
    #[serde(rename = "Alexa.Actions.Close")]
    #[strum(serialize = "Alexa.Actions.Close")]
    Close,
    #[serde(rename = "Alexa.Actions.Raise")]
    #[strum(serialize = "Alexa.Actions.Raise")]
    Raise,
    #[serde(rename = "Alexa.Actions.Lower")]
    #[strum(serialize = "Alexa.Actions.Lower")]
    Lower,
}

/// Natural-language states that can be mapped onto a capability value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum SemanticStateName {
    #[serde(rename = "Alexa.States.Open")]
    #[strum(serialize = "Alexa.States.Open")]
    Open,
    #[serde(rename = "Alexa.States.Closed")]
    #[strum(serialize = "Alexa.States.Closed")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveTarget {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// `ActionsToDirective` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type", rename = "ActionsToDirective")]
pub struct ActionMapping {
    pub actions: Vec<SemanticActionName>,
    pub directive: DirectiveTarget,
}

/// The value a set of states maps onto: a mode/toggle value or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Number(Number),
    Text(String),
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Number> for StateValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

macro_rules! state_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StateValue {
                fn from(value: $t) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

state_value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRange {
    pub minimum_value: Number,
    pub maximum_value: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum StateMapping {
    StatesToValue {
        states: Vec<SemanticStateName>,
        value: StateValue,
    },
    StatesToRange {
        states: Vec<SemanticStateName>,
        range: StateRange,
    },
}

impl StateMapping {
    pub fn states(&self) -> &[SemanticStateName] {
        match self {
            Self::StatesToValue { states, .. } | Self::StatesToRange { states, .. } => states,
        }
    }
}

/// Builds one `ActionsToDirective` mapping for a capability.
#[derive(Debug, Clone)]
pub struct SemanticActionBuilder {
    directive: String,
    actions: IndexSet<SemanticActionName>,
    payload: Option<Value>,
}

impl SemanticActionBuilder {
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            actions: IndexSet::new(),
            payload: None,
        }
    }

    /// The directive the actions are mapped to.
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Add actions to the mapping. Repeated names are ignored.
    pub fn with_actions<I>(&mut self, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = SemanticActionName>,
    {
        self.actions.extend(actions);
        self
    }

    /// Set the directive-specific payload sent when one of the actions is spoken.
    pub fn with_directive_payload(&mut self, payload: Option<Value>) -> &mut Self {
        self.payload = payload;
        self
    }

    pub fn build(&self) -> Result<ActionMapping> {
        if self.actions.is_empty() {
            Err(Error::NoSemanticActions(self.directive.clone()))?;
        }

        Ok(ActionMapping {
            actions: self.actions.iter().copied().collect(),
            directive: DirectiveTarget {
                name: self.directive.clone(),
                payload: self.payload.clone(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum StateTarget {
    Value(StateValue),
    Range(StateRange),
}

/// Builds one `StatesToValue` or `StatesToRange` mapping for a capability.
///
/// `with_value` and `with_range` are mutually exclusive; the last call wins.
#[derive(Debug, Clone, Default)]
pub struct SemanticStateBuilder {
    states: IndexSet<SemanticStateName>,
    target: Option<StateTarget>,
}

impl SemanticStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_states<I>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator<Item = SemanticStateName>,
    {
        self.states.extend(states);
        self
    }

    pub fn with_value(&mut self, value: impl Into<StateValue>) -> &mut Self {
        self.target = Some(StateTarget::Value(value.into()));
        self
    }

    pub fn with_range(
        &mut self,
        minimum_value: impl Into<Number>,
        maximum_value: impl Into<Number>,
    ) -> &mut Self {
        self.target = Some(StateTarget::Range(StateRange {
            minimum_value: minimum_value.into(),
            maximum_value: maximum_value.into(),
        }));
        self
    }

    pub fn build(&self) -> Result<StateMapping> {
        if self.states.is_empty() {
            Err(Error::NoSemanticStates)?;
        }

        let states = self.states.iter().copied().collect();

        match &self.target {
            Some(StateTarget::Value(value)) => Ok(StateMapping::StatesToValue {
                states,
                value: value.clone(),
            }),
            Some(StateTarget::Range(range)) => Ok(StateMapping::StatesToRange {
                states,
                range: range.clone(),
            }),
            None => Err(Error::MissingStateTarget),
        }
    }
}
