use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::MAX_UNKNOWN_CONNECTION_LEN;

static ZWAVE_HOME_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9A-Fa-f]{8}$").expect("valid Z-Wave home id pattern"));

static ZWAVE_NODE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9A-Fa-f]{2}$").expect("valid Z-Wave node id pattern"));

static UNKNOWN_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("valid unknown connection pattern"));

/// How an endpoint is connected to its hub or the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Connection {
    TcpIp {
        #[serde(
            rename = "macAddress",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        mac_address: Option<String>,
    },
    Zigbee {
        #[serde(
            rename = "macAddress",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        mac_address: Option<String>,
    },
    #[serde(rename = "ZWAVE")]
    ZWave {
        #[serde(rename = "homeId", default, skip_serializing_if = "Option::is_none")]
        home_id: Option<String>,
        #[serde(rename = "nodeId", default, skip_serializing_if = "Option::is_none")]
        node_id: Option<String>,
    },
    Unknown { value: String },
}

impl Connection {
    pub fn tcp_ip(mac_address: Option<&str>) -> Self {
        Self::TcpIp {
            mac_address: mac_address.map(str::to_string),
        }
    }

    pub fn zigbee(mac_address: Option<&str>) -> Self {
        Self::Zigbee {
            mac_address: mac_address.map(str::to_string),
        }
    }

    /// Create a Z-Wave connection, checking the home id (`0x` + 8 hex digits)
    /// and node id (`0x` + 2 hex digits) when present.
    pub fn zwave(home_id: Option<&str>, node_id: Option<&str>) -> Result<Self> {
        if let Some(home_id) = home_id {
            if !ZWAVE_HOME_ID.is_match(home_id) {
                Err(Error::InvalidZWaveHomeId(home_id.to_string()))?;
            }
        }
        if let Some(node_id) = node_id {
            if !ZWAVE_NODE_ID.is_match(node_id) {
                Err(Error::InvalidZWaveNodeId(node_id.to_string()))?;
            }
        }

        Ok(Self::ZWave {
            home_id: home_id.map(str::to_string),
            node_id: node_id.map(str::to_string),
        })
    }

    pub fn unknown(value: &str) -> Result<Self> {
        if value.chars().count() > MAX_UNKNOWN_CONNECTION_LEN || !UNKNOWN_VALUE.is_match(value) {
            Err(Error::InvalidUnknownConnection(value.to_string()))?;
        }

        Ok(Self::Unknown {
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Connection::tcp_ip(Some("00:11:22:AA:BB:33")), json!({"type": "TCP_IP", "macAddress": "00:11:22:AA:BB:33"}))]
    #[case(Connection::tcp_ip(None), json!({"type": "TCP_IP"}))]
    #[case(Connection::zigbee(Some("00:11:22:33:44:55:66:77")), json!({"type": "ZIGBEE", "macAddress": "00:11:22:33:44:55:66:77"}))]
    #[case(Connection::zwave(Some("0x00a1b2c3"), Some("0x0f")).unwrap(), json!({"type": "ZWAVE", "homeId": "0x00a1b2c3", "nodeId": "0x0f"}))]
    #[case(Connection::unknown("XXXXXXXX").unwrap(), json!({"type": "UNKNOWN", "value": "XXXXXXXX"}))]
    fn wire_shape(#[case] connection: Connection, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(connection).unwrap(), expected);
    }

    #[rstest]
    #[case(Some("00a1b2c3"), None)]
    #[case(Some("0x00a1b2c"), None)]
    #[case(Some("0x00a1b2cz"), None)]
    #[case(None, Some("0x1"))]
    #[case(None, Some("0xzz"))]
    fn invalid_zwave_ids(#[case] home_id: Option<&str>, #[case] node_id: Option<&str>) {
        let err = Connection::zwave(home_id, node_id).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidZWaveHomeId(_) | Error::InvalidZWaveNodeId(_)
        ));
    }

    #[rstest]
    #[case("")]
    #[case("has space")]
    #[case("tab\there")]
    fn invalid_unknown_values(#[case] value: &str) {
        assert!(matches!(
            Connection::unknown(value),
            Err(Error::InvalidUnknownConnection(v)) if v == value
        ));
    }

    #[test]
    fn unknown_value_length_bound() {
        assert!(Connection::unknown(&"a".repeat(MAX_UNKNOWN_CONNECTION_LEN)).is_ok());
        assert!(Connection::unknown(&"a".repeat(MAX_UNKNOWN_CONNECTION_LEN + 1)).is_err());
    }
}
