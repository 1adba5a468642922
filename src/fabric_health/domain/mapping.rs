use super::LinkKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Classification of the device on the far end of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Switch,
    Server,
}

impl DeviceType {
    /// Classifies a persisted `Device_Type` cell. Anything other than
    /// `Switch` counts as a server endpoint.
    pub fn classify(label: &str) -> Self {
        if label.trim() == "Switch" {
            Self::Switch
        } else {
            Self::Server
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch => write!(f, "Switch"),
            Self::Server => write!(f, "Server"),
        }
    }
}

/// One physical link endpoint as seen from a switch.
///
/// `(switch_name, v_port)` is the primary key within a snapshot. The serde
/// renames fix the column names of the persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRecord {
    #[serde(rename = "Switch_Name")]
    pub switch_name: String,
    #[serde(rename = "vPort")]
    pub v_port: u32,
    #[serde(rename = "pPort")]
    pub p_port: u32,
    #[serde(rename = "Target_Name")]
    pub target_name: String,
    #[serde(rename = "Target_Port")]
    pub target_port: String,
    #[serde(rename = "Device_Type")]
    pub device_type: DeviceType,
}

/// One row of a persisted mapping snapshot.
///
/// Values stay exactly as loaded; only the key fields are trimmed when the
/// row is indexed, tolerating formatting differences from external tools
/// that rewrite the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    #[serde(rename = "Switch_Name")]
    pub switch_name: String,
    #[serde(rename = "vPort")]
    pub v_port: String,
    #[serde(rename = "pPort")]
    pub p_port: String,
    #[serde(rename = "Target_Name")]
    pub target_name: String,
    #[serde(rename = "Target_Port")]
    pub target_port: String,
    #[serde(rename = "Device_Type")]
    pub device_type: String,
}

impl MappingRow {
    /// Key under which this row is indexed.
    pub fn key(&self) -> LinkKey {
        LinkKey::new(self.switch_name.trim(), self.v_port.trim())
    }
}

/// Keyed in-memory view of a loaded mapping snapshot.
#[derive(Debug, Default)]
pub struct MappingTable {
    rows: HashMap<LinkKey, MappingRow>,
}

impl MappingTable {
    pub fn from_rows(rows: Vec<MappingRow>) -> Self {
        Self {
            rows: rows.into_iter().map(|row| (row.key(), row)).collect(),
        }
    }

    pub fn get(&self, key: &LinkKey) -> Option<&MappingRow> {
        self.rows.get(key)
    }

    pub fn contains(&self, key: &LinkKey) -> bool {
        self.rows.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
