//! Request payloads and path-segment types for the CyREST API.
//!
//! Responses are passed through as [`serde_json::Value`]; only request
//! bodies with a documented wire shape get typed models here. Optional
//! fields are skipped during serialization so the service never sees
//! null placeholders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A visual property name/value pair, e.g. `NODE_BORDER_WIDTH` = `2`.
///
/// The value type depends on the property: numbers for widths and
/// transparencies, color strings for paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualProperty {
    pub visual_property: String,
    pub value: serde_json::Value,
}

impl VisualProperty {
    pub fn new(visual_property: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            visual_property: visual_property.into(),
            value: value.into(),
        }
    }
}

/// Visual properties applied to a single view object, keyed by its SUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectVisualProperties {
    #[serde(rename = "SUID")]
    pub suid: u64,
    pub view: Vec<VisualProperty>,
}

/// A new edge between two existing nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEdge {
    pub source: u64,
    pub target: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<String>,
}

/// A new, empty table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
}

/// Renames an existing table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRename {
    pub old_name: String,
    pub new_name: String,
}

/// A cell value keyed by the SUID of its row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowValue {
    #[serde(rename = "SUID")]
    pub suid: u64,
    pub value: serde_json::Value,
}

/// A new group over existing nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub nodes: Vec<u64>,
}

/// Credentials and metadata for saving a network to an NDEx server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdexSaveRequest {
    pub server_url: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Locator and credentials for importing a network from an NDEx server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdexImportRequest {
    pub server_url: String,
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
}

/// View object class addressed by view operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Nodes,
    Edges,
    Network,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Nodes => "nodes",
            ObjectType::Edges => "edges",
            ObjectType::Network => "network",
        })
    }
}

/// Data table addressed by table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    Node,
    Edge,
    Network,
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableType::Node => "defaultnode",
            TableType::Edge => "defaultedge",
            TableType::Network => "defaultnetwork",
        })
    }
}

/// Which end of an edge to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgeEnd::Source => "source",
            EdgeEnd::Target => "target",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optional_fields_are_not_serialized() {
        let edge = NewEdge {
            source: 101,
            target: 102,
            directed: None,
            interaction: None,
        };
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({"source": 101, "target": 102})
        );
    }

    #[test]
    fn visual_property_uses_camel_case_on_the_wire() {
        let prop = VisualProperty::new("NODE_BORDER_WIDTH", 2);
        assert_eq!(
            serde_json::to_value(&prop).unwrap(),
            json!({"visualProperty": "NODE_BORDER_WIDTH", "value": 2})
        );
    }

    #[test]
    fn row_value_keys_by_suid() {
        let row = RowValue {
            suid: 101,
            value: json!(0.5),
        };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({"SUID": 101, "value": 0.5})
        );
    }

    #[test]
    fn path_segments_render_lowercase() {
        assert_eq!(ObjectType::Nodes.to_string(), "nodes");
        assert_eq!(TableType::Edge.to_string(), "defaultedge");
        assert_eq!(EdgeEnd::Target.to_string(), "target");
    }
}
