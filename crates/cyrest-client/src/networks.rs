//! The `networks` resource group: networks, nodes, edges, groups, tables
//! and views of the running session.
//!
//! Every method maps one endpoint: it interpolates identifiers into the
//! path template, serializes optional query parameters, and delegates to
//! the shared dispatch helper. No method combines requests or interprets
//! the response beyond the content-class decode.

use serde_json::{Value, json};

use crate::common::HttpClient;
use crate::error::CyRestError;
use crate::models::{
    ColumnRename, EdgeEnd, NewColumn, NewEdge, NewGroup, ObjectType, ObjectVisualProperties,
    RowValue, TableType, VisualProperty,
};

/// Client for the `networks` resource group.
#[derive(Debug)]
pub struct Networks<'a> {
    http: &'a HttpClient,
}

impl<'a> Networks<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    fn path(&self, rest: &str) -> String {
        format!("/{}/networks{}", self.http.version(), rest)
    }

    // ---- networks ----------------------------------------------------

    /// Returns the number of networks in the current session.
    pub async fn get_network_count(&self) -> Result<Value, CyRestError> {
        self.http.get(&self.path("/count"), &[]).await
    }

    /// Returns the network with all associated tables in Cytoscape.js
    /// JSON format.
    pub async fn get_network(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.get(&self.path(&format!("/{network_id}")), &[]).await
    }

    /// Creates a new sub-network from the current selection.
    ///
    /// `title` names the new sub-network when set. Returns the SUID of
    /// the new sub-network.
    pub async fn create_network_from_selected(
        &self,
        network_id: u64,
        title: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [("title", title.map(str::to_string))];
        self.http
            .post(&self.path(&format!("/{network_id}")), &params, None)
            .await
    }

    /// Deletes the network.
    pub async fn delete_network(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.delete(&self.path(&format!("/{network_id}"))).await
    }

    /// Returns the current network.
    pub async fn get_current_network(&self) -> Result<Value, CyRestError> {
        self.http.get(&self.path("/currentNetwork"), &[]).await
    }

    /// Sets the current network.
    pub async fn set_current_network(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .put(
                &self.path("/currentNetwork"),
                &[],
                &json!({ "networkId": network_id }),
            )
            .await
    }

    // ---- nodes -------------------------------------------------------

    /// Returns all nodes in the network as a list of SUIDs.
    ///
    /// When `column` and `query` are set, the results are limited to
    /// rows of the node table where the value in `column` matches
    /// `query`.
    pub async fn get_nodes(
        &self,
        network_id: u64,
        column: Option<&str>,
        query: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [
            ("column", column.map(str::to_string)),
            ("query", query.map(str::to_string)),
        ];
        self.http
            .get(&self.path(&format!("/{network_id}/nodes")), &params)
            .await
    }

    /// Adds new nodes to the network; the `name` column is populated
    /// from the given names. Returns the new SUIDs.
    pub async fn create_nodes(
        &self,
        network_id: u64,
        names: &[&str],
    ) -> Result<Value, CyRestError> {
        self.http
            .post(
                &self.path(&format!("/{network_id}/nodes")),
                &[],
                Some(&json!(names)),
            )
            .await
    }

    /// Deletes all nodes from the network.
    pub async fn delete_all_nodes(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.delete(&self.path(&format!("/{network_id}/nodes"))).await
    }

    /// Returns a node with its associated row data.
    pub async fn get_node(&self, network_id: u64, node_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/nodes/{node_id}")), &[])
            .await
    }

    /// Deletes the node.
    pub async fn delete_node(&self, network_id: u64, node_id: u64) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!("/{network_id}/nodes/{node_id}")))
            .await
    }

    /// Returns the number of nodes in the network.
    pub async fn get_node_count(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/nodes/count")), &[])
            .await
    }

    /// Returns the selected nodes as a list of SUIDs.
    pub async fn get_selected_nodes(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/nodes/selected")), &[])
            .await
    }

    /// Sets the node selection. Returns the selected SUIDs.
    pub async fn set_selected_nodes(
        &self,
        network_id: u64,
        suids: &[u64],
    ) -> Result<Value, CyRestError> {
        self.http
            .put(
                &self.path(&format!("/{network_id}/nodes/selected")),
                &[],
                &json!(suids),
            )
            .await
    }

    /// Returns the neighbors of the currently selected nodes, not
    /// including the selection itself.
    pub async fn get_selected_neighbors(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/nodes/selected/neighbors")),
                &[],
            )
            .await
    }

    /// Returns the neighbors of a node as a list of SUIDs.
    pub async fn get_neighbors(
        &self,
        network_id: u64,
        node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/nodes/{node_id}/neighbors")),
                &[],
            )
            .await
    }

    /// Returns the edges connected to a node as a list of SUIDs.
    pub async fn get_adjacent_edges(
        &self,
        network_id: u64,
        node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/nodes/{node_id}/adjEdges")),
                &[],
            )
            .await
    }

    /// If the node has an associated nested network, returns the SUID of
    /// the nested network.
    pub async fn get_network_pointer(
        &self,
        network_id: u64,
        node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/nodes/{node_id}/pointer")),
                &[],
            )
            .await
    }

    // ---- edges -------------------------------------------------------

    /// Returns all edges in the network as a list of SUIDs, optionally
    /// filtered by an edge-table `column` / `query` match.
    pub async fn get_edges(
        &self,
        network_id: u64,
        column: Option<&str>,
        query: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [
            ("column", column.map(str::to_string)),
            ("query", query.map(str::to_string)),
        ];
        self.http
            .get(&self.path(&format!("/{network_id}/edges")), &params)
            .await
    }

    /// Adds new edges to the network. Returns the new edge SUIDs along
    /// with their source and target SUIDs.
    pub async fn create_edges(
        &self,
        network_id: u64,
        edges: &[NewEdge],
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(edges)?;
        self.http
            .post(&self.path(&format!("/{network_id}/edges")), &[], Some(&body))
            .await
    }

    /// Deletes all edges from the network.
    pub async fn delete_all_edges(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.delete(&self.path(&format!("/{network_id}/edges"))).await
    }

    /// Returns an edge with its associated row data.
    pub async fn get_edge(&self, network_id: u64, edge_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/edges/{edge_id}")), &[])
            .await
    }

    /// Deletes the edge.
    pub async fn delete_edge(&self, network_id: u64, edge_id: u64) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!("/{network_id}/edges/{edge_id}")))
            .await
    }

    /// Returns the number of edges in the network.
    pub async fn get_edge_count(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/edges/count")), &[])
            .await
    }

    /// Returns the selected edges as a list of SUIDs.
    pub async fn get_selected_edges(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/edges/selected")), &[])
            .await
    }

    /// Sets the edge selection. Returns the selected SUIDs.
    pub async fn set_selected_edges(
        &self,
        network_id: u64,
        suids: &[u64],
    ) -> Result<Value, CyRestError> {
        self.http
            .put(
                &self.path(&format!("/{network_id}/edges/selected")),
                &[],
                &json!(suids),
            )
            .await
    }

    /// Returns true if the edge is directed.
    pub async fn get_edge_directed(
        &self,
        network_id: u64,
        edge_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/edges/{edge_id}/isDirected")),
                &[],
            )
            .await
    }

    /// Returns the SUID of the source or target node of the edge.
    pub async fn get_edge_endpoint(
        &self,
        network_id: u64,
        edge_id: u64,
        end: EdgeEnd,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/edges/{edge_id}/{end}")),
                &[],
            )
            .await
    }

    // ---- groups ------------------------------------------------------

    /// Returns all groups in the network.
    pub async fn get_groups(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.get(&self.path(&format!("/{network_id}/groups")), &[]).await
    }

    /// Creates a new group from existing nodes.
    pub async fn create_group(
        &self,
        network_id: u64,
        group: &NewGroup,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(group)?;
        self.http
            .post(&self.path(&format!("/{network_id}/groups")), &[], Some(&body))
            .await
    }

    /// Deletes all groups. The grouped nodes and edges remain in the
    /// network; only the nodes identifying the groups are removed.
    pub async fn delete_all_groups(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.delete(&self.path(&format!("/{network_id}/groups"))).await
    }

    /// Returns the number of groups in the network.
    pub async fn get_group_count(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/groups/count")), &[])
            .await
    }

    /// Returns the group represented by the given node.
    pub async fn get_group(
        &self,
        network_id: u64,
        group_node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/groups/{group_node_id}")), &[])
            .await
    }

    /// Deletes the group, keeping its nodes and edges in the network.
    pub async fn delete_group(
        &self,
        network_id: u64,
        group_node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!("/{network_id}/groups/{group_node_id}")))
            .await
    }

    /// Collapses the group. Succeeds with no payload (204).
    pub async fn collapse_group(
        &self,
        network_id: u64,
        group_node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/groups/{group_node_id}/collapse")),
                &[],
            )
            .await
    }

    /// Expands the group. Succeeds with no payload (204).
    pub async fn expand_group(
        &self,
        network_id: u64,
        group_node_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/groups/{group_node_id}/expand")),
                &[],
            )
            .await
    }

    // ---- tables ------------------------------------------------------

    /// Returns every table in the network.
    pub async fn get_tables(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.get(&self.path(&format!("/{network_id}/tables")), &[]).await
    }

    /// Returns the table.
    pub async fn get_table(
        &self,
        network_id: u64,
        table: TableType,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/tables/{table}")), &[])
            .await
    }

    /// Updates the table from caller-shaped row data. New columns are
    /// created if they do not exist in the target table.
    pub async fn update_table(
        &self,
        network_id: u64,
        table: TableType,
        data: &Value,
    ) -> Result<Value, CyRestError> {
        self.http
            .put(&self.path(&format!("/{network_id}/tables/{table}")), &[], data)
            .await
    }

    /// Returns a CSV representation of the table; column names make up
    /// the first row.
    pub async fn get_table_as_csv(
        &self,
        network_id: u64,
        table: TableType,
    ) -> Result<String, CyRestError> {
        self.http
            .get_text(&self.path(&format!("/{network_id}/tables/{table}.csv")), &[])
            .await
    }

    /// Returns a TSV (tab delimited text) representation of the table.
    pub async fn get_table_as_tsv(
        &self,
        network_id: u64,
        table: TableType,
    ) -> Result<String, CyRestError> {
        self.http
            .get_text(&self.path(&format!("/{network_id}/tables/{table}.tsv")), &[])
            .await
    }

    /// Returns all columns of the table.
    pub async fn get_column_names(
        &self,
        network_id: u64,
        table: TableType,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/tables/{table}/columns")), &[])
            .await
    }

    /// Creates new, empty columns in the table.
    pub async fn create_columns(
        &self,
        network_id: u64,
        table: TableType,
        columns: &[NewColumn],
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(columns)?;
        self.http
            .post(
                &self.path(&format!("/{network_id}/tables/{table}/columns")),
                &[],
                Some(&body),
            )
            .await
    }

    /// Renames an existing column.
    pub async fn rename_column(
        &self,
        network_id: u64,
        table: TableType,
        rename: &ColumnRename,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(rename)?;
        self.http
            .put(
                &self.path(&format!("/{network_id}/tables/{table}/columns")),
                &[],
                &body,
            )
            .await
    }

    /// Returns all values in the column.
    pub async fn get_column_values(
        &self,
        network_id: u64,
        table: TableType,
        column_name: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/tables/{table}/columns/{column_name}")),
                &[],
            )
            .await
    }

    /// Sets values for cells in the column.
    ///
    /// When `default` is set, its value is applied to every cell in the
    /// column and `values` is ignored by the service; otherwise the
    /// SUID-keyed `values` are written individually.
    pub async fn update_column_values(
        &self,
        network_id: u64,
        table: TableType,
        column_name: &str,
        default: Option<&str>,
        values: &[RowValue],
    ) -> Result<Value, CyRestError> {
        let params = [("default", default.map(str::to_string))];
        let body = serde_json::to_value(values)?;
        self.http
            .put(
                &self.path(&format!("/{network_id}/tables/{table}/columns/{column_name}")),
                &params,
                &body,
            )
            .await
    }

    /// Deletes the column.
    pub async fn delete_column(
        &self,
        network_id: u64,
        table: TableType,
        column_name: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!(
                "/{network_id}/tables/{table}/columns/{column_name}"
            )))
            .await
    }

    /// Returns all rows of the table as an array of SUID-keyed objects.
    pub async fn get_rows(
        &self,
        network_id: u64,
        table: TableType,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/tables/{table}/rows")), &[])
            .await
    }

    /// Returns the row matching the primary key, as column-name/value
    /// pairs.
    pub async fn get_row(
        &self,
        network_id: u64,
        table: TableType,
        primary_key: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!("/{network_id}/tables/{table}/rows/{primary_key}")),
                &[],
            )
            .await
    }

    /// Returns the value of a single cell as a JSON scalar or list.
    pub async fn get_cell(
        &self,
        network_id: u64,
        table: TableType,
        primary_key: u64,
        column_name: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/tables/{table}/rows/{primary_key}/{column_name}"
                )),
                &[],
            )
            .await
    }

    // ---- views -------------------------------------------------------

    /// Returns all network views of the network as a list of SUIDs.
    pub async fn get_network_views(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.get(&self.path(&format!("/{network_id}/views")), &[]).await
    }

    /// Creates a new network view. Returns its SUID.
    pub async fn create_network_view(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .post(&self.path(&format!("/{network_id}/views")), &[], None)
            .await
    }

    /// Deletes all network views of the network.
    pub async fn delete_all_network_views(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http.delete(&self.path(&format!("/{network_id}/views"))).await
    }

    /// Returns a count of the network views available for the network.
    ///
    /// The service can hold multiple views per network model, though its
    /// GUI only exposes the first one.
    pub async fn get_network_view_count(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/views/count")), &[])
            .await
    }

    /// Returns the current network view.
    pub async fn get_current_network_view(&self) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path("/views/currentNetworkView"), &[])
            .await
    }

    /// Sets the current network view.
    pub async fn set_current_network_view(&self, view_id: u64) -> Result<Value, CyRestError> {
        self.http
            .put(
                &self.path("/views/currentNetworkView"),
                &[],
                &json!({ "networkViewId": view_id }),
            )
            .await
    }

    /// Returns the first available network view.
    ///
    /// With `file` unset the response carries Cytoscape.js JSON; when
    /// set, the view is written server-side to that path (format chosen
    /// by extension: `.cys`, `.xml`/`.xgmml`, `.nnf`, `.sif`, `.cyjs`)
    /// and the response carries the file location.
    pub async fn get_first_network_view(
        &self,
        network_id: u64,
        file: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [("file", file.map(str::to_string))];
        self.http
            .get(&self.path(&format!("/{network_id}/views/first")), &params)
            .await
    }

    /// Deletes the first available network view.
    pub async fn delete_first_network_view(&self, network_id: u64) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!("/{network_id}/views/first")))
            .await
    }

    /// Returns the network view, either inline (Cytoscape.js JSON) or
    /// written server-side to `file` as with
    /// [`get_first_network_view`](Self::get_first_network_view).
    pub async fn get_network_view(
        &self,
        network_id: u64,
        view_id: u64,
        file: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [("file", file.map(str::to_string))];
        self.http
            .get(&self.path(&format!("/{network_id}/views/{view_id}")), &params)
            .await
    }

    /// Returns the network view in CX format.
    pub async fn get_network_view_as_cx(
        &self,
        network_id: u64,
        view_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/views/{view_id}.cx")), &[])
            .await
    }

    // ---- view images -------------------------------------------------

    /// Returns a PNG image of the network view. `height` is in pixels;
    /// width is set automatically.
    pub async fn get_image_as_png(
        &self,
        network_id: u64,
        view_id: u64,
        height: Option<u32>,
    ) -> Result<Vec<u8>, CyRestError> {
        let params = [("h", height.map(|h| h.to_string()))];
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/{view_id}.png")), &params)
            .await
    }

    /// Returns an SVG image of the network view.
    pub async fn get_image_as_svg(
        &self,
        network_id: u64,
        view_id: u64,
        height: Option<u32>,
    ) -> Result<Vec<u8>, CyRestError> {
        let params = [("h", height.map(|h| h.to_string()))];
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/{view_id}.svg")), &params)
            .await
    }

    /// Returns a PDF of the network view.
    pub async fn get_image_as_pdf(
        &self,
        network_id: u64,
        view_id: u64,
    ) -> Result<Vec<u8>, CyRestError> {
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/{view_id}.pdf")), &[])
            .await
    }

    /// Returns a PNG image of the first available network view.
    pub async fn get_first_image_as_png(
        &self,
        network_id: u64,
        height: Option<u32>,
    ) -> Result<Vec<u8>, CyRestError> {
        let params = [("h", height.map(|h| h.to_string()))];
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/first.png")), &params)
            .await
    }

    /// Returns an SVG image of the first available network view.
    pub async fn get_first_image_as_svg(
        &self,
        network_id: u64,
        height: Option<u32>,
    ) -> Result<Vec<u8>, CyRestError> {
        let params = [("h", height.map(|h| h.to_string()))];
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/first.svg")), &params)
            .await
    }

    /// Returns a PDF of the first available network view.
    pub async fn get_first_image_as_pdf(
        &self,
        network_id: u64,
        height: Option<u32>,
    ) -> Result<Vec<u8>, CyRestError> {
        let params = [("h", height.map(|h| h.to_string()))];
        self.http
            .get_bytes(&self.path(&format!("/{network_id}/views/first.pdf")), &params)
            .await
    }

    // ---- visual properties -------------------------------------------

    /// Updates visual properties of the network view itself, e.g.
    /// `NETWORK_BACKGROUND_PAINT` or `NETWORK_CENTER_X_LOCATION`.
    ///
    /// Values apply temporarily unless `bypass` is `true`, in which case
    /// they override the visual style until the bypass is deleted.
    pub async fn update_network_view(
        &self,
        network_id: u64,
        view_id: u64,
        bypass: Option<bool>,
        properties: &[VisualProperty],
    ) -> Result<Value, CyRestError> {
        let params = [("bypass", bypass.map(|b| b.to_string()))];
        let body = serde_json::to_value(properties)?;
        self.http
            .put(
                &self.path(&format!("/{network_id}/views/{view_id}/network")),
                &params,
                &body,
            )
            .await
    }

    /// Returns the visual properties of the network view.
    pub async fn get_network_visual_properties(
        &self,
        network_id: u64,
        view_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(&self.path(&format!("/{network_id}/views/{view_id}/network")), &[])
            .await
    }

    /// Returns a single network visual property.
    pub async fn get_network_visual_property(
        &self,
        network_id: u64,
        view_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/network/{visual_property}"
                )),
                &[],
            )
            .await
    }

    /// Bypasses the visual style of the network with the given visual
    /// property value.
    pub async fn set_network_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        visual_property: &str,
        property: &VisualProperty,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(property)?;
        self.http
            .put(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/network/{visual_property}/bypass"
                )),
                &[],
                &body,
            )
            .await
    }

    /// Returns the bypass value of a network visual property.
    pub async fn get_network_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/network/{visual_property}/bypass"
                )),
                &[],
            )
            .await
    }

    /// Deletes the bypass of a network visual property, restoring the
    /// definition from the visual style.
    pub async fn delete_network_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!(
                "/{network_id}/views/{view_id}/network/{visual_property}/bypass"
            )))
            .await
    }

    /// Updates visual properties on multiple objects of one class, each
    /// entry keyed by the object's SUID.
    pub async fn update_view_objects(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        bypass: Option<bool>,
        objects: &[ObjectVisualProperties],
    ) -> Result<Value, CyRestError> {
        let params = [("bypass", bypass.map(|b| b.to_string()))];
        let body = serde_json::to_value(objects)?;
        self.http
            .put(
                &self.path(&format!("/{network_id}/views/{view_id}/{object_type}")),
                &params,
                &body,
            )
            .await
    }

    /// Returns visual property values for every object of one class,
    /// optionally restricted to a single `visual_property`.
    pub async fn get_view_objects(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        visual_property: Option<&str>,
    ) -> Result<Value, CyRestError> {
        let params = [("visualProperty", visual_property.map(str::to_string))];
        self.http
            .get(
                &self.path(&format!("/{network_id}/views/{view_id}/{object_type}")),
                &params,
            )
            .await
    }

    /// Updates the visual properties of a single view object.
    ///
    /// Values apply temporarily unless `bypass` is `true`.
    pub async fn update_view_object(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
        bypass: Option<bool>,
        properties: &[VisualProperty],
    ) -> Result<Value, CyRestError> {
        let params = [("bypass", bypass.map(|b| b.to_string()))];
        let body = serde_json::to_value(properties)?;
        self.http
            .put(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/{object_type}/{object_id}"
                )),
                &params,
                &body,
            )
            .await
    }

    /// Returns the visual properties of a single view object.
    pub async fn get_view_object(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/{object_type}/{object_id}"
                )),
                &[],
            )
            .await
    }

    /// Returns one visual property value of a single view object.
    pub async fn get_visual_property_value(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/{object_type}/{object_id}/{visual_property}"
                )),
                &[],
            )
            .await
    }

    /// Bypasses the visual style of a single object with the given
    /// visual property value.
    pub async fn set_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
        visual_property: &str,
        property: &VisualProperty,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(property)?;
        self.http
            .put(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/{object_type}/{object_id}/{visual_property}/bypass"
                )),
                &[],
                &body,
            )
            .await
    }

    /// Returns the bypass value of a single object's visual property.
    pub async fn get_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .get(
                &self.path(&format!(
                    "/{network_id}/views/{view_id}/{object_type}/{object_id}/{visual_property}/bypass"
                )),
                &[],
            )
            .await
    }

    /// Deletes the bypass of a single object's visual property,
    /// restoring the definition from the visual style.
    pub async fn delete_visual_property_bypass(
        &self,
        network_id: u64,
        view_id: u64,
        object_type: ObjectType,
        object_id: u64,
        visual_property: &str,
    ) -> Result<Value, CyRestError> {
        self.http
            .delete(&self.path(&format!(
                "/{network_id}/views/{view_id}/{object_type}/{object_id}/{visual_property}/bypass"
            )))
            .await
    }
}
