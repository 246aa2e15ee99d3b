//! The `cyndex2` resource group: NDEx import and export for networks in
//! the running session.
//!
//! These endpoints live under `/cyndex2/{version}` at the service root,
//! outside the main versioned command tree.

use serde_json::Value;

use crate::common::HttpClient;
use crate::error::CyRestError;
use crate::models::{NdexImportRequest, NdexSaveRequest};

/// Client for the `cyndex2` resource group.
#[derive(Debug)]
pub struct Cyndex2<'a> {
    http: &'a HttpClient,
}

impl<'a> Cyndex2<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    fn path(&self, rest: &str) -> String {
        format!("/cyndex2/{}{}", self.http.version(), rest)
    }

    /// Returns the NDEx app version and other basic information.
    pub async fn get_app_info(&self) -> Result<Value, CyRestError> {
        self.http.get(&self.path(""), &[]).await
    }

    /// Imports a network from an NDEx server into the session.
    pub async fn create_network_from_ndex(
        &self,
        request: &NdexImportRequest,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(request)?;
        self.http.post(&self.path("/networks"), &[], Some(&body)).await
    }

    /// Returns a summary of the collection containing the network.
    pub async fn get_network_summary(&self, suid: u64) -> Result<Value, CyRestError> {
        self.http.get(&self.path(&format!("/networks/{suid}")), &[]).await
    }

    /// Saves the network or collection to an NDEx server.
    pub async fn save_network_to_ndex(
        &self,
        suid: u64,
        request: &NdexSaveRequest,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(request)?;
        self.http
            .post(&self.path(&format!("/networks/{suid}")), &[], Some(&body))
            .await
    }

    /// Updates the network's record on an NDEx server.
    pub async fn update_network_in_ndex(
        &self,
        suid: u64,
        request: &NdexSaveRequest,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(request)?;
        self.http
            .put(&self.path(&format!("/networks/{suid}")), &[], &body)
            .await
    }

    /// Returns a summary of the collection containing the current
    /// network.
    pub async fn get_current_network_summary(&self) -> Result<Value, CyRestError> {
        self.http.get(&self.path("/networks/current"), &[]).await
    }

    /// Saves the current network or collection to an NDEx server.
    pub async fn save_current_network_to_ndex(
        &self,
        request: &NdexSaveRequest,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(request)?;
        self.http
            .post(&self.path("/networks/current"), &[], Some(&body))
            .await
    }

    /// Updates the current network's record on an NDEx server.
    pub async fn update_current_network_in_ndex(
        &self,
        request: &NdexSaveRequest,
    ) -> Result<Value, CyRestError> {
        let body = serde_json::to_value(request)?;
        self.http.put(&self.path("/networks/current"), &[], &body).await
    }
}
