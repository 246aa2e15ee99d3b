//! CyREST API Client
//!
//! A Rust client library for the CyREST HTTP interface of Cytoscape.
//! Provides one resource client per API resource group; each method maps
//! a single endpoint to a typed signature and returns the decoded
//! response.
//!
//! # Example
//!
//! ```no_run
//! use cyrest_client::{CyRestClient, NewEdge};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client for a locally running instance
//! let client = CyRestClient::new("http://localhost:1234")?;
//!
//! // List the nodes of a network, filtered by a table column
//! let nodes = client.networks().get_nodes(101, Some("name"), Some("brca1")).await?;
//! println!("matched: {nodes}");
//!
//! // Add an edge between two existing nodes
//! let edge = NewEdge {
//!     source: 101,
//!     target: 102,
//!     directed: Some(true),
//!     interaction: None,
//! };
//! client.networks().create_edges(101, &[edge]).await?;
//!
//! // Export a view as a PNG image
//! let png = client.networks().get_image_as_png(101, 202, Some(600)).await?;
//! std::fs::write("network.png", png)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Network operations**: networks, nodes, edges, groups of the
//!   running session
//! - **Table operations**: tables, columns, rows, CSV/TSV export
//! - **View operations**: views, visual properties, style bypasses,
//!   PNG/SVG/PDF image export
//! - **NDEx operations**: save, update and import networks through the
//!   bundled CyNDEx-2 app
//!
//! Optional query parameters left unset are omitted from the outgoing
//! request entirely. Failures are never retried; every error carries
//! enough context (status code and response body) for the caller to
//! decide.

pub mod client;
pub mod common;
pub mod cyndex2;
pub mod error;
pub mod models;
pub mod networks;

pub use client::{CyRestClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use common::HttpClient;
pub use cyndex2::Cyndex2;
pub use error::CyRestError;
pub use models::*;
pub use networks::Networks;
