//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `classify` - Map a coordinate to its region code
//! - `node-id` - Derive a region-prefixed node identifier
//! - `regions` / `lookup` - Browse the region code namespace
//! - `neighbors` / `latency` - Relations between regions
//! - `airport` - Nearest major airport hub
//! - `grid` - Export the classified grid overlay as GeoJSON, SVG or PNG

pub mod airport;
pub mod classify;
pub mod common;
pub mod config;
pub mod grid;
pub mod regions;

pub use airport::cmd_airport;
pub use classify::{cmd_classify, cmd_node_id, KeySource};
pub use common::OutputFormat;
pub use config::Settings;
pub use grid::cmd_grid;
pub use regions::{cmd_latency, cmd_lookup, cmd_neighbors, cmd_regions};
