//! `classify` and `node-id` commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use georegion::{derive_node_id, BoundaryTable, ClassifierConfig, RegionClassifier};

use super::common::{describe, print_json};

#[derive(Serialize)]
struct JsonClassification<'a> {
    lat: f64,
    lng: f64,
    code: u32,
    path: Option<&'static str>,
    name: String,
    stage: &'static str,
    feature: Option<&'a str>,
    region: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonNodeId {
    code: u32,
    name: String,
    node_id: String,
}

/// Where the node key comes from.
pub enum KeySource<'a> {
    Text(&'a str),
    File(&'a Path),
}

impl KeySource<'_> {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            KeySource::Text(text) => Ok(text.as_bytes().to_vec()),
            KeySource::File(path) => fs::read(path)
                .with_context(|| format!("failed to read key file {}", path.display())),
        }
    }
}

/// Execute the classify command.
pub fn cmd_classify(
    table: &BoundaryTable,
    config: ClassifierConfig,
    lat: f64,
    lng: f64,
    json: bool,
    explain: bool,
) -> Result<()> {
    let classifier = RegionClassifier::with_config(table, config);
    let result = classifier.classify_detailed(lat, lng);

    if json {
        return print_json(&JsonClassification {
            lat,
            lng,
            code: result.code.value(),
            path: result.code.path(),
            name: result.code.display_name(),
            stage: result.stage.name(),
            feature: result.feature.as_deref(),
            region: result.region.as_deref(),
        });
    }

    println!("{}", describe(result.code));
    if explain {
        println!("  stage:   {}", result.stage.name());
        if let Some(feature) = &result.feature {
            println!("  feature: {}", feature);
        }
        if let Some(region) = &result.region {
            println!("  region:  {}", region);
        }
    }
    Ok(())
}

/// Execute the node-id command: classify, then derive the identifier.
pub fn cmd_node_id(
    table: &BoundaryTable,
    config: ClassifierConfig,
    lat: f64,
    lng: f64,
    key: KeySource<'_>,
    json: bool,
) -> Result<()> {
    let code = RegionClassifier::with_config(table, config).classify(lat, lng);
    let key = key.read()?;
    let node_id = derive_node_id(code, &key).context("cannot derive node id")?;

    if json {
        return print_json(&JsonNodeId {
            code: code.value(),
            name: code.display_name(),
            node_id: node_id.to_hex(),
        });
    }

    eprintln!("{}", describe(code));
    println!("{}", node_id);
    Ok(())
}
