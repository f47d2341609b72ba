//! Region table queries: `regions`, `lookup`, `neighbors`, `latency`.

use anyhow::{bail, Result};
use serde::Serialize;

use georegion::codes::ALL;
use georegion::{estimate_latency_ms, neighbors, BoundaryTable, RegionBounds, RegionCode};

use super::common::{describe, parse_code, parse_known_code, print_json};

#[derive(Serialize)]
struct JsonBox<'a> {
    name: &'a str,
    bounds: RegionBounds,
    crosses_antimeridian: bool,
}

#[derive(Serialize)]
struct JsonRegion<'a> {
    code: RegionCode,
    path: &'static str,
    name: String,
    category: Option<&'static str>,
    boxes: Vec<JsonBox<'a>>,
}

fn json_region<'a>(table: &'a BoundaryTable, code: RegionCode, path: &'static str) -> JsonRegion<'a> {
    JsonRegion {
        code,
        path,
        name: code.display_name(),
        category: code.category().map(|c| c.name()),
        boxes: table
            .entries_for(code)
            .map(|entry| JsonBox {
                name: &entry.name,
                bounds: entry.bounds,
                crosses_antimeridian: entry.bounds.crosses_antimeridian(),
            })
            .collect(),
    }
}

/// Execute the regions command: every code in the namespace.
pub fn cmd_regions(table: &BoundaryTable, json: bool) -> Result<()> {
    if json {
        let regions: Vec<_> = ALL
            .iter()
            .map(|(code, path)| json_region(table, *code, *path))
            .collect();
        return print_json(&regions);
    }

    println!("{:<6} {:<34} BOXES", "CODE", "PATH");
    for (code, path) in ALL {
        println!("{:<6} {:<34} {}", code, path, table.entries_for(*code).count());
    }
    Ok(())
}

/// Execute the lookup command.
pub fn cmd_lookup(table: &BoundaryTable, code: &str) -> Result<()> {
    let code = parse_code(code)?;
    println!("{}", describe(code));

    let Some(path) = code.path() else {
        return Ok(());
    };
    println!("  path:     {}", path);
    if let Some(category) = code.category() {
        println!("  category: {}", category.name());
    }
    for entry in table.entries_for(code) {
        let b = entry.bounds;
        println!(
            "  box:      {} lat [{}, {}] lng [{}, {}]{}",
            entry.name,
            b.min_lat,
            b.max_lat,
            b.min_lng,
            b.max_lng,
            if b.crosses_antimeridian() { " (crosses antimeridian)" } else { "" }
        );
    }
    Ok(())
}

/// Execute the neighbors command.
pub fn cmd_neighbors(table: &BoundaryTable, code: &str, json: bool) -> Result<()> {
    let code = parse_known_code(code)?;
    let found = neighbors(table, code);

    if json {
        let regions: Vec<_> = found
            .iter()
            .filter_map(|c| c.path().map(|path| json_region(table, *c, path)))
            .collect();
        return print_json(&regions);
    }

    for neighbor in found {
        println!("{}", describe(neighbor));
    }
    Ok(())
}

/// Execute the latency command.
pub fn cmd_latency(table: &BoundaryTable, from: &str, to: &str) -> Result<()> {
    let from = parse_known_code(from)?;
    let to = parse_known_code(to)?;

    match estimate_latency_ms(table, from, to) {
        Some(ms) => {
            println!("{} ms", ms);
            Ok(())
        }
        None => bail!("no region box for {} or {}", describe(from), describe(to)),
    }
}
