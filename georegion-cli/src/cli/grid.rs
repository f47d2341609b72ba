//! Grid command: classify every grid cell and export the merged overlay.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use resvg::usvg;
use tiny_skia::Pixmap;

use georegion::overlay::region_rings;
use georegion::{cells_to_polygons, BoundaryTable, ClassifierConfig, GridSpec, RegionClassifier};

use super::common::{
    layers_to_geojson, layers_to_svg, region_color, OutputFormat, StyledLayer, PIXELS_PER_DEGREE,
};

/// One filled layer per region code, in code order.
pub fn grid_layers(table: &BoundaryTable, config: ClassifierConfig, grid: &GridSpec) -> Vec<StyledLayer> {
    let classifier = RegionClassifier::with_config(table, config);

    grid.assign_cells(&classifier)
        .into_iter()
        .map(|(code, cells)| StyledLayer {
            code,
            rings: cells_to_polygons(grid, &cells),
            color: region_color(code),
        })
        .collect()
}

/// Region box outlines, largest first so small boxes are drawn on top.
pub fn box_layers(table: &BoundaryTable) -> Vec<StyledLayer> {
    let mut entries: Vec<_> = table.regions().iter().collect();
    entries.sort_by(|a, b| {
        a.bounds
            .render_priority()
            .cmp(&b.bounds.render_priority())
            .then(b.bounds.area().total_cmp(&a.bounds.area()))
    });

    entries
        .into_iter()
        .map(|entry| StyledLayer {
            code: entry.code,
            rings: region_rings(&entry.bounds),
            color: "#333333".to_string(),
        })
        .collect()
}

/// Rasterise an SVG document.
pub fn render_png(svg: &str) -> Result<Vec<u8>> {
    let width = (360.0 * PIXELS_PER_DEGREE) as u32;
    let height = (180.0 * PIXELS_PER_DEGREE) as u32;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).context("failed to parse generated SVG")?;

    let mut pixmap = Pixmap::new(width, height).context("failed to allocate pixmap")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().context("failed to encode PNG")
}

/// Execute the grid command.
pub fn cmd_grid(
    table: &BoundaryTable,
    config: ClassifierConfig,
    grid: &GridSpec,
    format: OutputFormat,
    boxes: bool,
    output: Option<&Path>,
) -> Result<()> {
    let layers = grid_layers(table, config, grid);
    let outlines = if boxes { box_layers(table) } else { Vec::new() };
    tracing::info!(
        regions = layers.len(),
        rings = layers.iter().map(|l| l.rings.len()).sum::<usize>(),
        "built grid overlay"
    );

    let bytes = match format {
        OutputFormat::Geojson => serde_json::to_vec_pretty(&layers_to_geojson(&layers, &outlines))?,
        OutputFormat::Svg => layers_to_svg(&layers, &outlines).into_bytes(),
        OutputFormat::Png => render_png(&layers_to_svg(&layers, &outlines))?,
    };

    match output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {} ({} bytes)", path.display(), bytes.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
