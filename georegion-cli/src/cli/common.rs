//! Common utilities shared across CLI commands.

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{json, Value};

use georegion::{RegionCode, Ring};

/// Output format for the grid overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Geojson,
    Svg,
    Png,
}

/// Pixels per degree in rendered maps.
pub const PIXELS_PER_DEGREE: f64 = 4.0;

/// A region's rings with the colour to draw them in.
pub struct StyledLayer {
    pub code: RegionCode,
    pub rings: Vec<Ring>,
    pub color: String,
}

/// Parse a region code given as a number (`2010`) or a dotted path
/// (`NORTH_AMERICA.USA_WEST`).
pub fn parse_code(input: &str) -> Result<RegionCode> {
    if let Ok(value) = input.parse::<u32>() {
        return Ok(RegionCode(value));
    }
    match RegionCode::by_path(input) {
        Some(code) => Ok(code),
        None => bail!("unknown region code or path: {}", input),
    }
}

/// Like [`parse_code`], but the code must be in the namespace.
pub fn parse_known_code(input: &str) -> Result<RegionCode> {
    let code = parse_code(input)?;
    if !code.is_known() {
        bail!("{} is not a known region code", code);
    }
    Ok(code)
}

/// `2010 NORTH_AMERICA > USA_WEST`
pub fn describe(code: RegionCode) -> String {
    format!("{} {}", code, code.display_name())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Stable colour per code: hues step by the golden angle so neighbouring
/// codes land far apart on the wheel.
pub fn region_color(code: RegionCode) -> String {
    let hue = (code.value() as f64 * 137.508) % 360.0;
    hsl_to_hex(hue, 0.55, 0.6)
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Equirectangular SVG path data for a ring.
fn ring_to_path(ring: &Ring) -> String {
    let mut d = String::new();
    for (i, p) in ring.iter().enumerate() {
        let x = p.lng + 180.0;
        let y = 90.0 - p.lat;
        if i == 0 {
            d.push_str(&format!("M{:.2},{:.2}", x, y));
        } else {
            d.push_str(&format!(" L{:.2},{:.2}", x, y));
        }
    }
    d.push_str(" Z");
    d
}

/// Render filled layers, then outline-only layers, as one SVG document in
/// degree space (viewBox `0 0 360 180`).
pub fn layers_to_svg(fills: &[StyledLayer], outlines: &[StyledLayer]) -> String {
    let width = 360.0 * PIXELS_PER_DEGREE;
    let height = 180.0 * PIXELS_PER_DEGREE;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 360 180">
<rect width="360" height="180" fill="white"/>
"#,
        width, height
    ));

    for layer in fills {
        svg.push_str(&format!(
            r#"<g id="region-{}" fill="{}" stroke="{}" stroke-width="0.1">
"#,
            layer.code, layer.color, layer.color
        ));
        for ring in &layer.rings {
            svg.push_str(&format!("  <path d=\"{}\"/>\n", ring_to_path(ring)));
        }
        svg.push_str("</g>\n");
    }

    for layer in outlines {
        svg.push_str(&format!(
            r#"<g id="box-{}" fill="none" stroke="{}" stroke-width="0.3">
"#,
            layer.code, layer.color
        ));
        for ring in &layer.rings {
            svg.push_str(&format!("  <path d=\"{}\"/>\n", ring_to_path(ring)));
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// GeoJSON `FeatureCollection`, one `MultiPolygon` feature per layer.
/// Fills come first; `properties.kind` tells regions from box outlines.
pub fn layers_to_geojson(fills: &[StyledLayer], outlines: &[StyledLayer]) -> Value {
    let regions = fills
        .iter()
        .map(|layer| layer_feature(layer, "region", format!("region-{}", layer.code)));
    let boxes = outlines
        .iter()
        .enumerate()
        .map(|(i, layer)| layer_feature(layer, "box", format!("box-{}-{}", layer.code, i)));

    let features: Vec<Value> = regions.chain(boxes).collect();
    json!({ "type": "FeatureCollection", "features": features })
}

fn layer_feature(layer: &StyledLayer, kind: &str, id: String) -> Value {
    let polygons: Vec<Value> = layer
        .rings
        .iter()
        .map(|ring| {
            let positions: Vec<[f64; 2]> = ring.iter().map(|p| [p.lng, p.lat]).collect();
            json!([positions])
        })
        .collect();

    json!({
        "type": "Feature",
        "id": id,
        "properties": {
            "kind": kind,
            "code": layer.code,
            "path": layer.code.path(),
            "name": layer.code.display_name(),
            "color": layer.color,
        },
        "geometry": { "type": "MultiPolygon", "coordinates": polygons },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use georegion::codes::north_america;
    use georegion::Coordinate;

    #[test]
    fn codes_parse_by_number_or_path() {
        assert_eq!(parse_code("2010").unwrap(), north_america::USA_WEST);
        assert_eq!(parse_code("north_america.usa_west").unwrap(), north_america::USA_WEST);
        assert_eq!(parse_code("70000").unwrap(), RegionCode(70000));
        assert!(parse_code("NOWHERE").is_err());
        assert!(parse_known_code("70000").is_err());
    }

    #[test]
    fn colors_are_hex_and_stable() {
        let a = region_color(north_america::USA_WEST);
        assert_eq!(a.len(), 7);
        assert!(a.starts_with('#'));
        assert_eq!(a, region_color(north_america::USA_WEST));
        assert_ne!(a, region_color(north_america::USA_CENTRAL));
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
    }

    fn square() -> StyledLayer {
        StyledLayer {
            code: north_america::USA_WEST,
            rings: vec![vec![
                Coordinate::new(50.0, 0.0),
                Coordinate::new(50.0, 10.0),
                Coordinate::new(40.0, 10.0),
                Coordinate::new(40.0, 0.0),
                Coordinate::new(50.0, 0.0),
            ]],
            color: "#123456".to_string(),
        }
    }

    #[test]
    fn svg_projects_equirectangular() {
        let svg = layers_to_svg(&[square()], &[]);
        assert!(svg.contains("viewBox=\"0 0 360 180\""));
        assert!(svg.contains("M180.00,40.00 L190.00,40.00"));
        assert!(svg.contains("id=\"region-2010\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn geojson_positions_are_lng_lat() {
        let value = layers_to_geojson(&[square()], &[]);
        assert_eq!(value["features"][0]["properties"]["path"], "NORTH_AMERICA.USA_WEST");
        assert_eq!(value["features"][0]["geometry"]["coordinates"][0][0][1], json!([10.0, 50.0]));
    }

    #[test]
    fn geojson_box_features_are_distinct() {
        let value = layers_to_geojson(&[square()], &[square(), square()]);
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);

        assert_eq!(features[0]["id"], "region-2010");
        assert_eq!(features[0]["properties"]["kind"], "region");
        assert_eq!(features[1]["id"], "box-2010-0");
        assert_eq!(features[2]["id"], "box-2010-1");
        assert!(features[1..].iter().all(|f| f["properties"]["kind"] == "box"));
    }
}
