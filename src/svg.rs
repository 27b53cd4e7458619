use std::fmt::Write as _;

use crate::{
    engine::{EngineConfig, Scene},
    motion::MarkerUpdate,
};

/// Serialize a scene and the current marker positions into standalone SVG
/// markup: dashed route curves, small circles for the referenced stops, and
/// one larger circle per live moving marker.
///
/// This is a sample render-surface consumer; hosts with their own surface
/// only need the scene and the per-tick updates.
pub fn write_scene_svg(scene: &Scene, config: &EngineConfig, markers: &[MarkerUpdate]) -> String {
    let (w, h) = (scene.canvas.width, scene.canvas.height);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    if config.show_background {
        let _ = writeln!(
            out,
            r##"  <rect x="0" y="0" width="{w}" height="{h}" fill="#0f172a" opacity="0.9"/>"##
        );
    }

    for route in &scene.routes {
        let _ = writeln!(
            out,
            r#"  <path d="{}" stroke="{}" stroke-width="2" stroke-dasharray="8 8" fill="none" opacity="0.6"/>"#,
            route.curve.to_svg_path(),
            config.route_color,
        );
    }

    for stop in &scene.stops {
        let _ = writeln!(
            out,
            r##"  <circle cx="{}" cy="{}" r="3" fill="#60a5fa" stroke="#fff" stroke-width="0.5" opacity="0.9"/>"##,
            stop.x, stop.y,
        );
    }

    for marker in markers {
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="6" fill="{}" opacity="0.9"/>"#,
            marker.x, marker.y, config.route_color,
        );
    }

    out.push_str("</svg>\n");
    out
}
