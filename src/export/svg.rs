//! SVG serializer for rendered log-sheet scenes.
//!
//! Converts a [`Scene`] into an SVG string: one `<line>` per segment and
//! one `<text>` per label, optionally layered over the blank-log template
//! via an `<image>` element. This is a pure function with no I/O -- it
//! returns a `String`.

use std::fmt::Write;

use crate::core::scene::{Anchor, CANVAS_HEIGHT, CANVAS_WIDTH, Scene};

/// Stroke style of the duty line, matched to the template's print color.
const STROKE_COLOR: &str = "#1e88e5";
const STROKE_WIDTH: f64 = 2.0;

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Serialize one scene to an SVG document.
///
/// `title` becomes an SVG `<title>` element when present. `background` is
/// a path or URL for the blank-log template image; when absent that layer
/// is skipped and the primitives render on a blank canvas.
pub fn scene_to_svg(scene: &Scene, title: Option<&str>, background: Option<&str>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
    );

    if let Some(title) = title {
        let _ = writeln!(out, "  <title>{}</title>", xml_escape(title));
    }

    if let Some(href) = background {
        let _ = writeln!(
            out,
            r#"  <image href="{}" x="0" y="0" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}"/>"#,
            xml_escape(href)
        );
    }

    if !scene.segments.is_empty() {
        let _ = writeln!(
            out,
            r#"  <g stroke="{STROKE_COLOR}" stroke-width="{STROKE_WIDTH}" stroke-linecap="round">"#
        );
        for seg in &scene.segments {
            let _ = writeln!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                seg.x1, seg.y1, seg.x2, seg.y2
            );
        }
        let _ = writeln!(out, "  </g>");
    }

    for label in &scene.labels {
        let mut attrs = format!(
            r#"x="{}" y="{}" font-size="{}" font-family="Helvetica, sans-serif""#,
            label.x, label.y, label.size
        );
        if label.anchor == Anchor::End {
            attrs.push_str(r#" text-anchor="end""#);
        }
        if label.rotation != 0.0 {
            let _ = write!(
                attrs,
                r#" transform="rotate({} {} {})""#,
                label.rotation, label.x, label.y
            );
        }
        let _ = writeln!(out, "  <text {}>{}</text>", attrs, xml_escape(&label.text));
    }

    let _ = writeln!(out, "</svg>");
    out
}
