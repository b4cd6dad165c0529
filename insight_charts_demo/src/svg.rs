// Copyright 2025 the Insight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `insight_charts_demo`.

use kurbo::{BezPath, Point, Size};
use peniko::Color;

/// Horizontal alignment of a label against its anchor point.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TextAnchor {
    /// Centered below the anchor.
    Middle,
    /// Right-aligned, vertically centered on the anchor.
    End,
}

#[derive(Debug)]
pub(crate) struct SvgDocument {
    size: Size,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Starts a plot group at `origin` whose y axis points up over `height`.
    pub(crate) fn begin_plot(&mut self, origin: Point, height: f64) {
        self.body.push_str(&format!(
            r#"<g transform="translate({} {}) scale(1 -1)">"#,
            origin.x,
            origin.y + height
        ));
        self.body.push('\n');
    }

    pub(crate) fn end_group(&mut self) {
        self.body.push_str("</g>\n");
    }

    pub(crate) fn path(&mut self, path: &BezPath, fill: Color) {
        let d = path.to_svg();
        self.body.push_str(&format!(r#"<path d="{d}""#));
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, stroke: Color) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            from.x, from.y, to.x, to.y
        ));
        write_paint_attr(&mut self.body, "stroke", stroke);
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(&mut self, pos: Point, font_size: f64, anchor: TextAnchor, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}""#,
            pos.x, pos.y, font_size
        ));
        self.body.push_str(match anchor {
            TextAnchor::Middle => r#" text-anchor="middle" dominant-baseline="hanging">"#,
            TextAnchor::End => r#" text-anchor="end" dominant-baseline="middle">"#,
        });
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
