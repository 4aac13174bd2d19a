// File: crates/chart-core/src/svg.rs
// Summary: Serialize a Scene as a standalone SVG document.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::scene::{Anchor, DrawCommand, Layer, Scene, TextBaseline};

pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height
    ));
    out.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        scene.background.to_hex()
    ));
    if let Some(clip) = scene.series.clip {
        out.push_str(&format!(
            "<defs><clipPath id=\"plot-clip\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath></defs>\n",
            num(clip.left),
            num(clip.top),
            num(clip.width()),
            num(clip.height())
        ));
    }
    write_layer(&mut out, "series", &scene.series, true);
    write_layer(&mut out, "x-axis", &scene.x_axis, false);
    write_layer(&mut out, "y-axis", &scene.y_axis, false);
    write_layer(&mut out, "legend", &scene.legend, false);
    write_layer(&mut out, "status", &scene.overlay, false);
    out.push_str("</svg>\n");
    out
}

fn write_layer(out: &mut String, class: &str, layer: &Layer, clipped: bool) {
    if layer.is_empty() {
        return;
    }
    out.push_str(&format!(
        "<g class=\"{class}\" transform=\"translate({},{})\"",
        num(layer.origin.x),
        num(layer.origin.y)
    ));
    if clipped && layer.clip.is_some() {
        out.push_str(" clip-path=\"url(#plot-clip)\"");
    }
    out.push_str(">\n");
    let zoomed = !layer.transform.is_identity();
    if zoomed {
        out.push_str(&format!("<g transform=\"{}\">\n", layer.transform));
    }
    for cmd in &layer.commands {
        write_command(out, cmd);
    }
    if zoomed {
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");
}

fn write_command(out: &mut String, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Polyline { key, points, stroke, width } => {
            out.push_str(&format!(
                "<path data-course=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\"{} stroke-width=\"{}\"/>\n",
                escape(key),
                path_data(points),
                stroke.to_hex(),
                opacity_attr("stroke-opacity", stroke),
                num(*width)
            ));
        }
        DrawCommand::Line { from, to, stroke, width } => {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"{} stroke-width=\"{}\"/>\n",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke.to_hex(),
                opacity_attr("stroke-opacity", stroke),
                num(*width)
            ));
        }
        DrawCommand::Rect { rect, fill } => {
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>\n",
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                fill.to_hex(),
                opacity_attr("fill-opacity", fill)
            ));
        }
        DrawCommand::Text { at, text, size, color, anchor, baseline } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let baseline = match baseline {
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Middle => "middle",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\">{}</text>\n",
                num(at.x),
                num(at.y),
                num(*size),
                color.to_hex(),
                escape(text)
            ));
        }
    }
}

/// `M x,y L x,y ...`; empty for no points.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format!("{},{}", num(p.x), num(p.y)));
    }
    d
}

fn opacity_attr(name: &str, c: &Rgba) -> String {
    if c.a == 255 { String::new() } else { format!(" {name}=\"{}\"", num(c.opacity())) }
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
