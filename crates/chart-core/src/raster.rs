// File: crates/chart-core/src/raster.rs
// Summary: Headless PNG export: paints a rendered SVG element tree on a Skia CPU raster surface.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::svg::Element;
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Anchor {
    Start,
    Middle,
    End,
}

/// Presentation attributes inherited down the tree.
#[derive(Clone, Copy, Debug)]
struct Inherited {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f32,
    opacity: f32,
    font_size: f32,
    anchor: Anchor,
}

impl Default for Inherited {
    fn default() -> Self {
        Self { fill: Some(Color::BLACK), stroke: None, stroke_width: 1.0, opacity: 1.0, font_size: 16.0, anchor: Anchor::Start }
    }
}

/// Paint `svg` (a chart root with `width`/`height`) onto `background` and encode PNG bytes.
pub fn render_png(svg: &Element, background: Color) -> ChartResult<Vec<u8>> {
    let width = svg.attr_f64("width").unwrap_or(0.0).round() as i32;
    let height = svg.attr_f64("height").unwrap_or(0.0).round() as i32;
    if width <= 0 || height <= 0 {
        return Err(ChartError::Raster(format!("invalid surface size {width}x{height}")));
    }

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| ChartError::Raster("failed to create raster surface".to_string()))?;
    let canvas = surface.canvas();
    canvas.clear(sk_color(background, 1.0));
    paint_children(canvas, svg, Inherited::default());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Raster("encode PNG failed".to_string()))?;
    Ok(data.as_bytes().to_vec())
}

/// [`render_png`] straight to a file, creating parent directories.
pub fn write_png(svg: &Element, background: Color, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
    let bytes = render_png(svg, background)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

fn sk_color(c: Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn paint_color(value: Option<&str>, inherited: Option<Color>) -> Option<Color> {
    match value {
        None => inherited,
        Some("none") => None,
        Some(v) => Color::parse(v).or(inherited),
    }
}

fn number(el: &Element, name: &str) -> f32 {
    el.attr_f64(name).unwrap_or(0.0) as f32
}

fn parse_font_size(v: &str) -> Option<f32> {
    v.trim().trim_end_matches("px").parse().ok()
}

fn resolve(el: &Element, parent: Inherited) -> Inherited {
    let mut s = parent;
    s.fill = paint_color(el.get_attr("fill"), parent.fill);
    s.stroke = paint_color(el.get_attr("stroke"), parent.stroke);
    if let Some(w) = el.attr_f64("stroke-width") {
        s.stroke_width = w as f32;
    }
    if let Some(o) = el.attr_f64("opacity") {
        s.opacity *= o as f32;
    }
    if let Some(fs) = el.get_attr("font-size").and_then(parse_font_size) {
        s.font_size = fs;
    }
    match el.get_attr("text-anchor") {
        Some("middle") => s.anchor = Anchor::Middle,
        Some("end") => s.anchor = Anchor::End,
        Some("start") => s.anchor = Anchor::Start,
        _ => {}
    }
    s
}

/// Apply a `translate(x,y)` / `rotate(deg)` list in order.
fn apply_transform(canvas: &skia::Canvas, transform: &str) {
    for part in transform.split(')') {
        let Some((name, args)) = part.split_once('(') else {
            continue;
        };
        let nums: Vec<f32> = args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();
        match (name.trim(), nums.as_slice()) {
            ("translate", [x, y]) => {
                canvas.translate((*x, *y));
            }
            ("translate", [x]) => {
                canvas.translate((*x, 0.0));
            }
            ("rotate", [deg]) => {
                canvas.rotate(*deg, None);
            }
            _ => {}
        }
    }
}

fn paint_children(canvas: &skia::Canvas, el: &Element, style: Inherited) {
    for child in el.child_elements() {
        paint_element(canvas, child, style);
    }
}

fn paint_element(canvas: &skia::Canvas, el: &Element, parent: Inherited) {
    if el.get_attr("display") == Some("none") {
        return;
    }
    let style = resolve(el, parent);
    canvas.save();
    if let Some(t) = el.get_attr("transform") {
        apply_transform(canvas, t);
    }

    match el.tag() {
        "g" | "svg" => paint_children(canvas, el, style),
        "rect" => {
            let r = skia::Rect::from_xywh(number(el, "x"), number(el, "y"), number(el, "width"), number(el, "height"));
            fill_and_stroke(el, &style, |p| {
                canvas.draw_rect(r, p);
            });
        }
        "circle" => {
            let (cx, cy, r) = (number(el, "cx"), number(el, "cy"), number(el, "r"));
            fill_and_stroke(el, &style, |p| {
                canvas.draw_circle((cx, cy), r, p);
            });
        }
        "line" => {
            if let Some(mut p) = stroke_paint(el, &style) {
                if let Some(dash) = el.get_attr("stroke-dasharray") {
                    let intervals: Vec<f32> = dash.split(',').filter_map(|s| s.trim().parse().ok()).collect();
                    if intervals.len() >= 2 {
                        p.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
                    }
                }
                canvas.draw_line(
                    (number(el, "x1"), number(el, "y1")),
                    (number(el, "x2"), number(el, "y2")),
                    &p,
                );
            }
        }
        "path" => {
            if let Some(path) = el.get_attr("d").and_then(|d| skia::Path::from_svg(d)) {
                fill_and_stroke(el, &style, |p| {
                    canvas.draw_path(&path, p);
                });
            }
        }
        "text" => paint_text(canvas, el, &style),
        _ => {}
    }
    canvas.restore();
}

fn fill_and_stroke(el: &Element, style: &Inherited, mut draw: impl FnMut(&skia::Paint)) {
    if let Some(color) = style.fill {
        let alpha = style.opacity * el.attr_f64("fill-opacity").unwrap_or(1.0) as f32;
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(sk_color(color, alpha));
        draw(&p);
    }
    if let Some(p) = stroke_paint(el, style) {
        draw(&p);
    }
}

fn stroke_paint(el: &Element, style: &Inherited) -> Option<skia::Paint> {
    let color = style.stroke?;
    let alpha = style.opacity * el.attr_f64("stroke-opacity").unwrap_or(1.0) as f32;
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(style.stroke_width);
    p.set_color(sk_color(color, alpha));
    Some(p)
}

fn paint_text(canvas: &skia::Canvas, el: &Element, style: &Inherited) {
    let Some(color) = style.fill else {
        return;
    };
    let text = el.text_content();
    if text.is_empty() {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(sk_color(color, style.opacity));
    let mut font = skia::Font::default();
    font.set_size(style.font_size);

    let (advance, _) = font.measure_str(&text, Some(&paint));
    let dx = match style.anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -advance / 2.0,
        Anchor::End => -advance,
    };
    let dy = el
        .get_attr("dy")
        .and_then(|v| v.trim().strip_suffix("em"))
        .and_then(|v| v.parse::<f32>().ok())
        .map_or(0.0, |em| em * style.font_size);
    canvas.draw_str(&text, (number(el, "x") + dx, number(el, "y") + dy), &font, &paint);
}
