// File: crates/chart-core/src/theme.rs
// Summary: Colors, categorical palettes and light/dark theming for chart rendering.

use std::fmt;

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const STEELBLUE: Color = Color::rgb(70, 130, 180);
    pub const LIGHTSTEELBLUE: Color = Color::rgb(176, 196, 222);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Parse `#rgb`, `#rrggbb` or one of the few named colors the charts use.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return match hex.len() {
                6 => u32::from_str_radix(hex, 16).ok().map(Self::hex),
                3 => {
                    let v = u32::from_str_radix(hex, 16).ok()?;
                    let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                    Some(Self::rgb((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
                }
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "steelblue" => Some(Self::STEELBLUE),
            "lightsteelblue" => Some(Self::LIGHTSTEELBLUE),
            "orange" => Some(Self::ORANGE),
            "gray" | "grey" => Some(Self::GRAY),
            _ => None,
        }
    }

    /// Scale every channel by `0.7^k`.
    pub fn darker(self, k: f64) -> Self {
        let f = 0.7f64.powf(k);
        let ch = |c: u8| (f64::from(c) * f).round().clamp(0.0, 255.0) as u8;
        Self::rgb(ch(self.r), ch(self.g), ch(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ten-color qualitative palette used for bars and scatter points.
pub static TABLEAU10: [Color; 10] = [
    Color::hex(0x4e79a7),
    Color::hex(0xf28e2c),
    Color::hex(0xe15759),
    Color::hex(0x76b7b2),
    Color::hex(0x59a14f),
    Color::hex(0xedc949),
    Color::hex(0xaf7aa1),
    Color::hex(0xff9da7),
    Color::hex(0x9c755f),
    Color::hex(0xbab0ab),
];

/// Ten-color qualitative palette used for donut slices.
pub static CATEGORY10: [Color; 10] = [
    Color::hex(0x1f77b4),
    Color::hex(0xff7f0e),
    Color::hex(0x2ca02c),
    Color::hex(0xd62728),
    Color::hex(0x9467bd),
    Color::hex(0x8c564b),
    Color::hex(0xe377c2),
    Color::hex(0x7f7f7f),
    Color::hex(0xbcbd22),
    Color::hex(0x17becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub axis_title: Color,
    pub axis_line: Color,
    pub crosshair: Color,
    pub line_stroke: Color,
    pub band_fill: Color,
    pub point_hover: Color,
    pub slice_label: Color,
    pub hover_stroke: Color,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub categorical: &'static [Color],
    pub slices: &'static [Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            text: Color::BLACK,
            axis_title: Color::hex(0x333333),
            axis_line: Color::BLACK,
            crosshair: Color::GRAY,
            line_stroke: Color::STEELBLUE,
            band_fill: Color::LIGHTSTEELBLUE,
            point_hover: Color::ORANGE,
            slice_label: Color::WHITE,
            hover_stroke: Color::hex(0x222222),
            tooltip_background: Color::WHITE,
            tooltip_border: Color::hex(0xcccccc),
            categorical: &TABLEAU10,
            slices: &CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            text: Color::rgb(235, 235, 245),
            axis_title: Color::rgb(210, 210, 220),
            axis_line: Color::rgb(180, 180, 190),
            crosshair: Color::rgb(150, 150, 160),
            line_stroke: Color::rgb(64, 160, 255),
            band_fill: Color::rgb(96, 156, 255),
            point_hover: Color::rgb(255, 230, 70),
            slice_label: Color::WHITE,
            hover_stroke: Color::rgb(235, 235, 245),
            tooltip_background: Color::rgb(40, 40, 45),
            tooltip_border: Color::rgb(90, 90, 100),
            categorical: &TABLEAU10,
            slices: &CATEGORY10,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
