// File: crates/chart-core/src/text.rs
// Summary: Number formatting for ticks/labels/tooltips and markup escaping.

/// Compact coordinate formatting for SVG attributes: at most three decimals,
/// no trailing zeros, no negative zero.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    let s = format!("{r:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Fixed-point with `decimals` places, rounding halves away from zero.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return "NaN".to_string();
    }
    let scale = 10f64.powi(decimals as i32);
    let r = (v * scale).round() / scale;
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r:.decimals$}")
}

/// Rounded integer without grouping (`1998`).
pub fn format_integer(v: f64) -> String {
    format_fixed(v, 0)
}

/// Whole-number percentage of `value` in `total` (`"20%"`).
pub fn format_percent(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0%".to_string();
    }
    format!("{}%", format_integer(value / total * 100.0))
}

/// Tick label with just enough decimals for `step` and thousands separators.
pub fn format_tick(v: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    group_thousands(&format_fixed(v, precision))
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (int, frac) = match rest.find('.') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac}")
}

/// Escape text for HTML/XML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
