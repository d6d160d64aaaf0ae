//! Root viewport normalization
//!
//! Rewrites only the root `<svg>` element's `width`, `height`, and
//! `viewBox` attributes; path geometry is untouched (the external
//! simplifier already flattened it).

use crate::error::{Error, Result};
use regex::Regex;

/// Rewrite the root viewport to the target box.
///
/// The zoom scale shrinks the visible region (scale 2.0 shows half the
/// original extent); the declared width/height become the target box.
pub fn normalize_viewport(svg: &str, scale: f64, width: u32, height: u32) -> Result<String> {
    let root_re = Regex::new(r"<svg\b[^>]*>").unwrap();
    let root = root_re
        .find(svg)
        .ok_or_else(|| Error::Preprocess("no root <svg> element found".to_string()))?;

    let tag = root.as_str();
    let (min_x, min_y, vb_w, vb_h) = current_view_box(tag, width, height);
    let new_w = vb_w / scale;
    let new_h = vb_h / scale;

    // strip the attributes we own, keep everything else as-is
    let attr_re = Regex::new(r#"\s+(?:width|height|viewBox)\s*=\s*"[^"]*""#).unwrap();
    let stripped = attr_re.replace_all(tag, "");

    // the matched tag always ends with ">" or "/>"
    let insert_at = stripped.len() - if stripped.ends_with("/>") { 2 } else { 1 };
    let (head, tail) = stripped.split_at(insert_at);
    let new_tag = format!(
        r#"{head} width="{width}" height="{height}" viewBox="{} {} {} {}"{tail}"#,
        fmt_num(min_x),
        fmt_num(min_y),
        fmt_num(new_w),
        fmt_num(new_h),
    );

    let mut out = String::with_capacity(svg.len() + 64);
    out.push_str(&svg[..root.start()]);
    out.push_str(&new_tag);
    out.push_str(&svg[root.end()..]);
    Ok(out)
}

/// Existing viewBox, or one synthesized from width/height attributes, or
/// the target box when the root declares nothing at all.
fn current_view_box(tag: &str, fallback_w: u32, fallback_h: u32) -> (f64, f64, f64, f64) {
    let vb_re = Regex::new(r#"viewBox\s*=\s*"([^"]*)""#).unwrap();
    if let Some(cap) = vb_re.captures(tag) {
        let nums: Vec<f64> = cap[1]
            .split([' ', ','])
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();
        if let [x, y, w, h] = nums[..] {
            if w > 0.0 && h > 0.0 {
                return (x, y, w, h);
            }
        }
    }

    let dim = |name: &str| -> Option<f64> {
        let re = Regex::new(&format!(r#"{name}\s*=\s*"([0-9.]+)(?:px)?""#)).unwrap();
        re.captures(tag).and_then(|c| c[1].parse().ok())
    };
    match (dim("width"), dim("height")) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (0.0, 0.0, w, h),
        _ => (0.0, 0.0, f64::from(fallback_w), f64::from(fallback_h)),
    }
}

fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v}")
    }
}
