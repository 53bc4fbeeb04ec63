//! Standalone SVG document output.

use kurbo::Rect;

/// Margin around the outline in the document's view box.
pub const PADDING: f64 = 8.0;

/// Wrap filled path data in an SVG document sized to `bounds`.
pub fn document(path_data: &str, bounds: Rect) -> String {
    let view = bounds.inflate(PADDING, PADDING);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{w}" height="{h}" viewBox="{x} {y} {w} {h}" xmlns="http://www.w3.org/2000/svg">
  <path d="{d}" fill="black" stroke="none"/>
</svg>
"#,
        x = view.x0,
        y = view.y0,
        w = view.width(),
        h = view.height(),
        d = path_data.trim_end(),
    )
}
