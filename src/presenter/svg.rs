use std::fmt::Write;

/// Escapes text for use in XML/HTML content and attribute values.
pub fn escape(text: &str) -> String {
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

/// Minimal SVG document builder. Writes into a `String`, which cannot fail.
pub struct SvgDocument {
    body: String,
    width: f64,
    height: f64,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            body: String::new(),
            width,
            height,
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, opacity: f64) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}" stroke="{}" stroke-opacity="{}"/>"#,
            x,
            y,
            w,
            h,
            escape(fill),
            opacity,
            escape(fill),
            opacity
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            x1,
            y1,
            x2,
            y2,
            escape(stroke)
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="white"/>"#,
            cx,
            cy,
            r,
            escape(fill)
        );
    }

    pub fn path(&mut self, d: &str, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="{}" stroke="white"/>"#,
            d,
            escape(fill)
        );
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: &str, content: &str) {
        self.styled_text(x, y, size, anchor, "#222222", "", content);
    }

    /// `extra` is appended verbatim to the element's attributes.
    #[allow(clippy::too_many_arguments)]
    pub fn styled_text(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        anchor: &str,
        fill: &str,
        extra: &str,
        content: &str,
    ) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.1}" font-family="sans-serif" text-anchor="{}" fill="{}"{}>{}</text>"#,
            x,
            y,
            size,
            anchor,
            escape(fill),
            extra,
            escape(content)
        );
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}
