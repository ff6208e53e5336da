//! SVG output for the circular diagram.

use std::fmt::Write as _;
use std::path::Path;

use crate::{
    config::DiagramConfig,
    geometry::{CircleDiagram, SegmentFill},
    model::Circle,
    Result,
};

const SEGMENT_STROKE: &str = "rgba(255,255,255,0.4)";
const INACTIVE_MARKER: &str = "rgba(255,255,255,0.3)";
const HUB_FILL: &str = "#111827";
const HUB_STROKE: &str = "#374151";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One element of an [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Path {
        d: String,
        fill: Option<String>,
        fill_opacity: Option<f32>,
        stroke: Option<String>,
        stroke_width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: String,
        stroke: Option<String>,
        stroke_width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: String,
        stroke_width: f32,
        dash: Option<String>,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: String,
        anchor: TextAnchor,
        bold: bool,
        /// Rotation in degrees around the text position.
        rotate: Option<f32>,
    },
    Group {
        /// Rotation in degrees around the origin.
        rotate: f32,
        children: Vec<SvgElement>,
    },
}

/// A small SVG document builder centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f32,
    height: f32,
    /// Half the side of the view box.
    extent: f32,
    background: Option<String>,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    pub fn new(width: f32, height: f32, extent: f32) -> Self {
        Self {
            width,
            height,
            extent,
            background: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn push(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(8192);
        let e = self.extent;
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            self.width,
            self.height,
            -e,
            -e,
            2.0 * e,
            2.0 * e
        );
        if let Some(bg) = &self.background {
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                -e,
                -e,
                2.0 * e,
                2.0 * e,
                escape(bg)
            );
        }
        for element in &self.elements {
            write_element(&mut svg, element, 1);
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

fn stroke_attrs(stroke: Option<&String>, width: f32) -> String {
    stroke
        .map(|s| format!(r#" stroke="{}" stroke-width="{width}""#, escape(s)))
        .unwrap_or_default()
}

fn write_element(svg: &mut String, element: &SvgElement, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = match element {
        SvgElement::Path {
            d,
            fill,
            fill_opacity,
            stroke,
            stroke_width,
        } => {
            let fill = fill.as_deref().map_or_else(|| "none".to_string(), escape);
            let opacity = fill_opacity
                .map(|o| format!(r#" fill-opacity="{o}""#))
                .unwrap_or_default();
            writeln!(
                svg,
                r#"{indent}<path d="{d}" fill="{fill}"{opacity}{}/>"#,
                stroke_attrs(stroke.as_ref(), *stroke_width)
            )
        }
        SvgElement::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        } => writeln!(
            svg,
            r#"{indent}<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{}/>"#,
            escape(fill),
            stroke_attrs(stroke.as_ref(), *stroke_width)
        ),
        SvgElement::Line {
            from,
            to,
            stroke,
            stroke_width,
            dash,
        } => {
            let dash = dash
                .as_deref()
                .map(|d| format!(r#" stroke-dasharray="{d}""#))
                .unwrap_or_default();
            writeln!(
                svg,
                r#"{indent}<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{stroke_width}"{dash}/>"#,
                from.0,
                from.1,
                to.0,
                to.1,
                escape(stroke)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            bold,
            rotate,
        } => {
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            let transform = rotate
                .map(|deg| format!(r#" transform="rotate({deg:.3} {x:.3} {y:.3})""#))
                .unwrap_or_default();
            writeln!(
                svg,
                r#"{indent}<text x="{x:.3}" y="{y:.3}" font-size="{font_size}" fill="{}" text-anchor="{}" dominant-baseline="middle"{weight}{transform}>{}</text>"#,
                escape(fill),
                anchor.as_str(),
                escape(text)
            )
        }
        SvgElement::Group { rotate, children } => {
            let _ = writeln!(svg, r#"{indent}<g transform="rotate({rotate:.3})">"#);
            for child in children {
                write_element(svg, child, depth + 1);
            }
            writeln!(svg, "{indent}</g>")
        }
    };
}

/// Draws `diagram` for `circle` using the circle's theme colours.
pub fn render_circle_diagram(
    circle: &Circle,
    diagram: &CircleDiagram,
    active_meter_name: &str,
    config: &DiagramConfig,
) -> SvgDocument {
    let theme = &circle.visual_theme;
    let mut ring = Vec::new();

    for segment in &diagram.segments {
        let fill = match segment.fill {
            SegmentFill::Primary => Some(theme.primary_color.clone()),
            SegmentFill::Accent => Some(theme.accent_color.clone()),
            SegmentFill::None => None,
        };
        ring.push(SvgElement::Path {
            d: segment.path.clone(),
            fill,
            fill_opacity: Some(config.segment_opacity),
            stroke: Some(SEGMENT_STROKE.to_string()),
            stroke_width: 1.0,
        });
        let mid_angle = segment.start_angle - diagram.angle_per_unit / 2.0;
        ring.push(SvgElement::Text {
            x: segment.label_pos.0,
            y: segment.label_pos.1,
            text: segment.label.clone(),
            font_size: config.unit_font_size,
            fill: "white".to_string(),
            anchor: TextAnchor::Middle,
            bold: true,
            rotate: Some(mid_angle + 90.0),
        });
    }

    for foot in &diagram.feet {
        ring.push(SvgElement::Path {
            d: foot.path.clone(),
            fill: None,
            fill_opacity: None,
            stroke: Some(theme.accent_color.clone()),
            stroke_width: 2.0,
        });
        ring.push(SvgElement::Text {
            x: foot.label_pos.0,
            y: foot.label_pos.1,
            text: foot.label.clone(),
            font_size: config.label_font_size,
            fill: theme.primary_color.clone(),
            anchor: TextAnchor::Middle,
            bold: true,
            rotate: Some(foot.mid_angle + 90.0),
        });
    }

    for marker in &diagram.markers {
        let (stroke, width, dash) = if marker.active {
            ("white".to_string(), 2.0, None)
        } else {
            (INACTIVE_MARKER.to_string(), 1.0, Some("4 2".to_string()))
        };
        ring.push(SvgElement::Line {
            from: marker.anchor,
            to: marker.position,
            stroke,
            stroke_width: width,
            dash,
        });
        ring.push(SvgElement::Text {
            x: marker.position.0,
            y: marker.position.1,
            text: marker.label.clone(),
            font_size: 12.0,
            fill: if marker.active { "white" } else { "#9CA3AF" }.to_string(),
            anchor: TextAnchor::Middle,
            bold: marker.active,
            // Keeps labels upright while the ring turns.
            rotate: Some(-diagram.rotation),
        });
    }

    let mut doc = SvgDocument::new(config.size, config.size, config.view_extent).background(HUB_FILL);
    doc.push(SvgElement::Group {
        rotate: diagram.rotation,
        children: ring,
    });

    let hub_radius = config.inner_radius * 0.9;
    doc.push(SvgElement::Circle {
        cx: 0.0,
        cy: 0.0,
        r: hub_radius,
        fill: HUB_FILL.to_string(),
        stroke: Some(HUB_STROKE.to_string()),
        stroke_width: 4.0,
    });
    let hub_lines = [
        (-hub_radius * 0.35, circle.name.as_str(), 16.0, "#FBBF24"),
        (0.0, active_meter_name, 10.0, "#9CA3AF"),
        (hub_radius * 0.4, diagram.start_unit.as_str(), 14.0, "#34D399"),
    ];
    for (y, text, size, fill) in hub_lines {
        doc.push(SvgElement::Text {
            x: 0.0,
            y,
            text: text.to_string(),
            font_size: size,
            fill: fill.to_string(),
            anchor: TextAnchor::Middle,
            bold: false,
            rotate: None,
        });
    }
    doc.push(SvgElement::Text {
        x: 0.0,
        y: -config.view_extent + 16.0,
        text: "START".to_string(),
        font_size: 12.0,
        fill: "white".to_string(),
        anchor: TextAnchor::Middle,
        bold: true,
        rotate: None,
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, resolver::PatternResolver};

    fn tawil_svg() -> (SvgDocument, String) {
        let catalog = Catalog::builtin();
        let found = catalog.meter("al-tawil").unwrap();
        let pattern =
            PatternResolver::default().resolve_groups(&catalog, found.meter, Some(found.circle));
        let config = DiagramConfig::default();
        let diagram = CircleDiagram::layout(found.circle, found.meter, &pattern, &config);
        let doc = render_circle_diagram(
            found.circle,
            &diagram,
            &found.meter.name_transliteration,
            &config,
        );
        let svg = doc.render();
        (doc, svg)
    }

    #[test]
    fn renders_a_well_formed_document() {
        let (_, svg) = tawil_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"450\""));
        assert!(svg.contains(r#"viewBox="-300 -300 600 600""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("فعولن"));
        assert!(svg.contains("al-Bahr al-Tawil"));
    }

    #[test]
    fn ring_group_holds_segments_feet_and_markers() {
        let (doc, _) = tawil_svg();
        let Some(SvgElement::Group { children, rotate }) = doc.elements().first() else {
            panic!("first element should be the rotating ring");
        };
        assert_eq!(*rotate, 0.0);
        // 10 segments and 4 feet, each a path plus a label, then 3 markers.
        assert_eq!(children.len(), 10 * 2 + 4 * 2 + 3 * 2);
    }

    #[test]
    fn escapes_markup_in_text() {
        let mut doc = SvgDocument::new(10.0, 10.0, 5.0);
        doc.push(SvgElement::Text {
            x: 0.0,
            y: 0.0,
            text: "a<b & \"c\"".to_string(),
            font_size: 1.0,
            fill: "red".to_string(),
            anchor: TextAnchor::Start,
            bold: false,
            rotate: None,
        });
        assert!(doc.render().contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn writes_to_disk() {
        let (doc, svg) = tawil_svg();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tawil.svg");
        doc.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), svg);
    }
}
