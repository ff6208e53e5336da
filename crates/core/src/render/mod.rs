//! Output backends: plain text for the terminal and SVG for the diagram.

pub mod svg;
pub mod text;

pub use svg::{render_circle_diagram, SvgDocument, SvgElement, TextAnchor};
pub use text::{
    render_about, render_detail, render_empty, render_hub, render_missing, render_screen,
};
