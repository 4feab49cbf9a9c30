//! Rendering module for converting block documents to LaTeX and JSON.

mod json;
mod latex;
mod options;
mod result;

pub use json::{to_json, JsonFormat};
pub use latex::{
    render, render_raw, to_latex, to_latex_with_stats, LatexRenderer, WATERMARK_DIRECTIVE,
};
pub use options::RenderConfig;
pub use result::{RenderResult, RenderStats};
