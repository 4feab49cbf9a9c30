//! # txtex
//!
//! Render plain-text manuscripts and typed content blocks into LuaLaTeX
//! source documents.
//!
//! A document is an ordered list of [`Block`]s (body text, prompts, titles,
//! editorial addenda and separators). The renderer expands them into a fixed
//! preamble (typefaces, page geometry, styling macros, optional watermark)
//! followed by one fragment per block. Rendering is a pure function of the
//! configuration and the blocks: identical input gives byte-identical output.
//!
//! ## Quick Start
//!
//! ```
//! use txtex::{parse_text, render, RenderConfig};
//!
//! fn main() -> txtex::Result<()> {
//!     let doc = parse_text("## Chapter One\nIt was a dark and stormy night...\n***\n");
//!
//!     let config = RenderConfig::new()
//!         .with_font_size(12)
//!         .with_cjk_font("Noto Serif CJK SC");
//!     let tex = render(&config, &doc.blocks)?;
//!     assert!(tex.ends_with("\\end{document}\n"));
//!
//!     Ok(())
//! }
//! ```
//!
//! Compiling the output (e.g. with `lualatex`) is left to the caller.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, BlockKind, Document, RawBlock};
pub use parser::{parse_text, TextParser};
pub use render::{
    render, render_raw, JsonFormat, LatexRenderer, RenderConfig, RenderResult, RenderStats,
};

use std::path::{Path, PathBuf};

/// Parse a plain-text manuscript file into a document.
///
/// # Example
///
/// ```no_run
/// use txtex::parse_file;
///
/// let doc = parse_file("story.txt").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let source = read_manuscript(path.as_ref())?;
    Ok(parse_text(&source))
}

fn read_manuscript(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path)?;
    log::debug!("Parsing manuscript {}", path.display());
    Ok(source)
}

/// Convert a manuscript file to LaTeX.
///
/// # Example
///
/// ```no_run
/// use txtex::{to_latex, RenderConfig};
///
/// let tex = to_latex("story.txt", &RenderConfig::default()).unwrap();
/// std::fs::write("story.tex", tex).unwrap();
/// ```
pub fn to_latex<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_latex(&doc, config)
}

/// Convert a manuscript file to JSON blocks.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Parse a manuscript file, render it and write the LaTeX source.
///
/// The output goes to `target`, or next to the source with a `.tex`
/// extension when no target is given. Returns the path written.
///
/// # Example
///
/// ```no_run
/// use txtex::{convert_file, RenderConfig};
///
/// let written = convert_file("story.txt", &RenderConfig::default(), None).unwrap();
/// assert_eq!(written, std::path::PathBuf::from("story.tex"));
/// ```
pub fn convert_file<P: AsRef<Path>>(
    source: P,
    config: &RenderConfig,
    target: Option<&Path>,
) -> Result<PathBuf> {
    let source = source.as_ref();
    let tex = to_latex(source, config)?;

    let target = match target {
        Some(path) => path.to_path_buf(),
        None => tex_path_for(source),
    };
    std::fs::write(&target, tex)?;
    log::debug!("Wrote {} -> {}", source.display(), target.display());

    Ok(target)
}

/// The `.tex` path that sits next to a manuscript.
pub fn tex_path_for<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension("tex")
}

/// Builder for parsing and rendering manuscripts.
///
/// # Example
///
/// ```
/// use txtex::Txtex;
///
/// let tex = Txtex::new()
///     .with_font_size(12)
///     .with_watermark("logo.png")
///     .parse_str("# Write about the sea.")?
///     .to_latex()?;
/// assert!(tex.contains(r"\includegraphics{logo.png}"));
/// # Ok::<(), txtex::Error>(())
/// ```
pub struct Txtex {
    parser: TextParser,
    config: RenderConfig,
}

impl Txtex {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            parser: TextParser::new(),
            config: RenderConfig::default(),
        }
    }

    /// Replace the whole render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.config = self.config.with_font_size(size);
        self
    }

    /// Set the body typeface.
    pub fn with_body_font(mut self, family: impl Into<String>) -> Self {
        self.config = self.config.with_body_font(family);
        self
    }

    /// Set the CJK fallback typeface.
    pub fn with_cjk_font(mut self, family: impl Into<String>) -> Self {
        self.config = self.config.with_cjk_font(family);
        self
    }

    /// Set the heading typeface.
    pub fn with_heading_font(mut self, family: impl Into<String>) -> Self {
        self.config = self.config.with_heading_font(family);
        self
    }

    /// Set the watermark image.
    pub fn with_watermark(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_watermark(path);
        self
    }

    /// Parse a manuscript file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<TxtexResult> {
        let source = read_manuscript(path.as_ref())?;
        self.parse_str(&source)
    }

    /// Parse manuscript text.
    ///
    /// The configuration is validated here so that errors surface before
    /// any rendering is attempted.
    pub fn parse_str(self, source: &str) -> Result<TxtexResult> {
        self.config.validate()?;
        let document = self.parser.parse(source);
        Ok(TxtexResult {
            document,
            config: self.config,
        })
    }
}

impl Default for Txtex {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a manuscript.
pub struct TxtexResult {
    /// The parsed document
    pub document: Document,
    /// Configuration to render with
    config: RenderConfig,
}

impl TxtexResult {
    /// Convert to LaTeX.
    pub fn to_latex(&self) -> Result<String> {
        render::to_latex(&self.document, &self.config)
    }

    /// Convert to LaTeX with block statistics.
    pub fn to_latex_with_stats(&self) -> Result<RenderResult> {
        render::to_latex_with_stats(&self.document, &self.config)
    }

    /// Convert to JSON blocks.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txtex_builder() {
        let builder = Txtex::new()
            .with_font_size(13)
            .with_body_font("Libertinus Serif")
            .with_heading_font("Fira Sans")
            .with_cjk_font("Noto Serif CJK TC")
            .with_watermark("mark.png");

        assert_eq!(builder.config.body_font_size, 13);
        assert_eq!(builder.config.body_font_family, "Libertinus Serif");
        assert_eq!(builder.config.heading_font_family, "Fira Sans");
        assert_eq!(builder.config.cjk_font(), Some("Noto Serif CJK TC"));
        assert_eq!(builder.config.watermark_path(), Some("mark.png"));
    }

    #[test]
    fn test_txtex_builder_default() {
        let builder = Txtex::default();
        assert_eq!(builder.config, RenderConfig::default());
    }

    #[test]
    fn test_parse_str_validates_config() {
        let result = Txtex::new().with_font_size(0).parse_str("text");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_parse_str_to_outputs() {
        let result = Txtex::new()
            .parse_str("## One\nBody text.\n***")
            .unwrap();

        assert_eq!(result.document().len(), 3);

        let tex = result.to_latex().unwrap();
        assert!(tex.contains("{\\titlefont\\bfseries One}"));

        let stats = result.to_latex_with_stats().unwrap().stats;
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.separator_count, 1);

        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.starts_with(r#"[{"tag":"title","payload":"One"}"#));
    }

    #[test]
    fn test_tex_path_for() {
        assert_eq!(tex_path_for("dir/story.txt"), PathBuf::from("dir/story.tex"));
        assert_eq!(tex_path_for("notes"), PathBuf::from("notes.tex"));
    }

    #[test]
    fn test_builder_parse_missing_file() {
        let result = Txtex::new().parse("definitely/not/here.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_builder_parse_file_matches_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");
        std::fs::write(&path, "## One\rBody\n***\n").unwrap();

        let result = Txtex::new().parse(&path).unwrap();
        assert_eq!(result.document(), &parse_file(&path).unwrap());
        assert_eq!(result.document().len(), 3);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("definitely/not/here.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
