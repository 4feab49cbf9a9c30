//! LaTeX rendering for block documents.
//!
//! Output targets LuaLaTeX: typefaces are declared through `fontspec`, the
//! optional CJK fallback through `luatexja-fontspec`.

use crate::error::Result;
use crate::model::{Block, Document, RawBlock};

use super::{RenderConfig, RenderResult, RenderStats};

/// Spacing shared by the three punctuation macros.
const PUNCT_PAD: &str = r"\hspace{0.2em plus 0.1em}";

/// Divider emitted for every separator block.
const SEPARATOR: &str = "\\begin{center}*\\quad*\\quad*\\end{center}\n\n";

/// Directive that sets the full-page background image.
pub const WATERMARK_DIRECTIVE: &str = r"\backgroundsetup";

/// Render a block sequence to a LaTeX document.
///
/// The configuration is validated before anything is emitted. Identical
/// arguments always produce byte-identical output.
///
/// # Example
///
/// ```
/// use txtex::{render, Block, RenderConfig};
///
/// let tex = render(&RenderConfig::default(), &[Block::title("One"), Block::body("Text.")])?;
/// assert!(tex.contains(r"{\titlefont\bfseries One}"));
/// # Ok::<(), txtex::Error>(())
/// ```
pub fn render(config: &RenderConfig, blocks: &[Block]) -> Result<String> {
    LatexRenderer::new(config.clone()).render_blocks(blocks)
}

/// Validate caller-supplied `(tag, payload?)` pairs and render them.
///
/// No output is produced if any block has an unknown tag or lacks a
/// required payload.
pub fn render_raw(config: &RenderConfig, blocks: &[RawBlock]) -> Result<String> {
    config.validate()?;
    let doc = Document::from_raw_blocks(blocks.iter().cloned())?;
    render(config, &doc.blocks)
}

/// Convert a document to LaTeX.
pub fn to_latex(doc: &Document, config: &RenderConfig) -> Result<String> {
    render(config, &doc.blocks)
}

/// Convert a document to LaTeX with statistics.
pub fn to_latex_with_stats(doc: &Document, config: &RenderConfig) -> Result<RenderResult> {
    LatexRenderer::new(config.clone()).render_with_stats(&doc.blocks)
}

/// LaTeX renderer.
pub struct LatexRenderer {
    config: RenderConfig,
    stats: RenderStats,
}

impl LatexRenderer {
    /// Create a new LaTeX renderer.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            stats: RenderStats::new(),
        }
    }

    /// Render blocks to a complete LaTeX document.
    pub fn render_blocks(mut self, blocks: &[Block]) -> Result<String> {
        self.render_internal(blocks)
    }

    /// Render blocks and collect statistics.
    pub fn render_with_stats(mut self, blocks: &[Block]) -> Result<RenderResult> {
        let content = self.render_internal(blocks)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, blocks: &[Block]) -> Result<String> {
        self.config.validate()?;

        log::debug!(
            "Rendering {} blocks (font size {}pt, watermark: {})",
            blocks.len(),
            self.config.body_font_size,
            self.config.watermark_path().is_some()
        );

        let mut output = String::new();
        self.render_preamble(&mut output);

        output.push_str("\\begin{document}\n\n");
        for block in blocks {
            self.stats.add_block(block);
            render_block(&mut output, block);
        }
        output.push_str("\\end{document}\n");

        Ok(output)
    }

    fn render_preamble(&mut self, output: &mut String) {
        let config = &self.config;

        output.push_str("\\documentclass[fontsize=");
        output.push_str(&config.body_font_size.to_string());
        output.push_str("pt]{scrartcl}\n\n");

        // Typefaces
        output.push_str("\\usepackage{fontspec}\n");
        output.push_str("\\setmainfont[Numbers={Proportional,OldStyle}]{");
        output.push_str(&config.body_font_family);
        output.push_str("}\n");
        if let Some(cjk) = config.cjk_font() {
            output.push_str("\\usepackage{luatexja-fontspec}\n");
            output.push_str("\\setmainjfont[Scale=0.92]{");
            output.push_str(cjk);
            output.push_str("}\n");
        }
        push_heading_family(output, "promptfont", "1.15", &config.heading_font_family);
        push_heading_family(output, "titlefont", "1.6", &config.heading_font_family);
        output.push('\n');

        // Layout
        output.push_str("\\usepackage[a5paper,top=2cm,bottom=2.2cm,left=1.8cm,right=1.8cm]{geometry}\n");
        output.push_str("\\usepackage{setspace}\n");
        output.push_str("\\setstretch{1.3}\n");
        output.push_str("\\raggedbottom\n");
        output.push_str("\\pagestyle{empty}\n\n");

        // Styling
        output.push_str("\\usepackage{xcolor}\n");
        output.push_str("\\definecolor{accent}{HTML}{8C5A3C}\n");
        output.push_str("\\usepackage{tcolorbox}\n");
        output.push_str(
            "\\newtcolorbox{addendum}{colback=accent!8,colframe=accent,boxrule=0.5pt,arc=2mm}\n",
        );
        output.push_str("\\usepackage{hyperref}\n");
        output.push_str("\\hypersetup{colorlinks=true,urlcolor=accent,linkcolor=accent}\n\n");

        // Punctuation and annotation macros
        push_padded_macro(output, "mdash", "---");
        push_padded_macro(output, "ndash", "--");
        push_padded_macro(output, "ellipsis", "\\dots");
        output.push_str("\\newcommand{\\ntext}[1]{\\textcolor{gray}{\\textit{#1}}}\n");
        output.push_str("\\newcommand{\\note}[1]{\\footnote{#1}}\n");

        // Watermark
        if let Some(path) = config.watermark_path() {
            log::trace!("Emitting watermark directive for {}", path);
            self.stats.watermarked = true;
            output.push('\n');
            output.push_str("\\usepackage{graphicx}\n");
            output.push_str("\\usepackage{background}\n");
            output.push_str(WATERMARK_DIRECTIVE);
            output.push_str("{scale=0.15,opacity=1,angle=0,contents={\\includegraphics{");
            output.push_str(path);
            output.push_str("}}}\n");
        }

        output.push('\n');
    }
}

/// Append the fragment for a single block.
fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Body(text) => {
            output.push_str(text);
            output.push_str("\n\n");
        }
        Block::Prompt(text) => push_heading(output, "\\medskip", "promptfont", text),
        Block::Title(text) => push_heading(output, "\\bigskip", "titlefont", text),
        Block::Addendum(text) => {
            output.push_str("\\medskip\n");
            output.push_str("\\begin{addendum}\n");
            output.push_str(text);
            output.push_str("\n\\end{addendum}\n\n");
        }
        Block::Separator => output.push_str(SEPARATOR),
    }
}

fn push_heading(output: &mut String, skip: &str, family: &str, text: &str) {
    output.push_str(skip);
    output.push_str("\n\\noindent{\\");
    output.push_str(family);
    output.push_str("\\bfseries ");
    output.push_str(text);
    output.push_str("}\\par\n\n");
}

fn push_heading_family(output: &mut String, name: &str, scale: &str, family: &str) {
    output.push_str("\\newfontfamily\\");
    output.push_str(name);
    output.push_str("[Numbers={Proportional,OldStyle},Scale=");
    output.push_str(scale);
    output.push_str("]{");
    output.push_str(family);
    output.push_str("}\n");
}

fn push_padded_macro(output: &mut String, name: &str, body: &str) {
    output.push_str("\\newcommand{\\");
    output.push_str(name);
    output.push_str("}{");
    output.push_str(PUNCT_PAD);
    output.push_str(body);
    output.push_str(PUNCT_PAD);
    output.push_str("}\n");
}
