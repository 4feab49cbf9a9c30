//! Plain-text manuscript parser.

use regex::Regex;

use super::InlineConverter;
use crate::model::{Block, BlockKind, Document};

/// Parses a plain-text manuscript into a block document.
///
/// Every non-blank line becomes one block. A leading run of `#` selects the
/// block kind (`#` prompt, `##` title, three or more addendum, none body),
/// and a line made only of asterisks is a separator. A line ending in `\\`
/// or `\par ` continues on the next line. Besides `\n` and `\r\n`, a bare
/// `\r`, form feed, vertical tab, the information separators and the
/// Unicode line/paragraph separators all end a line.
///
/// # Example
///
/// ```
/// use txtex::parser::TextParser;
/// use txtex::Block;
///
/// let doc = TextParser::new().parse("## Chapter One\nIt was *late*.\n***\n");
/// assert_eq!(
///     doc.blocks,
///     vec![
///         Block::title("Chapter One"),
///         Block::body(r"It was \emph{late}."),
///         Block::Separator,
///     ]
/// );
/// ```
pub struct TextParser {
    soft_break: Regex,
    line_break: Regex,
    separator: Regex,
    inline: InlineConverter,
}

impl TextParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            soft_break: Regex::new(
                r"(\\{2}|\\par )[ ]*(?:\r\n|[\n\r\x0b\x0c\x1c\x1d\x1e\x{85}\x{2028}\x{2029}])",
            )
            .unwrap(),
            line_break: Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c\x1d\x1e\x{85}\x{2028}\x{2029}]").unwrap(),
            separator: Regex::new(r"^\s*\*+$").unwrap(),
            inline: InlineConverter::new(),
        }
    }

    /// Parse a whole manuscript.
    pub fn parse(&self, source: &str) -> Document {
        let joined = self.soft_break.replace_all(source, r" ${1} ");

        let doc: Document = self
            .line_break
            .split(&joined)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line))
            .collect();

        log::debug!(
            "Parsed {} blocks ({} separators) from manuscript",
            doc.len(),
            doc.count(BlockKind::Separator)
        );

        doc
    }

    /// Parse a single trimmed, non-empty line into a block.
    pub fn parse_line(&self, line: &str) -> Block {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        let rest = &line[level..];

        if self.separator.is_match(rest) {
            return Block::Separator;
        }

        let text = self.inline.convert(rest);
        log::trace!("Line with heading level {}: {:?}", level, text);

        match level {
            0 => Block::Body(text),
            1 => Block::Prompt(text),
            2 => Block::Title(text),
            _ => Block::Addendum(text),
        }
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a plain-text manuscript with a default parser.
pub fn parse_text(source: &str) -> Document {
    TextParser::new().parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let doc = parse_text("# Prompt\n## Title\n### Note\n#### Also note\nBody");
        assert_eq!(
            doc.blocks,
            vec![
                Block::prompt("Prompt"),
                Block::title("Title"),
                Block::addendum("Note"),
                Block::addendum("Also note"),
                Block::body("Body"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        let doc = parse_text("\n\n  first  \n\n\t\nsecond\r\n");
        assert_eq!(doc.blocks, vec![Block::body("first"), Block::body("second")]);
    }

    #[test]
    fn test_separators() {
        let doc = parse_text("***\n*\n* * *\n");
        assert_eq!(doc.blocks[0], Block::Separator);
        assert_eq!(doc.blocks[1], Block::Separator);
        // Spaced asterisks are not a separator line.
        assert!(!doc.blocks[2].is_separator());
    }

    #[test]
    fn test_soft_line_breaks() {
        let doc = parse_text("first line\\\\\nsecond line\nnext");
        assert_eq!(
            doc.blocks,
            vec![
                Block::body(r"first line \\ second line"),
                Block::body("next"),
            ]
        );

        let doc = parse_text("one\\par   \ntwo");
        assert_eq!(doc.blocks, vec![Block::body(r"one \par two")]);
    }

    #[test]
    fn test_bare_carriage_returns() {
        let doc = parse_text("## Title\rBody one\r***\r");
        assert_eq!(
            doc.blocks,
            vec![Block::title("Title"), Block::body("Body one"), Block::Separator]
        );
    }

    #[test]
    fn test_other_line_boundaries() {
        let doc = parse_text("first\x0csecond\x0bthird\u{2028}# fourth\u{85}fifth\x1efin");
        assert_eq!(
            doc.blocks,
            vec![
                Block::body("first"),
                Block::body("second"),
                Block::body("third"),
                Block::prompt("fourth"),
                Block::body("fifth"),
                Block::body("fin"),
            ]
        );
    }

    #[test]
    fn test_soft_break_before_bare_carriage_return() {
        let doc = parse_text("one\\\\\rtwo\rthree");
        assert_eq!(
            doc.blocks,
            vec![Block::body(r"one \\ two"), Block::body("three")]
        );
    }

    #[test]
    fn test_hash_after_marker_is_escaped() {
        let doc = parse_text("## Part #2");
        assert_eq!(doc.blocks, vec![Block::title(r"Part \#2")]);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("\n   \n").is_empty());
    }
}
