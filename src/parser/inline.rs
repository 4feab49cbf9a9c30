//! Inline markup conversion for manuscript lines.

use regex::Regex;

/// Converts the lightweight inline markup of a manuscript line into LaTeX.
///
/// | Input | Output |
/// |---|---|
/// | `& # % $` | `\& \# \% \$` |
/// | `~~aside~~` | `\ntext{aside}` |
/// | `<<note>>` | `\note{note}` |
/// | `[text](url)` | `\href{url}{text}` |
/// | `**bold**`, `*italic*` | `\textbf{bold}`, `\emph{italic}` |
/// | `"quoted"`, `'quoted'` | ` ``quoted'' `, `` `quoted' `` |
/// | `---`, `—`, spaced `-`/`–` | `\mdash` |
/// | `--` | `\ndash` |
/// | `...`, `…` | `\ellipsis` |
pub struct InlineConverter {
    special_chars: Regex,
    aside: Regex,
    note: Regex,
    link: Regex,
    bold: Regex,
    italic: Regex,
    open_double_quote: Regex,
    open_single_quote: Regex,
    em_dash: Regex,
    en_dash: Regex,
    ellipsis: Regex,
    whitespace: Regex,
}

impl InlineConverter {
    /// Create a new converter, compiling its patterns once.
    pub fn new() -> Self {
        Self {
            special_chars: Regex::new(r"([&#%$])").unwrap(),
            aside: Regex::new(r"~~((?:[^~]|~[^~])+)~~").unwrap(),
            note: Regex::new(r" *<<((?:[^>]|>[^>])+)>> *").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            bold: Regex::new(r"\*\*((?:[^*]|\*[^*])+)\*\*").unwrap(),
            italic: Regex::new(r"\*([^*]+)\*").unwrap(),
            open_double_quote: Regex::new(r#"(\s|\(|\{|^)""#).unwrap(),
            open_single_quote: Regex::new(r"(\s|\(|\{|^)'").unwrap(),
            em_dash: Regex::new(r"\s*(?:---|—)\s*|\s+(?:-|–)\s+").unwrap(),
            en_dash: Regex::new(r"\s*--\s*").unwrap(),
            ellipsis: Regex::new(r"\s*(?:\.\.\.|…)\s*").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Convert one line of manuscript text.
    pub fn convert(&self, text: &str) -> String {
        let mut result = self.special_chars.replace_all(text, r"\${1}").into_owned();

        // Annotations
        result = self.aside.replace_all(&result, r"\ntext{${1}}").into_owned();
        result = self.note.replace_all(&result, r"\note{${1}} ").into_owned();

        result = self.link.replace_all(&result, r"\href{${2}}{${1}}").into_owned();

        // Bold needs a second pass for bold nested inside italics.
        result = self.bold.replace_all(&result, r"\textbf{${1}}").into_owned();
        result = self.italic.replace_all(&result, r"\emph{${1}}").into_owned();
        result = self.bold.replace_all(&result, r"\textbf{${1}}").into_owned();

        result = self.convert_quotes(&result);

        result = self.em_dash.replace_all(&result, r"\mdash ").into_owned();
        result = self.en_dash.replace_all(&result, r"\ndash ").into_owned();
        result = self.ellipsis.replace_all(&result, r"\ellipsis ").into_owned();

        self.whitespace
            .replace_all(&result, " ")
            .trim()
            .to_string()
    }

    fn convert_quotes(&self, text: &str) -> String {
        let result = self.open_double_quote.replace_all(text, "${1}``");
        let result = self.open_single_quote.replace_all(&result, "${1}`");
        result
            .replace('"', "''")
            .replace('\u{2018}', "`")
            .replace('\u{2019}', "'")
            .replace('\u{201C}', "``")
            .replace('\u{201D}', "''")
    }
}

impl Default for InlineConverter {
    fn default() -> Self {
        Self::new()
    }
}
