//! Pretty-printing of generated content.
//!
//! Formatting never fails: malformed input comes back formatted as far as
//! possible, or unchanged.

use log::debug;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("empty parens pattern is valid"));

/// Syntax family of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// JSON documents such as the package manifest
    Json,
    /// JavaScript source, either module flavour
    Script,
    /// Everything else: markdown, YAML, dotenv and ignore files, Dockerfiles
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Write empty parameter lists as `( )` instead of `()`
    pub space_in_empty_paren: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_width: 2, space_in_empty_paren: true }
    }
}

/// Deterministic formatter applied to every generated file before it is written.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Formats `text` according to the rules of `syntax`.
    /// Non-empty output always ends with exactly one newline.
    pub fn format(&self, text: &str, syntax: Syntax) -> String {
        let formatted = match syntax {
            Syntax::Json => self.format_json(text),
            Syntax::Script => self.format_script(text),
            Syntax::Plain => format_plain(text),
        };

        let body = formatted.trim_end();
        if body.is_empty() {
            String::new()
        } else {
            format!("{body}\n")
        }
    }

    fn format_json(&self, text: &str) -> String {
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                debug!("Leaving malformed JSON unformatted: {e}");
                return text.to_string();
            }
        };

        let indent = " ".repeat(self.options.indent_width);
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        if let Err(e) = value.serialize(&mut serializer) {
            debug!("Leaving JSON unformatted: {e}");
            return text.to_string();
        }

        String::from_utf8(buffer).unwrap_or_else(|_| text.to_string())
    }

    fn format_script(&self, text: &str) -> String {
        let mut lines: Vec<String> = Vec::new();
        // Line number of every open bracket; brackets opened on the same line
        // count as a single indentation level.
        let mut open: Vec<usize> = Vec::new();
        let mut lexer = Lexer::Code;

        for (number, raw) in text.lines().enumerate() {
            let starts_in_code = lexer == Lexer::Code;
            let line = if starts_in_code { raw.trim() } else { raw.trim_end() };

            if starts_in_code && line.is_empty() {
                if lines.last().is_some_and(|last| !last.is_empty()) {
                    lines.push(String::new());
                }
                continue;
            }

            let segments = split_segments(line, &mut lexer);

            let mut leading_closers = segments
                .first()
                .filter(|segment| segment.code)
                .map_or(0, |segment| count_leading_closers(segment.text));
            for _ in 0..leading_closers {
                open.pop();
            }
            let mut level = nesting_level(&open);
            if line.starts_with('.') && !line.starts_with("...") {
                level += 1;
            }

            let mut rendered = String::with_capacity(line.len());
            for segment in &segments {
                if !segment.code {
                    rendered.push_str(segment.text);
                    continue;
                }
                for c in segment.text.chars() {
                    match c {
                        '(' | '[' | '{' => open.push(number),
                        ')' | ']' | '}' if leading_closers > 0 => leading_closers -= 1,
                        ')' | ']' | '}' => {
                            open.pop();
                        }
                        _ => {}
                    }
                }
                rendered.push_str(&self.normalize_parens(segment.text));
            }

            if starts_in_code {
                let indent = " ".repeat(self.options.indent_width * level);
                lines.push(format!("{indent}{rendered}"));
            } else {
                lines.push(rendered);
            }
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn normalize_parens(&self, code: &str) -> String {
        let replacement = if self.options.space_in_empty_paren { "( )" } else { "()" };
        EMPTY_PARENS.replace_all(code, replacement).into_owned()
    }
}

fn format_plain(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let start = lines.iter().position(|line| !line.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|line| !line.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexer {
    Code,
    Quoted(char),
    BlockComment,
}

/// A run of one line that is either code or a literal (string or comment).
struct Segment<'a> {
    text: &'a str,
    code: bool,
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, code: bool) {
    if !text.is_empty() {
        segments.push(Segment { text, code });
    }
}

/// Splits a line into code and literal segments, carrying the lexer state
/// across lines for template literals and block comments.
fn split_segments<'a>(line: &'a str, lexer: &mut Lexer) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match *lexer {
            Lexer::Code => match c {
                '\'' | '"' | '`' => {
                    push_segment(&mut segments, &line[start..i], true);
                    start = i;
                    *lexer = Lexer::Quoted(c);
                }
                '/' if matches!(chars.peek(), Some((_, '/'))) => {
                    push_segment(&mut segments, &line[start..i], true);
                    push_segment(&mut segments, &line[i..], false);
                    return segments;
                }
                '/' if matches!(chars.peek(), Some((_, '*'))) => {
                    push_segment(&mut segments, &line[start..i], true);
                    start = i;
                    chars.next();
                    *lexer = Lexer::BlockComment;
                }
                _ => {}
            },
            Lexer::Quoted(quote) => {
                if c == '\\' {
                    chars.next();
                } else if c == quote {
                    let end = i + c.len_utf8();
                    push_segment(&mut segments, &line[start..end], false);
                    start = end;
                    *lexer = Lexer::Code;
                }
            }
            Lexer::BlockComment => {
                if c == '*' && matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    let end = i + 2;
                    push_segment(&mut segments, &line[start..end], false);
                    start = end;
                    *lexer = Lexer::Code;
                }
            }
        }
    }

    push_segment(&mut segments, &line[start..], *lexer == Lexer::Code);
    // Only template literals may span lines.
    if matches!(*lexer, Lexer::Quoted('\'' | '"')) {
        *lexer = Lexer::Code;
    }
    segments
}

fn count_leading_closers(code: &str) -> usize {
    code.chars()
        .take_while(|c| matches!(c, ')' | ']' | '}') || c.is_whitespace())
        .filter(|c| !c.is_whitespace())
        .count()
}

fn nesting_level(open: &[usize]) -> usize {
    let mut lines = open.to_vec();
    lines.dedup();
    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(text: &str) -> String {
        Formatter::default().format(text, Syntax::Script)
    }

    #[test]
    fn test_reindents_by_nesting() {
        let input = "function demo(req, res) {\n        res.send('ok');\n            }";
        assert_eq!(script(input), "function demo(req, res) {\n  res.send('ok');\n}\n");
    }

    #[test]
    fn test_brackets_opened_on_one_line_count_once() {
        let input = "app.listen(3001, () => {\nconsole.log('up');\n});";
        assert_eq!(script(input), "app.listen(3001, ( ) => {\n  console.log('up');\n});\n");
    }

    #[test]
    fn test_strings_and_comments_are_untouched() {
        let input = "log('a { ()');\n// call() {\nnext();";
        assert_eq!(script(input), "log('a { ()');\n// call() {\nnext( );\n");
    }

    #[test]
    fn test_method_chains_get_continuation_indent() {
        let input = "connect(url)\n.then(done)\n.catch(fail);";
        assert_eq!(script(input), "connect(url)\n  .then(done)\n  .catch(fail);\n");
    }

    #[test]
    fn test_empty_paren_option() {
        let formatter =
            Formatter::new(FormatOptions { indent_width: 4, space_in_empty_paren: false });
        assert_eq!(formatter.format("if (x) {\nrun(  );\n}", Syntax::Script), "if (x) {\n    run();\n}\n");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(script("\n\na();\n\n\n\nb();\n\n"), "a( );\n\nb( );\n");
    }

    #[test]
    fn test_unbalanced_input_does_not_panic() {
        assert_eq!(script("}}\n)\nfoo('unterminated"), "}}\n)\nfoo('unterminated\n");
    }

    #[test]
    fn test_template_literal_spanning_lines_is_kept() {
        let input = "const q = `SELECT\n    id FROM t`;\nrun();";
        assert_eq!(script(input), "const q = `SELECT\n    id FROM t`;\nrun( );\n");
    }

    #[test]
    fn test_json_is_pretty_printed_in_order() {
        let formatted = Formatter::default().format(r#"{"b":1,"a":[1,2]}"#, Syntax::Json);
        assert_eq!(formatted, "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
    }

    #[test]
    fn test_malformed_json_is_returned_unchanged() {
        let formatted = Formatter::default().format("{\"a\": ", Syntax::Json);
        assert_eq!(formatted, "{\"a\":\n");
    }

    #[test]
    fn test_plain_keeps_indentation() {
        let input = "\nservices:\n  app:   \n    build: .\n\n";
        assert_eq!(Formatter::default().format(input, Syntax::Plain), "services:\n  app:\n    build: .\n");
    }
}
