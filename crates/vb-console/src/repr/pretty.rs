//! Width-aware pretty printer
//!
//! A value whose one-line form fits the remaining width is written as-is.
//! Otherwise containers are broken up: mapping entries go one per line,
//! sequence items are packed as many per line as fit (compact layout), and
//! long strings are split on whitespace into adjacent literals.

use super::inline::{render_inline, InlineStyle};
use super::{quote_str, text_width, Repr};

/// Pretty printer configured with an indent step and a line width
#[derive(Debug, Clone, Copy)]
pub struct PrettyPrinter {
    indent_per_level: usize,
    width: usize,
}

impl PrettyPrinter {
    pub fn new(indent: usize, width: usize) -> Self {
        Self {
            indent_per_level: indent,
            width,
        }
    }

    /// Render `value`, mapping keys sorted
    pub fn pformat(&self, value: &Repr) -> String {
        let mut out = String::new();
        self.format(value, &mut out, 0, 0, 0);
        out
    }

    fn repr(&self, value: &Repr) -> String {
        render_inline(value, &InlineStyle::sorted())
    }

    fn format(&self, value: &Repr, out: &mut String, indent: usize, allowance: usize, level: usize) {
        let rep = self.repr(value);
        let max_width = self.width as isize - indent as isize - allowance as isize;

        if text_width(&rep) as isize > max_width {
            let level = level + 1;
            match value {
                Repr::Map(entries) => return self.pprint_map(entries, out, indent, allowance, level),
                Repr::List(items) => {
                    out.push('[');
                    self.format_items(items, out, indent, allowance + 1, level);
                    out.push(']');
                    return;
                }
                Repr::Tuple(items) => {
                    out.push('(');
                    let end = if items.len() == 1 { ",)" } else { ")" };
                    self.format_items(items, out, indent, allowance + end.len(), level);
                    out.push_str(end);
                    return;
                }
                Repr::Str(s) if !s.is_empty() => {
                    return self.pprint_str(s, out, indent, allowance, level)
                }
                Repr::Struct { name, fields } => {
                    out.push_str(name);
                    out.push('(');
                    self.format_fields(fields, out, indent + text_width(name) + 1, allowance, level);
                    out.push(')');
                    return;
                }
                Repr::Call { name, args } => {
                    out.push_str(name);
                    out.push('(');
                    self.format_items(
                        args,
                        out,
                        indent + text_width(name),
                        allowance + 1,
                        level,
                    );
                    out.push(')');
                    return;
                }
                _ => {}
            }
        }

        out.push_str(&rep);
    }

    fn pad_after_open(&self, out: &mut String) {
        if self.indent_per_level > 1 {
            out.push_str(&" ".repeat(self.indent_per_level - 1));
        }
    }

    fn pprint_map(
        &self,
        entries: &[(Repr, Repr)],
        out: &mut String,
        indent: usize,
        allowance: usize,
        level: usize,
    ) {
        out.push('{');
        self.pad_after_open(out);

        let indent = indent + self.indent_per_level;
        let delimnl = format!(",\n{}", " ".repeat(indent));
        let sorted = Repr::sorted_entries(entries);
        let last_index = sorted.len().saturating_sub(1);

        for (i, (key, value)) in sorted.into_iter().enumerate() {
            let last = i == last_index;
            let rep = self.repr(key);
            out.push_str(&rep);
            out.push_str(": ");
            self.format(
                value,
                out,
                indent + text_width(&rep) + 2,
                if last { allowance + 1 } else { 1 },
                level,
            );
            if !last {
                out.push_str(&delimnl);
            }
        }
        out.push('}');
    }

    fn format_fields(
        &self,
        fields: &[(String, Repr)],
        out: &mut String,
        indent: usize,
        allowance: usize,
        level: usize,
    ) {
        let delimnl = format!(",\n{}", " ".repeat(indent));
        let last_index = fields.len().saturating_sub(1);

        for (i, (name, value)) in fields.iter().enumerate() {
            let last = i == last_index;
            out.push_str(name);
            out.push('=');
            self.format(
                value,
                out,
                indent + text_width(name) + 1,
                if last { allowance } else { 1 },
                level,
            );
            if !last {
                out.push_str(&delimnl);
            }
        }
    }

    /// Compact layout: pack items onto a line while they fit, otherwise
    /// start a new line and let the item break itself up.
    fn format_items(
        &self,
        items: &[Repr],
        out: &mut String,
        indent: usize,
        allowance: usize,
        level: usize,
    ) {
        let indent = indent + self.indent_per_level;
        self.pad_after_open(out);

        let delimnl = format!(",\n{}", " ".repeat(indent));
        let mut delim = String::new();
        let mut max_width = self.width as isize - indent as isize + 1;
        let mut width = max_width;

        for (i, item) in items.iter().enumerate() {
            let last = i + 1 == items.len();
            if last {
                max_width -= allowance as isize;
                width -= allowance as isize;
            }

            let rep = self.repr(item);
            let w = text_width(&rep) as isize + 2;
            if width < w {
                width = max_width;
                if !delim.is_empty() {
                    delim = delimnl.clone();
                }
            }
            if width >= w {
                width -= w;
                out.push_str(&delim);
                delim = ", ".to_string();
                out.push_str(&rep);
                continue;
            }

            out.push_str(&delim);
            delim = delimnl.clone();
            self.format(item, out, indent, if last { allowance } else { 1 }, level);
        }
    }

    fn pprint_str(&self, s: &str, out: &mut String, indent: usize, allowance: usize, level: usize) {
        let (indent, allowance) = if level == 1 {
            (indent + 1, allowance + 1)
        } else {
            (indent, allowance)
        };

        let max_width = self.width as isize - indent as isize;
        let mut max_width1 = max_width;
        let lines = split_lines_keep_ends(s);
        let mut chunks: Vec<String> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let last_line = i + 1 == lines.len();
            let rep = quote_str(line);
            if last_line {
                max_width1 -= allowance as isize;
            }
            if text_width(&rep) as isize <= max_width1 {
                chunks.push(rep);
                continue;
            }

            let parts = split_words(line);
            let mut max_width2 = max_width;
            let mut current = String::new();
            for (j, part) in parts.iter().enumerate() {
                let candidate = format!("{}{}", current, part);
                if j + 1 == parts.len() && last_line {
                    max_width2 -= allowance as isize;
                }
                if text_width(&quote_str(&candidate)) as isize > max_width2 {
                    if !current.is_empty() {
                        chunks.push(quote_str(&current));
                    }
                    current = part.to_string();
                } else {
                    current = candidate;
                }
            }
            if !current.is_empty() {
                chunks.push(quote_str(&current));
            }
        }

        if chunks.len() == 1 {
            out.push_str(&chunks[0]);
            return;
        }

        if level == 1 {
            out.push('(');
        }
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                out.push_str(&" ".repeat(indent));
            }
            out.push_str(chunk);
        }
        if level == 1 {
            out.push(')');
        }
    }
}

/// Lines of `s` with their terminators kept
fn split_lines_keep_ends(s: &str) -> Vec<&str> {
    s.split_inclusive('\n').collect()
}

/// Runs of non-whitespace followed by their trailing whitespace
fn split_words(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (idx, c) in line.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            parts.push(&line[start..idx]);
            start = idx;
            in_space = false;
        }
    }
    if start < line.len() {
        parts.push(&line[start..]);
    }
    parts
}
