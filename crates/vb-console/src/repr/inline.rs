//! Single-line rendering

use super::{format_float, quote_bytes, quote_str, Repr};
use vb_core::{DirColors, RESET};

/// Options for the single-line renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyle {
    /// Sort mapping entries by key instead of keeping insertion order
    pub sort_maps: bool,
    /// Paint string mapping keys and open a value-colored span after them
    pub key_colors: Option<DirColors>,
}

impl InlineStyle {
    /// Plain text with sorted mappings, as used by the pretty printer
    pub fn sorted() -> Self {
        Self {
            sort_maps: true,
            key_colors: None,
        }
    }

    /// Insertion-ordered mappings with colored keys
    pub fn colored(colors: DirColors) -> Self {
        Self {
            sort_maps: false,
            key_colors: Some(colors),
        }
    }
}

/// Render `value` on a single line
pub fn render_inline(value: &Repr, style: &InlineStyle) -> String {
    let mut out = String::new();
    write_inline(value, style, &mut out);
    out
}

fn write_inline(value: &Repr, style: &InlineStyle, out: &mut String) {
    match value {
        Repr::None => out.push_str("None"),
        Repr::Bool(true) => out.push_str("True"),
        Repr::Bool(false) => out.push_str("False"),
        Repr::Int(i) => out.push_str(&i.to_string()),
        Repr::Float(f) => out.push_str(&format_float(*f)),
        Repr::Str(s) => out.push_str(&quote_str(s)),
        Repr::Bytes(b) => out.push_str(&quote_bytes(b)),
        Repr::List(items) => {
            out.push('[');
            write_items(items, style, out);
            out.push(']');
        }
        Repr::Tuple(items) => {
            out.push('(');
            write_items(items, style, out);
            if items.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Repr::Map(entries) => {
            out.push('{');
            if style.sort_maps {
                write_entries(Repr::sorted_entries(entries), style, out);
            } else {
                write_entries(entries.iter().collect(), style, out);
            }
            out.push('}');
        }
        Repr::Struct { name, fields } => {
            out.push_str(name);
            out.push('(');
            for (i, (field, value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(field);
                out.push('=');
                write_inline(value, style, out);
            }
            out.push(')');
        }
        Repr::Call { name, args } => {
            out.push_str(name);
            out.push('(');
            write_items(args, style, out);
            out.push(')');
        }
        Repr::Symbol(name) => out.push_str(name),
    }
}

fn write_items(items: &[Repr], style: &InlineStyle, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_inline(item, style, out);
    }
}

fn write_entries(entries: Vec<&(Repr, Repr)>, style: &InlineStyle, out: &mut String) {
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match (key, style.key_colors) {
            // The value span stays open; the next reset in the text closes it.
            // The separator space is repeated inside the span.
            (Repr::Str(text), Some(colors)) => {
                out.push_str(&colors.keys.open());
                out.push_str(&quote_str(text));
                out.push_str(RESET);
                out.push_str(": ");
                out.push_str(&colors.values.open());
                out.push(' ');
            }
            _ => {
                write_inline(key, style, out);
                out.push_str(": ");
            }
        }
        write_inline(value, style, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vb_core::Color;

    fn s(v: &str) -> Repr {
        Repr::Str(v.to_string())
    }

    #[test]
    fn test_python_style_scalars() {
        let style = InlineStyle::default();
        assert_eq!(render_inline(&Repr::None, &style), "None");
        assert_eq!(render_inline(&Repr::Bool(false), &style), "False");
        assert_eq!(render_inline(&Repr::Float(2.0), &style), "2.0");
        assert_eq!(render_inline(&Repr::Tuple(vec![]), &style), "()");
        assert_eq!(render_inline(&Repr::Tuple(vec![Repr::Int(1)]), &style), "(1,)");
        assert_eq!(
            render_inline(&Repr::Tuple(vec![Repr::Int(1), Repr::Int(2)]), &style),
            "(1, 2)"
        );
    }

    #[test]
    fn test_map_order_follows_style() {
        let map = Repr::Map(vec![(s("foo"), Repr::Int(1)), (s("bar"), s("2"))]);
        assert_eq!(
            render_inline(&map, &InlineStyle::default()),
            "{'foo': 1, 'bar': '2'}"
        );
        assert_eq!(
            render_inline(&map, &InlineStyle::sorted()),
            "{'bar': '2', 'foo': 1}"
        );
    }

    #[test]
    fn test_colored_keys_open_value_span() {
        let map = Repr::Map(vec![
            (s("methods"), Repr::List(vec![s("run")])),
            (Repr::Int(1), s("one")),
        ]);
        let colors = DirColors {
            keys: Color::Yellow,
            values: Color::Default,
        };
        assert_eq!(
            render_inline(&map, &InlineStyle::colored(colors)),
            "{\x1b[33m'methods'\x1b[0m: \x1b[38m ['run'], 1: 'one'}"
        );
    }

    #[test]
    fn test_values_that_look_like_keys_are_not_colored() {
        let value = Repr::List(vec![s("'fake':")]);
        let rendered = render_inline(&value, &InlineStyle::colored(DirColors::default()));
        assert_eq!(rendered, "[\"'fake':\"]");
    }

    #[test]
    fn test_named_values() {
        let style = InlineStyle::default();
        let point = Repr::Struct {
            name: "Point".to_string(),
            fields: vec![("x".to_string(), Repr::Int(1)), ("y".to_string(), Repr::Int(2))],
        };
        assert_eq!(render_inline(&point, &style), "Point(x=1, y=2)");
        let call = Repr::Call {
            name: "Circle".to_string(),
            args: vec![Repr::Int(3)],
        };
        assert_eq!(render_inline(&call, &style), "Circle(3)");
        assert_eq!(render_inline(&Repr::Symbol("Shape::Empty".into()), &style), "Shape::Empty");
    }
}
