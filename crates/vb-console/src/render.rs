//! Output framing and colorization

use crate::options::Options;
use crate::repr::{render_inline, text_width, InlineStyle, PrettyPrinter, Repr};
use vb_core::RESET;

/// Rendered output of one `out` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: String,
    pub body: String,
    pub footer: String,
    /// Whether header and footer are written
    pub framed: bool,
}

impl Frame {
    /// Build the frame for `payload` labelled `source`
    pub fn build(payload: &Repr, source: &str, options: &Options) -> Self {
        let mut header = rule_with_label(source, options.seperator_char, options.width);
        let mut footer = options.seperator_char.to_string().repeat(options.width);
        let framed = !options.basic;

        let body = if options.colored {
            if framed {
                header = options.header_color.paint(&header);
                footer = options.footer_color.paint(&footer);
            }
            let inline = render_inline(payload, &InlineStyle::colored(options.dir_colors));
            format!("{}{}{}", options.out_color.open(), inline, RESET)
        } else {
            PrettyPrinter::new(options.indent, options.width).pformat(payload)
        };

        Self {
            header,
            body,
            footer,
            framed,
        }
    }

    /// Text written to the sink, every line newline-terminated
    pub fn text(&self) -> String {
        if self.framed {
            format!("{}\n{}\n{}\n", self.header, self.body, self.footer)
        } else {
            format!("{}\n", self.body)
        }
    }
}

/// `[label]` left-justified and padded to `width` with `fill`
fn rule_with_label(label: &str, fill: char, width: usize) -> String {
    let mut rule = format!("[{}]", label);
    let used = text_width(&rule);
    if used < width {
        rule.extend(std::iter::repeat(fill).take(width - used));
    }
    rule
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vb_core::{Color, DirColors};

    fn options() -> Options {
        Options {
            width: 20,
            enabled: true,
            ..Options::default()
        }
    }

    fn payload() -> Repr {
        Repr::Tuple(vec![Repr::Map(vec![(
            Repr::Str("a".into()),
            Repr::Int(1),
        )])])
    }

    #[test]
    fn test_rule_with_label() {
        assert_eq!(rule_with_label("src", '.', 10), "[src].....");
        assert_eq!(rule_with_label("a long label", '-', 5), "[a long label]");
    }

    #[test]
    fn test_basic_frame_is_body_only() {
        let frame = Frame::build(&payload(), "n/a", &options());
        assert_eq!(frame.text(), "({'a': 1},)\n");
    }

    #[test]
    fn test_framed_output() {
        let options = Options {
            basic: false,
            seperator_char: '=',
            ..options()
        };
        let frame = Frame::build(&payload(), "tests", &options);
        assert_eq!(
            frame.text(),
            "[tests]=============\n({'a': 1},)\n====================\n"
        );
    }

    #[test]
    fn test_colored_unframed() {
        let options = Options {
            colored: true,
            dir_colors: DirColors {
                keys: Color::Yellow,
                values: Color::Default,
            },
            out_color: Color::Blue,
            ..options()
        };
        let frame = Frame::build(&payload(), "tests", &options);
        assert_eq!(
            frame.text(),
            "\x1b[34m({\x1b[33m'a'\x1b[0m: \x1b[38m 1},)\x1b[0m\n"
        );
        assert_eq!(frame.header, "[tests].............");
    }

    #[test]
    fn test_colored_framed() {
        let options = Options {
            colored: true,
            basic: false,
            header_color: Color::Red,
            footer_color: Color::Cyan,
            ..options()
        };
        let frame = Frame::build(&payload(), "x", &options);
        assert_eq!(frame.header, "\x1b[31m[x].................\x1b[0m");
        assert_eq!(frame.footer, format!("\x1b[36m{}\x1b[0m", ".".repeat(20)));
        assert_eq!(frame.text().lines().count(), 3);
    }
}
