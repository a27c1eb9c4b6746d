//! Value model for rendering
//!
//! Anything `Serialize` is first turned into a [`Repr`] tree by
//! [`to_repr`]; the pretty printer and the inline renderer both walk that
//! tree, so no formatting pass ever re-parses text.

mod inline;
mod pretty;
mod ser;

pub use inline::{render_inline, InlineStyle};
pub use pretty::PrettyPrinter;
pub use ser::{to_repr, ReprSerializer};

use std::cmp::Ordering;

/// Renderable value
#[derive(Debug, Clone, PartialEq)]
pub enum Repr {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Repr>),
    Tuple(Vec<Repr>),
    /// Entries in insertion order; sorting is up to the renderer
    Map(Vec<(Repr, Repr)>),
    /// Named record: `Name(field=value, ...)`
    Struct {
        name: String,
        fields: Vec<(String, Repr)>,
    },
    /// Named positional record: `Name(value, ...)`
    Call { name: String, args: Vec<Repr> },
    /// Bare identifier such as a unit variant
    Symbol(String),
}

impl Repr {
    /// Group rank used to order keys of different kinds
    fn key_rank(&self) -> u8 {
        match self {
            Repr::None => 0,
            Repr::Bool(_) | Repr::Int(_) | Repr::Float(_) => 1,
            Repr::Str(_) => 2,
            Repr::Bytes(_) => 3,
            Repr::Tuple(_) => 4,
            Repr::List(_) => 5,
            Repr::Map(_) => 6,
            Repr::Struct { .. } | Repr::Call { .. } | Repr::Symbol(_) => 7,
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Repr::Bool(b) => f64::from(u8::from(*b)),
            Repr::Int(i) => *i as f64,
            Repr::Float(f) => *f,
            _ => 0.0,
        }
    }

    /// Ordering used when sorting mapping keys.
    ///
    /// Numbers compare numerically, strings and bytes lexically, sequences
    /// element-wise and named values by name; keys of different kinds are
    /// grouped by kind.
    pub fn key_cmp(&self, other: &Repr) -> Ordering {
        let rank = self.key_rank().cmp(&other.key_rank());
        if rank != Ordering::Equal {
            return rank;
        }

        match (self, other) {
            (Repr::Int(a), Repr::Int(b)) => a.cmp(b),
            (Repr::Str(a), Repr::Str(b)) => a.cmp(b),
            (Repr::Bytes(a), Repr::Bytes(b)) => a.cmp(b),
            (Repr::Tuple(a), Repr::Tuple(b)) | (Repr::List(a), Repr::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = x.key_cmp(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (Repr::Map(a), Repr::Map(b)) => a.len().cmp(&b.len()),
            (Repr::None, Repr::None) => Ordering::Equal,
            _ if self.key_rank() == 1 => self.as_number().total_cmp(&other.as_number()),
            _ => self.name().cmp(other.name()),
        }
    }

    fn name(&self) -> &str {
        match self {
            Repr::Struct { name, .. } | Repr::Call { name, .. } | Repr::Symbol(name) => name,
            _ => "",
        }
    }

    /// Map entries sorted by key, stable for keys that compare equal
    pub fn sorted_entries(entries: &[(Repr, Repr)]) -> Vec<&(Repr, Repr)> {
        let mut sorted: Vec<&(Repr, Repr)> = entries.iter().collect();
        sorted.sort_by(|a, b| a.0.key_cmp(&b.0));
        sorted
    }
}

/// Quoted, escaped form of a string: single quotes unless the text holds a
/// single quote and no double quote.
pub fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable_latin1(c) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// C0 and C1 controls, DEL, no-break space and soft hyphen
fn is_unprintable_latin1(c: char) -> bool {
    matches!(c as u32, 0x00..=0x1f | 0x7f..=0xa0 | 0xad)
}

/// `b'...'` form of a byte string
pub fn quote_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push(quote as char);
    out
}

/// Float text: always carries a fractional part or an exponent
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Exponents carry a sign and at least two digits: 1e-05, 1e+16
    let text = format!("{:?}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Width of rendered text in characters
pub(crate) fn text_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_str() {
        assert_eq!(quote_str("test 1"), "'test 1'");
        assert_eq!(quote_str("it's"), "\"it's\"");
        assert_eq!(quote_str("both ' and \""), "'both \\' and \"'");
        assert_eq!(quote_str("tab\tnl\n"), "'tab\\tnl\\n'");
        assert_eq!(quote_str("\u{1}"), "'\\x01'");
        assert_eq!(quote_str("ünï"), "'ünï'");
        assert_eq!(quote_str("\u{85}\u{a0}"), "'\\x85\\xa0'");
    }

    #[test]
    fn test_quote_bytes() {
        assert_eq!(quote_bytes(b"abc"), "b'abc'");
        assert_eq!(quote_bytes(&[0, 255]), "b'\\x00\\xff'");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(1e300), "1e+300");
        assert_eq!(format_float(1e-300), "1e-300");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![
            Repr::Str("foo".into()),
            Repr::Int(3),
            Repr::Str("bar".into()),
            Repr::Float(1.5),
        ];
        keys.sort_by(|a, b| a.key_cmp(b));
        assert_eq!(
            keys,
            vec![
                Repr::Float(1.5),
                Repr::Int(3),
                Repr::Str("bar".into()),
                Repr::Str("foo".into()),
            ]
        );
    }
}
