//! Console options
//!
//! Options can be given three ways: typed [`Setting`] values, string pairs
//! parsed with [`Setting::parse`], or a TOML table read by
//! [`Options::settings_from_toml`]. All three are checked against the same
//! allow-list of option names.

use vb_core::config::{console_enabled_from_env, terminal_columns};
use vb_core::{Color, DirColors, Error, Result};

use crate::writer::Writer;

/// Every option name the console accepts
pub const VALID_OPTIONS: [&str; 12] = [
    "source",
    "indent",
    "width",
    "enabled",
    "seperator_char",
    "colored",
    "dir_colors",
    "out_color",
    "header_color",
    "footer_color",
    "basic",
    "writer",
];

/// Character used for header and footer rules when none is configured
pub const DEFAULT_SEPERATOR_CHAR: char = '.';

/// Source label shown when no `source` option is set
pub const DEFAULT_SOURCE: &str = "n/a";

/// Rendering options of a console (everything except the writer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: Option<String>,
    pub indent: usize,
    pub width: usize,
    pub enabled: bool,
    pub seperator_char: char,
    pub colored: bool,
    pub dir_colors: DirColors,
    pub out_color: Color,
    pub header_color: Color,
    pub footer_color: Color,
    pub basic: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: None,
            indent: 4,
            width: terminal_columns(),
            enabled: false,
            seperator_char: DEFAULT_SEPERATOR_CHAR,
            colored: false,
            dir_colors: DirColors::default(),
            out_color: Color::Yellow,
            header_color: Color::Green,
            footer_color: Color::Green,
            basic: true,
        }
    }
}

impl Options {
    /// Defaults with the gate taken from `ENABLE_CONSOLE`
    pub fn from_env() -> Self {
        Self {
            enabled: console_enabled_from_env(),
            ..Self::default()
        }
    }

    /// Source label, `n/a` when unset
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    /// Settings described by a TOML table.
    ///
    /// Keys are validated in sorted order; the first unknown key fails
    /// with [`Error::InvalidOption`].
    pub fn settings_from_toml(text: &str) -> Result<Vec<Setting>> {
        let table: toml::Table = text.parse()?;
        table
            .into_iter()
            .map(|(name, value)| Setting::from_toml(&name, value))
            .collect()
    }
}

/// A single option assignment
#[derive(Debug)]
pub enum Setting {
    Source(String),
    Indent(usize),
    Width(usize),
    Enabled(bool),
    /// Only the first character is kept
    SeperatorChar(String),
    Colored(bool),
    DirColors(DirColors),
    OutColor(Color),
    HeaderColor(Color),
    FooterColor(Color),
    Basic(bool),
    Writer(Writer),
}

impl Setting {
    /// Option name of this setting
    pub fn name(&self) -> &'static str {
        match self {
            Setting::Source(_) => "source",
            Setting::Indent(_) => "indent",
            Setting::Width(_) => "width",
            Setting::Enabled(_) => "enabled",
            Setting::SeperatorChar(_) => "seperator_char",
            Setting::Colored(_) => "colored",
            Setting::DirColors(_) => "dir_colors",
            Setting::OutColor(_) => "out_color",
            Setting::HeaderColor(_) => "header_color",
            Setting::FooterColor(_) => "footer_color",
            Setting::Basic(_) => "basic",
            Setting::Writer(_) => "writer",
        }
    }

    /// Parse a `name = value` pair.
    ///
    /// Booleans accept `true/false`, `yes/no`, `1/0`. `dir_colors` takes
    /// `keys=<color>,values=<color>` (either part may be omitted). `writer`
    /// takes `stdout` or `stderr`.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        if !VALID_OPTIONS.contains(&name) {
            return Err(Error::invalid_option(name));
        }

        let setting = match name {
            "source" => Setting::Source(value.to_string()),
            "indent" => Setting::Indent(parse_usize(name, value)?),
            "width" => Setting::Width(parse_usize(name, value)?),
            "enabled" => Setting::Enabled(parse_bool(name, value)?),
            "seperator_char" => Setting::SeperatorChar(value.to_string()),
            "colored" => Setting::Colored(parse_bool(name, value)?),
            "dir_colors" => Setting::DirColors(parse_dir_colors(value)?),
            "out_color" => Setting::OutColor(value.parse()?),
            "header_color" => Setting::HeaderColor(value.parse()?),
            "footer_color" => Setting::FooterColor(value.parse()?),
            "basic" => Setting::Basic(parse_bool(name, value)?),
            "writer" => Setting::Writer(parse_writer(value)?),
            _ => return Err(Error::invalid_option(name)),
        };
        Ok(setting)
    }

    /// Convert one TOML entry
    pub fn from_toml(name: &str, value: toml::Value) -> Result<Self> {
        if !VALID_OPTIONS.contains(&name) {
            return Err(Error::invalid_option(name));
        }

        let mismatch = |value: &toml::Value| Error::invalid_value(name, value.to_string());

        match (name, value) {
            ("dir_colors", toml::Value::Table(table)) => {
                let colors: DirColors = toml::Value::Table(table).try_into()?;
                Ok(Setting::DirColors(colors))
            }
            ("indent" | "width", toml::Value::Integer(n)) => {
                let n = usize::try_from(n).map_err(|_| Error::invalid_value(name, n.to_string()))?;
                Setting::parse(name, &n.to_string())
            }
            (_, toml::Value::Boolean(b)) => Setting::parse(name, if b { "true" } else { "false" }),
            (_, toml::Value::String(s)) => Setting::parse(name, &s),
            (_, other) => Err(mismatch(&other)),
        }
    }
}

fn parse_usize(name: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_value(name, value))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" => Ok(true),
        "0" | "no" | "false" => Ok(false),
        _ => Err(Error::invalid_value(name, value)),
    }
}

fn parse_dir_colors(value: &str) -> Result<DirColors> {
    let mut colors = DirColors::default();
    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('=') {
            Some(("keys", color)) => colors.keys = color.trim().parse()?,
            Some(("values", color)) => colors.values = color.trim().parse()?,
            _ => return Err(Error::invalid_value("dir_colors", value)),
        }
    }
    Ok(colors)
}

fn parse_writer(value: &str) -> Result<Writer> {
    match value {
        "stdout" => Ok(Writer::Stdout),
        "stderr" => Ok(Writer::Stderr),
        _ => Err(Error::invalid_value("writer", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_unknown_option() {
        let err = Setting::parse("colour", "red").unwrap_err();
        assert!(matches!(err, Error::InvalidOption(ref name) if name == "colour"));
    }

    #[test]
    fn test_parse_known_options() {
        assert!(matches!(Setting::parse("indent", "2").unwrap(), Setting::Indent(2)));
        assert!(matches!(Setting::parse("enabled", "Yes").unwrap(), Setting::Enabled(true)));
        assert!(matches!(Setting::parse("basic", "0").unwrap(), Setting::Basic(false)));
        assert!(matches!(
            Setting::parse("out_color", "cyan").unwrap(),
            Setting::OutColor(Color::Cyan)
        ));
        assert!(matches!(
            Setting::parse("writer", "stderr").unwrap(),
            Setting::Writer(Writer::Stderr)
        ));
    }

    #[test]
    fn test_parse_bad_values() {
        assert!(matches!(
            Setting::parse("width", "wide"),
            Err(Error::InvalidValue { ref option, .. }) if option == "width"
        ));
        assert!(matches!(
            Setting::parse("header_color", "purple"),
            Err(Error::UnknownColor(_))
        ));
        assert!(Setting::parse("writer", "/dev/null").is_err());
    }

    #[test]
    fn test_parse_dir_colors() {
        let colors = parse_dir_colors("keys=red, values=blue").unwrap();
        assert_eq!(colors.keys, Color::Red);
        assert_eq!(colors.values, Color::Blue);

        let partial = parse_dir_colors("values=white").unwrap();
        assert_eq!(partial.keys, Color::Yellow);
        assert_eq!(partial.values, Color::White);

        assert!(parse_dir_colors("key=red").is_err());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = Options::settings_from_toml(
            r#"
            source = "app"
            width = 120
            colored = true
            seperator_char = "-="
            dir_colors = { keys = "cyan" }
            "#,
        )
        .unwrap();
        let names: Vec<&str> = settings.iter().map(Setting::name).collect();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"dir_colors"));
        assert!(settings
            .iter()
            .any(|s| matches!(s, Setting::DirColors(c) if c.keys == Color::Cyan && c.values == Color::Default)));
    }

    #[test]
    fn test_settings_from_toml_rejects_unknown_key() {
        let err = Options::settings_from_toml("verbose = true").unwrap_err();
        assert!(matches!(err, Error::InvalidOption(ref name) if name == "verbose"));
    }

    #[test]
    fn test_settings_from_toml_type_mismatch() {
        assert!(matches!(
            Options::settings_from_toml("width = 1.5"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            Options::settings_from_toml("dir_colors = { keys = \"red\", other = \"x\" }"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_source_label_default() {
        let options = Options {
            width: 80,
            ..Options::default()
        };
        assert_eq!(options.source_label(), "n/a");
    }
}
