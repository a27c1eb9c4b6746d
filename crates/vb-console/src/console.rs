//! The console inspector

use std::io::Write;

use serde::Serialize;
use tracing::{debug, trace};

use crate::args::Args;
use crate::options::{Options, Setting};
use crate::render::Frame;
use crate::repr::{to_repr, Repr};
use crate::writer::Writer;
use vb_core::{Error, Reflect, Result};
use vb_introspection::{source_label, Inspection};

/// Gated pretty-printer and object inspector.
///
/// Configuration lives in the console and is changed in place; methods that
/// accept settings apply them before doing anything else, so they also
/// affect later calls. Nothing is written while the console is disabled.
#[derive(Debug)]
pub struct Console {
    options: Options,
    writer: Writer,
}

impl Console {
    /// Defaults, then `ENABLE_CONSOLE`, then `settings`
    pub fn new(settings: impl IntoIterator<Item = Setting>) -> Result<Self> {
        let mut console = Self::with_options(Options::from_env(), Writer::default());
        console.configure(settings)?;
        Ok(console)
    }

    /// Console with explicit options; the environment is not consulted
    pub fn with_options(options: Options, writer: Writer) -> Self {
        Self { options, writer }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Apply settings in order.
    ///
    /// Stops at the first invalid one; settings before it stay applied.
    pub fn configure(&mut self, settings: impl IntoIterator<Item = Setting>) -> Result<()> {
        for setting in settings {
            self.apply(setting)?;
        }
        Ok(())
    }

    /// Apply string-keyed settings in order, rejecting unknown names
    pub fn configure_str<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<()> {
        for (name, value) in pairs {
            self.apply(Setting::parse(name, value)?)?;
        }
        Ok(())
    }

    fn apply(&mut self, setting: Setting) -> Result<()> {
        debug!(option = setting.name(), "Applying console option");

        let options = &mut self.options;
        match setting {
            Setting::Source(source) => options.source = Some(source),
            Setting::Indent(indent) => options.indent = indent,
            Setting::Width(0) => return Err(Error::invalid_value("width", "0")),
            Setting::Width(width) => options.width = width,
            Setting::Enabled(enabled) => options.enabled = enabled,
            Setting::SeperatorChar(chars) => {
                options.seperator_char = chars
                    .chars()
                    .next()
                    .ok_or_else(|| Error::invalid_value("seperator_char", chars.clone()))?;
            }
            Setting::Colored(colored) => options.colored = colored,
            Setting::DirColors(colors) => options.dir_colors = colors,
            Setting::OutColor(color) => options.out_color = color,
            Setting::HeaderColor(color) => options.header_color = color,
            Setting::FooterColor(color) => options.footer_color = color,
            Setting::Basic(basic) => options.basic = basic,
            Setting::Writer(writer) => self.writer = writer,
        }
        Ok(())
    }

    /// Print the positional `args` as one tuple.
    ///
    /// Each element of the argument tuple is one value; `()` means no
    /// values and prints nothing.
    pub fn call<A: Args>(
        &mut self,
        args: &A,
        settings: impl IntoIterator<Item = Setting>,
    ) -> Result<()> {
        self.configure(settings)?;
        if !self.gate_open() {
            return Ok(());
        }

        let items = args.to_args()?;
        if items.is_empty() {
            return Ok(());
        }

        self.write_frame(&Repr::Tuple(items), None)
    }

    /// Print a single value, whatever its shape
    pub fn log<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.call(&(value,), std::iter::empty())
    }

    /// Classify and print the members of each object, one frame per object.
    pub fn dir(
        &mut self,
        objects: &[&dyn Reflect],
        settings: impl IntoIterator<Item = Setting>,
    ) -> Result<()> {
        self.configure(settings)?;
        if objects.is_empty() || !self.gate_open() {
            return Ok(());
        }

        for obj in objects {
            let inspection = Inspection::of(*obj)?;
            let label = source_label(*obj);
            self.out(&inspection, Some(&label))?;
        }
        Ok(())
    }

    /// [`dir`](Self::dir) for a single object without settings
    pub fn inspect(&mut self, obj: &dyn Reflect) -> Result<()> {
        self.dir(&[obj], std::iter::empty())
    }

    /// Print any payload. `source` is appended to the configured source
    /// label as `<configured> : <source>`.
    pub fn out<T: Serialize + ?Sized>(&mut self, payload: &T, source: Option<&str>) -> Result<()> {
        if !self.gate_open() {
            return Ok(());
        }
        let repr = to_repr(payload)?;
        self.write_frame(&repr, source)
    }

    fn gate_open(&self) -> bool {
        if !self.options.enabled {
            debug!("Console disabled, skipping output");
        }
        self.options.enabled
    }

    fn write_frame(&mut self, payload: &Repr, source: Option<&str>) -> Result<()> {
        let label = match source {
            Some(extra) => format!("{} : {}", self.options.source_label(), extra),
            None => self.options.source_label().to_string(),
        };

        let text = Frame::build(payload, &label, &self.options).text();
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;

        trace!(bytes = text.len(), source = %label, "Wrote console output");
        Ok(())
    }
}
