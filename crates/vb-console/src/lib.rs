//! vb-console: a gated logger and object inspector
//!
//! A [`Console`] pretty-prints any `Serialize` value and classifies the
//! members of anything implementing [`Reflect`]. Output is off unless the
//! `ENABLE_CONSOLE` environment variable is truthy or the console is
//! configured with `Setting::Enabled(true)`.
//!
//! # Example
//!
//! ```no_run
//! use vb_console::{console, Setting};
//!
//! let mut c = console([Setting::Enabled(true), Setting::Basic(false)])?;
//! vb_console::console!(c, "test 1", vec![1, 2, 3])?;
//! # Ok::<(), vb_console::Error>(())
//! ```

pub mod args;
pub mod console;
pub mod options;
pub mod render;
pub mod repr;
pub mod writer;

pub use args::Args;
pub use console::Console;
pub use options::{Options, Setting, VALID_OPTIONS};
pub use render::Frame;
pub use repr::{to_repr, Repr};
pub use writer::{MemoryWriter, Writer};

pub use vb_core::{Category, Color, DirColors, Error, MemberKind, Reflect, Result, ValueKind};
pub use vb_introspection::{ClassInfo, Inspection, Instance};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a console from defaults, `ENABLE_CONSOLE` and `settings`
pub fn console(settings: impl IntoIterator<Item = Setting>) -> Result<Console> {
    Console::new(settings)
}

/// Print values as one tuple: `console!(c, a, b)` is
/// `c.call(&(&a, &b), [])`. Every value is one argument, whatever its shape.
#[macro_export]
macro_rules! console {
    ($console:expr $(, $value:expr)* $(,)?) => {
        $console.call(&( $( &$value, )* ), ::std::iter::empty())
    };
}
