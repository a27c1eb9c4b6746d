//! Output sinks

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Where console output goes
#[derive(Default)]
pub enum Writer {
    #[default]
    Stdout,
    Stderr,
    Memory(MemoryWriter),
    Custom(Box<dyn Write + Send>),
}

impl Writer {
    /// Wrap any writer
    pub fn custom(writer: impl Write + Send + 'static) -> Self {
        Writer::Custom(Box::new(writer))
    }
}

impl From<MemoryWriter> for Writer {
    fn from(writer: MemoryWriter) -> Self {
        Writer::Memory(writer)
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Stdout => io::stdout().lock().write(buf),
            Writer::Stderr => io::stderr().lock().write(buf),
            Writer::Memory(memory) => memory.write(buf),
            Writer::Custom(inner) => inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Stdout => io::stdout().flush(),
            Writer::Stderr => io::stderr().flush(),
            Writer::Memory(memory) => memory.flush(),
            Writer::Custom(inner) => inner.flush(),
        }
    }
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Writer::Stdout => f.write_str("Stdout"),
            Writer::Stderr => f.write_str("Stderr"),
            Writer::Memory(memory) => f.debug_tuple("Memory").field(&memory.len()).finish(),
            Writer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Shared in-memory buffer; clones write to and read from the same bytes.
#[derive(Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
