use std::fmt;
use std::io::{self, Write};

/// Where emitted reports are written.
///
/// Reports are diagnostics, so the default is standard error. Never standard output,
/// which may be consumed by other tools.
#[derive(Default)]
pub(crate) enum Sink {
    #[default]
    Stderr,
    Writer(Box<dyn Write>),
}

impl Sink {
    pub(crate) fn writer(writer: impl Write + 'static) -> Self {
        Self::Writer(Box::new(writer))
    }

    /// Writes `bytes` in full and flushes.
    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => write_and_flush(&mut io::stderr().lock(), bytes),
            Self::Writer(writer) => write_and_flush(writer, bytes),
        }
    }
}

fn write_and_flush(writer: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => write!(f, "Stderr"),
            Self::Writer(_) => write!(f, "Writer(..)"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FailingWriter, SharedBuffer};
    use super::*;

    #[test]
    fn writer_sink_receives_bytes() {
        let buffer = SharedBuffer::default();
        let mut sink = Sink::writer(buffer.clone());

        sink.write_all(b"hello\n").unwrap();

        assert_eq!(buffer.contents(), "hello\n");
    }

    #[test]
    fn writer_errors_are_returned() {
        let mut sink = Sink::writer(FailingWriter);

        sink.write_all(b"hello\n").unwrap_err();
    }

    #[test]
    fn debug_does_not_require_debug_writer() {
        assert_eq!(format!("{:?}", Sink::default()), "Stderr");
        assert_eq!(format!("{:?}", Sink::writer(Vec::new())), "Writer(..)");
    }
}
