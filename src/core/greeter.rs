use crate::domain::model::Greeting;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes a greeting as one line into any `Write` sink.
pub struct Greeter<W: Write> {
    sink: W,
    greeting: Greeting,
}

impl<W: Write> Greeter<W> {
    pub fn new(sink: W) -> Self {
        Self::with_greeting(sink, Greeting::default())
    }

    pub fn with_greeting(sink: W, greeting: Greeting) -> Self {
        Self { sink, greeting }
    }

    /// Emits the greeting followed by `\n` and flushes the sink.
    pub fn greet(&mut self) -> Result<()> {
        tracing::debug!("Writing greeting: {}", self.greeting);
        writeln!(self.sink, "{}", self.greeting)?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

pub fn greet_stdout() -> Result<()> {
    let stdout = io::stdout();
    let mut greeter = Greeter::new(stdout.lock());
    greeter.greet()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreeterError;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FlushTracker {
        data: Vec<u8>,
        flushed: bool,
    }

    impl Write for FlushTracker {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_greet_writes_exact_bytes() {
        let mut greeter = Greeter::new(Vec::new());
        greeter.greet().unwrap();

        assert_eq!(greeter.into_inner(), b"Hello, World!\n");
    }

    #[test]
    fn test_greet_flushes_sink() {
        let mut greeter = Greeter::new(FlushTracker::default());
        greeter.greet().unwrap();

        let sink = greeter.into_inner();
        assert!(sink.flushed);
        assert_eq!(String::from_utf8(sink.data).unwrap(), "Hello, World!\n");
    }

    #[test]
    fn test_greet_with_custom_greeting() {
        let mut greeter = Greeter::with_greeting(Vec::new(), Greeting::new("Hi"));
        greeter.greet().unwrap();

        assert_eq!(greeter.into_inner(), b"Hi\n");
    }

    #[test]
    fn test_greet_reports_closed_sink() {
        let mut greeter = Greeter::new(ClosedSink);
        let err = greeter.greet().unwrap_err();

        assert!(matches!(err, GreeterError::Io(_)));
        assert!(err.is_broken_pipe());
    }
}
