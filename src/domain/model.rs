use std::fmt;

/// The line printed on every run, without its terminator.
pub const GREETING: &str = "Hello, World!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    text: &'static str,
}

impl Greeting {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(GREETING)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
