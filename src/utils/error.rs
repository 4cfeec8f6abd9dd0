use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GreeterError {
    /// True when the reader on the other end of stdout has gone away.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            GreeterError::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
