use thiserror::Error;

use crate::command::RequestError;
use crate::handlers::HandlerError;

pub mod front_end;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("You must log in before performing any transactions")]
    NotLoggedIn,
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Handler(#[from] HandlerError),
    #[error("Failed to write terminal output")]
    Io(#[from] std::io::Error),
}

impl TerminalError {
    /// Output failures abort the run instead of being narrated to the
    /// same output that just failed.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            TerminalError::Io(_) | TerminalError::Handler(HandlerError::Io(_))
        )
    }
}

pub trait TransactionTerminal {
    fn process_transaction(&mut self, code: &str, args: &[&str]) -> Result<(), TerminalError>;
}
