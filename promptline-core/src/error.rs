//! # Error Types
//!
//! Fatal errors returned by the prompt functions.
//!
//! Invalid *answers* never show up here: a malformed number, an unknown
//! boolean token or an out-of-range value is a [`Rejection`] and is absorbed
//! by the retry loop. A [`PromptError`] means the prompt cannot produce a
//! value at all, usually because there is no input left to read.
//!
//! [`Rejection`]: crate::utils::Rejection

use std::io;
use std::num::NonZeroU32;

use thiserror::Error;

/// Conditions that stop a prompt without producing a value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream was closed before a valid answer was read.
    #[error("input reached end of stream before a valid answer was given")]
    EndOfInput,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A bounded terminal ran out of attempts.
    ///
    /// Only possible when [`TerminalConfig::max_attempts`] is set.
    ///
    /// [`TerminalConfig::max_attempts`]: crate::utils::TerminalConfig::max_attempts
    #[error("no valid answer after {0} attempts")]
    AttemptsExhausted(NonZeroU32),

    /// A menu was requested with no options and no quit entry, so no
    /// answer could ever be valid.
    #[error("menu has no options to select from")]
    EmptyMenu,
}

/// Result alias used by every prompt operation.
pub type PromptResult<T> = Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_error_messages() {
        assert_eq!(
            PromptError::EndOfInput.to_string(),
            "input reached end of stream before a valid answer was given"
        );
        assert_eq!(
            PromptError::EmptyMenu.to_string(),
            "menu has no options to select from"
        );

        let attempts = NonZeroU32::new(3).unwrap();
        assert_eq!(
            PromptError::AttemptsExhausted(attempts).to_string(),
            "no valid answer after 3 attempts"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: PromptError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, PromptError::Io(_)));
        assert_eq!(err.to_string(), "console I/O failed: pipe closed");
    }
}
