// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for Bracket Stack.

use crate::brackets::Imbalance;

/// A result type alias for Bracket Stack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bracket Stack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An item was requested from a stack holding no items.
    #[error("cannot pop from an empty stack")]
    EmptyStack,

    /// A bracket sequence failed validation.
    #[error("unbalanced brackets: {0}")]
    Unbalanced(#[from] Imbalance),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// A generic error with a message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a new error with a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyStack.to_string(), "cannot pop from an empty stack");
        assert_eq!(Error::new("boom").to_string(), "boom");

        let err: Error = Imbalance::UnmatchedCloser { index: 3, found: ')' }.into();
        assert!(matches!(err, Error::Unbalanced(_)));
        assert!(err.to_string().starts_with("unbalanced brackets: "));
    }
}
