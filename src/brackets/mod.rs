// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Balanced-bracket validation for `()`, `[]` and `{}`.
//!
//! Characters outside the bracket set are ignored.

use crate::base::Stack;

/// Why a character sequence is not balanced.
///
/// Indices count `char`s from the start of the input, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Imbalance {
    /// A closer appeared while no opener was pending.
    #[error("unmatched '{found}' at {index}")]
    UnmatchedCloser { index: usize, found: char },

    /// A closer did not match the most recent pending opener.
    #[error("expected '{expected}' but found '{found}' at {index}")]
    Mismatched {
        index: usize,
        expected: char,
        found: char,
    },

    /// Input ended with an opener still pending (the innermost one is reported).
    #[error("unclosed '{opener}' at {index}")]
    Unclosed { index: usize, opener: char },
}

/// Returns the closer paired with `opener`, or `None` if it is not an opener.
pub fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Returns the opener paired with `closer`, or `None` if it is not a closer.
pub fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Checks that every bracket in `input` is closed by the matching kind in
/// nesting order, reporting the first problem found.
pub fn validate(input: &str) -> Result<(), Imbalance> {
    let mut pending: Stack<(usize, char)> = Stack::new();

    for (index, ch) in input.chars().enumerate() {
        if closer_for(ch).is_some() {
            pending.push((index, ch));
        } else if let Some(wanted) = opener_for(ch) {
            let Ok((_, opener)) = pending.pop() else {
                return Err(reject(Imbalance::UnmatchedCloser { index, found: ch }));
            };
            if opener != wanted {
                return Err(reject(Imbalance::Mismatched {
                    index,
                    expected: closer_for(opener).unwrap_or(opener),
                    found: ch,
                }));
            }
        }
    }

    match pending.peek() {
        Some(&(index, opener)) => Err(reject(Imbalance::Unclosed { index, opener })),
        None => Ok(()),
    }
}

/// Returns `true` if the brackets in `input` are correctly nested and matched.
/// Empty input is balanced.
pub fn is_balanced(input: &str) -> bool {
    validate(input).is_ok()
}

fn reject(imbalance: Imbalance) -> Imbalance {
    tracing::debug!(%imbalance, "bracket validation failed");
    imbalance
}
