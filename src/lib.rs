// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Bracket Stack provides a generic last-in-first-out [`Stack`] and a
//! balanced-bracket validator built on top of it.
//!
//! ```
//! use bracket_stack::{brackets, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop().unwrap(), 2);
//!
//! assert!(brackets::is_balanced("{[()]}"));
//! assert!(!brackets::is_balanced("(]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;
pub mod brackets;
pub mod config;

pub use base::{Error, Result, Stack};
pub use brackets::{is_balanced, validate, Imbalance};
pub use config::DemoConfig;
