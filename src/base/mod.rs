// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Base modules: the error type and the stack container.

pub mod errors;
pub mod stack;

pub use errors::{Error, Result};
pub use stack::Stack;
