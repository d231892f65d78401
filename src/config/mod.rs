// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Configuration for the stack demonstration.

use std::path::Path;

use serde::Deserialize;

use crate::base::Result;

/// Inputs for the demonstration walkthrough, read from TOML.
///
/// Missing keys fall back to [`DemoConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// How many integers to push; the i-th value (1-based) is `i * 10`.
    pub int_count: usize,
    /// Words pushed onto a string stack and read back reversed.
    pub words: Vec<String>,
    /// Expressions run through the bracket validator.
    pub expressions: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            int_count: 5,
            words: ["Hello", "World", "Python", "Stack"]
                .into_iter()
                .map(String::from)
                .collect(),
            expressions: [
                "(a + b) * (c - d)",
                "[(x + y) * {z - w}]",
                "(a + b] * c",
                "((a + b) * c",
                "a + b) * c",
                "{[()]}",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl DemoConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
