// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser configuration.
//!
//! Hosts choose the output form either from JSON or from the environment:
//!
//! ```rust
//! use letter_syntax::config::{OutputForm, ParserConfig};
//!
//! let config = ParserConfig::from_json(r#"{ "output": "s-expression" }"#).unwrap();
//! assert_eq!(config.output, OutputForm::SExpression);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable read by [`ParserConfig::from_env`].
pub const OUTPUT_FORM_VAR: &str = "LETTER_OUTPUT_FORM";

/// Shape of the parser output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputForm {
    /// Typed tree, serialized as ESTree-style objects
    #[default]
    Tree,
    /// Nested lists
    SExpression,
}

impl OutputForm {
    /// Returns the configuration name of this form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputForm::Tree => "tree",
            OutputForm::SExpression => "s-expression",
        }
    }
}

impl FromStr for OutputForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "ast" => Ok(OutputForm::Tree),
            "s-expression" | "sexpr" => Ok(OutputForm::SExpression),
            other => Err(Error::Config(format!("unknown output form: {other:?}"))),
        }
    }
}

impl fmt::Display for OutputForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`parse_with_config`](crate::parse_with_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Output form to build
    pub output: OutputForm,
}

impl ParserConfig {
    /// Reads the configuration from the process environment.
    ///
    /// An unset [`OUTPUT_FORM_VAR`] selects the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses a JSON configuration document. Missing fields take defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let output = match lookup(OUTPUT_FORM_VAR) {
            Some(value) => value.parse()?,
            None => OutputForm::default(),
        };
        tracing::debug!(%output, "loaded parser config");

        Ok(Self { output })
    }
}
