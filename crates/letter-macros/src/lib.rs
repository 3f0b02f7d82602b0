// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Developer macros for the Letter parser.
//!
//! # Macros Overview
//!
//! ## Assertions
//! - [`assert_matches!`] - Assert a value matches a pattern
//! - [`assert_ok!`] / [`assert_err!`] - Unwrap a Result with a readable panic
//! - [`assert_parse_error!`] - Assert a source string fails to parse
//! - [`parameterized_test!`] - One test body over many inputs
//!
//! ## Tree literals
//! - [`program!`], [`block!`], [`expr_stmt!`] - Statements
//! - [`ident!`], [`num!`], [`string!`] - Leaves
//! - [`binary!`], [`logical!`], [`assign!`] - Operators by spelling
//! - [`member!`], [`index!`], [`call!`] - Member access and calls
//!
//! # Examples
//!
//! ```
//! use letter_macros::*;
//!
//! let n = assert_ok!("7".parse::<u8>());
//! assert_matches!(n, 1..=9);
//! ```

#![warn(missing_docs)]

mod ast;
mod testing;
