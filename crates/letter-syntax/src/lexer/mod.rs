// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lexical analysis (tokenization) for Letter source code.
//!
//! The tokenizer transforms source text into a lazy stream of tokens
//! that is consumed by the parser one lookahead at a time.
//!
//! ## Structure
//!
//! - `tokenizer.rs` - `Tokenizer` that produces tokens on demand
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//! - `rules` - the ordered rule table driving the tokenizer
//!
//! ## Usage
//!
//! ```rust
//! use letter_syntax::lexer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new("let x = 42;");
//!
//! while let Some(token) = tokenizer.next_token().expect("valid input") {
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! assert!(tokenizer.is_eof());
//! ```

mod token;
mod tokenizer;

pub mod rules;

pub use token::{Span, Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
