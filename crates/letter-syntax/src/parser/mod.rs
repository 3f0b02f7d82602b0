// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for Letter source code.
//!
//! Transforms a stream of tokens into a tree, one token of lookahead at a
//! time.
//!
//! ## Structure
//!
//! - `parser` - Parser state and token helpers
//! - `statements` - Statement productions
//! - `expressions` - Expression productions
//! - `builder` - The [`AstBuilder`] strategy and the default [`TreeBuilder`]
//!
//! ## Precedence
//!
//! From loosest to tightest:
//!
//! | Level          | Operators                 | Associativity |
//! |----------------|---------------------------|---------------|
//! | Assignment     | `=` `+=` `-=` `*=` `/=`   | right         |
//! | Logical OR     | `\|\|`                    | left          |
//! | Logical AND    | `&&`                      | left          |
//! | Equality       | `==` `!=`                 | left          |
//! | Relational     | `<` `<=` `>` `>=`         | left          |
//! | Additive       | `+` `-`                   | left          |
//! | Multiplicative | `*` `/`                   | left          |
//! | Unary          | `+` `-` `!`               | prefix        |
//!
//! ## Usage
//!
//! ```rust
//! use letter_syntax::parser::Parser;
//!
//! let mut parser = Parser::new();
//! let program = parser.parse("let x = 1 + 2;").expect("Should parse");
//! assert_eq!(program.body.len(), 1);
//! ```

mod builder;
mod expressions;
#[allow(clippy::module_inception)]
mod parser;
mod statements;

pub use builder::{AstBuilder, TreeBuilder};
pub use parser::{MAX_NESTING_DEPTH, Parser};
