/*!
# Rust Language Module

This Rust module provides the source-text side of BASIC: program lines,
statement keywords, a character cursor shared by the expression evaluators,
and the error type used everywhere.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{find_word, split_top_level, Cursor};
pub use line::{references, Line};
pub use token::{Command, Operator, Word};
