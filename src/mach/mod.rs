/*!
## Rust Machine Module

This Rust module runs BASIC. A program is kept as text, one statement per
numbered line, and each line is classified and executed as it is reached.
Variables, matrices, the loop and GOSUB stacks, and open files all live in
a `Context` that is passed to every statement handler.

*/

mod channel;
mod context;
mod control;
mod data;
pub mod eval;
mod format;
mod function;
pub mod linalg;
mod listing;
mod mat;
mod matrix;
mod program;
mod runtime;
mod stack;
mod statement;
mod syntax;
mod val;
mod var;

pub use channel::{Channels, Mode};
pub use context::{Config, Context, Flow, State, STACK_LIMIT};
pub use control::Frame;
pub use data::Data;
pub use function::Function;
pub use listing::Listing;
pub use matrix::{Matrix, Storage, DENSE_THRESHOLD, MAX_DIMENSIONS};
pub use program::Program;
pub use runtime::{Event, Runtime};
pub use stack::Stack;
pub use syntax::check as syntax_check;
pub use val::{format_number, Kind, Val};
pub use var::{UserFunction, Var};
