//! # Spaghetti BASIC
//!
//! A line-numbered BASIC with a matrix package. Programs are typed in at
//! the `READY.` prompt one numbered line at a time, then started with `RUN`.
//! Beside the classic statements there is `MAT`, which works on whole
//! matrices: products, powers, inverses, determinants, LU decomposition and
//! linear systems.
//!
//! Start the interpreter with an optional program file.
//! ```text
//! basic game.bas
//! Loaded 120 lines from game.bas
//! READY. █
//! ```
//!
//! Set `BASIC_LOG=debug` to trace every dispatched line on stderr.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
