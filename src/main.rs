//! # Spaghetti BASIC
//!
//! Line-numbered BASIC with matrix statements. Run it with an optional
//! program file to load. Set `BASIC_LOG` (for example `BASIC_LOG=debug`)
//! to trace execution on stderr.

mod term;

fn main() {
    term::main();
}
