/*!
# Statements

One statement per line. Commands such as `LIST`, `RUN` and `SAVE` are
only typed at the prompt. `MAT` has a chapter of its own.
*/

#[path = "statements/beep.rs"]
#[allow(non_snake_case)]
pub mod BEEP;

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

#[path = "statements/dim.rs"]
#[allow(non_snake_case)]
pub mod DIM;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/format.rs"]
#[allow(non_snake_case)]
pub mod FORMAT;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/on.rs"]
#[allow(non_snake_case)]
pub mod ON;

#[path = "statements/open.rs"]
#[allow(non_snake_case)]
pub mod OPEN;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/renum.rs"]
#[allow(non_snake_case)]
pub mod RENUMBER;

#[path = "statements/repeat.rs"]
#[allow(non_snake_case)]
pub mod REPEAT;

#[path = "statements/restore.rs"]
#[allow(non_snake_case)]
pub mod RESTORE;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/seed.rs"]
#[allow(non_snake_case)]
pub mod SEED;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;

#[path = "statements/syntax.rs"]
#[allow(non_snake_case)]
pub mod SYNTAX;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;
