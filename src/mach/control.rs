/*!
## Control flow

Handlers for the statements that move the instruction pointer: GOTO, GOSUB,
RETURN, ON, and the FOR, WHILE and REPEAT loops. Loops keep a frame on the
loop stack while they run; GOSUB keeps the calling line on its own stack.
Both stacks hold at most 15 entries.

*/

use super::{eval, Context, Flow};
use crate::error;
use crate::lang::{find_word, split_top_level, Cursor, Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    For {
        var: String,
        limit: f64,
        step: f64,
        line: LineNumber,
    },
    While {
        condition: Rc<str>,
        line: LineNumber,
    },
    Repeat {
        line: LineNumber,
    },
}

fn target(ctx: &Context, line: LineNumber) -> Result<LineNumber> {
    if ctx.program.line_exists(line) {
        Ok(line)
    } else {
        Err(error!(UndefinedLine; format!("NO LINE {}", line)))
    }
}

fn line_number(text: &str) -> Result<LineNumber> {
    let mut cursor = Cursor::new(text);
    let line = cursor.expect_line_number()?;
    cursor.finish()?;
    Ok(line)
}

pub fn goto(ctx: &mut Context, rest: &str) -> Result<Flow> {
    Ok(Flow::Goto(target(ctx, line_number(rest)?)?))
}

pub fn gosub(ctx: &mut Context, line: LineNumber, rest: &str) -> Result<Flow> {
    let destination = target(ctx, line_number(rest)?)?;
    ctx.state.gosub.push(line)?;
    Ok(Flow::Goto(destination))
}

pub fn return_(ctx: &mut Context, rest: &str) -> Result<Flow> {
    Cursor::new(rest).finish()?;
    let line = ctx.state.gosub.pop()?;
    Ok(Flow::After(line))
}

/// `ON expr GOTO a, b, ...` and `ON expr GOSUB a, b, ...`
pub fn on(ctx: &mut Context, line: LineNumber, rest: &str) -> Result<Flow> {
    let (at, list_start, is_gosub) = match (find_word(rest, "GOSUB"), find_word(rest, "GOTO")) {
        (Some(at), _) => (at, at + 5, true),
        (None, Some(at)) => (at, at + 4, false),
        (None, None) => {
            let at = match find_word(rest, "GO") {
                Some(at) => at,
                None => return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB")),
            };
            let mut cursor = Cursor::new(&rest[at + 2..]);
            let is_gosub = if cursor.keyword("TO") {
                false
            } else if cursor.keyword("SUB") {
                true
            } else {
                return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB"));
            };
            (at, rest.len() - cursor.rest().len(), is_gosub)
        }
    };
    let lines = split_top_level(&rest[list_start..], ',')
        .into_iter()
        .map(line_number)
        .collect::<Result<Vec<LineNumber>>>()?;
    let index = eval::numeric(ctx, &rest[..at])?.trunc();
    if !(index >= 1.0 && index <= lines.len() as f64) {
        return Err(error!(IllegalFunctionCall; format!(
            "ON INDEX {} OUT OF RANGE 1 TO {}",
            index,
            lines.len()
        )));
    }
    let destination = target(ctx, lines[index as usize - 1])?;
    if is_gosub {
        ctx.state.gosub.push(line)?;
    }
    Ok(Flow::Goto(destination))
}

/// `FOR var = start TO limit [STEP step]`
pub fn for_(ctx: &mut Context, line: LineNumber, rest: &str) -> Result<Flow> {
    let mut cursor = Cursor::new(rest);
    let var = match cursor.identifier() {
        Some(var) if !var.ends_with('$') => var,
        Some(var) => return Err(error!(TypeMismatch; format!("{} IS NOT NUMERIC", var))),
        None => return Err(error!(SyntaxError; "EXPECTED LOOP VARIABLE")),
    };
    cursor.expect('=')?;
    let range = cursor.rest();
    let to = match find_word(range, "TO") {
        Some(to) => to,
        None => return Err(error!(SyntaxError; "EXPECTED TO")),
    };
    let after_to = &range[to + 2..];
    let (limit_text, step_text) = match find_word(after_to, "STEP") {
        Some(step) => (&after_to[..step], Some(&after_to[step + 4..])),
        None => (after_to, None),
    };
    let start = eval::numeric(ctx, &range[..to])?;
    let limit = eval::numeric(ctx, limit_text)?;
    let step = match step_text {
        Some(text) => eval::numeric(ctx, text)?,
        None => 1.0,
    };
    let stale = ctx.state.loops.iter().position(|frame| match frame {
        Frame::For { var: v, .. } => *v == var,
        _ => false,
    });
    if let Some(index) = stale {
        ctx.state.loops.truncate(index);
    }
    ctx.var.set_numeric(&var, start);
    ctx.state.loops.push(Frame::For {
        var,
        limit,
        step,
        line,
    })?;
    Ok(Flow::Next)
}

/// `NEXT [var [, var ...]]`
pub fn next(ctx: &mut Context, rest: &str) -> Result<Flow> {
    if rest.trim().is_empty() {
        return next_var(ctx, None);
    }
    for var in split_top_level(rest, ',') {
        let mut cursor = Cursor::new(var);
        let name = match cursor.identifier() {
            Some(name) => name,
            None => return Err(error!(SyntaxError; "EXPECTED LOOP VARIABLE")),
        };
        cursor.finish()?;
        match next_var(ctx, Some(&name))? {
            Flow::Next => continue,
            flow => return Ok(flow),
        }
    }
    Ok(Flow::Next)
}

fn next_var(ctx: &mut Context, name: Option<&str>) -> Result<Flow> {
    let found = ctx.state.loops.iter().rposition(|frame| match frame {
        Frame::For { var, .. } => name.map_or(true, |name| name == var),
        _ => false,
    });
    let index = match found {
        Some(index) => index,
        None => return Err(error!(NextWithoutFor; name.unwrap_or("").to_string())),
    };
    ctx.state.loops.truncate(index + 1);
    let (var, limit, step, line) = match ctx.state.loops.last() {
        Some(Frame::For {
            var,
            limit,
            step,
            line,
        }) => (var.clone(), *limit, *step, *line),
        _ => return Err(error!(InternalError; "LOOP STACK")),
    };
    let value = ctx.var.numeric(&var) + step;
    ctx.var.set_numeric(&var, value);
    let more = if step >= 0.0 {
        value <= limit
    } else {
        value >= limit
    };
    if more {
        Ok(Flow::After(line))
    } else {
        ctx.state.loops.pop()?;
        Ok(Flow::Next)
    }
}

/// `WHILE cond`; a false condition skips past the matching WEND.
pub fn while_(ctx: &mut Context, line: LineNumber, rest: &str) -> Result<Flow> {
    if let Some(Frame::While { line: top, .. }) = ctx.state.loops.last() {
        if *top == line {
            ctx.state.loops.pop()?;
        }
    }
    if eval::condition(ctx, rest)? {
        ctx.state.loops.push(Frame::While {
            condition: rest.into(),
            line,
        })?;
        return Ok(Flow::Next);
    }
    match ctx.program.matching_wend(line) {
        Some(wend) => Ok(Flow::After(wend)),
        None => Err(error!(WhileWithoutWend)),
    }
}

pub fn wend(ctx: &mut Context) -> Result<Flow> {
    let (condition, line) = match ctx.state.loops.last() {
        Some(Frame::While { condition, line }) => (condition.clone(), *line),
        _ => return Err(error!(WendWithoutWhile)),
    };
    if eval::condition(ctx, &condition)? {
        Ok(Flow::After(line))
    } else {
        ctx.state.loops.pop()?;
        Ok(Flow::Next)
    }
}

pub fn repeat(ctx: &mut Context, line: LineNumber) -> Result<Flow> {
    if let Some(Frame::Repeat { line: top }) = ctx.state.loops.last() {
        if *top == line {
            ctx.state.loops.pop()?;
        }
    }
    ctx.state.loops.push(Frame::Repeat { line })?;
    Ok(Flow::Next)
}

/// `UNTIL cond`; a false condition goes back to the line after REPEAT.
pub fn until(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let line = match ctx.state.loops.last() {
        Some(Frame::Repeat { line }) => *line,
        _ => return Err(error!(UntilWithoutRepeat)),
    };
    if eval::condition(ctx, rest)? {
        ctx.state.loops.pop()?;
        Ok(Flow::Next)
    } else {
        Ok(Flow::After(line))
    }
}
