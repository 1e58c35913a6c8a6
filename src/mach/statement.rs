/*!
## Statement dispatcher

Runs the text of one program line. `Word::classify` names the statement and
the handler for it returns a `Flow` telling the runtime where to go next.

*/

use super::eval::{self, Target};
use super::matrix::subscript;
use super::{control, format, mat, Context, Flow, Kind, Mode, UserFunction, Val};
use crate::error;
use crate::lang::{find_word, split_top_level, Cursor, Error, ErrorCode, LineNumber, Word};

type Result<T> = std::result::Result<T, Error>;

pub fn execute(ctx: &mut Context, line: LineNumber, text: &str) -> Result<Flow> {
    let (word, rest) = match Word::classify(text) {
        Some(statement) => statement,
        None => {
            let leading = match Word::leading(text) {
                "" => text.trim(),
                leading => leading,
            };
            ctx.report(error!(SyntaxError; format!("UNKNOWN STATEMENT {}", leading.to_ascii_uppercase())));
            return Ok(Flow::Next);
        }
    };
    match word {
        Word::Beep => {
            Cursor::new(rest).finish()?;
            Ok(Flow::Next)
        }
        Word::Close => close(ctx, rest),
        Word::Data | Word::Format | Word::Rem => Ok(Flow::Next),
        Word::Def => def(ctx, rest),
        Word::Dim => dim(ctx, rest),
        Word::End => Ok(Flow::End),
        Word::For => control::for_(ctx, line, rest),
        Word::Gosub => control::gosub(ctx, line, rest),
        Word::Goto => control::goto(ctx, rest),
        Word::If => if_(ctx, line, rest),
        Word::Input => input(ctx, rest),
        Word::Let => let_(ctx, rest),
        Word::Mat => mat::execute(ctx, rest),
        Word::Next => control::next(ctx, rest),
        Word::On => control::on(ctx, line, rest),
        Word::Open => open(ctx, rest),
        Word::Print => print(ctx, rest),
        Word::Read => read(ctx, rest),
        Word::Repeat => control::repeat(ctx, line),
        Word::Restore => {
            Cursor::new(rest).finish()?;
            ctx.state.data.restore();
            Ok(Flow::Next)
        }
        Word::Return => control::return_(ctx, rest),
        Word::Seed => {
            let seed = eval::numeric(ctx, rest)?;
            ctx.seed(seed as u64);
            Ok(Flow::Next)
        }
        Word::Stop => Err(error!(Break)),
        Word::Until => control::until(ctx, rest),
        Word::Wend => control::wend(ctx),
        Word::While => control::while_(ctx, line, rest),
    }
}

/// Stores a value. Writes outside a matrix are reported and skipped.
fn assign(ctx: &mut Context, target: &Target, val: Val) -> Result<()> {
    match target {
        Target::Scalar(name) => ctx.var.store(name, val),
        Target::Element(name, index) => match ctx.var.set_element(name, index, val) {
            Err(e) if e.is(ErrorCode::SubscriptOutOfRange) => {
                ctx.report(e.message(subscript(name, index)));
                Ok(())
            }
            result => result,
        },
    }
}

fn let_(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let parts = split_top_level(rest, '=');
    if parts.len() < 2 {
        return Err(error!(SyntaxError; "EXPECTED ="));
    }
    let target = eval::target(ctx, parts[0])?;
    let expr = &rest[parts[0].len() + 1..];
    let val = match target.kind() {
        Kind::Numeric => Val::Number(eval::numeric(ctx, expr)?),
        Kind::Text => Val::Text(eval::string(ctx, expr)?),
    };
    assign(ctx, &target, val)?;
    Ok(Flow::Next)
}

/// `IF cond THEN a [ELSE b]` where each branch is a statement or a line
/// number. `IF cond GOTO n` works too.
fn if_(ctx: &mut Context, line: LineNumber, rest: &str) -> Result<Flow> {
    let (condition, branches) = match find_word(rest, "THEN") {
        Some(at) => (&rest[..at], &rest[at + 4..]),
        None => match find_word(rest, "GOTO") {
            Some(at) => (&rest[..at], &rest[at..]),
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        },
    };
    let (then, otherwise) = match find_word(branches, "ELSE") {
        Some(at) => (&branches[..at], Some(&branches[at + 4..])),
        None => (branches, None),
    };
    let branch = if eval::condition(ctx, condition)? {
        then
    } else {
        match otherwise {
            Some(otherwise) => otherwise,
            None => return Ok(Flow::Next),
        }
    };
    let branch = branch.trim();
    if branch.chars().next().map_or(false, |c| c.is_ascii_digit()) {
        return control::goto(ctx, branch);
    }
    execute(ctx, line, branch)
}

/// One PRINT item and the separator that followed it.
fn print_items(text: &str) -> Vec<(&str, Option<char>)> {
    let mut items = vec![];
    let mut depth = 0i32;
    let mut quoted = false;
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth -= 1,
            ',' | ';' if !quoted && depth == 0 => {
                items.push((&text[start..index], Some(ch)));
                start = index + 1;
            }
            _ => {}
        }
    }
    if !text[start..].trim().is_empty() {
        items.push((&text[start..], None));
    }
    items
}

/// Splits an optional leading `#n,` off a statement's text.
fn channel<'a>(ctx: &mut Context, text: &'a str) -> Result<(Option<u32>, &'a str)> {
    let mut cursor = Cursor::new(text);
    if !cursor.eat('#') {
        return Ok((None, text));
    }
    let after = cursor.rest();
    let parts = split_top_level(after, ',');
    let number = eval::numeric(ctx, parts[0])?;
    if number < 0.0 || number.fract() != 0.0 {
        return Err(error!(BadFileNumber; format!("#{}", number)));
    }
    if parts.len() == 1 {
        return Ok((Some(number as u32), ""));
    }
    Ok((Some(number as u32), &after[parts[0].len() + 1..]))
}

fn print(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let (number, rest) = channel(ctx, rest)?;
    let mut cursor = Cursor::new(rest);
    let s = if cursor.keyword("USING") {
        using(ctx, cursor.rest())?
    } else {
        let mut s = String::new();
        let mut newline = true;
        for (item, separator) in print_items(rest) {
            if !item.trim().is_empty() {
                s.push_str(&eval::value(ctx, item)?.to_string());
            }
            if separator == Some(',') {
                s.push(' ');
            }
            newline = separator.is_none();
        }
        if newline {
            s.push('\n');
        }
        s
    };
    match number {
        Some(number) => ctx.channels.write(number, &s)?,
        None => ctx.print(&s),
    }
    Ok(Flow::Next)
}

/// `USING n; items` with `n` a format line, or `USING "template"; items`.
fn using(ctx: &mut Context, rest: &str) -> Result<String> {
    let mut parts = print_items(rest).into_iter();
    let template = match parts.next() {
        Some((first, _)) => first,
        None => return Err(error!(SyntaxError; "EXPECTED FORMAT")),
    };
    let mut cursor = Cursor::new(template);
    let template: String = match cursor.line_number() {
        Some(number) => {
            cursor.finish()?;
            let text = match ctx.program.get(number) {
                Some(text) => text,
                None => return Err(error!(UndefinedLine; format!("NO FORMAT LINE {}", number))),
            };
            match Word::classify(&text) {
                Some((Word::Format, pattern)) => eval::string(ctx, pattern)?.to_string(),
                _ => return Err(error!(SyntaxError; format!("LINE {} IS NOT A FORMAT", number))),
            }
        }
        None => eval::string(ctx, template)?.to_string(),
    };
    let mut values = vec![];
    for (item, _) in parts {
        if !item.trim().is_empty() {
            values.push(eval::value(ctx, item)?);
        }
    }
    let mut s = format::apply(&format::compile(&template), &values)?;
    s.push('\n');
    Ok(s)
}

/// Turns typed or file input into values for `targets`.
fn parse_input(targets: &[Target], items: &[&str]) -> Result<Vec<Val>> {
    if items.len() != targets.len() {
        return Err(error!(SyntaxError; "REDO FROM START"));
    }
    targets
        .iter()
        .zip(items)
        .map(|(target, item)| {
            let item = item.trim();
            match target.kind() {
                Kind::Numeric => match item.parse::<f64>() {
                    Ok(n) => Ok(Val::Number(n)),
                    Err(_) => Err(error!(TypeMismatch; "REDO FROM START")),
                },
                Kind::Text => {
                    let item = item
                        .strip_prefix('"')
                        .and_then(|s| s.strip_suffix('"'))
                        .unwrap_or(item);
                    Ok(Val::from(item))
                }
            }
        })
        .collect()
}

/// `INPUT ["prompt";] vars` or `INPUT #n, vars`.
fn input(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let (number, rest) = channel(ctx, rest)?;
    let mut cursor = Cursor::new(rest);
    let (prompt, vars) = match cursor.string_literal()? {
        Some(prompt) => {
            if cursor.eat(';') {
                (format!("{}? ", prompt), cursor.rest())
            } else {
                cursor.expect(',')?;
                (prompt, cursor.rest())
            }
        }
        None => ("? ".to_string(), rest),
    };
    let targets = split_top_level(vars, ',')
        .into_iter()
        .map(|var| eval::target(ctx, var))
        .collect::<Result<Vec<Target>>>()?;
    if targets.is_empty() {
        return Err(error!(SyntaxError; "EXPECTED VARIABLE"));
    }
    let values = match number {
        Some(number) => {
            let mut items: Vec<String> = vec![];
            while items.len() < targets.len() {
                let line = ctx.channels.read_line(number)?;
                items.extend(split_top_level(&line, ',').into_iter().map(String::from));
            }
            items.truncate(targets.len());
            let items: Vec<&str> = items.iter().map(String::as_str).collect();
            parse_input(&targets, &items)?
        }
        None => {
            let line = match ctx.input.take() {
                Some(line) => line,
                None => return Ok(Flow::Input(prompt)),
            };
            match parse_input(&targets, &split_top_level(&line, ',')) {
                Ok(values) => values,
                Err(e) => {
                    ctx.report(e);
                    return Ok(Flow::Input(prompt));
                }
            }
        }
    };
    for (target, val) in targets.iter().zip(values) {
        assign(ctx, target, val)?;
    }
    Ok(Flow::Next)
}

fn read(ctx: &mut Context, rest: &str) -> Result<Flow> {
    for var in split_top_level(rest, ',') {
        let target = eval::target(ctx, var)?;
        let val = match target.kind() {
            Kind::Numeric => Val::Number(ctx.state.data.read_number()?),
            Kind::Text => ctx.state.data.read_text()?,
        };
        assign(ctx, &target, val)?;
    }
    Ok(Flow::Next)
}

/// `DEF FNname(param) = expr`
fn def(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let mut cursor = Cursor::new(rest);
    let name = match cursor.identifier() {
        Some(name) => name,
        None => return Err(error!(SyntaxError; "EXPECTED FUNCTION NAME")),
    };
    let name = match name.strip_prefix("FN") {
        Some(name) if !name.is_empty() && !name.ends_with('$') => name.to_string(),
        _ => return Err(error!(SyntaxError; format!("BAD FUNCTION NAME {}", name))),
    };
    cursor.expect('(')?;
    let parameter = match cursor.identifier() {
        Some(parameter) if !parameter.ends_with('$') => parameter,
        _ => return Err(error!(SyntaxError; "EXPECTED NUMERIC PARAMETER")),
    };
    cursor.expect(')')?;
    cursor.expect('=')?;
    let body = cursor.rest().trim();
    if body.is_empty() {
        return Err(error!(SyntaxError; "MISSING FUNCTION BODY"));
    }
    ctx.var.define_function(
        &name,
        UserFunction {
            parameter,
            body: body.into(),
        },
    );
    Ok(Flow::Next)
}

/// `DIM A(3, 4), B$(10)`; each extent is the number of elements.
fn dim(ctx: &mut Context, rest: &str) -> Result<Flow> {
    for part in split_top_level(rest, ',') {
        match eval::target(ctx, part)? {
            Target::Element(name, dimensions) => ctx.var.dimension(&name, &dimensions)?,
            Target::Scalar(name) => {
                return Err(error!(SyntaxError; format!("{} HAS NO DIMENSIONS", name)));
            }
        }
    }
    Ok(Flow::Next)
}

/// `OPEN "path" FOR INPUT|OUTPUT|APPEND AS #n`
fn open(ctx: &mut Context, rest: &str) -> Result<Flow> {
    let at = match find_word(rest, "FOR") {
        Some(at) => at,
        None => return Err(error!(SyntaxError; "EXPECTED FOR")),
    };
    let path = eval::string(ctx, &rest[..at])?;
    let mut cursor = Cursor::new(&rest[at + 3..]);
    let mode = if cursor.keyword("INPUT") {
        Mode::Input
    } else if cursor.keyword("OUTPUT") {
        Mode::Output
    } else if cursor.keyword("APPEND") {
        Mode::Append
    } else {
        return Err(error!(SyntaxError; "EXPECTED INPUT, OUTPUT OR APPEND"));
    };
    if !cursor.keyword("AS") {
        return Err(error!(SyntaxError; "EXPECTED AS"));
    }
    cursor.eat('#');
    let number = channel_number(ctx, cursor.rest())?;
    ctx.channels.open(number, &path, mode)?;
    Ok(Flow::Next)
}

fn channel_number(ctx: &mut Context, text: &str) -> Result<u32> {
    let number = eval::numeric(ctx, text)?;
    if number < 0.0 || number.fract() != 0.0 || number > u32::MAX as f64 {
        return Err(error!(BadFileNumber; format!("#{}", number)));
    }
    Ok(number as u32)
}

/// `CLOSE #n [, #m ...]`, or `CLOSE` for all of them.
fn close(ctx: &mut Context, rest: &str) -> Result<Flow> {
    if rest.trim().is_empty() {
        ctx.channels.close_all();
        return Ok(Flow::Next);
    }
    for part in split_top_level(rest, ',') {
        let part = part.trim();
        let number = channel_number(ctx, part.strip_prefix('#').unwrap_or(part))?;
        ctx.channels.close(number)?;
    }
    Ok(Flow::Next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(lines: &[(LineNumber, &str)]) -> Context {
        let mut ctx = Context::default();
        ctx.program.load(lines.iter().cloned());
        ctx
    }

    #[test]
    fn test_print_separators() {
        let mut c = ctx(&[]);
        execute(&mut c, 10, "PRINT \"A\", 1; \"B\"").unwrap();
        execute(&mut c, 10, "PRINT 1/3;").unwrap();
        execute(&mut c, 10, "? \"X\"").unwrap();
        execute(&mut c, 10, "PRINT").unwrap();
        assert_eq!(c.take_output(), "A 1B\n0.333333X\n\n");
    }

    #[test]
    fn test_let_and_implicit_let() {
        let mut c = ctx(&[]);
        execute(&mut c, 10, "LET A = 2 * 3").unwrap();
        execute(&mut c, 10, "b$ = \"HI\" + \"!\"").unwrap();
        assert_eq!(c.var.numeric("A"), 6.0);
        assert_eq!(&*c.var.string("B$"), "HI!");
        let e = execute(&mut c, 10, "LET A = \"X\"").unwrap_err();
        assert!(e.is(ErrorCode::TypeMismatch));
    }

    #[test]
    fn test_unknown_statement_continues() {
        let mut c = ctx(&[]);
        assert_eq!(execute(&mut c, 10, "FROB 1").unwrap(), Flow::Next);
        let reported = c.take_reported();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].is(ErrorCode::SyntaxError));
    }

    #[test]
    fn test_if_branches() {
        let mut c = ctx(&[(100, "END")]);
        c.var.set_numeric("X", 1.0);
        assert_eq!(execute(&mut c, 10, "IF X = 1 THEN 100").unwrap(), Flow::Goto(100));
        assert_eq!(
            execute(&mut c, 10, "IF X = 2 THEN 100 ELSE PRINT \"NO\"").unwrap(),
            Flow::Next
        );
        assert_eq!(c.take_output(), "NO\n");
        assert_eq!(execute(&mut c, 10, "IF X THEN END").unwrap(), Flow::End);
        assert_eq!(execute(&mut c, 10, "IF X GOTO 100").unwrap(), Flow::Goto(100));
        assert_eq!(execute(&mut c, 10, "IF 0 THEN 100").unwrap(), Flow::Next);
    }

    #[test]
    fn test_dim_and_elements() {
        let mut c = ctx(&[]);
        execute(&mut c, 10, "DIM A(2, 3), N$(4)").unwrap();
        execute(&mut c, 10, "A(1, 2) = 9").unwrap();
        execute(&mut c, 10, "N$(3) = \"Z\"").unwrap();
        assert_eq!(c.var.element("A", &[1, 2]).unwrap(), Val::Number(9.0));
        execute(&mut c, 10, "A(2, 0) = 1").unwrap();
        let reported = c.take_reported();
        assert!(reported[0].is(ErrorCode::SubscriptOutOfRange));
        assert_eq!(reported[0].line_number(), None);
    }

    #[test]
    fn test_read_data() {
        let mut c = ctx(&[(10, "DATA 1, \"TWO\", 3")]);
        c.state.data = crate::mach::Data::collect(&c.program);
        execute(&mut c, 20, "READ A, B$").unwrap();
        execute(&mut c, 20, "READ C$").unwrap();
        assert_eq!(c.var.numeric("A"), 1.0);
        assert_eq!(&*c.var.string("B$"), "TWO");
        assert_eq!(&*c.var.string("C$"), "3");
        let e = execute(&mut c, 20, "READ D").unwrap_err();
        assert!(e.is(ErrorCode::OutOfData));
        execute(&mut c, 20, "RESTORE").unwrap();
        execute(&mut c, 20, "READ D").unwrap();
        assert_eq!(c.var.numeric("D"), 1.0);
    }

    #[test]
    fn test_def_fn() {
        let mut c = ctx(&[]);
        execute(&mut c, 10, "DEF FNSQ(X) = X * X").unwrap();
        execute(&mut c, 20, "Y = FNSQ(5) + 1").unwrap();
        assert_eq!(c.var.numeric("Y"), 26.0);
    }

    #[test]
    fn test_input_waits_then_assigns() {
        let mut c = ctx(&[]);
        let flow = execute(&mut c, 10, "INPUT \"AGE\"; A, N$").unwrap();
        assert_eq!(flow, Flow::Input("AGE? ".into()));
        c.input = Some("x, BOB".into());
        let flow = execute(&mut c, 10, "INPUT \"AGE\"; A, N$").unwrap();
        assert_eq!(flow, Flow::Input("AGE? ".into()));
        assert!(c.take_reported()[0].is(ErrorCode::TypeMismatch));
        c.input = Some("42, BOB".into());
        assert_eq!(execute(&mut c, 10, "INPUT \"AGE\"; A, N$").unwrap(), Flow::Next);
        assert_eq!(c.var.numeric("A"), 42.0);
        assert_eq!(&*c.var.string("N$"), "BOB");
    }

    #[test]
    fn test_print_using() {
        let mut c = ctx(&[(5, ":= \"N=##.# lll\"")]);
        execute(&mut c, 10, "PRINT USING 5; 3.14159, \"ABCD\"").unwrap();
        execute(&mut c, 10, "PRINT USING \"[##]\"; 7").unwrap();
        assert_eq!(c.take_output(), "N= 3.1 ABC\n[ 7]\n");
    }

    #[test]
    fn test_stop_and_seed() {
        let mut c = ctx(&[]);
        let e = execute(&mut c, 10, "STOP").unwrap_err();
        assert!(e.is(ErrorCode::Break));
        execute(&mut c, 10, "SEED 7").unwrap();
        execute(&mut c, 10, "A = RND").unwrap();
        execute(&mut c, 10, "SEED 7").unwrap();
        execute(&mut c, 10, "B = RND(1)").unwrap();
        assert_eq!(c.var.numeric("A"), c.var.numeric("B"));
    }
}
