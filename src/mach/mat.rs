use super::{eval, linalg, Context, Flow, Kind, Matrix, Val};
use crate::error;
use crate::lang::{split_top_level, Cursor, Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Runs the text after `MAT`.
///
/// ```text
/// MAT READ a [, b ...]
/// MAT PRINT [#n,] a [, b ...]
/// MAT MULT x = a * b
/// MAT POWER x = a ^ n
/// MAT SOLVE x = a \ b
/// MAT LU x = a
/// MAT x = IDENTITY(n) | ZEROS(d, ...) | ONES(d, ...)
/// MAT x = TRANSPOSE(a) | INVERSE(a) | DIAGONAL(a)
/// MAT x = DETERMINANT(a) | RANK(a) | TRACE(a)
/// MAT x = a op b
/// MAT x = a
/// ```
///
/// The target is only replaced once the result is complete.
pub fn execute(ctx: &mut Context, text: &str) -> Result<Flow> {
    let mut cursor = Cursor::new(text);
    if cursor.keyword("READ") {
        read(ctx, cursor.rest())?;
    } else if cursor.keyword("PRINT") {
        print(ctx, cursor.rest())?;
    } else if cursor.keyword("MULT") {
        let (x, rhs) = assignment(cursor.rest())?;
        let (a, b) = operands(rhs, '*')?;
        let threshold = ctx.var.dense_threshold();
        let m = linalg::multiply(ctx.var.matrix(&a)?, ctx.var.matrix(&b)?, threshold)?;
        ctx.var.store_matrix(&x, m)?;
    } else if cursor.keyword("POWER") {
        let (x, rhs) = assignment(cursor.rest())?;
        let parts = split_top_level(rhs, '^');
        if parts.len() != 2 {
            return Err(error!(SyntaxError; "EXPECTED a ^ n"));
        }
        let a = name(parts[0])?;
        let n = eval::numeric(ctx, parts[1])?;
        if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
            return Err(error!(IllegalFunctionCall; format!("POWER {} IS NOT A WHOLE NUMBER", n)));
        }
        let threshold = ctx.var.dense_threshold();
        let m = linalg::power(ctx.var.matrix(&a)?, n as u32, threshold)?;
        ctx.var.store_matrix(&x, m)?;
    } else if cursor.keyword("SOLVE") {
        let (x, rhs) = assignment(cursor.rest())?;
        let (a, b) = operands(rhs, '\\')?;
        let threshold = ctx.var.dense_threshold();
        let m = linalg::solve(ctx.var.matrix(&a)?, ctx.var.matrix(&b)?, threshold)?;
        ctx.var.store_matrix(&x, m)?;
    } else if cursor.keyword("LU") {
        let (x, rhs) = assignment(cursor.rest())?;
        let a = name(rhs)?;
        let threshold = ctx.var.dense_threshold();
        let (l, u) = linalg::lu(ctx.var.matrix(&a)?, threshold)?;
        ctx.var.store_matrix(&format!("{}_L", x), l)?;
        ctx.var.store_matrix(&format!("{}_U", x), u)?;
    } else {
        let (x, rhs) = assignment(text)?;
        assign(ctx, &x, rhs)?;
    }
    Ok(Flow::Next)
}

/// Splits `x = rest`.
fn assignment(text: &str) -> Result<(String, &str)> {
    let mut cursor = Cursor::new(text);
    let x = match cursor.identifier() {
        Some(x) => x,
        None => return Err(error!(SyntaxError; "EXPECTED MATRIX NAME")),
    };
    cursor.expect('=')?;
    Ok((x, cursor.rest().trim()))
}

/// A bare identifier, nothing more.
fn name(text: &str) -> Result<String> {
    let mut cursor = Cursor::new(text);
    match cursor.identifier() {
        Some(name) => {
            cursor.finish()?;
            Ok(name)
        }
        None => Err(error!(SyntaxError; format!("EXPECTED MATRIX NAME, GOT {}", text.trim()))),
    }
}

fn operands(text: &str, op: char) -> Result<(String, String)> {
    let parts = split_top_level(text, op);
    if parts.len() != 2 {
        return Err(error!(SyntaxError; format!("EXPECTED a {} b", op)));
    }
    Ok((name(parts[0])?, name(parts[1])?))
}

/// The argument text of `WORD(...)` when `text` is exactly such a call.
fn call<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let mut cursor = Cursor::new(text);
    if !cursor.keyword(word) || !cursor.eat('(') {
        return None;
    }
    let inside = cursor.rest().trim_end().strip_suffix(')')?;
    let mut depth = 0i32;
    for ch in inside.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return None;
        }
    }
    Some(inside)
}

fn dimensions(ctx: &mut Context, text: &str) -> Result<Vec<usize>> {
    split_top_level(text, ',')
        .into_iter()
        .map(|arg| {
            let n = eval::numeric(ctx, arg)?;
            if n < 1.0 || n.fract() != 0.0 {
                return Err(error!(IllegalFunctionCall; format!("BAD DIMENSION {}", n)));
            }
            Ok(n as usize)
        })
        .collect()
}

enum Operand {
    Matrix(String),
    Scalar(f64),
}

fn operand(ctx: &mut Context, text: &str) -> Result<Operand> {
    let mut cursor = Cursor::new(text);
    if let Some(name) = cursor.identifier() {
        if cursor.at_end() && ctx.var.has_matrix(&name) {
            return Ok(Operand::Matrix(name));
        }
    }
    Ok(Operand::Scalar(eval::numeric(ctx, text)?))
}

/// Position of the first binary `+ - * /` outside parentheses. A sign at
/// the start or inside an exponent does not count.
fn binary_operator(text: &str) -> Option<(usize, Operator)> {
    let mut depth = 0i32;
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        let exponent = matches!(prev, Some('E') | Some('e'))
            && matches!(before_prev, Some(c) if c.is_ascii_digit() || c == '.');
        if depth == 0 && prev.is_some() && !((ch == '+' || ch == '-') && exponent) {
            if let Some(op) = Operator::from_char(ch) {
                return Some((index, op));
            }
        }
        if !ch.is_whitespace() {
            before_prev = prev;
            prev = Some(ch);
        }
    }
    None
}

fn assign(ctx: &mut Context, x: &str, rhs: &str) -> Result<()> {
    let threshold = ctx.var.dense_threshold();
    if let Some(arg) = call(rhs, "IDENTITY") {
        let n = dimensions(ctx, arg)?;
        if n.len() != 1 {
            return Err(error!(IllegalFunctionCall; "IDENTITY TAKES ONE ARGUMENT"));
        }
        return ctx.var.store_matrix(x, linalg::identity(n[0], threshold)?);
    }
    for (word, value) in &[("ZEROS", 0.0), ("ONES", 1.0)] {
        if let Some(args) = call(rhs, word) {
            let dims = dimensions(ctx, args)?;
            return ctx.var.store_matrix(x, linalg::filled(&dims, *value, threshold)?);
        }
    }
    type Unary = fn(&Matrix, usize) -> Result<Matrix>;
    let unary: [(&str, Unary); 5] = [
        ("TRANSPOSE", linalg::transpose),
        ("TRANS", linalg::transpose),
        ("INVERSE", linalg::inverse),
        ("INV", linalg::inverse),
        ("DIAGONAL", linalg::diagonal),
    ];
    for (word, op) in &unary {
        if let Some(arg) = call(rhs, word) {
            let a = name(arg)?;
            let m = op(ctx.var.matrix(&a)?, threshold)?;
            return ctx.var.store_matrix(x, m);
        }
    }
    type Reduce = fn(&Matrix) -> Result<f64>;
    let reductions: [(&str, Reduce); 3] = [
        ("DETERMINANT", linalg::determinant),
        ("RANK", |m| linalg::rank(m).map(|r| r as f64)),
        ("TRACE", linalg::trace),
    ];
    for (word, op) in &reductions {
        if let Some(arg) = call(rhs, word) {
            if Kind::of(x) != Kind::Numeric {
                return Err(error!(TypeMismatch; format!("{} IS NOT NUMERIC", x)));
            }
            let a = name(arg)?;
            let value = op(ctx.var.matrix(&a)?)?;
            ctx.var.set_numeric(x, value);
            return Ok(());
        }
    }
    if let Some((at, op)) = binary_operator(rhs) {
        let lhs = operand(ctx, &rhs[..at])?;
        let rhs = operand(ctx, &rhs[at + 1..])?;
        let m = match (lhs, rhs) {
            (Operand::Matrix(a), Operand::Matrix(b)) => {
                linalg::element_wise(ctx.var.matrix(&a)?, ctx.var.matrix(&b)?, op, threshold)?
            }
            (Operand::Matrix(a), Operand::Scalar(s)) => {
                linalg::scalar(ctx.var.matrix(&a)?, s, op, false, threshold)?
            }
            (Operand::Scalar(s), Operand::Matrix(b)) => {
                linalg::scalar(ctx.var.matrix(&b)?, s, op, true, threshold)?
            }
            (Operand::Scalar(_), Operand::Scalar(_)) => {
                return Err(error!(TypeMismatch; "MAT NEEDS A MATRIX OPERAND"));
            }
        };
        return ctx.var.store_matrix(x, m);
    }
    let a = name(rhs)?;
    let m = ctx.var.matrix(&a)?.clone();
    ctx.var.store_matrix(x, m)
}

/// Fills each matrix from DATA in row-major order.
fn read(ctx: &mut Context, text: &str) -> Result<()> {
    for part in split_top_level(text, ',') {
        let x = name(part)?;
        let mut m = ctx.var.matrix(&x)?.clone();
        for offset in 0..m.len() {
            let val = match m.kind() {
                Kind::Numeric => Val::Number(ctx.state.data.read_number()?),
                Kind::Text => ctx.state.data.read_text()?,
            };
            m.set_flat(offset, val)?;
        }
        ctx.var.store_matrix(&x, m)?;
    }
    Ok(())
}

fn print(ctx: &mut Context, text: &str) -> Result<()> {
    let mut cursor = Cursor::new(text);
    let channel = if cursor.eat('#') {
        let list = cursor.rest();
        let parts = split_top_level(list, ',');
        let number = eval::numeric(ctx, parts[0])?;
        cursor = Cursor::new(&list[parts[0].len()..]);
        cursor.expect(',')?;
        Some(number as u32)
    } else {
        None
    };
    let mut s = String::new();
    for part in split_top_level(cursor.rest(), ',') {
        let x = name(part)?;
        s.push_str(&ctx.var.matrix(&x)?.to_string());
        s.push('\n');
    }
    match channel {
        Some(number) => ctx.channels.write(number, &s),
        None => {
            ctx.print(&s);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn ctx() -> Context {
        let mut ctx = Context::default();
        ctx.var
            .store_matrix("A", Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap())
            .unwrap();
        ctx.var
            .store_matrix("B", Matrix::from_rows(&[vec![5.0], vec![6.0]]).unwrap())
            .unwrap();
        ctx
    }

    fn show(ctx: &Context, name: &str) -> String {
        ctx.var.matrix(name).unwrap().to_string()
    }

    #[test]
    fn test_arithmetic_forms() {
        let mut c = ctx();
        execute(&mut c, "X = A + A").unwrap();
        assert_eq!(show(&c, "X"), "{{2,4},{6,8}}");
        execute(&mut c, "X = 12 / A").unwrap();
        assert_eq!(show(&c, "X"), "{{12,6},{4,3}}");
        execute(&mut c, "X = A - 1").unwrap();
        assert_eq!(show(&c, "X"), "{{0,1},{2,3}}");
        execute(&mut c, "X = -1 * A").unwrap();
        assert_eq!(show(&c, "X"), "{{-1,-2},{-3,-4}}");
        execute(&mut c, "Y = X").unwrap();
        assert_eq!(show(&c, "Y"), "{{-1,-2},{-3,-4}}");
    }

    #[test]
    fn test_named_forms() {
        let mut c = ctx();
        execute(&mut c, "MULT X = A * B").unwrap();
        assert_eq!(show(&c, "X"), "{{17},{39}}");
        execute(&mut c, "POWER X = A ^ 2").unwrap();
        assert_eq!(show(&c, "X"), "{{7,10},{15,22}}");
        execute(&mut c, "X = TRANSPOSE(A)").unwrap();
        assert_eq!(show(&c, "X"), "{{1,3},{2,4}}");
        execute(&mut c, "D = DETERMINANT(A)").unwrap();
        assert_eq!(c.var.numeric("D"), -2.0);
        execute(&mut c, "X = ZEROS(2, 3)").unwrap();
        assert_eq!(show(&c, "X"), "{{0,0,0},{0,0,0}}");
        execute(&mut c, "X = IDENTITY(2)").unwrap();
        assert_eq!(show(&c, "X"), "{{1,0},{0,1}}");
        execute(&mut c, "LU F = A").unwrap();
        assert_eq!(show(&c, "F_L"), "{{1,0},{3,1}}");
        assert_eq!(show(&c, "F_U"), "{{1,2},{0,-2}}");
    }

    #[test]
    fn test_failure_keeps_target() {
        let mut c = ctx();
        execute(&mut c, "X = ONES(2)").unwrap();
        let e = execute(&mut c, "MULT X = B * B").unwrap_err();
        assert!(e.is(ErrorCode::DimensionMismatch));
        assert_eq!(show(&c, "X"), "{1,1}");
        let e = execute(&mut c, "X = A / ZEROS(2, 2)").unwrap_err();
        assert!(e.is(ErrorCode::UnknownIdentifier));
        execute(&mut c, "Z = ZEROS(2, 2)").unwrap();
        let e = execute(&mut c, "X = A / Z").unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
        assert_eq!(show(&c, "X"), "{1,1}");
        let e = execute(&mut c, "X = INVERSE(Q)").unwrap_err();
        assert!(e.is(ErrorCode::UndefinedMatrix));
    }

    #[test]
    fn test_print() {
        let mut c = ctx();
        execute(&mut c, "PRINT A, B").unwrap();
        assert_eq!(c.take_output(), "{{1,2},{3,4}}\n{{5},{6}}\n");
    }

    #[test]
    fn test_binary_operator() {
        assert_eq!(binary_operator("A+B"), Some((1, Operator::Plus)));
        assert_eq!(binary_operator("-2 * A"), Some((3, Operator::Multiply)));
        assert_eq!(binary_operator("1E-3*A"), Some((4, Operator::Multiply)));
        assert_eq!(binary_operator("(1+2)/A"), Some((5, Operator::Divide)));
        assert_eq!(binary_operator("A"), None);
    }
}
