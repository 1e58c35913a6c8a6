use super::function::{Numeric, Reduction, Text};
use super::{linalg, matrix, Context, Function, Kind, Val};
use crate::error;
use crate::lang::{Cursor, Error, ErrorCode, Operator};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Evaluates a whole numeric expression.
pub fn numeric(ctx: &mut Context, text: &str) -> Result<f64> {
    let mut eval = Eval::new(ctx, text);
    let value = eval.expr()?;
    eval.cursor.finish()?;
    Ok(value)
}

/// Evaluates a whole string expression.
pub fn string(ctx: &mut Context, text: &str) -> Result<Rc<str>> {
    let mut eval = Eval::new(ctx, text);
    let value = eval.string_expr()?;
    eval.cursor.finish()?;
    Ok(value)
}

/// Evaluates either kind, deciding by how the expression starts.
pub fn value(ctx: &mut Context, text: &str) -> Result<Val> {
    let mut eval = Eval::new(ctx, text);
    let value = if eval.starts_string() {
        Val::Text(eval.string_expr()?)
    } else {
        Val::Number(eval.expr()?)
    };
    eval.cursor.finish()?;
    Ok(value)
}

/// Evaluates a condition: comparisons joined by AND, OR and NOT. A bare
/// numeric expression is true when non-zero.
pub fn condition(ctx: &mut Context, text: &str) -> Result<bool> {
    let mut eval = Eval::new(ctx, text);
    let value = eval.condition()?;
    eval.cursor.finish()?;
    Ok(value)
}

/// Something a value can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Scalar(String),
    Element(String, Vec<usize>),
}

impl Target {
    pub fn name(&self) -> &str {
        match self {
            Target::Scalar(name) | Target::Element(name, _) => name,
        }
    }

    pub fn kind(&self) -> Kind {
        Kind::of(self.name())
    }
}

/// Parses `NAME`, `NAME$`, or `NAME(i, j)` with evaluated subscripts.
pub fn target(ctx: &mut Context, text: &str) -> Result<Target> {
    let mut eval = Eval::new(ctx, text);
    let name = match eval.cursor.identifier() {
        Some(name) => name,
        None => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
    };
    let target = if eval.cursor.peek() == Some('(') {
        Target::Element(name, eval.subscripts()?)
    } else {
        Target::Scalar(name)
    };
    eval.cursor.finish()?;
    Ok(target)
}

fn subscript(n: f64) -> Result<usize> {
    if n.is_finite() && n >= 0.0 {
        Ok(n as usize)
    } else {
        Err(error!(SubscriptOutOfRange; "NEGATIVE SUBSCRIPT"))
    }
}

/// ## Expression evaluator
///
/// Recursive descent over a character cursor.
///
/// ```text
/// expr   := term {('+'|'-') term}
/// term   := factor {('*'|'/') factor}
/// factor := '-' factor | number | '(' expr ')' | name ['(' args ')']
/// string := item {'+' item}
/// item   := '"' text '"' | name$ ['(' args ')']
/// ```

pub struct Eval<'c, 't> {
    ctx: &'c mut Context,
    cursor: Cursor<'t>,
    local: Option<(String, f64)>,
    depth: usize,
}

impl<'c, 't> Eval<'c, 't> {
    pub fn new(ctx: &'c mut Context, text: &'t str) -> Eval<'c, 't> {
        Eval {
            ctx,
            cursor: Cursor::new(text),
            local: None,
            depth: 0,
        }
    }

    fn starts_string(&mut self) -> bool {
        match self.cursor.peek() {
            Some('"') => true,
            Some(_) => {
                let mark = self.cursor.mark();
                let name = self.cursor.identifier();
                self.cursor.reset(mark);
                matches!(name, Some(name) if name.ends_with('$'))
            }
            None => false,
        }
    }

    pub fn expr(&mut self) -> Result<f64> {
        let mut lhs = self.term()?;
        loop {
            if self.cursor.eat('+') {
                lhs += self.term()?;
            } else if self.cursor.eat('-') {
                lhs -= self.term()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut lhs = self.factor()?;
        loop {
            if self.cursor.eat('*') {
                lhs *= self.factor()?;
            } else if self.cursor.eat('/') {
                let rhs = self.factor()?;
                if rhs == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                lhs /= rhs;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn factor(&mut self) -> Result<f64> {
        if self.cursor.eat('-') {
            return Ok(-self.factor()?);
        }
        match self.cursor.peek() {
            Some('(') => {
                self.cursor.next_char();
                let value = self.expr()?;
                self.cursor.expect(')')?;
                Ok(value)
            }
            Some('"') => Err(error!(TypeMismatch; "STRING IN NUMERIC EXPRESSION")),
            Some(ch) if ch.is_ascii_digit() || ch == '.' => match self.cursor.number() {
                Some(n) => Ok(n),
                None => Err(error!(SyntaxError; "BAD NUMBER")),
            },
            Some(_) => match self.cursor.identifier() {
                Some(name) => self.numeric_name(name),
                None => Err(error!(SyntaxError; format!("UNEXPECTED {}", self.cursor.rest()))),
            },
            None => Err(error!(SyntaxError; "MISSING OPERAND")),
        }
    }

    fn numeric_name(&mut self, name: String) -> Result<f64> {
        if name.ends_with('$') {
            return Err(error!(TypeMismatch; format!("{} IS A STRING", name)));
        }
        if self.cursor.peek() != Some('(') {
            return self.numeric_variable(&name);
        }
        if let Some(reduction) = Function::reduction(&name) {
            return self.reduction(reduction);
        }
        if let Some((func, arity)) = Function::numeric(&name) {
            let args = self.numeric_args()?;
            if !arity.contains(&args.len()) {
                return Err(error!(IllegalFunctionCall; format!("WRONG NUMBER OF ARGUMENTS TO {}", name)));
            }
            return Function::call_numeric(func, &args, &mut self.ctx.rng);
        }
        if let Some(func) = Function::text_to_number(&name) {
            self.cursor.expect('(')?;
            let arg = self.string_expr()?;
            self.cursor.expect(')')?;
            return Function::call_text_to_number(func, &arg);
        }
        if let Some(fn_name) = name.strip_prefix("FN") {
            if let Some(function) = self.ctx.var.function(fn_name).cloned() {
                let args = self.numeric_args()?;
                if args.len() != 1 {
                    return Err(error!(IllegalFunctionCall; format!("{} TAKES ONE ARGUMENT", name)));
                }
                if self.depth >= self.ctx.config.stack_limit {
                    return Err(error!(Overflow; "USER FUNCTIONS NESTED TOO DEEPLY"));
                }
                let mut inner = Eval {
                    ctx: &mut *self.ctx,
                    cursor: Cursor::new(&function.body),
                    local: Some((function.parameter.clone(), args[0])),
                    depth: self.depth + 1,
                };
                let value = inner.expr()?;
                inner.cursor.finish()?;
                return Ok(value);
            }
        }
        if self.ctx.var.has_matrix(&name) {
            let index = self.subscripts()?;
            return self.element(&name, &index)?.number();
        }
        if name.starts_with("FN") {
            return Err(error!(UndefinedUserFunction; name));
        }
        Err(error!(UnknownIdentifier; format!("UNKNOWN FUNCTION {}", name)))
    }

    fn numeric_variable(&mut self, name: &str) -> Result<f64> {
        if let Some((param, value)) = &self.local {
            if param == name {
                return Ok(*value);
            }
        }
        if let Some(value) = self.ctx.var.lookup_numeric(name) {
            return Ok(value);
        }
        if let Some(text) = self.ctx.var.lookup_string(name) {
            return match text.trim().parse::<f64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; format!("{}$ IS NOT A NUMBER", name))),
            };
        }
        if name == "RND" {
            return Function::call_numeric(Numeric::Rnd, &[], &mut self.ctx.rng);
        }
        Err(error!(UnknownIdentifier; name.to_string()))
    }

    fn reduction(&mut self, reduction: Reduction) -> Result<f64> {
        self.cursor.expect('(')?;
        let name = match self.cursor.identifier() {
            Some(name) => name,
            None => return Err(error!(SyntaxError; "EXPECTED MATRIX NAME")),
        };
        self.cursor.expect(')')?;
        let matrix = self.ctx.var.matrix(&name)?;
        match reduction {
            Reduction::Det => linalg::determinant(matrix),
            Reduction::Rank => linalg::rank(matrix).map(|r| r as f64),
            Reduction::Trace => linalg::trace(matrix),
        }
    }

    /// Reads an element; out of range subscripts are reported and read as the
    /// default value.
    fn element(&mut self, name: &str, index: &[usize]) -> Result<Val> {
        match self.ctx.var.element(name, index) {
            Ok(val) => Ok(val),
            Err(e) if e.is(ErrorCode::SubscriptOutOfRange) => {
                self.ctx.report(e.message(matrix::subscript(name, index)));
                Ok(Kind::of(name).default_val())
            }
            Err(e) => Err(e),
        }
    }

    fn numeric_args(&mut self) -> Result<Vec<f64>> {
        self.cursor.expect('(')?;
        let mut args = vec![];
        if self.cursor.eat(')') {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if self.cursor.eat(',') {
                continue;
            }
            self.cursor.expect(')')?;
            return Ok(args);
        }
    }

    /// `(i, j, ...)` as matrix indices.
    pub fn subscripts(&mut self) -> Result<Vec<usize>> {
        self.numeric_args()?.into_iter().map(subscript).collect()
    }

    pub fn string_expr(&mut self) -> Result<Rc<str>> {
        let first = self.string_item()?;
        if self.cursor.peek() != Some('+') {
            return Ok(first);
        }
        let mut s = first.to_string();
        while self.cursor.eat('+') {
            s.push_str(&self.string_item()?);
        }
        Ok(s.into())
    }

    fn string_item(&mut self) -> Result<Rc<str>> {
        if let Some(literal) = self.cursor.string_literal()? {
            return Ok(literal.into());
        }
        match self.cursor.peek() {
            Some('(') => {
                self.cursor.next_char();
                let value = self.string_expr()?;
                self.cursor.expect(')')?;
                return Ok(value);
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' || ch == '-' => {
                return Err(error!(TypeMismatch; "NUMBER IN STRING EXPRESSION"));
            }
            _ => {}
        }
        let name = match self.cursor.identifier() {
            Some(name) => name,
            None if self.cursor.at_end() => {
                return Err(error!(SyntaxError; "MISSING OPERAND"));
            }
            None => {
                return Err(error!(SyntaxError; format!("UNEXPECTED {}", self.cursor.rest())));
            }
        };
        if !name.ends_with('$') {
            return Err(error!(TypeMismatch; format!("{} IS NOT A STRING", name)));
        }
        if let Some((func, arity)) = Function::text(&name) {
            if self.cursor.peek() == Some('(') || *arity.start() > 0 {
                return self.text_function(&name, func);
            }
            return self.text_function_call(func, vec![]);
        }
        if self.cursor.peek() == Some('(') {
            if self.ctx.var.has_matrix(&name) {
                let index = self.subscripts()?;
                return self.element(&name, &index)?.text();
            }
            return Err(error!(UnknownIdentifier; format!("UNKNOWN FUNCTION {}", name)));
        }
        Ok(self.ctx.var.string(&name))
    }

    fn text_function(&mut self, name: &str, func: Text) -> Result<Rc<str>> {
        use Text::*;
        let kinds: &[Kind] = match func {
            Chr => &[Kind::Numeric],
            Date | Time => &[],
            Left | Right => &[Kind::Text, Kind::Numeric],
            Len => &[Kind::Text],
            Mid => &[Kind::Text, Kind::Numeric, Kind::Numeric],
            String => &[Kind::Numeric, Kind::Text],
        };
        let mut args = vec![];
        self.cursor.expect('(')?;
        if !self.cursor.eat(')') {
            loop {
                match kinds.get(args.len()) {
                    Some(Kind::Numeric) => args.push(Val::Number(self.expr()?)),
                    Some(Kind::Text) => args.push(Val::Text(self.string_expr()?)),
                    None => {
                        return Err(error!(IllegalFunctionCall; format!("TOO MANY ARGUMENTS TO {}", name)))
                    }
                }
                if self.cursor.eat(',') {
                    continue;
                }
                self.cursor.expect(')')?;
                break;
            }
        }
        if let Some((_, arity)) = Function::text(name) {
            if !arity.contains(&args.len()) {
                return Err(error!(IllegalFunctionCall; format!("WRONG NUMBER OF ARGUMENTS TO {}", name)));
            }
        }
        self.text_function_call(func, args)
    }

    fn text_function_call(&mut self, func: Text, args: Vec<Val>) -> Result<Rc<str>> {
        use Text::*;
        let text = |i: usize| -> Result<Rc<str>> {
            match args.get(i) {
                Some(val) => val.text(),
                None => Ok("".into()),
            }
        };
        let number = |i: usize| -> Result<Option<f64>> {
            match args.get(i) {
                Some(val) => val.number().map(Some),
                None => Ok(None),
            }
        };
        let s: std::string::String = match func {
            Chr => Function::chr(number(0)?.unwrap_or(0.0))?,
            Date => Function::date(),
            Left => Function::left(&text(0)?, number(1)?.unwrap_or(0.0)),
            Len => text(0)?.chars().count().to_string(),
            Mid => Function::mid(&text(0)?, number(1)?.unwrap_or(1.0), number(2)?),
            Right => Function::right(&text(0)?, number(1)?.unwrap_or(0.0)),
            String => {
                let fill = match args.get(1) {
                    Some(_) => text(1)?,
                    None => " ".into(),
                };
                Function::string(number(0)?.unwrap_or(0.0), &fill)?
            }
            Time => Function::time(),
        };
        Ok(s.into())
    }

    fn condition(&mut self) -> Result<bool> {
        let mut lhs = self.conjunction()?;
        while self.cursor.keyword("OR") {
            let rhs = self.conjunction()?;
            lhs = lhs || rhs;
        }
        Ok(lhs)
    }

    fn conjunction(&mut self) -> Result<bool> {
        let mut lhs = self.negation()?;
        while self.cursor.keyword("AND") {
            let rhs = self.negation()?;
            lhs = lhs && rhs;
        }
        Ok(lhs)
    }

    fn negation(&mut self) -> Result<bool> {
        if self.cursor.keyword("NOT") {
            return Ok(!self.negation()?);
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<bool> {
        if let Some(mut after) = self.cursor.after_group() {
            if closes_condition(&mut after) {
                self.cursor.next_char();
                let value = self.condition()?;
                self.cursor.expect(')')?;
                return Ok(value);
            }
        }
        if self.starts_string() {
            let lhs = self.string_expr()?;
            let op = match self.cursor.relational() {
                Some(op) => op,
                None => return Err(error!(TypeMismatch; "STRING USED AS CONDITION")),
            };
            let rhs = self.string_expr()?;
            return Ok(op.compare(&lhs, &rhs));
        }
        let lhs = self.expr()?;
        match self.cursor.relational() {
            Some(op) => {
                let rhs = self.expr()?;
                Ok(op.compare(&lhs, &rhs))
            }
            None => Ok(lhs != 0.0),
        }
    }
}

/// A parenthesised group is a whole condition when nothing but the end of
/// the condition, a closing parenthesis or AND/OR follows it.
fn closes_condition(after: &mut Cursor) -> bool {
    after.at_end() || after.peek() == Some(')') || after.keyword("AND") || after.keyword("OR")
}

impl Operator {
    /// Applies an arithmetic operator. Division by zero fails.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Plus => Ok(lhs + rhs),
            Operator::Minus => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(lhs / rhs)
                }
            }
            _ => Err(error!(InternalError; format!("{} IS NOT ARITHMETIC", self))),
        }
    }
}
