/*!
## PRINT USING

A format line holds a template such as `"TOTAL ###.## FOR llllll"`. It is
compiled into fields once and then filled with the values of a PRINT USING
statement.

* A run of `#` with at most one `.` is a number, right aligned, with as many
  decimals as there are `#` after the point.
* A run of `l`, `r` or `c` is a string field of that width, aligned left,
  right or centered. Longer strings are cut to fit.
* `$` takes a single character of a string.
* Anything else is printed as it stands.

When the values outlast the fields, the template starts over. Output stops
at the first field with no value left.

*/

use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Literal(String),
    Number { width: usize, decimals: usize },
    Text { width: usize, align: Align },
    Char,
}

impl Field {
    fn takes_value(&self) -> bool {
        !matches!(self, Field::Literal(_))
    }
}

pub fn compile(template: &str) -> Vec<Field> {
    let chars: Vec<char> = template.chars().collect();
    let mut fields = vec![];
    let mut literal = String::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let starts_number =
            ch == '#' || (ch == '.' && chars.get(i + 1) == Some(&'#'));
        if starts_number {
            let start = i;
            let mut point = None;
            while i < chars.len() && (chars[i] == '#' || (chars[i] == '.' && point.is_none())) {
                if chars[i] == '.' {
                    point = Some(i);
                }
                i += 1;
            }
            let width = i - start;
            let decimals = point.map_or(0, |p| i - p - 1);
            push_literal(&mut fields, &mut literal);
            fields.push(Field::Number { width, decimals });
            continue;
        }
        if ch == '$' {
            push_literal(&mut fields, &mut literal);
            fields.push(Field::Char);
            i += 1;
            continue;
        }
        if ch.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let align = match chars[start] {
                'l' => Align::Left,
                'r' => Align::Right,
                _ => Align::Center,
            };
            if word.chars().all(|c| c == chars[start]) && "lrc".contains(chars[start]) {
                push_literal(&mut fields, &mut literal);
                fields.push(Field::Text {
                    width: word.len(),
                    align,
                });
            } else {
                literal.push_str(&word);
            }
            continue;
        }
        literal.push(ch);
        i += 1;
    }
    push_literal(&mut fields, &mut literal);
    fields
}

fn push_literal(fields: &mut Vec<Field>, literal: &mut String) {
    if !literal.is_empty() {
        fields.push(Field::Literal(std::mem::take(literal)));
    }
}

pub fn apply(fields: &[Field], values: &[Val]) -> Result<String> {
    if !values.is_empty() && !fields.iter().any(Field::takes_value) {
        return Err(error!(IllegalFunctionCall; "FORMAT HAS NO FIELDS"));
    }
    let mut s = String::new();
    let mut values = values.iter().peekable();
    loop {
        for field in fields {
            if field.takes_value() && values.peek().is_none() {
                return Ok(s);
            }
            match field {
                Field::Literal(text) => s.push_str(text),
                Field::Number { width, decimals } => {
                    if let Some(val) = values.next() {
                        s.push_str(&number(val.number()?, *width, *decimals));
                    }
                }
                Field::Text { width, align } => {
                    if let Some(val) = values.next() {
                        s.push_str(&text(&val.to_string(), *width, *align));
                    }
                }
                Field::Char => {
                    if let Some(val) = values.next() {
                        s.push(val.to_string().chars().next().unwrap_or(' '));
                    }
                }
            }
        }
        if values.peek().is_none() {
            return Ok(s);
        }
    }
}

/// A number that does not fit its field prints as `*` characters.
fn number(n: f64, width: usize, decimals: usize) -> String {
    let s = format!("{:>width$.decimals$}", n, width = width, decimals = decimals);
    if s.len() > width {
        "*".repeat(width)
    } else {
        s
    }
}

fn text(s: &str, width: usize, align: Align) -> String {
    let s: String = s.chars().take(width).collect();
    let pad = width - s.chars().count();
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), s),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        assert_eq!(
            compile("X=##.# lll $"),
            vec![
                Field::Literal("X=".into()),
                Field::Number {
                    width: 4,
                    decimals: 1
                },
                Field::Literal(" ".into()),
                Field::Text {
                    width: 3,
                    align: Align::Left
                },
                Field::Literal(" ".into()),
                Field::Char,
            ]
        );
        assert_eq!(compile("call"), vec![Field::Literal("call".into())]);
    }

    #[test]
    fn test_numbers() {
        let f = compile("[###.##]");
        assert_eq!(apply(&f, &[Val::Number(3.14159)]).unwrap(), "[  3.14]");
        assert_eq!(apply(&f, &[Val::Number(12345.0)]).unwrap(), "[******]");
        let f = compile("##");
        assert_eq!(apply(&f, &[Val::Number(7.0)]).unwrap(), " 7");
        assert!(apply(&f, &[Val::from("x")]).is_err());
    }

    #[test]
    fn test_text() {
        let f = compile("<lllll|rrrrr|ccccc>");
        let v = [Val::from("ab"), Val::from("ab"), Val::from("ab")];
        assert_eq!(apply(&f, &v).unwrap(), "<ab   |   ab| ab  >");
        let f = compile("ccc $");
        assert_eq!(apply(&f, &[Val::from("abcdef"), Val::from("xyz")]).unwrap(), "abc x");
    }

    #[test]
    fn test_repeat_and_stop() {
        let f = compile("# ");
        let v = [Val::Number(1.0), Val::Number(2.0), Val::Number(3.0)];
        assert_eq!(apply(&f, &v).unwrap(), "1 2 3 ");
        let f = compile("A=# B=#");
        assert_eq!(apply(&f, &[Val::Number(1.0)]).unwrap(), "A=1 B=");
        assert!(apply(&compile("none"), &[Val::Number(1.0)]).is_err());
    }
}
