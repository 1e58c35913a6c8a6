use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Scalar values
///
/// What a variable, a matrix element, or a DATA item holds.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    Text(Rc<str>),
}

/// Which of the two parallel tables a variable or matrix lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Numeric,
    Text,
}

impl Kind {
    /// Names ending in `$` are strings.
    pub fn of(name: &str) -> Kind {
        if name.ends_with('$') {
            Kind::Text
        } else {
            Kind::Numeric
        }
    }

    pub fn default_val(self) -> Val {
        match self {
            Kind::Numeric => Val::Number(0.0),
            Kind::Text => Val::Text("".into()),
        }
    }
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Number(_) => Kind::Numeric,
            Val::Text(_) => Kind::Text,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            Val::Number(n) => *n == 0.0,
            Val::Text(s) => s.is_empty(),
        }
    }

    pub fn number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::Text(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn text(&self) -> Result<Rc<str>> {
        match self {
            Val::Text(s) => Ok(s.clone()),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", format_number(*n)),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Numbers print with at most six significant digits. Whole numbers print
/// without a decimal point.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NAN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let exponent = n.abs().log10().floor() as i32;
    if !(-5..15).contains(&exponent) {
        let s = format!("{:.5e}", n);
        let (mantissa, exp) = match s.split_once('e') {
            Some(parts) => parts,
            None => return s,
        };
        let mantissa = trim_fraction(mantissa);
        return format!("{}E{}", mantissa, exp);
    }
    if n.fract() == 0.0 && exponent < 15 {
        return format!("{}", n as i64);
    }
    let decimals = (5 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, n)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::Text(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::Text(s.into())
    }
}
