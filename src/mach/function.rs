use crate::error;
use crate::lang::Error;
use rand::Rng;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// Numeric built-ins with only numeric arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Acs,
    Asn,
    Atn,
    Ceil,
    Cos,
    Cot,
    Csc,
    Deg2Rad,
    Exp,
    Floor,
    Int,
    Log,
    Log10,
    LogX,
    Pow,
    Rad2Deg,
    Rnd,
    Round,
    Sec,
    Sin,
    Sqr,
    Tan,
}

/// Numeric built-ins taking one string argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextToNumber {
    Ascii,
    Value,
}

/// Numeric built-ins taking the name of a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    Det,
    Rank,
    Trace,
}

/// String built-ins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Text {
    Chr,
    Date,
    Left,
    Len,
    Mid,
    Right,
    String,
    Time,
}

/// ## Built-in functions
///
/// Name lookup is by the uppercased identifier. Each lookup also yields the
/// accepted argument count.

pub struct Function {}

impl Function {
    pub fn numeric(name: &str) -> Option<(Numeric, RangeInclusive<usize>)> {
        use Numeric::*;
        Some(match name {
            "ACS" => (Acs, 1..=1),
            "ASN" => (Asn, 1..=1),
            "ATN" => (Atn, 1..=1),
            "CEIL" => (Ceil, 1..=1),
            "CLOG" | "LOG10" => (Log10, 1..=1),
            "COS" => (Cos, 1..=1),
            "COT" => (Cot, 1..=1),
            "CSC" => (Csc, 1..=1),
            "DEG2RAD" => (Deg2Rad, 1..=1),
            "EXP" => (Exp, 1..=1),
            "FLOOR" => (Floor, 1..=1),
            "INT" => (Int, 1..=1),
            "LOG" => (Log, 1..=1),
            "LOGX" => (LogX, 2..=2),
            "POW" => (Pow, 2..=2),
            "RAD2DEG" => (Rad2Deg, 1..=1),
            "RND" => (Rnd, 0..=1),
            "ROUND" => (Round, 1..=1),
            "SEC" => (Sec, 1..=1),
            "SIN" => (Sin, 1..=1),
            "SQR" => (Sqr, 1..=1),
            "TAN" => (Tan, 1..=1),
            _ => return None,
        })
    }

    pub fn text_to_number(name: &str) -> Option<TextToNumber> {
        match name {
            "ASCII" => Some(TextToNumber::Ascii),
            "VALUE" => Some(TextToNumber::Value),
            _ => None,
        }
    }

    pub fn reduction(name: &str) -> Option<Reduction> {
        match name {
            "DET" => Some(Reduction::Det),
            "RANK" => Some(Reduction::Rank),
            "TRACE" => Some(Reduction::Trace),
            _ => None,
        }
    }

    pub fn text(name: &str) -> Option<(Text, RangeInclusive<usize>)> {
        use self::Text::*;
        Some(match name {
            "CHR$" => (Chr, 1..=1),
            "DATE$" => (Date, 0..=0),
            "LEFT$" => (Left, 2..=2),
            "LEN$" => (Len, 1..=1),
            "MID$" => (Mid, 2..=3),
            "RIGHT$" => (Right, 2..=2),
            "STRING$" => (String, 1..=2),
            "TIME$" => (Time, 0..=0),
            _ => return None,
        })
    }

    /// True for any built-in name, used by the syntax checker.
    pub fn is_builtin(name: &str) -> bool {
        Function::numeric(name).is_some()
            || Function::text_to_number(name).is_some()
            || Function::reduction(name).is_some()
            || Function::text(name).is_some()
    }

    pub fn call_numeric<R: Rng>(func: Numeric, args: &[f64], rng: &mut R) -> Result<f64> {
        use Numeric::*;
        let x = args.first().copied().unwrap_or(0.0);
        let y = args.get(1).copied().unwrap_or(0.0);
        let value = match func {
            Acs => x.acos(),
            Asn => x.asin(),
            Atn => x.atan(),
            Ceil => x.ceil(),
            Cos => x.cos(),
            Cot => 1.0 / x.tan(),
            Csc => 1.0 / x.sin(),
            Deg2Rad => x.to_radians(),
            Exp => x.exp(),
            Floor | Int => x.floor(),
            Log => {
                if x <= 0.0 {
                    return Err(error!(IllegalFunctionCall; "LOG OF NON-POSITIVE NUMBER"));
                }
                x.ln()
            }
            Log10 => {
                if x <= 0.0 {
                    return Err(error!(IllegalFunctionCall; "LOG OF NON-POSITIVE NUMBER"));
                }
                x.log10()
            }
            LogX => {
                if x <= 0.0 || x == 1.0 || y <= 0.0 {
                    return Err(error!(IllegalFunctionCall; "LOGX DOMAIN"));
                }
                y.ln() / x.ln()
            }
            Pow => x.powf(y),
            Rad2Deg => x.to_degrees(),
            Rnd => rng.gen::<f64>(),
            Round => (x + 0.5).floor(),
            Sec => 1.0 / x.cos(),
            Sin => x.sin(),
            Sqr => {
                if x < 0.0 {
                    return Err(error!(IllegalFunctionCall; "SQUARE ROOT OF NEGATIVE NUMBER"));
                }
                x.sqrt()
            }
            Tan => x.tan(),
        };
        Ok(value)
    }

    pub fn call_text_to_number(func: TextToNumber, arg: &str) -> Result<f64> {
        match func {
            TextToNumber::Ascii => Ok(arg.chars().next().map(|c| c as u32 as f64).unwrap_or(0.0)),
            TextToNumber::Value => match arg.trim().parse::<f64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; format!("NOT A NUMBER: {}", arg))),
            },
        }
    }

    pub fn left(s: &str, n: f64) -> String {
        let n = n.max(0.0) as usize;
        s.chars().take(n).collect()
    }

    pub fn right(s: &str, n: f64) -> String {
        let n = n.max(0.0) as usize;
        let len = s.chars().count();
        s.chars().skip(len.saturating_sub(n)).collect()
    }

    /// `start` is 1-based. Out of range starts clamp to the ends.
    pub fn mid(s: &str, start: f64, len: Option<f64>) -> String {
        let count = s.chars().count();
        let start = (start.max(1.0) as usize - 1).min(count);
        let len = match len {
            Some(len) => len.max(0.0) as usize,
            None => count,
        };
        s.chars().skip(start).take(len).collect()
    }

    pub fn chr(code: f64) -> Result<String> {
        match std::char::from_u32(code as u32) {
            Some(ch) if code >= 0.0 => Ok(ch.to_string()),
            _ => Err(error!(IllegalFunctionCall; "BAD CHARACTER CODE")),
        }
    }

    pub fn string(count: f64, fill: &str) -> Result<String> {
        if count < 0.0 {
            return Err(error!(IllegalFunctionCall; "NEGATIVE COUNT"));
        }
        let fill = fill.chars().next().unwrap_or(' ');
        Ok(std::iter::repeat(fill).take(count as usize).collect())
    }

    pub fn time() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }

    pub fn date() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }
}
