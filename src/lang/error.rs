use super::LineNumber;
use std::borrow::Cow;

/// ## Interpreter errors
///
/// Every failure surfaced by the interpreter is one of these. The `code`
/// follows the classic BASIC numbering so programs and users see familiar
/// names. Build them with the `error!` macro.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    /// Attaches a line number unless one is already known.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    Break = 17,
    UndefinedUserFunction = 18,
    WhileWithoutWend = 29,
    WendWithoutWhile = 30,
    UntilWithoutRepeat = 31,
    UnknownIdentifier = 32,
    UndefinedMatrix = 33,
    DimensionMismatch = 34,
    SingularMatrix = 35,
    InternalError = 51,
    BadFileNumber = 52,
    FileNotFound = 53,
    BadFileMode = 54,
    InputPastEnd = 62,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            4 => "OUT OF DATA",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            8 => "UNDEFINED LINE",
            9 => "SUBSCRIPT OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            17 => "BREAK",
            18 => "UNDEFINED USER FUNCTION",
            29 => "WHILE WITHOUT WEND",
            30 => "WEND WITHOUT WHILE",
            31 => "UNTIL WITHOUT REPEAT",
            32 => "UNKNOWN IDENTIFIER",
            33 => "UNDEFINED MATRIX",
            34 => "DIMENSION MISMATCH",
            35 => "SINGULAR MATRIX",
            51 => "INTERNAL ERROR",
            52 => "BAD FILE NUMBER",
            53 => "FILE NOT FOUND",
            54 => "BAD FILE MODE",
            62 => "INPUT PAST END",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if self.line_number.is_none() && !self.message.is_empty() {
            write!(f, "{}; {}", code_str, self.message)
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_display_with_line_and_message() {
        let e = error!(SingularMatrix, 40; "INVERSE OF A");
        assert_eq!(e.to_string(), "SINGULAR MATRIX IN 40; INVERSE OF A");
    }

    #[test]
    fn test_display_without_line() {
        assert_eq!(error!(Overflow).to_string(), "OVERFLOW");
        assert_eq!(
            error!(FileNotFound; "nope.bas").to_string(),
            "FILE NOT FOUND; nope.bas"
        );
    }

    #[test]
    fn test_line_number_is_kept() {
        let e = error!(TypeMismatch, 10).in_line_number(20);
        assert_eq!(e.line_number(), Some(10));
        assert!(e.is(ErrorCode::TypeMismatch));
    }
}
