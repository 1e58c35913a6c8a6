use super::{find_word, Cursor, Error, LineNumber, Word};
use crate::error;
use std::collections::HashMap;

/// ## Program line
///
/// A line as typed or loaded: an optional leading number and the trimmed
/// statement text after it.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(&['\r', '\n'][..]).trim();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Ok(Line {
                number: None,
                text: s.to_string(),
            });
        }
        match s[..digits].parse::<LineNumber>() {
            Ok(number) => Ok(Line {
                number: Some(number),
                text: s[digits..].trim().to_string(),
            }),
            Err(_) => Err(error!(Overflow; "INVALID LINE NUMBER")),
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rewrites every line reference through `changes`. References are the
    /// numbers after GOTO, GOSUB, THEN, ELSE and USING, including the lists
    /// of ON statements.
    pub fn renum(&self, changes: &HashMap<LineNumber, LineNumber>) -> Line {
        let number = self.number.map(|n| *changes.get(&n).unwrap_or(&n));
        let text = map_references(&self.text, &mut |n| *changes.get(&n).unwrap_or(&n));
        Line { number, text }
    }

    /// Line numbers this line refers to, in order.
    pub fn references(&self) -> Vec<LineNumber> {
        references(&self.text)
    }
}

/// Line numbers a statement refers to, in order.
pub fn references(text: &str) -> Vec<LineNumber> {
    let mut found = vec![];
    map_references(text, &mut |n| {
        found.push(n);
        n
    });
    found
}

fn map_references(text: &str, f: &mut dyn FnMut(LineNumber) -> LineNumber) -> String {
    match Word::classify(text) {
        Some((Word::Rem, _)) | Some((Word::Data, _)) | Some((Word::Format, _)) => {
            text.to_string()
        }
        _ => scan_references(text, f),
    }
}

const REFERENCE_WORDS: [&str; 6] = ["GOTO", "GOSUB", "THEN", "ELSE", "USING", "GO TO"];

fn scan_references(text: &str, f: &mut dyn FnMut(LineNumber) -> LineNumber) -> String {
    let mut out = String::new();
    let mut rest = text;
    loop {
        let next = REFERENCE_WORDS
            .iter()
            .filter_map(|word| find_word(rest, word).map(|at| (at, word.len())))
            .min();
        let (at, len) = match next {
            Some(found) => found,
            None => break,
        };
        out.push_str(&rest[..at + len]);
        rest = &rest[at + len..];
        loop {
            let mut cursor = Cursor::new(rest);
            let before = rest.len() - rest.trim_start().len();
            match cursor.line_number() {
                Some(line) => {
                    let consumed = cursor.mark();
                    out.push_str(&rest[..before]);
                    out.push_str(&f(line).to_string());
                    rest = &rest[consumed..];
                }
                None => break,
            }
            let mut cursor = Cursor::new(rest);
            if cursor.eat(',') && cursor.line_number().is_some() {
                let comma = rest.find(',').map(|c| c + 1).unwrap_or(0);
                out.push_str(&rest[..comma]);
                rest = &rest[comma..];
            } else {
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_number() {
        let l = Line::new(" 100   print \"hi\"  \r\n").unwrap();
        assert_eq!(l.number(), Some(100));
        assert_eq!(l.text(), "print \"hi\"");
        assert_eq!(l.to_string(), "100 print \"hi\"");
    }

    #[test]
    fn test_direct() {
        let l = Line::new("RUN").unwrap();
        assert!(l.is_direct());
    }

    #[test]
    fn test_renum_references() {
        let mut changes = HashMap::new();
        changes.insert(10, 100);
        changes.insert(20, 200);
        let l = Line::new("30 ON X GOTO 10, 20,99").unwrap();
        assert_eq!(l.renum(&changes).to_string(), "30 ON X GOTO 100, 200,99");
        let l = Line::new("20 IF A THEN 10 ELSE 20").unwrap();
        assert_eq!(l.renum(&changes).to_string(), "200 IF A THEN 100 ELSE 200");
        assert_eq!(l.references(), vec![10, 20]);
        let l = Line::new("40 PRINT \"GOTO 10\"").unwrap();
        assert_eq!(l.renum(&changes).to_string(), "40 PRINT \"GOTO 10\"");
    }
}
