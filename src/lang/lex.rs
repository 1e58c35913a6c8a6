use super::{Error, LineNumber, Operator};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ## Character cursor
///
/// Walks the text of one statement. Every reader skips leading whitespace
/// and leaves the cursor on the first character it did not consume.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor { text, pos: 0 }
    }

    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.rest().chars().next() {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.text.len()
    }

    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    /// The character right after the next one, without skipping whitespace
    /// between them.
    pub fn peek_second(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().nth(1)
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(error!(SyntaxError; format!("EXPECTED {}", expected)))
        }
    }

    /// Fails unless only whitespace remains.
    pub fn finish(&mut self) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(error!(SyntaxError; format!("UNEXPECTED {}", self.rest().trim())))
        }
    }

    /// A cursor just past the parenthesis that closes the group starting
    /// here, without consuming anything.
    pub fn after_group(&mut self) -> Option<Cursor<'a>> {
        if self.peek() != Some('(') {
            return None;
        }
        let mut depth = 0i32;
        let mut quoted = false;
        for (index, ch) in self.rest().char_indices() {
            match ch {
                '"' => quoted = !quoted,
                '(' if !quoted => depth += 1,
                ')' if !quoted => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Cursor {
                            text: self.text,
                            pos: self.pos + index + 1,
                        });
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Consumes `word` when it appears next, ignoring case and not followed
    /// by another letter.
    pub fn keyword(&mut self, word: &str) -> bool {
        self.skip_whitespace();
        let rest = self.rest();
        if rest.len() < word.len() || !rest.is_char_boundary(word.len()) {
            return false;
        }
        if !rest[..word.len()].eq_ignore_ascii_case(word) {
            return false;
        }
        let boundary = match rest[word.len()..].chars().next() {
            Some(ch) => !(is_basic_alphabetic(ch) || ch == '_' || ch == '$'),
            None => true,
        };
        if boundary {
            self.pos += word.len();
        }
        boundary
    }

    /// Reads an identifier, uppercased. A trailing `$` is kept so callers
    /// can tell string names from numeric ones.
    pub fn identifier(&mut self) -> Option<String> {
        self.skip_whitespace();
        let rest = self.rest();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, ch)) if is_basic_alphabetic(ch) || ch == '_' => {}
            _ => return None,
        }
        let mut end = rest.len();
        for (index, ch) in chars {
            if !is_ident_char(ch) {
                end = index;
                break;
            }
        }
        let mut name = rest[..end].to_ascii_uppercase();
        if rest[end..].starts_with('$') {
            name.push('$');
            end += 1;
        }
        self.pos += end;
        Some(name)
    }

    /// Reads an unsigned numeric literal with optional fraction and exponent.
    pub fn number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut len = 0;
        let mut digits = 0;
        while len < bytes.len() && is_basic_digit(bytes[len] as char) {
            len += 1;
            digits += 1;
        }
        if len < bytes.len() && bytes[len] == b'.' {
            len += 1;
            while len < bytes.len() && is_basic_digit(bytes[len] as char) {
                len += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return None;
        }
        if len < bytes.len() && (bytes[len] == b'E' || bytes[len] == b'e') {
            let mut exp = len + 1;
            if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
                exp += 1;
            }
            if exp < bytes.len() && is_basic_digit(bytes[exp] as char) {
                while exp < bytes.len() && is_basic_digit(bytes[exp] as char) {
                    exp += 1;
                }
                len = exp;
            }
        }
        let value = rest[..len].parse::<f64>().ok()?;
        self.pos += len;
        Some(value)
    }

    pub fn line_number(&mut self) -> Option<LineNumber> {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.chars().take_while(|c| is_basic_digit(*c)).count();
        let value = rest[..len].parse::<LineNumber>().ok()?;
        self.pos += len;
        Some(value)
    }

    pub fn expect_line_number(&mut self) -> Result<LineNumber> {
        match self.line_number() {
            Some(line) => Ok(line),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    /// Reads a quoted literal. `Ok(None)` when the next character is not a
    /// quote.
    pub fn string_literal(&mut self) -> Result<Option<String>> {
        if self.peek() != Some('"') {
            return Ok(None);
        }
        let rest = &self.rest()[1..];
        match rest.find('"') {
            Some(end) => {
                self.pos += end + 2;
                Ok(Some(rest[..end].to_string()))
            }
            None => Err(error!(SyntaxError; "UNTERMINATED STRING")),
        }
    }

    pub fn relational(&mut self) -> Option<Operator> {
        self.skip_whitespace();
        let rest = self.rest();
        let (op, len) = if rest.starts_with("<>") || rest.starts_with("><") {
            (Operator::NotEqual, 2)
        } else if rest.starts_with("<=") || rest.starts_with("=<") {
            (Operator::LessEqual, 2)
        } else if rest.starts_with(">=") || rest.starts_with("=>") {
            (Operator::GreaterEqual, 2)
        } else if rest.starts_with('<') {
            (Operator::Less, 1)
        } else if rest.starts_with('>') {
            (Operator::Greater, 1)
        } else if rest.starts_with('=') {
            (Operator::Equal, 1)
        } else {
            return None;
        };
        self.pos += len;
        Some(op)
    }
}

/// Splits at `separator` where it is outside quotes and parentheses.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0i32;
    let mut quoted = false;
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth -= 1,
            c if c == separator && !quoted && depth == 0 => {
                parts.push(&text[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Byte offset of `word` as a whole word outside quotes and parentheses.
pub fn find_word(text: &str, word: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut quoted = false;
    let mut prev: Option<char> = None;
    for (index, ch) in text.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth -= 1,
            _ => {}
        }
        let starts_word = match prev {
            Some(p) => !is_ident_char(p) && p != '$',
            None => true,
        };
        prev = Some(ch);
        if quoted || depth != 0 || !starts_word {
            continue;
        }
        let rest = &text[index..];
        if rest.len() >= word.len()
            && rest.is_char_boundary(word.len())
            && rest[..word.len()].eq_ignore_ascii_case(word)
        {
            let ends_word = match rest[word.len()..].chars().next() {
                Some(next) => !(is_basic_alphabetic(next) || next == '_' || next == '$'),
                None => true,
            };
            if ends_word {
                return Some(index);
            }
        }
    }
    None
}
