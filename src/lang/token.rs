use super::Cursor;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
    static STRING_TO_COMMAND: HashMap<&'static str, Command> =
        Command::ALL.iter().map(|c| (c.as_str(), *c)).collect();
);

/// ## Statement keywords
///
/// The closed set of statement kinds the dispatcher knows how to run.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Beep,
    Close,
    Data,
    Def,
    Dim,
    End,
    For,
    Format,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Mat,
    Next,
    On,
    Open,
    Print,
    Read,
    Rem,
    Repeat,
    Restore,
    Return,
    Seed,
    Stop,
    Until,
    Wend,
    While,
}

impl Word {
    pub const ALL: [Word; 28] = [
        Word::Beep,
        Word::Close,
        Word::Data,
        Word::Def,
        Word::Dim,
        Word::End,
        Word::For,
        Word::Format,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::Mat,
        Word::Next,
        Word::On,
        Word::Open,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Repeat,
        Word::Restore,
        Word::Return,
        Word::Seed,
        Word::Stop,
        Word::Until,
        Word::Wend,
        Word::While,
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Beep => "BEEP",
            Close => "CLOSE",
            Data => "DATA",
            Def => "DEF",
            Dim => "DIM",
            End => "END",
            For => "FOR",
            Format => ":=",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            Mat => "MAT",
            Next => "NEXT",
            On => "ON",
            Open => "OPEN",
            Print => "PRINT",
            Read => "READ",
            Rem => "REM",
            Repeat => "REPEAT",
            Restore => "RESTORE",
            Return => "RETURN",
            Seed => "SEED",
            Stop => "STOP",
            Until => "UNTIL",
            Wend => "WEND",
            While => "WHILE",
        }
    }

    /// Splits a statement into its keyword and the text after it.
    /// `None` means the leading word is not a statement keyword.
    pub fn classify(text: &str) -> Option<(Word, &str)> {
        let text = text.trim();
        if let Some(rest) = text.strip_prefix(":=") {
            return Some((Word::Format, rest.trim_start()));
        }
        if let Some(rest) = text.strip_prefix('?') {
            return Some((Word::Print, rest.trim_start()));
        }
        if let Some(rest) = text.strip_prefix('\'') {
            return Some((Word::Rem, rest));
        }
        let leading = Word::leading(text);
        let upper = leading.to_ascii_uppercase();
        let rest = text[leading.len()..].trim_start();
        if upper == "GO" {
            let mut cursor = Cursor::new(rest);
            if cursor.keyword("TO") {
                return Some((Word::Goto, cursor.rest().trim_start()));
            }
            if cursor.keyword("SUB") {
                return Some((Word::Gosub, cursor.rest().trim_start()));
            }
        }
        if let Some(word) = STRING_TO_WORD.with(|stw| stw.get(upper.as_str()).copied()) {
            if word != Word::Format {
                return Some((word, rest));
            }
        }
        if Word::is_assignment(text) {
            return Some((Word::Let, text));
        }
        None
    }

    /// The alphabetic run at the start of a statement.
    pub fn leading(text: &str) -> &str {
        let text = text.trim_start();
        let len = text
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .map(|c| c.len_utf8())
            .sum();
        &text[..len]
    }

    fn is_assignment(text: &str) -> bool {
        let mut cursor = Cursor::new(text);
        if cursor.identifier().is_none() {
            return false;
        }
        if cursor.peek() == Some('(') {
            let mut depth = 0;
            while let Some(ch) = cursor.next_char() {
                match ch {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }
        cursor.peek() == Some('=')
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ## Shell commands
///
/// Typed at the `READY.` prompt, never stored in a program.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Command {
    Bye,
    Exit,
    List,
    Load,
    New,
    Renumber,
    Run,
    Save,
    Syntax,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Bye,
        Command::Exit,
        Command::List,
        Command::Load,
        Command::New,
        Command::Renumber,
        Command::Run,
        Command::Save,
        Command::Syntax,
    ];

    pub fn as_str(&self) -> &'static str {
        use Command::*;
        match self {
            Bye => "BYE",
            Exit => "EXIT",
            List => "LIST",
            Load => "LOAD",
            New => "NEW",
            Renumber => "RENUMBER",
            Run => "RUN",
            Save => "SAVE",
            Syntax => "SYNTAX",
        }
    }

    pub fn classify(text: &str) -> Option<(Command, &str)> {
        let text = text.trim();
        let leading = Word::leading(text);
        let upper = leading.to_ascii_uppercase();
        STRING_TO_COMMAND
            .with(|stc| stc.get(upper.as_str()).copied())
            .map(|command| (command, text[leading.len()..].trim()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn compare<T: PartialOrd>(&self, lhs: &T, rhs: &T) -> bool {
        use Operator::*;
        match self {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
            Plus | Minus | Multiply | Divide => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(Word::classify("print x"), Some((Word::Print, "x")));
        assert_eq!(Word::classify("?\"HI\""), Some((Word::Print, "\"HI\"")));
        assert_eq!(Word::classify("GO TO 100"), Some((Word::Goto, "100")));
        assert_eq!(Word::classify("GOSUB 100"), Some((Word::Gosub, "100")));
        assert_eq!(Word::classify(":= \"##.#\""), Some((Word::Format, "\"##.#\"")));
        assert_eq!(Word::classify("WEND"), Some((Word::Wend, "")));
        assert_eq!(Word::classify("beep"), Some((Word::Beep, "")));
    }

    #[test]
    fn test_classify_implicit_let() {
        assert_eq!(Word::classify("X = 1"), Some((Word::Let, "X = 1")));
        assert_eq!(Word::classify("A(1,2)=3"), Some((Word::Let, "A(1,2)=3")));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Word::classify("FROB 3"), None);
        assert_eq!(Word::leading("FROB 3"), "FROB");
    }

    #[test]
    fn test_command() {
        assert_eq!(Command::classify("list 10,20"), Some((Command::List, "10,20")));
        assert_eq!(Command::classify("PRINT"), None);
    }
}
