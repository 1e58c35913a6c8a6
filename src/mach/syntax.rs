/*!
## SYNTAX command

A static pass over a program that runs nothing. It finds references to
lines that do not exist, calls of functions nobody defined, and loops that
do not close.

*/

use super::{Function, Program};
use crate::error;
use crate::lang::{references, Cursor, Error, LineNumber, Word};
use std::collections::HashSet;

/// Names that may be followed by `(` without being a function call.
const NOT_FUNCTIONS: [&str; 15] = [
    "AND",
    "OR",
    "NOT",
    "THEN",
    "ELSE",
    "TO",
    "STEP",
    "USING",
    "IDENTITY",
    "ZEROS",
    "ONES",
    "TRANSPOSE",
    "INVERSE",
    "DIAGONAL",
    "DETERMINANT",
];

pub fn check(program: &Program) -> Vec<Error> {
    let mut errors = vec![];
    let (matrices, functions) = declarations(program);
    let mut fors: Vec<LineNumber> = vec![];
    let mut whiles: Vec<LineNumber> = vec![];
    let mut repeats: Vec<LineNumber> = vec![];
    for (line, text) in program.iter() {
        for target in references(text) {
            if !program.line_exists(target) {
                errors.push(error!(UndefinedLine, line; format!("NO LINE {}", target)));
            }
        }
        let word = Word::classify(text).map(|(word, _)| word);
        if let Some(Word::Rem) | Some(Word::Data) | Some(Word::Format) = word {
            continue;
        }
        for name in calls(text) {
            if let Some(function) = name.strip_prefix("FN") {
                if word != Some(Word::Def) && !functions.contains(function) {
                    errors.push(error!(UndefinedUserFunction, line; name.clone()));
                }
                continue;
            }
            let known = Function::is_builtin(&name)
                || matrices.contains(&name)
                || NOT_FUNCTIONS.contains(&name.as_str())
                || Word::classify(&name).is_some();
            if !known {
                errors.push(error!(UnknownIdentifier, line; format!("UNKNOWN FUNCTION {}", name)));
            }
        }
        match word {
            Some(Word::For) => fors.push(line),
            Some(Word::Next) => {
                if fors.pop().is_none() {
                    errors.push(error!(NextWithoutFor, line));
                }
            }
            Some(Word::While) => whiles.push(line),
            Some(Word::Wend) => {
                if whiles.pop().is_none() {
                    errors.push(error!(WendWithoutWhile, line));
                }
            }
            Some(Word::Repeat) => repeats.push(line),
            Some(Word::Until) => {
                if repeats.pop().is_none() {
                    errors.push(error!(UntilWithoutRepeat, line));
                }
            }
            _ => {}
        }
    }
    for line in fors {
        errors.push(error!(SyntaxError, line; "FOR WITHOUT NEXT"));
    }
    for line in whiles {
        errors.push(error!(WhileWithoutWend, line));
    }
    for line in repeats {
        errors.push(error!(SyntaxError, line; "REPEAT WITHOUT UNTIL"));
    }
    errors
}

/// Matrix names from DIM and MAT, and user function names from DEF.
fn declarations(program: &Program) -> (HashSet<String>, HashSet<String>) {
    let mut matrices = HashSet::new();
    let mut functions = HashSet::new();
    for (_, text) in program.iter() {
        match Word::classify(text) {
            Some((Word::Dim, rest)) => {
                for name in calls(rest) {
                    matrices.insert(name);
                }
            }
            Some((Word::Mat, rest)) => {
                let mut cursor = Cursor::new(rest);
                let lu = cursor.keyword("LU");
                if !lu {
                    let _ = cursor.keyword("MULT") || cursor.keyword("POWER") || cursor.keyword("SOLVE");
                }
                if let Some(name) = cursor.identifier() {
                    if cursor.eat('=') {
                        if lu {
                            matrices.insert(format!("{}_L", name));
                            matrices.insert(format!("{}_U", name));
                        } else {
                            matrices.insert(name);
                        }
                    }
                }
            }
            Some((Word::Def, rest)) => {
                if let Some(name) = Cursor::new(rest).identifier() {
                    if let Some(name) = name.strip_prefix("FN") {
                        functions.insert(name.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    (matrices, functions)
}

/// Every identifier directly followed by `(`, outside string literals.
fn calls(text: &str) -> Vec<String> {
    let mut names = vec![];
    let mut cursor = Cursor::new(text);
    while let Some(ch) = cursor.peek() {
        if ch == '"' {
            if cursor.string_literal().is_err() {
                break;
            }
            continue;
        }
        let start = cursor.mark();
        match cursor.identifier() {
            Some(name) => {
                if cursor.rest().starts_with('(') {
                    names.push(name);
                }
            }
            None => {
                cursor.reset(start);
                cursor.next_char();
            }
        }
    }
    names
}
