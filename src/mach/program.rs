use crate::lang::{LineNumber, Word};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::rc::Rc;

/// ## Program store
///
/// The lines a RUN executes, in ascending order. Built once per run and
/// never changed while it executes.

#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: BTreeMap<LineNumber, Rc<str>>,
}

impl Program {
    /// Replaces the whole store. Later duplicates win.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = (LineNumber, S)>,
        S: AsRef<str>,
    {
        self.lines = lines
            .into_iter()
            .map(|(number, text)| (number, Rc::from(text.as_ref().trim())))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.lines.keys().next().copied()
    }

    /// Smallest line after `line`; `None` is the end of the program.
    pub fn next_line_after(&self, line: LineNumber) -> Option<LineNumber> {
        self.lines
            .range((Excluded(line), Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn line_exists(&self, line: LineNumber) -> bool {
        self.lines.contains_key(&line)
    }

    pub fn get(&self, line: LineNumber) -> Option<Rc<str>> {
        self.lines.get(&line).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineNumber, &str)> {
        self.lines.iter().map(|(number, text)| (*number, &**text))
    }

    /// Lines after `line`, in order.
    pub fn after(&self, line: LineNumber) -> impl Iterator<Item = (LineNumber, &str)> {
        self.lines
            .range((Excluded(line), Unbounded))
            .map(|(number, text)| (*number, &**text))
    }

    /// The WEND closing the WHILE at `line`, counting nested pairs.
    pub fn matching_wend(&self, line: LineNumber) -> Option<LineNumber> {
        let mut depth = 1;
        for (number, text) in self.after(line) {
            match Word::classify(text) {
                Some((Word::While, _)) => depth += 1,
                Some((Word::Wend, _)) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(number);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(lines: &[(LineNumber, &str)]) -> Program {
        let mut p = Program::default();
        p.load(lines.iter().cloned());
        p
    }

    #[test]
    fn test_next_line_after() {
        let p = program(&[(30, "END"), (10, "PRINT 1"), (20, "PRINT 2")]);
        assert_eq!(p.first_line(), Some(10));
        assert_eq!(p.next_line_after(10), Some(20));
        assert_eq!(p.next_line_after(15), Some(20));
        assert_eq!(p.next_line_after(30), None);
        assert!(p.line_exists(20));
        assert!(!p.line_exists(25));
    }

    #[test]
    fn test_later_duplicates_win() {
        let p = program(&[(10, "PRINT 1"), (10, "PRINT 2")]);
        assert_eq!(p.len(), 1);
        assert_eq!(&*p.get(10).unwrap(), "PRINT 2");
    }

    #[test]
    fn test_matching_wend_skips_nested() {
        let p = program(&[
            (10, "WHILE A"),
            (20, "WHILE B"),
            (30, "WEND"),
            (40, "WEND"),
            (50, "END"),
        ]);
        assert_eq!(p.matching_wend(10), Some(40));
        assert_eq!(p.matching_wend(20), Some(30));
        assert_eq!(p.matching_wend(40), None);
    }
}
