use super::Program;
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap, HashMap};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// ## Program source
///
/// The editable text of a program between runs. RUN freezes it into a
/// `Program`.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores a numbered line. Empty text deletes the line instead.
    pub fn insert(&mut self, line: Line) -> Result<(), Error> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "LINE HAS NO NUMBER")),
        };
        let source = Arc::make_mut(&mut self.source);
        if line.is_empty() {
            source.remove(&number);
        } else {
            source.insert(number, line);
        }
        Ok(())
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        Arc::make_mut(&mut self.source).remove(&number)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    /// The text of one line, for completion in the editor.
    pub fn line(&self, number: LineNumber) -> Option<String> {
        self.source.get(&number).map(|line| line.to_string())
    }

    pub fn list(&self, range: RangeInclusive<LineNumber>) -> String {
        let mut s = String::new();
        for (_, line) in self.source.range(range) {
            s.push_str(&line.to_string());
            s.push('\n');
        }
        s
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        let line = Line::new(line)?;
        if line.is_direct() {
            if line.is_empty() {
                return Ok(());
            }
            return Err(error!(SyntaxError; format!("LINE WITHOUT NUMBER: {}", line.text())));
        }
        self.insert(line)
    }

    pub fn program(&self) -> Program {
        let mut program = Program::default();
        program.load(
            self.source
                .iter()
                .map(|(number, line)| (*number, line.text())),
        );
        program
    }

    /// Renumbers lines from `old_start` on, starting at `new_start` and
    /// going up by `step`. Returns the new listing and the old to new map.
    pub fn renum(
        &self,
        new_start: LineNumber,
        step: LineNumber,
        old_start: LineNumber,
    ) -> Result<(Listing, HashMap<LineNumber, LineNumber>), Error> {
        if step == 0 {
            return Err(error!(IllegalFunctionCall; "RENUMBER STEP IS ZERO"));
        }
        let mut changes: HashMap<LineNumber, LineNumber> = HashMap::default();
        let mut kept_end: Option<LineNumber> = None;
        let mut next = Some(new_start);
        for &number in self.source.keys() {
            if number < old_start {
                kept_end = Some(number);
                continue;
            }
            if let Some(end) = kept_end {
                if end >= new_start {
                    return Err(error!(IllegalFunctionCall; "RENUMBER WOULD REORDER LINES"));
                }
            }
            let new = match next {
                Some(new) => new,
                None => return Err(error!(Overflow; "LINE NUMBERS TOO LARGE")),
            };
            changes.insert(number, new);
            next = new.checked_add(step);
        }
        let mut source: BTreeMap<LineNumber, Line> = BTreeMap::default();
        for line in self.lines() {
            let line = line.renum(&changes);
            if let Some(number) = line.number() {
                source.insert(number, line);
            }
        }
        tracing::debug!(lines = changes.len(), new_start, step, "renumbered");
        Ok((
            Listing {
                source: Arc::new(source),
            },
            changes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(lines: &[&str]) -> Listing {
        let mut listing = Listing::default();
        for line in lines {
            listing.load_str(line).unwrap();
        }
        listing
    }

    #[test]
    fn test_load_and_delete() {
        let mut l = listing(&["20 PRINT 2", "10 PRINT 1", "20 PRINT 3"]);
        assert_eq!(l.list(0..=LineNumber::max_value()), "10 PRINT 1\n20 PRINT 3\n");
        l.load_str("10").unwrap();
        assert_eq!(l.len(), 1);
        assert!(l.load_str("PRINT").is_err());
        assert_eq!(l.program().first_line(), Some(20));
    }

    #[test]
    fn test_renum() {
        let l = listing(&[
            "5 GOTO 17",
            "17 ON X GOSUB 5, 17",
            "23 IF X THEN 5 ELSE 23",
            "30 PRINT USING 31; 5",
            "31 := \"##\"",
        ]);
        let (l, changes) = l.renum(100, 10, 0).unwrap();
        assert_eq!(changes[&17], 110);
        assert_eq!(
            l.list(0..=LineNumber::max_value()),
            "100 GOTO 110\n\
             110 ON X GOSUB 100, 110\n\
             120 IF X THEN 100 ELSE 120\n\
             130 PRINT USING 140; 5\n\
             140 := \"##\"\n"
        );
    }

    #[test]
    fn test_renum_from_old_start() {
        let l = listing(&["1 GOTO 50", "50 GOTO 1"]);
        let (l, changes) = l.renum(10, 5, 50).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(l.list(0..=100), "1 GOTO 10\n10 GOTO 1\n");
        assert!(listing(&["20 END", "30 END"]).renum(10, 10, 30).is_err());
    }
}
