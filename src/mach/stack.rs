use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Pushing past the limit fails with `OVERFLOW` and leaves the stack as it
/// was.

pub struct Stack<T> {
    limit: usize,
    overflow_message: &'static str,
    underflow: fn() -> Error,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

fn internal_underflow() -> Error {
    error!(InternalError; "UNDERFLOW")
}

impl<T> Stack<T> {
    pub fn new(limit: usize, overflow_message: &'static str) -> Stack<T> {
        Stack {
            limit,
            overflow_message,
            underflow: internal_underflow,
            vec: vec![],
        }
    }

    /// The error an empty `pop` reports.
    pub fn with_underflow(self, underflow: fn() -> Error) -> Stack<T> {
        Stack { underflow, ..self }
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(Overflow; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err((self.underflow)()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_sixteenth_push_overflows() {
        let mut s: Stack<u32> = Stack::new(15, "TOO MANY GOSUBS");
        for i in 0..15 {
            s.push(i).unwrap();
        }
        let e = s.push(15).unwrap_err();
        assert!(e.is(ErrorCode::Overflow));
        assert_eq!(s.len(), 15);
    }

    #[test]
    fn test_custom_underflow() {
        let mut s: Stack<u32> =
            Stack::new(2, "").with_underflow(|| error!(ReturnWithoutGosub));
        assert!(s.pop().unwrap_err().is(ErrorCode::ReturnWithoutGosub));
    }
}
