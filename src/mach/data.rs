use super::{Program, Val};
use crate::error;
use crate::lang::{split_top_level, Error, Word};

type Result<T> = std::result::Result<T, Error>;

/// ## DATA cursor
///
/// Every DATA item of the program in line order, and the index of the next
/// one READ will take.

#[derive(Debug, Default, Clone)]
pub struct Data {
    values: Vec<Val>,
    cursor: usize,
}

impl Data {
    pub fn collect(program: &Program) -> Data {
        let mut values = vec![];
        for (_, text) in program.iter() {
            if let Some((Word::Data, items)) = Word::classify(text) {
                values.extend(Data::parse(items));
            }
        }
        Data { values, cursor: 0 }
    }

    /// Quoted items are strings, items that parse as numbers are numbers, and
    /// anything else is kept as trimmed text.
    pub fn parse(items: &str) -> Vec<Val> {
        if items.trim().is_empty() {
            return vec![];
        }
        split_top_level(items, ',')
            .into_iter()
            .map(|item| {
                let item = item.trim();
                if item.len() >= 2 && item.starts_with('"') && item.ends_with('"') {
                    Val::from(&item[1..item.len() - 1])
                } else if let Ok(n) = item.parse::<f64>() {
                    Val::Number(n)
                } else {
                    Val::from(item)
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn read(&mut self) -> Result<Val> {
        match self.values.get(self.cursor) {
            Some(val) => {
                self.cursor += 1;
                Ok(val.clone())
            }
            None => Err(error!(OutOfData)),
        }
    }

    /// Text items that look like numbers are accepted.
    pub fn read_number(&mut self) -> Result<f64> {
        match self.read()? {
            Val::Number(n) => Ok(n),
            Val::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; format!("DATA ITEM {} IS NOT A NUMBER", s))),
            },
        }
    }

    pub fn read_text(&mut self) -> Result<Val> {
        match self.read()? {
            Val::Number(n) => Ok(Val::from(Val::Number(n).to_string())),
            text => Ok(text),
        }
    }

    pub fn restore(&mut self) {
        self.cursor = 0;
    }
}
