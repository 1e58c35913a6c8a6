use super::{Kind, Matrix, Val, DENSE_THRESHOLD};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A `DEF FN` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub parameter: String,
    pub body: Rc<str>,
}

/// ## Variable memory
///
/// Scalars and matrices live in separate numeric and string tables. String
/// names are stored without their `$`. A scalar that was never assigned
/// reads as its default, but the evaluator can still tell it apart.

#[derive(Debug)]
pub struct Var {
    numbers: HashMap<Rc<str>, f64>,
    strings: HashMap<Rc<str>, Rc<str>>,
    matrices: HashMap<(Rc<str>, Kind), Matrix>,
    functions: HashMap<Rc<str>, UserFunction>,
    dense_threshold: usize,
}

impl Default for Var {
    fn default() -> Var {
        Var::with_threshold(DENSE_THRESHOLD)
    }
}

fn strip(name: &str) -> &str {
    name.strip_suffix('$').unwrap_or(name)
}

impl Var {
    pub fn with_threshold(dense_threshold: usize) -> Var {
        Var {
            numbers: HashMap::default(),
            strings: HashMap::default(),
            matrices: HashMap::default(),
            functions: HashMap::default(),
            dense_threshold,
        }
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
        self.strings.clear();
        self.matrices.clear();
        self.functions.clear();
    }

    pub fn numeric(&self, name: &str) -> f64 {
        self.lookup_numeric(name).unwrap_or(0.0)
    }

    pub fn lookup_numeric(&self, name: &str) -> Option<f64> {
        self.numbers.get(name).copied()
    }

    pub fn set_numeric(&mut self, name: &str, value: f64) {
        self.numbers.insert(name.into(), value);
    }

    /// The string variable `name$`; the suffix is optional here.
    pub fn string(&self, name: &str) -> Rc<str> {
        self.lookup_string(name).unwrap_or_else(|| "".into())
    }

    pub fn lookup_string(&self, name: &str) -> Option<Rc<str>> {
        self.strings.get(strip(name)).cloned()
    }

    pub fn set_string(&mut self, name: &str, value: Rc<str>) {
        self.strings.insert(strip(name).into(), value);
    }

    /// Stores by the type the name implies.
    pub fn store(&mut self, name: &str, value: Val) -> Result<()> {
        match (Kind::of(name), value) {
            (Kind::Numeric, Val::Number(n)) => self.set_numeric(name, n),
            (Kind::Text, Val::Text(s)) => self.set_string(name, s),
            _ => return Err(error!(TypeMismatch)),
        }
        Ok(())
    }

    pub fn dense_threshold(&self) -> usize {
        self.dense_threshold
    }

    /// Creates or resizes a matrix. The previous contents are dropped.
    pub fn dimension(&mut self, name: &str, dimensions: &[usize]) -> Result<()> {
        let kind = Kind::of(name);
        let matrix = Matrix::configure(kind, dimensions, self.dense_threshold)?;
        self.matrices.insert((strip(name).into(), kind), matrix);
        Ok(())
    }

    pub fn has_matrix(&self, name: &str) -> bool {
        self.matrices
            .contains_key(&(Rc::from(strip(name)), Kind::of(name)))
    }

    pub fn matrix(&self, name: &str) -> Result<&Matrix> {
        match self.matrices.get(&(Rc::from(strip(name)), Kind::of(name))) {
            Some(matrix) => Ok(matrix),
            None => Err(error!(UndefinedMatrix; name.to_string())),
        }
    }

    pub fn matrix_mut(&mut self, name: &str) -> Result<&mut Matrix> {
        match self.matrices.get_mut(&(Rc::from(strip(name)), Kind::of(name))) {
            Some(matrix) => Ok(matrix),
            None => Err(error!(UndefinedMatrix; name.to_string())),
        }
    }

    /// Replaces a whole matrix, as MAT assignments do.
    pub fn store_matrix(&mut self, name: &str, matrix: Matrix) -> Result<()> {
        if matrix.kind() != Kind::of(name) {
            return Err(error!(TypeMismatch; name.to_string()));
        }
        self.matrices.insert((strip(name).into(), matrix.kind()), matrix);
        Ok(())
    }

    pub fn element(&self, name: &str, index: &[usize]) -> Result<Val> {
        self.matrix(name)?.get(index)
    }

    pub fn set_element(&mut self, name: &str, index: &[usize], value: Val) -> Result<()> {
        self.matrix_mut(name)?.set(index, value)
    }

    pub fn define_function(&mut self, name: &str, function: UserFunction) {
        self.functions.insert(name.into(), function);
    }

    pub fn function(&self, name: &str) -> Option<&UserFunction> {
        self.functions.get(name)
    }
}
