use super::{Kind, Val};
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Matrices with fewer elements than this are stored densely.
pub const DENSE_THRESHOLD: usize = 10_000;

/// The most dimensions a DIM may declare.
pub const MAX_DIMENSIONS: usize = 15;

/// The most elements the linear algebra routines copy into working rows.
pub const COPY_LIMIT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    Dense(Vec<Val>),
    Sparse(BTreeMap<Vec<usize>, Val>),
}

/// ## Matrix values
///
/// An N-dimensional block of numbers or strings. The storage mode is picked
/// once when the matrix is sized: dense when the element count is below the
/// threshold, sparse otherwise. Sparse storage only keeps non-default
/// elements, so writing a default value removes the entry.

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    kind: Kind,
    dimensions: Vec<usize>,
    storage: Storage,
}

impl Matrix {
    pub fn configure(kind: Kind, dimensions: &[usize], threshold: usize) -> Result<Matrix> {
        if dimensions.is_empty() || dimensions.len() > MAX_DIMENSIONS {
            return Err(error!(SubscriptOutOfRange; "TOO MANY DIMENSIONS"));
        }
        let mut total: usize = 1;
        for &extent in dimensions {
            if extent == 0 {
                return Err(error!(IllegalFunctionCall; "DIMENSION MUST BE POSITIVE"));
            }
            total = match total.checked_mul(extent) {
                Some(total) => total,
                None => return Err(error!(Overflow; "MATRIX TOO LARGE")),
            };
        }
        let storage = if total < threshold {
            Storage::Dense(vec![kind.default_val(); total])
        } else {
            Storage::Sparse(BTreeMap::new())
        };
        tracing::trace!(
            ?dimensions,
            total,
            dense = matches!(storage, Storage::Dense(_)),
            "matrix storage configured"
        );
        Ok(Matrix {
            kind,
            dimensions: dimensions.to_vec(),
            storage,
        })
    }

    /// A numeric 2D matrix from rows, stored per the default threshold.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut m = Matrix::configure(Kind::Numeric, &[rows.len(), cols], DENSE_THRESHOLD)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(error!(DimensionMismatch; "RAGGED ROWS"));
            }
            for (c, &v) in row.iter().enumerate() {
                m.set(&[r, c], Val::Number(v))?;
            }
        }
        Ok(m)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_dense(&self) -> bool {
        matches!(self.storage, Storage::Dense(_))
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Row-major offset of a multi-index.
    pub fn flatten(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.dimensions.len() {
            return Err(error!(SubscriptOutOfRange; "WRONG NUMBER OF SUBSCRIPTS"));
        }
        let mut offset = 0;
        for (&i, &extent) in index.iter().zip(&self.dimensions) {
            if i >= extent {
                return Err(error!(SubscriptOutOfRange));
            }
            offset = offset * extent + i;
        }
        Ok(offset)
    }

    /// Inverse of `flatten`.
    pub fn unflatten(&self, mut offset: usize) -> Vec<usize> {
        let mut index = vec![0; self.dimensions.len()];
        for (slot, &extent) in index.iter_mut().zip(&self.dimensions).rev() {
            *slot = offset % extent;
            offset /= extent;
        }
        index
    }

    pub fn get(&self, index: &[usize]) -> Result<Val> {
        let offset = self.flatten(index)?;
        Ok(match &self.storage {
            Storage::Dense(v) => v[offset].clone(),
            Storage::Sparse(m) => match m.get(index) {
                Some(val) => val.clone(),
                None => self.kind.default_val(),
            },
        })
    }

    pub fn set(&mut self, index: &[usize], val: Val) -> Result<()> {
        if val.kind() != self.kind {
            return Err(error!(TypeMismatch));
        }
        let offset = self.flatten(index)?;
        match &mut self.storage {
            Storage::Dense(v) => v[offset] = val,
            Storage::Sparse(m) => {
                if val.is_default() {
                    m.remove(index);
                } else {
                    m.insert(index.to_vec(), val);
                }
            }
        }
        Ok(())
    }

    /// Element at a row-major offset.
    pub fn get_flat(&self, offset: usize) -> Result<Val> {
        match &self.storage {
            Storage::Dense(v) => match v.get(offset) {
                Some(val) => Ok(val.clone()),
                None => Err(error!(SubscriptOutOfRange)),
            },
            Storage::Sparse(_) => {
                if offset >= self.len() {
                    return Err(error!(SubscriptOutOfRange));
                }
                self.get(&self.unflatten(offset))
            }
        }
    }

    pub fn set_flat(&mut self, offset: usize, val: Val) -> Result<()> {
        if offset >= self.len() {
            return Err(error!(SubscriptOutOfRange));
        }
        let index = self.unflatten(offset);
        self.set(&index, val)
    }

    /// Rows and columns for the linear algebra routines. A vector of
    /// extent n is a single column.
    pub fn shape(&self) -> Result<(usize, usize)> {
        match self.dimensions.as_slice() {
            [n] => Ok((*n, 1)),
            [r, c] => Ok((*r, *c)),
            _ => Err(error!(DimensionMismatch; "MATRIX MUST BE 2D")),
        }
    }

    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        let val = match self.dimensions.len() {
            1 if col == 0 => self.get(&[row])?,
            _ => self.get(&[row, col])?,
        };
        val.number()
    }

    /// Numeric rows, for the linear algebra routines.
    pub fn rows(&self) -> Result<Vec<Vec<f64>>> {
        if self.kind != Kind::Numeric {
            return Err(error!(TypeMismatch; "NUMERIC MATRIX REQUIRED"));
        }
        let (rows, cols) = self.shape()?;
        if rows.saturating_mul(cols) > COPY_LIMIT {
            return Err(error!(Overflow; format!(
                "{} MATRIX TOO LARGE TO COPY",
                extents(&self.dimensions)
            )));
        }
        let mut out = vec![vec![0.0; cols]; rows];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = self.at(r, c)?;
            }
        }
        Ok(out)
    }

    /// Values in row-major order.
    pub fn values(&self) -> Result<Vec<Val>> {
        (0..self.len()).map(|offset| self.get_flat(offset)).collect()
    }
}

/// Extents as `2x3`, for messages.
pub fn extents(dimensions: &[usize]) -> String {
    let parts: Vec<String> = dimensions.iter().map(|d| d.to_string()).collect();
    parts.join("x")
}

/// An element reference as typed in BASIC: `A(1, 2)`.
pub fn subscript(name: &str, index: &[usize]) -> String {
    let parts: Vec<String> = index.iter().map(|i| i.to_string()).collect();
    format!("{}({})", name, parts.join(", "))
}

impl std::fmt::Display for Matrix {
    /// Nested braces, one level per dimension: `{{1,2},{3,4}}`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn nest(
            m: &Matrix,
            f: &mut std::fmt::Formatter,
            depth: usize,
            offset: usize,
        ) -> std::fmt::Result {
            let extent = m.dimensions[depth];
            let stride: usize = m.dimensions[depth + 1..].iter().product();
            write!(f, "{{")?;
            for i in 0..extent {
                if i > 0 {
                    write!(f, ",")?;
                }
                let at = offset + i * stride;
                if depth + 1 == m.dimensions.len() {
                    match m.get_flat(at) {
                        Ok(val) => write!(f, "{}", val)?,
                        Err(_) => return Err(std::fmt::Error),
                    }
                } else {
                    nest(m, f, depth + 1, at)?;
                }
            }
            write!(f, "}}")
        }
        nest(self, f, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_storage_threshold() {
        let m = Matrix::configure(Kind::Numeric, &[99, 101], DENSE_THRESHOLD).unwrap();
        assert!(m.is_dense());
        let m = Matrix::configure(Kind::Numeric, &[100, 100], DENSE_THRESHOLD).unwrap();
        assert!(!m.is_dense());
        let m = Matrix::configure(Kind::Numeric, &[9999], DENSE_THRESHOLD).unwrap();
        assert!(m.is_dense());
        let m = Matrix::configure(Kind::Numeric, &[10, 10, 100], DENSE_THRESHOLD).unwrap();
        assert!(!m.is_dense());
    }

    #[test]
    fn test_threshold_is_a_parameter() {
        let m = Matrix::configure(Kind::Numeric, &[2, 2], 4).unwrap();
        assert!(!m.is_dense());
        let m = Matrix::configure(Kind::Numeric, &[2, 2], 5).unwrap();
        assert!(m.is_dense());
    }

    #[test]
    fn test_round_trip_both_modes() {
        for threshold in &[DENSE_THRESHOLD, 1] {
            let mut m = Matrix::configure(Kind::Numeric, &[3, 4], *threshold).unwrap();
            m.set(&[2, 3], Val::Number(7.5)).unwrap();
            m.set(&[0, 1], Val::Number(-1.0)).unwrap();
            assert_eq!(m.get(&[2, 3]).unwrap(), Val::Number(7.5));
            assert_eq!(m.get(&[0, 1]).unwrap(), Val::Number(-1.0));
            assert_eq!(m.get(&[1, 1]).unwrap(), Val::Number(0.0));
        }
    }

    #[test]
    fn test_sparse_default_write_removes_entry() {
        let mut m = Matrix::configure(Kind::Text, &[200, 200], DENSE_THRESHOLD).unwrap();
        m.set(&[5, 6], Val::from("x")).unwrap();
        match m.storage() {
            Storage::Sparse(map) => assert_eq!(map.len(), 1),
            Storage::Dense(_) => panic!("expected sparse"),
        }
        m.set(&[5, 6], Val::from("")).unwrap();
        match m.storage() {
            Storage::Sparse(map) => assert!(map.is_empty()),
            Storage::Dense(_) => panic!("expected sparse"),
        }
        assert_eq!(m.get(&[5, 6]).unwrap(), Val::from(""));
        assert_eq!(m.get(&[199, 0]).unwrap(), Val::from(""));
    }

    #[test]
    fn test_row_major_flatten() {
        let m = Matrix::configure(Kind::Numeric, &[2, 3], DENSE_THRESHOLD).unwrap();
        assert_eq!(m.flatten(&[0, 2]).unwrap(), 2);
        assert_eq!(m.flatten(&[1, 0]).unwrap(), 3);
        assert_eq!(m.unflatten(5), vec![1, 2]);
        assert!(m.flatten(&[2, 0]).is_err());
        assert!(m.flatten(&[0]).is_err());
    }

    #[test]
    fn test_display_nested() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
        assert_eq!(m.to_string(), "{{1,2},{3,4.5}}");
    }

    #[test]
    fn test_rows_refuses_huge_copy() {
        let m = Matrix::configure(Kind::Numeric, &[100_000, 100_000], DENSE_THRESHOLD).unwrap();
        let e = m.rows().unwrap_err();
        assert!(e.is(ErrorCode::Overflow));
        assert_eq!(subscript("A", &[1, 2]), "A(1, 2)");
        assert_eq!(extents(m.dimensions()), "100000x100000");
    }

    #[test]
    fn test_bad_dimensions() {
        assert!(Matrix::configure(Kind::Numeric, &[0, 3], DENSE_THRESHOLD).is_err());
        assert!(Matrix::configure(Kind::Numeric, &[1; 16], DENSE_THRESHOLD).is_err());
    }
}
