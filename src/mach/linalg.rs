/*!
## Matrix operation engine

Linear algebra over numeric matrices. Routines taking or giving 2D matrices
treat a vector of extent n as an n x 1 column. Every routine checks its
preconditions first and builds a new matrix; operands are never modified.

*/

use super::matrix::{extents, COPY_LIMIT};
use super::{Kind, Matrix, Storage, Val};
use std::collections::BTreeSet;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Pivots smaller than this count as zero.
pub const TOLERANCE: f64 = 1e-12;

fn build(rows: &[Vec<f64>], threshold: usize) -> Result<Matrix> {
    let cols = rows.first().map(|r| r.len()).unwrap_or(0);
    let mut m = Matrix::configure(Kind::Numeric, &[rows.len(), cols], threshold)?;
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            m.set(&[r, c], Val::Number(v))?;
        }
    }
    Ok(m)
}

fn numeric(m: &Matrix) -> Result<()> {
    if m.kind() == Kind::Numeric {
        Ok(())
    } else {
        Err(error!(TypeMismatch; "NUMERIC MATRIX REQUIRED"))
    }
}

fn square(m: &Matrix, what: &'static str) -> Result<usize> {
    let (rows, cols) = m.shape()?;
    if rows != cols {
        return Err(error!(DimensionMismatch; format!("{} NEEDS A SQUARE MATRIX, GOT {}x{}", what, rows, cols)));
    }
    Ok(rows)
}

fn product(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let inner = b.len();
    let cols = b.first().map(|r| r.len()).unwrap_or(0);
    a.iter()
        .map(|row| {
            (0..cols)
                .map(|c| (0..inner).map(|k| row[k] * b[k][c]).sum())
                .collect()
        })
        .collect()
}

fn identity_rows(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|r| (0..n).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Row of the largest magnitude entry in `col`, from `from` down.
fn pivot_row(rows: &[Vec<f64>], col: usize, from: usize) -> usize {
    let mut best = from;
    for r in from + 1..rows.len() {
        if rows[r][col].abs() > rows[best][col].abs() {
            best = r;
        }
    }
    best
}

fn too_large(dimensions: &[usize]) -> Error {
    error!(Overflow; format!("{} MATRIX TOO LARGE TO FILL", extents(dimensions)))
}

/// Offsets an element-wise result needs computing at, when the operands
/// are too large to walk in full. Elements missing from every sparse
/// operand take `background`, which must then be zero.
fn sparse_offsets(
    operands: &[&Matrix],
    background: impl FnOnce() -> Result<f64>,
) -> Result<Option<Vec<usize>>> {
    let len = operands[0].len();
    if len <= COPY_LIMIT || operands.iter().any(|m| m.is_dense()) {
        return Ok(None);
    }
    let mut offsets = BTreeSet::new();
    for m in operands {
        if let Storage::Sparse(entries) = m.storage() {
            for index in entries.keys() {
                offsets.insert(m.flatten(index)?);
            }
        }
    }
    if offsets.len() < len && background()? != 0.0 {
        return Err(too_large(operands[0].dimensions()));
    }
    Ok(Some(offsets.into_iter().collect()))
}

pub fn identity(n: usize, threshold: usize) -> Result<Matrix> {
    let mut m = Matrix::configure(Kind::Numeric, &[n, n], threshold)?;
    for i in 0..n {
        m.set(&[i, i], Val::Number(1.0))?;
    }
    Ok(m)
}

/// ZEROS and ONES: any number of dimensions.
pub fn filled(dimensions: &[usize], value: f64, threshold: usize) -> Result<Matrix> {
    let mut m = Matrix::configure(Kind::Numeric, dimensions, threshold)?;
    if value != 0.0 {
        if !m.is_dense() && m.len() > COPY_LIMIT {
            return Err(too_large(dimensions));
        }
        for offset in 0..m.len() {
            m.set_flat(offset, Val::Number(value))?;
        }
    }
    Ok(m)
}

pub fn element_wise(a: &Matrix, b: &Matrix, op: Operator, threshold: usize) -> Result<Matrix> {
    numeric(a)?;
    numeric(b)?;
    if a.dimensions() != b.dimensions() {
        return Err(error!(DimensionMismatch; format!(
            "{} {} {}",
            extents(a.dimensions()),
            op,
            extents(b.dimensions())
        )));
    }
    let mut m = Matrix::configure(Kind::Numeric, a.dimensions(), threshold)?;
    let mut apply = |offset: usize| -> Result<()> {
        let lhs = a.get_flat(offset)?.number()?;
        let rhs = b.get_flat(offset)?.number()?;
        m.set_flat(offset, Val::Number(op.apply(lhs, rhs)?))
    };
    match sparse_offsets(&[a, b], || op.apply(0.0, 0.0))? {
        Some(offsets) => offsets.into_iter().try_for_each(&mut apply)?,
        None => (0..a.len()).try_for_each(&mut apply)?,
    }
    Ok(m)
}

/// Applies `op` between every element and `scalar`. With `scalar_left` the
/// scalar is the left operand.
pub fn scalar(
    a: &Matrix,
    scalar: f64,
    op: Operator,
    scalar_left: bool,
    threshold: usize,
) -> Result<Matrix> {
    numeric(a)?;
    let mut m = Matrix::configure(Kind::Numeric, a.dimensions(), threshold)?;
    let with = |x: f64| {
        if scalar_left {
            op.apply(scalar, x)
        } else {
            op.apply(x, scalar)
        }
    };
    let mut apply = |offset: usize| -> Result<()> {
        let x = a.get_flat(offset)?.number()?;
        m.set_flat(offset, Val::Number(with(x)?))
    };
    match sparse_offsets(&[a], || with(0.0))? {
        Some(offsets) => offsets.into_iter().try_for_each(&mut apply)?,
        None => (0..a.len()).try_for_each(&mut apply)?,
    }
    Ok(m)
}

pub fn multiply(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix> {
    let (ar, ac) = a.shape()?;
    let (br, bc) = b.shape()?;
    if ac != br {
        return Err(error!(DimensionMismatch; format!(
            "CANNOT MULTIPLY {}x{} BY {}x{}",
            ar, ac, br, bc
        )));
    }
    if ar.saturating_mul(bc) > COPY_LIMIT {
        return Err(too_large(&[ar, bc]));
    }
    build(&product(&a.rows()?, &b.rows()?), threshold)
}

/// Exponentiation by squaring. `n = 0` gives the identity.
pub fn power(a: &Matrix, n: u32, threshold: usize) -> Result<Matrix> {
    let size = square(a, "POWER")?;
    let mut base = a.rows()?;
    let mut result = identity_rows(size);
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            result = product(&result, &base);
        }
        n >>= 1;
        if n > 0 {
            base = product(&base, &base);
        }
    }
    build(&result, threshold)
}

/// Sparse operands are transposed entry by entry.
pub fn transpose(a: &Matrix, threshold: usize) -> Result<Matrix> {
    numeric(a)?;
    let (r, c) = a.shape()?;
    let mut t = Matrix::configure(Kind::Numeric, &[c, r], threshold)?;
    match a.storage() {
        Storage::Sparse(entries) => {
            for (index, val) in entries {
                let (i, j) = match index.as_slice() {
                    [i] => (*i, 0),
                    [i, j] => (*i, *j),
                    _ => continue,
                };
                t.set(&[j, i], val.clone())?;
            }
        }
        Storage::Dense(_) => {
            for i in 0..r {
                for j in 0..c {
                    t.set(&[j, i], Val::Number(a.at(i, j)?))?;
                }
            }
        }
    }
    Ok(t)
}

/// Gaussian elimination with partial pivoting. A pivot below tolerance
/// means the matrix is singular and the determinant is zero.
pub fn determinant(a: &Matrix) -> Result<f64> {
    let n = square(a, "DETERMINANT")?;
    let mut rows = a.rows()?;
    let mut det = 1.0;
    for col in 0..n {
        let pivot = pivot_row(&rows, col, col);
        if rows[pivot][col].abs() < TOLERANCE {
            return Ok(0.0);
        }
        if pivot != col {
            rows.swap(pivot, col);
            det = -det;
        }
        det *= rows[col][col];
        for r in col + 1..n {
            let factor = rows[r][col] / rows[col][col];
            for c in col..n {
                rows[r][c] -= factor * rows[col][c];
            }
        }
    }
    Ok(det)
}

pub fn rank(a: &Matrix) -> Result<usize> {
    let mut rows = a.rows()?;
    let (r, c) = a.shape()?;
    let mut used = vec![false; r];
    let mut rank = 0;
    for col in 0..c {
        let mut best: Option<usize> = None;
        for i in 0..r {
            if used[i] {
                continue;
            }
            match best {
                Some(b) if rows[b][col].abs() >= rows[i][col].abs() => {}
                _ => best = Some(i),
            }
        }
        let pivot = match best {
            Some(p) if rows[p][col].abs() > TOLERANCE => p,
            _ => continue,
        };
        used[pivot] = true;
        rank += 1;
        for i in 0..r {
            if used[i] {
                continue;
            }
            let factor = rows[i][col] / rows[pivot][col];
            for j in col..c {
                rows[i][j] -= factor * rows[pivot][j];
            }
        }
    }
    Ok(rank)
}

pub fn trace(a: &Matrix) -> Result<f64> {
    let n = square(a, "TRACE")?;
    let mut sum = 0.0;
    for i in 0..n {
        sum += a.at(i, i)?;
    }
    Ok(sum)
}

/// Solves `A X = B` by Gauss-Jordan elimination on `[A|B]`.
pub fn solve(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix> {
    let n = square(a, "SOLVE")?;
    let (br, bc) = b.shape()?;
    if br != n {
        return Err(error!(DimensionMismatch; format!(
            "SOLVE NEEDS {} ROWS ON THE RIGHT, GOT {}",
            n, br
        )));
    }
    let mut aug: Vec<Vec<f64>> = a
        .rows()?
        .into_iter()
        .zip(b.rows()?)
        .map(|(mut row, rhs)| {
            row.extend(rhs);
            row
        })
        .collect();
    eliminate(&mut aug, n, "SYSTEM IS SINGULAR")?;
    let x: Vec<Vec<f64>> = aug.into_iter().map(|row| row[n..n + bc].to_vec()).collect();
    if b.dimensions().len() == 1 {
        let mut m = Matrix::configure(Kind::Numeric, &[n], threshold)?;
        for (i, row) in x.iter().enumerate() {
            m.set(&[i], Val::Number(row[0]))?;
        }
        return Ok(m);
    }
    build(&x, threshold)
}

/// Reduces the left `n` columns of `aug` to the identity.
fn eliminate(aug: &mut [Vec<f64>], n: usize, singular: &'static str) -> Result<()> {
    let width = aug.first().map(|r| r.len()).unwrap_or(0);
    for col in 0..n {
        let pivot = pivot_row(aug, col, col);
        if aug[pivot][col].abs() < TOLERANCE {
            return Err(error!(SingularMatrix; singular));
        }
        aug.swap(pivot, col);
        let p = aug[col][col];
        for j in 0..width {
            aug[col][j] /= p;
        }
        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = aug[r][col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..width {
                aug[r][j] -= factor * aug[col][j];
            }
        }
    }
    Ok(())
}

pub fn inverse(a: &Matrix, threshold: usize) -> Result<Matrix> {
    let n = square(a, "INVERSE")?;
    let mut aug: Vec<Vec<f64>> = a
        .rows()?
        .into_iter()
        .zip(identity_rows(n))
        .map(|(mut row, id)| {
            row.extend(id);
            row
        })
        .collect();
    eliminate(&mut aug, n, "MATRIX IS NOT INVERTIBLE")?;
    let inv: Vec<Vec<f64>> = aug.into_iter().map(|row| row[n..].to_vec()).collect();
    build(&inv, threshold)
}

/// Doolittle decomposition without pivoting: `A = L U` with a unit
/// diagonal in `L`.
pub fn lu(a: &Matrix, threshold: usize) -> Result<(Matrix, Matrix)> {
    let n = square(a, "LU")?;
    let rows = a.rows()?;
    let mut l = vec![vec![0.0; n]; n];
    let mut u = vec![vec![0.0; n]; n];
    for i in 0..n {
        for k in i..n {
            let sum: f64 = (0..i).map(|j| l[i][j] * u[j][k]).sum();
            u[i][k] = rows[i][k] - sum;
        }
        if u[i][i].abs() < TOLERANCE {
            return Err(error!(SingularMatrix; "ZERO PIVOT IN LU DECOMPOSITION"));
        }
        l[i][i] = 1.0;
        for k in i + 1..n {
            let sum: f64 = (0..i).map(|j| l[k][j] * u[j][i]).sum();
            l[k][i] = (rows[k][i] - sum) / u[i][i];
        }
    }
    Ok((build(&l, threshold)?, build(&u, threshold)?))
}

/// The main diagonal as a column.
pub fn diagonal(a: &Matrix, threshold: usize) -> Result<Matrix> {
    let (r, c) = a.shape()?;
    numeric(a)?;
    let d: Vec<Vec<f64>> = (0..r.min(c))
        .map(|i| a.at(i, i).map(|v| vec![v]))
        .collect::<Result<_>>()?;
    build(&d, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::DENSE_THRESHOLD as T;

    fn m(rows: &[&[f64]]) -> Matrix {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn assert_rows(actual: &Matrix, expected: &[&[f64]]) {
        let rows = actual.rows().unwrap();
        assert_eq!(rows.len(), expected.len());
        for (r, e) in rows.iter().zip(expected) {
            assert_eq!(r.len(), e.len());
            for (x, y) in r.iter().zip(e.iter()) {
                assert!(close(*x, *y), "{:?} != {:?}", rows, expected);
            }
        }
    }

    #[test]
    fn test_determinants() {
        assert!(close(determinant(&m(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap(), -2.0));
        assert!(close(determinant(&identity(5, T).unwrap()).unwrap(), 1.0));
        let a = m(&[&[6.0, 1.0, 1.0], &[4.0, -2.0, 5.0], &[2.0, 8.0, 7.0]]);
        assert!(close(determinant(&a).unwrap(), -306.0));
        assert_eq!(determinant(&m(&[&[1.0, 2.0], &[2.0, 4.0]])).unwrap(), 0.0);
        let e = determinant(&m(&[&[1.0, 2.0, 3.0]])).unwrap_err();
        assert!(e.is(ErrorCode::DimensionMismatch));
    }

    #[test]
    fn test_multiply_dimensions() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let bad = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0], &[7.0, 8.0]]);
        let e = multiply(&a, &bad, T).unwrap_err();
        assert!(e.is(ErrorCode::DimensionMismatch));
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let p = multiply(&a, &b, T).unwrap();
        assert_eq!(p.dimensions(), &[2, 2]);
        assert_rows(&p, &[&[58.0, 64.0], &[139.0, 154.0]]);
    }

    #[test]
    fn test_element_wise_and_scalar() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[4.0, 3.0], &[2.0, 1.0]]);
        assert_rows(
            &element_wise(&a, &b, Operator::Minus, T).unwrap(),
            &[&[-3.0, -1.0], &[1.0, 3.0]],
        );
        let z = m(&[&[1.0, 0.0], &[1.0, 1.0]]);
        let e = element_wise(&a, &z, Operator::Divide, T).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
        let c = m(&[&[1.0, 2.0, 3.0]]);
        let e = element_wise(&a, &c, Operator::Plus, T).unwrap_err();
        assert!(e.is(ErrorCode::DimensionMismatch));
        assert_rows(
            &scalar(&a, 10.0, Operator::Minus, true, T).unwrap(),
            &[&[9.0, 8.0], &[7.0, 6.0]],
        );
        assert_rows(
            &scalar(&a, 2.0, Operator::Divide, false, T).unwrap(),
            &[&[0.5, 1.0], &[1.5, 2.0]],
        );
        assert!(scalar(&a, 0.0, Operator::Divide, false, T).is_err());
    }

    #[test]
    fn test_power() {
        let a = m(&[&[1.0, 1.0], &[1.0, 0.0]]);
        assert_rows(&power(&a, 0, T).unwrap(), &[&[1.0, 0.0], &[0.0, 1.0]]);
        assert_rows(&power(&a, 10, T).unwrap(), &[&[89.0, 55.0], &[55.0, 34.0]]);
        let r = m(&[&[1.0, 2.0, 3.0]]);
        assert!(power(&r, 2, T).is_err());
    }

    #[test]
    fn test_transpose_trace_rank() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = transpose(&a, T).unwrap();
        assert_eq!(t.dimensions(), &[3, 2]);
        assert_rows(&t, &[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]);
        assert_eq!(rank(&a).unwrap(), 2);
        assert_eq!(rank(&m(&[&[1.0, 2.0], &[2.0, 4.0]])).unwrap(), 1);
        assert_eq!(rank(&filled(&[3, 3], 0.0, T).unwrap()).unwrap(), 0);
        assert!(close(trace(&m(&[&[1.0, 9.0], &[9.0, 4.0]])).unwrap(), 5.0));
        assert!(trace(&a).is_err());
    }

    #[test]
    fn test_solve() {
        let a = m(&[&[2.0, 1.0], &[1.0, 3.0]]);
        let b = m(&[&[3.0], &[5.0]]);
        assert_rows(&solve(&a, &b, T).unwrap(), &[&[0.8], &[1.4]]);
        let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        let e = solve(&singular, &b, T).unwrap_err();
        assert!(e.is(ErrorCode::SingularMatrix));
        let short = m(&[&[1.0]]);
        assert!(solve(&a, &short, T).is_err());
    }

    #[test]
    fn test_inverse_and_lu() {
        let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let inv = inverse(&a, T).unwrap();
        assert_rows(&inv, &[&[0.6, -0.7], &[-0.2, 0.4]]);
        assert_rows(&multiply(&a, &inv, T).unwrap(), &[&[1.0, 0.0], &[0.0, 1.0]]);
        let (l, u) = lu(&a, T).unwrap();
        assert_rows(&l, &[&[1.0, 0.0], &[0.5, 1.0]]);
        assert_rows(&u, &[&[4.0, 7.0], &[0.0, 2.5]]);
        let zero_pivot = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert!(lu(&zero_pivot, T).unwrap_err().is(ErrorCode::SingularMatrix));
        assert!(inverse(&m(&[&[1.0, 2.0], &[2.0, 4.0]]), T).is_err());
    }

    #[test]
    fn test_constructors() {
        let ones = filled(&[2, 3], 1.0, T).unwrap();
        assert_rows(&ones, &[&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]]);
        let big = filled(&[100, 100], 0.0, T).unwrap();
        assert!(!big.is_dense());
        let d = diagonal(&m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]), T).unwrap();
        assert_eq!(d.dimensions(), &[2, 1]);
        assert_rows(&d, &[&[1.0], &[5.0]]);
    }

    #[test]
    fn test_huge_sparse_operands() {
        let id = identity(100_000, T).unwrap();
        assert!(!id.is_dense());
        assert_eq!(id.at(99_999, 99_999).unwrap(), 1.0);
        assert_eq!(trace(&id).unwrap(), 100_000.0);

        let mut b = Matrix::configure(Kind::Numeric, &[100_000, 50_000], T).unwrap();
        b.set(&[7, 3], Val::Number(2.0)).unwrap();
        let t = transpose(&b, T).unwrap();
        assert_eq!(t.dimensions(), &[50_000, 100_000]);
        assert_eq!(t.at(3, 7).unwrap(), 2.0);

        let doubled = scalar(&b, 3.0, Operator::Multiply, false, T).unwrap();
        assert_eq!(doubled.at(7, 3).unwrap(), 6.0);
        let e = scalar(&b, 1.0, Operator::Plus, false, T).unwrap_err();
        assert!(e.is(ErrorCode::Overflow));
        let sum = element_wise(&b, &b, Operator::Plus, T).unwrap();
        assert_eq!(sum.at(7, 3).unwrap(), 4.0);
        let e = element_wise(&b, &b, Operator::Divide, T).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));

        assert!(determinant(&id).unwrap_err().is(ErrorCode::Overflow));
        assert!(multiply(&id, &id, T).unwrap_err().is(ErrorCode::Overflow));
        assert!(filled(&[100_000, 100_000], 1.0, T).unwrap_err().is(ErrorCode::Overflow));
    }
}
