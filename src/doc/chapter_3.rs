/*!
# Matrices

`DIM` creates a matrix and `MAT` works on it as a whole. Names on the left
of `=` are created or replaced; the old contents are only replaced once
the new result is complete, so a failing `MAT` leaves the target alone.

Matrices with 10000 or more elements are stored sparsely. Results come
out dense or sparse by the same rule, so nothing changes in how you use
them. `IDENTITY`, `TRANSPOSE` and `TRACE` work on sparse matrices of any
size, and so does element-wise arithmetic that leaves unset elements at
zero. The other operations copy their operands and give `?OVERFLOW` past
16777216 elements.

Most of the operations below want two dimensional matrices. A matrix
that does not fit is a `?DIMENSION MISMATCH`. A singular matrix given to
`INVERSE` or `SOLVE` is a `?SINGULAR MATRIX`.

## Filling and showing

```text
10 DIM A(2, 3)
20 MAT READ A
30 MAT PRINT A
40 DATA 1, 2, 3, 4, 5, 6
RUN
{{1,2,3},{4,5,6}}
```

`MAT READ` fills in row order from `DATA`. `MAT PRINT #n, A` writes to
an open channel instead.

## Creating

| Statement | Result |
|-----------|--------|
| `MAT X = IDENTITY(n)` | n by n identity |
| `MAT X = ZEROS(d1, d2, ...)` | all elements 0 |
| `MAT X = ONES(d1, d2, ...)` | all elements 1 |
| `MAT X = A` | a copy of A |

## Element-wise arithmetic

`MAT X = A + B` with `+`, `-`, `*` or `/` works element by element on two
matrices of the same shape. Either side may be a number instead, as in
`MAT X = A * 2` or `MAT X = 1 / A`. Dividing by zero is a
`?DIVISION BY ZERO`.

## Linear algebra

| Statement | Result |
|-----------|--------|
| `MAT MULT X = A * B` | matrix product |
| `MAT POWER X = A ^ n` | A multiplied by itself n times; n = 0 gives the identity |
| `MAT X = TRANSPOSE(A)` | rows and columns swapped; `TRANS(A)` also works |
| `MAT X = INVERSE(A)` | inverse of a square matrix; `INV(A)` also works |
| `MAT X = DIAGONAL(A)` | the diagonal of a square matrix as a column |
| `MAT SOLVE X = A \ B` | X with A times X equal to B |
| `MAT LU X = A` | lower and upper factors stored as `X_L` and `X_U` |
| `MAT D = DETERMINANT(A)` | determinant into the number D |
| `MAT R = RANK(A)` | rank into the number R |
| `MAT T = TRACE(A)` | sum of the diagonal into the number T |

`DET(A)`, `RANK(A)` and `TRACE(A)` can also be used inside any expression.

```text
10 DIM A(2, 2), B(2, 1)
20 MAT READ A, B
30 MAT SOLVE X = A \ B
40 MAT PRINT X
50 DATA 2, 1, 1, 3, 3, 5
RUN
{{0.8},{1.4}}
```

*/
