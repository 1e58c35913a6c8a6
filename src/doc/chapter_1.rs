/*!
# Expressions and Functions

## Numbers and strings
Every number is a 64-bit float. Names ending in `$` are strings, all
others are numbers. Mixing the two is a `?TYPE MISMATCH`.

Numeric operators, from loosest to tightest binding:
`+ -`, then `* /`, then unary `-`. Parentheses group as usual.
Powers are written with `POW(X, Y)`.

Strings join with `+`.
```text
A$ = "SPAG" + "HETTI"
```

## Conditions
`IF`, `WHILE` and `UNTIL` take a condition. Comparisons are
`=`, `<>`, `<`, `<=`, `>` and `>=`, and work on numbers or strings.
Combine them with `AND`, `OR` and `NOT`. A plain number is true
when it is not zero.
```text
IF (X > 0 AND X < 10) OR A$ = "Y" THEN 100
```

## Matrix elements
Elements are written `A(i, j)` with indices starting at 0. Reading an
element outside the declared extents reports `?SUBSCRIPT OUT OF RANGE`
and yields 0. Writing outside them is reported and ignored.

## User functions
`DEF FNSQ(X) = X * X` defines a one-line function called as `FNSQ(3)`.
The parameter is local to the call.

*/

pub mod ACS_ASN_ATN {
    /*!
    ## `ACS(X)` `ASN(X)` `ATN(X)` Inverse trigonometric functions in radians.
    */
}

pub mod ASCII {
    /*!
    ## `ASCII(X$)` Returns the character code of the first character of X$.
    ```text
    PRINT ASCII("A")
    65
    ```
    */
}

pub mod CEIL_FLOOR_INT_ROUND {
    /*!
    ## `CEIL(X)` `FLOOR(X)` `INT(X)` `ROUND(X)` Rounding.
    `INT` is the same as `FLOOR`. `ROUND` rounds halves up.
    ```text
    PRINT INT(-2.5); " "; ROUND(2.5)
    -3 3
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the character with code X.
    */
}

pub mod COS_SIN_TAN {
    /*!
    ## `COS(X)` `SIN(X)` `TAN(X)` `COT(X)` `SEC(X)` `CSC(X)`
    Trigonometric functions of an angle in radians.
    `DEG2RAD(X)` and `RAD2DEG(X)` convert between degrees and radians.
    */
}

pub mod DATE_TIME {
    /*!
    ## `DATE$` `TIME$` The local date as `YYYY-MM-DD` and time as `HH:MM:SS`.
    */
}

pub mod DET_RANK_TRACE {
    /*!
    ## `DET(A)` `RANK(A)` `TRACE(A)` Numbers computed from a whole matrix.
    The argument is the name of a two dimensional matrix.
    ```text
    10 DIM A(2, 2)
    20 A(0, 0) = 4
    30 A(1, 1) = 2
    40 PRINT DET(A); " "; TRACE(A)
    RUN
    8 6
    ```
    `DET` and `TRACE` need a square matrix.
    */
}

pub mod EXP_LOG {
    /*!
    ## `EXP(X)` `LOG(X)` `LOG10(X)` `CLOG(X)` `LOGX(B, X)`
    `LOG` is the natural logarithm. `CLOG` is another name for `LOG10`.
    `LOGX` takes the base first. Logarithms of numbers that are not
    positive are an `?ILLEGAL FUNCTION CALL`.
    */
}

pub mod LEFT_RIGHT_MID {
    /*!
    ## `LEFT$(X$, N)` `RIGHT$(X$, N)` `MID$(X$, S[, N])` Substrings.
    `MID$` counts S from 1.
    ```text
    PRINT MID$("SPAGHETTI", 3, 4)
    AGHE
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN$(X$)` Returns the length of X$ as a string.
    */
}

pub mod POW {
    /*!
    ## `POW(X, Y)` Returns X raised to the power Y.
    */
}

pub mod RND {
    /*!
    ## `RND()` Returns a random number from 0 up to but not including 1.
    The generator is seeded from system entropy on start. `SEED n` makes the
    sequence repeatable.
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Square root. Negative X is an `?ILLEGAL FUNCTION CALL`.
    */
}

pub mod STRING {
    /*!
    ## `STRING$(N[, X$])` Returns N copies of the first character of X$,
    or N spaces.
    */
}

pub mod VALUE {
    /*!
    ## `VALUE(X$)` Parses X$ as a number.
    ```text
    PRINT VALUE(" 2.5") * 2
    5
    ```
    */
}
