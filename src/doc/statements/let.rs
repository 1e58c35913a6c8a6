/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to a variable or a matrix element.

## Remarks
The word `LET` is optional. Assigning outside the declared extents of a
matrix reports `?SUBSCRIPT OUT OF RANGE` and the program continues.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = 20
40 PRINT A
RUN
10
20
```

*/
