/*!
# `DIM <name>(<extent>[,<extent>...])[,...]`

## Purpose
Declare a matrix and the size of each of its dimensions.

## Remarks
Indices run from 0 to one less than the extent, so `DIM X(3)` has
`X(0)` to `X(2)`. Up to 15 dimensions are allowed. Every element starts
at 0, or the empty string for names ending in `$`.

A matrix with more than 10000 elements keeps only the elements that
are not zero. Declaring the same name again replaces the matrix.

## Example
```text
10 DIM A$(3), X(10, 10)
20 A$(2) = "THE ANSWER"
30 X(4, 2) = 2.5
40 PRINT A$(2); " "; X(4, 2)
RUN
THE ANSWER 2.5
```
*/
