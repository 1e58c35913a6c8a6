/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
`STEP` defaults to 1 and may be negative.
The body always runs at least once; the bound is checked by `NEXT`.
A `FOR` on a variable that already has an open loop replaces that loop.
Loops nest up to 15 deep.

## Example 1
```text
10 FOR I=1 TO 7 STEP 3
20 PRINT "SAUCE";I
30 NEXT I
RUN
SAUCE1
SAUCE4
SAUCE7
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X, Y
40 NEXT Y, X
RUN
1 5
1 6
2 5
2 6
```

*/
