/*!
# `ON <expression> GOTO|GOSUB <line>[,<line>...]`

## Purpose
Branches to a line based on the value of expression.

## Remarks
The value 1 goes to the first line, 2 the second, and so on. Fractions
are truncated. A value below 1 or past the end of the list is an
`?ILLEGAL FUNCTION CALL`.

## Example
```text
10 FOR I = 1 TO 2
20 ON I GOSUB 100, 200
30 NEXT I
40 END
100 PRINT "ONE"
110 RETURN
200 PRINT "TWO"
210 RETURN
RUN
ONE
TWO
```

*/
