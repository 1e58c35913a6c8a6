/*!
# `IF <condition> THEN <statement or line> [ELSE <statement or line>]`
Also `IF <condition> GOTO <line>`.

## Purpose
Do something contingent on a condition.

## Remarks
A branch that is just a number jumps to that line.
Anything else is run as a statement.

## Example
```text
10 A = 10
20 IF A < 30 THEN PRINT A ELSE 50
30 A = A + 10
40 GOTO 20
50 END
RUN
10
20
```

*/
