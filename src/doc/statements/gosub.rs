/*!
# `GOSUB <line number>`

## Purpose
Remember the current line and move execution to the specified line number.

## Remarks
`RETURN` continues at the line after the `GOSUB`. Subroutines nest up
to 15 deep; one more is an `?OVERFLOW`.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
RUN
HELLO WORLD
```

*/
