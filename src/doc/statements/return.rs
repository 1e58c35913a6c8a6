/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. A `RETURN` with no subroutine open is a
`?RETURN WITHOUT GOSUB`.

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
