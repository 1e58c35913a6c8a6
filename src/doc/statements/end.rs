/*!
# `END`

## Purpose
Stop running the program and return to the `READY.` prompt.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
