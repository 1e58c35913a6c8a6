/*!
# `RENUMBER [<new number>[,<increment>[,<old number>]]]`

## Purpose
Renumber a program.

## Remarks
New number and increment default to 10. Lines below old number keep
their numbers. Every `GOTO`, `GOSUB`, `THEN`, `ELSE`, `ON` and
`PRINT USING` reference is updated.
The order of lines can not change.
Failures do not modify the program in memory.

## Example
```text
RENUMBER
RENUMBER 1000, 5
```

*/
