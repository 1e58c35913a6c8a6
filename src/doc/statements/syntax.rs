/*!
# `SYNTAX`

## Purpose
Check the program in memory without running it.

## Remarks
Reports references to lines that do not exist, calls of unknown
functions and `FOR`, `WHILE` or `REPEAT` loops that never close.

## Example
```text
10 GOSUB 99
SYNTAX
?UNDEFINED LINE IN 10; NO LINE 99
SYNTAX CHECK COMPLETE.
```

*/
