/*!
# `LOAD <filename>`

## Purpose
Load a BASIC program from the filesystem.

## Remarks
Each line of the file must start with a line number. Lines with nothing
after the number are skipped. The program in memory is replaced.

## Example
```text
LOAD "bolognese.bas"
Loaded 42 lines from bolognese.bas
```

*/
