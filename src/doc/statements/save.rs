/*!
# `SAVE <filename>`

## Purpose
Save the current BASIC program to the filesystem.

## Example
```text
SAVE "bolognese.bas"
Saved 42 lines to bolognese.bas
```
*/
