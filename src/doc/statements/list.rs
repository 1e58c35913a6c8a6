/*!
# `LIST [<from line number>][-<to line number>]`

## Purpose
Show the BASIC program currently in memory.

## Remarks
A single number lists from that line to the end.

## Example
```text
LIST          ' Everything.
LIST 120      ' From 120 to the last.
LIST 500-600  ' Only lines 500 to 600 inclusive.
LIST 500,600  ' The same.
```

*/
