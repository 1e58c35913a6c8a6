/*!
# `OPEN <filename> FOR INPUT|OUTPUT|APPEND AS #<channel>`
Also `CLOSE [#<channel>[,...]]`.

## Purpose
Connect a numbered channel to a file for `PRINT #` and `INPUT #`.

## Remarks
`OUTPUT` truncates the file, `APPEND` adds to its end. A channel that is
already open is an error. `CLOSE` without a channel closes all of them.
Channels are also closed when the program stops.

## Example
```text
10 OPEN "sauce.txt" FOR OUTPUT AS #1
20 PRINT #1, "TOMATO,3"
30 CLOSE #1
40 OPEN "sauce.txt" FOR INPUT AS #1
50 INPUT #1, A$, N
60 PRINT A$; N
RUN
TOMATO3
```

*/
