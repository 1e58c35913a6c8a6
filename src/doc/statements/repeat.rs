/*!
# `REPEAT` ... `UNTIL <condition>`

## Purpose
Loop until the condition is true.

## Remarks
The body always runs at least once.
`UNTIL` without an open `REPEAT` is an `?UNTIL WITHOUT REPEAT`.

## Example
```text
10 N = 1
20 REPEAT
30 N = N * 2
40 UNTIL N > 100
50 PRINT N
RUN
128
```

*/
