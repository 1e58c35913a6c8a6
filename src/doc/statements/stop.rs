/*!
# `STOP`

## Purpose
Interrupt the program with a `BREAK` error.

## Remarks
Typically used for debugging. Variables are left intact.

## Example
```text
10 STOP
RUN
?BREAK IN 10
```

*/
