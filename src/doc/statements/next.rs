/*!
# `NEXT [<variable>][,<variable>...]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
The variable is stepped and compared with the limit. If the loop is not
finished, execution continues after the `FOR`. Naming a variable closes
any loops opened inside it. Without a variable the innermost loop is used.

## Example
```text
10 FOR J=1 TO 2
20 FOR I=1 TO 2
30 NEXT I, J
```

*/
