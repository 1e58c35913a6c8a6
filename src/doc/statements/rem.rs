/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing. Line numbers inside a remark are left alone
by `RENUMBER`.

## Example
```text
10 REM GOTO 20 IS NOT A JUMP
20 PRINT 42
RUN
42
```

*/
