/*!
# `BEEP`

## Purpose
Accepted so older programs run unchanged. It does nothing.

## Example
```text
10 BEEP
20 PRINT "DONE"
RUN
DONE
```

*/
