/*!
# `RESTORE`

## Purpose
Moves the `DATA` pointer back to the first item.

## Example
```text
10 FOR I=1 TO 3
20 READ A$
30 PRINT A$;
40 RESTORE
50 NEXT
60 DATA "HO"
RUN
HOHOHO
```

*/
