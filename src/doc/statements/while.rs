/*!
# `WHILE <condition>` ... `WEND`

## Purpose
Loop while the condition is true.

## Remarks
If the condition is false to begin with, execution skips to the line
after the matching `WEND`. `WEND` checks the condition again and
continues after the `WHILE` while it holds.

## Example
```text
10 READ A$
20 WHILE A$ <> "END"
30 PRINT A$;
40 READ A$
50 WEND
60 DATA "S","A","U","C","E","END"
RUN
SAUCE
```

*/
