/*!
# `:= <template>`
Used with `PRINT USING <line>; <expressions>`.

## Purpose
Keep a `PRINT USING` template on a line of its own.

## Remarks
`PRINT USING` takes either a string template or the number of a `:=` line.
In the template, a run of `#` with at most one `.` is a number field.
A run of `l`, `r` or `c` is a string field, left, right or centered.
`$` takes one character. Anything else is copied.
Numbers too wide for their field print as `*`.

## Example
```text
10 := "ll:###.##"
20 PRINT USING 10; "PI", 3.14159
RUN
PI:  3.14
```

*/
