/*!
# `INPUT ["<prompt>";|,]<variable>[,<variable>...]`
Also `INPUT #<channel>, <variable>[,<variable>...]`.

## Purpose
Suspends execution and waits for a response from the terminal.

## Remarks
A prompt followed by a semicolon gets `? ` added. A prompt followed
by a comma is shown as is. Without a prompt, `? ` is shown.
Several values are typed separated by commas. A wrong number of
values, or text where a number is expected, asks again.

With a channel, values are read from a file opened `FOR INPUT`.

`INPUT` only works in a program.

## Example
```text
10 INPUT "NAME AND AGE"; N$, AGE
20 PRINT N$; " IS"; AGE
RUN
NAME AND AGE? PASTA, 3
PASTA IS3
```

*/
