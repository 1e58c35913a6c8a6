/*!
# `RUN [<filename>]`

## Purpose
Clear variables and start the program.

## Remarks
Providing a filename loads a program and runs it.

## Example
```text
10 PRINT "Hello World"
RUN
Hello World
```

*/
