/*!
# Error Messages

Errors print with a leading `?`, the line they happened in, and sometimes
a detail after a semicolon.
```text
?SINGULAR MATRIX IN 40; INVERSE OF A
```

Most errors stop the program. A few are only reported and the program
keeps going: an element outside a matrix, an unknown statement, and a
bad answer to `INPUT`, which asks again.

| Code | Message | Cause |
|-----:|---------|-------|
| 1 | NEXT WITHOUT FOR | `NEXT` with no matching `FOR` open |
| 2 | SYNTAX ERROR | The line could not be understood |
| 3 | RETURN WITHOUT GOSUB | `RETURN` with no `GOSUB` open |
| 4 | OUT OF DATA | `READ` past the last `DATA` item |
| 5 | ILLEGAL FUNCTION CALL | An argument out of range for a function or statement |
| 6 | OVERFLOW | More than 15 nested `GOSUB` or loops, a line number too large to store, or a matrix too large to copy |
| 8 | UNDEFINED LINE | A jump to a line that does not exist |
| 9 | SUBSCRIPT OUT OF RANGE | A matrix index outside its extents |
| 11 | DIVISION BY ZERO | Division by zero |
| 13 | TYPE MISMATCH | A string where a number belongs, or the reverse |
| 17 | BREAK | CTRL-C or `STOP` |
| 18 | UNDEFINED USER FUNCTION | `FN` call of a name never given to `DEF` |
| 29 | WHILE WITHOUT WEND | `WHILE` with no `WEND` after it |
| 30 | WEND WITHOUT WHILE | `WEND` with no `WHILE` open |
| 31 | UNTIL WITHOUT REPEAT | `UNTIL` with no `REPEAT` open |
| 32 | UNKNOWN IDENTIFIER | `SYNTAX` found a call to an unknown function |
| 33 | UNDEFINED MATRIX | A matrix used before `DIM` or `MAT` created it |
| 34 | DIMENSION MISMATCH | Matrix shapes that do not fit the operation |
| 35 | SINGULAR MATRIX | `INVERSE` or `SOLVE` of a singular matrix |
| 51 | INTERNAL ERROR | A file system failure |
| 52 | BAD FILE NUMBER | A channel that is not open, or already is |
| 53 | FILE NOT FOUND | `LOAD`, `RUN` or `OPEN` of a missing file |
| 54 | BAD FILE MODE | `PRINT #` to an input channel or `INPUT #` from an output one |
| 62 | INPUT PAST END | `INPUT #` past the end of a file |

*/
