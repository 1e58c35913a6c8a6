/*!
# `PRINT [#<channel>,][<list of expressions>]`
Also `?`.

## Purpose
Output information to the terminal or a file.

## Remarks
A `PRINT` by itself outputs a newline.
A semicolon between expressions prints nothing between them.
A comma prints a single space.
A separator at the end suppresses the newline.

`PRINT USING` formats values with a template, see `:=`.

## Example
```text
PRINT "SPAGHETTI", 1; 2
SPAGHETTI 12
```

*/
