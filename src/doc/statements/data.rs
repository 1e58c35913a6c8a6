/*!
# `DATA <literal>[,<literal>...]`

## Purpose
`DATA` defines a list of constants to be read in sequentially.

## Remarks
Every `DATA` line in the program is collected before the run starts,
in line order. `READ` takes the next item. Strings must be quoted.
Reading past the last item is an `?OUT OF DATA` error.

## Example
```text
10 READ A$, N
20 PRINT A$; N
30 DATA "MEATBALLS", 3
RUN
MEATBALLS3
```

*/
