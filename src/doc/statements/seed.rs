/*!
# `SEED <expression>`

## Purpose
Restart the random number generator from a known seed.

## Remarks
After the same `SEED`, `RND()` returns the same sequence.

## Example
```text
10 SEED 42
20 PRINT RND()
```

*/
