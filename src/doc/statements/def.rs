/*!
# `DEF FN<name>(<parameter>) = <expression>`

## Purpose
Define a one-line numeric function for use in other expressions.

## Remarks
The parameter shadows any variable of the same name during the call.
Defining the same name again replaces the old body.
Calling a name that was never defined is an `?UNDEFINED USER FUNCTION`.

## Example
```text
10 DEF FNHYP(X) = SQR(X * X + 16)
20 PRINT FNHYP(3)
RUN
5
```
*/
