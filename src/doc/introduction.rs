/*!
# Introductory Tutorial for Spaghetti BASIC

Run the executable from a terminal. When it prints `READY.` it is waiting
for you. Type CTRL-D or `BYE` to leave. Stop a running program with CTRL-C.

<pre><code>&nbsp;  READY. print "Hello World"
&nbsp;  Hello World
</code></pre>

A statement typed without a line number runs immediately. This is direct
mode. Put a number in front of it and the statement is stored instead.
Line numbers are whole numbers starting at 0.

<pre><code>&nbsp;  READY. 10 print "Hello World"
&nbsp;  READY. 20 goto 10
&nbsp;  READY. list
&nbsp;  10 print "Hello World"
&nbsp;  20 goto 10
</code></pre>

Keywords and variable names are not case sensitive; `x` and `X` are the
same variable. `RUN` starts the program and CTRL-C breaks out of this one.

<pre><code>&nbsp;  READY. run
&nbsp;  Hello World
&nbsp;  Hello World
&nbsp;  ?BREAK IN 10
</code></pre>

Type a line number followed by TAB to bring that line back for editing.
Typing a line number by itself deletes the line.

## Variables

A name ending in `$` holds a string. Any other name holds a number.
`LET` is optional.

<pre><code>&nbsp;  READY. 10 N$ = "WORLD"
&nbsp;  READY. 20 X = 6 * 7
&nbsp;  READY. 30 PRINT "HELLO "; N$; X
&nbsp;  READY. run
&nbsp;  HELLO WORLD42
</code></pre>

## Matrices

`DIM` declares a matrix of up to 15 dimensions. Indices start at 0.
Small matrices are stored densely; large ones only keep the elements
that are not zero, so `DIM BIG(100000, 100000)` costs nothing until you
write to it.

<pre><code>&nbsp;  READY. 10 DIM A(2, 2)
&nbsp;  READY. 20 A(0, 1) = 2
&nbsp;  READY. 30 PRINT A(0, 1) + A(1, 1)
&nbsp;  READY. run
&nbsp;  2
</code></pre>

Only one statement fits on a line. The `MAT` statement does whole-matrix
work; see chapter 3.

## Saving your work

`SAVE "file.bas"` writes the program and `LOAD "file.bas"` reads it back.
`RUN "file.bas"` loads and runs in one step. `RENUMBER` spaces the lines
out again and fixes every `GOTO` and `GOSUB` that pointed at them.
`SYNTAX` checks the program without running it.

*/
