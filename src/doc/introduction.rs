/*!
# Introductory Tutorial for IPPcode23

IPPcode23 is a three-address intermediate code. Nobody writes large
programs in it by hand; compilers emit it and this interpreter runs it.
It is still a pleasant little language to poke at directly, and the
best way to learn what the interpreter does is to feed it a few lines.

A program is plain text. The first non-empty line must be the header
`.IPPcode23`, then one instruction per line: an opcode followed by its
operands, separated by whitespace. Everything from `#` to the end of
the line is a comment. Save this as `hello.ippcode`:

```text
.IPPcode23        # the mandatory header
WRITE string@Hello
WRITE string@\032 # a space, written as a decimal escape
WRITE string@World
WRITE string@\010
```

and run it:

<pre><code>&nbsp;$ ippcode --source hello.ippcode
&nbsp;Hello World
</code></pre>

`WRITE` takes a symbol, which is either a constant or a variable.
Constants spell their type before the `@`: `int@42`, `bool@true`,
`string@abc`, `nil@nil`. Strings never use quotes; spaces and other
awkward characters are written as a backslash and exactly three decimal
digits, so `\032` is a space and `\092` is a backslash itself.

Variables live in frames and must be defined before use. The global
frame `GF` always exists:

```text
.IPPcode23
DEFVAR GF@count
MOVE GF@count int@3
MUL GF@count GF@count int@14
WRITE GF@count    # prints 42
```

The interpreter reads the program's input with `READ`, one line per
instruction. Here is a whole program that echoes a number back, which
you can try with input from the terminal:

<pre><code>&nbsp;$ ippcode --source echo.ippcode
&nbsp;7
&nbsp;You typed: 7
</code></pre>

```text
.IPPcode23
DEFVAR GF@n
READ GF@n int
WRITE string@You\032typed:\032
WRITE GF@n
WRITE string@\010
```

When the input for `READ` comes from a file instead, name it with
`--input`. At least one of `--source` and `--input` must be a file;
the other defaults to standard input.

Errors are reported on standard error with a numeric code, and the
process exits with that code. A program that divides by zero says so
and names the offending instruction by its order, the 1-based position
of the instruction in the source:

<pre><code>&nbsp;$ ippcode --source oops.ippcode
&nbsp;<b>error 57: wrong operand value at order 3; division by zero</b>
</code></pre>

The rest of this manual is reference material: the machine model in
Chapter 1, then the complete instruction set and error code catalog
in Appendix A.

*/
