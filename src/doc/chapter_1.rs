/*!
# Chapter 1: The Machine

## Values

A value is an integer, a boolean, a string or `nil`. There is no
automatic conversion between them: `ADD` wants two integers, `CONCAT`
wants two strings, and handing either anything else is error 53.
Integers are 64-bit and wrap silently on overflow, except `IDIV` by
zero which is error 57. Strings are sequences of Unicode characters
and every indexing instruction counts characters from zero.

`nil` mostly behaves like a fifth wheel: you cannot add it, order it
or concatenate it. The one place it is welcome is equality. `EQ`,
`JUMPIFEQ` and `JUMPIFNEQ` accept `nil` against any operand and simply
answer that it equals only `nil`.

A defined variable can also hold no value at all, which is not the
same thing as holding `nil`. `DEFVAR` creates the name empty, and
reading an empty variable is error 56. Only the `TYPE` instruction
tolerates emptiness, reporting it as the empty string.

## Frames

Variables live in frames, and a variable name always spells its frame:
`GF@x`, `TF@x` and `LF@x` are three different variables. Names start
with a letter or one of `_ - $ & % * ! ?` and continue with letters,
digits or those same characters. Names are case sensitive.

The global frame `GF` exists for the whole run. The temporary frame
`TF` does not exist until `CREATEFRAME` makes one; running
`CREATEFRAME` again throws away the old one and starts fresh. Local
frames are a stack: `PUSHFRAME` moves the current temporary frame onto
it, after which the same frame is reachable as `LF` and `TF` is gone
until the next `CREATEFRAME`. `POPFRAME` is the exact inverse, moving
the top local frame back to `TF`. Only the top of the local stack is
ever visible; frames below it wait their turn.

Touching a frame that does not exist is error 55. Touching a name the
frame does not contain is error 54. The frame is checked first, so
`LF@x` with no local frame is always 55, never 54.

This dance is the calling convention: the caller builds a frame in
`TF`, pushes it, `CALL`s, and the callee finds its arguments in `LF`
and pops the frame before `RETURN`.

```text
.IPPcode23
CREATEFRAME
DEFVAR TF@who
MOVE TF@who string@World
PUSHFRAME
CALL greet
POPFRAME
EXIT int@0
LABEL greet
WRITE string@Hello,\032
WRITE LF@who
WRITE string@\010
RETURN
```

## Stacks

The machine has a data stack driven by `PUSHS` and `POPS`, useful for
passing values without inventing variable names, and a call stack
maintained by `CALL` and `RETURN`. Popping either stack when it is
empty is error 56.

## Labels and jumps

`LABEL` names a position. The whole program is assembled before it
starts, so jumping forward works. Defining the same label twice is
error 52, caught before the first instruction runs. Jumping or calling
a label that exists nowhere is also 52, though only when the jump is
actually reached.

## Order of instructions

Source text executes top to bottom and each instruction gets an order,
its 1-based position, which error messages use to point at the
culprit. Programs assembled through the library interface may carry
arbitrary positive orders; execution always follows ascending order
and duplicate orders are rejected.

## Input and output

`WRITE` prints a value without any separator or newline: integers in
decimal, booleans as `true` and `false`, strings verbatim and `nil`
as nothing at all. Add `\010` to a string when you want a line break.

`READ` consumes one line of input and parses it as the type named by
its second operand: `int`, `string` or `bool`. A line that fails to
parse as `int` reads as `nil`, and so does end of input. `bool`
reading is forgiving: the line `true` in any capitalization reads as
true and every other line reads as false.

`DPRINT` and `BREAK` write to standard error only. `DPRINT` prints a
single value; `BREAK` dumps the machine state: the order reached, the
instruction count so far, the stack depths and the contents of every
reachable frame.

*/
