/*!
# Appendix A: Instructions and Error Codes

Operands are written the way the loader classifies them. `var` is a
frame-qualified name like `GF@x`. `symb` is a constant or a `var`.
`label` is a bare identifier. `type` is one of the words `int`,
`string`, `bool`. Opcode names are case insensitive; everything else
is case sensitive.

## Frames and variables

| Instruction | Effect |
|-|-|
| MOVE var symb | Copy the value of symb into var |
| CREATEFRAME | Make a fresh temporary frame, discarding any old one |
| PUSHFRAME | Move the temporary frame onto the local frame stack |
| POPFRAME | Move the top local frame back to the temporary frame |
| DEFVAR var | Define a new, empty variable in its frame |

## Calls and the data stack

| Instruction | Effect |
|-|-|
| CALL label | Save the return position and jump to label |
| RETURN | Jump back to the most recent saved position |
| PUSHS symb | Push the value of symb onto the data stack |
| POPS var | Pop the data stack into var |

## Arithmetic, relations, conversions

All of these store their result into var.

| Instruction | Effect |
|-|-|
| ADD var symb symb | Integer addition |
| SUB var symb symb | Integer subtraction |
| MUL var symb symb | Integer multiplication |
| IDIV var symb symb | Integer division, flooring; zero divisor is error 57 |
| LT var symb symb | Less-than over two ints or two strings |
| GT var symb symb | Greater-than over two ints or two strings |
| EQ var symb symb | Equality of same-typed operands; `nil` allowed against anything |
| AND var symb symb | Boolean conjunction |
| OR var symb symb | Boolean disjunction |
| NOT var symb | Boolean negation |
| INT2CHAR var symb | The character with the given code point, as a string |
| STRI2INT var symb symb | The code point of the character at an index |

## Strings

| Instruction | Effect |
|-|-|
| CONCAT var symb symb | Concatenation of two strings |
| STRLEN var symb | Character count of a string |
| GETCHAR var symb symb | One-character string taken at an index |
| SETCHAR var symb symb | Replace the character of var at an index with the first character of a string |
| TYPE var symb | The dynamic type name of symb, or `""` for an empty variable |

## Control flow

| Instruction | Effect |
|-|-|
| LABEL label | Name this position; does nothing when executed |
| JUMP label | Continue at label |
| JUMPIFEQ label symb symb | Continue at label when the operands are equal |
| JUMPIFNEQ label symb symb | Continue at label when the operands differ |
| EXIT symb | Halt with an exit code between 0 and 49 |

## Input, output, debugging

| Instruction | Effect |
|-|-|
| READ var type | Read one input line, parsed as type; `nil` on end of input |
| WRITE symb | Print the value of symb, with no newline |
| DPRINT symb | Print the value of symb to standard error |
| BREAK | Dump the machine state to standard error |

## Error codes

The interpreter exits with the code of the first error. Codes up to 49
never come from the interpreter itself; they belong to `EXIT`.

| Code | Meaning |
|-|-|
| 10 | Invalid command line arguments |
| 11 | Cannot read an input file |
| 12 | Cannot write an output file |
| 31 | Malformed program text: bad header, unreadable token |
| 32 | Ill-formed instruction: unknown opcode, bad operand count or form, bad order |
| 52 | Duplicate label, redefined variable, jump to a label that exists nowhere |
| 53 | Operand of the wrong type |
| 54 | Variable not defined in its frame |
| 55 | Frame does not exist |
| 56 | Missing value: empty variable or empty stack |
| 57 | Wrong operand value: zero divisor, exit code out of range |
| 58 | String index out of range, invalid code point |
| 99 | Internal interpreter failure |

*/
