mod common;
use common::*;
use ipp::mach::Event;

#[test]
fn test_read_parses_by_type() {
    let mut r = load_with(
        "\
        .IPPcode23\n\
        DEFVAR GF@x\n\
        READ GF@x int\n\
        WRITE GF@x\n\
        READ GF@x bool\n\
        WRITE GF@x\n\
        READ GF@x string\n\
        WRITE GF@x\n",
        &["-7", "tRuE", "verbatim line"],
    );
    assert_eq!(exec(&mut r).output, "-7trueverbatim line");
}

#[test]
fn test_read_int_tolerates_spaces() {
    let mut r = load_with(
        ".IPPcode23\nDEFVAR GF@x\nREAD GF@x int\nWRITE GF@x\n",
        &["  42  "],
    );
    assert_eq!(exec(&mut r).output, "42");
}

#[test]
fn test_unparsable_int_reads_as_nil() {
    let mut r = load_with(
        "\
        .IPPcode23\n\
        DEFVAR GF@x\n\
        DEFVAR GF@t\n\
        READ GF@x int\n\
        TYPE GF@t GF@x\n\
        WRITE GF@t\n",
        &["4x2"],
    );
    assert_eq!(exec(&mut r).output, "nil");
}

#[test]
fn test_any_line_but_true_reads_as_false() {
    let mut r = load_with(
        ".IPPcode23\nDEFVAR GF@x\nREAD GF@x bool\nWRITE GF@x\n",
        &["yes"],
    );
    assert_eq!(exec(&mut r).output, "false");
}

#[test]
fn test_exhausted_input_reads_as_nil() {
    let mut r = load_with(
        "\
        .IPPcode23\n\
        DEFVAR GF@x\n\
        DEFVAR GF@t\n\
        READ GF@x string\n\
        READ GF@x string\n\
        TYPE GF@t GF@x\n\
        WRITE GF@t\n",
        &["only one line"],
    );
    assert_eq!(exec(&mut r).output, "nil");
}

#[test]
fn test_each_read_consumes_one_line() {
    let mut r = load_with(
        "\
        .IPPcode23\n\
        DEFVAR GF@a\n\
        DEFVAR GF@b\n\
        READ GF@a int\n\
        READ GF@b int\n\
        ADD GF@a GF@a GF@b\n\
        WRITE GF@a\n",
        &["30", "12"],
    );
    assert_eq!(exec(&mut r).output, "42");
}

#[test]
fn test_interactive_read_requests_a_line() {
    let mut r = load(".IPPcode23\nDEFVAR GF@x\nREAD GF@x string\nWRITE GF@x\n");
    assert_eq!(r.execute(100).unwrap(), Event::Input);
    r.input(Some("from the terminal")).unwrap();
    assert_eq!(
        r.execute(100).unwrap(),
        Event::Print("from the terminal".to_string())
    );
    assert_eq!(r.execute(100).unwrap(), Event::Stopped(0));
}

#[test]
fn test_interactive_end_of_input() {
    let mut r = load(".IPPcode23\nDEFVAR GF@x\nDEFVAR GF@t\nREAD GF@x bool\nTYPE GF@t GF@x\nWRITE GF@t\n");
    assert_eq!(r.execute(100).unwrap(), Event::Input);
    r.input(None).unwrap();
    assert_eq!(r.execute(100).unwrap(), Event::Print("nil".to_string()));
}
