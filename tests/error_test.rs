mod common;
use common::*;
use ipp::mach::Event;

#[test]
fn test_every_error_code_has_a_trigger() {
    let cases: &[(&str, i32)] = &[
        ("WRITE int@1\n", 31),
        (".IPPcode23\nBOGUS\n", 32),
        (".IPPcode23\nLABEL a\nLABEL a\n", 52),
        (".IPPcode23\nCALL ghost\n", 52),
        (".IPPcode23\nDEFVAR GF@x\nADD GF@x int@1 bool@true\n", 53),
        (".IPPcode23\nWRITE GF@missing\n", 54),
        (".IPPcode23\nWRITE TF@x\n", 55),
        (".IPPcode23\nDEFVAR GF@x\nWRITE GF@x\n", 56),
        (".IPPcode23\nDEFVAR GF@x\nIDIV GF@x int@1 int@0\n", 57),
        (".IPPcode23\nDEFVAR GF@x\nGETCHAR GF@x string@ab int@5\n", 58),
    ];
    for (source, code) in cases {
        assert_eq!(err_code(source), *code, "{}", source);
    }
}

#[test]
fn test_idiv_by_zero_regardless_of_sign() {
    assert_eq!(err_code(".IPPcode23\nDEFVAR GF@x\nIDIV GF@x int@-5 int@0\n"), 57);
    assert_eq!(err_code(".IPPcode23\nDEFVAR GF@x\nIDIV GF@x int@0 int@0\n"), 57);
}

#[test]
fn test_error_reports_carry_the_order() {
    let mut r = load(".IPPcode23\nCREATEFRAME\nPOPFRAME\n");
    let e = exec_err(&mut r);
    assert_eq!(e.exit_code(), 55);
    assert_eq!(e.to_string(), "error 55: frame not found at order 2");
}

#[test]
fn test_effects_before_the_error_remain() {
    let mut r = load(".IPPcode23\nWRITE string@kept\nRETURN\n");
    assert_eq!(r.execute(100).unwrap(), Event::Print("kept".to_string()));
    let e = r.execute(100).unwrap_err();
    assert_eq!(e.exit_code(), 56);
}

#[test]
fn test_the_first_error_aborts_the_run() {
    // DEFVAR is never reached; the undeclared store target is hit first.
    let mut r = load(".IPPcode23\nMOVE GF@x int@1\nDEFVAR GF@x\n");
    assert_eq!(exec_err(&mut r).exit_code(), 54);
}

#[test]
fn test_exit_code_passthrough() {
    let mut r = load(".IPPcode23\nEXIT int@23\n");
    let run = exec(&mut r);
    assert_eq!(run.code, 23);
    assert_eq!(run.output, "");
}

#[test]
fn test_assembly_rejects_before_any_output() {
    // The WRITE on line 2 never runs; the bad opcode on line 3 is caught first.
    assert_eq!(err_code(".IPPcode23\nWRITE string@never\nBOGUS\n"), 32);
}
