use super::*;
use crate::lang::{ArgKind, Record};
use crate::mach::{Opcode, Param};

#[test]
fn test_orders_rank_but_do_not_address() {
    let records = vec![
        Record::new(900, "WRITE").arg(ArgKind::Str, "c"),
        Record::new(5, "WRITE").arg(ArgKind::Str, "a"),
        Record::new(17, "WRITE").arg(ArgKind::Str, "b"),
    ];
    let program = Program::assemble(records).unwrap();
    assert_eq!(program.len(), 3);
    let mut r = Runtime::new(program);
    assert_eq!(run(&mut r), "abc");
}

#[test]
fn test_empty_program() {
    let program = Program::assemble(vec![]).unwrap();
    assert!(program.is_empty());
    let mut r = Runtime::new(program);
    assert_eq!(stop_code(&mut r), 0);
}

#[test]
fn test_duplicate_order() {
    let records = vec![Record::new(3, "CREATEFRAME"), Record::new(3, "BREAK")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_non_positive_order() {
    let records = vec![Record::new(0, "BREAK")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(-4, "BREAK")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_unknown_opcode() {
    let records = vec![Record::new(1, "FROBNICATE")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_opcode_names_ignore_case() {
    let records = vec![
        Record::new(1, "write").arg(ArgKind::Str, "x"),
        Record::new(2, "Break"),
    ];
    let mut r = Runtime::new(Program::assemble(records).unwrap());
    assert_eq!(run(&mut r), "x");
}

#[test]
fn test_missing_operand() {
    let records = vec![Record::new(1, "ADD")
        .arg(ArgKind::Var, "GF@x")
        .arg(ArgKind::Int, "1")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_unexpected_operand() {
    let records = vec![Record::new(1, "CREATEFRAME").arg(ArgKind::Int, "1")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_operand_gap() {
    let mut record = Record::new(1, "ADD")
        .arg(ArgKind::Var, "GF@x")
        .arg(ArgKind::Int, "1");
    record.args[2] = record.args[1].take();
    assert_eq!(Program::assemble(vec![record]).unwrap_err().exit_code(), 32);
}

#[test]
fn test_operand_kind_mismatch() {
    let records = vec![Record::new(1, "DEFVAR").arg(ArgKind::Label, "x")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "JUMP").arg(ArgKind::Var, "GF@x")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "READ")
        .arg(ArgKind::Var, "GF@x")
        .arg(ArgKind::Str, "int")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_bad_variable_text() {
    let records = vec![Record::new(1, "DEFVAR").arg(ArgKind::Var, "XF@x")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "DEFVAR").arg(ArgKind::Var, "GF@")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "DEFVAR").arg(ArgKind::Var, "GF@2x")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_bad_constant_forms() {
    let records = vec![Record::new(1, "PUSHS").arg(ArgKind::Int, "abc")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "PUSHS").arg(ArgKind::Bool, "TRUE")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "PUSHS").arg(ArgKind::Nil, "null")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "READ")
        .arg(ArgKind::Var, "GF@x")
        .arg(ArgKind::Type, "float")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_string_escapes() {
    let mut r = Runtime::new(assemble(".IPPcode23\nWRITE string@a\\032b\\092c\n"));
    assert_eq!(run(&mut r), "a b\\c");
}

#[test]
fn test_bad_string_escapes() {
    let records = vec![Record::new(1, "WRITE").arg(ArgKind::Str, "ab\\9c")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "WRITE").arg(ArgKind::Str, "ab\\")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
    let records = vec![Record::new(1, "WRITE").arg(ArgKind::Str, "\\x41")];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 32);
}

#[test]
fn test_duplicate_label() {
    let records = vec![
        Record::new(1, "LABEL").arg(ArgKind::Label, "spot"),
        Record::new(2, "LABEL").arg(ArgKind::Label, "spot"),
    ];
    assert_eq!(Program::assemble(records).unwrap_err().exit_code(), 52);
}

#[test]
fn test_label_indexing() {
    let program = assemble(
        "\
        .IPPcode23\n\
        CREATEFRAME\n\
        LABEL here\n\
        BREAK\n",
    );
    assert_eq!(program.label("here"), Some(1));
    assert_eq!(program.label("missing"), None);
}

#[test]
fn test_opcode_display_names() {
    let program = assemble(".IPPcode23\nCREATEFRAME\nPOPS GF@x\n");
    assert_eq!(program.get(0).unwrap().opcode.to_string(), "CREATEFRAME");
    assert_eq!(program.get(1).unwrap().opcode.to_string(), "POPS");
    assert!(program.get(2).is_none());
}

#[test]
fn test_signature_table() {
    assert_eq!(Opcode::params("WRITE"), Some(&[Param::Symb][..]));
    assert_eq!(Opcode::params("CREATEFRAME"), Some(&[][..]));
    assert_eq!(
        Opcode::params("JUMPIFEQ"),
        Some(&[Param::Label, Param::Symb, Param::Symb][..])
    );
    assert_eq!(Opcode::params("FROBNICATE"), None);
}
