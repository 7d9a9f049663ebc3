/// Splits one source line into its whitespace-separated fields.
/// Everything from a `#` to the end of the line is comment and dropped;
/// string constants carry `#` as the escape `\035`, never literally.
pub fn lex(line: &str) -> Vec<&str> {
    let code = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.split_whitespace().collect()
}

/// A line whose only field is the `.IPPcode23` marker, any case.
pub fn is_header(line: &str) -> bool {
    let fields = lex(line);
    fields.len() == 1 && fields[0].eq_ignore_ascii_case(".IPPcode23")
}

fn is_ident_special(c: char) -> bool {
    matches!(c, '_' | '-' | '$' | '&' | '%' | '*' | '!' | '?')
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_ident_special(c)
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_ident_special(c)
}

/// Variable names and labels share one identifier rule: a letter or one
/// of `_-$&%*!?` first, then letters, digits and the same specials.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_continue),
        _ => false,
    }
}
