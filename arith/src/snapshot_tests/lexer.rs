use crate::parsing::lexer::tokenize;

#[test]
fn lexer_tokens_with_spans() {
    let tokens = tokenize("1 + (23 * 4);");
    let dump = tokens
        .iter()
        .map(|(token, span)| format!("{token:?}{span:?}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(dump, @r#"
    INT("1") @ 1:0-1:1 (0..1)
    PLUS @ 1:2-1:3 (2..3)
    LEFT_PAREN @ 1:4-1:5 (4..5)
    INT("23") @ 1:5-1:7 (5..7)
    MUL @ 1:8-1:9 (8..9)
    INT("4") @ 1:10-1:11 (10..11)
    RIGHT_PAREN @ 1:11-1:12 (11..12)
    SEMICOLON @ 1:12-1:13 (12..13)
    EOF @ 1:13-1:13 (13..13)
    "#);
}

#[test]
fn lexer_illegal_bytes() {
    let tokens = tokenize("1 ? 2");
    let dump = tokens
        .iter()
        .map(|(token, _)| format!("{token:?}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(dump, @r#"
    INT("1")
    ILLEGAL('?')
    INT("2")
    EOF
    "#);
}
