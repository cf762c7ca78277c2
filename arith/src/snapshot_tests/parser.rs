use std::fmt;

use crate::parsing::ast::Expression;
use crate::parsing::parser::Parser;
use crate::Script;

struct Expressions(pub Vec<Expression>);

impl fmt::Display for Expressions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().fold(Ok(()), |result, expr| {
            result.and_then(|_| writeln!(f, "{expr}"))
        })
    }
}

#[test]
fn parser_expressions_success() {
    let source = "\
5;
-15;
5 + 5;
5 - 5;
5 * 5;
5 / 5;
(5 + 5) * 2;
2 / (5 + 5);
(-5 + 5)*100;
1 * 2 + 15 / 3 + 2;";
    let (program, errors) = Parser::new(source).parse();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    insta::assert_snapshot!(Expressions(program.statements), @r"
    5
    (-15)
    (5 + 5)
    (5 - 5)
    (5 * 5)
    (5 / 5)
    ((5 + 5) * 2)
    (2 / (5 + 5))
    (((-5) + 5) * 100)
    (((1 * 2) + (15 / 3)) + 2)
    ");
}

#[test]
fn parser_error_reports() {
    let errors = Script::new("errors.calc", "*5;").unwrap_err();
    let reports = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    insta::assert_snapshot!(reports, @r"
    error: no prefix parse function for `*` found
     --> errors.calc:1:0
      |
    1 | *5;
      | ^
    ");
}

#[test]
fn parser_error_report_unclosed_paren() {
    let errors = Script::new("errors.calc", "2 * (3 + 4").unwrap_err();
    let reports = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    insta::assert_snapshot!(reports, @r"
    error: expected next token to be `)`, got end of input instead
     --> errors.calc:1:10
      |
    1 | 2 * (3 + 4
      |           ^
    ");
}
