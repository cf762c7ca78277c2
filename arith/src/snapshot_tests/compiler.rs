use crate::parsing::parser::Parser;
use crate::parsing::Compiler;

fn disassemble(name: &str, source: &str) -> String {
    let (program, errors) = Parser::new(source).parse();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let mut compiler = Compiler::new(name);
    compiler.compile(program);
    format!("{:?}", compiler.chunk)
}

#[test]
fn compiler_post_order_emission() {
    insta::assert_snapshot!(disassemble("codegen.calc", "1 * 2 + 15 / 3 + 2;"), @r"
    === codegen.calc ===
    0000 push 1
    0001 push 2
    0002 *
    0003 push 15
    0004 push 3
    0005 /
    0006 +
    0007 push 2
    0008 +
    ");
}

#[test]
fn compiler_grouping_and_unary() {
    insta::assert_snapshot!(disassemble("codegen.calc", "-(5 + 5) * 2;"), @r"
    === codegen.calc ===
    0000 push 5
    0001 push 5
    0002 +
    0003 neg
    0004 push 2
    0005 *
    ");
}
