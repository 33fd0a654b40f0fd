// Integration tests for the MJava parser

use mjava::format::format_nested;
use mjava::parser::ast::*;
use mjava::parser::diagnostics::DiagnosticKind;
use mjava::parser::parse::Parser;
use mjava::parser::scanner::Scanner;

fn parse(source: &str) -> (Program, Scanner) {
    let mut scanner = Scanner::from_source("test.mj", source);
    let program = Parser::new(&mut scanner).parse();
    (program, scanner)
}

fn expression(source: &str) -> AstNode {
    let mut scanner = Scanner::from_source("test.mj", source);
    Parser::new(&mut scanner)
        .parse_expression()
        .expect("expression should parse")
}

fn int_value(node: &AstNode) -> i32 {
    match node {
        AstNode::IntegerLiteral(n, _) => *n,
        other => panic!("Expected integer literal, got {:?}", other),
    }
}

#[test]
fn test_end_to_end_main_class() {
    let source = "class Main{ public static void main(String[] a){ System.out.println(1+2); } }";
    let (program, scanner) = parse(source);

    assert!(scanner.diagnostics().is_empty());
    assert_eq!(program.classes.len(), 1);

    let AstNode::MainClass { main_method, .. } = &program.classes[0] else {
        panic!("Expected main class");
    };
    let AstNode::MethodDeclaration { name, body, .. } = main_method.as_ref() else {
        panic!("Expected method declaration");
    };
    assert_eq!(name, "main");

    let AstNode::MethodBody {
        statements,
        return_statement,
        ..
    } = body.as_ref()
    else {
        panic!("Expected method body");
    };
    assert!(return_statement.is_none());
    assert_eq!(statements.len(), 1);

    match &statements[0] {
        AstNode::PrintStatement { expression, .. } => match expression.as_ref() {
            AstNode::BinaryOpExpression { op, lhs, rhs, .. } => {
                assert_eq!(*op, BinOp::Add);
                assert_eq!(op.symbol(), "+");
                assert_eq!(int_value(lhs), 1);
                assert_eq!(int_value(rhs), 2);
            }
            other => panic!("Expected binary expression, got {:?}", other),
        },
        other => panic!("Expected print statement, got {:?}", other),
    }
}

#[test]
fn test_empty_file() {
    let (program, scanner) = parse("");
    assert!(program.is_empty());
    assert_eq!(scanner.diagnostics().len(), 1);
    assert_eq!(scanner.diagnostics().count(DiagnosticKind::Syntax), 1);
}

#[test]
fn test_precedence_and_associativity() {
    match expression("1 + 2 * 3") {
        AstNode::BinaryOpExpression {
            op: BinOp::Add,
            lhs,
            rhs,
            ..
        } => {
            assert_eq!(int_value(&lhs), 1);
            assert!(matches!(
                rhs.as_ref(),
                AstNode::BinaryOpExpression { op: BinOp::Mul, .. }
            ));
        }
        other => panic!("Expected addition at the root, got {:?}", other),
    }

    match expression("1 - 2 - 3") {
        AstNode::BinaryOpExpression {
            op: BinOp::Sub,
            lhs,
            rhs,
            ..
        } => {
            assert_eq!(int_value(&rhs), 3);
            match lhs.as_ref() {
                AstNode::BinaryOpExpression {
                    op: BinOp::Sub,
                    lhs,
                    rhs,
                    ..
                } => {
                    assert_eq!(int_value(lhs), 1);
                    assert_eq!(int_value(rhs), 2);
                }
                other => panic!("Expected nested subtraction, got {:?}", other),
            }
        }
        other => panic!("Expected subtraction at the root, got {:?}", other),
    }
}

const FACTORIAL: &str = r#"
class Factorial {
    public static void main(String[] a) {
        System.out.println(new Fac().ComputeFac(10));
    }
}

class Fac {
    int[] cache;

    public int ComputeFac(int num) {
        int num_aux;
        if (num < 1)
            num_aux = 1;
        else
            num_aux = num * (this.ComputeFac(num - 1));
        return num_aux;
    }
}

class Child extends Fac {
    boolean done;

    public boolean run(int n) {
        int i;
        for (i = 0; i < n; i = i + 1) {
            cache[i] = i;
        }
        while (!done && i < cache.length) done = true;
        return done;
    }
}
"#;

#[test]
fn test_full_program() {
    let (program, scanner) = parse(FACTORIAL);
    assert!(
        scanner.diagnostics().is_empty(),
        "{:?}",
        scanner.diagnostics().iter().map(|d| d.to_string()).collect::<Vec<_>>()
    );
    assert_eq!(program.classes.len(), 3);
    assert_eq!(program.classes[0].kind(), AstKind::MainClass);
    assert_eq!(program.classes[1].kind(), AstKind::ClassDeclaration);

    match &program.classes[2] {
        AstNode::ClassDeclaration {
            name, base_class, ..
        } => {
            assert_eq!(name, "Child");
            assert_eq!(base_class.as_deref(), Some("Fac"));
        }
        other => panic!("Expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_cloned_tree_outlives_original() {
    let (program, _) = parse(FACTORIAL);
    let count = program.node_count();
    assert!(count > 40);

    let clone = program.clone();
    assert_eq!(clone, program);
    drop(program);

    // The clone owns its nodes outright and still matches a fresh parse.
    let (fresh, _) = parse(FACTORIAL);
    assert_eq!(clone.node_count(), count);
    assert_eq!(clone, fresh);
}

#[test]
fn test_locations_point_at_source() {
    let (program, _) = parse(FACTORIAL);
    let class = &program.classes[1];
    assert_eq!(class.location().line, 8);
    assert_eq!(class.location().column, 1);
    assert_eq!(class.location().source_name(), "test.mj");
}

#[test]
fn test_errors_do_not_stop_the_parse() {
    let source = r#"
class Main { public static void main(String[] a) { x = ; y = 1 + ; z = 3; } }
class A { public int f() { return & 1; } }
class B { }
"#;
    let (program, scanner) = parse(source);

    assert_eq!(program.classes.len(), 3);
    assert_eq!(scanner.diagnostics().count(DiagnosticKind::Token), 1);
    assert!(scanner.diagnostics().count(DiagnosticKind::Syntax) >= 2);

    let AstNode::MainClass { main_method, .. } = &program.classes[0] else {
        panic!("Expected main class");
    };
    let AstNode::MethodDeclaration { body, .. } = main_method.as_ref() else {
        panic!("Expected method declaration");
    };
    assert!(matches!(
        body.as_ref(),
        AstNode::MethodBody { statements, .. } if statements.len() == 1
    ));
}

#[test]
fn test_syntax_error_message() {
    let (_, scanner) = parse("class Main { public void main(String[] a) { } }");
    let diag = scanner.diagnostics().iter().next().expect("one diagnostic");
    assert_eq!(diag.kind, DiagnosticKind::Syntax);
    assert_eq!(
        diag.to_string(),
        "Syntax Error: test.mj:1:21: Expected ' static ', but find keyword 'void'"
    );
}

#[test]
fn test_display_string_is_formatted() {
    let (program, _) = parse(
        "class Main { public static void main(String[] a) { System.out.println(true); } }",
    );
    let text = format_nested(&program.to_display_string());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "\t\"type\": \"Program\",");
    assert_eq!(lines[2], "\t\"classes\": [");
    assert_eq!(lines[3], "\t\t{");
    assert_eq!(lines[4], "\t\t\t\"type\": \"MainClass\",");
    assert!(text.contains("\"type\": \"BooleanLiteral\""));
    assert_eq!(lines.last(), Some(&"}"));
}
