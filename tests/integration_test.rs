// End-to-end tests for the C++ to Python translator

use cpp2py::codegen::{GeneratorOptions, UNSUPPORTED_FOR_LOOP};
use cpp2py::parser::{parse, tokenize, Parser};
use cpp2py::{transpile, TranspileError};
use std::fs;
use std::path::Path;

fn translate(source: &str) -> String {
    transpile(source, &GeneratorOptions::default()).expect("Translation failed")
}

fn demo(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    fs::read_to_string(&path).expect("Demo file missing")
}

#[test]
fn test_hello_world_demo() {
    assert_eq!(
        translate(&demo("hello.cpp")),
        "def main():\n    print(\"Hello, World!\")\n    return 0\n"
    );
}

#[test]
fn test_factorial_demo() {
    let expected = r#"def factorial(n):
    result = 1
    for i in range(1, n + 1):
        result = (result * i)
    return result

def main():
    n = None
    print("Enter a number: ")
    n = input()
    print("Factorial: ", factorial(n))
    return 0
"#;
    assert_eq!(translate(&demo("factorial.cpp")), expected);
}

#[test]
fn test_grades_demo() {
    let expected = r#"def report(score):
    if (score >= 90):
        print("A")
    elif (score >= 80):
        print("B")
    else:
        print("C")

def main():
    score = 100
    while (score > 70):
        report(score)
        score = (score - 15)
    count = 0
    # Unsupported for-loop
    return 0
"#;
    assert_eq!(translate(&demo("grades.cpp")), expected);
}

#[test]
fn test_broken_demo_reports_location() {
    let err = transpile(&demo("broken.cpp"), &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(err, TranspileError::Parse(_)));
    assert_eq!(err.location().line, 6);
    assert_eq!(
        err.to_string(),
        "Parse error at line 6, column 5: expected ';' after declaration, found keyword 'return'"
    );
}

#[test]
fn test_stages_compose() {
    let source = "int add(int a, int b) { return a + b; }";

    let tokens = tokenize(source).expect("Lexing failed");
    let program = parse(tokens).expect("Parsing failed");
    let python = cpp2py::codegen::generate(&program);

    assert_eq!(python, translate(source));
    assert_eq!(python, "def add(a, b):\n    return (a + b)\n");
}

#[test]
fn test_parser_from_source() {
    let mut parser = Parser::from_source("int x = 1; float y;").expect("Lexing failed");
    let program = parser.parse_program().expect("Parsing failed");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_nested_blocks_restore_indentation() {
    let source = r#"
        int main() {
            int i = 0;
            while (i < 3) {
                if (i == 1) {
                    cout << i;
                }
                i++;
            }
            return i;
        }
    "#;
    let expected = "def main():
    i = 0
    while (i < 3):
        if (i == 1):
            print(i)
        i += 1
    return i
";
    assert_eq!(translate(source), expected);
}

#[test]
fn test_for_loop_forms() {
    let source = r#"
        void f() {
            for (int i = 0; i < 10; i++) { cout << i; }
            for (i = 2; i <= n; i = i + 1) { cout << i; }
            for (int k = 0; k < 10; k += 2) { cout << k; }
            for (;;) { cout << 1; }
        }
    "#;
    let python = transpile(source, &GeneratorOptions::default());

    // `+=` is not part of the language
    assert!(python.is_err());

    let source = r#"
        void f() {
            for (int i = 0; i < 10; i++) { cout << i; }
            for (i = 2; i <= n; i = i + 1) { cout << i; }
            for (;;) { cout << 1; }
        }
    "#;
    let expected = format!(
        "def f():
    for i in range(0, 10):
        print(i)
    for i in range(2, n + 1):
        print(i)
    {}
",
        UNSUPPORTED_FOR_LOOP
    );
    assert_eq!(translate(source), expected);
}

#[test]
fn test_comments_and_preprocessor_dropped() {
    let source = "#include <iostream>\n/* block\n comment */ using namespace std; // tail\nint x = 1;\n";
    assert_eq!(translate(source), "x = 1\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(translate(""), "pass\n");
    assert_eq!(translate("// nothing here\n"), "pass\n");
}

#[test]
fn test_main_guard_option() {
    let options = GeneratorOptions {
        indent_width: 2,
        emit_main_guard: true,
    };
    let python = transpile("int main() { return 0; }", &options).unwrap();

    assert_eq!(
        python,
        "def main():\n  return 0\n\nif __name__ == \"__main__\":\n  main()\n"
    );
}

#[test]
fn test_lexer_error_surfaces() {
    let err = transpile("int main() {\n  int x = 5 @ 2;\n}", &GeneratorOptions::default())
        .unwrap_err();

    assert!(matches!(err, TranspileError::Lex(_)));
    assert_eq!(err.location().line, 2);
    assert_eq!(err.location().column, 13);
    assert!(err.to_string().contains("unexpected character '@'"));
}

#[test]
fn test_error_at_end_of_input() {
    let err = transpile("int main() {\n  return 0;\n", &GeneratorOptions::default()).unwrap_err();

    assert!(err.to_string().ends_with("found end of input"));
    assert_eq!(err.location().line, 2);
}
