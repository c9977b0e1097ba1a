use std::fs;

use computor::{
    Outcome, Session,
    error::{Error, LexError, ParseError, RuntimeError, SolveError},
    get_result,
    interpreter::{
        lexer::{Token, tokenize},
        value::{complex::Complex, core::Value, rational::Rational, scalar::Scalar},
    },
    solver::solution::{Solution, SolutionKind},
    util::settings::Settings,
};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in docs/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```computor") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

/// Runs a script and returns the text of its last outcome.
fn output(src: &str) -> String {
    match get_result(src) {
        Ok(Some(outcome)) => outcome.to_string(),
        Ok(None) => panic!("Script produced no outcome"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn solve(src: &str) -> Solution {
    match get_result(src) {
        Ok(Some(Outcome::Solved(solution))) => solution,
        other => panic!("Expected a solution, got {other:?}"),
    }
}

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|(t, _)| t).collect()
}

fn imaginary(n: i64) -> Scalar {
    Scalar::Complex(Complex::new(Rational::zero(), Rational::from_integer(n)))
}

#[test]
fn decimals_split_on_the_second_point() {
    assert_eq!(kinds("3.5.2"), vec![Token::Real(3.5), Token::Real(0.2), Token::Eof]);
}

#[test]
fn dangling_decimal_point_is_an_invalid_number() {
    assert!(matches!(tokenize("."), Err(LexError::InvalidNumber { .. })));
    assert!(matches!(tokenize("3."), Err(LexError::InvalidNumber { column: 2, .. })));
}

#[test]
fn unknown_character_reports_line_and_column() {
    let err = tokenize("x = 1\ny = 2 & 3").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '&',
                                               line:      2,
                                               column:    7, });
}

#[test]
fn imaginary_unit_and_identifiers() {
    assert_eq!(kinds("I"), vec![Token::Imaginary, Token::Eof]);
    assert_eq!(kinds("Ix"), vec![Token::Identifier("ix".to_string()), Token::Eof]);
}

#[test]
fn double_star_is_one_token() {
    assert_eq!(kinds("a**b*c"),
               vec![Token::Identifier("a".to_string()),
                    Token::DoubleStar,
                    Token::Identifier("b".to_string()),
                    Token::Star,
                    Token::Identifier("c".to_string()),
                    Token::Eof]);
}

#[test]
fn newlines_advance_the_line() {
    let lines: Vec<usize> = tokenize("a\nb\n\nc").unwrap().into_iter().map(|(_, l)| l).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn rational_arithmetic_is_exact() {
    assert_eq!(output("1/3 + 1/3 + 1/3"), "1");
    assert_eq!(output("0.1 + 0.2"), "0.3");
    assert_eq!(output("2 / 4"), "0.5");
    assert_eq!(output("1 / 3"), "1/3");
    assert_eq!(output("-7 % 3"), "2");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(output("2 + 3 * 4"), "14");
    assert_eq!(output("(2 + 3) * 4"), "20");
    assert_eq!(output("-2^2"), "-4");
    assert_eq!(output("2^3^2"), "512");
    assert_eq!(output("--3"), "3");
}

#[test]
fn assignment_and_queries() {
    assert_eq!(output("a = 2 * 3\na + 1 = ?"), "7");
    assert_eq!(output("A = 4\na = ?"), "4");
    assert_eq!(output("varA = 2\nvara * 2"), "4");
}

#[test]
fn failed_assignment_keeps_the_previous_binding() {
    let mut session = Session::new();
    session.execute("x = 5").unwrap();

    let err = session.execute("x = 1/0").unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(session.context().variable("x"), Some(&Value::from(5)));
}

#[test]
fn unbound_names_are_indeterminates() {
    assert_eq!(output("y = x + 1"), "x + 1");
    assert_eq!(output("(x + 1)^2"), "x^2 + 2 * x + 1");
    assert_eq!(output("x - x"), "0");
    assert_eq!(output("p = 3 * z - z\np / 2"), "z");
}

#[test]
fn complex_numbers() {
    assert_eq!(output("i^2"), "-1");
    assert_eq!(output("(1 + i) * (1 - i)"), "2");
    assert_eq!(output("2 * i + 3"), "3 + 2i");
    assert_eq!(output("1 / i"), "-i");
}

#[test]
fn quadratic_with_two_real_roots() {
    let solution = solve("x^2 - 4 = 0 ?");
    assert_eq!(solution.kind, SolutionKind::TwoReal);
    assert_eq!(solution.discriminant, Some(Scalar::from(16)));
    assert!(solution.roots.contains(&Scalar::from(2)));
    assert!(solution.roots.contains(&Scalar::from(-2)));
    assert_eq!(solution.reduced_form, "x^2 - 4 = 0");
}

#[test]
fn quadratic_with_complex_roots() {
    let solution = solve("x^2 + 1 = 0 ?");
    assert_eq!(solution.kind, SolutionKind::TwoComplex);
    assert_eq!(solution.discriminant, Some(Scalar::from(-4)));
    assert_eq!(solution.roots, vec![imaginary(1), imaginary(-1)]);
    assert!(solution.has_complex_roots());
}

#[test]
fn solution_report() {
    let report = solve("x^2 = 4 ?").to_string();
    assert_eq!(report,
               "Reduced form: x^2 - 4 = 0\nPolynomial degree: 2\nDiscriminant is strictly \
                positive, the two solutions are:\nx = 2\nx = -2");
}

#[test]
fn function_definition_and_evaluation() {
    assert_eq!(output("f(x) = x^2 + 1"), "f(x) = x^2 + 1");
    assert_eq!(output("f(x) = x^2 + 1\nf(2) = ?"), "5");
    assert_eq!(output("F(X) = X + 1"), "f(x) = x + 1");
    assert_eq!(output("f(t) = 2 * t\nf(i)"), "2i");
}

#[test]
fn substituting_an_unbound_name_matches_direct_definition() {
    let direct = solve("x^2 + 1 = 0 ?");
    let substituted = solve("f(x) = x^2 + 1\nf(y) = 0 ?");

    assert_eq!(substituted.kind, direct.kind);
    assert_eq!(substituted.roots, direct.roots);
    assert_eq!(substituted.discriminant, direct.discriminant);
    assert_eq!(substituted.variable, "y");
}

#[test]
fn function_parameter_shadows_a_bound_variable() {
    assert_eq!(output("x = 3\nf(x) = x * 2"), "f(x) = 2 * x");

    let solution = solve("x = 3\nf(x) = x * 2\nf(x) = 4 ?");
    assert_eq!(solution.roots, vec![Scalar::from(2)]);
}

#[test]
fn functions_compose_and_combine() {
    assert_eq!(output("f(x) = 2 * x\ng(x) = x + 1\nf(g)"), "f_g(x) = 2 * x + 2");
    assert_eq!(output("f(x) = 2 * x\nf(y + 1)"), "2 * y + 2");
    assert_eq!(output("f(x) = x\ng(x) = 3\nf + g"), "f(x) = x + 3");
    assert_eq!(output("f(x) = x\n1 - f"), "f(x) = -x + 1");
}

#[test]
fn matrix_determinant_and_inverse() {
    assert_eq!(output("A = [[1,2];[3,4]]\ndet(A)"), "-2");

    let Some(Outcome::Value(Value::Matrix(product))) =
        get_result("A = [[1,2];[3,4]]\nA ** inv(A)").unwrap()
    else {
        panic!("expected a matrix");
    };
    assert!(product.is_identity());
}

#[test]
fn matrix_operations() {
    assert_eq!(output("[[1,2];[3,4]] * 2"), "[ 2 , 4 ]\n[ 6 , 8 ]");
    assert_eq!(output("[[1,2];[3,4]] + [[1,1];[1,1]]"), "[ 2 , 3 ]\n[ 4 , 5 ]");
    assert_eq!(output("[[1,2];[3,4]] * [[1,2];[3,4]]"), "[ 1 , 4 ]\n[ 9 , 16 ]");
    assert_eq!(output("[[1,2];[3,4]]^2"), "[ 7 , 10 ]\n[ 15 , 22 ]");
    assert_eq!(output("transpose([[1,2]])"), "[ 1 ]\n[ 2 ]");
    assert_eq!(output("[[2,4]] / 2"), "[ 1 , 2 ]");
}

#[test]
fn matrix_errors() {
    assert!(matches!(assert_failure("[[1,2]] + 1"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("[[1,2]] ** [[1,2]]"),
                     Error::Runtime(RuntimeError::DimensionMismatch { .. })));
    assert!(matches!(assert_failure("inv([[1,2];[2,4]])"),
                     Error::Runtime(RuntimeError::SingularMatrix { .. })));
    assert!(matches!(assert_failure("[[x]]"), Error::Runtime(RuntimeError::InvalidOperand { .. })));
    assert!(matches!(assert_failure("det(2)"), Error::Runtime(RuntimeError::InvalidOperand { .. })));
}

#[test]
fn constant_equations() {
    assert!(solve("0 = 0 ?").is_infinite());

    let none = solve("5 = 0 ?");
    assert_eq!(none.kind, SolutionKind::NoSolution);
    assert!(!none.has_solution());
}

#[test]
fn linear_and_double_roots() {
    let linear = solve("2 * x + 4 = 0 ?");
    assert_eq!(linear.kind, SolutionKind::Single);
    assert_eq!(linear.roots, vec![Scalar::from(-2)]);

    let double = solve("x^2 + 2 * x + 1 = 0 ?");
    assert_eq!(double.kind, SolutionKind::Double);
    assert_eq!(double.num_roots(), 1);
    assert_eq!(double.roots, vec![Scalar::from(-1)]);
}

#[test]
fn cubic_equations_are_unsolvable() {
    assert_eq!(assert_failure("x^3 - 1 = 0 ?"),
               Error::Solve(SolveError::UnsolvableEquation { degree: 3 }));
}

#[test]
fn builtins() {
    assert_eq!(output("sqrt(16)"), "4");
    assert_eq!(output("sqrt(-4)"), "2i");
    assert_eq!(output("abs(-3)"), "3");
    assert_eq!(output("abs(3 + 4 * i)"), "5");
    assert_eq!(output("exp(0)"), "1");
    assert_eq!(output("log(1)"), "0");
    assert_eq!(output("cos(0) + sin(0)"), "1");

    assert!(matches!(assert_failure("sqrt(x)"),
                     Error::Runtime(RuntimeError::InvalidOperand { .. })));
    assert!(matches!(assert_failure("log(0)"),
                     Error::Runtime(RuntimeError::InvalidOperand { .. })));
    assert!(matches!(assert_failure("sqrt(x) = x"),
                     Error::Runtime(RuntimeError::BuiltinFunctionRedefinition { .. })));
}

#[test]
fn exponent_rules() {
    assert_success("x^0");
    assert_eq!(output("0^0"), "1");
    for src in ["2^-1", "2^(1/2)", "2^i", "2^1001", "2^x"] {
        assert!(matches!(assert_failure(src), Error::Runtime(RuntimeError::InvalidExponent { .. })),
                "{src} should be rejected");
    }
}

#[test]
fn runtime_errors() {
    assert!(matches!(assert_failure("x + y"), Error::Runtime(RuntimeError::VariableMismatch { .. })));
    assert!(matches!(assert_failure("2 ** 3"), Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("1 / x"), Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("h(2)"), Error::Runtime(RuntimeError::UndefinedFunction { .. })));
    assert!(matches!(assert_failure("f(x) = x\nf([[1]])"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("i = 2"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(assert_failure("f(i) = 2"),
                     Error::Parse(ParseError::InvalidFunctionSignature { .. })));
    assert!(matches!(assert_failure("f() + 1"),
                     Error::Parse(ParseError::InvalidFunctionSignature { .. })));
    assert!(matches!(assert_failure("[[1,2];[3]]"),
                     Error::Parse(ParseError::InvalidMatrixShape { .. })));
    assert!(matches!(assert_failure("x + 1 = 2"), Error::Parse(ParseError::InvalidSyntax { .. })));
    assert!(matches!(assert_failure("2 +"), Error::Parse(_)));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(_)));
}

#[test]
fn errors_carry_the_script_line() {
    let err = assert_failure("a = 1\n\nb = 1 / 0");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 3 }));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_eq!(output("# setup\na = 2\n\n# result\na * a"), "4");
}

#[test]
fn session_bindings_can_be_seeded() {
    let mut session = Session::new();
    session.context_mut().set_variable("k", Value::from(4), 0).unwrap();
    assert_eq!(session.settings().max_solvable_degree, 2);

    let Outcome::Value(value) = session.execute("k * k").unwrap() else {
        panic!("expected a value");
    };
    assert_eq!(value, Value::from(16));
}

#[test]
fn failed_definition_keeps_the_previous_function() {
    let mut session = Session::new();
    session.execute("f(x) = x + 1").unwrap();

    let err = session.execute("f(x) = x / 0").unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(session.context().function("f").map(ToString::to_string),
               Some("f(x) = x + 1".to_string()));
}

#[test]
fn large_discriminants_give_true_roots() {
    let solution = solve("x^2 - 2 * 10^80 = 0 ?");
    assert_eq!(solution.kind, SolutionKind::TwoReal);

    for root in &solution.roots {
        let r = root.real_part().to_f64();
        assert!((r * r / 2e80 - 1.0).abs() < 1e-12, "{r} is not a root");
    }
}

#[test]
fn lower_precision_still_prints_decimals() {
    let settings = Settings { precision: 4,
                              ..Settings::default() };
    let mut session = Session::with_settings(settings);

    let Outcome::Value(value) = session.execute("sqrt(2)").unwrap() else {
        panic!("expected a value");
    };
    assert_eq!(value.to_string(), "1.4142");
}
