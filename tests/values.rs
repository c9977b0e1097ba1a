use computor::{
    error::{MathError, RuntimeError},
    interpreter::{
        evaluator::context::Context,
        value::{
            complex::Complex, core::Value, function::Function, matrix::Matrix,
            polynomial::Polynomial, rational::Rational, scalar::Scalar,
        },
    },
};

fn ratio(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

fn poly(terms: &[(usize, i64)], variable: &str) -> Polynomial {
    Polynomial::new(terms.iter().map(|(d, c)| (*d, Scalar::from(*c))), variable)
}

fn matrix(rows: &[&[i64]]) -> Matrix {
    Matrix::new(rows.iter()
                    .map(|row| row.iter().map(|n| Scalar::from(*n)).collect())
                    .collect())
    .unwrap()
}

#[test]
fn rationals_are_reduced_with_a_positive_denominator() {
    let r = ratio(6, -4);
    assert_eq!(r.numerator().to_string(), "-3");
    assert_eq!(r.denominator().to_string(), "2");
    assert_eq!(r.to_string(), "-1.5");

    assert_eq!(Rational::new(1, 0), Err(MathError::DivisionByZero));
}

#[test]
fn rationals_print_as_decimals_only_when_they_terminate() {
    assert_eq!(ratio(1, 4).to_string(), "0.25");
    assert_eq!(ratio(2, 3).to_string(), "2/3");
    assert_eq!(Rational::from_integer(-7).to_string(), "-7");
}

#[test]
fn floats_cross_a_fixed_decimal_boundary() {
    assert_eq!(Rational::from_f64(0.1, 10, 1e-10).unwrap(), ratio(1, 10));
    assert_eq!(Rational::from_f64(-2.25, 10, 1e-10).unwrap(), ratio(-9, 4));
    assert!(Rational::from_f64(1e-12, 10, 1e-10).unwrap().is_zero());
    assert_eq!(Rational::from_f64(f64::NAN, 10, 1e-10), Err(MathError::NotFinite));
}

#[test]
fn floored_modulo() {
    assert_eq!(Rational::from(-7).checked_rem(&Rational::from(3)).unwrap(), Rational::from(2));
    assert_eq!(Rational::from(7).checked_rem(&Rational::from(-3)).unwrap(), Rational::from(-2));
    assert!(Rational::from(1).checked_rem(&Rational::zero()).is_err());
}

#[test]
fn complex_inverse_and_display() {
    let z = Complex::new(Rational::one(), Rational::one());
    let inverse = z.inverse().unwrap();
    assert_eq!(inverse, Complex::new(ratio(1, 2), ratio(-1, 2)));
    assert_eq!(inverse.to_string(), "0.5 - 0.5i");
    assert_eq!(&z * &inverse, Complex::one());

    assert!(Complex::zero().inverse().is_err());
    assert_eq!(Complex::i().to_string(), "i");
    assert_eq!((-Complex::i()).to_string(), "-i");
}

#[test]
fn complex_without_imaginary_part_collapses_to_rational() {
    let product = &Scalar::from(Complex::i()) * &Scalar::from(Complex::i());
    assert_eq!(product.simplify(), Scalar::from(-1));
}

#[test]
fn determinant_of_a_three_by_three() {
    let m = matrix(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 2]]);
    assert_eq!(m.determinant().unwrap().simplify(), Scalar::from(6));

    let singular = matrix(&[&[1, 2, 3], &[2, 4, 6], &[0, 1, 1]]);
    assert!(singular.determinant().unwrap().is_zero());
    assert_eq!(singular.inverse(), Err(MathError::SingularMatrix));
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = matrix(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 2]]);
    let inverse = m.inverse().unwrap();
    assert!(m.matmul(&inverse).unwrap().is_identity());
    assert!(inverse.matmul(&m).unwrap().is_identity());
}

#[test]
fn matrix_shapes_are_checked() {
    let row = matrix(&[&[1, 2, 3]]);
    assert_eq!(row.transpose().rows(), 3);
    assert!(row.matmul(&row).is_err());
    assert!(row.add(&row.transpose()).is_err());
    assert!(row.determinant().is_err());
    assert!(Matrix::new(vec![]).is_err());
    assert!(Matrix::with_limits(vec![vec![Scalar::one(); 3]], 1, 2).is_err());
}

#[test]
fn matrix_power() {
    let m = matrix(&[&[1, 1], &[0, 1]]);
    assert_eq!(m.pow(3).unwrap(), matrix(&[&[1, 3], &[0, 1]]));
    assert!(m.pow(0).unwrap().is_identity());
    assert!(matrix(&[&[1, 2]]).pow(2).is_err());
}

#[test]
fn polynomial_display() {
    assert_eq!(poly(&[(1, -1), (0, 3)], "x").to_string(), "-x + 3");
    assert_eq!(poly(&[(2, 3), (1, -2)], "y").to_string(), "3 * y^2 - 2 * y");
    assert_eq!(Polynomial::zero("x").to_string(), "0");
    assert_eq!(poly(&[(0, -5)], "x").to_string(), "-5");
}

#[test]
fn polynomial_arithmetic() {
    let p = poly(&[(1, 1), (0, 1)], "x");
    let q = poly(&[(1, 1), (0, -1)], "x");
    assert_eq!(p.mul(&q).unwrap(), poly(&[(2, 1), (0, -1)], "x"));
    assert!(p.sub(&p).unwrap().is_zero());
    assert_eq!(p.pow(3).to_string(), "x^3 + 3 * x^2 + 3 * x + 1");

    let other = poly(&[(1, 1)], "y");
    assert!(matches!(p.add(&other), Err(MathError::VariableMismatch { .. })));
}

#[test]
fn constants_mix_with_any_variable() {
    let p = poly(&[(1, 1)], "x");
    let constant = poly(&[(0, 2)], "y");
    assert_eq!(p.add(&constant).unwrap().to_string(), "x + 2");
}

#[test]
fn polynomial_compose_derivative_and_evaluate() {
    let square = poly(&[(2, 1)], "x");
    let shift = poly(&[(1, 1), (0, 1)], "t");

    let composed = square.compose(&shift);
    assert_eq!(composed.variable(), "t");
    assert_eq!(composed.to_string(), "t^2 + 2 * t + 1");

    assert_eq!(composed.derivative().to_string(), "2 * t + 2");
    assert_eq!(composed.evaluate(&Scalar::from(3)), Scalar::from(16));
    assert_eq!(composed.evaluate(&Scalar::from(Complex::i())), Scalar::from(Complex::new(Rational::zero(), Rational::from(2))));
}

#[test]
fn normalized_sign_makes_the_leading_coefficient_positive() {
    let p = poly(&[(2, -1), (0, 4)], "x");
    assert_eq!(p.normalize_sign().to_string(), "x^2 - 4");
    assert_eq!(p.normalize_sign().normalize_sign(), p.normalize_sign());
}

#[test]
fn function_names_and_composition() {
    let f = Function::new("F", "X", poly(&[(1, 2)], "x"));
    assert_eq!(f.name(), "f");
    assert_eq!(f.parameter(), "x");
    assert_eq!(f.to_string(), "f(x) = 2 * x");

    let g = Function::new("g", "x", poly(&[(1, 1), (0, 1)], "x"));
    let fg = f.compose(&g);
    assert_eq!(fg.name(), "f_g");
    assert_eq!(fg.to_string(), "f_g(x) = 2 * x + 2");

    assert_eq!(f.evaluate(&Scalar::from(4)), Scalar::from(8));
    assert_eq!(f.apply(&poly(&[(1, 1)], "y")).to_string(), "2 * y");
}

#[test]
fn functions_with_different_parameters_do_not_combine() {
    let f = Function::new("f", "x", poly(&[(1, 1)], "x"));
    let g = Function::new("g", "y", poly(&[(1, 1)], "y"));
    assert!(f.compatible_body(&g).is_err());
    assert!(f.compatible_body(&f).is_ok());
}

#[test]
fn value_promotion_and_simplification() {
    assert_eq!(Value::from(Complex::from_rational(Rational::from(3))).simplify(), Value::from(3));
    assert_eq!(Value::from(poly(&[(0, 4)], "x")).simplify(), Value::from(4));
    assert_eq!(Value::from(3).type_name(), "Rational");
    assert_eq!(Value::from(poly(&[(1, 1)], "x")).type_name(), "Polynomial");
    assert!(Value::from(poly(&[(1, 1)], "x")).as_scalar().is_none());
}

#[test]
fn context_bindings_are_case_insensitive() {
    let mut context = Context::new();
    context.set_variable("VarA", Value::from(2), 1).unwrap();
    assert_eq!(context.variable("vara"), Some(&Value::from(2)));
    assert!(context.has("VARA"));

    context.set_function(Function::new("f", "x", poly(&[(1, 1)], "x")), 1).unwrap();
    assert!(context.has_function("F"));
    assert_eq!(context.list_functions().len(), 1);

    assert!(context.delete_variable("vara"));
    assert!(!context.has_variable("vara"));
    assert!(matches!(context.get_variable("vara", 4),
                     Err(RuntimeError::UndefinedVariable { line: 4, .. })));

    context.clear();
    assert!(context.list_functions().is_empty());
}

#[test]
fn context_rejects_reserved_and_builtin_names() {
    let mut context = Context::new();
    assert!(matches!(context.set_variable("I", Value::from(1), 2),
                     Err(RuntimeError::ReservedNameAssignment { line: 2, .. })));
    assert!(matches!(context.set_function(Function::new("sqrt", "x", poly(&[(1, 1)], "x")), 3),
                     Err(RuntimeError::BuiltinFunctionRedefinition { line: 3, .. })));
}

#[test]
fn context_lookup_order_and_listing() {
    let mut context = Context::new();
    context.set_variable("b", Value::from(2), 1).unwrap();
    context.set_variable("a", Value::from(1), 1).unwrap();
    context.set_function(Function::new("f", "x", poly(&[(1, 1)], "x")), 1).unwrap();

    let names: Vec<&str> = context.list_variables().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);

    assert_eq!(context.get_any("A", 1).unwrap(), Value::from(1));
    assert!(matches!(context.get_any("f", 1).unwrap(), Value::Function(_)));
    assert!(context.get_any("g", 1).is_err());

    assert!(context.delete_function("F"));
    assert!(!context.delete_function("f"));
}

#[test]
fn matrix_rows_and_scalars() {
    let m = matrix(&[&[1, 2], &[3, 4]]);
    let sums: Vec<Scalar> = m.row_iter().map(|row| &row[0] + &row[1]).collect();
    assert_eq!(sums, vec![Scalar::from(3), Scalar::from(7)]);

    assert!(!Value::Matrix(m).is_scalar());
    assert!(Value::from(Complex::i()).is_scalar());
}
