use computor::{
    error::{MathError, SolveError},
    interpreter::value::{complex::Complex, polynomial::Polynomial, rational::Rational, scalar::Scalar},
    simplifier::{
        equation::{SimplifiedEquation, analyze_equation, simplify_equation},
        polynomial::{extract_coefficients, make_monic, reduce_polynomial, standard_form},
    },
    solver::{
        core::solve,
        solution::SolutionKind,
        sqrt::{newton_sqrt, sqrt_complex, sqrt_non_negative, sqrt_rational},
    },
    util::settings::Settings,
};

fn poly(terms: &[(usize, i64)]) -> Polynomial {
    Polynomial::new(terms.iter().map(|(d, c)| (*d, Scalar::from(*c))), "x")
}

fn equation(left: &[(usize, i64)], right: &[(usize, i64)]) -> SimplifiedEquation {
    simplify_equation(&poly(left), &poly(right), &Settings::default()).unwrap()
}

fn complex(re: i64, im: i64) -> Scalar {
    Scalar::Complex(Complex::new(Rational::from(re), Rational::from(im)))
}

#[test]
fn standard_form_moves_everything_left() {
    let p = standard_form(&poly(&[(1, 3)]), &poly(&[(2, 1), (0, 2)])).unwrap();
    assert_eq!(p.to_string(), "x^2 - 3 * x + 2");

    let other = Polynomial::x("y");
    assert!(matches!(standard_form(&poly(&[(1, 1)]), &other),
                     Err(MathError::VariableMismatch { .. })));
}

#[test]
fn reduce_divides_by_the_common_factor() {
    assert_eq!(reduce_polynomial(&poly(&[(2, 6), (0, -9)])).to_string(), "2 * x^2 - 3");
    assert_eq!(reduce_polynomial(&poly(&[(1, 1), (0, 5)])).to_string(), "x + 5");
    assert!(reduce_polynomial(&Polynomial::zero("x")).is_zero());
}

#[test]
fn monic_polynomials() {
    let (monic, leading) = make_monic(&poly(&[(2, 4), (0, -2)])).unwrap();
    assert_eq!(monic.to_string(), "x^2 - 0.5");
    assert_eq!(leading, Scalar::from(4));

    let (zero, factor) = make_monic(&Polynomial::zero("x")).unwrap();
    assert!(zero.is_zero());
    assert!(factor.is_one());
}

#[test]
fn coefficients_fill_gaps_with_zero() {
    let coefficients = extract_coefficients(&poly(&[(2, 1), (0, -4)]));
    assert_eq!(coefficients, vec![Scalar::from(-4), Scalar::zero(), Scalar::from(1)]);
    assert_eq!(extract_coefficients(&Polynomial::zero("x")), vec![Scalar::zero()]);
}

#[test]
fn simplified_equation_accessors() {
    let eq = equation(&[(2, 1), (1, 2)], &[(0, 3)]);
    assert!(eq.is_quadratic());
    assert!(eq.is_valid);
    assert_eq!(eq.a(), Scalar::from(1));
    assert_eq!(eq.b(), Scalar::from(2));
    assert_eq!(eq.c(), Scalar::from(-3));
    assert_eq!(eq.reduced_form(), "x^2 + 2 * x - 3 = 0");
    assert!(eq.validate().is_ok());
}

#[test]
fn leading_sign_is_normalized() {
    let eq = equation(&[(0, 4)], &[(2, 1)]);
    assert_eq!(eq.reduced_form(), "x^2 - 4 = 0");
}

#[test]
fn degree_above_two_is_flagged() {
    let eq = equation(&[(3, 1)], &[(0, 1)]);
    assert!(!eq.is_valid);
    assert!(eq.message.is_some());
    assert_eq!(eq.validate(), Err(SolveError::UnsolvableEquation { degree: 3 }));
    assert_eq!(solve(&eq, &Settings::default()),
               Err(SolveError::UnsolvableEquation { degree: 3 }));
    assert!(analyze_equation(&eq).contains("Type: Polynomial of degree 3"));
}

#[test]
fn analysis_text() {
    let linear = analyze_equation(&equation(&[(1, 2)], &[(0, 4)]));
    assert!(linear.contains("Degree: 1"));
    assert!(linear.contains("Type: Linear equation"));

    let constant = analyze_equation(&equation(&[(0, 1)], &[(0, 1)]));
    assert!(constant.contains("All values are solutions"));

    let quadratic = analyze_equation(&equation(&[(2, 1), (0, 1)], &[]));
    assert!(quadratic.contains("Discriminant: -4"));
}

#[test]
fn constant_equations() {
    let settings = Settings::default();

    let all = solve(&equation(&[(0, 2)], &[(0, 2)]), &settings).unwrap();
    assert_eq!(all.kind, SolutionKind::Infinite);
    assert!(all.roots.is_empty());
    assert_eq!(all.to_string(),
               "Reduced form: 0 = 0\nPolynomial degree: 0\nAll real numbers are solutions.");

    let none = solve(&equation(&[(0, 5)], &[]), &settings).unwrap();
    assert_eq!(none.kind, SolutionKind::NoSolution);
    assert!(none.to_string().ends_with("The equation has no solution."));
}

#[test]
fn linear_equation() {
    let solution = solve(&equation(&[(1, 3), (0, -1)], &[]), &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::Single);
    assert_eq!(solution.roots, vec![Scalar::Rational(Rational::new(1, 3).unwrap())]);
    assert_eq!(solution.to_string(),
               "Reduced form: 3 * x - 1 = 0\nPolynomial degree: 1\nThe solution is:\nx = 1/3");
}

#[test]
fn double_root_is_reported_once() {
    let solution = solve(&equation(&[(2, 1), (1, -6), (0, 9)], &[]), &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::Double);
    assert_eq!(solution.discriminant, Some(Scalar::zero()));
    assert_eq!(solution.roots, vec![Scalar::from(3)]);
    assert!(solution.to_string().contains("Discriminant is zero, the solution is:\nx = 3"));
}

#[test]
fn irrational_roots_go_through_newton() {
    let solution = solve(&equation(&[(2, 1), (0, -2)], &[]), &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::TwoReal);

    let roots: Vec<f64> = solution.roots.iter().map(|r| r.real_part().to_f64()).collect();
    assert!((roots[0] - std::f64::consts::SQRT_2).abs() < 1e-9);
    assert!((roots[1] + std::f64::consts::SQRT_2).abs() < 1e-9);
}

#[test]
fn negative_discriminant_gives_conjugate_roots() {
    let solution = solve(&equation(&[(2, 1), (1, 2), (0, 5)], &[]), &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::TwoComplex);
    assert_eq!(solution.discriminant, Some(Scalar::from(-16)));
    assert_eq!(solution.roots, vec![complex(-1, 2), complex(-1, -2)]);
    assert!(solution.to_string().contains("Discriminant is strictly negative"));
    assert!(solution.to_string().ends_with("x = -1 + 2i\nx = -1 - 2i"));
}

#[test]
fn complex_coefficients_use_the_complex_root() {
    let left = Polynomial::x("x").pow(2);
    let right = Polynomial::from_constant(complex(0, 2), "x");
    let eq = simplify_equation(&left, &right, &Settings::default()).unwrap();
    assert!(eq.has_complex_coefficients());

    let solution = solve(&eq, &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::TwoComplex);
    assert_eq!(solution.roots, vec![complex(1, 1), complex(-1, -1)]);
    assert!(solution.to_string().contains("Discriminant is not real"));
}

#[test]
fn newton_square_root() {
    let settings = Settings::default();
    assert!((newton_sqrt(2.0, &settings) - std::f64::consts::SQRT_2).abs() < 1e-10);
    assert!(newton_sqrt(0.0, &settings).abs() < f64::EPSILON);
    assert!((newton_sqrt(1e6, &settings) - 1000.0).abs() < 1e-7);
}

#[test]
fn exact_square_roots_stay_exact() {
    let settings = Settings::default();
    assert_eq!(sqrt_non_negative(&Rational::new(9, 16).unwrap(), &settings).unwrap(),
               Rational::new(3, 4).unwrap());
    assert!(sqrt_non_negative(&Rational::from(-1), &settings).is_err());
    assert_eq!(sqrt_rational(&Rational::from(-9), &settings).unwrap(), complex(0, 3));
    assert_eq!(sqrt_complex(&Complex::new(Rational::from(3), Rational::from(4)), &settings).unwrap(),
               Complex::new(Rational::from(2), Rational::one()));
}

#[test]
fn equation_kinds() {
    assert!(equation(&[(1, 2)], &[(0, 1)]).is_linear());
    assert!(equation(&[(0, 2)], &[(0, 1)]).is_constant());
    assert!(!equation(&[(2, 1)], &[]).is_linear());
}

#[test]
fn newton_converges_at_any_magnitude() {
    let settings = Settings::default();
    for x in [1e80, 2e80, 3.7e150, 1e300, 1e-80] {
        let root = newton_sqrt(x, &settings);
        assert!((root * root / x - 1.0).abs() < 1e-12, "sqrt({x}) gave {root}");
    }
}

#[test]
fn large_irrational_square_roots() {
    let settings = Settings::default();
    let x = &Rational::from(2) * &Rational::from(10).pow(80);

    let root = sqrt_non_negative(&x, &settings).unwrap().to_f64();
    assert!((root * root / x.to_f64() - 1.0).abs() < 1e-12);
}

#[test]
fn complex_coefficients_with_a_positive_discriminant() {
    let left = Polynomial::new([(2, Scalar::from(1)),
                                (1, complex(0, 1)),
                                (0, Scalar::Rational(Rational::new(-1, 2).unwrap()))],
                               "x");
    let eq = simplify_equation(&left, &Polynomial::zero("x"), &Settings::default()).unwrap();

    let solution = solve(&eq, &Settings::default()).unwrap();
    assert_eq!(solution.discriminant, Some(Scalar::from(1)));
    assert_eq!(solution.kind, SolutionKind::TwoComplex);
    assert_eq!(solution.roots,
               vec![Scalar::Complex(Complex::new(Rational::new(1, 2).unwrap(), Rational::new(-1, 2).unwrap())),
                    Scalar::Complex(Complex::new(Rational::new(-1, 2).unwrap(),
                                                 Rational::new(-1, 2).unwrap()))]);
    assert!(solution.to_string()
                    .contains("Discriminant is strictly positive, the two complex solutions are:"));
}

#[test]
fn complex_coefficients_can_still_give_real_roots() {
    // i * x^2 - i = 0 has the roots 1 and -1
    let left = Polynomial::new([(2, complex(0, 1)), (0, complex(0, -1))], "x");
    let eq = simplify_equation(&left, &Polynomial::zero("x"), &Settings::default()).unwrap();

    let solution = solve(&eq, &Settings::default()).unwrap();
    assert_eq!(solution.kind, SolutionKind::TwoReal);
    assert_eq!(solution.roots, vec![Scalar::from(1), Scalar::from(-1)]);
    assert!(solution.to_string()
                    .contains("Discriminant is strictly negative, the two solutions are:"));
}
