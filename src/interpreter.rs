/// The evaluator module executes statements and computes results.
///
/// The evaluator walks the AST of one statement, applies operators across the
/// numeric tower and reads and writes the session's bindings. Equations are
/// reduced to a pair of polynomials and handed to the simplifier.
///
/// # Responsibilities
/// - Evaluates expressions, treating unbound names as indeterminates.
/// - Binds variables and functions, leaving the session untouched on failure.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, an identifier, the imaginary unit,
/// an operator or a delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their line.
/// - Folds identifiers to lowercase.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and decides
/// which of the statement forms a line is: an assignment, a function
/// definition, a query or an equation. Expressions are parsed by recursive
/// descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Checks matrix literal shapes and function signatures.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the numeric tower: exact rationals, complex numbers
/// over rationals, matrices, single-variable polynomials and named
/// functions. Every operation on them is exact; only the transcendental
/// builtins and square roots cross a float boundary.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements exact arithmetic with typed failures.
/// - Provides the canonical text of every value.
pub mod value;
