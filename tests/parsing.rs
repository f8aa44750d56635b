use std::collections::HashSet;

use eqnp::{
    ast::{BinaryOperator, Expr},
    error::{LexError, ParseError},
    lexer::{Token, tokenize},
    parse_expression,
    parser::utils::FUNCTION_NAMES,
};

fn parse(source: &str) -> Expr {
    match parse_expression(source) {
        Ok(expr) => expr,
        Err(e) => panic!("Failed to parse {source:?}: {e}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_expression(source) {
        Ok(expr) => panic!("Expected {source:?} to fail, but it parsed as {expr}"),
        Err(e) => e,
    }
}

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

fn neg(value: f64) -> Expr {
    Expr::UnaryNegate { operand: Box::new(num(value)) }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}

fn call(name: &str, argument: Expr) -> Expr {
    Expr::FunctionCall { name:     name.to_string(),
                         argument: Box::new(argument), }
}

#[test]
fn number_literals() {
    assert_eq!(parse("42"), num(42.0));
    assert_eq!(parse("3.14"), num(3.14));
    assert_eq!(parse(".5"), num(0.5));
    assert_eq!(parse("2e3"), num(2000.0));
    assert_eq!(parse("1.5e-2"), num(0.015));
}

#[test]
fn additive_operators_are_left_associative() {
    assert_eq!(parse("1 - 2 - 3"),
               binary(binary(num(1.0), BinaryOperator::Sub, num(2.0)),
                      BinaryOperator::Sub,
                      num(3.0)));
    assert_eq!(parse("1 + 2 + 3"),
               binary(binary(num(1.0), BinaryOperator::Add, num(2.0)),
                      BinaryOperator::Add,
                      num(3.0)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("1 + 2 * 3"),
               binary(num(1.0),
                      BinaryOperator::Add,
                      binary(num(2.0), BinaryOperator::Mul, num(3.0))));
    assert_eq!(parse("1 * 2 + 3"),
               binary(binary(num(1.0), BinaryOperator::Mul, num(2.0)),
                      BinaryOperator::Add,
                      num(3.0)));
    assert_eq!(parse("10 / 2 / 5"),
               binary(binary(num(10.0), BinaryOperator::Div, num(2.0)),
                      BinaryOperator::Div,
                      num(5.0)));
}

#[test]
fn exponentiation_binds_tightest_and_is_right_associative() {
    assert_eq!(parse("2 * 3 ^ 2"),
               binary(num(2.0),
                      BinaryOperator::Mul,
                      binary(num(3.0), BinaryOperator::Pow, num(2.0))));
    assert_eq!(parse("2 ^ 3 ^ 2"),
               binary(num(2.0),
                      BinaryOperator::Pow,
                      binary(num(3.0), BinaryOperator::Pow, num(2.0))));
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(parse("(1 + 2) * 3"),
               binary(binary(num(1.0), BinaryOperator::Add, num(2.0)),
                      BinaryOperator::Mul,
                      num(3.0)));
    assert_eq!(parse("2 * (3 + 4)"),
               binary(num(2.0),
                      BinaryOperator::Mul,
                      binary(num(3.0), BinaryOperator::Add, num(4.0))));
    // Parentheses leave no trace in the tree.
    assert_eq!(parse("((5))"), num(5.0));
}

#[test]
fn absolute_value_bars_desugar_to_abs() {
    assert_eq!(parse("|5|"), call("abs", num(5.0)));
    assert_eq!(parse("|5|"), parse("abs(5)"));
    assert_eq!(parse("|1 - 2|"),
               call("abs", binary(num(1.0), BinaryOperator::Sub, num(2.0))));
    assert_eq!(parse("||5||"), call("abs", call("abs", num(5.0))));
}

#[test]
fn function_calls_take_one_expression_argument() {
    assert_eq!(parse("sin(1)"), call("sin", num(1.0)));
    assert_eq!(parse("cos(1 + 2)"),
               call("cos", binary(num(1.0), BinaryOperator::Add, num(2.0))));
    assert_eq!(parse("tan(sin(1))"), call("tan", call("sin", num(1.0))));

    for name in FUNCTION_NAMES {
        parse(&format!("{name}(2)"));
    }
}

#[test]
fn negation_binds_only_to_a_numeric_literal() {
    assert_eq!(parse("-5"), neg(5.0));
    assert_eq!(parse("-5 + 2"), binary(neg(5.0), BinaryOperator::Add, num(2.0)));
    assert_eq!(parse("2 * -3"), binary(num(2.0), BinaryOperator::Mul, neg(3.0)));
    // The literal is negated before the exponent level sees it.
    assert_eq!(parse("-2 ^ 2"), binary(neg(2.0), BinaryOperator::Pow, num(2.0)));

    assert_eq!(parse_err("-(1 + 2)"), ParseError::InvalidNegation { position: 0 });
    assert_eq!(parse_err("-sin(5)"), ParseError::InvalidNegation { position: 0 });
    assert_eq!(parse_err("--5"), ParseError::InvalidNegation { position: 0 });
    assert_eq!(parse_err("5 * -"), ParseError::InvalidNegation { position: 4 });
}

#[test]
fn missing_operands_are_rejected() {
    assert_eq!(parse_err("1 +"), ParseError::MissingOperand);
    assert_eq!(parse_err("* 3"), ParseError::MissingOperand);
    assert_eq!(parse_err("1 + + 2"), ParseError::MissingOperand);
    assert_eq!(parse_err("1 */ 3"), ParseError::MissingOperand);
}

#[test]
fn unbalanced_delimiters_are_rejected() {
    assert_eq!(parse_err("(1 + 2"), ParseError::UnbalancedDelimiter { position: 0 });
    assert_eq!(parse_err("|5"), ParseError::UnbalancedDelimiter { position: 0 });
    assert_eq!(parse_err("sin(5"), ParseError::UnbalancedDelimiter { position: 3 });
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(parse_err("1 2"), ParseError::TrailingInput { position: 2 });
    assert_eq!(parse_err("1 + 2)"), ParseError::TrailingInput { position: 5 });
    assert_eq!(parse_err("5|"), ParseError::TrailingInput { position: 1 });
}

#[test]
fn function_call_shape_is_validated() {
    assert_eq!(parse_err("sin"),
               ParseError::ExpectedOpenParen { name:     "sin".to_string(),
                                               position: 0, });
    assert_eq!(parse_err("sin 5"),
               ParseError::ExpectedOpenParen { name:     "sin".to_string(),
                                               position: 0, });
    assert_eq!(parse_err("sin()"),
               ParseError::InvalidFunctionArity { name:     "sin".to_string(),
                                                  position: 4, });
    assert_eq!(parse_err("sin(1 2)"),
               ParseError::InvalidFunctionArity { name:     "sin".to_string(),
                                                  position: 6, });
    assert_eq!(parse_err("foo(5)"),
               ParseError::UnknownFunction { name:     "foo".to_string(),
                                             position: 0, });
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(parse_err(""), ParseError::EmptyExpression);
    assert_eq!(parse_err(" \t\n "), ParseError::EmptyExpression);
}

#[test]
fn invalid_characters_fail_lexing() {
    assert_eq!(parse_err("1 $ 2"),
               ParseError::Lex(LexError::UnexpectedCharacter { character: '$',
                                                               position:  2, }));
    // There is no comma token; argument lists are single expressions.
    assert_eq!(parse_err("sin(1,2)"),
               ParseError::Lex(LexError::UnexpectedCharacter { character: ',',
                                                               position:  5, }));
    assert_eq!(tokenize("@").unwrap_err(),
               LexError::UnexpectedCharacter { character: '@',
                                               position:  0, });
}

#[test]
fn tokenizing_is_idempotent() {
    let source = "1 + sin(2.5) * |3|";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());

    assert_eq!(tokenize("1 + 2").unwrap(),
               vec![(Token::Number(1.0), 0), (Token::Plus, 2), (Token::Number(2.0), 4)]);
}

#[test]
fn display_round_trips_through_the_parser() {
    for source in ["1 - 2 - 3",
                   "1 + 2 * 3",
                   "(1 + 2) * 3",
                   "2 ^ 3 ^ 2",
                   "sin(cos(1))",
                   "|1 - 2|",
                   "-5 + 2",
                   "2 * -3.5"]
    {
        let expr = parse(source);
        assert_eq!(parse(&expr.to_string()), expr, "Round trip failed for {source:?}");
    }

    assert_eq!(parse("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
    assert_eq!(parse("|5|").to_string(), "abs(5)");
    assert_eq!(parse("-5").to_string(), "-5");
}

#[test]
fn trees_hash_structurally() {
    let mut seen = HashSet::new();
    seen.insert(parse("|5|"));
    seen.insert(parse("abs(5)"));
    seen.insert(parse("abs( 5 )"));
    assert_eq!(seen.len(), 1);

    seen.insert(parse("abs(6)"));
    assert_eq!(seen.len(), 2);
}
