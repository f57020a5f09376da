use std::fs;

use bigcalc::{
    HELP_TEXT, Outcome, Session,
    ast::Operator,
    error::{Error, ErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::postfix::evaluate,
        lexer::{Token, tokenize},
        parser::core::to_postfix,
    },
    run_script,
};
use num_bigint::BigInt;
use walkdir::WalkDir;

#[test]
fn script_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let transcript = render(run_script(&script, false)).join("\n");
        assert_eq!(transcript,
                   expected.trim_end(),
                   "Transcript of {path:?} does not match {expected_path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Flattens a transcript the way a terminal shows stdout and stderr together.
fn render(transcript: Vec<Result<String, Error>>) -> Vec<String> {
    transcript.into_iter()
              .map(|line| line.unwrap_or_else(|e| e.to_string()))
              .collect()
}

fn eval(src: &str) -> BigInt {
    match Session::new().evaluate_expression(src) {
        Ok(value) => value,
        Err(e) => panic!("Expression {src:?} failed: {e:?}"),
    }
}

fn assert_value(src: &str, expected: i64) {
    assert_eq!(eval(src), BigInt::from(expected), "Expression {src:?}");
}

fn assert_failure(session: &mut Session, src: &str, kind: ErrorKind) {
    match session.execute(src) {
        Ok(outcome) => panic!("Line {src:?} succeeded with {outcome:?} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Line {src:?} failed with {e:?}"),
    }
}

fn postfix_of(src: &str) -> Vec<String> {
    to_postfix(tokenize(src).unwrap()).unwrap()
                                       .iter()
                                       .map(ToString::to_string)
                                       .collect()
}

#[test]
fn precedence_and_associativity() {
    assert_value("3+4*2", 11);
    assert_value("(3+4)*2", 14);
    assert_value("10-4-3", 3);
    assert_value("64/4/2", 8);
    assert_value("2*3+4*5", 26);
    assert_value("2*(3+4)*5", 70);
    assert_value("((((1))))", 1);
    assert_value("8 - (3 - 1)", 6);
}

#[test]
fn postfix_order() {
    assert_eq!(postfix_of("3+4*2"), ["3", "4", "2", "*", "+"]);
    assert_eq!(postfix_of("1-2+3"), ["1", "2", "-", "3", "+"]);
    assert_eq!(postfix_of("(1+2)*3"), ["1", "2", "+", "3", "*"]);
    assert_eq!(postfix_of("a*b/c"), ["a", "b", "*", "c", "/"]);
}

#[test]
fn tokens_cover_the_whole_expression() {
    let tokens = tokenize(" count * ( 12 - x ) ").unwrap();
    assert_eq!(tokens,
               vec![Token::Identifier("count".to_string()),
                    Token::Operator(Operator::Mul),
                    Token::LParen,
                    Token::Number(12.into()),
                    Token::Operator(Operator::Sub),
                    Token::Identifier("x".to_string()),
                    Token::RParen]);
}

#[test]
fn sign_runs_collapse_by_parity() {
    assert_value("5---2", 3);
    assert_value("5--2", 7);
    assert_value("5++2", 7);
    assert_value("5-+-+-2", 3);
    assert_value("-3 + 10", 7);
    assert_value("4 * -2", -8);
    assert_value("(-2) * (-3)", 6);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7/-2", -3);
    assert_value("-7/-2", 3);
    assert_value("1/3", 0);
}

#[test]
fn zero_is_a_result_not_an_error() {
    let mut session = Session::new();
    assert_eq!(session.execute("5 - 5").unwrap(), Outcome::Value(0.into()));
    assert_eq!(session.execute("0 / 9").unwrap(), Outcome::Value(0.into()));
}

#[test]
fn large_values_do_not_overflow() {
    assert_eq!(eval("9223372036854775807 + 1").to_string(), "9223372036854775808");
    assert_eq!(eval("18446744073709551616 * 18446744073709551616").to_string(),
               "340282366920938463463374607431768211456");
}

#[test]
fn malformed_expressions_are_rejected() {
    let mut session = Session::new();
    assert_failure(&mut session, "(1+2", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "1+2)", ErrorKind::InvalidExpression);
    assert_failure(&mut session, ")(", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "2^3", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "3**2", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "6//2", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "1 +", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "()", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "1.5 + 2", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "2 (3)", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "(1)(2)", ErrorKind::InvalidExpression);
}

#[test]
fn signs_fold_only_into_number_literals() {
    let mut session = Session::new();
    session.execute("a = 4").unwrap();

    assert_failure(&mut session, "-(2)", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "-a", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "+5", ErrorKind::InvalidExpression);
    assert_failure(&mut session, "3*+2", ErrorKind::InvalidExpression);

    assert_eq!(session.execute("-2").unwrap(), Outcome::Value((-2).into()));
    assert_eq!(session.execute("a-2").unwrap(), Outcome::Value(2.into()));
}

#[test]
fn division_by_zero_is_error() {
    let mut session = Session::new();
    assert_failure(&mut session, "5/0", ErrorKind::DivisionByZero);
    assert_failure(&mut session, "5/(3-3)", ErrorKind::DivisionByZero);
}

#[test]
fn unknown_variable_is_error() {
    let mut session = Session::new();
    assert_failure(&mut session, "a+1", ErrorKind::UnknownVariable);
    assert_failure(&mut session, "a", ErrorKind::UnknownVariable);
}

#[test]
fn assignment_then_query() {
    let mut session = Session::new();
    assert!(session.environment().is_empty());
    assert_eq!(session.execute("x = 10").unwrap(), Outcome::Assigned);
    assert_eq!(session.execute("x*x").unwrap(), Outcome::Value(100.into()));
    assert_eq!(session.execute("x").unwrap(), Outcome::Value(10.into()));
}

#[test]
fn assignment_chaining_copies_the_value() {
    let mut session = Session::new();
    session.execute("a = 5").unwrap();
    session.execute("b = a").unwrap();
    session.execute("a = 7").unwrap();
    assert_eq!(session.query("b").unwrap(), BigInt::from(5));
    assert_eq!(session.query("a").unwrap(), BigInt::from(7));
}

#[test]
fn variables_are_case_sensitive() {
    let mut session = Session::new();
    session.execute("n = 3").unwrap();
    session.execute("N = 4").unwrap();
    assert_eq!(session.execute("n * N").unwrap(), Outcome::Value(12.into()));
}

#[test]
fn malformed_assignments_are_rejected() {
    let mut session = Session::new();
    assert_failure(&mut session, "a=b=c", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "a =", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "= 5", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "a = 2 + 3", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "a = missing", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "1a=5", ErrorKind::InvalidIdentifier);
    assert_failure(&mut session, "a1 = 5", ErrorKind::InvalidIdentifier);
}

#[test]
fn failed_lines_leave_variables_untouched() {
    let mut session = Session::new();
    session.execute("a = 1").unwrap();
    assert_failure(&mut session, "a = nothing", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "a = 1 = 2", ErrorKind::InvalidAssignment);
    assert_failure(&mut session, "a / 0", ErrorKind::DivisionByZero);
    assert_eq!(session.query("a").unwrap(), BigInt::from(1));
    assert_eq!(session.environment().len(), 1);
}

#[test]
fn evaluation_is_repeatable() {
    let mut env = Environment::new();
    env.assign("k", 6.into());
    let postfix = to_postfix(tokenize("k * (k + 1) / 2").unwrap()).unwrap();

    let first = evaluate(&postfix, &env).unwrap();
    let second = evaluate(&postfix, &env).unwrap();
    assert_eq!(first, BigInt::from(21));
    assert_eq!(first, second);
    assert_eq!(env.len(), 1);
}

#[test]
fn commands() {
    let mut session = Session::new();
    assert_eq!(session.execute("/help").unwrap(), Outcome::Help);
    assert_eq!(session.execute("/exit").unwrap(), Outcome::Exit);
    assert_eq!(session.execute("   ").unwrap(), Outcome::Nothing);
    assert_failure(&mut session, "/quit", ErrorKind::UnknownCommand);
}

#[test]
fn error_messages() {
    let mut session = Session::new();
    let message = |session: &mut Session, src: &str| session.execute(src).unwrap_err().to_string();

    assert_eq!(message(&mut session, "(1"), "Invalid expression");
    assert_eq!(message(&mut session, "z"), "Unknown variable");
    assert_eq!(message(&mut session, "1/0"), "Division by zero");
    assert_eq!(message(&mut session, "a=b=c"), "Invalid assignment");
    assert_eq!(message(&mut session, "a2=1"), "Invalid identifier");
    assert_eq!(message(&mut session, "/nope"), "Unknown command");
}

#[test]
fn script_errors_are_kept_apart_from_output() {
    let transcript = run_script("5/0\n2*3\nq\n/help", false);

    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].as_ref().unwrap_err().kind(), ErrorKind::DivisionByZero);
    assert_eq!(transcript[1].as_deref().ok(), Some("6"));
    assert_eq!(transcript[2].as_ref().unwrap_err().kind(), ErrorKind::UnknownVariable);
    assert_eq!(transcript[3].as_deref().ok(), Some(HELP_TEXT));
}

#[test]
fn pipe_mode_keeps_the_last_value() {
    assert_eq!(render(run_script("x = 2\nx * 3\nx * 4\nx / 0", true)), ["8"]);
    assert!(run_script("x = 2", true).is_empty());
    assert!(run_script("1/0", true).is_empty());
}
