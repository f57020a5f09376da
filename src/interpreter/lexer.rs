use logos::Logos;
use num_bigint::BigInt;

use crate::{ast::Operator, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an expression.
///
/// A token is produced exactly once by [`tokenize`]; later phases match on the
/// variant and never look at the source text again.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A prefix `-` is folded in by
    /// [`tokenize`], not by the lexer.
    #[regex(r"[0-9]+", parse_number)]
    Number(BigInt),
    /// Identifier tokens; variable names made of ASCII letters only.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value. A run of ASCII digits always parses.
/// - `None`: If the token slice is not a valid integer.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Turns a raw expression into a sequence of tokens.
///
/// Whitespace is removed first, so `1 2` reads as `12`. Runs of `+` and `-`
/// are then folded by [`collapse_signs`]. A `-` that ends up in prefix
/// position (at the start, after `(`, or after another operator) is attached
/// to the number that follows it.
///
/// # Errors
/// Returns [`ParseError::InvalidExpression`] if any character is not a
/// letter, digit, `+`, `-`, `*`, `/`, `(` or `)`.
///
/// # Example
/// ```
/// use bigcalc::{
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("2 * --3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.into()),
///                 Token::Operator(Operator::Mul),
///                 Token::Operator(Operator::Add),
///                 Token::Number(3.into())]);
///
/// let tokens = tokenize("(-7)").unwrap();
/// assert_eq!(tokens[1], Token::Number((-7).into()));
///
/// assert!(tokenize("2 ^ 3").is_err());
/// ```
pub fn tokenize(expression: &str) -> ParseResult<Vec<Token>> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let collapsed = collapse_signs(&stripped);

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&collapsed);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::InvalidExpression { details: format!("unexpected input '{}'",
                                                                        lexer.slice()), });
        };
        push_token(&mut tokens, token);
    }

    Ok(tokens)
}

/// Folds every run of consecutive `+` and `-` into a single sign.
///
/// An odd number of minus signs yields `-`, anything else yields `+`. All
/// other characters, including repeated `*` or `/`, pass through untouched.
///
/// # Example
/// ```
/// use bigcalc::interpreter::lexer::collapse_signs;
///
/// assert_eq!(collapse_signs("5---2"), "5-2");
/// assert_eq!(collapse_signs("5--2"), "5+2");
/// assert_eq!(collapse_signs("1+-+2"), "1-2");
/// assert_eq!(collapse_signs("3**4"), "3**4");
/// ```
#[must_use]
pub fn collapse_signs(expression: &str) -> String {
    let mut collapsed = String::with_capacity(expression.len());
    // `Some(true)` while inside a run with an odd number of minus signs.
    let mut negative: Option<bool> = None;

    for c in expression.chars() {
        match c {
            '+' => negative = Some(negative.unwrap_or(false)),
            '-' => negative = Some(!negative.unwrap_or(false)),
            _ => {
                if let Some(neg) = negative.take() {
                    collapsed.push(if neg { '-' } else { '+' });
                }
                collapsed.push(c);
            },
        }
    }
    if let Some(neg) = negative {
        collapsed.push(if neg { '-' } else { '+' });
    }

    collapsed
}

/// Appends `token`, folding a prefix `-` into a following number literal.
fn push_token(tokens: &mut Vec<Token>, token: Token) {
    match token {
        Token::Number(value) if ends_with_prefix_minus(tokens) => {
            tokens.pop();
            tokens.push(Token::Number(-value));
        },
        other => tokens.push(other),
    }
}

/// Whether the last token is a `-` that cannot be a binary operator.
fn ends_with_prefix_minus(tokens: &[Token]) -> bool {
    match tokens {
        [Token::Operator(Operator::Sub)] => true,
        [.., before, Token::Operator(Operator::Sub)] => {
            matches!(before, Token::LParen | Token::Operator(_))
        },
        _ => false,
    }
}
