use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the shunting-yard operator stack.
enum Pending {
    Operator(Operator),
    LParen,
}

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Operands go straight to the output.
/// An incoming operator first pops every stacked operator of equal or higher
/// precedence, which makes all operators left-associative. A `)` pops back to
/// the matching `(`, and both parentheses are dropped.
///
/// The result is not guaranteed to be well formed: `1 +` converts fine and is
/// rejected later by the evaluator when it runs out of operands.
///
/// # Parameters
/// - `tokens`: The infix sequence, usually straight from
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The same operands and operators in postfix order, without parentheses.
///
/// # Errors
/// Returns [`ParseError::UnbalancedParentheses`] if a `)` has no matching
/// `(` or a `(` is never closed.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{lexer::tokenize, parser::core::to_postfix};
///
/// let postfix = to_postfix(tokenize("3+4*2").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["3", "4", "2", "*", "+"]);
///
/// assert!(to_postfix(tokenize("(1+2").unwrap()).is_err());
/// assert!(to_postfix(tokenize("1+2)").unwrap()).is_err());
/// ```
pub fn to_postfix<I>(tokens: I) -> ParseResult<Vec<Token>>
    where I: IntoIterator<Item = Token>
{
    let mut output = Vec::new();
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::LParen => stack.push(Pending::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::LParen) => break,
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },
            Token::Operator(op) => {
                while let Some(Pending::Operator(top)) = stack.last()
                      && op.precedence() <= top.precedence()
                {
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Operator(op));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::LParen => return Err(ParseError::UnbalancedParentheses),
        }
    }

    Ok(output)
}
