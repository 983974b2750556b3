//! Shunting-yard conversion from infix tokens to postfix (RPN)

use crate::error::CompilerError;
use crate::operators::OperatorTable;
use crate::token::{Token, TokenKind};
use crate::NumericResult;
use tracing::debug;

/// Reorder `tokens` into postfix.
///
/// `+` and `-` become their unary forms (`u+`, `u-`) when they open the
/// expression or follow anything other than a number, unit or `)`.
pub fn to_postfix(tokens: &[Token], operators: &OperatorTable) -> NumericResult<Vec<Token>> {
    // top of the holding stack is the end of the vec
    let mut holding: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match token.kind {
            // operands are already in final order
            TokenKind::Number(_) | TokenKind::Unit(_) => output.push(token.clone()),

            TokenKind::ParenOpen => holding.push(token.clone()),

            TokenKind::ParenClose => {
                if holding.is_empty() {
                    return Err(CompilerError::solver("Unexpected close parenthesis")
                        .at(token.position));
                }

                let mut matched = false;
                while let Some(top) = holding.pop() {
                    if top.kind == TokenKind::ParenOpen {
                        matched = true;
                        break;
                    }
                    output.push(top);
                }

                if !matched {
                    return Err(
                        CompilerError::solver("No open parenthesis found").at(token.position)
                    );
                }
            }

            TokenKind::Operator => {
                let binary_context = previous.is_some_and(Token::ends_operand);
                let symbol = match operators.unary_form(&token.text) {
                    Some(unary) if !binary_context => unary,
                    _ => token.text.clone(),
                };

                let incoming = operators.lookup(&symbol).ok_or_else(|| {
                    CompilerError::solver(format!("Unknown operator: {}", symbol))
                        .at(token.position)
                })?;

                // prefix operators have no left operand to drain against
                if !incoming.is_unary() {
                    while let Some(top) = holding.last() {
                        let drains = top.kind == TokenKind::Operator
                            && operators
                                .lookup(&top.text)
                                .is_some_and(|held| held.precedence >= incoming.precedence);
                        if !drains {
                            break;
                        }
                        output.extend(holding.pop());
                    }
                }

                holding.push(Token::operator(token.position, symbol));
            }

            TokenKind::Symbol => {
                return Err(CompilerError::solver(format!(
                    "Unsupported token '{}'",
                    token.text
                ))
                .at(token.position));
            }
        }

        previous = Some(token);
    }

    while let Some(top) = holding.pop() {
        if top.kind == TokenKind::ParenOpen {
            return Err(CompilerError::solver("No close parenthesis found").at(top.position));
        }
        output.push(top);
    }

    debug!(
        rpn = %output.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" "),
        "converted to postfix"
    );

    Ok(output)
}
