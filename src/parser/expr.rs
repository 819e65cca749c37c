use crate::ast::ast::Expression;
use crate::ast::expressions::{
    ArithmeticExpression, ArrayExpression, ComparisonExpression, LogicalExpression,
    ParenthesesExpression,
};
use crate::ast::literals::{
    BooleanLiteral, DateLiteral, ExternalConstant, NumberLiteral, NumberValue, QualifiedIdentifier,
    StringLiteral, TimeLiteral,
};
use crate::ast::operators::{ArithmeticOp, ComparisonOp, LogicalOp};
use crate::errors::errors::{Diagnostic, ErrorKind};
use crate::lexer::tokens::TokenKind;
use crate::parser::lookups::BindingPower;
use crate::parser::parser::Parser;

/// Parses one expression at the given precedence floor.
///
/// NUD for the leading token, then a LED loop that only consumes operators
/// binding strictly tighter than the floor.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Diagnostic> {
    parser.enter_nesting()?;
    let result = parse_expr_inner(parser, bp);
    parser.leave_nesting();
    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Diagnostic> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Diagnostic::new(
                ErrorKind::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }
    };

    let mut left = nud_fn(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_binding_power_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if token_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => {
                return Err(Diagnostic::new(
                    ErrorKind::UnexpectedToken {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ));
            }
        };

        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

/// NUD handler for literals, qualified identifiers and reserved words.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            let literal = NumberLiteral::parse(&token.value)
                .map_err(|kind| Diagnostic::new(kind, token.span.start))?;
            Ok(literal.into())
        }
        TokenKind::String => {
            let token = parser.advance();
            Ok(StringLiteral {
                value: token.value.clone(),
            }
            .into())
        }
        TokenKind::Date => {
            let token = parser.advance().clone();
            let literal = DateLiteral::date(&token.value)
                .map_err(|kind| Diagnostic::new(kind, token.span.start))?;
            Ok(literal.into())
        }
        TokenKind::DateTime => {
            let token = parser.advance().clone();
            let literal = DateLiteral::datetime(&token.value)
                .map_err(|kind| Diagnostic::new(kind, token.span.start))?;
            Ok(literal.into())
        }
        TokenKind::Time => {
            let token = parser.advance().clone();
            let literal = TimeLiteral::time(&token.value)
                .map_err(|kind| Diagnostic::new(kind, token.span.start))?;
            Ok(literal.into())
        }
        TokenKind::Identifier => {
            let mut path = parser.advance().value.clone();
            // Greedy: every `. identifier` pair extends the path
            while parser.current_token_kind() == TokenKind::Dot {
                parser.advance();
                let segment = parser.expect(TokenKind::Identifier)?;
                path.push('.');
                path.push_str(&segment.value);
            }
            Ok(QualifiedIdentifier { path }.into())
        }
        TokenKind::True => {
            parser.advance();
            Ok(BooleanLiteral { value: true }.into())
        }
        TokenKind::False => {
            parser.advance();
            Ok(BooleanLiteral { value: false }.into())
        }
        TokenKind::Null => {
            parser.advance();
            Ok(Expression::NullLiteral)
        }
        TokenKind::Infinity => {
            parser.advance();
            Ok(NumberLiteral {
                value: NumberValue::Float(f64::INFINITY),
            }
            .into())
        }
        _ => Err(Diagnostic::new(
            ErrorKind::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// NUD handler for `@name` / `@'quoted name'`.
pub fn parse_external_constant(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    parser.advance(); // @
    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::String => {
            let name = parser.advance().value.clone();
            Ok(ExternalConstant { name }.into())
        }
        _ => Err(Diagnostic::new(
            ErrorKind::ExpectedToken {
                expected: "constant name".to_string(),
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// NUD handler for unary `+` / `-`. Polarity folds into the number literal;
/// there is no prefix node in the tree.
pub fn parse_polarity_expr(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    let operator = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    match operand {
        Expression::NumberLiteral(literal) => {
            let literal = if operator.kind == TokenKind::Dash {
                literal.negate()
            } else {
                literal
            };
            Ok(literal.into())
        }
        _ => Err(Diagnostic::new(
            ErrorKind::PolarityOnNonNumber,
            operator.span.start,
        )),
    }
}

/// NUD handler for `( expression )`.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    parser.advance(); // (
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(ParenthesesExpression {
        expression: Box::new(expression),
    }
    .into())
}

/// NUD handler for `[ expression , ... ]`. Arrays must not be empty.
pub fn parse_array_expr(parser: &mut Parser) -> Result<Expression, Diagnostic> {
    let open = parser.advance().clone();
    if parser.current_token_kind() == TokenKind::CloseBracket {
        return Err(Diagnostic::new(ErrorKind::EmptyArray, open.span.start));
    }

    let mut items = vec![parse_expr(parser, BindingPower::Default)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        items.push(parse_expr(parser, BindingPower::Default)?);
    }
    parser.expect(TokenKind::CloseBracket)?;

    Ok(ArrayExpression { items }.into())
}

/// LED handler for the comparison operators.
pub fn parse_comparison_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Diagnostic> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    let op = match operator.kind {
        TokenKind::Equals => ComparisonOp::Eq,
        TokenKind::NotEquals => ComparisonOp::Ne,
        TokenKind::Less => ComparisonOp::Lt,
        TokenKind::LessEquals => ComparisonOp::Lte,
        TokenKind::Greater => ComparisonOp::Gt,
        TokenKind::GreaterEquals => ComparisonOp::Gte,
        TokenKind::In => ComparisonOp::In,
        TokenKind::NotIn => ComparisonOp::NotIn,
        TokenKind::Like => ComparisonOp::Like,
        TokenKind::NotLike => ComparisonOp::NotLike,
        TokenKind::ILike => ComparisonOp::ILike,
        TokenKind::NotILike => ComparisonOp::NotILike,
        _ => {
            return Err(Diagnostic::new(
                ErrorKind::UnexpectedToken {
                    token: operator.value,
                },
                operator.span.start,
            ));
        }
    };

    Ok(ComparisonExpression {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into())
}

/// LED handler for `and` / `or`. A same-operator chain on the left absorbs
/// the new operand instead of nesting.
pub fn parse_logical_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Diagnostic> {
    let operator = parser.advance().clone();
    let op = if operator.kind == TokenKind::And {
        LogicalOp::And
    } else {
        LogicalOp::Or
    };
    let right = parse_expr(parser, bp)?;

    match left {
        Expression::LogicalExpression(mut chain) if chain.op == op => {
            chain.add_item(right);
            Ok(chain.into())
        }
        left => Ok(LogicalExpression {
            op,
            items: vec![left, right],
        }
        .into()),
    }
}

/// LED handler for `+ - * /`. A left chain of the same precedence class
/// absorbs the new item, so each item keeps the operator that immediately
/// preceded it in the source; a chain of the other class becomes an operand
/// of a fresh chain.
pub fn parse_arithmetic_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Diagnostic> {
    let operator = parser.advance().clone();
    let op = match operator.kind {
        TokenKind::Plus => ArithmeticOp::Add,
        TokenKind::Dash => ArithmeticOp::Sub,
        TokenKind::Star => ArithmeticOp::Mul,
        TokenKind::Slash => ArithmeticOp::Div,
        _ => {
            return Err(Diagnostic::new(
                ErrorKind::UnexpectedToken {
                    token: operator.value,
                },
                operator.span.start,
            ));
        }
    };
    let right = parse_expr(parser, bp)?;

    match left {
        Expression::ArithmeticExpression(mut chain) if chain.class() == op.class() => {
            chain.add_item(op, right);
            Ok(chain.into())
        }
        left => Ok(ArithmeticExpression::new(left, op, right).into()),
    }
}
