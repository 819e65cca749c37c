use std::collections::HashMap;

use crate::ast::ast::Expression;
use crate::errors::errors::{Diagnostic, ErrorKind, FilterError};
use crate::lexer::tokens::{Token, TokenKind};
use crate::parser::expr::parse_expr;
use crate::Position;
use crate::parser::lookups::{
    create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
};

/// Hard cap on expression nesting, so hostile input cannot blow the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    binding_power_lookup: BPLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            binding_power_lookup: HashMap::new(),
            nud_lookup: NUDLookup::new(),
            led_lookup: LEDLookup::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        match self.tokens.get(self.pos) {
            Some(token) => token,
            // The stream always ends with an EOF token
            None => &self.tokens[self.tokens.len() - 1],
        }
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Start position of the token under the cursor.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn advance(&mut self) -> &Token {
        let pos = self.pos.min(self.tokens.len() - 1);
        self.pos += 1;
        &self.tokens[pos]
    }

    /// Consumes the current token if it has the expected kind, otherwise
    /// reports what was found in its place.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Diagnostic> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Diagnostic::new(
                ErrorKind::ExpectedToken {
                    expected: expected_kind.to_string(),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }
        Ok(self.advance().clone())
    }

    pub fn get_binding_power_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn led(&mut self, kind: TokenKind, bp: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, bp);
        self.led_lookup.insert(kind, led_fn);
    }

    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        // A token can carry both a prefix and an infix role (`-`); the infix
        // binding power registered by `led` must win the lookup.
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn enter_nesting(&mut self) -> Result<(), Diagnostic> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Diagnostic::new(
                ErrorKind::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth -= 1;
    }
}

/// Parses a token stream into a single root expression.
///
/// Lexer diagnostics are passed through and aggregated with anything the
/// parser itself finds; the tree is only returned when the combined list is
/// empty. Validation failures (a calendrically impossible date, polarity on
/// a non-number) abort immediately instead of joining the aggregate.
pub fn parse(
    tokens: Vec<Token>,
    lex_diagnostics: Vec<Diagnostic>,
) -> Result<Expression, FilterError> {
    let mut diagnostics = lex_diagnostics;
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    match parse_expr(&mut parser, BindingPower::Default) {
        Ok(root) => {
            if parser.current_token_kind() != TokenKind::EOF {
                let token = parser.current_token();
                diagnostics.push(Diagnostic::new(
                    ErrorKind::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
            }

            if diagnostics.is_empty() {
                Ok(root)
            } else {
                Err(FilterError::Parse(diagnostics))
            }
        }
        Err(diagnostic) => {
            if diagnostic.get_kind().is_validation() {
                return Err(FilterError::Validation(diagnostic));
            }
            diagnostics.push(diagnostic);
            Err(FilterError::Parse(diagnostics))
        }
    }
}
