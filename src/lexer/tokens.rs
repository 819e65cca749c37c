use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("in", TokenKind::In);
        map.insert("like", TokenKind::Like);
        map.insert("ilike", TokenKind::ILike);
        // Both spellings collapse onto one token
        map.insert("infinity", TokenKind::Infinity);
        map.insert("Infinity", TokenKind::Infinity);
        // Reserved date-unit keywords, not yet used by any rule
        map.insert("year", TokenKind::DateUnit);
        map.insert("month", TokenKind::DateUnit);
        map.insert("day", TokenKind::DateUnit);
        map.insert("hour", TokenKind::DateUnit);
        map.insert("minute", TokenKind::DateUnit);
        map.insert("second", TokenKind::DateUnit);
        map.insert("millisecond", TokenKind::DateUnit);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Date,
    DateTime,
    Time,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    Equals,        // =
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=
    In,
    NotIn, // !in
    Like,
    NotLike, // !like
    ILike,
    NotILike, // !ilike

    Dot,
    Comma,
    At,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    And,
    Or,
    True,
    False,
    Null,
    Infinity,
    DateUnit,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
