use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Diagnostic, ErrorKind},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"//[^\n]*").unwrap(), handler: skip_handler },
        // Quoted temporal literals win over plain strings
        RegexPattern { regex: Regex::new(r#"'\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:\d{2})?'|"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:\d{2})?""#).unwrap(), handler: datetime_handler },
        RegexPattern { regex: Regex::new(r#"'\d{4}-\d{2}-\d{2}'|"\d{4}-\d{2}-\d{2}""#).unwrap(), handler: date_handler },
        RegexPattern { regex: Regex::new(r#"'\d{2}:\d{2}(:\d{2}(\.\d+)?)?'|"\d{2}:\d{2}(:\d{2}(\.\d+)?)?""#).unwrap(), handler: time_handler },
        RegexPattern { regex: Regex::new(r#"'(?:\\.|[^'\\])*'|"(?:\\.|[^"\\])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"!ilike\b").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotILike, "!ilike") },
        RegexPattern { regex: Regex::new(r"!like\b").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotLike, "!like") },
        RegexPattern { regex: Regex::new(r"!in\b").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotIn, "!in") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("@").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::At, "@") },
        RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            diagnostics: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    /// Advances over `text`, keeping the line/column counters in step.
    pub fn advance_over(&mut self, text: &str) {
        for character in text.chars() {
            if character == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Reports the character no pattern matched and resynchronises.
    ///
    /// A stray quote means an unterminated string, whose broken tail would
    /// otherwise cascade into nonsense tokens; the rest of the line is
    /// discarded. Any other character is skipped on its own.
    fn report_unmatched(&mut self) {
        let position = self.position();
        let character = match self.remainder().chars().next() {
            Some(character) => character,
            None => return,
        };

        if character == '\'' || character == '"' {
            self.diagnostics
                .push(Diagnostic::new(ErrorKind::UnterminatedString, position));
            self.skip_to_line_end();
        } else {
            self.diagnostics.push(Diagnostic::new(
                ErrorKind::UnrecognisedCharacter { character },
                position,
            ));
            self.advance_over(&character.to_string());
        }
    }

    fn skip_to_line_end(&mut self) {
        let chunk = match self.remainder().find('\n') {
            Some(index) => self.remainder()[..index].to_string(),
            None => self.remainder().to_string(),
        };
        self.advance_over(&chunk);
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_over(&matched);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_over(&matched);
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched,
        Span {
            start,
            end: lexer.position()
        }
    ));
}

/// Unescapes a quoted string body: a backslash restores the following quote
/// or backslash; any other escape sequence is kept literally.
fn unescape(body: &str, quote: char) -> String {
    let mut result = String::new();
    let mut chars = body.chars();

    while let Some(character) = chars.next() {
        if character == '\\' {
            match chars.next() {
                Some(next) if next == quote || next == '\\' => result.push(next),
                Some(next) => {
                    result.push('\\');
                    result.push(next);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(character);
        }
    }

    result
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let quote = matched.chars().next().unwrap();
    let value = unescape(&matched[1..matched.len() - 1], quote);

    let start = lexer.position();
    lexer.advance_over(&matched);
    lexer.push(MK_TOKEN!(
        TokenKind::String,
        value,
        Span {
            start,
            end: lexer.position()
        }
    ));
}

fn temporal_handler(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let value = String::from(&matched[1..matched.len() - 1]);

    let start = lexer.position();
    lexer.advance_over(&matched);
    lexer.push(MK_TOKEN!(
        kind,
        value,
        Span {
            start,
            end: lexer.position()
        }
    ));
}

fn date_handler(lexer: &mut Lexer, regex: &Regex) {
    temporal_handler(lexer, regex, TokenKind::Date);
}

fn datetime_handler(lexer: &mut Lexer, regex: &Regex) {
    temporal_handler(lexer, regex, TokenKind::DateTime);
}

fn time_handler(lexer: &mut Lexer, regex: &Regex) {
    temporal_handler(lexer, regex, TokenKind::Time);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    let start = lexer.position();
    lexer.advance_over(&matched);
    lexer.push(MK_TOKEN!(
        kind,
        matched,
        Span {
            start,
            end: lexer.position()
        }
    ));
}

/// Tokenizes a filter expression.
///
/// Lexer faults are collected as diagnostics rather than aborting the scan,
/// so one call reports every unrecognised character. The token stream always
/// ends with an EOF token.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            lex.report_unmatched();
        }
    }

    let eof = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: eof.clone(),
            end: eof
        }
    ));
    (lex.tokens, lex.diagnostics)
}
