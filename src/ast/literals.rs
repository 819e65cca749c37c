use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::errors::errors::ErrorKind;

/// Re-quotes a string value for canonical output: single quotes, with the
/// backslash and the quote escaped.
pub fn quote_single(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('\'');
    for character in value.chars() {
        if character == '\'' || character == '\\' {
            result.push('\\');
        }
        result.push(character);
    }
    result.push('\'');
    result
}

fn is_plain_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// String Literal
/// Holds the unquoted, unescaped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", quote_single(&self.value))
    }
}

/// A numeric value: a machine integer when the text fits i64, an
/// arbitrary-precision integer otherwise, a float for fractional text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
}

/// Number Literal
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: NumberValue,
}

impl NumberLiteral {
    /// Parses numeric literal text per the lexer's number grammar. Integer
    /// text outside the i64 range stays arbitrary-precision; it is never
    /// silently rounded through f64.
    pub fn parse(text: &str) -> Result<NumberLiteral, ErrorKind> {
        let invalid = || ErrorKind::InvalidNumber {
            text: text.to_string(),
        };

        if text.contains(['.', 'e', 'E']) {
            let value = text.parse::<f64>().map_err(|_| invalid())?;
            return Ok(NumberLiteral {
                value: NumberValue::Float(value),
            });
        }

        if let Ok(value) = text.parse::<i64>() {
            return Ok(NumberLiteral {
                value: NumberValue::Integer(value),
            });
        }

        let value = text.parse::<BigInt>().map_err(|_| invalid())?;
        Ok(NumberLiteral {
            value: NumberValue::BigInt(value),
        })
    }

    /// Negates the literal in place; unary minus has no node of its own.
    pub fn negate(self) -> NumberLiteral {
        let value = match self.value {
            NumberValue::Integer(value) => NumberValue::Integer(-value),
            NumberValue::Float(value) => NumberValue::Float(-value),
            NumberValue::BigInt(value) => NumberValue::BigInt(-value),
        };
        NumberLiteral { value }
    }
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            NumberValue::Integer(value) => write!(f, "{}", value),
            NumberValue::BigInt(value) => write!(f, "{}", value),
            NumberValue::Float(value) => {
                // Spell infinity as its keyword so the text re-lexes
                if value.is_infinite() {
                    let sign = if *value < 0.0 { "-" } else { "" };
                    write!(f, "{}Infinity", sign)
                } else if *value == 0.0 {
                    // A negative-zero sign would not survive reparsing
                    write!(f, "0")
                } else {
                    write!(f, "{}", value)
                }
            }
        }
    }
}

/// Boolean Literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Date Literal
/// Calendar-validated ISO date or datetime text, stored without quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateLiteral {
    pub value: String,
}

impl DateLiteral {
    pub fn date(text: &str) -> Result<DateLiteral, ErrorKind> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ErrorKind::InvalidDate {
            text: text.to_string(),
        })?;
        Ok(DateLiteral {
            value: text.to_string(),
        })
    }

    pub fn datetime(text: &str) -> Result<DateLiteral, ErrorKind> {
        let valid = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
            || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").is_ok()
            || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%MZ").is_ok()
            || DateTime::parse_from_rfc3339(text).is_ok()
            || DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z").is_ok();

        if !valid {
            return Err(ErrorKind::InvalidDateTime {
                text: text.to_string(),
            });
        }
        Ok(DateLiteral {
            value: text.to_string(),
        })
    }
}

impl Display for DateLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.value)
    }
}

/// Time Literal
/// Validated ISO time text, stored without quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLiteral {
    pub value: String,
}

impl TimeLiteral {
    pub fn time(text: &str) -> Result<TimeLiteral, ErrorKind> {
        let valid = NaiveTime::parse_from_str(text, "%H:%M:%S%.f").is_ok()
            || NaiveTime::parse_from_str(text, "%H:%M").is_ok();

        if !valid {
            return Err(ErrorKind::InvalidTime {
                text: text.to_string(),
            });
        }
        Ok(TimeLiteral {
            value: text.to_string(),
        })
    }
}

impl Display for TimeLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.value)
    }
}

/// External Constant
/// A named placeholder (`@name`) resolved by the filter's consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalConstant {
    pub name: String,
}

impl Display for ExternalConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if is_plain_identifier(&self.name) {
            write!(f, "@{}", self.name)
        } else {
            write!(f, "@{}", quote_single(&self.name))
        }
    }
}

/// Qualified Identifier
/// A dotted field path such as `address.city`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifiedIdentifier {
    pub path: String,
}

impl QualifiedIdentifier {
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }
}

impl Display for QualifiedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
