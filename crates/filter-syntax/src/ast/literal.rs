use crate::{errors::FilterValidationError, quote::quote};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const ZONED_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Lexical class of a literal, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
    Null,
    Date,
    DateTime,
    QualifiedIdentifier,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralKind::String => "string",
            LiteralKind::Number => "number",
            LiteralKind::Boolean => "boolean",
            LiteralKind::Null => "null",
            LiteralKind::Date => "date",
            LiteralKind::DateTime => "date-time",
            LiteralKind::QualifiedIdentifier => "qualified identifier",
        };
        f.write_str(name)
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(StringLiteral),
    Number(NumberLiteral),
    Boolean(bool),
    Null,
    Date(DateLiteral),
    DateTime(DateTimeLiteral),
    QualifiedIdentifier(QualifiedIdentifier),
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::Number(_) => LiteralKind::Number,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::Null => LiteralKind::Null,
            Literal::Date(_) => LiteralKind::Date,
            Literal::DateTime(_) => LiteralKind::DateTime,
            Literal::QualifiedIdentifier(_) => LiteralKind::QualifiedIdentifier,
        }
    }

    pub fn as_identifier(&self) -> Option<&QualifiedIdentifier> {
        match self {
            Literal::QualifiedIdentifier(ident) => Some(ident),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s}"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Null => write!(f, "null"),
            Literal::Date(d) => write!(f, "{d}"),
            Literal::DateTime(d) => write!(f, "{d}"),
            Literal::QualifiedIdentifier(i) => write!(f, "{i}"),
        }
    }
}

impl From<StringLiteral> for Literal {
    fn from(value: StringLiteral) -> Self {
        Literal::String(value)
    }
}

impl From<NumberLiteral> for Literal {
    fn from(value: NumberLiteral) -> Self {
        Literal::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<DateLiteral> for Literal {
    fn from(value: DateLiteral) -> Self {
        Literal::Date(value)
    }
}

impl From<DateTimeLiteral> for Literal {
    fn from(value: DateTimeLiteral) -> Self {
        Literal::DateTime(value)
    }
}

impl From<QualifiedIdentifier> for Literal {
    fn from(value: QualifiedIdentifier) -> Self {
        Literal::QualifiedIdentifier(value)
    }
}

/// Raw (unescaped) string value. Quoting happens when the literal is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringLiteral {
    value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.value))
    }
}

/// Numeric payload of a [`NumberLiteral`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Integer(i) => write!(f, "{i}"),
            NumberValue::BigInt(i) => write!(f, "{i}"),
            NumberValue::Float(v) => {
                let text = v.to_string();
                // Keep the decimal point so the text reads back as a float
                if v.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NumberParts")]
pub struct NumberLiteral {
    value: NumberValue,
}

impl NumberLiteral {
    /// Coerce numeric text.
    ///
    /// Text containing `.` is a float. Other text is read as an `i64` and
    /// falls back to a big integer whenever the `i64` does not print back to
    /// exactly the same text.
    pub fn parse(text: &str) -> Result<Self, FilterValidationError> {
        if text.contains('.') {
            let value = text.parse::<f64>().map_err(|e| {
                FilterValidationError::invalid_literal(LiteralKind::Number, text, e.to_string())
            })?;
            if !value.is_finite() {
                return Err(FilterValidationError::invalid_literal(
                    LiteralKind::Number,
                    text,
                    "value is not finite",
                ));
            }
            return Ok(Self {
                value: NumberValue::Float(value),
            });
        }

        match text.parse::<i64>() {
            Ok(value) if value.to_string() == text => Ok(Self {
                value: NumberValue::Integer(value),
            }),
            _ => {
                trace!(literal = text, "integer text does not round-trip, reading as big integer");
                let value = text.parse::<BigInt>().map_err(|e| {
                    FilterValidationError::invalid_literal(LiteralKind::Number, text, e.to_string())
                })?;
                Ok(Self {
                    value: NumberValue::BigInt(value),
                })
            }
        }
    }

    pub fn value(&self) -> &NumberValue {
        &self.value
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            NumberValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            NumberValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_big_int(&self) -> bool {
        matches!(self.value, NumberValue::BigInt(_))
    }
}

#[derive(Deserialize)]
struct NumberParts {
    value: NumberValue,
}

impl TryFrom<NumberParts> for NumberLiteral {
    type Error = FilterValidationError;

    fn try_from(parts: NumberParts) -> Result<Self, Self::Error> {
        match parts.value {
            NumberValue::Float(v) if !v.is_finite() => Err(FilterValidationError::invalid_literal(
                LiteralKind::Number,
                &v.to_string(),
                "value is not finite",
            )),
            value => Ok(Self { value }),
        }
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self {
            value: NumberValue::Integer(value),
        }
    }
}

impl From<i32> for NumberLiteral {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self {
            value: NumberValue::Float(value),
        }
    }
}

impl From<BigInt> for NumberLiteral {
    fn from(value: BigInt) -> Self {
        Self {
            value: NumberValue::BigInt(value),
        }
    }
}

/// Calendar date stored as ISO-8601 text (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LiteralText")]
pub struct DateLiteral {
    value: String,
}

impl DateLiteral {
    pub fn parse(text: &str) -> Result<Self, FilterValidationError> {
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
            FilterValidationError::invalid_literal(LiteralKind::Date, text, e.to_string())
        })?;
        Ok(Self {
            value: text.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value, DATE_FORMAT).ok()
    }
}

impl From<NaiveDate> for DateLiteral {
    fn from(value: NaiveDate) -> Self {
        Self {
            value: value.format(DATE_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for DateLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.value))
    }
}

/// Date and time stored as ISO-8601 text, with or without an offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LiteralText")]
pub struct DateTimeLiteral {
    value: String,
}

impl DateTimeLiteral {
    pub fn parse(text: &str) -> Result<Self, FilterValidationError> {
        if !is_valid_date_time(text) {
            return Err(FilterValidationError::invalid_literal(
                LiteralKind::DateTime,
                text,
                "not a valid calendar date-time",
            ));
        }
        Ok(Self {
            value: text.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Offset-aware values only; naive date-times return `None`.
    pub fn to_date_time(&self) -> Option<DateTime<chrono::FixedOffset>> {
        let text = normalize_offset(&self.value);
        ZONED_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(&text, fmt).ok())
    }
}

impl From<NaiveDateTime> for DateTimeLiteral {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            value: value.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateTimeLiteral
where
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self {
            value: value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Serialized form of the text-backed literals, validated on the way in.
#[derive(Deserialize)]
struct LiteralText {
    value: String,
}

impl TryFrom<LiteralText> for DateLiteral {
    type Error = FilterValidationError;

    fn try_from(text: LiteralText) -> Result<Self, Self::Error> {
        Self::parse(&text.value)
    }
}

impl TryFrom<LiteralText> for DateTimeLiteral {
    type Error = FilterValidationError;

    fn try_from(text: LiteralText) -> Result<Self, Self::Error> {
        Self::parse(&text.value)
    }
}

impl fmt::Display for DateTimeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.value))
    }
}

/// Rewrites `Z` and hour-only `±HH` offsets to `±HH:MM`, which chrono parses.
fn normalize_offset(text: &str) -> String {
    if let Some(rest) = text.strip_suffix('Z') {
        return format!("{rest}+00:00");
    }

    let time_start = text.find('T').map_or(0, |i| i + 1);
    match text[time_start..].rfind(['+', '-']) {
        Some(sign) if text.len() - (time_start + sign) == 3 => format!("{text}:00"),
        _ => text.to_string(),
    }
}

fn is_valid_date_time(text: &str) -> bool {
    if NAIVE_DATE_TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
    {
        return true;
    }

    let text = normalize_offset(text);
    ZONED_DATE_TIME_FORMATS
        .iter()
        .any(|fmt| DateTime::parse_from_str(&text, fmt).is_ok())
}

/// Dotted field path such as `address.city`.
///
/// The identifier is never resolved against a schema here; resolution results
/// live in a side table owned by whoever performs the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedIdentifier {
    value: String,
}

impl QualifiedIdentifier {
    pub fn new(path: impl Into<String>) -> Self {
        Self { value: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.value
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.value.split('.')
    }
}

impl fmt::Display for QualifiedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
