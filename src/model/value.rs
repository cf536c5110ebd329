//! Typed values produced by the value normalizer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::record::Row;

/// A currency amount held in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Amount as a floating point number of dollars.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// A normalized field or cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Not reported / not located
    #[default]
    Null,
    /// Checkbox or yes/no answer
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Dollar amount
    Currency(Amount),
    /// Full calendar date
    Date(NaiveDate),
    /// Free text, account numbers, single choices
    Text(String),
    /// Multi-select choices
    List(Vec<String>),
    /// Rows of another table attached to a row
    Rows(Vec<Row>),
}

impl Value {
    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the amount if this is a currency value.
    pub fn as_amount(&self) -> Option<Amount> {
        match self {
            Value::Currency(amount) => Some(*amount),
            _ => None,
        }
    }

    /// Get the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the list if this is a multi-select value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the rows if this holds attached rows.
    pub fn as_rows(&self) -> Option<&[Row]> {
        match self {
            Value::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Currency(amount) => amount.serialize(serializer),
            Value::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Value::Text(text) => serializer.serialize_str(text),
            Value::List(items) => items.serialize(serializer),
            Value::Rows(rows) => rows.serialize(serializer),
        }
    }
}
