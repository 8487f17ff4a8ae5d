use crate::{Fraction, ValueError, ValueType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Valeur typée d'un champ de restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Int(i32),
    String(String),
    Fraction(Fraction),
}

impl Value {
    /// Parse un littéral selon le type déclaré de la liste.
    ///
    /// Les booléens acceptent "true"/"false" sans tenir compte de la casse.
    pub fn parse(value_type: ValueType, text: &str) -> Result<Self, ValueError> {
        match value_type {
            ValueType::Boolean => match text.to_lowercase().as_str() {
                "true" => Ok(Value::Boolean(true)),
                "false" => Ok(Value::Boolean(false)),
                _ => Err(ValueError::ParseError(format!(
                    "Invalid boolean literal: {}",
                    text
                ))),
            },
            ValueType::Int => Ok(Value::Int(text.trim().parse()?)),
            ValueType::String => Ok(Value::String(text.to_string())),
            ValueType::Fraction => Ok(Value::Fraction(text.parse()?)),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Int(_) => ValueType::Int,
            Value::String(_) => ValueType::String,
            Value::Fraction(_) => ValueType::Fraction,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Fraction(a), Value::Fraction(b)) => a == b,
            (_, _) => false,
        }
    }
}

impl PartialOrd for Value {
    /// L'ordre n'est défini que pour les types ordonnés (int, fraction).
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Fraction(a), Value::Fraction(b)) => Some(a.cmp(b)),
            (_, _) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::String(s) => write!(f, "{}", s),
            Value::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}
