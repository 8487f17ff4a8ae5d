use crate::{ValueError, ValueType};
use std::str::FromStr;

impl FromStr for ValueType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boolean" => Ok(ValueType::Boolean),
            "int" => Ok(ValueType::Int),
            "string" => Ok(ValueType::String),
            "fraction" => Ok(ValueType::Fraction),
            // Reconnus dans les documents de profils mais non supportés :
            // l'appelant ignore le champ avec un avertissement.
            "float" | "fourcc" => Err(ValueError::UnsupportedType(s.to_string())),
            _ => Err(ValueError::UnknownType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert_eq!("boolean".parse::<ValueType>().unwrap(), ValueType::Boolean);
        assert_eq!("int".parse::<ValueType>().unwrap(), ValueType::Int);
        assert_eq!("string".parse::<ValueType>().unwrap(), ValueType::String);
        assert_eq!(
            "fraction".parse::<ValueType>().unwrap(),
            ValueType::Fraction
        );
    }

    #[test]
    fn test_unsupported_types() {
        assert!(matches!(
            "float".parse::<ValueType>(),
            Err(ValueError::UnsupportedType(_))
        ));
        assert!(matches!(
            "fourcc".parse::<ValueType>(),
            Err(ValueError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_unknown_type() {
        assert!(matches!(
            "complex".parse::<ValueType>(),
            Err(ValueError::UnknownType(_))
        ));
    }
}
