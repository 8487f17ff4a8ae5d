use crate::ValueError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Fraction exacte `numérateur/dénominateur`.
///
/// Le signe est normalisé sur le numérateur à la construction, le
/// dénominateur est donc toujours strictement positif.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Fraction {
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, ValueError> {
        if denominator == 0 {
            return Err(ValueError::ParseError(
                "Fraction denominator cannot be zero".to_string(),
            ));
        }
        if denominator < 0 {
            Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            })
        } else {
            Ok(Self {
                numerator,
                denominator,
            })
        }
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }
}

impl FromStr for Fraction {
    type Err = ValueError;

    /// Parse la forme textuelle "numérateur/dénominateur".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s.split_once('/').ok_or_else(|| {
            ValueError::ParseError(format!("Invalid fraction literal: {}", s))
        })?;
        let numerator: i32 = num.trim().parse()?;
        let denominator: i32 = den.trim().parse()?;
        Fraction::new(numerator, denominator)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Produit en croix en i64, les dénominateurs sont positifs.
        let left = self.numerator as i64 * other.denominator as i64;
        let right = other.numerator as i64 * self.denominator as i64;
        left.cmp(&right)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction() {
        let frac: Fraction = "30000/1001".parse().unwrap();
        assert_eq!(frac.numerator(), 30000);
        assert_eq!(frac.denominator(), 1001);
    }

    #[test]
    fn test_parse_rejects_zero_denominator() {
        assert!("1/0".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_parse_rejects_plain_integer() {
        assert!("25".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_sign_normalization() {
        let frac = Fraction::new(1, -2).unwrap();
        assert_eq!(frac.numerator(), -1);
        assert_eq!(frac.denominator(), 2);
    }

    #[test]
    fn test_ordering() {
        let a: Fraction = "1/2".parse().unwrap();
        let b: Fraction = "2/3".parse().unwrap();
        let c: Fraction = "2/4".parse().unwrap();
        assert!(a < b);
        assert_eq!(a, c);
    }
}
