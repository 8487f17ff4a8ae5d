use crate::{Value, ValueError, ValueType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Entrée d'une liste de valeurs : valeur simple ou intervalle borné.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueEntry {
    Single(Value),
    Range { min: Value, max: Value },
}

/// Séquence ordonnée et homogène d'entrées pour un champ de restriction.
///
/// Invariant : toutes les entrées portent le type déclaré de la liste ;
/// les intervalles ne sont acceptés que pour les types ordonnés.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueList {
    value_type: ValueType,
    entries: Vec<ValueEntry>,
}

impl ValueList {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            entries: Vec::new(),
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn entries(&self) -> &[ValueEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Parse `text` selon le type de la liste et l'ajoute comme valeur
    /// simple. En cas d'échec la liste n'est pas modifiée.
    pub fn add_single(&mut self, text: &str) -> Result<(), ValueError> {
        let value = Value::parse(self.value_type, text)?;
        self.entries.push(ValueEntry::Single(value));
        Ok(())
    }

    /// Parse et ajoute un intervalle `[min, max]`.
    ///
    /// Seuls les types ordonnés (int, fraction) acceptent les intervalles ;
    /// un intervalle inversé est rejeté. En cas d'échec la liste n'est pas
    /// modifiée.
    pub fn add_range(&mut self, min_text: &str, max_text: &str) -> Result<(), ValueError> {
        if !self.value_type.is_ordered() {
            return Err(ValueError::TypeError(format!(
                "Range entries are not allowed for type {}",
                self.value_type
            )));
        }
        let min = Value::parse(self.value_type, min_text)?;
        let max = Value::parse(self.value_type, max_text)?;
        if min.partial_cmp(&max) == Some(Ordering::Greater) {
            return Err(ValueError::RangeError(
                "Minimum cannot be greater than maximum".to_string(),
            ));
        }
        self.entries.push(ValueEntry::Range { min, max });
        Ok(())
    }
}

impl std::fmt::Display for ValueList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match entry {
                ValueEntry::Single(value) => write!(f, "{}", value)?,
                ValueEntry::Range { min, max } => write!(f, "{}..{}", min, max)?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_single() {
        let mut list = ValueList::new(ValueType::Int);
        list.add_single("44100").unwrap();
        list.add_single("48000").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0], ValueEntry::Single(Value::Int(44100)));
    }

    #[test]
    fn test_add_single_parse_failure_leaves_list_unmodified() {
        let mut list = ValueList::new(ValueType::Int);
        list.add_single("44100").unwrap();
        assert!(list.add_single("quarante-quatre").is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_range_ordered_types() {
        let mut ints = ValueList::new(ValueType::Int);
        ints.add_range("8000", "48000").unwrap();

        let mut fracs = ValueList::new(ValueType::Fraction);
        fracs.add_range("1/2", "30000/1001").unwrap();

        assert_eq!(ints.len(), 1);
        assert_eq!(fracs.len(), 1);
    }

    #[test]
    fn test_add_range_rejected_for_unordered_types() {
        let mut strings = ValueList::new(ValueType::String);
        assert!(matches!(
            strings.add_range("a", "z"),
            Err(ValueError::TypeError(_))
        ));

        let mut bools = ValueList::new(ValueType::Boolean);
        assert!(bools.add_range("false", "true").is_err());
        assert!(bools.is_empty());
    }

    #[test]
    fn test_add_range_rejects_inverted_bounds() {
        let mut list = ValueList::new(ValueType::Int);
        assert!(matches!(
            list.add_range("48000", "8000"),
            Err(ValueError::RangeError(_))
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_display() {
        let mut list = ValueList::new(ValueType::Int);
        list.add_single("2").unwrap();
        list.add_range("4", "6").unwrap();
        assert_eq!(list.to_string(), "[2, 4..6]");
    }
}
