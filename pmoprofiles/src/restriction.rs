//! Restrictions : ensembles nommés de contraintes typées par champ.

use pmovalues::ValueList;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catégorie média d'une restriction au sein d'un profil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionCategory {
    Audio,
    Container,
    Image,
    Video,
}

impl RestrictionCategory {
    pub const ALL: [RestrictionCategory; 4] = [
        RestrictionCategory::Audio,
        RestrictionCategory::Container,
        RestrictionCategory::Image,
        RestrictionCategory::Video,
    ];
}

impl FromStr for RestrictionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "audio" => Ok(RestrictionCategory::Audio),
            "container" => Ok(RestrictionCategory::Container),
            "image" => Ok(RestrictionCategory::Image),
            "video" => Ok(RestrictionCategory::Video),
            _ => Err(format!("Unknown restriction category: {}", s)),
        }
    }
}

impl std::fmt::Display for RestrictionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RestrictionCategory::Audio => "audio",
            RestrictionCategory::Container => "container",
            RestrictionCategory::Image => "image",
            RestrictionCategory::Video => "video",
        };
        write!(f, "{}", name)
    }
}

/// Champ d'une restriction : un nom et sa liste de valeurs typée.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValueList {
    pub name: String,
    pub values: ValueList,
}

/// Ensemble de contraintes par champ, éventuellement nommé.
///
/// Les restrictions anonymes n'existent que pour être fusionnées dans un
/// profil. L'ordre de déclaration des champs est conservé et les noms de
/// champs sont uniques : le premier écrivain gagne.
///
/// La copie (`Clone`) est profonde : chaque [`ValueList`] est possédée,
/// jamais partagée entre une restriction modèle et ses usages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub name: Option<String>,
    fields: Vec<NamedValueList>,
}

impl Restriction {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[NamedValueList] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ValueList> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.values)
    }

    /// Insère la liste sous `name` si le champ est absent.
    ///
    /// Retourne vrai si l'insertion a eu lieu (la liste est alors possédée
    /// par la restriction) ; faux si le champ existait déjà, la liste est
    /// simplement abandonnée par l'appelant.
    pub fn add_value_list(&mut self, name: &str, values: ValueList) -> bool {
        if self.fields.iter().any(|f| f.name == name) {
            return false;
        }
        self.fields.push(NamedValueList {
            name: name.to_string(),
            values,
        });
        true
    }

    /// Fusion destructive : copie dans `self` chaque champ de `source`
    /// absent de `self`. Les champs déjà présents ne sont jamais écrasés,
    /// les champs propres gagnent donc toujours sur les champs hérités.
    pub fn merge(&mut self, source: &Restriction) {
        for field in &source.fields {
            if self.fields.iter().all(|f| f.name != field.name) {
                self.fields.push(field.clone());
            }
        }
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {{ ", name)?,
            None => write!(f, "{{ ")?,
        }
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", field.name, field.values)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmovalues::{ValueList, ValueType};

    fn int_list(values: &[&str]) -> ValueList {
        let mut list = ValueList::new(ValueType::Int);
        for v in values {
            list.add_single(v).unwrap();
        }
        list
    }

    #[test]
    fn test_is_empty() {
        let mut r = Restriction::new(None);
        assert!(r.is_empty());
        assert!(r.add_value_list("rate", int_list(&["44100"])));
        assert!(!r.is_empty());
    }

    #[test]
    fn test_add_value_list_first_writer_wins() {
        let mut r = Restriction::new(Some("MP3".to_string()));
        assert!(r.add_value_list("rate", int_list(&["44100"])));
        assert!(!r.add_value_list("rate", int_list(&["48000"])));
        assert_eq!(r.field("rate").unwrap(), &int_list(&["44100"]));
    }

    #[test]
    fn test_merge_fills_only_absent_fields() {
        let mut child = Restriction::new(None);
        child.add_value_list("rate", int_list(&["48000"]));

        let mut parent = Restriction::new(None);
        parent.add_value_list("rate", int_list(&["44100"]));
        parent.add_value_list("channels", int_list(&["2"]));

        child.merge(&parent);

        // Le champ propre gagne, le champ hérité est ajouté.
        assert_eq!(child.field("rate").unwrap(), &int_list(&["48000"]));
        assert_eq!(child.field("channels").unwrap(), &int_list(&["2"]));
        assert_eq!(child.fields().len(), 2);
    }

    #[test]
    fn test_self_merge_is_idempotent() {
        let mut r = Restriction::new(None);
        r.add_value_list("rate", int_list(&["44100"]));
        r.add_value_list("channels", int_list(&["2"]));

        let snapshot = r.clone();
        r.merge(&snapshot);

        assert_eq!(r, snapshot);
    }

    #[test]
    fn test_merge_disjoint_fields_is_union() {
        let mut a = Restriction::new(None);
        a.add_value_list("rate", int_list(&["44100"]));

        let mut b = Restriction::new(None);
        b.add_value_list("channels", int_list(&["2"]));

        a.merge(&b);

        assert_eq!(a.fields().len(), 2);
        assert_eq!(a.field("rate").unwrap(), &int_list(&["44100"]));
        assert_eq!(a.field("channels").unwrap(), &int_list(&["2"]));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Restriction::new(None);
        original.add_value_list("rate", int_list(&["44100"]));

        let mut copy = original.clone();
        copy.add_value_list("channels", int_list(&["2"]));

        assert_eq!(original.fields().len(), 1);
        assert_eq!(copy.fields().len(), 2);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "audio".parse::<RestrictionCategory>().unwrap(),
            RestrictionCategory::Audio
        );
        assert!("midi".parse::<RestrictionCategory>().is_err());
    }
}
