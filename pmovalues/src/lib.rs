//! # pmovalues - Modèle de valeurs typées
//!
//! Domaine de valeurs utilisé par les restrictions de profils média DLNA :
//! booléens, entiers, fractions et chaînes, chacun utilisable comme valeur
//! simple ou comme intervalle borné (types ordonnés uniquement).
//!
//! Les listes de valeurs ([`ValueList`]) sont homogènes : toutes les entrées
//! partagent le type déclaré de la liste.

mod errors;
mod fraction;
mod fromstr;
mod value;
mod value_list;

pub use errors::ValueError;
pub use fraction::Fraction;
pub use value::Value;
pub use value_list::{ValueEntry, ValueList};

use serde::{Deserialize, Serialize};

/// Types de valeurs supportés par les champs de restriction.
///
/// Les noms "float" et "fourcc" existent dans les documents de profils mais
/// ne sont pas supportés : leur parsing renvoie
/// [`ValueError::UnsupportedType`], que l'appelant traite comme un simple
/// avertissement (le champ est ignoré, jamais fatal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Int,
    String,
    Fraction,
}

impl ValueType {
    /// Vrai pour les types ordonnés, seuls autorisés en intervalle.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Fraction)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Boolean => "boolean",
            ValueType::Int => "int",
            ValueType::String => "string",
            ValueType::Fraction => "fraction",
        };
        write!(f, "{}", name)
    }
}
