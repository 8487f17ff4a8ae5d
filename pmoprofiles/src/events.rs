//! Vocabulaire d'événements structurels émis par le front-end de document.
//!
//! Les attributs arrivent déjà parsés et typés ; le filtrage de mode
//! (relaxed/extended) a eu lieu en amont et n'est observé ici que sous la
//! forme de payloads absents (`None`).

use serde::{Deserialize, Serialize};

/// Genres d'éléments reconnus dans un document de profils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    DlnaProfile,
    Restrictions,
    Restriction,
    Field,
    Parent,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementKind::DlnaProfile => "dlna-profile",
            ElementKind::Restrictions => "restrictions",
            ElementKind::Restriction => "restriction",
            ElementKind::Field => "field",
            ElementKind::Parent => "parent",
        };
        write!(f, "{}", name)
    }
}

/// Littéral d'une entrée de champ, valeur simple ou intervalle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralEntry {
    Single(String),
    Range { min: String, max: String },
}

/// Payload de fermeture d'un élément `field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPayload {
    pub name: Option<String>,
    pub value_type: Option<String>,
    pub entries: Vec<LiteralEntry>,
}

/// Payload de fermeture d'un élément `restriction`.
///
/// `category` absente signifie que l'élément a été filtré en amont : le
/// frame accumulé est jeté sans avertissement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestrictionPayload {
    pub category: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Événement structurel, dans l'ordre d'émission du tokenizer.
///
/// Le tokenizer garantit une imbrication bien formée : chaque fermeture
/// correspond à la dernière ouverture non appariée du même genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileEvent {
    ProfileOpen {
        name: String,
        mime: String,
        extended: bool,
        base_profile: Option<String>,
    },
    RestrictionsOpen,
    RestrictionOpen,
    FieldOpen,
    ParentOpen,
    FieldClose(FieldPayload),
    /// Identifiant de la restriction référencée ; `None` si filtré en amont.
    ParentClose(Option<String>),
    RestrictionClose(RestrictionPayload),
    RestrictionsClose,
    ProfileClose,
}
