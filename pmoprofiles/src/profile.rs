use crate::restriction::{Restriction, RestrictionCategory};
use serde::{Deserialize, Serialize};

/// Profil média résolu, immuable une fois construit.
///
/// Un nom vide marque un profil de référence pur (base d'héritage) : il est
/// écarté par la passe de nettoyage et n'atteint jamais le matcher aval.
/// Une catégorie absente (`None`) signifie « aucune contrainte exprimée » ;
/// elle est distincte d'une liste vide, jamais émise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub mime: String,
    pub extended: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_restrictions: Option<Vec<Restriction>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_restrictions: Option<Vec<Restriction>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_restrictions: Option<Vec<Restriction>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_restrictions: Option<Vec<Restriction>>,
}

impl Profile {
    /// Vrai si le profil n'existe que pour être référencé comme base.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn restrictions(&self, category: RestrictionCategory) -> Option<&[Restriction]> {
        let list = match category {
            RestrictionCategory::Audio => &self.audio_restrictions,
            RestrictionCategory::Container => &self.container_restrictions,
            RestrictionCategory::Image => &self.image_restrictions,
            RestrictionCategory::Video => &self.video_restrictions,
        };
        list.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_anonymous() {
        let profile = Profile {
            name: String::new(),
            mime: "audio/mpeg".to_string(),
            extended: false,
            audio_restrictions: None,
            container_restrictions: None,
            image_restrictions: None,
            video_restrictions: None,
        };
        assert!(profile.is_anonymous());

        let named = Profile {
            name: "MP3".to_string(),
            ..profile
        };
        assert!(!named.is_anonymous());
    }
}
