//! Machine à pile de construction des profils.
//!
//! Consomme la séquence d'événements structurels du front-end de document
//! et construit incrémentalement les restrictions et les profils, avec
//! résolution des références nommées (héritage) à chaque fermeture.
//!
//! Toute donnée invalide localement (type inconnu, littéral mal formé,
//! catégorie inconnue, référence pendante) est signalée par `warn!` puis
//! ignorée ; seules les violations d'imbrication du tokenizer amont sont
//! des erreurs fatales ([`BuildError`]).

use crate::errors::BuildError;
use crate::events::{ElementKind, FieldPayload, LiteralEntry, ProfileEvent, RestrictionPayload};
use crate::profile::Profile;
use crate::registry::{DescribedRestriction, RestrictionRegistry};
use crate::restriction::{Restriction, RestrictionCategory};
use pmovalues::{ValueList, ValueType};
use tracing::{debug, warn};

/// État transitoire d'un élément `dlna-profile` ouvert.
#[derive(Debug, Default)]
struct ProfileFrame {
    name: String,
    mime: String,
    extended: bool,
    audio: Vec<Restriction>,
    container: Vec<Restriction>,
    image: Vec<Restriction>,
    video: Vec<Restriction>,
}

impl ProfileFrame {
    fn category_mut(&mut self, category: RestrictionCategory) -> &mut Vec<Restriction> {
        match category {
            RestrictionCategory::Audio => &mut self.audio,
            RestrictionCategory::Container => &mut self.container,
            RestrictionCategory::Image => &mut self.image,
            RestrictionCategory::Video => &mut self.video,
        }
    }

    /// Pré-remplit les quatre listes avec des copies profondes des
    /// restrictions du profil de base, avant tout contenu propre.
    fn seed_from(&mut self, base: &Profile) {
        for category in RestrictionCategory::ALL {
            if let Some(restrictions) = base.restrictions(category) {
                self.category_mut(category).extend_from_slice(restrictions);
            }
        }
    }

    /// Une catégorie dont toutes les restrictions sont individuellement
    /// vides devient absente : on n'émet jamais de restriction creuse qui
    /// matcherait tout.
    fn collapse(list: Vec<Restriction>) -> Option<Vec<Restriction>> {
        if list.iter().all(|r| r.is_empty()) {
            None
        } else {
            Some(list)
        }
    }

    fn into_profile(self) -> Profile {
        Profile {
            name: self.name,
            mime: self.mime,
            extended: self.extended,
            audio_restrictions: Self::collapse(self.audio),
            container_restrictions: Self::collapse(self.container),
            image_restrictions: Self::collapse(self.image),
            video_restrictions: Self::collapse(self.video),
        }
    }
}

/// État transitoire d'un élément `restriction` ouvert.
#[derive(Debug, Default)]
struct RestrictionFrame {
    /// Champs accumulés, dans l'ordre de déclaration.
    fields: Vec<(String, ValueList)>,
    /// Restrictions parentes résolues, dans l'ordre de déclaration.
    parents: Vec<Restriction>,
}

/// Moteur de build : une instance par build, mono-thread, sans suspension.
///
/// Trois piles indépendantes (genres d'éléments, frames de profils, frames
/// de restrictions) plus le registre des restrictions nommées et la liste
/// de sortie en cours.
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    contexts: Vec<ElementKind>,
    profile_frames: Vec<ProfileFrame>,
    restriction_frames: Vec<RestrictionFrame>,
    registry: RestrictionRegistry,
    profiles: Vec<Profile>,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: ProfileEvent) -> Result<(), BuildError> {
        match event {
            ProfileEvent::ProfileOpen {
                name,
                mime,
                extended,
                base_profile,
            } => {
                self.open_profile(name, mime, extended, base_profile);
                Ok(())
            }
            ProfileEvent::RestrictionsOpen => {
                self.contexts.push(ElementKind::Restrictions);
                Ok(())
            }
            ProfileEvent::RestrictionOpen => {
                self.contexts.push(ElementKind::Restriction);
                self.restriction_frames.push(RestrictionFrame::default());
                Ok(())
            }
            ProfileEvent::FieldOpen => {
                self.contexts.push(ElementKind::Field);
                Ok(())
            }
            ProfileEvent::ParentOpen => {
                self.contexts.push(ElementKind::Parent);
                Ok(())
            }
            ProfileEvent::FieldClose(payload) => {
                self.pop_context(ElementKind::Field)?;
                self.close_field(payload)
            }
            ProfileEvent::ParentClose(reference) => {
                self.pop_context(ElementKind::Parent)?;
                self.close_parent(reference)
            }
            ProfileEvent::RestrictionClose(payload) => {
                self.pop_context(ElementKind::Restriction)?;
                self.close_restriction(payload)
            }
            ProfileEvent::RestrictionsClose => self.pop_context(ElementKind::Restrictions),
            ProfileEvent::ProfileClose => {
                self.pop_context(ElementKind::DlnaProfile)?;
                self.close_profile()
            }
        }
    }

    /// Termine le build : vérifie l'équilibre des ouvertures puis exécute
    /// la passe de nettoyage (les profils anonymes sont écartés).
    pub fn finish(self) -> Result<Vec<Profile>, BuildError> {
        if let Some(kind) = self.contexts.last() {
            return Err(BuildError::UnclosedElement(*kind));
        }

        let mut profiles = self.profiles;
        profiles.retain(|profile| {
            if profile.is_anonymous() {
                debug!("Discarding reference-only profile (mime {})", profile.mime);
                return false;
            }
            true
        });

        for profile in &profiles {
            debug!("Profile {} ({})", profile.name, profile.mime);
            for category in RestrictionCategory::ALL {
                if let Some(restrictions) = profile.restrictions(category) {
                    for restriction in restrictions {
                        debug!("  {}: {}", category, restriction);
                    }
                }
            }
        }

        Ok(profiles)
    }

    /// Dépile le genre d'élément attendu ; toute discordance signale un
    /// défaut d'imbrication du tokenizer amont.
    fn pop_context(&mut self, closing: ElementKind) -> Result<(), BuildError> {
        match self.contexts.pop() {
            Some(kind) if kind == closing => Ok(()),
            Some(kind) => Err(BuildError::MismatchedClose {
                found: closing,
                expected: Some(kind),
            }),
            None => Err(BuildError::UnbalancedClose(closing)),
        }
    }

    fn open_profile(
        &mut self,
        name: String,
        mime: String,
        extended: bool,
        base_profile: Option<String>,
    ) {
        self.contexts.push(ElementKind::DlnaProfile);

        let mut frame = ProfileFrame {
            name,
            mime,
            extended,
            ..Default::default()
        };

        if let Some(base_name) = base_profile {
            // La déclaration la plus récente du nom gagne.
            match self.profiles.iter().rev().find(|p| p.name == base_name) {
                Some(base) => frame.seed_from(base),
                None => warn!(
                    "Base profile {} not found for profile {}",
                    base_name, frame.name
                ),
            }
        }

        self.profile_frames.push(frame);
    }

    fn close_field(&mut self, payload: FieldPayload) -> Result<(), BuildError> {
        let Some(frame) = self.restriction_frames.last_mut() else {
            return Err(BuildError::NoRestrictionFrame(ElementKind::Field));
        };

        let (Some(name), Some(type_name)) = (payload.name, payload.value_type) else {
            warn!("Field without name or type, skipping");
            return Ok(());
        };

        let value_type: ValueType = match type_name.parse() {
            Ok(vt) => vt,
            Err(err) => {
                warn!("Skipping field {}: {}", name, err);
                return Ok(());
            }
        };

        let mut list = ValueList::new(value_type);
        for entry in payload.entries {
            let added = match &entry {
                LiteralEntry::Single(text) => list.add_single(text),
                LiteralEntry::Range { min, max } => list.add_range(min, max),
            };
            if let Err(err) = added {
                warn!("Skipping entry {:?} of field {}: {}", entry, name, err);
            }
        }

        frame.fields.push((name, list));
        Ok(())
    }

    fn close_parent(&mut self, reference: Option<String>) -> Result<(), BuildError> {
        // Référence filtrée en amont (mode relaxed/extended) : rien à faire.
        let Some(id) = reference else {
            return Ok(());
        };

        let Some(described) = self.registry.lookup(&id) else {
            warn!("Parent restriction {} not found, ignoring reference", id);
            return Ok(());
        };

        match self.contexts.last() {
            Some(ElementKind::Restriction) => {
                let restriction = described.restriction.clone();
                let Some(frame) = self.restriction_frames.last_mut() else {
                    return Err(BuildError::NoRestrictionFrame(ElementKind::Parent));
                };
                frame.parents.push(restriction);
                Ok(())
            }
            Some(ElementKind::DlnaProfile) => {
                let described = described.clone();
                let Some(frame) = self.profile_frames.last_mut() else {
                    return Err(BuildError::NoProfileFrame(ElementKind::Parent));
                };
                frame
                    .category_mut(described.category)
                    .push(described.restriction);
                Ok(())
            }
            _ => {
                warn!("Parent reference {} outside restriction or profile, ignoring", id);
                Ok(())
            }
        }
    }

    fn close_restriction(&mut self, payload: RestrictionPayload) -> Result<(), BuildError> {
        let Some(frame) = self.restriction_frames.pop() else {
            return Err(BuildError::NoRestrictionFrame(ElementKind::Restriction));
        };

        // Élément filtré en amont : le frame accumulé est simplement jeté.
        let Some(category_name) = payload.category else {
            return Ok(());
        };

        let mut restriction = Restriction::new(payload.name);

        for (name, list) in frame.fields {
            if !restriction.add_value_list(&name, list) {
                debug!("Duplicate field {} in restriction, keeping first", name);
            }
        }

        // Les parents comblent les champs absents, dans l'ordre de
        // déclaration : les champs propres gagnent toujours, et entre
        // parents homonymes le premier déclaré gagne.
        for parent in &frame.parents {
            restriction.merge(parent);
        }

        let category: RestrictionCategory = match category_name.parse() {
            Ok(c) => c,
            Err(err) => {
                warn!("Discarding restriction: {}", err);
                return Ok(());
            }
        };

        if self.contexts.last() == Some(&ElementKind::DlnaProfile) {
            let Some(profile_frame) = self.profile_frames.last_mut() else {
                return Err(BuildError::NoProfileFrame(ElementKind::Restriction));
            };
            profile_frame.category_mut(category).push(restriction.clone());
        }

        if let Some(id) = payload.id {
            self.registry.register(
                &id,
                DescribedRestriction {
                    restriction,
                    category,
                },
            );
        }

        Ok(())
    }

    fn close_profile(&mut self) -> Result<(), BuildError> {
        let Some(frame) = self.profile_frames.pop() else {
            return Err(BuildError::NoProfileFrame(ElementKind::DlnaProfile));
        };
        self.profiles.push(frame.into_profile());
        Ok(())
    }
}

/// Construit le catalogue de profils à partir d'une séquence d'événements
/// structurels, puis applique la passe de nettoyage.
///
/// Un build par appel : le moteur ne se réutilise pas entre documents.
pub fn build_profiles<I>(events: I) -> Result<Vec<Profile>, BuildError>
where
    I: IntoIterator<Item = ProfileEvent>,
{
    let mut builder = ProfileBuilder::new();
    for event in events {
        builder.handle_event(event)?;
    }
    builder.finish()
}
