//! # pmoprofiles - Catalogue de profils média DLNA
//!
//! Moteur de construction du catalogue de profils média : consomme les
//! événements structurels émis par le front-end de document (ouverture et
//! fermeture d'éléments, attributs déjà parsés) et produit la liste plate
//! des profils résolus, héritage et surcharges compris.
//!
//! Le tokenizer du document, le matching temps réel des flux découverts et
//! l'extraction de métadonnées sont des collaborateurs externes ; seul le
//! moteur de build vit ici.
//!
//! ## Usage
//!
//! ```
//! use pmoprofiles::{ProfileEvent, build_profiles};
//!
//! let events = vec![
//!     ProfileEvent::ProfileOpen {
//!         name: "MP3".to_string(),
//!         mime: "audio/mpeg".to_string(),
//!         extended: false,
//!         base_profile: None,
//!     },
//!     ProfileEvent::ProfileClose,
//! ];
//!
//! let profiles = build_profiles(events)?;
//! assert_eq!(profiles[0].name, "MP3");
//! # Ok::<(), pmoprofiles::BuildError>(())
//! ```

mod builder;
mod errors;
mod events;
mod profile;
mod registry;
mod restriction;

pub use builder::{ProfileBuilder, build_profiles};
pub use errors::BuildError;
pub use events::{ElementKind, FieldPayload, LiteralEntry, ProfileEvent, RestrictionPayload};
pub use profile::Profile;
pub use registry::{DescribedRestriction, RestrictionRegistry};
pub use restriction::{NamedValueList, Restriction, RestrictionCategory};
