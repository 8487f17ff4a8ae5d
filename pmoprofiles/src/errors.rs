use crate::events::ElementKind;
use thiserror::Error;

/// Violations d'invariants du flux d'événements.
///
/// Ces erreurs signalent un défaut du tokenizer amont (imbrication non
/// respectée), jamais des données utilisateur invalides : celles-ci sont
/// traitées localement par avertissement et poursuite du build.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Close event for {found} does not match open element {expected:?}")]
    MismatchedClose {
        found: ElementKind,
        expected: Option<ElementKind>,
    },

    #[error("Close event for {0} with no open element")]
    UnbalancedClose(ElementKind),

    #[error("No open profile frame for {0} close")]
    NoProfileFrame(ElementKind),

    #[error("No open restriction frame for {0} close")]
    NoRestrictionFrame(ElementKind),

    #[error("Event stream ended with {0} still open")]
    UnclosedElement(ElementKind),
}
