//! Erreurs de l’éditeur.
//!
//! - `ErreurSaisie` : rejet synchrone, état inchangé, pas de gel.
//! - `ErreurCalcul` : échec d’évaluation ou de domaine ; l’éditeur est déjà gelé
//!   quand l’appelant la reçoit (sauf `Gele`, qui signale une opération ignorée).

use thiserror::Error;

use crate::noyau::ErreurEval;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("parenthèse fermante sans parenthèse ouvrante")]
    ParentheseNonOuverte,

    #[error("chiffre invalide: '{0}'")]
    ChiffreInvalide(char),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomaineInvalide {
    #[error("inverse de zéro")]
    InverseDeZero,

    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,

    #[error("factorielle d’un nombre négatif ou non entier: {0}")]
    FactorielleInvalide(f64),

    #[error("factorielle trop grande: {0}!")]
    FactorielleTropGrande(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("évaluation impossible: {0}")]
    Evaluation(#[from] ErreurEval),

    #[error("résultat non fini")]
    NonFini,

    #[error(transparent)]
    Domaine(#[from] DomaineInvalide),

    /// Opération ignorée : l’affichage d’erreur est en cours.
    #[error("affichage gelé")]
    Gele,
}

/// Échec d’une `Commande` (surface d’entrée unique de l’UI).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCommande {
    #[error(transparent)]
    Saisie(#[from] ErreurSaisie),

    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),
}
