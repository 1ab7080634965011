//! Erreurs du moteur numérique.

use thiserror::Error;

/// Échecs possibles d’une évaluation de texte.
///
/// Un résultat non fini (division par zéro, `sqrt(-1)`, …) n’est PAS une erreur ici :
/// c’est une valeur, rejetée ensuite par l’éditeur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("expression invalide")]
    ExpressionInvalide,

    /// Unité d’angle hors d’un argument de fonction, ou appliquée deux fois.
    #[error("unité d’angle mal placée")]
    UniteMalPlacee,
}
