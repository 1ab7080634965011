//! Noyau numérique
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (nombres, constantes, fonctions, unités d’angle)
//! - rpn.rs       : shunting-yard (moins unaire, suffixe d’unité)
//! - eval.rs      : pile f64 + trait `Evaluateur`
//! - fonctions.rs : fonctions nommées
//! - trig.rs      : trigonométrie avec unité + angles spéciaux
//! - format.rs    : forme texte canonique d’un résultat
//! - erreur.rs    : `ErreurEval`

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{Evaluateur, MoteurNumerique};
pub use format::formater_nombre;
