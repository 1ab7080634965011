//! src/editeur/etat.rs
//!
//! État de l’éditeur (données seulement, aucune règle de saisie ici).
//!
//! Contrats :
//! - `affichage` n’est jamais vide après une opération publique ("0" = vide).
//! - `parentheses_ouvertes` = '(' insérées - ')' acceptées ; remis à 0 par la fermeture auto.
//! - `gele` => `affichage == TEXTE_ERREUR`.

use std::collections::VecDeque;

use crate::noyau::trig::UniteAngle;

use super::reglages::Reglages;

/// Forme canonique de l’affichage vide.
pub const AFFICHAGE_VIDE: &str = "0";

/// Texte sentinelle pendant le gel d’erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Mémoire vide (la mémoire est du TEXTE, pas un nombre).
pub const MEMOIRE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DerniereAction {
    #[default]
    Aucune,
    Chiffre,
    Operateur,
    Evaluation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Unité passée au moteur pour les arguments trigonométriques.
    pub fn unite(self) -> UniteAngle {
        match self {
            ModeAngle::Degres => UniteAngle::Deg,
            ModeAngle::Radians => UniteAngle::Rad,
        }
    }

    /// Libellé du bouton (DEG / RAD).
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: f64,
}

#[derive(Clone, Debug)]
pub struct EtatEditeur {
    // --- expression ---
    pub affichage: String,
    pub dernier_resultat: Option<f64>,
    pub derniere_action: DerniereAction,
    pub parentheses_ouvertes: usize,

    // --- gel d’erreur ---
    pub gele: bool,

    // --- paramètres ---
    pub mode_angle: ModeAngle,

    // --- mémoire + historique ---
    pub memoire: String,
    pub historique: VecDeque<EntreeHistorique>,
}

impl EtatEditeur {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            affichage: AFFICHAGE_VIDE.to_string(),
            dernier_resultat: None,
            derniere_action: DerniereAction::Aucune,
            parentheses_ouvertes: 0,
            gele: false,
            mode_angle: reglages.mode_angle,
            memoire: MEMOIRE_VIDE.to_string(),
            historique: VecDeque::with_capacity(reglages.historique_max),
        }
    }

    pub fn memoire_vide(&self) -> bool {
        self.memoire == MEMOIRE_VIDE
    }
}
