//! Réglages de l’éditeur.

use std::time::Duration;

use super::etat::ModeAngle;

/// Durée d’affichage de "Error" avant reprise automatique.
const DELAI_ERREUR_DEFAUT: Duration = Duration::from_millis(1500);

/// Historique : entrées les plus récentes conservées.
const HISTORIQUE_MAX_DEFAUT: usize = 20;

#[derive(Clone, Debug)]
pub struct Reglages {
    pub delai_erreur: Duration,
    pub historique_max: usize,
    pub mode_angle: ModeAngle,

    /// Graine du tirage aléatoire (None = entropie système).
    pub graine: Option<u64>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_erreur: DELAI_ERREUR_DEFAUT,
            historique_max: HISTORIQUE_MAX_DEFAUT,
            mode_angle: ModeAngle::Degres,
            graine: None,
        }
    }
}

impl Reglages {
    /// Garde-fou : au moins une entrée d’historique.
    pub fn avec_historique_max(mut self, n: usize) -> Self {
        self.historique_max = n.max(1);
        self
    }

    #[cfg(test)]
    pub fn avec_graine(mut self, graine: u64) -> Self {
        self.graine = Some(graine);
        self
    }
}
