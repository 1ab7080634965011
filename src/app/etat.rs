//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’`Editeur` et garder les lectures affichées (écran, historique,
//! mémoire, mode) à jour à partir de ses notifications.
//!
//! Contrats :
//! - Aucune règle de saisie ici : tout passe par `Editeur::executer`.
//! - L’écran ne change que par `Presentateur` (jamais lu dans l’état interne de l’éditeur).
//! - Historique : plus récent en tête, borné.

use std::collections::VecDeque;

use tracing::warn;

use crate::editeur::{
    Commande, Editeur, ErreurCalcul, ErreurCommande, ErreurSaisie, ModeAngle, Presentateur,
    Reglages,
};
use crate::noyau::MoteurNumerique;

/// Lignes d’historique visibles.
const HISTORIQUE_VISIBLE: usize = 20;

/// Lectures affichées, alimentées par les notifications de l’éditeur.
#[derive(Clone, Debug)]
pub struct Ecran {
    pub affichage: String,
    pub historique: VecDeque<String>,
    pub memoire: String,
    pub mode: ModeAngle,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            historique: VecDeque::with_capacity(HISTORIQUE_VISIBLE),
            memoire: "0".to_string(),
            mode: ModeAngle::default(),
        }
    }
}

impl Presentateur for Ecran {
    fn affichage_change(&mut self, texte: &str) {
        self.affichage = texte.to_string();
    }

    fn historique_ajoute(&mut self, expression: &str, resultat: f64) {
        self.historique.push_front(format!(
            "{expression} = {}",
            crate::noyau::formater_nombre(resultat)
        ));
        self.historique.truncate(HISTORIQUE_VISIBLE);
    }

    fn memoire_changee(&mut self, texte: &str) {
        self.memoire = texte.to_string();
    }

    fn mode_angle_change(&mut self, mode: ModeAngle) {
        self.mode = mode;
    }
}

pub struct AppCalc {
    editeur: Editeur,
    pub ecran: Ecran,

    /// Avis modal (saisie refusée) ; None = aucun.
    pub alerte: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let reglages = Reglages::default().avec_historique_max(HISTORIQUE_VISIBLE);
        Self::new(Editeur::avec_reglages(MoteurNumerique, reglages))
    }
}

impl AppCalc {
    pub fn new(editeur: Editeur) -> Self {
        let mut app = Self {
            editeur,
            ecran: Ecran::default(),
            alerte: None,
        };
        app.synchroniser();
        app
    }

    /// Une touche (bouton ou clavier).
    pub fn executer(&mut self, commande: Commande) {
        match self.editeur.executer(commande) {
            Ok(()) => {}
            Err(ErreurCommande::Saisie(e)) => {
                self.alerte = Some(texte_alerte(&e).to_string());
            }
            // déjà journalisé et gelé côté éditeur ; l’écran affiche "Error"
            Err(ErreurCommande::Calcul(ErreurCalcul::Gele)) => {}
            Err(ErreurCommande::Calcul(e)) => {
                warn!(%e, ?commande, "commande en échec");
            }
        }
        self.synchroniser();
    }

    /// Avance l’horloge de l’éditeur (temps de frame, secondes).
    pub fn tick(&mut self, maintenant: f64) {
        self.editeur.tick(maintenant);
        self.synchroniser();
    }

    /// Secondes avant la reprise après "Error" (pour planifier un repaint).
    pub fn reprise_dans(&self) -> Option<f64> {
        self.editeur.reprise_dans()
    }

    pub fn est_gele(&self) -> bool {
        self.editeur.est_gele()
    }

    /// Transmet les notifications en attente à l’écran.
    pub fn synchroniser(&mut self) {
        self.editeur.publier(&mut self.ecran);
    }

    pub fn fermer_alerte(&mut self) {
        self.alerte = None;
    }
}

fn texte_alerte(e: &ErreurSaisie) -> &'static str {
    match e {
        ErreurSaisie::ParentheseNonOuverte => {
            "Parenthèse fermante impossible sans parenthèse ouvrante."
        }
        ErreurSaisie::ChiffreInvalide(_) => "Touche invalide.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editeur::{Fonction, Operateur};

    fn app() -> AppCalc {
        AppCalc::new(Editeur::avec_reglages(
            MoteurNumerique,
            Reglages::default().avec_graine(2),
        ))
    }

    fn taper(a: &mut AppCalc, touches: &str) {
        for c in touches.chars() {
            if let Some(cmd) = Commande::depuis_caractere(c) {
                a.executer(cmd);
            }
        }
    }

    #[test]
    fn ecran_suit_l_editeur() {
        let mut a = app();
        taper(&mut a, "6*7");
        assert_eq!(a.ecran.affichage, "6*7");
        taper(&mut a, "=");
        assert_eq!(a.ecran.affichage, "42");
        assert_eq!(a.ecran.historique.front().map(String::as_str), Some("6*7 = 42"));
    }

    #[test]
    fn historique_plus_recent_en_tete_et_borne() {
        let mut a = app();
        for i in 0..25 {
            a.executer(Commande::Clear);
            taper(&mut a, &format!("{i}+1="));
        }
        assert_eq!(a.ecran.historique.len(), 20);
        assert_eq!(a.ecran.historique[0], "24+1 = 25");
        assert_eq!(a.ecran.historique[19], "5+1 = 6");
    }

    #[test]
    fn editeur_par_defaut_borne_comme_l_ecran() {
        let mut a = AppCalc::default();
        for i in 0..25 {
            a.executer(Commande::Clear);
            taper(&mut a, &format!("{i}="));
        }
        assert_eq!(a.editeur.etat().historique.len(), HISTORIQUE_VISIBLE);
        assert_eq!(a.ecran.historique.len(), HISTORIQUE_VISIBLE);
        assert_eq!(a.ecran.historique[0], "24 = 24");
    }

    #[test]
    fn parenthese_refusee_ouvre_une_alerte() {
        let mut a = app();
        taper(&mut a, "2)");
        assert!(a.alerte.is_some());
        assert_eq!(a.ecran.affichage, "2");
        a.fermer_alerte();
        assert!(a.alerte.is_none());
    }

    #[test]
    fn erreur_puis_reprise_par_tick() {
        let mut a = app();
        a.tick(3.0);
        taper(&mut a, "1/0=");
        assert_eq!(a.ecran.affichage, "Error");
        assert!(a.est_gele());
        assert!(a.alerte.is_none());

        a.tick(4.0);
        assert_eq!(a.ecran.affichage, "Error");
        a.tick(4.5);
        assert_eq!(a.ecran.affichage, "0");
        assert_eq!(a.reprise_dans(), None);
    }

    #[test]
    fn memoire_et_mode_sur_l_ecran() {
        let mut a = app();
        taper(&mut a, "2+2");
        a.executer(Commande::MemoireStocker);
        assert_eq!(a.ecran.memoire, "4");
        assert_eq!(a.ecran.affichage, "0");

        a.executer(Commande::BasculerAngle);
        assert_eq!(a.ecran.mode, ModeAngle::Radians);

        a.executer(Commande::Fonction(Fonction::Cos));
        a.executer(Commande::Chiffre('0'));
        a.executer(Commande::Operateur(Operateur::Plus));
        a.executer(Commande::Evaluer);
        assert_eq!(a.ecran.affichage, "1");

        a.executer(Commande::Reinitialiser);
        assert_eq!(a.ecran.memoire, "0");
        assert_eq!(a.ecran.mode, ModeAngle::Degres);
    }
}
