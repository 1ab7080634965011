//! Éditeur d’expression (machine à états du texte affiché)
//!
//! Organisation interne :
//! - etat.rs         : `EtatEditeur` + constantes ("0", "Error")
//! - touches.rs      : opérateurs / fonctions / constantes / fonctions unaires (enums fermés)
//! - saisie.rs       : règles d’ajout de jetons (chiffre, opérateur, virgule, parenthèses…)
//! - annotation.rs   : suffixe d’unité d’angle dans les appels trig
//! - calcul.rs       : évaluation, fonctions unaires, factorielle, gel d’erreur
//! - memoire.rs      : registre mémoire (MS / MR / M+ / M- / MC)
//! - minuterie.rs    : reprise différée après erreur
//! - notification.rs : sorties vers la présentation
//! - commande.rs     : surface d’entrée typée (une commande par touche)
//!
//! Toute mutation passe par `Editeur` ; l’UI ne touche jamais `EtatEditeur` directement.

pub mod annotation;
pub mod calcul;
pub mod commande;
pub mod erreur;
pub mod etat;
pub mod memoire;
pub mod minuterie;
pub mod notification;
pub mod reglages;
pub mod saisie;
pub mod touches;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::noyau::{Evaluateur, MoteurNumerique};

pub use commande::Commande;
pub use erreur::{DomaineInvalide, ErreurCalcul, ErreurCommande, ErreurSaisie};
pub use etat::{DerniereAction, EntreeHistorique, EtatEditeur, ModeAngle};
pub use notification::{Notification, Presentateur};
pub use reglages::Reglages;
pub use touches::{Constante, Fonction, FonctionUnaire, Operateur};

use minuterie::{Minuterie, Ticket};

pub struct Editeur<E: Evaluateur = MoteurNumerique> {
    etat: EtatEditeur,
    reglages: Reglages,
    evaluateur: E,
    rng: StdRng,

    // --- temps (fourni par l’appelant via tick) ---
    horloge: f64,
    minuterie: Minuterie,
    ticket_gel: Option<Ticket>,

    // --- sorties en attente ---
    sortie: Vec<Notification>,
}

impl<E: Evaluateur> Editeur<E> {
    #[cfg(test)]
    pub fn new(evaluateur: E) -> Self {
        Self::avec_reglages(evaluateur, Reglages::default())
    }

    pub fn avec_reglages(evaluateur: E, reglages: Reglages) -> Self {
        let rng = match reglages.graine {
            Some(g) => StdRng::seed_from_u64(g),
            None => StdRng::from_entropy(),
        };

        Self {
            etat: EtatEditeur::new(&reglages),
            reglages,
            evaluateur,
            rng,
            horloge: 0.0,
            minuterie: Minuterie::default(),
            ticket_gel: None,
            sortie: Vec::new(),
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn etat(&self) -> &EtatEditeur {
        &self.etat
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    pub fn est_gele(&self) -> bool {
        self.etat.gele
    }

    #[cfg(test)]
    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /* ------------------------ Notifications ------------------------ */

    /// Vide la file de notifications.
    #[cfg(test)]
    pub fn prendre_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.sortie)
    }

    /// Transmet (et vide) les notifications en attente.
    pub fn publier<P: Presentateur + ?Sized>(&mut self, presentateur: &mut P) {
        for n in self.sortie.drain(..) {
            n.transmettre(presentateur);
        }
    }

    fn notifier(&mut self, n: Notification) {
        self.sortie.push(n);
    }

    fn notifier_affichage(&mut self) {
        let t = self.etat.affichage.clone();
        self.notifier(Notification::Affichage(t));
    }

    /* ------------------------ Temps ------------------------ */

    /// Avance l’horloge (secondes, monotone) et déclenche la reprise si elle est due.
    pub fn tick(&mut self, maintenant: f64) {
        self.horloge = self.horloge.max(maintenant);

        if let Some(ticket) = self.minuterie.declencher(self.horloge) {
            self.reprendre(ticket);
        }
    }

    /// Secondes avant la reprise automatique (None si aucune reprise en attente).
    pub fn reprise_dans(&self) -> Option<f64> {
        self.minuterie.restant(self.horloge)
    }

    /// Fin du gel : ne vaut que pour le ticket armé par CE gel.
    fn reprendre(&mut self, ticket: Ticket) {
        if self.ticket_gel != Some(ticket) {
            debug!(?ticket, "reprise périmée ignorée");
            return;
        }

        self.ticket_gel = None;
        self.etat.gele = false;
        self.etat.affichage = etat::AFFICHAGE_VIDE.to_string();
        debug!("reprise après erreur");
        self.notifier_affichage();
    }

    /* ------------------------ AC ------------------------ */

    /// Remise à zéro totale (AC) : état par défaut, mémoire vidée, reprise en attente annulée.
    /// L’historique de la session est conservé.
    pub fn reinitialiser(&mut self) {
        let historique = std::mem::take(&mut self.etat.historique);
        self.etat = EtatEditeur::new(&self.reglages);
        self.etat.historique = historique;

        if let Some(t) = self.minuterie.annuler() {
            debug!(ticket = ?t, "reprise annulée");
        }
        self.ticket_gel = None;

        info!("éditeur réinitialisé");
        self.notifier_affichage();
        self.notifier(Notification::Memoire(self.etat.memoire.clone()));
        self.notifier(Notification::ModeAngle(self.etat.mode_angle));
    }
}
