//! Registre mémoire : MS, MR, M+, M-, MC.
//!
//! La mémoire garde le TEXTE affiché (pas un f64) pour être recollée telle quelle
//! dans l’expression. "0" signifie mémoire vide.

use tracing::info;

use crate::noyau::Evaluateur;

use super::erreur::ErreurCalcul;
use super::etat::{DerniereAction, AFFICHAGE_VIDE, MEMOIRE_VIDE};
use super::notification::Notification;
use super::saisie::doit_multiplier;
use super::Editeur;

impl<E: Evaluateur> Editeur<E> {
    /// MS : évalue, range le texte du résultat, repart de "0".
    ///
    /// Rien n’est rangé si l’évaluation échoue (l’éditeur est alors gelé).
    pub fn memoire_stocker(&mut self) -> Result<(), ErreurCalcul> {
        self.evaluer()?;

        self.etat.memoire = self.etat.affichage.clone();
        info!(memoire = %self.etat.memoire, "mémoire rangée");
        self.notifier_memoire();

        self.etat.affichage = AFFICHAGE_VIDE.to_string();
        self.etat.dernier_resultat = None;
        self.etat.derniere_action = DerniereAction::Operateur;
        self.notifier_affichage();
        Ok(())
    }

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.etat.memoire = MEMOIRE_VIDE.to_string();
        info!("mémoire effacée");
        self.notifier_memoire();
    }

    /// MR : remplace "0" (ou une copie identique), sinon ajoute avec '*' implicite.
    pub fn memoire_rappeler(&mut self) {
        if self.etat.gele || self.etat.memoire_vide() {
            return;
        }

        if self.etat.affichage == AFFICHAGE_VIDE || self.etat.affichage == self.etat.memoire {
            self.etat.affichage = self.etat.memoire.clone();
        } else {
            if doit_multiplier(&self.etat.affichage) {
                self.etat.affichage.push('*');
            }
            let m = self.etat.memoire.clone();
            self.etat.affichage.push_str(&m);
        }
        self.notifier_affichage();
    }

    /// M+ : évalue, ajoute "+mémoire", réévalue. La mémoire elle-même ne change pas.
    pub fn memoire_ajouter(&mut self) -> Result<(), ErreurCalcul> {
        self.memoire_combiner('+')
    }

    /// M- : évalue, ajoute "-mémoire", réévalue.
    pub fn memoire_soustraire(&mut self) -> Result<(), ErreurCalcul> {
        self.memoire_combiner('-')
    }

    fn memoire_combiner(&mut self, signe: char) -> Result<(), ErreurCalcul> {
        if self.etat.memoire_vide() {
            return Ok(());
        }

        self.evaluer()?;

        self.etat.affichage.push(signe);
        let m = self.etat.memoire.clone();
        self.etat.affichage.push_str(&m);
        info!(signe = %signe, memoire = %m, "combinaison avec la mémoire");

        self.evaluer()?;
        Ok(())
    }

    fn notifier_memoire(&mut self) {
        let m = self.etat.memoire.clone();
        self.notifier(Notification::Memoire(m));
    }
}
