//! src/editeur/calcul.rs
//!
//! Évaluation (touche "="), fonctions unaires et factorielle.
//!
//! Pipeline commun :
//!   texte -> retire 1 opérateur final -> ferme les '(' en attente -> annote les angles
//!         -> évaluateur -> contrôle fini -> (fonction unaire / factorielle)
//!
//! Tout échec (évaluation, non fini, domaine) passe par `geler()` :
//! "Error" affiché, saisie bloquée, reprise automatique après le délai réglé.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::{debug, warn};

use crate::noyau::{formater_nombre, Evaluateur};

use super::annotation::annoter_angles;
use super::erreur::{DomaineInvalide, ErreurCalcul};
use super::etat::{DerniereAction, EntreeHistorique, TEXTE_ERREUR};
use super::notification::Notification;
use super::saisie::sans_operateur_final;
use super::touches::FonctionUnaire;
use super::Editeur;

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: u32 = 170;

impl FonctionUnaire {
    /// Applique la fonction avec ses contrôles de domaine.
    pub fn appliquer(self, x: f64) -> Result<f64, DomaineInvalide> {
        match self {
            FonctionUnaire::Carre => Ok(x * x),
            FonctionUnaire::Inverse => {
                if x == 0.0 {
                    return Err(DomaineInvalide::InverseDeZero);
                }
                Ok(1.0 / x)
            }
            FonctionUnaire::Racine => {
                if x < 0.0 {
                    return Err(DomaineInvalide::RacineNegative);
                }
                Ok(x.sqrt())
            }
            FonctionUnaire::DixPuissance => Ok(10f64.powf(x)),
            FonctionUnaire::Plancher => Ok(x.floor()),
            FonctionUnaire::Plafond => Ok(x.ceil()),
            FonctionUnaire::ValeurAbsolue => Ok(x.abs()),
        }
    }
}

/// n! exact (big int) puis converti en f64 ; n entier positif ou nul.
pub fn factorielle(n: f64) -> Result<f64, DomaineInvalide> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(DomaineInvalide::FactorielleInvalide(n));
    }
    if n > FACTORIELLE_MAX as f64 {
        return Err(DomaineInvalide::FactorielleTropGrande(n));
    }

    let n = n as u32;
    let produit = (2..=n).fold(BigUint::one(), |acc, k| acc * k);
    produit
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(DomaineInvalide::FactorielleTropGrande(n as f64))
}

fn verifier_fini(x: f64) -> Result<f64, ErreurCalcul> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}

impl<E: Evaluateur> Editeur<E> {
    /// "=" : évalue le texte, dépose le résultat, l’ajoute à l’historique.
    ///
    /// L’historique garde l’expression telle que tapée (avant fermeture automatique
    /// des parenthèses et annotation des angles).
    pub fn evaluer(&mut self) -> Result<f64, ErreurCalcul> {
        if self.etat.gele {
            return Err(ErreurCalcul::Gele);
        }

        let expression = sans_operateur_final(&self.etat.affichage).to_string();
        let issue = self.calculer(&expression);

        match issue {
            Ok(v) => {
                self.deposer_resultat(v);
                self.ajouter_historique(expression, v);
                Ok(v)
            }
            Err(e) => {
                self.geler(&e);
                Err(e)
            }
        }
    }

    /// x², 1/x, √x, 10ˣ, floor, ceil, |x| appliqués au résultat courant (sans historique).
    pub fn appliquer_unaire(&mut self, f: FonctionUnaire) -> Result<f64, ErreurCalcul> {
        if self.etat.gele {
            return Err(ErreurCalcul::Gele);
        }

        let expression = sans_operateur_final(&self.etat.affichage).to_string();
        let issue = self
            .calculer(&expression)
            .and_then(|x| f.appliquer(x).map_err(ErreurCalcul::from))
            .and_then(verifier_fini);

        self.conclure(issue)
    }

    /// n! du résultat courant (sans historique).
    pub fn factorielle(&mut self) -> Result<f64, ErreurCalcul> {
        if self.etat.gele {
            return Err(ErreurCalcul::Gele);
        }

        let expression = sans_operateur_final(&self.etat.affichage).to_string();
        let issue = self
            .calculer(&expression)
            .and_then(|x| factorielle(x).map_err(ErreurCalcul::from))
            .and_then(verifier_fini);

        self.conclure(issue)
    }

    /* ------------------------ Outils internes ------------------------ */

    /// Ferme les parenthèses en attente, annote les angles, évalue, contrôle la finitude.
    fn calculer(&mut self, expression: &str) -> Result<f64, ErreurCalcul> {
        let mut texte = expression.to_string();
        if self.etat.parentheses_ouvertes > 0 {
            texte.push_str(&")".repeat(self.etat.parentheses_ouvertes));
            self.etat.parentheses_ouvertes = 0;
        }

        let annote = annoter_angles(&texte, self.etat.mode_angle.unite());
        debug!(expression, envoye = %annote, "évaluation");

        let x = self.evaluateur.evaluer(&annote)?;
        verifier_fini(x)
    }

    fn conclure(&mut self, issue: Result<f64, ErreurCalcul>) -> Result<f64, ErreurCalcul> {
        match issue {
            Ok(v) => {
                self.deposer_resultat(v);
                Ok(v)
            }
            Err(e) => {
                self.geler(&e);
                Err(e)
            }
        }
    }

    fn deposer_resultat(&mut self, v: f64) {
        self.etat.affichage = formater_nombre(v);
        self.etat.dernier_resultat = Some(v);
        self.etat.derniere_action = DerniereAction::Evaluation;
        self.notifier_affichage();
    }

    fn ajouter_historique(&mut self, expression: String, resultat: f64) {
        while self.etat.historique.len() >= self.reglages.historique_max.max(1) {
            self.etat.historique.pop_front();
        }
        self.etat.historique.push_back(EntreeHistorique {
            expression: expression.clone(),
            resultat,
        });
        self.notifier(Notification::HistoriqueAjoute {
            expression,
            resultat,
        });
    }

    /// Entre dans l’état d’erreur gelé et arme la reprise.
    fn geler(&mut self, erreur: &ErreurCalcul) {
        warn!(%erreur, texte = %self.etat.affichage, "échec du calcul, affichage gelé");

        self.etat.gele = true;
        self.etat.affichage = TEXTE_ERREUR.to_string();

        let echeance = self.horloge + self.reglages.delai_erreur.as_secs_f64();
        self.ticket_gel = Some(self.minuterie.armer(echeance));

        self.notifier_affichage();
    }
}
