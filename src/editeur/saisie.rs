// src/editeur/saisie.rs
//
// Règles d’ajout de jetons au texte affiché
// ----------------------------------------
// Le texte reste un préfixe plausible d’expression :
// - "0" initial remplacé par le premier chiffre / terme
// - opérateurs finaux fusionnés ("3+" puis "*" => "3*"), sauf '-' signé ("3+" puis "-" => "3+-")
// - une seule virgule par nombre
// - multiplication implicite avant un nouveau terme ("5" puis "(" => "5*(")
// - ')' refusée sans '(' en attente
//
// Chaque opération est ignorée pendant le gel d’erreur.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::noyau::{formater_nombre, Evaluateur};

use super::erreur::ErreurSaisie;
use super::etat::{DerniereAction, AFFICHAGE_VIDE};
use super::notification::Notification;
use super::touches::{est_operateur, Constante, Fonction, Operateur};
use super::Editeur;

/* ------------------------ Prédicats sur le texte ------------------------ */

pub fn se_termine_par_operateur(texte: &str) -> bool {
    texte.chars().next_back().is_some_and(est_operateur)
}

/// Multiplication implicite : le texte finit par un terme complet.
/// - un chiffre (sauf le "0" initial)
/// - ')'
/// - "pi" ou "e"
pub fn doit_multiplier(texte: &str) -> bool {
    let fin_chiffre = texte.chars().next_back().is_some_and(|c| c.is_ascii_digit());

    (fin_chiffre && texte != AFFICHAGE_VIDE)
        || texte.ends_with(')')
        || texte.ends_with("pi")
        || texte.ends_with('e')
}

/// Nombre en cours de saisie : suffixe après le dernier opérateur.
pub fn nombre_courant(texte: &str) -> &str {
    match texte.rfind(est_operateur) {
        Some(i) => &texte[i + 1..],
        None => texte,
    }
}

/// Retire UN opérateur final s’il y en a un.
pub fn sans_operateur_final(texte: &str) -> &str {
    match texte.chars().next_back() {
        Some(c) if est_operateur(c) => &texte[..texte.len() - c.len_utf8()],
        _ => texte,
    }
}

/* ------------------------ Opérations de saisie ------------------------ */

impl<E: Evaluateur> Editeur<E> {
    /// Chiffre 0-9.
    pub fn chiffre(&mut self, d: char) -> Result<(), ErreurSaisie> {
        if !d.is_ascii_digit() {
            warn!(caractere = %d, "chiffre refusé");
            return Err(ErreurSaisie::ChiffreInvalide(d));
        }
        if self.etat.gele {
            return Ok(());
        }

        let apres_eval = self.etat.derniere_action == DerniereAction::Evaluation;
        let texte = &mut self.etat.affichage;

        if texte.ends_with("pi") {
            texte.push('*');
        }

        if apres_eval && !se_termine_par_operateur(texte) {
            // nouveau calcul : le texte remplacé emporte ses '(' en attente
            *texte = d.to_string();
            self.etat.parentheses_ouvertes = 0;
        } else if texte.as_str() == AFFICHAGE_VIDE {
            *texte = d.to_string();
        } else {
            texte.push(d);
        }

        self.etat.derniere_action = DerniereAction::Chiffre;
        self.etat.dernier_resultat = None;
        self.apres_saisie("chiffre");
        Ok(())
    }

    /// Opérateur binaire (+ - * /).
    pub fn operateur(&mut self, op: Operateur) {
        if self.etat.gele {
            return;
        }

        // enchaînement : le résultat reste dans le texte et accepte l’opérateur
        if self.etat.derniere_action == DerniereAction::Evaluation {
            self.etat.dernier_resultat = None;
        }

        let symbole = op.symbole();
        let texte = &mut self.etat.affichage;
        let mut fin = texte.chars().rev();
        let dernier = fin.next();
        let avant_dernier = fin.next();

        match dernier {
            Some(d) if est_operateur(d) => {
                if symbole == '-' && d != '-' {
                    // nombre signé : "3*" => "3*-"
                    texte.push('-');
                } else if d == '-' && avant_dernier.is_some_and(est_operateur) {
                    // "<op>-" remplacé en entier
                    texte.pop();
                    texte.pop();
                    texte.push(symbole);
                } else {
                    texte.pop();
                    texte.push(symbole);
                }
            }
            _ => texte.push(symbole),
        }

        self.etat.derniere_action = DerniereAction::Operateur;
        self.apres_saisie("opérateur");
    }

    /// Virgule décimale ('.').
    pub fn virgule(&mut self) {
        if self.etat.gele {
            return;
        }

        let courant = nombre_courant(&self.etat.affichage);
        if courant.contains('.') {
            return;
        }

        if courant.is_empty() {
            self.etat.affichage.push_str("0.");
        } else {
            self.etat.affichage.push('.');
        }
        self.apres_saisie("virgule");
    }

    /// Fonction `nom(` (trig / log).
    pub fn fonction(&mut self, f: Fonction) {
        if self.etat.gele {
            return;
        }

        self.ouvrir_terme();
        self.etat.affichage.push_str(f.nom());
        self.etat.affichage.push('(');
        self.etat.parentheses_ouvertes += 1;
        self.apres_saisie("fonction");
    }

    pub fn ouvrir_parenthese(&mut self) {
        if self.etat.gele {
            return;
        }

        self.ouvrir_terme();
        self.etat.affichage.push('(');
        self.etat.parentheses_ouvertes += 1;
        self.apres_saisie("parenthèse ouvrante");
    }

    /// ')' : refusée (sans toucher à l’état) si aucune '(' n’est en attente.
    pub fn fermer_parenthese(&mut self) -> Result<(), ErreurSaisie> {
        if self.etat.gele {
            return Ok(());
        }

        if self.etat.parentheses_ouvertes == 0 {
            warn!(texte = %self.etat.affichage, "parenthèse fermante refusée");
            return Err(ErreurSaisie::ParentheseNonOuverte);
        }

        self.etat.affichage.push(')');
        self.etat.parentheses_ouvertes -= 1;
        self.apres_saisie("parenthèse fermante");
        Ok(())
    }

    /// Constante `pi` ou `e`.
    pub fn constante(&mut self, c: Constante) {
        if self.etat.gele {
            return;
        }

        self.ouvrir_terme();
        self.etat.affichage.push_str(c.texte());
        self.apres_saisie("constante");
    }

    /// Tirage uniforme dans [0, 1) ; traité comme un terme terminé.
    pub fn aleatoire(&mut self) {
        if self.etat.gele {
            return;
        }

        let x: f64 = self.rng.gen();
        self.ouvrir_terme();
        self.etat.affichage.push_str(&formater_nombre(x));
        self.etat.derniere_action = DerniereAction::Evaluation;
        self.apres_saisie("aléatoire");
    }

    /// Efface le dernier caractère (garde le compte des parenthèses cohérent).
    pub fn backspace(&mut self) {
        if self.etat.gele {
            return;
        }

        let texte = &mut self.etat.affichage;
        if texte.chars().count() <= 1 || texte.as_str() == AFFICHAGE_VIDE {
            *texte = AFFICHAGE_VIDE.to_string();
            self.etat.parentheses_ouvertes = 0;
        } else {
            match texte.pop() {
                Some('(') => {
                    self.etat.parentheses_ouvertes = self.etat.parentheses_ouvertes.saturating_sub(1)
                }
                Some(')') => self.etat.parentheses_ouvertes += 1,
                _ => {}
            }
        }
        self.apres_saisie("backspace");
    }

    /// C : efface l’expression (mémoire, mode et historique intacts).
    pub fn clear(&mut self) {
        if self.etat.gele {
            return;
        }

        self.etat.affichage = AFFICHAGE_VIDE.to_string();
        self.etat.dernier_resultat = None;
        self.etat.derniere_action = DerniereAction::Aucune;
        self.etat.parentheses_ouvertes = 0;
        self.apres_saisie("clear");
    }

    /// DEG <-> RAD (n’affecte que l’évaluation trig).
    pub fn basculer_angle(&mut self) {
        if self.etat.gele {
            return;
        }

        self.etat.mode_angle = self.etat.mode_angle.basculer();
        info!(mode = self.etat.mode_angle.libelle(), "mode d’angle");
        self.notifier(Notification::ModeAngle(self.etat.mode_angle));
    }

    /* ------------------------ Outils internes ------------------------ */

    /// Avant un nouveau terme : '*' implicite si besoin, puis "0" initial effacé.
    pub(super) fn ouvrir_terme(&mut self) {
        let etait_vide = self.etat.affichage == AFFICHAGE_VIDE;
        if doit_multiplier(&self.etat.affichage) {
            self.etat.affichage.push('*');
        }
        if etait_vide {
            self.etat.affichage.clear();
        }
    }

    fn apres_saisie(&mut self, quoi: &'static str) {
        debug!(quoi, texte = %self.etat.affichage, "saisie");
        self.notifier_affichage();
    }
}
