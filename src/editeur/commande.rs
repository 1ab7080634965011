//! Surface d’entrée typée : une `Commande` par touche (bouton ou clavier).
//!
//! L’UI ne fabrique que des `Commande` ; `Editeur::executer` choisit l’opération.

use tracing::debug;

use crate::noyau::Evaluateur;

use super::erreur::ErreurCommande;
use super::touches::{Constante, Fonction, FonctionUnaire, Operateur};
use super::Editeur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Operateur(Operateur),
    Virgule,
    Fonction(Fonction),
    OuvrirParenthese,
    FermerParenthese,
    Constante(Constante),
    Aleatoire,
    Backspace,
    Clear,
    Reinitialiser,
    Evaluer,
    Unaire(FonctionUnaire),
    Factorielle,
    BasculerAngle,
    MemoireStocker,
    MemoireEffacer,
    MemoireRappeler,
    MemoireAjouter,
    MemoireSoustraire,
}

impl Commande {
    /// Touche clavier (caractère tapé) -> commande, si elle existe.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Commande::Chiffre(c)),
            '.' | ',' => Some(Commande::Virgule),
            '(' => Some(Commande::OuvrirParenthese),
            ')' => Some(Commande::FermerParenthese),
            '=' => Some(Commande::Evaluer),
            '!' => Some(Commande::Factorielle),
            _ => Operateur::depuis_symbole(c).map(Commande::Operateur),
        }
    }
}

impl<E: Evaluateur> Editeur<E> {
    /// Exécute une commande.
    ///
    /// Les échecs de calcul sont rendus APRÈS le passage en gel ; `ErreurCalcul::Gele`
    /// signale seulement une commande ignorée.
    pub fn executer(&mut self, commande: Commande) -> Result<(), ErreurCommande> {
        debug!(?commande, "commande");

        match commande {
            Commande::Chiffre(d) => self.chiffre(d)?,
            Commande::Operateur(op) => self.operateur(op),
            Commande::Virgule => self.virgule(),
            Commande::Fonction(f) => self.fonction(f),
            Commande::OuvrirParenthese => self.ouvrir_parenthese(),
            Commande::FermerParenthese => self.fermer_parenthese()?,
            Commande::Constante(c) => self.constante(c),
            Commande::Aleatoire => self.aleatoire(),
            Commande::Backspace => self.backspace(),
            Commande::Clear => self.clear(),
            Commande::Reinitialiser => self.reinitialiser(),
            Commande::Evaluer => {
                self.evaluer()?;
            }
            Commande::Unaire(f) => {
                self.appliquer_unaire(f)?;
            }
            Commande::Factorielle => {
                self.factorielle()?;
            }
            Commande::BasculerAngle => self.basculer_angle(),
            Commande::MemoireStocker => self.memoire_stocker()?,
            Commande::MemoireEffacer => self.memoire_effacer(),
            Commande::MemoireRappeler => self.memoire_rappeler(),
            Commande::MemoireAjouter => self.memoire_ajouter()?,
            Commande::MemoireSoustraire => self.memoire_soustraire()?,
        }
        Ok(())
    }
}
