//! Notifications sortantes vers la présentation.
//!
//! L’éditeur ne connaît pas l’UI : il empile des `Notification`, que l’appelant
//! transmet à un `Presentateur` (ou inspecte directement en test).

use super::etat::ModeAngle;

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Affichage(String),
    HistoriqueAjoute { expression: String, resultat: f64 },
    Memoire(String),
    ModeAngle(ModeAngle),
}

/// Côté présentation : reçoit les mises à jour, ne répond rien.
pub trait Presentateur {
    fn affichage_change(&mut self, texte: &str);
    fn historique_ajoute(&mut self, expression: &str, resultat: f64);
    fn memoire_changee(&mut self, texte: &str);
    fn mode_angle_change(&mut self, mode: ModeAngle);
}

impl Notification {
    pub fn transmettre<P: Presentateur + ?Sized>(&self, p: &mut P) {
        match self {
            Notification::Affichage(t) => p.affichage_change(t),
            Notification::HistoriqueAjoute {
                expression,
                resultat,
            } => p.historique_ajoute(expression, *resultat),
            Notification::Memoire(t) => p.memoire_changee(t),
            Notification::ModeAngle(m) => p.mode_angle_change(*m),
        }
    }
}
