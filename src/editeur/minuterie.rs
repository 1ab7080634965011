//! Minuterie à coup unique pour la reprise après erreur.
//!
//! Pas d’horloge ambiante : le temps (secondes, monotone) est fourni par l’appelant.
//! Chaque armement rend un `Ticket` unique ; un déclenchement ne vaut que pour
//! le ticket encore armé.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Minuterie {
    prochain: u64,
    armee: Option<(Ticket, f64)>,
}

impl Minuterie {
    /// Arme (ou ré-arme) pour `echeance`. Un armement précédent est oublié.
    pub fn armer(&mut self, echeance: f64) -> Ticket {
        self.prochain += 1;
        let t = Ticket(self.prochain);
        self.armee = Some((t, echeance));
        t
    }

    pub fn annuler(&mut self) -> Option<Ticket> {
        self.armee.take().map(|(t, _)| t)
    }

    /// Temps restant avant l’échéance (0 si dépassée).
    pub fn restant(&self, maintenant: f64) -> Option<f64> {
        self.armee.map(|(_, e)| (e - maintenant).max(0.0))
    }

    /// Désarme et rend le ticket si l’échéance est atteinte.
    pub fn declencher(&mut self, maintenant: f64) -> Option<Ticket> {
        match self.armee {
            Some((t, e)) if maintenant >= e => {
                self.armee = None;
                Some(t)
            }
            _ => None,
        }
    }
}
