// src/app.rs
//
// Calculatrice scientifique: module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - L’horloge de l’éditeur avance au temps de frame egui (même chemin natif/web).
// - Le clavier est traduit en `Commande` ici ; les boutons le font dans vue.rs.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use crate::editeur::Commande;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);
        self.tick(maintenant);

        // Pas de clavier pendant l’avis modal : OK / Entrée le ferment.
        if self.alerte.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.fermer_alerte();
            }
        } else {
            for commande in commandes_clavier(ctx) {
                self.executer(commande);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // "Error" doit disparaître même sans événement utilisateur.
        if let Some(reste) = self.reprise_dans() {
            ctx.request_repaint_after(Duration::from_secs_f64(reste));
        }
    }
}

/// Touches de la frame -> commandes (texte tapé + touches spéciales).
fn commandes_clavier(ctx: &egui::Context) -> Vec<Commande> {
    ctx.input(|i| {
        let mut sortie = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    sortie.extend(t.chars().filter_map(Commande::depuis_caractere));
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => match key {
                    egui::Key::Enter => sortie.push(Commande::Evaluer),
                    egui::Key::Backspace => sortie.push(Commande::Backspace),
                    egui::Key::Escape => sortie.push(Commande::Clear),
                    egui::Key::Delete => sortie.push(Commande::Reinitialiser),
                    _ => {}
                },
                _ => {}
            }
        }
        sortie
    })
}
