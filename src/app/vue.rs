// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Un bouton = une `Commande` (aucune règle de saisie ici)
// - Écran en lecture seule : le texte vient des notifications de l’éditeur
// - Tactile : gros boutons, grille fixe

use eframe::egui;

use crate::editeur::{Commande, Constante, Fonction, FonctionUnaire, Operateur};

use super::etat::AppCalc;

/// Taille des touches de la grille.
const TOUCHE: [f32; 2] = [58.0, 34.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_memoire(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_scientifique(ui);
                ui.add_space(8.0);
                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });

        self.ui_alerte(ui.ctx());
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.ecran.mode.libelle())
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            if self.ecran.memoire != "0" {
                ui.label(egui::RichText::new("M").small());
            }
        });

        let couleur = if self.est_gele() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.ecran.affichage)
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "MC", Commande::MemoireEffacer);
            self.bouton(ui, "MR", Commande::MemoireRappeler);
            self.bouton(ui, "M+", Commande::MemoireAjouter);
            self.bouton(ui, "M-", Commande::MemoireSoustraire);
            self.bouton(ui, "MS", Commande::MemoireStocker);

            ui.separator();
            ui.label("Mémoire :");
            ui.monospace(&self.ecran.memoire);
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let mode = self.ecran.mode.libelle();
                self.bouton(ui, mode, Commande::BasculerAngle);
                for f in &Fonction::TOUTES[..4] {
                    self.bouton(ui, f.nom(), Commande::Fonction(*f));
                }
                ui.end_row();

                for f in &Fonction::TOUTES[4..9] {
                    self.bouton(ui, f.nom(), Commande::Fonction(*f));
                }
                ui.end_row();

                for f in &Fonction::TOUTES[11..] {
                    self.bouton(ui, f.nom(), Commande::Fonction(*f));
                }
                ui.end_row();

                self.bouton(ui, "log", Commande::Fonction(Fonction::Log));
                self.bouton(ui, "ln", Commande::Fonction(Fonction::Ln));
                self.bouton(ui, "π", Commande::Constante(Constante::Pi));
                self.bouton(ui, "e", Commande::Constante(Constante::E));
                self.bouton(ui, "rand", Commande::Aleatoire);
                ui.end_row();

                for f in &FonctionUnaire::TOUTES[..5] {
                    self.bouton(ui, f.libelle(), Commande::Unaire(*f));
                }
                ui.end_row();

                for f in &FonctionUnaire::TOUTES[5..] {
                    self.bouton(ui, f.libelle(), Commande::Unaire(*f));
                }
                self.bouton(ui, "n!", Commande::Factorielle);
                self.bouton(ui, "(", Commande::OuvrirParenthese);
                self.bouton(ui, ")", Commande::FermerParenthese);
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Commande::Reinitialiser);
                self.bouton(ui, "C", Commande::Clear);
                self.bouton(ui, "DEL", Commande::Backspace);
                self.bouton(ui, "/", Commande::Operateur(Operateur::Divise));
                ui.end_row();

                self.chiffres(ui, ['7', '8', '9']);
                self.bouton(ui, "*", Commande::Operateur(Operateur::Fois));
                ui.end_row();

                self.chiffres(ui, ['4', '5', '6']);
                self.bouton(ui, "-", Commande::Operateur(Operateur::Moins));
                ui.end_row();

                self.chiffres(ui, ['1', '2', '3']);
                self.bouton(ui, "+", Commande::Operateur(Operateur::Plus));
                ui.end_row();

                self.chiffres(ui, ['0']);
                self.bouton(ui, ".", Commande::Virgule);
                ui.label("");
                self.bouton(ui, "=", Commande::Evaluer);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.ecran.historique.is_empty() {
                    ui.weak("(vide)");
                }
                for ligne in &self.ecran.historique {
                    ui.monospace(ligne);
                }
            });
    }

    fn ui_alerte(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alerte.clone() else {
            return;
        };

        let mut fermer = false;
        egui::Window::new("Saisie refusée")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    fermer = true;
                }
            });

        if fermer {
            self.fermer_alerte();
        }
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, touches: [char; N]) {
        for d in touches {
            let mut tampon = [0u8; 4];
            let libelle: &str = d.encode_utf8(&mut tampon);
            self.bouton(ui, libelle, Commande::Chiffre(d));
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, commande: Commande) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(libelle));
        if resp.clicked() {
            self.executer(commande);
        }
    }
}
