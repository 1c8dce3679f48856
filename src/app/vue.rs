// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Afficher la saisie en cours (lecture seule : c’est le moteur qui édite)
// - Pavé de touches : chiffres, opérateurs, parenthèses, . ± DEL CE C =
// - Clavier physique : caractères tapés -> moteur, Enter évalue,
//   Backspace efface (Escape est géré dans app.rs)
// - Panneau historique repliable (6 derniers résultats, plus récent en tête)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.clavier_physique(ui);

        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    /* ------------------------ Clavier physique ------------------------ */

    fn clavier_physique(&mut self, ui: &egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        // ',' accepté comme point décimal (pavés numériques FR)
                        if c == '.' || c == ',' {
                            self.point();
                        } else {
                            self.touche(&c.to_string());
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.egal(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.retour(),
                _ => {}
            }
        }
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let saisie = self.moteur.calcul_courant();
        let affiche = if saisie.is_empty() { "0" } else { saisie.as_str() };
        Self::champ_monospace(ui, "saisie_courante", affiche);

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        } else if !self.resultat.is_empty() {
            ui.label(format!("= {}", self.resultat));
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Lecture seule « stable » : cadre + label monospace, pas de TextEdit.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Pavé de touches ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Vide la saisie (l’historique survit)", Touche::EffaceTout);
                self.bouton(ui, "CE", "Retire le dernier jeton", Touche::EffaceSaisie);
                self.bouton(ui, "DEL", "Retour arrière", Touche::Retour);
                self.bouton(ui, "/", "", Touche::Car('/'));
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Car('7'));
                self.bouton(ui, "8", "", Touche::Car('8'));
                self.bouton(ui, "9", "", Touche::Car('9'));
                self.bouton(ui, "*", "", Touche::Car('*'));
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Car('4'));
                self.bouton(ui, "5", "", Touche::Car('5'));
                self.bouton(ui, "6", "", Touche::Car('6'));
                self.bouton(ui, "-", "", Touche::Car('-'));
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Car('1'));
                self.bouton(ui, "2", "", Touche::Car('2'));
                self.bouton(ui, "3", "", Touche::Car('3'));
                self.bouton(ui, "+", "", Touche::Car('+'));
                ui.end_row();

                self.bouton(ui, "±", "Oppose le dernier nombre", Touche::Signe);
                self.bouton(ui, "0", "", Touche::Car('0'));
                self.bouton(ui, ".", "Point décimal", Touche::Point);
                self.bouton(ui, "=", "Évalue", Touche::Egal);
                ui.end_row();

                self.bouton(ui, "(", "", Touche::Car('('));
                self.bouton(ui, ")", "", Touche::Car(')'));
                self.bouton(ui, "^", "Puissance", Touche::Car('^'));
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([52.0, 32.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            match touche {
                Touche::Car(c) => self.touche(&c.to_string()),
                Touche::Point => self.point(),
                Touche::Signe => self.signe(),
                Touche::Retour => self.retour(),
                Touche::EffaceSaisie => self.efface_saisie(),
                Touche::EffaceTout => self.efface_tout(),
                Touche::Egal => self.egal(),
            }
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                let historique = self.moteur.historique();
                if historique.is_empty() {
                    ui.monospace("(vide)");
                } else {
                    for ligne in historique.lines() {
                        ui.monospace(ligne);
                    }
                }
            });

        let postfixe = self.moteur.derniere_postfixe();
        if !postfixe.is_empty() {
            egui::CollapsingHeader::new("Détail")
                .default_open(false)
                .show(ui, |ui| {
                    ui.monospace(format!("postfixe : {postfixe}"));
                });
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Car(char),
    Point,
    Signe,
    Retour,
    EffaceSaisie,
    EffaceTout,
    Egal,
}
