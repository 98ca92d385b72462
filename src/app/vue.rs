// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppNotation (etat.rs) pour natif + wasm
// - Clavier : Enter convertit (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - Entrée dense : aucun espace inséré par les boutons (un caractère = un jeton).

use eframe::egui;
use log::warn;

use notation_qpur::noyau::eval::{convertir, format_etapes};
use notation_qpur::noyau::jetons::PRECEDENCES;
use notation_qpur::noyau::{Mode, Operation};

use super::etat::{AppNotation, Demarche, LONGUEUR_MAX};

impl AppNotation {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Notation Q-pur");
                ui.add_space(6.0);

                self.ui_reglages(ui);

                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Notation :");
            for op in Operation::TOUTES {
                if ui
                    .selectable_label(self.operation == op, op.libelle())
                    .clicked()
                {
                    self.set_operation(op);
                }
            }

            ui.separator();

            ui.label("Mode :");
            for mode in Mode::TOUS {
                let tip = match mode {
                    Mode::Strict => "Parenthèses déséquilibrées ou caractère inconnu => erreur",
                    Mode::Tolerant => "Comportement de référence : jamais d’erreur",
                };
                if ui
                    .selectable_label(self.mode == mode, mode.nom())
                    .on_hover_text(tip)
                    .clicked()
                {
                    self.set_mode(mode);
                }
            }
        });

        let rangs = PRECEDENCES
            .iter()
            .map(|(op, rang)| format!("{} : {rang}", op.symbole()))
            .collect::<Vec<_>>()
            .join("   ");
        ui.small(format!("Rangs : {rangs}   (égalité => gauche à droite, ^ compris)"));
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée (infixe) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: a+b*c, (a+b)*c, a^b^c")
                .char_limit(LONGUEUR_MAX)
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter convertit (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.convertir_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for c in ['(', ')', '+', '-', '*', '/', '^'] {
                self.bouton_insert(ui, c);
            }

            ui.separator();

            for c in ['a', 'b', 'c', 'd', 'x', 'y', 'z'] {
                self.bouton_insert(ui, c);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.convertir_via_noyau();
                self.focus_entree = true;
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("{} :", self.operation.libelle()));
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                if !self.demarche.miroir.is_empty() {
                    Self::champ_demarche(ui, "Miroir", "demarche_miroir", &self.demarche.miroir);
                }
                let lignes = self.demarche.etapes.lines().count().max(2);
                ui.add_space(4.0);
                ui.label("Pile / sortie :");
                Self::champ_monospace(ui, "demarche_etapes", &self.demarche.etapes, lignes);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized([40.0, 28.0], egui::Button::new(c.to_string()));
        if resp.clicked() && self.entree.chars().count() < LONGUEUR_MAX {
            self.entree.push(c);
            self.focus_entree = true;
        }
    }

    /// Entrée -> noyau -> résultat + démarche (ou erreur).
    pub(crate) fn convertir_via_noyau(&mut self) {
        if self.entree.chars().count() > LONGUEUR_MAX {
            self.set_erreur(format!("entrée trop longue (max {LONGUEUR_MAX} caractères)"));
            return;
        }

        match convertir(&self.entree, self.operation, self.mode) {
            Ok((resultat, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    miroir: d_noyau.miroir,
                    etapes: format_etapes(&d_noyau.etapes),
                    note: d_noyau.note,
                };
                self.set_resultats(resultat, d_ui);
            }
            Err(e) => {
                warn!("{} refusée ({}): {e}", self.operation, self.mode);
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
