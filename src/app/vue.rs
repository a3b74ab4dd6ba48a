// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - "√" : racine du résultat de l’entrée (ou de l’entrée si c’est un nombre seul)

use calculatrice_binaire::noyau::{
    decoupe, evaluate, lire_operande, square_root, ErreurCalcul, Operande, Resultat,
};
use eframe::egui;
use tracing::info;

use super::etat::{AppCalc, Demarche, CHIFFRES_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice binaire");
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

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 4 * 1.5, -5 + 3, 4.4 / 2.2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
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

            ui.separator();

            ui.label("Affichage :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for op in ["+", "-", "*", "/"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.separator();

            let racine = ui
                .add_sized([46.0, 28.0], egui::Button::new("√"))
                .on_hover_text("Racine carrée du résultat de l’entrée");
            if racine.clicked() {
                self.racine_via_noyau();
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_binaire")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rang in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in rang {
                        self.bouton_insert(ui, chiffre, InsertKind::Digit);
                    }
                    ui.label("");
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.label("");
                ui.end_row();
            });
    }

    /// Retire un caractère (et les espaces qui le précèdent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.valeur.is_some() {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        } else {
            ui.monospace("—");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Gauche", "demarche_gauche", &self.demarche.gauche);
                Self::champ_demarche(
                    ui,
                    "Opérateur",
                    "demarche_operateur",
                    &self.demarche.operateur,
                );
                Self::champ_demarche(ui, "Droite", "demarche_droite", &self.demarche.droite);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
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
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(texte);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat + démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let entree = self.entree.clone();
        let demarche = demarche_de(&entree);

        match evaluate(&entree) {
            Ok(v) => {
                info!(entree = %entree, resultat = v, "évaluation");
                self.set_resultat(v, demarche);
            }
            Err(e) => {
                info!(entree = %entree, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }

    /// √ de l’entrée : "a op b" est d’abord évalué ; un nombre seul est lu tel quel.
    fn racine_via_noyau(&mut self) {
        let entree = self.entree.clone();

        match racine_de(&entree) {
            Ok(v) => {
                info!(entree = %entree, resultat = v, "racine carrée");
                let mut demarche = demarche_de(&entree);
                demarche.note = format!("√({})", entree.trim());
                self.set_resultat(v, demarche);
            }
            Err(e) => {
                info!(entree = %entree, erreur = %e, "racine refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

fn racine_de(entree: &str) -> Resultat<f64> {
    let x = match evaluate(entree) {
        Err(ErreurCalcul::NoOperatorFound) => lire_operande(entree.trim(), Operande::Premier)?,
        autre => autre?,
    };
    square_root(x)
}

/// Démarche : comment l’entrée a été découpée (vide si aucun opérateur).
fn demarche_de(entree: &str) -> Demarche {
    match decoupe(entree) {
        Ok(d) => Demarche {
            gauche: d.gauche.to_string(),
            operateur: d.operateur.to_string(),
            droite: d.droite.to_string(),
            note: format!("Coupe à la position {} (signe de tête exclu).", d.index),
        },
        Err(_) => Demarche::default(),
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
}
