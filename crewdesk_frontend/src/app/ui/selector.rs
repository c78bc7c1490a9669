use eframe::egui::{self, Color32};

use crewdesk_core::models::UserId;
use crewdesk_core::page::SelectMenu;

use super::super::CrewdeskApp;

impl CrewdeskApp {
    pub(crate) fn render_selector(&mut self, ui: &mut egui::Ui) {
        if self.users_loading && self.page.select_menu.options.is_empty() {
            ui.add(egui::Spinner::new());
        }
        if let Some(err) = &self.users_error {
            ui.colored_label(Color32::LIGHT_RED, err);
            if ui.button("Retry").clicked() {
                self.spawn_init_page();
            }
            ui.separator();
        }

        let mut picked: Option<UserId> = None;
        ui.add_enabled_ui(!self.page.select_menu.disabled, |ui| {
            egui::ComboBox::from_label("Employee")
                .selected_text(selected_label(&self.page.select_menu))
                .show_ui(ui, |ui| {
                    for option in &self.page.select_menu.options {
                        let current = self.page.select_menu.selected == Some(option.value);
                        if ui.selectable_label(current, &option.label).clicked() {
                            picked = Some(option.value);
                        }
                    }
                });
        });

        if let Some(user_id) = picked {
            self.on_employee_selected(user_id);
        }
    }
}

fn selected_label(menu: &SelectMenu) -> String {
    menu.selected
        .and_then(|selected| menu.options.iter().find(|option| option.value == selected))
        .map(|option| option.label.clone())
        .unwrap_or_else(|| "Employees".to_string())
}
