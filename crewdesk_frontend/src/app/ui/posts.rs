use eframe::egui::{self, RichText};

use crewdesk_core::element::Element;
use crewdesk_core::models::PostId;
use crewdesk_core::page::{MainNode, Visibility, PLACEHOLDER_TEXT};

use super::super::CrewdeskApp;

impl CrewdeskApp {
    pub(crate) fn render_posts(&mut self, ui: &mut egui::Ui) {
        if self.page.select_menu.disabled {
            ui.add(egui::Spinner::new());
        }

        let mut clicked: Option<PostId> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            if self.page.main.children.is_empty()
                && self.page.select_menu.selected.is_none()
                && !self.page.select_menu.disabled
            {
                ui.weak(PLACEHOLDER_TEXT);
            }

            for node in &self.page.main.children {
                match node {
                    MainNode::Paragraph(paragraph) => render_element(ui, paragraph),
                    MainNode::Article(article) => {
                        egui::Frame::group(ui.style())
                            .fill(ui.visuals().extreme_bg_color)
                            .inner_margin(egui::vec2(12.0, 8.0))
                            .show(ui, |ui| {
                                render_element(ui, &article.title);
                                render_element(ui, &article.body);
                                render_element(ui, &article.id_line);
                                render_element(ui, &article.author_line);
                                render_element(ui, &article.catch_phrase);
                                if ui.button(&article.button.label).clicked() {
                                    clicked = Some(article.button.post_id);
                                }
                                if article.section.visibility() == Visibility::Visible {
                                    ui.separator();
                                    for comment in &article.section.comments {
                                        render_element(ui, comment);
                                    }
                                }
                            });
                    }
                }
            }
        });

        if let Some(post_id) = clicked {
            self.on_toggle_clicked(post_id);
        }
    }
}

fn render_element(ui: &mut egui::Ui, element: &Element) {
    match element.tag.as_str() {
        "h2" => {
            ui.heading(&element.text);
        }
        "h3" => {
            ui.label(RichText::new(&element.text).strong());
        }
        "article" => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                for child in &element.children {
                    render_element(ui, child);
                }
            });
        }
        _ => {
            if element.has_class("default-text") {
                ui.weak(&element.text);
            } else {
                ui.label(&element.text);
            }
        }
    }
}
