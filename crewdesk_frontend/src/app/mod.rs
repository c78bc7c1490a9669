use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Context};
use log::error;
use tokio::runtime::Runtime;

use crewdesk_core::api::{ApiClient, DEFAULT_BASE_URL};
use crewdesk_core::models::{PostId, UserId};
use crewdesk_core::page::Page;

mod messages;
mod tasks;
mod ui;

use messages::AppMessage;

pub struct CrewdeskApp {
    api: ApiClient,
    runtime: Runtime,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    ctx: egui::Context,
    page: Page,
    users_loading: bool,
    users_error: Option<String>,
    base_url_input: String,
    info_banner: Option<String>,
}

impl CrewdeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let default_url =
            std::env::var("CREWDESK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api = ApiClient::new(default_url.clone()).unwrap_or_else(|err| {
            error!("failed to initialise API client: {err}");
            ApiClient::new(DEFAULT_BASE_URL).expect("fallback API client")
        });
        let runtime = Runtime::new().expect("failed to start tokio runtime");
        let (tx, rx) = mpsc::channel();

        let mut app = Self {
            api,
            runtime,
            tx,
            rx,
            ctx: cc.egui_ctx.clone(),
            page: Page::new(),
            users_loading: false,
            users_error: None,
            base_url_input: default_url,
            info_banner: None,
        };
        app.spawn_init_page();
        app
    }

    fn spawn_init_page(&mut self) {
        if self.users_loading {
            return;
        }
        self.users_loading = true;
        self.users_error = None;
        tasks::load_users(
            &self.runtime,
            self.api.clone(),
            self.tx.clone(),
            self.ctx.clone(),
        );
    }

    fn on_employee_selected(&mut self, user_id: UserId) {
        self.page.select_menu.selected = Some(user_id);
        self.spawn_refresh(user_id);
    }

    /// Starts one refresh cycle. The selector stays disabled until the
    /// cycle's articles (or the prompt) are attached and rewired.
    fn spawn_refresh(&mut self, user_id: UserId) {
        if self.page.select_menu.disabled {
            return;
        }
        self.page.select_menu.disabled = true;
        tasks::load_posts(
            &self.runtime,
            self.api.clone(),
            self.tx.clone(),
            self.ctx.clone(),
            user_id,
        );
    }

    fn on_toggle_clicked(&mut self, post_id: PostId) {
        let _ = self.page.click(post_id);
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }
}

impl eframe::App for CrewdeskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        egui::TopBottomPanel::top("top_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("API Base URL");
                ui.text_edit_singleline(&mut self.base_url_input);
                if ui.button("Apply").clicked() {
                    match self.api.set_base_url(self.base_url_input.clone()) {
                        Ok(()) => {
                            self.info_banner = Some("API URL updated".into());
                            self.page = Page::new();
                            self.spawn_init_page();
                        }
                        Err(err) => {
                            self.info_banner = Some(format!("Failed to update URL: {err}"));
                        }
                    }
                }
                let refresh_enabled = !self.page.select_menu.disabled
                    && self.page.select_menu.selected.is_some();
                if ui
                    .add_enabled(refresh_enabled, egui::Button::new("Refresh"))
                    .clicked()
                {
                    let user_id = self.page.select_menu.effective_selection();
                    self.spawn_refresh(user_id);
                }
            });

            if let Some(message) = self.info_banner.clone() {
                let mut dismiss = false;
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(message.as_str());
                            if ui.button("Dismiss").clicked() {
                                dismiss = true;
                            }
                        });
                    });
                if dismiss {
                    self.info_banner = None;
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_selector(ui);
            ui.separator();
            self.render_posts(ui);
        });
    }
}
