use std::sync::mpsc::Sender;

use eframe::egui;
use log::error;
use tokio::runtime::Runtime;

use crewdesk_core::api::ApiClient;
use crewdesk_core::assemble;
use crewdesk_core::models::{Post, UserId};

use super::messages::AppMessage;

pub fn load_users(runtime: &Runtime, client: ApiClient, tx: Sender<AppMessage>, ctx: egui::Context) {
    runtime.spawn(async move {
        let users = client.get_users().await;
        if tx.send(AppMessage::UsersLoaded(users)).is_err() {
            error!("failed to send UsersLoaded message");
        }
        ctx.request_repaint();
    });
}

pub fn load_posts(
    runtime: &Runtime,
    client: ApiClient,
    tx: Sender<AppMessage>,
    ctx: egui::Context,
    user_id: UserId,
) {
    runtime.spawn(async move {
        let posts = client.get_user_posts(Some(user_id)).await;
        if tx.send(AppMessage::PostsLoaded { user_id, posts }).is_err() {
            error!("failed to send PostsLoaded message");
        }
        ctx.request_repaint();
    });
}

/// Assembles the post articles off the UI thread. A post whose author
/// cannot be fetched faults this task; the selector then stays
/// disabled, keeping the failure visible.
pub fn assemble_articles(
    runtime: &Runtime,
    client: ApiClient,
    tx: Sender<AppMessage>,
    ctx: egui::Context,
    user_id: UserId,
    posts: Vec<Post>,
) {
    runtime.spawn(async move {
        let articles = assemble::articles_for(&client, posts).await;
        let message = AppMessage::ArticlesAssembled { user_id, articles };
        if tx.send(message).is_err() {
            error!("failed to send ArticlesAssembled message");
        }
        ctx.request_repaint();
    });
}
