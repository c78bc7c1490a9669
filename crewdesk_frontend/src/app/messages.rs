use log::{info, warn};

use crewdesk_core::models::{Post, User, UserId};
use crewdesk_core::page::PostArticle;

use super::{tasks, CrewdeskApp};

pub enum AppMessage {
    UsersLoaded(Option<Vec<User>>),
    PostsLoaded {
        user_id: UserId,
        posts: Option<Vec<Post>>,
    },
    ArticlesAssembled {
        user_id: UserId,
        articles: Vec<PostArticle>,
    },
}

pub(super) fn process_messages(app: &mut CrewdeskApp) {
    while let Ok(message) = app.rx.try_recv() {
        match message {
            AppMessage::UsersLoaded(users) => {
                app.users_loading = false;
                match app.page.populate_select_menu(users.as_deref()) {
                    Some(count) => {
                        info!("selector populated with {count} employees");
                        app.users_error = None;
                    }
                    None => {
                        app.users_error = Some("Failed to load employees".to_string());
                    }
                }
            }
            AppMessage::PostsLoaded { user_id, posts } => {
                // Teardown precedes rebuild: stale listeners must not
                // survive into the new view.
                app.page.detach_button_listeners();
                app.page.clear_main();
                match posts {
                    Some(posts) => {
                        tasks::assemble_articles(
                            &app.runtime,
                            app.api.clone(),
                            app.tx.clone(),
                            app.ctx.clone(),
                            user_id,
                            posts,
                        );
                    }
                    None => {
                        warn!("no posts available for employee {user_id}");
                        app.page.attach_placeholder();
                        app.page.attach_button_listeners();
                        app.page.select_menu.disabled = false;
                    }
                }
            }
            AppMessage::ArticlesAssembled { user_id, articles } => {
                let count = articles.len();
                app.page.attach_articles(articles);
                let attached = app.page.attach_button_listeners();
                app.page.select_menu.disabled = false;
                info!("rendered {count} posts for employee {user_id} with {attached} toggle listeners");
            }
        }
    }
}
