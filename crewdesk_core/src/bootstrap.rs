//! Initial page load and the selection-change cycle.

use crate::api::ApiClient;
use crate::models::UserId;
use crate::page::Page;
use crate::refresh::{self, RefreshOutcome};

/// Outcome of one selection-change cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub user_id: UserId,
    pub refresh: RefreshOutcome,
}

/// Fetches the employee collection and fills the selector with it, in
/// fetch order. Returns the number of options appended, or `None`
/// when the collection could not be fetched.
pub async fn init_page(api: &ApiClient, page: &mut Page) -> Option<usize> {
    let users = api.get_users().await;
    page.populate_select_menu(users.as_deref())
}

/// Runs one full selection-change cycle: disables the selector for
/// the duration, resolves the employee to act on, fetches their
/// posts, refreshes the view, and re-enables the selector.
pub async fn handle_selection_change(api: &ApiClient, page: &mut Page) -> SelectionOutcome {
    page.select_menu.disabled = true;
    let user_id = page.select_menu.effective_selection();
    let posts = api.get_user_posts(Some(user_id)).await;
    let refresh = refresh::refresh_posts(api, page, posts).await;
    page.select_menu.disabled = false;
    SelectionOutcome { user_id, refresh }
}
