//! The view refresh controller: teardown, rebuild, rewire.

use crate::api::ApiClient;
use crate::assemble;
use crate::models::Post;
use crate::page::Page;

/// What a refresh cycle left under the main container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedView {
    /// The prompt paragraph shown when no posts were available.
    Placeholder,
    /// The given number of post articles.
    Articles(usize),
}

/// Summary of one teardown-rebuild-rewire pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub detached_listeners: usize,
    pub attached_listeners: usize,
    pub rendered: RenderedView,
}

/// Replaces the whole view for a new post collection.
///
/// The four steps run strictly in order: detach the listener of every
/// button still attached, drop all children of the main container,
/// render the new content, then attach fresh listeners to the buttons
/// now present. Listeners are never wired to nodes about to be
/// discarded, and no stale listener survives into the new view.
pub async fn refresh_posts(
    api: &ApiClient,
    page: &mut Page,
    posts: Option<Vec<Post>>,
) -> RefreshOutcome {
    let detached_listeners = page.detach_button_listeners();
    page.clear_main();
    let rendered = display_posts(api, page, posts).await;
    let attached_listeners = page.attach_button_listeners();
    RefreshOutcome {
        detached_listeners,
        attached_listeners,
        rendered,
    }
}

/// Renders a post collection into the main container, or the prompt
/// paragraph when no collection is available.
pub async fn display_posts(
    api: &ApiClient,
    page: &mut Page,
    posts: Option<Vec<Post>>,
) -> RenderedView {
    match assemble::build_post_articles(api, posts).await {
        Some(articles) => {
            let count = articles.len();
            page.attach_articles(articles);
            RenderedView::Articles(count)
        }
        None => {
            page.attach_placeholder();
            RenderedView::Placeholder
        }
    }
}
