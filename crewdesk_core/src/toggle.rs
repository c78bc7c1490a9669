//! The comment-visibility toggle tied to each post's button/section
//! pair.

use crate::models::PostId;
use crate::page::{Page, Visibility};

/// Flips the comment section tagged `post_id` together with its
/// button's label, returning the visibility the section ends in.
///
/// Both flips happen under one borrow of the article, so no state
/// where only one of the pair has moved is ever observable. Current
/// state is re-read on every call; two calls in a row always restore
/// the starting label and visibility. A `post_id` with no article is
/// a no-op.
pub fn toggle_comments(page: &mut Page, post_id: PostId) -> Option<Visibility> {
    let article = page.main.article_mut(post_id)?;
    let visibility = article.section.toggle_visibility();
    article.button.flip_label();
    Some(visibility)
}
