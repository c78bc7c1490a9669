//! Builders and assemblers turning fetched records into the page's
//! fragments and post articles.

use std::future::Future;

use crate::api::ApiClient;
use crate::element::Element;
use crate::models::{Comment, Post, PostId, User};
use crate::page::{CommentSection, PostArticle, SelectOption, ToggleButton};

/// One selector option per user, value from the id and label from the
/// name, in input order.
pub fn select_options(users: Option<&[User]>) -> Option<Vec<SelectOption>> {
    let users = users?;
    Some(
        users
            .iter()
            .map(|user| SelectOption {
                value: user.id,
                label: user.name.clone(),
            })
            .collect(),
    )
}

/// Builds the detached comment fragment: one article per comment, in
/// input order, holding the commenter's name, the body, and a
/// `From: {email}` line.
pub fn build_comments(comments: Option<Vec<Comment>>) -> Option<Vec<Element>> {
    let comments = comments?;
    let mut fragment = Vec::with_capacity(comments.len());
    for comment in comments {
        let mut article = Element::new("article");
        article.append(Element::text("h3", comment.name));
        article.append(Element::text("p", comment.body));
        article.append(Element::text("p", format!("From: {}", comment.email)));
        fragment.push(article);
    }
    Some(fragment)
}

/// Composes the comment panel for `post_id`: a hidden section tagged
/// with the id, carrying whatever comments could be fetched. A failed
/// comment fetch degrades to an empty panel.
pub async fn build_comment_section(
    api: &ApiClient,
    post_id: Option<PostId>,
) -> Option<CommentSection> {
    let post_id = post_id?;
    Some(comment_section_for(api, post_id).await)
}

async fn comment_section_for(api: &ApiClient, post_id: PostId) -> CommentSection {
    let mut section = CommentSection::new(post_id);
    if let Some(fragment) = build_comments(api.get_post_comments(Some(post_id)).await) {
        section.append_fragment(fragment);
    }
    section
}

/// Assembles one post article per post, in input order.
///
/// Per-post work is strictly serialized through [`resolve_in_order`]:
/// post N's author and comments are fetched and its article fully
/// assembled before post N+1 is touched.
pub async fn build_post_articles(
    api: &ApiClient,
    posts: Option<Vec<Post>>,
) -> Option<Vec<PostArticle>> {
    let posts = posts?;
    Some(articles_for(api, posts).await)
}

/// The present-input assembly path: one article per post, resolved
/// strictly in input order.
pub async fn articles_for(api: &ApiClient, posts: Vec<Post>) -> Vec<PostArticle> {
    resolve_in_order(posts, |post| build_post_article(api, post)).await
}

async fn build_post_article(api: &ApiClient, post: Post) -> PostArticle {
    let title = Element::text("h2", post.title);
    let body = Element::text("p", post.body);
    let id_line = Element::text("p", format!("Post ID: {}", post.id));

    // A post cannot render without its author: a failed lookup faults
    // the whole assembly instead of degrading.
    let author = api
        .get_user(Some(post.user_id))
        .await
        .expect("post author lookup returned no data");

    let author_line = Element::text(
        "p",
        format!("Author: {} with {}", author.name, author.company.name),
    );
    let catch_phrase = Element::text("p", author.company.catch_phrase);

    let button = ToggleButton::new(post.id);
    let section = comment_section_for(api, post.id).await;

    PostArticle {
        post_id: post.id,
        title,
        body,
        id_line,
        author_line,
        catch_phrase,
        button,
        section,
    }
}

/// Resolves one future per item strictly in input order: item N's
/// future runs to completion before item N+1's is created.
pub async fn resolve_in_order<T, U, F, Fut>(items: Vec<T>, mut resolve: F) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    let mut resolved = Vec::with_capacity(items.len());
    for item in items {
        resolved.push(resolve(item).await);
    }
    resolved
}
