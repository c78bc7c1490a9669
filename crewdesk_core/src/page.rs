//! View-model of the page: the employee selector, the main container
//! with its post articles, and the per-post click-handler registry.

use std::collections::HashMap;

use crate::element::Element;
use crate::models::{PostId, User, UserId};

pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";
pub const PLACEHOLDER_TEXT: &str = "Select an Employee to display their posts.";

const COMMENTS_CLASS: &str = "comments";
const HIDE_CLASS: &str = "hide";
const PLACEHOLDER_CLASS: &str = "default-text";

/// One entry of the employee selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: UserId,
    pub label: String,
}

/// The employee selector. `disabled` brackets a running refresh cycle
/// so a second selection cannot start one mid-flight.
#[derive(Debug, Default)]
pub struct SelectMenu {
    pub options: Vec<SelectOption>,
    pub selected: Option<UserId>,
    pub disabled: bool,
}

impl SelectMenu {
    /// The employee a selection change acts on: the explicit
    /// selection, else the first option, else employee 1.
    pub fn effective_selection(&self) -> UserId {
        self.selected
            .or_else(|| self.options.first().map(|option| option.value))
            .unwrap_or(1)
    }
}

/// Visual state of a comment section, derived from its class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// A post's comment panel. Created hidden, tagged with the owning
/// post's id, holding one rendered article per comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentSection {
    pub post_id: PostId,
    pub classes: Vec<String>,
    pub comments: Vec<Element>,
}

impl CommentSection {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            classes: vec![COMMENTS_CLASS.to_string(), HIDE_CLASS.to_string()],
            comments: Vec::new(),
        }
    }

    pub fn append_fragment(&mut self, fragment: Vec<Element>) {
        self.comments.extend(fragment);
    }

    pub fn visibility(&self) -> Visibility {
        if self.classes.iter().any(|class| class == HIDE_CLASS) {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Flips the `hide` class based on the current class list and
    /// returns the state the section ends up in.
    pub fn toggle_visibility(&mut self) -> Visibility {
        match self.visibility() {
            Visibility::Hidden => {
                self.classes.retain(|class| class != HIDE_CLASS);
                Visibility::Visible
            }
            Visibility::Visible => {
                self.classes.push(HIDE_CLASS.to_string());
                Visibility::Hidden
            }
        }
    }
}

/// A post's toggle button. The label always names the action the next
/// click performs.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleButton {
    pub post_id: PostId,
    pub label: String,
}

impl ToggleButton {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            label: SHOW_COMMENTS.to_string(),
        }
    }

    /// Flips the label using the exact current-label check.
    pub fn flip_label(&mut self) {
        self.label = if self.label == SHOW_COMMENTS {
            HIDE_COMMENTS.to_string()
        } else {
            SHOW_COMMENTS.to_string()
        };
    }
}

/// One rendered post: its text elements, the author summary, and the
/// button/section pair sharing the post's id.
#[derive(Debug, Clone, PartialEq)]
pub struct PostArticle {
    pub post_id: PostId,
    pub title: Element,
    pub body: Element,
    pub id_line: Element,
    pub author_line: Element,
    pub catch_phrase: Element,
    pub button: ToggleButton,
    pub section: CommentSection,
}

/// A node attached under the main container.
#[derive(Debug, Clone, PartialEq)]
pub enum MainNode {
    Paragraph(Element),
    Article(PostArticle),
}

/// The single content container below the selector.
#[derive(Debug, Default)]
pub struct MainContainer {
    pub children: Vec<MainNode>,
}

impl MainContainer {
    pub fn articles(&self) -> impl Iterator<Item = &PostArticle> {
        self.children.iter().filter_map(|node| match node {
            MainNode::Article(article) => Some(article),
            MainNode::Paragraph(_) => None,
        })
    }

    /// The article owning the button/section pair tagged `post_id`.
    pub fn article_mut(&mut self, post_id: PostId) -> Option<&mut PostArticle> {
        self.children.iter_mut().find_map(|node| match node {
            MainNode::Article(article) if article.post_id == post_id => Some(article),
            _ => None,
        })
    }
}

/// A click listener bound to one toggle button, holding the post id
/// it closed over when it was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClickBinding {
    post_id: PostId,
}

/// The whole page surface.
///
/// Listeners live in a registry keyed by post id. Attach stores one
/// binding per button under the main container; detach removes the
/// binding for each button still present. Re-attaching overwrites
/// instead of stacking, so listeners cannot accumulate across refresh
/// cycles.
#[derive(Debug, Default)]
pub struct Page {
    pub select_menu: SelectMenu,
    pub main: MainContainer,
    handlers: HashMap<PostId, ClickBinding>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one option per user to the selector, in input order.
    /// Returns the number appended, or `None` when `users` is absent.
    pub fn populate_select_menu(&mut self, users: Option<&[User]>) -> Option<usize> {
        let options = crate::assemble::select_options(users)?;
        let appended = options.len();
        self.select_menu.options.extend(options);
        Some(appended)
    }

    /// Drops every child of the main container, returning how many
    /// were removed.
    pub fn clear_main(&mut self) -> usize {
        let removed = self.main.children.len();
        self.main.children.clear();
        removed
    }

    /// Renders the prompt paragraph shown when no post collection is
    /// available.
    pub fn attach_placeholder(&mut self) {
        self.main.children.push(MainNode::Paragraph(
            Element::text("p", PLACEHOLDER_TEXT).with_class(PLACEHOLDER_CLASS),
        ));
    }

    pub fn attach_articles(&mut self, articles: Vec<PostArticle>) {
        self.main
            .children
            .extend(articles.into_iter().map(MainNode::Article));
    }

    /// Attaches a click listener to every button under the main
    /// container, each closing over the id read from its button.
    /// Returns the number of buttons wired.
    pub fn attach_button_listeners(&mut self) -> usize {
        let mut attached = 0;
        for article in self.main.articles() {
            let post_id = article.button.post_id;
            self.handlers.insert(post_id, ClickBinding { post_id });
            attached += 1;
        }
        attached
    }

    /// Detaches the listener of every button currently under the main
    /// container, matching each attach by the id read back from the
    /// button. Returns the number of listeners removed.
    pub fn detach_button_listeners(&mut self) -> usize {
        let mut detached = 0;
        for article in self.main.articles() {
            if self.handlers.remove(&article.button.post_id).is_some() {
                detached += 1;
            }
        }
        detached
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches a click on the button tagged `post_id` through the
    /// handler registry. A click with no attached listener is a no-op.
    pub fn click(&mut self, post_id: PostId) -> Option<Visibility> {
        let binding = *self.handlers.get(&post_id)?;
        crate::toggle::toggle_comments(self, binding.post_id)
    }
}
