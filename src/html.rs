//! HTML view layer for the gastbuch UI.
//!
//! The home page is an askama template compiled from `templates/index.html`
//! at build time, so a broken template fails the build instead of a request.
//! Askama escapes the user-supplied name and content, which keeps posted
//! markup from being interpreted by the browser.
//!
use askama::Template;

use crate::state::Message;

/// Home page: the full message log plus the submission form
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Snapshot of the log, oldest first
    pub messages: Vec<Message>,
}
