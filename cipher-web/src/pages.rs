//! Server-rendered pages.

use askama::Template;
use cipher_core::{CipherKind, KeyKind, Mode};

/// Slug and title of every cipher, for the navigation bar.
fn nav() -> Vec<(&'static str, &'static str)> {
    CipherKind::ALL
        .into_iter()
        .map(|kind| (kind.slug(), kind.title()))
        .collect()
}

#[derive(Template)]
#[template(path = "index.html", escape = "html")]
pub(crate) struct IndexPage {
    nav: Vec<(&'static str, &'static str)>,
}

impl IndexPage {
    pub(crate) fn new() -> Self {
        Self { nav: nav() }
    }
}

/// One cipher's page: an encrypt form, a decrypt form and the outcome of
/// the last submission.
#[derive(Template)]
#[template(path = "cipher.html", escape = "html")]
pub(crate) struct CipherPage {
    nav: Vec<(&'static str, &'static str)>,
    title: &'static str,
    slug: &'static str,
    key_label: &'static str,
    key_input: &'static str,
    plain_text: String,
    plain_key: String,
    cipher_text: String,
    cipher_key: String,
    mode: Option<&'static str>,
    result: Option<String>,
    error: Option<String>,
}

impl CipherPage {
    pub(crate) fn new(kind: CipherKind) -> Self {
        let (key_label, key_input) = match kind.key_kind() {
            KeyKind::Integer => ("Key (integer)", "number"),
            KeyKind::Text => ("Key (keyword)", "text"),
        };
        Self {
            nav: nav(),
            title: kind.title(),
            slug: kind.slug(),
            key_label,
            key_input,
            plain_text: String::new(),
            plain_key: String::new(),
            cipher_text: String::new(),
            cipher_key: String::new(),
            mode: None,
            result: None,
            error: None,
        }
    }

    /// Fills the form that was submitted back in, so the user can adjust it.
    pub(crate) fn with_submission(mut self, mode: Mode, text: &str, key: &str) -> Self {
        let (text_field, key_field) = match mode {
            Mode::Encrypt => (&mut self.plain_text, &mut self.plain_key),
            Mode::Decrypt => (&mut self.cipher_text, &mut self.cipher_key),
        };
        text.clone_into(text_field);
        key.clone_into(key_field);
        self.mode = Some(mode.label());
        self
    }

    pub(crate) fn with_result(mut self, result: String) -> Self {
        self.result = Some(result);
        self
    }

    pub(crate) fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}
