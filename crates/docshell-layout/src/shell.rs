//! Page chrome seam.
//!
//! The outer document skeleton (head metadata, body wrapper) is owned
//! by a [`PageShell`] implementation, not by the layout. The layout
//! hands it the effective page title plus whatever options the caller
//! passed through, and renders the documentation body in between.

use std::fmt::Write;

use crate::html::escape_html;

/// Opaque options forwarded to the page shell.
///
/// The layout neither enumerates nor validates these; whatever the
/// caller supplies reaches the shell unmodified and in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellOptions {
    fields: Vec<(String, String)>,
}

impl ShellOptions {
    /// Create an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a passthrough field, returning the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Forwarded fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Outer page chrome around the documentation layout.
///
/// External collaborator: implementations own head metadata and the
/// document skeleton. The layout only supplies the effective title and
/// the caller's passthrough options.
pub trait PageShell {
    /// Open the document with the effective page title.
    fn open(&self, title: &str, options: &ShellOptions, out: &mut String);

    /// Close the document.
    fn close(&self, out: &mut String);
}

/// Minimal HTML5 shell.
///
/// Passthrough options become `<meta name="..." content="...">` entries
/// in the head, in the order given.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlShell;

impl PageShell for HtmlShell {
    fn open(&self, title: &str, options: &ShellOptions, out: &mut String) {
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = write!(out, "<title>{}</title>\n", escape_html(title));
        for (name, value) in options.fields() {
            let _ = write!(
                out,
                "<meta name=\"{}\" content=\"{}\">\n",
                escape_html(name),
                escape_html(value)
            );
        }
        out.push_str("</head>\n<body>\n");
    }

    fn close(&self, out: &mut String) {
        out.push_str("</body>\n</html>\n");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shell_options_preserve_order() {
        let options = ShellOptions::new()
            .with("description", "Docs page")
            .with("og:type", "article");

        assert_eq!(
            options.fields(),
            &[
                ("description".to_owned(), "Docs page".to_owned()),
                ("og:type".to_owned(), "article".to_owned()),
            ]
        );
    }

    #[test]
    fn test_html_shell_writes_title() {
        let mut out = String::new();
        HtmlShell.open("Tutorial", &ShellOptions::new(), &mut out);
        HtmlShell.close(&mut out);

        assert!(out.contains("<title>Tutorial</title>"));
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_html_shell_escapes_title() {
        let mut out = String::new();
        HtmlShell.open("A <b> title", &ShellOptions::new(), &mut out);

        assert!(out.contains("<title>A &lt;b&gt; title</title>"));
    }

    #[test]
    fn test_html_shell_forwards_options_as_meta() {
        let options = ShellOptions::new().with("description", "Version control for ML");
        let mut out = String::new();
        HtmlShell.open("Documentation", &options, &mut out);

        assert!(out.contains("<meta name=\"description\" content=\"Version control for ML\">"));
    }
}
