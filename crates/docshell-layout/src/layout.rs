//! Documentation page layout.
//!
//! Composes page chrome, the breadcrumb header, the fixed navigation
//! tree, the caller's content, and a footer into one HTML page.
//! Rendering is referentially transparent: the same inputs and the same
//! configuration snapshot always produce the same output. There is no
//! I/O and no failure path; missing configuration degrades to inert
//! links.

use std::fmt::Write;

use docshell_config::DeployConfig;
use docshell_nav::{Breadcrumb, DOCS_INDEX_PATH, DOCS_NAV, DOCS_ROOT_LABEL, Link, Section};

use crate::html::escape_html;
use crate::navigator::{Navigator, SiteNavigator};
use crate::shell::{HtmlShell, PageShell, ShellOptions};

/// Documentation page layout.
///
/// Holds the collaborator seams; every per-page input arrives at
/// [`DocsLayout::render`]. The default instantiation pairs the built-in
/// HTML shell with the identity route resolver.
pub struct DocsLayout<S, N> {
    shell: S,
    navigator: N,
}

impl Default for DocsLayout<HtmlShell, SiteNavigator> {
    fn default() -> Self {
        Self::new(HtmlShell, SiteNavigator)
    }
}

impl<S: PageShell, N: Navigator> DocsLayout<S, N> {
    /// Create a layout with explicit collaborators.
    #[must_use]
    pub fn new(shell: S, navigator: N) -> Self {
        Self { shell, navigator }
    }

    /// Render a documentation page.
    ///
    /// # Arguments
    ///
    /// * `title` - Page title. `None` or empty renders the root
    ///   breadcrumb state and titles the page "Documentation".
    /// * `children` - Pre-rendered content, emitted verbatim in the
    ///   content area. Not inspected or transformed.
    /// * `options` - Passthrough fields forwarded to the page shell.
    /// * `config` - Deployment configuration snapshot supplying the
    ///   external link targets.
    #[must_use]
    pub fn render(
        &self,
        title: Option<&str>,
        children: &str,
        options: &ShellOptions,
        config: &DeployConfig,
    ) -> String {
        let breadcrumb = Breadcrumb::from_title(title);
        let mut html = String::with_capacity(4096);

        self.shell
            .open(breadcrumb.effective_title(), options, &mut html);

        html.push_str("<header class=\"documentation\">\n");
        self.render_breadcrumb(&breadcrumb, &mut html);
        html.push_str("</header>\n");

        html.push_str("<section class=\"docs documentation\">\n");
        self.render_nav(config, &mut html);
        html.push_str("<div class=\"body\">");
        html.push_str(children);
        html.push_str("</div>\n");
        html.push_str("</section>\n");

        html.push_str("<footer></footer>\n");

        self.shell.close(&mut html);
        html
    }

    /// Render the breadcrumb trail.
    ///
    /// Two states only: the documentation root, or one level deep with
    /// the page title as the terminal non-linked segment.
    fn render_breadcrumb(&self, breadcrumb: &Breadcrumb, html: &mut String) {
        html.push_str("<div class=\"breadcrumb\">\n");
        let _ = write!(
            html,
            "<a href=\"{}\">Home</a>\n",
            escape_html(&self.navigator.href("/"))
        );
        match breadcrumb.page_title() {
            Some(title) => {
                let _ = write!(
                    html,
                    "<a href=\"{}\"><span>{DOCS_ROOT_LABEL}</span></a>\n",
                    escape_html(&self.navigator.href(DOCS_INDEX_PATH))
                );
                let _ = write!(html, "<h2>{}</h2>\n", escape_html(title));
            }
            None => {
                let _ = write!(html, "<h2>{DOCS_ROOT_LABEL}</h2>\n");
            }
        }
        html.push_str("</div>\n");
    }

    /// Render the fixed navigation tree.
    fn render_nav(&self, config: &DeployConfig, html: &mut String) {
        html.push_str("<nav>\n<ol>\n");
        for section in &DOCS_NAV {
            self.render_section(section, config, html);
        }
        html.push_str("</ol>\n</nav>\n");
    }

    /// Render one section: optional heading, then its link entries.
    fn render_section(&self, section: &Section, config: &DeployConfig, html: &mut String) {
        html.push_str("<li>\n");
        if let Some(heading) = section.heading {
            let _ = write!(html, "<h2>{}</h2>\n", escape_html(heading));
        }
        html.push_str("<ol>\n");
        for link in section.links {
            self.render_link(link, config, html);
        }
        html.push_str("</ol>\n</li>\n");
    }

    /// Render one link entry.
    ///
    /// External entries open in a new tab. An unset configured target
    /// renders as an inert link with an empty href; the entry is never
    /// dropped.
    fn render_link(&self, link: &Link, config: &DeployConfig, html: &mut String) {
        let href = match link {
            Link::Internal { path, .. } => self.navigator.href(path),
            Link::External { .. } => link.target(config).unwrap_or("").to_owned(),
        };

        html.push_str("<li>");
        let _ = write!(html, "<a href=\"{}\"", escape_html(&href));
        if link.is_external() {
            html.push_str(" target=\"_blank\"");
        }
        let _ = write!(html, ">{}</a>", escape_html(link.label()));
        html.push_str("</li>\n");
    }
}
