//! Documentation page layout for the product website.
//!
//! This crate provides:
//! - [`DocsLayout`]: composes chrome, breadcrumb, the fixed navigation
//!   tree, a content slot, and a footer into one HTML page
//! - [`PageShell`] / [`HtmlShell`]: the outer chrome seam
//! - [`Navigator`] / [`SiteNavigator`]: the route resolution seam
//!
//! # Quick Start
//!
//! ```
//! use docshell_config::{DeployConfig, UrlKey};
//! use docshell_layout::{DocsLayout, ShellOptions};
//!
//! let config = DeployConfig::new().with_url(UrlKey::TutorialColab, "https://colab.example/t");
//! let layout = DocsLayout::default();
//!
//! let html = layout.render(
//!     Some("Tutorial"),
//!     "<p>First, install the CLI.</p>",
//!     &ShellOptions::new(),
//!     &config,
//! );
//!
//! assert!(html.contains("<title>Tutorial</title>"));
//! assert!(html.contains("<p>First, install the CLI.</p>"));
//! ```

mod html;
mod layout;
mod navigator;
mod shell;

pub use html::escape_html;
pub use layout::DocsLayout;
pub use navigator::{Navigator, SiteNavigator};
pub use shell::{HtmlShell, PageShell, ShellOptions};
