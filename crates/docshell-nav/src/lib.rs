//! Navigation structure for the documentation shell.
//!
//! This crate provides:
//! - [`Section`] and [`Link`]: the serializable navigation-tree records
//! - [`DOCS_NAV`]: the fixed four-section documentation tree
//! - [`Breadcrumb`]: two-state breadcrumb derivation from a page title
//!
//! # Quick Start
//!
//! ```
//! use docshell_config::{DeployConfig, UrlKey};
//! use docshell_nav::{Breadcrumb, DOCS_NAV};
//!
//! let config = DeployConfig::new().with_url(UrlKey::TutorialColab, "https://colab.example/t");
//!
//! // The tree shape never varies; only the external targets do.
//! assert_eq!(DOCS_NAV.len(), 4);
//! assert_eq!(
//!     DOCS_NAV[0].links[2].target(&config),
//!     Some("https://colab.example/t")
//! );
//!
//! let breadcrumb = Breadcrumb::from_title(Some("Tutorial"));
//! assert_eq!(breadcrumb.effective_title(), "Tutorial");
//! ```

mod breadcrumb;
mod tree;

pub use breadcrumb::{Breadcrumb, DOCS_INDEX_PATH, DOCS_ROOT_LABEL};
pub use tree::{DOCS_NAV, Link, Section};
