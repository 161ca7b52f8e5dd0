//! Fixed navigation tree for the documentation section.
//!
//! The tree is data, not markup: an ordered list of [`Section`]s, each
//! holding ordered [`Link`] entries. Keeping the structure separate
//! from rendering makes it testable and serializable on its own; the
//! HTML lives in `docshell-layout`.
//!
//! The tree shape is constant across renders. The only variation is the
//! substitution of the two [`Link::External`] targets from deployment
//! configuration.

use docshell_config::{DeployConfig, UrlKey};
use serde::Serialize;

/// A single entry in the navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    /// Link to a page on this site, resolved from a logical path.
    Internal {
        /// Logical path handed to the route resolver.
        path: &'static str,
        /// Display label.
        label: &'static str,
    },
    /// Link that leaves the site; the target comes from deployment
    /// configuration.
    External {
        /// Configuration key holding the target URL.
        url_key: UrlKey,
        /// Display label.
        label: &'static str,
    },
}

impl Link {
    /// Display label of this entry.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }

    /// Whether this entry leaves the site.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    /// Resolve the link target against a configuration snapshot.
    ///
    /// Internal links yield their logical path. External links yield
    /// the configured URL, or `None` when the slot is unset - the entry
    /// itself is never dropped; callers render an inert link instead.
    #[must_use]
    pub fn target<'a>(&self, config: &'a DeployConfig) -> Option<&'a str> {
        match *self {
            Self::Internal { path, .. } => Some(path),
            Self::External { url_key, .. } => config.url(url_key),
        }
    }
}

/// An ordered group of links in the navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading shown above the group. The intro section has none.
    pub heading: Option<&'static str>,
    /// Ordered link entries.
    pub links: &'static [Link],
}

/// The documentation navigation tree.
///
/// Four sections, order-significant, authored once at compile time.
pub static DOCS_NAV: [Section; 4] = [
    Section {
        heading: None,
        links: &[
            Link::Internal {
                path: "/docs",
                label: "Install & first steps",
            },
            Link::Internal {
                path: "/docs/tutorial",
                label: "Tutorial",
            },
            Link::External {
                url_key: UrlKey::TutorialColab,
                label: "Notebook tutorial",
            },
        ],
    },
    Section {
        heading: Some("Guides"),
        links: &[
            Link::Internal {
                path: "/docs/guides/cloud-storage",
                label: "Store data in the cloud",
            },
            Link::Internal {
                path: "/docs/guides/training-data",
                label: "Version training data",
            },
            Link::External {
                url_key: UrlKey::AnalysisColab,
                label: "Analyze & visualize in a notebook",
            },
            Link::Internal {
                path: "/docs/guides/keras-integration",
                label: "Keras integration",
            },
            Link::Internal {
                path: "/docs/guides/pytorch-lightning-integration",
                label: "PyTorch Lightning integration",
            },
            Link::Internal {
                path: "/docs/guides/inference",
                label: "Load models for inference",
            },
        ],
    },
    Section {
        heading: Some("Learning"),
        links: &[
            Link::Internal {
                path: "/docs/learn/how-it-works",
                label: "How it works",
            },
            Link::Internal {
                path: "/docs/learn/analytics",
                label: "Analytics",
            },
        ],
    },
    Section {
        heading: Some("Reference"),
        links: &[
            Link::Internal {
                path: "/docs/reference/python",
                label: "Python library",
            },
            Link::Internal {
                path: "/docs/reference/yaml",
                label: "keepsake.yaml",
            },
            Link::Internal {
                path: "/docs/reference/cli",
                label: "Command-line interface",
            },
        ],
    },
];
