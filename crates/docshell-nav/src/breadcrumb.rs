//! Two-state breadcrumb derivation.

/// Logical path of the documentation index, the target of the linked
/// "Documentation" segment.
pub const DOCS_INDEX_PATH: &str = "/docs";

/// Label of the documentation root segment, doubling as the default
/// page title.
pub const DOCS_ROOT_LABEL: &str = "Documentation";

/// Breadcrumb display state for the documentation header.
///
/// The model is exactly two states - the documentation root, or one
/// level below it - not a general path stack. Pages deeper in the URL
/// hierarchy still present as a single level under the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Breadcrumb {
    /// No page title: the trail ends at the static root label.
    Root,
    /// A page title: the root label becomes a link and the title is the
    /// terminal, non-linked segment.
    Page(String),
}

impl Breadcrumb {
    /// Derive breadcrumb state from an optional page title.
    ///
    /// An empty title counts as absent.
    #[must_use]
    pub fn from_title(title: Option<&str>) -> Self {
        match title {
            Some(title) if !title.is_empty() => Self::Page(title.to_owned()),
            _ => Self::Root,
        }
    }

    /// Title handed to the page shell: the page title when drilled in,
    /// the root label otherwise.
    #[must_use]
    pub fn effective_title(&self) -> &str {
        match self {
            Self::Root => DOCS_ROOT_LABEL,
            Self::Page(title) => title,
        }
    }

    /// Page title, if drilled in.
    #[must_use]
    pub fn page_title(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Page(title) => Some(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_title_none_is_root() {
        assert_eq!(Breadcrumb::from_title(None), Breadcrumb::Root);
    }

    #[test]
    fn test_from_title_empty_is_root() {
        assert_eq!(Breadcrumb::from_title(Some("")), Breadcrumb::Root);
    }

    #[test]
    fn test_from_title_present_is_page() {
        assert_eq!(
            Breadcrumb::from_title(Some("Tutorial")),
            Breadcrumb::Page("Tutorial".to_owned())
        );
    }

    #[test]
    fn test_effective_title_root_is_default() {
        assert_eq!(Breadcrumb::Root.effective_title(), "Documentation");
    }

    #[test]
    fn test_effective_title_page_is_title() {
        let breadcrumb = Breadcrumb::from_title(Some("Tutorial"));

        assert_eq!(breadcrumb.effective_title(), "Tutorial");
    }

    #[test]
    fn test_page_title_root_is_none() {
        assert_eq!(Breadcrumb::Root.page_title(), None);
    }

    #[test]
    fn test_page_title_page_is_some() {
        let breadcrumb = Breadcrumb::from_title(Some("Analytics"));

        assert_eq!(breadcrumb.page_title(), Some("Analytics"));
    }
}
