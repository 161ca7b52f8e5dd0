//! Route resolution seam.

/// Resolves a logical page path into a navigable link target.
///
/// External collaborator: the layout supplies path and label only and
/// implements no routing itself.
pub trait Navigator {
    /// Link target for a logical path.
    fn href(&self, path: &str) -> String;
}

/// Identity resolver for site-absolute paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct SiteNavigator;

impl Navigator for SiteNavigator {
    fn href(&self, path: &str) -> String {
        path.to_owned()
    }
}
