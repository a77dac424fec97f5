use core::fmt;
use std::sync::Arc;

/// Opaque identifier of a transient, externally owned resource such as a texture's object URL.
///
/// Handles are cheap to clone. Cloning does not extend the resource's lifetime: the resource
/// lives until it is revoked through a [`ResourceRevoker`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle(Arc<str>);

impl ResourceHandle {
    /// Wraps an existing identifier, for resources minted outside of a [`ResourceRegistry`].
    ///
    /// [`ResourceRegistry`]: crate::ResourceRegistry
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string, in the form a renderer would use to fetch it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceHandle").field(&&*self.0).finish()
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Releases transient resources.
///
/// Implementations may assume each handle is revoked at most once; [`ResourceUrlSet`] upholds
/// that for the handles it owns.
///
/// [`ResourceUrlSet`]: crate::ResourceUrlSet
pub trait ResourceRevoker {
    /// Releases the resource behind `handle`.
    fn revoke(&self, handle: &ResourceHandle);
}

impl<F: Fn(&ResourceHandle)> ResourceRevoker for F {
    fn revoke(&self, handle: &ResourceHandle) {
        self(handle);
    }
}
