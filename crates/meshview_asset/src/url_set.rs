use tracing::debug;

use crate::{ResourceHandle, ResourceRevoker};

/// The transient resources produced by one model load.
///
/// A set starts out uninitialized. Once a conversion completes, the loader keeps that load's
/// set until the next load begins or the loader is destroyed, and then calls
/// [`ResourceUrlSet::revoke_all`]. Revoking consumes the handles, so a handle can never be
/// revoked twice through the same set.
#[derive(Debug, Default)]
pub struct ResourceUrlSet {
    handles: Option<Vec<ResourceHandle>>,
}

impl ResourceUrlSet {
    /// Creates an empty, uninitialized set.
    pub const fn new() -> Self {
        Self { handles: None }
    }

    /// Adds a handle to the set.
    pub fn insert(&mut self, handle: ResourceHandle) {
        self.handles.get_or_insert_with(Vec::new).push(handle);
    }

    /// Returns the number of handles held.
    pub fn len(&self) -> usize {
        self.handles.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` if the set holds no handle.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the held handles.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceHandle> {
        self.handles.iter().flatten()
    }

    /// Releases every held handle through `revoker` and leaves the set uninitialized.
    ///
    /// Returns how many handles were revoked. Calling this on an empty set does nothing, so it is
    /// safe to call repeatedly.
    pub fn revoke_all(&mut self, revoker: &dyn ResourceRevoker) -> usize {
        let Some(handles) = self.handles.take() else {
            return 0;
        };
        for handle in &handles {
            revoker.revoke(handle);
        }
        if !handles.is_empty() {
            debug!("revoked {} transient resources", handles.len());
        }
        handles.len()
    }
}

impl FromIterator<ResourceHandle> for ResourceUrlSet {
    fn from_iter<T: IntoIterator<Item = ResourceHandle>>(iter: T) -> Self {
        Self {
            handles: Some(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceRegistry;
    use std::cell::RefCell;

    #[test]
    fn empty_set_revokes_nothing() {
        let revoked = RefCell::new(Vec::new());
        let revoker = |handle: &ResourceHandle| revoked.borrow_mut().push(handle.clone());

        let mut set = ResourceUrlSet::new();
        assert_eq!(set.revoke_all(&revoker), 0);
        assert!(revoked.borrow().is_empty());
    }

    #[test]
    fn revoke_all_is_idempotent() {
        let revoked = RefCell::new(Vec::new());
        let revoker = |handle: &ResourceHandle| revoked.borrow_mut().push(handle.clone());

        let mut set: ResourceUrlSet = ["blob:a", "blob:b"]
            .into_iter()
            .map(ResourceHandle::new)
            .collect();
        assert_eq!(set.len(), 2);

        assert_eq!(set.revoke_all(&revoker), 2);
        assert_eq!(set.revoke_all(&revoker), 0);
        assert!(set.is_empty());
        assert_eq!(
            *revoked.borrow(),
            [ResourceHandle::new("blob:a"), ResourceHandle::new("blob:b")]
        );
    }

    #[test]
    fn revoking_releases_registry_entries() {
        let registry = ResourceRegistry::new();
        let mut set = ResourceUrlSet::new();
        set.insert(registry.create(vec![0u8; 4], "image/png"));
        set.insert(registry.create(vec![0u8; 8], "image/png"));
        let kept = registry.create(vec![0u8], "image/png");

        set.revoke_all(&registry);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&kept));
        assert_eq!(set.iter().count(), 0);
    }
}
