use std::sync::{Arc, LazyLock};

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::{trace, warn};
use uuid::Uuid;

use crate::{ResourceHandle, ResourceRevoker};

/// The scheme prefix of every handle minted by a [`ResourceRegistry`].
pub const RESOURCE_SCHEME: &str = "blob:meshview/";

#[derive(Debug)]
struct ResourceEntry {
    mime_type: String,
    data: Arc<[u8]>,
}

/// A clone-able (internally Arc-ed) / thread-safe store of transient resources.
///
/// The registry plays the part a browser's object URL store plays for a web viewer: converters
/// hand it bytes (decoded textures, extracted buffers) and get back a [`ResourceHandle`] the
/// renderer can resolve. Every handle stays alive until it is revoked.
#[derive(Default, Clone, Debug)]
pub struct ResourceRegistry {
    entries: Arc<RwLock<HashMap<ResourceHandle, ResourceEntry>>>,
}

static GLOBAL_REGISTRY: LazyLock<ResourceRegistry> = LazyLock::new(ResourceRegistry::default);

impl ResourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    pub fn global() -> ResourceRegistry {
        GLOBAL_REGISTRY.clone()
    }

    /// Stores `data` and returns a fresh handle for it.
    pub fn create(&self, data: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> ResourceHandle {
        let handle = ResourceHandle::new(format!("{RESOURCE_SCHEME}{}", Uuid::new_v4()));
        let entry = ResourceEntry {
            mime_type: mime_type.into(),
            data: data.into(),
        };
        trace!("created {} ({}, {} bytes)", handle, entry.mime_type, entry.data.len());
        self.entries.write().insert(handle.clone(), entry);
        handle
    }

    /// Returns the bytes behind `handle`, or [`None`] if it was never created or already revoked.
    pub fn resolve(&self, handle: &ResourceHandle) -> Option<Arc<[u8]>> {
        self.entries
            .read()
            .get(handle)
            .map(|entry| entry.data.clone())
    }

    /// Returns the MIME type `handle` was created with.
    pub fn mime_type(&self, handle: &ResourceHandle) -> Option<String> {
        self.entries
            .read()
            .get(handle)
            .map(|entry| entry.mime_type.clone())
    }

    /// Returns `true` if `handle` is alive.
    pub fn contains(&self, handle: &ResourceHandle) -> bool {
        self.entries.read().contains_key(handle)
    }

    /// Returns the number of live resources.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no resource is alive.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ResourceRevoker for ResourceRegistry {
    fn revoke(&self, handle: &ResourceHandle) {
        if self.entries.write().remove(handle).is_some() {
            trace!("revoked {}", handle);
        } else {
            warn!("attempted to revoke {}, which is not alive", handle);
        }
    }
}
