use core::future::Future;
use std::sync::Arc;

use meshview_asset::{ResourceHandle, ResourceRegistry, ResourceUrlSet};
use meshview_scene::{SceneObject, SharedMaterial};
use tracing::debug;

use crate::{ConversionError, LoadCallbacks};

/// Turns an imported model into a renderable [`SceneObject`].
pub trait Converter: 'static {
    /// The model produced by the [`Importer`](crate::Importer) this converter is paired with.
    type Model: 'static;

    /// Converts `model`.
    ///
    /// Every transient resource the scene needs must be created through
    /// [`ConvertContext::create_resource_url`] so the loader can release it later.
    fn convert(
        &self,
        model: &Self::Model,
        params: &ConversionParams,
        context: &mut ConvertContext<'_, Self::Model>,
    ) -> impl Future<Output = Result<ConvertedModel, ConversionError>>;
}

/// Parameters fixed for every conversion a loader runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionParams {
    /// Build materials with medium precision shaders, for drivers with broken high precision.
    pub force_mediump_for_materials: bool,
}

/// What a [`Converter`] produces.
#[derive(Debug)]
pub struct ConvertedModel {
    /// The root of the renderable scene.
    pub object: SceneObject,
    /// The material given to surfaces without one of their own, if any surface needed it.
    pub default_material: Option<SharedMaterial>,
}

/// The complete output of the convert stage: the converted model plus the transient resources
/// minted while converting it.
#[derive(Debug)]
pub struct ConversionOutput {
    /// The root of the renderable scene.
    pub object: SceneObject,
    /// The material given to surfaces without one of their own.
    pub default_material: Option<SharedMaterial>,
    /// Resources the scene references.
    pub resource_urls: ResourceUrlSet,
}

/// The channel a [`Converter`] reports through and mints resources with.
///
/// Resources minted through the context belong to the load. If the context is dropped before
/// the conversion completes, they are revoked with it.
pub struct ConvertContext<'a, M: 'static> {
    callbacks: &'a mut dyn LoadCallbacks<M>,
    registry: &'a ResourceRegistry,
    resource_urls: ResourceUrlSet,
}

impl<'a, M: 'static> ConvertContext<'a, M> {
    pub(crate) fn new(
        callbacks: &'a mut dyn LoadCallbacks<M>,
        registry: &'a ResourceRegistry,
    ) -> Self {
        Self {
            callbacks,
            registry,
            resource_urls: ResourceUrlSet::new(),
        }
    }

    /// Stores `data` as a transient resource of this load and returns its handle.
    pub fn create_resource_url(
        &mut self,
        data: impl Into<Arc<[u8]>>,
        mime_type: impl Into<String>,
    ) -> ResourceHandle {
        let handle = self.registry.create(data, mime_type);
        self.resource_urls.insert(handle.clone());
        handle
    }

    /// Reports that a texture finished loading.
    pub fn texture_loaded(&mut self) {
        self.callbacks.on_texture_loaded();
    }

    /// The registry resources are minted in, to resolve handles created earlier.
    pub fn registry(&self) -> &ResourceRegistry {
        self.registry
    }

    /// Completes the conversion, handing the minted resources over to the caller.
    pub(crate) fn finish(mut self, converted: ConvertedModel) -> ConversionOutput {
        ConversionOutput {
            object: converted.object,
            default_material: converted.default_material,
            resource_urls: core::mem::take(&mut self.resource_urls),
        }
    }
}

impl<M: 'static> Drop for ConvertContext<'_, M> {
    fn drop(&mut self) {
        let revoked = self.resource_urls.revoke_all(self.registry);
        if revoked > 0 {
            debug!("released {} resources of an unfinished conversion", revoked);
        }
    }
}
