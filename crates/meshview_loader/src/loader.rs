use std::{cell::RefCell, rc::Rc};

use meshview_asset::{InputFile, ResourceRegistry, input_files_from_urls};
use meshview_scene::{RgbColor, SharedMaterial};
use meshview_tasks::{LocalTaskPool, Task};
use tracing::{debug, error, warn};

use crate::{
    ConversionParams, Converter, ImportSettings, Importer, LoadCallbacks, LoadEvent, LoadSession,
    LoadState, ModelLoaderSettings, SessionError, pipeline::LoadPipeline,
};

/// Loads models one at a time and keeps the output of the most recent one.
///
/// [`ModelLoader::load_model`] only queues the load on the loader's [`LocalTaskPool`]; the load
/// makes progress as the pool is ticked. While it runs, [`ModelLoader::in_progress`] is `true`
/// and further calls to [`ModelLoader::load_model`] are ignored without any callback. Callers that
/// need queuing have to build it on top.
///
/// Transient resources minted by a conversion are kept until the next load starts or the loader
/// is destroyed, whichever comes first.
pub struct ModelLoader<I, C> {
    importer: Rc<I>,
    converter: Rc<C>,
    registry: ResourceRegistry,
    task_pool: LocalTaskPool,
    session: Rc<RefCell<LoadSession>>,
    params: ConversionParams,
    load_task: Option<Task<()>>,
}

impl<I, C> ModelLoader<I, C>
where
    I: Importer,
    C: Converter<Model = I::Model>,
{
    /// Creates an idle loader.
    ///
    /// The conversion parameters are derived from `settings` once, here.
    pub fn new(
        importer: I,
        converter: C,
        settings: &ModelLoaderSettings,
        task_pool: LocalTaskPool,
        registry: ResourceRegistry,
    ) -> Self {
        let params = settings.conversion_params();
        if params.force_mediump_for_materials {
            debug!("forcing medium precision materials");
        }
        Self {
            importer: Rc::new(importer),
            converter: Rc::new(converter),
            registry,
            task_pool,
            session: Rc::new(RefCell::new(LoadSession::new())),
            params,
            load_task: None,
        }
    }

    /// Returns `true` while a load is running.
    pub fn in_progress(&self) -> bool {
        self.session.borrow().in_progress()
    }

    /// The state of the current load, [`LoadState::Idle`] if there is none.
    pub fn state(&self) -> LoadState {
        self.session.borrow().state()
    }

    /// Starts loading a model from `input_files`.
    ///
    /// Does nothing if a load is already in progress. Otherwise the resources of the previous load
    /// are revoked right away, and the new load is spawned on the task pool; `callbacks` hears
    /// about its progress as the pool is ticked.
    pub fn load_model(
        &mut self,
        input_files: Vec<InputFile>,
        settings: ImportSettings,
        callbacks: impl LoadCallbacks<I::Model>,
    ) {
        {
            let mut session = self.session.borrow_mut();
            match session.transition(LoadEvent::ImportStarted) {
                Ok(_) => {}
                Err(SessionError::Busy) => {
                    debug!("ignoring load request, a model is already loading");
                    return;
                }
                Err(transition_error) => {
                    error!("could not start loading: {}", transition_error);
                    return;
                }
            }
            session.release_resources(&self.registry);
        }

        let pipeline = LoadPipeline {
            importer: self.importer.clone(),
            converter: self.converter.clone(),
            registry: self.registry.clone(),
            params: self.params,
            session: self.session.clone(),
        };
        self.load_task = Some(self.task_pool.spawn(pipeline.run(
            input_files,
            settings,
            Box::new(callbacks),
        )));
    }

    /// Starts loading a model from a list of URLs. See [`ModelLoader::load_model`].
    pub fn load_model_from_urls<U>(
        &mut self,
        urls: U,
        settings: ImportSettings,
        callbacks: impl LoadCallbacks<I::Model>,
    ) where
        U: IntoIterator,
        U::Item: Into<String>,
    {
        self.load_model(input_files_from_urls(urls), settings, callbacks);
    }

    /// The importer this loader runs.
    pub fn importer(&self) -> &I {
        &self.importer
    }

    /// The pool loads are spawned on.
    pub fn task_pool(&self) -> &LocalTaskPool {
        &self.task_pool
    }

    /// The registry conversions mint resources in.
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// The parameters every conversion runs with.
    pub fn conversion_params(&self) -> ConversionParams {
        self.params
    }

    /// The default material of the most recently completed load, if it had one.
    pub fn default_material(&self) -> Option<SharedMaterial> {
        self.session.borrow().default_material().cloned()
    }

    /// Recolors the default material of the most recently completed load.
    ///
    /// Does nothing if there is no default material or if it is colored per vertex, since a flat
    /// color would be ignored for it.
    pub fn replace_default_material_color(&self, color: RgbColor) {
        let session = self.session.borrow();
        let Some(material) = session.default_material() else {
            return;
        };
        let mut material = material.borrow_mut();
        if material.uses_vertex_colors() {
            return;
        }
        material.color = color.into();
    }

    /// Revokes every held resource and releases the importer and converter.
    ///
    /// A load still in flight is cancelled before this returns, and every resource it minted is
    /// revoked with it. The loader's pool is driven until the load is gone, so this must not be
    /// called from inside a callback of the load being cancelled.
    pub fn destroy(self) {
        debug!("destroying model loader");
    }
}

impl<I, C> Drop for ModelLoader<I, C> {
    fn drop(&mut self) {
        if let Some(task) = self.load_task.take()
            && !task.is_finished()
        {
            warn!("model loader dropped while a load was in progress");
            self.task_pool.run(task.cancel());
        }
        match self.session.try_borrow_mut() {
            Ok(mut session) => {
                session.release_resources(&self.registry);
            }
            Err(_) => error!("could not release model resources, the load session is in use"),
        }
    }
}

impl<I, C> core::fmt::Debug for ModelLoader<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("session", &self.session)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
