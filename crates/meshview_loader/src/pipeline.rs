use std::{cell::RefCell, rc::Rc};

use meshview_asset::{InputFile, ResourceRegistry};
use meshview_scene::SceneObject;
use tracing::{debug, error, info, warn};

use crate::{
    ConversionOutput, ConversionParams, ConvertContext, Converter, ImportContext, ImportError,
    ImportResult, ImportSettings, Importer, LoadCallbacks, LoadError, LoadEvent, LoadSession,
};

/// One accepted load, run as a sequence of stages that each hand a `Result` to the next.
///
/// Every stage reports its outcome to the shared [`LoadSession`]. The session is only borrowed
/// for the duration of a transition, never across a callback or an await.
pub(crate) struct LoadPipeline<I, C> {
    pub(crate) importer: Rc<I>,
    pub(crate) converter: Rc<C>,
    pub(crate) registry: ResourceRegistry,
    pub(crate) params: ConversionParams,
    pub(crate) session: Rc<RefCell<LoadSession>>,
}

impl<I, C> LoadPipeline<I, C>
where
    I: Importer,
    C: Converter<Model = I::Model>,
{
    /// Runs the load to completion and delivers the outcome to `callbacks`.
    pub(crate) async fn run(
        self,
        files: Vec<InputFile>,
        settings: ImportSettings,
        mut callbacks: Box<dyn LoadCallbacks<I::Model>>,
    ) {
        match self.load(&files, &settings, callbacks.as_mut()).await {
            Ok((result, object)) => {
                info!("loaded model from {}", result.main_file);
                callbacks.on_model_finished(result, object);
            }
            Err(error) => {
                warn!("failed to load model: {}", error);
                callbacks.on_load_error(error);
            }
        }
        self.advance(LoadEvent::Finished);
    }

    async fn load(
        &self,
        files: &[InputFile],
        settings: &ImportSettings,
        callbacks: &mut dyn LoadCallbacks<I::Model>,
    ) -> Result<(ImportResult<I::Model>, SceneObject), LoadError> {
        let result = self.import(files, settings, callbacks).await?;
        callbacks.on_visualization_start();
        let output = self.convert(&result, callbacks).await?;
        let object = self.orient(&result, output);
        Ok((result, object))
    }

    async fn import(
        &self,
        files: &[InputFile],
        settings: &ImportSettings,
        callbacks: &mut dyn LoadCallbacks<I::Model>,
    ) -> Result<ImportResult<I::Model>, ImportError> {
        debug!("importing {} input files", files.len());
        let outcome = if files.is_empty() {
            Err(ImportError::NoImportableFile)
        } else {
            let mut context = ImportContext::new(callbacks);
            self.importer
                .import_files(files, settings, &mut context)
                .await
        };
        self.advance(match outcome {
            Ok(_) => LoadEvent::ImportSucceeded,
            Err(_) => LoadEvent::ImportFailed,
        });
        outcome
    }

    async fn convert(
        &self,
        result: &ImportResult<I::Model>,
        callbacks: &mut dyn LoadCallbacks<I::Model>,
    ) -> Result<ConversionOutput, LoadError> {
        let mut context = ConvertContext::new(callbacks, &self.registry);
        let converted = self
            .converter
            .convert(&result.model, &self.params, &mut context)
            .await;
        match converted {
            Ok(converted) => Ok(context.finish(converted)),
            Err(conversion_error) => {
                drop(context);
                self.advance(LoadEvent::ConversionFailed);
                Err(conversion_error.into())
            }
        }
    }

    /// Hands the new scene's material and resources to the session and normalizes the root's up
    /// axis.
    fn orient(&self, result: &ImportResult<I::Model>, output: ConversionOutput) -> SceneObject {
        let ConversionOutput {
            mut object,
            default_material,
            resource_urls,
        } = output;
        self.advance(LoadEvent::ConversionCompleted {
            default_material,
            resource_urls,
        });
        object.transform.correct_up_axis(result.up_vector);
        object
    }

    fn advance(&self, event: LoadEvent) {
        if let Err(transition_error) = self.session.borrow_mut().transition(event) {
            error!("model load session out of sync: {}", transition_error);
        }
    }
}
