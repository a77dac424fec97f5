use async_channel::Sender;
use meshview_scene::SceneObject;
use tracing::debug;

use crate::{ImportResult, LoadError};

/// Hooks a caller of [`ModelLoader::load_model`](crate::ModelLoader::load_model) receives while
/// the load runs.
///
/// Notifications arrive in this order, and phases never overlap:
///
/// 1. [`on_load_start`](Self::on_load_start)
/// 2. [`on_file_list_progress`](Self::on_file_list_progress), zero or more times
/// 3. [`on_file_load_progress`](Self::on_file_load_progress), zero or more times
/// 4. [`on_import_start`](Self::on_import_start)
/// 5. [`on_select_main_file`](Self::on_select_main_file), only if several files could be the
///    main file
/// 6. [`on_visualization_start`](Self::on_visualization_start) once the import succeeded
/// 7. [`on_texture_loaded`](Self::on_texture_loaded), zero or more times
/// 8. [`on_model_finished`](Self::on_model_finished)
///
/// A failure at any point ends the sequence with [`on_load_error`](Self::on_load_error) instead.
/// Exactly one of the last two is called per accepted load.
pub trait LoadCallbacks<M>: 'static {
    /// The importer started reading the input files.
    fn on_load_start(&mut self) {}

    /// The importer enumerated `current` of `total` input files.
    fn on_file_list_progress(&mut self, _current: usize, _total: usize) {}

    /// The importer read `current` of `total` input files.
    fn on_file_load_progress(&mut self, _current: usize, _total: usize) {}

    /// Parsing the main file started.
    fn on_import_start(&mut self) {}

    /// Several input files could be the main file; one of `candidates` must be chosen through
    /// `selection`.
    ///
    /// The selection may be kept and made later; the load waits for it. Dropping it without
    /// choosing fails the load. By default the first candidate is chosen.
    fn on_select_main_file(&mut self, _candidates: &[String], selection: MainFileSelection) {
        selection.select(0);
    }

    /// The import succeeded and conversion to a scene object started.
    fn on_visualization_start(&mut self) {}

    /// A texture of the model finished loading.
    fn on_texture_loaded(&mut self) {}

    /// The model is converted, oriented and ready to be shown. The loader returns to idle as soon
    /// as this returns.
    fn on_model_finished(&mut self, result: ImportResult<M>, object: SceneObject);

    /// The load failed. The loader returns to idle as soon as this returns.
    fn on_load_error(&mut self, error: LoadError);
}

/// The pending choice of a main file, handed to
/// [`LoadCallbacks::on_select_main_file`].
///
/// Selecting consumes the value, so a choice is made at most once.
#[derive(Debug)]
#[must_use = "dropping the selection without choosing fails the load"]
pub struct MainFileSelection {
    sender: Sender<usize>,
}

impl MainFileSelection {
    pub(crate) fn new(sender: Sender<usize>) -> Self {
        Self { sender }
    }

    /// Chooses the candidate at `index` as the main file.
    pub fn select(self, index: usize) {
        if self.sender.try_send(index).is_err() {
            debug!("main file {} selected after the import was abandoned", index);
        }
    }
}
