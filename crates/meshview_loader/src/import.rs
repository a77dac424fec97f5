use core::future::Future;

use meshview_asset::InputFile;
use meshview_transform::Direction;
use tracing::{trace, warn};

use crate::{ImportError, ImportSettings, LoadCallbacks, MainFileSelection};

/// Reads input files and parses them into a model.
///
/// Implementations report their progress through the [`ImportContext`] and must resolve to
/// exactly one outcome per call, after every progress notification of that call. Long imports
/// should yield between files so the task pool can keep other work moving.
pub trait Importer: 'static {
    /// The parsed model handed to the [`Converter`](crate::Converter).
    type Model: 'static;

    /// Imports `files`.
    fn import_files(
        &self,
        files: &[InputFile],
        settings: &ImportSettings,
        context: &mut ImportContext<'_, Self::Model>,
    ) -> impl Future<Output = Result<ImportResult<Self::Model>, ImportError>>;
}

/// The read-only outcome of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult<M> {
    /// The parsed model.
    pub model: M,
    /// Name of the file chosen as the main file.
    pub main_file: String,
    /// The axis the model's source format treats as vertical.
    pub up_vector: Direction,
}

/// How far an import has progressed. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportPhase {
    /// Nothing was reported yet.
    Pending,
    /// Input files are being enumerated and read.
    LoadingFiles,
    /// The main file is being parsed.
    Importing,
}

/// The channel an [`Importer`] reports through.
///
/// The context forwards each report to the caller's [`LoadCallbacks`] and keeps the reports in
/// protocol order: a report that skips ahead implicitly reports the phases before it, and a
/// report that belongs to a phase that is already over is dropped.
pub struct ImportContext<'a, M: 'static> {
    callbacks: &'a mut dyn LoadCallbacks<M>,
    phase: ImportPhase,
}

impl<'a, M: 'static> ImportContext<'a, M> {
    pub(crate) fn new(callbacks: &'a mut dyn LoadCallbacks<M>) -> Self {
        Self {
            callbacks,
            phase: ImportPhase::Pending,
        }
    }

    /// The phase the import has reported so far.
    pub fn phase(&self) -> ImportPhase {
        self.phase
    }

    /// Reports that reading the input files started.
    pub fn load_started(&mut self) {
        if self.phase == ImportPhase::Pending {
            self.phase = ImportPhase::LoadingFiles;
            self.callbacks.on_load_start();
        }
    }

    /// Reports that `current` of `total` input files were enumerated.
    pub fn file_list_progress(&mut self, current: usize, total: usize) {
        if self.enter_loading("file list progress") {
            self.callbacks.on_file_list_progress(current, total);
        }
    }

    /// Reports that `current` of `total` input files were read.
    pub fn file_load_progress(&mut self, current: usize, total: usize) {
        if self.enter_loading("file load progress") {
            self.callbacks.on_file_load_progress(current, total);
        }
    }

    /// Reports that parsing the main file started.
    pub fn import_started(&mut self) {
        if self.phase == ImportPhase::Importing {
            return;
        }
        self.load_started();
        self.phase = ImportPhase::Importing;
        self.callbacks.on_import_start();
    }

    /// Asks the caller which of `candidates` is the main file and waits for the answer.
    ///
    /// With a single candidate nobody is asked and `0` is returned right away.
    pub async fn select_main_file(&mut self, candidates: Vec<String>) -> Result<usize, ImportError> {
        match candidates.len() {
            0 => return Err(ImportError::NoImportableFile),
            1 => return Ok(0),
            _ => {}
        }
        self.import_started();

        let (sender, receiver) = async_channel::bounded(1);
        self.callbacks
            .on_select_main_file(&candidates, MainFileSelection::new(sender));
        let index = receiver
            .recv()
            .await
            .map_err(|_| ImportError::MainFileNotSelected)?;
        if index >= candidates.len() {
            return Err(ImportError::InvalidMainFileIndex {
                index,
                count: candidates.len(),
            });
        }
        trace!("selected main file {}", candidates[index]);
        Ok(index)
    }

    fn enter_loading(&mut self, report: &str) -> bool {
        if self.phase == ImportPhase::Importing {
            warn!("dropping {} reported after the import started", report);
            return false;
        }
        self.load_started();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadError;
    use meshview_scene::SceneObject;
    use meshview_tasks::block_on;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Log {
        events: Rc<RefCell<Vec<String>>>,
        choice: Option<usize>,
    }

    impl LoadCallbacks<()> for Log {
        fn on_load_start(&mut self) {
            self.events.borrow_mut().push("load_start".into());
        }

        fn on_file_list_progress(&mut self, current: usize, total: usize) {
            self.events
                .borrow_mut()
                .push(format!("file_list {current}/{total}"));
        }

        fn on_file_load_progress(&mut self, current: usize, total: usize) {
            self.events
                .borrow_mut()
                .push(format!("file_load {current}/{total}"));
        }

        fn on_import_start(&mut self) {
            self.events.borrow_mut().push("import_start".into());
        }

        fn on_select_main_file(&mut self, candidates: &[String], selection: MainFileSelection) {
            self.events
                .borrow_mut()
                .push(format!("select {}", candidates.join(",")));
            if let Some(choice) = self.choice {
                selection.select(choice);
            }
        }

        fn on_model_finished(&mut self, _result: ImportResult<()>, _object: SceneObject) {}

        fn on_load_error(&mut self, _error: LoadError) {}
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn progress_implies_load_start() {
        let mut log = Log::default();
        let events = log.events.clone();
        let mut context = ImportContext::<()>::new(&mut log);

        context.file_list_progress(1, 2);
        context.file_list_progress(2, 2);
        context.file_load_progress(1, 2);
        context.import_started();

        assert_eq!(
            *events.borrow(),
            ["load_start", "file_list 1/2", "file_list 2/2", "file_load 1/2", "import_start"]
        );
    }

    #[test]
    fn late_progress_is_dropped() {
        let mut log = Log::default();
        let events = log.events.clone();
        let mut context = ImportContext::<()>::new(&mut log);

        context.load_started();
        context.import_started();
        context.file_load_progress(1, 1);
        context.load_started();
        context.import_started();

        assert_eq!(context.phase(), ImportPhase::Importing);
        assert_eq!(*events.borrow(), ["load_start", "import_start"]);
    }

    #[test]
    fn single_candidate_is_selected_without_asking() {
        let mut log = Log::default();
        let events = log.events.clone();
        let mut context = ImportContext::<()>::new(&mut log);

        let index = block_on(context.select_main_file(names(&["model.obj"])));
        assert_eq!(index, Ok(0));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn no_candidate_is_an_error() {
        let mut log = Log::default();
        let mut context = ImportContext::<()>::new(&mut log);
        let index = block_on(context.select_main_file(Vec::new()));
        assert_eq!(index, Err(ImportError::NoImportableFile));
    }

    #[test]
    fn several_candidates_ask_the_caller() {
        let mut log = Log {
            choice: Some(1),
            ..Default::default()
        };
        let events = log.events.clone();
        let mut context = ImportContext::<()>::new(&mut log);

        let index = block_on(context.select_main_file(names(&["a.obj", "b.stl"])));
        assert_eq!(index, Ok(1));
        assert_eq!(
            *events.borrow(),
            ["load_start", "import_start", "select a.obj,b.stl"]
        );
    }

    #[test]
    fn dropped_selection_fails_the_import() {
        let mut log = Log::default();
        let mut context = ImportContext::<()>::new(&mut log);
        let index = block_on(context.select_main_file(names(&["a.obj", "b.obj"])));
        assert_eq!(index, Err(ImportError::MainFileNotSelected));
    }

    #[test]
    fn out_of_range_selection_fails_the_import() {
        let mut log = Log {
            choice: Some(5),
            ..Default::default()
        };
        let mut context = ImportContext::<()>::new(&mut log);
        let index = block_on(context.select_main_file(names(&["a.obj", "b.obj"])));
        assert_eq!(
            index,
            Err(ImportError::InvalidMainFileIndex { index: 5, count: 2 })
        );
    }
}
