use thiserror::Error;

use crate::LoadState;

/// Errors raised while reading and parsing the input files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// None of the input files could be imported.
    #[error("no importable file found")]
    NoImportableFile,
    /// An input file could not be read.
    #[error("failed to load file {name}: {message}")]
    FailedToLoadFile {
        /// Name of the file.
        name: String,
        /// What went wrong.
        message: String,
    },
    /// The main file was read but could not be parsed.
    #[error("failed to import {main_file}: {message}")]
    ImportFailed {
        /// Name of the main file.
        main_file: String,
        /// What went wrong.
        message: String,
    },
    /// The [`MainFileSelection`](crate::MainFileSelection) was dropped without choosing a file.
    #[error("no main file was selected")]
    MainFileNotSelected,
    /// The chosen main file index does not name a candidate.
    #[error("main file index {index} is out of range for {count} candidates")]
    InvalidMainFileIndex {
        /// The index that was chosen.
        index: usize,
        /// How many candidates were offered.
        count: usize,
    },
}

/// Errors raised while turning an imported model into a scene object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A texture referenced by the model could not be decoded.
    #[error("failed to load texture {name}: {message}")]
    Texture {
        /// Name of the texture.
        name: String,
        /// What went wrong.
        message: String,
    },
    /// The model could not be converted.
    #[error("failed to convert model: {0}")]
    Failed(String),
}

/// The error reported through [`LoadCallbacks::on_load_error`](crate::LoadCallbacks::on_load_error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The import stage failed.
    #[error(transparent)]
    Import(#[from] ImportError),
    /// The conversion stage failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors returned by [`LoadSession::transition`](crate::LoadSession::transition).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A load was requested while another one is in progress.
    #[error("a model is already loading")]
    Busy,
    /// The event cannot happen in the session's current state.
    #[error("cannot handle {event} while {state:?}")]
    InvalidTransition {
        /// The state the session was in.
        state: LoadState,
        /// The rejected event.
        event: &'static str,
    },
}

/// Errors returned when reading settings from RON.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The text is not valid RON for the settings type.
    #[error("could not parse settings: {0}")]
    Ron(#[from] ron::error::SpannedError),
}
