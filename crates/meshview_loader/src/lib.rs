//! Loads 3D models into renderable scene objects, one load at a time.
//!
//! A [`ModelLoader`] runs every load as a pipeline of stages on a
//! [`LocalTaskPool`](meshview_tasks::LocalTaskPool):
//!
//! 1. **import**: an [`Importer`] reads the [`InputFile`](meshview_asset::InputFile)s, picks the
//!    main file and parses it into a model.
//! 2. **convert**: a [`Converter`] turns the model into a
//!    [`SceneObject`](meshview_scene::SceneObject), minting transient resources as it goes.
//! 3. **orient**: the root is rotated so the model's declared up axis matches the viewer's.
//! 4. **deliver**: the caller's [`LoadCallbacks::on_model_finished`] receives the result.
//!
//! Progress is reported through [`LoadCallbacks`] in a fixed order, and every load ends in exactly
//! one of [`LoadCallbacks::on_model_finished`] or [`LoadCallbacks::on_load_error`]. While a load
//! runs, further load requests are ignored.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod callbacks;
mod convert;
mod error;
mod import;
mod loader;
mod pipeline;
mod session;
mod settings;

pub use callbacks::*;
pub use convert::*;
pub use error::*;
pub use import::*;
pub use loader::*;
pub use session::*;
pub use settings::*;

/// Rusty Object Notation, the format loader settings are read from.
pub use ron;

/// The loader prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        ConversionError, ConversionParams, ConvertContext, ConvertedModel, Converter,
        ImportContext, ImportError, ImportResult, ImportSettings, Importer, LoadCallbacks,
        LoadError, MainFileSelection, ModelLoader, ModelLoaderSettings,
    };
}
