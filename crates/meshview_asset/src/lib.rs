//! Inputs and transient resources of a model load.
//!
//! An import starts from a list of [`InputFile`]s. While converting, textures and buffers are
//! materialized as [`ResourceHandle`]s minted by a [`ResourceRegistry`]; the handles produced by
//! one load are collected in a [`ResourceUrlSet`] that revokes them all at once when the load's
//! output is replaced or discarded.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod handle;
mod input;
mod registry;
mod url_set;

pub use handle::*;
pub use input::*;
pub use registry::*;
pub use url_set::*;

/// The asset prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        InputFile, ResourceHandle, ResourceRegistry, ResourceRevoker, ResourceUrlSet,
        input_files_from_paths, input_files_from_urls,
    };
}
