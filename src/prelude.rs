#[doc(hidden)]
pub use crate::{
    asset::prelude::*, loader::prelude::*, scene::prelude::*, tasks::prelude::*,
    transform::prelude::*,
};

#[doc(hidden)]
#[cfg(feature = "log")]
pub use crate::log::prelude::*;
