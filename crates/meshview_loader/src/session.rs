use meshview_asset::{ResourceRevoker, ResourceUrlSet};
use meshview_scene::SharedMaterial;
use tracing::{debug, trace};

use crate::SessionError;

/// Where a [`LoadSession`] is in its lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// No load is running; a new one may start.
    #[default]
    Idle,
    /// The importer is reading and parsing the input files.
    Importing,
    /// The converter is building the scene object.
    Converting,
    /// The outcome is being delivered to the caller.
    Finishing,
}

/// Something that happened to the load a [`LoadSession`] tracks.
#[derive(Debug)]
pub enum LoadEvent {
    /// A load was requested.
    ImportStarted,
    /// The importer produced a model.
    ImportSucceeded,
    /// The importer failed.
    ImportFailed,
    /// The converter produced a scene object. Its default material and resources become the
    /// session's.
    ConversionCompleted {
        /// The default material of the new scene.
        default_material: Option<SharedMaterial>,
        /// The resources the new scene references.
        resource_urls: ResourceUrlSet,
    },
    /// The converter failed.
    ConversionFailed,
    /// The caller was told about the outcome.
    Finished,
}

impl LoadEvent {
    /// A short name for the event, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            LoadEvent::ImportStarted => "ImportStarted",
            LoadEvent::ImportSucceeded => "ImportSucceeded",
            LoadEvent::ImportFailed => "ImportFailed",
            LoadEvent::ConversionCompleted { .. } => "ConversionCompleted",
            LoadEvent::ConversionFailed => "ConversionFailed",
            LoadEvent::Finished => "Finished",
        }
    }
}

/// The state a [`ModelLoader`](crate::ModelLoader) keeps between and during loads.
///
/// ```text
///  Idle ──ImportStarted──▶ Importing ──ImportSucceeded──▶ Converting
///   ▲                          │                             │
///   │                     ImportFailed         ConversionCompleted / ConversionFailed
///   │                          ▼                             │
///   └────────Finished─────  Finishing ◀──────────────────────┘
/// ```
///
/// The default material and resources always belong to the most recently *completed* load; an
/// in-flight load's output only replaces them on [`LoadEvent::ConversionCompleted`].
#[derive(Debug, Default)]
pub struct LoadSession {
    state: LoadState,
    default_material: Option<SharedMaterial>,
    resource_urls: ResourceUrlSet,
}

impl LoadSession {
    /// Creates an idle session with no completed load.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Returns `true` unless the session is [`LoadState::Idle`].
    pub fn in_progress(&self) -> bool {
        self.state != LoadState::Idle
    }

    /// The default material of the most recently completed load.
    pub fn default_material(&self) -> Option<&SharedMaterial> {
        self.default_material.as_ref()
    }

    /// The resources of the most recently completed load.
    pub fn resource_urls(&self) -> &ResourceUrlSet {
        &self.resource_urls
    }

    /// Revokes the resources of the most recently completed load, returning how many there were.
    pub fn release_resources(&mut self, revoker: &dyn ResourceRevoker) -> usize {
        self.resource_urls.revoke_all(revoker)
    }

    /// Applies `event`, returning the new state.
    ///
    /// [`LoadEvent::ImportStarted`] outside of [`LoadState::Idle`] is rejected with
    /// [`SessionError::Busy`]; any other event that does not fit the current state is rejected
    /// with [`SessionError::InvalidTransition`]. A rejected event leaves the session unchanged.
    pub fn transition(&mut self, event: LoadEvent) -> Result<LoadState, SessionError> {
        let next = match (self.state, event) {
            (LoadState::Idle, LoadEvent::ImportStarted) => LoadState::Importing,
            (_, LoadEvent::ImportStarted) => return Err(SessionError::Busy),
            (LoadState::Importing, LoadEvent::ImportSucceeded) => LoadState::Converting,
            (LoadState::Importing, LoadEvent::ImportFailed)
            | (LoadState::Converting, LoadEvent::ConversionFailed) => LoadState::Finishing,
            (
                LoadState::Converting,
                LoadEvent::ConversionCompleted {
                    default_material,
                    resource_urls,
                },
            ) => {
                debug_assert!(
                    self.resource_urls.is_empty(),
                    "resources of the previous load must be released before a new load starts"
                );
                self.default_material = default_material;
                self.resource_urls = resource_urls;
                debug!(
                    "load completed with {} transient resources",
                    self.resource_urls.len()
                );
                LoadState::Finishing
            }
            (LoadState::Finishing, LoadEvent::Finished) => LoadState::Idle,
            (state, event) => {
                return Err(SessionError::InvalidTransition {
                    state,
                    event: event.name(),
                });
            }
        };
        trace!("load session {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }
}
