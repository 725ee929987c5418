//! Collection Viewer
//!
//! A persisted, ordered collection with a single cursor and a set of
//! views that are kept consistent with it.
//!
//! The controller never talks to a browser directly: persistence goes
//! through [`KeyValueStore`] and rendering goes through [`View`], so the
//! same logic drives the web widgets and the native unit tests.

mod entity;
mod error;
mod placement;
mod snapshot;
mod store;
mod viewer;

#[cfg(test)]
mod tests;

pub use entity::{Entity, Item, ItemId};
pub use error::{StoreError, StoreResult, ViewerError};
pub use placement::{
    clear_position, load_position, random_position, save_position, OverlayPosition,
    PlacementConfig, Viewport,
};
pub use snapshot::{decode, encode, Snapshot, LEGACY_SNAPSHOT_VERSION};
pub use store::{KeyValueStore, MemoryStore};
pub use viewer::{FnView, IndexedCollectionViewer, View, ViewHandle, ViewerConfig, ViewerState};
