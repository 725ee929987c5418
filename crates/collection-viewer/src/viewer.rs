//! Indexed Collection Viewer
//!
//! Owns one collection and its cursor, persists the collection through a
//! [`KeyValueStore`], and funnels every mutation through a single refresh
//! that brings all registered views up to date.

use std::fmt;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entity::Entity;
use crate::error::ViewerError;
use crate::snapshot;
use crate::store::KeyValueStore;

// ========================
// Configuration
// ========================

/// Where and under which content version a collection is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Key of the snapshot in the key-value store
    pub storage_key: String,
    /// Version of the shipped default content. A snapshot written under a
    /// different version is replaced by the defaults.
    pub seed_version: u32,
}

impl ViewerConfig {
    pub fn new(storage_key: impl Into<String>, seed_version: u32) -> Self {
        Self {
            storage_key: storage_key.into(),
            seed_version,
        }
    }
}

// ========================
// Views
// ========================

/// Whether the collection has anything to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// No items: the empty-state presentation is active
    Empty,
    /// At least one item and a valid cursor
    Ready,
}

/// A render target kept consistent with the cursor
pub trait View<T> {
    /// Called first on every refresh. Views with an empty-state
    /// presentation toggle it here.
    fn set_state(&mut self, _state: ViewerState) {}

    /// Called on every refresh while the collection is non-empty
    fn render(&mut self, item: &T, index: usize, items: &[T]);
}

/// Adapter turning a closure into a [`View`]
pub struct FnView<F>(pub F);

impl<T, F> View<T> for FnView<F>
where
    F: FnMut(&T, usize, &[T]),
{
    fn render(&mut self, item: &T, index: usize, items: &[T]) {
        (self.0)(item, index, items)
    }
}

/// Registration token returned by [`IndexedCollectionViewer::register_view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

// ========================
// Controller
// ========================

pub struct IndexedCollectionViewer<T: Entity, S> {
    config: ViewerConfig,
    store: S,
    items: Vec<T>,
    cursor: Option<usize>,
    views: Vec<(ViewHandle, Box<dyn View<T>>)>,
    next_handle: u64,
    last_error: Option<ViewerError>,
}

impl<T, S> IndexedCollectionViewer<T, S>
where
    T: Entity + Serialize + DeserializeOwned + 'static,
    S: KeyValueStore,
{
    /// Load the collection from `store`, or seed it from `defaults`.
    ///
    /// A missing, unreadable or outdated snapshot is replaced by a copy of
    /// `defaults`, which is written back immediately. Never fails: if the
    /// store is unusable the collection lives in memory only.
    pub fn initialize(defaults: &[T], config: ViewerConfig, store: S) -> Self {
        let mut viewer = Self {
            config,
            store,
            items: Vec::new(),
            cursor: None,
            views: Vec::new(),
            next_handle: 0,
            last_error: None,
        };

        let (items, needs_write) = match viewer.read_snapshot() {
            Some(items) => (items, false),
            None => (defaults.to_vec(), true),
        };
        let (items, dropped) = dedup_by_id(items);
        if dropped > 0 {
            warn!(
                "[viewer] {}: dropped {} item(s) with duplicate ids",
                viewer.config.storage_key, dropped
            );
        }

        viewer.items = items;
        viewer.cursor = if viewer.items.is_empty() { None } else { Some(0) };
        if needs_write || dropped > 0 {
            viewer.persist();
        }

        info!(
            "[viewer] {}: {} item(s) ready",
            viewer.config.storage_key,
            viewer.items.len()
        );
        viewer.refresh_views();
        viewer
    }

    /// Returns the stored collection if it can be used as-is
    fn read_snapshot(&mut self) -> Option<Vec<T>> {
        let key = self.config.storage_key.clone();
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("[viewer] {}: no snapshot, seeding defaults", key);
                return None;
            }
            Err(err) => {
                self.record(ViewerError::PersistenceRead {
                    key,
                    reason: err.to_string(),
                });
                return None;
            }
        };

        match snapshot::decode::<T>(&raw) {
            Ok(snapshot) if snapshot.version == self.config.seed_version => Some(snapshot.items),
            Ok(snapshot) => {
                info!(
                    "[viewer] {}: snapshot version {} differs from seed version {}, re-seeding",
                    key, snapshot.version, self.config.seed_version
                );
                None
            }
            Err(err) => {
                self.record(ViewerError::PersistenceRead {
                    key,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    /// Write the collection to the store, logging any failure
    fn persist(&mut self) {
        let key = self.config.storage_key.clone();
        let raw = match snapshot::encode(self.config.seed_version, &self.items) {
            Ok(raw) => raw,
            Err(err) => {
                self.record(ViewerError::PersistenceWrite {
                    key,
                    reason: err.to_string(),
                });
                return;
            }
        };
        if let Err(err) = self.store.set(&key, &raw) {
            self.record(ViewerError::PersistenceWrite {
                key,
                reason: err.to_string(),
            });
        }
    }

    fn record(&mut self, err: ViewerError) {
        match &err {
            ViewerError::LookupMiss(_) => debug!("[viewer] {}", err),
            _ => warn!("[viewer] {}", err),
        }
        self.last_error = Some(err);
    }

    // ========================
    // Cursor
    // ========================

    /// Move the cursor, wrapping in both directions. No-op when empty.
    pub fn set_cursor(&mut self, index: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.cursor = Some(index.rem_euclid(len as isize) as usize);
        self.refresh_views();
    }

    /// Advance to the next item, wrapping to the first
    pub fn next(&mut self) {
        if let Some(cursor) = self.cursor {
            self.set_cursor(cursor as isize + 1);
        }
    }

    /// Step back to the previous item, wrapping to the last
    pub fn prev(&mut self) {
        if let Some(cursor) = self.cursor {
            self.set_cursor(cursor as isize - 1);
        }
    }

    /// Linear scan for the first item with `id`
    pub fn find_index_by_id(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Move the cursor to the item with `id`. Unknown ids are ignored.
    pub fn jump_to(&mut self, id: T::Id) {
        match self.find_index_by_id(id) {
            Some(index) => self.set_cursor(index as isize),
            None => self.record(ViewerError::LookupMiss(id.to_string())),
        }
    }

    // ========================
    // Views
    // ========================

    /// Register a view. It is first rendered on the next refresh.
    pub fn register_view<V>(&mut self, view: V) -> ViewHandle
    where
        V: View<T> + 'static,
    {
        let handle = ViewHandle(self.next_handle);
        self.next_handle += 1;
        self.views.push((handle, Box::new(view)));
        handle
    }

    /// Register a closure as a view
    pub fn register_fn<F>(&mut self, render: F) -> ViewHandle
    where
        F: FnMut(&T, usize, &[T]) + 'static,
    {
        self.register_view(FnView(render))
    }

    /// Remove a view. Returns `false` if the handle was not registered.
    pub fn deregister_view(&mut self, handle: ViewHandle) -> bool {
        let before = self.views.len();
        self.views.retain(|(h, _)| *h != handle);
        self.views.len() != before
    }

    /// Bring every registered view up to date with the cursor
    pub fn refresh_views(&mut self) {
        let state = self.state();
        self.cursor = match state {
            ViewerState::Empty => None,
            ViewerState::Ready => {
                let last = self.items.len() - 1;
                Some(self.cursor.unwrap_or(0).min(last))
            }
        };

        let cursor = self.cursor;
        let items = &self.items;
        for (_, view) in self.views.iter_mut() {
            view.set_state(state);
            if let Some(index) = cursor {
                view.render(&items[index], index, items);
            }
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn state(&self) -> ViewerState {
        if self.items.is_empty() {
            ViewerState::Empty
        } else {
            ViewerState::Ready
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_item(&self) -> Option<&T> {
        self.cursor.and_then(|index| self.items.get(index))
    }

    pub fn collection(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Most recent persistence or lookup problem, if any
    pub fn last_error(&self) -> Option<&ViewerError> {
        self.last_error.as_ref()
    }
}

impl<T: Entity, S> fmt::Debug for IndexedCollectionViewer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedCollectionViewer")
            .field("config", &self.config)
            .field("len", &self.items.len())
            .field("cursor", &self.cursor)
            .field("views", &self.views.len())
            .finish()
    }
}

/// Keep the first item for each id. Returns the kept items and how many
/// were dropped.
fn dedup_by_id<T: Entity>(items: Vec<T>) -> (Vec<T>, usize) {
    let total = items.len();
    let mut seen: Vec<T::Id> = Vec::with_capacity(total);
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| {
            let id = item.id();
            if seen.contains(&id) {
                false
            } else {
                seen.push(id);
                true
            }
        })
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}
