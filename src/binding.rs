//! View Bindings
//!
//! Bridges the collection controller to Leptos: the controller lives in
//! local arena storage behind a `Copy` handle, and every DOM view
//! registers a [`ViewBinding`] whose signals the controller writes on
//! refresh.

use collection_viewer::{Entity, IndexedCollectionViewer, View, ViewerState};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::SharedStore;

pub type Viewer<T> = IndexedCollectionViewer<T, SharedStore>;

// ========================
// Binding
// ========================

/// Reactive mirror of one view's slice of controller state
pub struct ViewBinding<T: Send + Sync + 'static> {
    pub state: RwSignal<ViewerState>,
    pub current: RwSignal<Option<T>>,
    pub index: RwSignal<Option<usize>>,
    pub items: RwSignal<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for ViewBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ViewBinding<T> {}

impl<T: Send + Sync + 'static> ViewBinding<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewerState::Empty),
            current: RwSignal::new(None),
            index: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Tracked: is the empty-state presentation active
    pub fn is_empty(&self) -> bool {
        self.state.get() == ViewerState::Empty
    }

    /// Tracked: is `index` the selected position
    pub fn is_selected(&self, index: usize) -> bool {
        self.index.get() == Some(index)
    }

    /// Tracked: project a field out of the current item
    pub fn current_with<R: Default>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.current.with(|current| current.as_ref().map(f).unwrap_or_default())
    }
}

impl<T> View<T> for ViewBinding<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn set_state(&mut self, state: ViewerState) {
        if self.state.get_untracked() != state {
            self.state.set(state);
        }
        if state == ViewerState::Empty {
            if self.current.with_untracked(Option::is_some) {
                self.current.set(None);
            }
            if self.index.get_untracked().is_some() {
                self.index.set(None);
            }
        }
    }

    fn render(&mut self, item: &T, index: usize, items: &[T]) {
        if self.index.get_untracked() != Some(index) {
            self.index.set(Some(index));
        }
        if self.current.with_untracked(|current| current.as_ref() != Some(item)) {
            self.current.set(Some(item.clone()));
        }
        if self.items.with_untracked(|known| known.as_slice() != items) {
            self.items.set(items.to_vec());
        }
    }
}

// ========================
// Handle
// ========================

/// `Copy` handle to a controller, usable from any event handler
pub struct ViewerHandle<T: Entity + 'static> {
    inner: StoredValue<Viewer<T>, LocalStorage>,
}

impl<T: Entity + 'static> Clone for ViewerHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity + 'static> Copy for ViewerHandle<T> {}

impl<T> ViewerHandle<T>
where
    T: Entity + Serialize + DeserializeOwned + PartialEq + Send + Sync + 'static,
{
    pub fn new(viewer: Viewer<T>) -> Self {
        Self {
            inner: StoredValue::new_local(viewer),
        }
    }

    /// Register a fresh binding and bring it up to date. The binding is
    /// deregistered when the calling owner is cleaned up.
    pub fn bind(&self) -> ViewBinding<T> {
        let binding = ViewBinding::new();
        let registered = self.inner.try_update_value(|viewer| {
            let handle = viewer.register_view(binding);
            viewer.refresh_views();
            handle
        });

        if let Some(handle) = registered {
            let inner = self.inner;
            on_cleanup(move || {
                inner.update_value(|viewer| {
                    viewer.deregister_view(handle);
                });
            });
        }
        binding
    }

    pub fn set_cursor(&self, index: usize) {
        self.inner
            .update_value(|viewer| viewer.set_cursor(index as isize));
    }

    pub fn next(&self) {
        self.inner.update_value(|viewer| viewer.next());
    }

    pub fn prev(&self) {
        self.inner.update_value(|viewer| viewer.prev());
    }

    pub fn jump_to(&self, id: T::Id) {
        self.inner.update_value(|viewer| viewer.jump_to(id));
    }

    pub fn current_id(&self) -> Option<T::Id> {
        self.inner
            .with_value(|viewer| viewer.current_item().map(|item| item.id()))
    }

    pub fn current_item(&self) -> Option<T> {
        self.inner
            .with_value(|viewer| viewer.current_item().cloned())
    }

    pub fn collection(&self) -> Vec<T> {
        self.inner.with_value(|viewer| viewer.collection().to_vec())
    }

    pub fn len(&self) -> usize {
        self.inner.with_value(|viewer| viewer.len())
    }

    pub fn view_count(&self) -> usize {
        self.inner.with_value(|viewer| viewer.view_count())
    }
}
