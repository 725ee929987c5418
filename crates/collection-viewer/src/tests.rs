//! Controller Tests
//!
//! Behaviour of `IndexedCollectionViewer` against an in-memory store.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::{Deserialize, Serialize};

    use crate::{
        encode, IndexedCollectionViewer, Item, ItemId, KeyValueStore, MemoryStore, StoreError,
        StoreResult, View, ViewerConfig, ViewerError, ViewerState,
    };

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Picture {
        url: String,
        description: String,
    }

    type Image = Item<Picture>;

    const KEY: &str = "galleryTest";

    fn picture(id: u32) -> Image {
        Item::new(
            id,
            Picture {
                url: format!("assets/{}.png", id),
                description: format!("picture {}", id),
            },
        )
    }

    fn pictures(ids: &[u32]) -> Vec<Image> {
        ids.iter().map(|id| picture(*id)).collect()
    }

    fn config() -> ViewerConfig {
        ViewerConfig::new(KEY, 1)
    }

    fn setup(ids: &[u32]) -> (Rc<MemoryStore>, IndexedCollectionViewer<Image, Rc<MemoryStore>>) {
        let store = Rc::new(MemoryStore::new());
        let viewer = IndexedCollectionViewer::initialize(&pictures(ids), config(), Rc::clone(&store));
        (store, viewer)
    }

    /// One observed view call
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        State(ViewerState),
        Render { id: ItemId, index: usize, len: usize },
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingView {
        fn take(&self) -> Vec<Call> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    impl View<Image> for RecordingView {
        fn set_state(&mut self, state: ViewerState) {
            self.calls.borrow_mut().push(Call::State(state));
        }

        fn render(&mut self, item: &Image, index: usize, items: &[Image]) {
            self.calls.borrow_mut().push(Call::Render {
                id: item.id,
                index,
                len: items.len(),
            });
        }
    }

    /// Store whose reads and writes can be made to fail
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            if self.fail_reads {
                return Err(StoreError::Unavailable("no storage".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_writes {
                return Err(StoreError::Rejected("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }
    }

    // ========================
    // Initialization
    // ========================

    #[test]
    fn test_seeds_defaults_on_first_run() {
        let (store, viewer) = setup(&[1, 2, 3]);

        assert_eq!(viewer.collection(), pictures(&[1, 2, 3]).as_slice());
        assert_eq!(viewer.cursor(), Some(0));
        assert_eq!(viewer.state(), ViewerState::Ready);
        assert_eq!(store.write_count(), 1);
        assert!(store.get(KEY).unwrap().is_some());
        assert!(viewer.last_error().is_none());
    }

    #[test]
    fn test_snapshot_survives_new_defaults() {
        let (store, _) = setup(&[1, 2, 3]);

        let second =
            IndexedCollectionViewer::initialize(&pictures(&[9, 8]), config(), Rc::clone(&store));

        assert_eq!(second.collection(), pictures(&[1, 2, 3]).as_slice());
        // Loading a valid snapshot does not write
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_seed_version_change_reseeds() {
        let (store, _) = setup(&[1, 2, 3]);

        let bumped = ViewerConfig::new(KEY, 2);
        let viewer =
            IndexedCollectionViewer::initialize(&pictures(&[4, 5]), bumped, Rc::clone(&store));

        assert_eq!(viewer.collection(), pictures(&[4, 5]).as_slice());
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_legacy_array_snapshot_is_reseeded() {
        let store = Rc::new(MemoryStore::new());
        let legacy = serde_json::to_string(&pictures(&[7])).unwrap();
        store.set(KEY, &legacy).unwrap();

        let viewer =
            IndexedCollectionViewer::initialize(&pictures(&[1, 2]), config(), Rc::clone(&store));

        assert_eq!(viewer.collection(), pictures(&[1, 2]).as_slice());
        assert!(store.get(KEY).unwrap().unwrap().starts_with(r#"{"version":1"#));
    }

    #[test]
    fn test_legacy_array_kept_under_version_zero() {
        let store = Rc::new(MemoryStore::new());
        let legacy = serde_json::to_string(&pictures(&[7])).unwrap();
        store.set(KEY, &legacy).unwrap();

        let viewer = IndexedCollectionViewer::initialize(
            &pictures(&[1, 2]),
            ViewerConfig::new(KEY, 0),
            Rc::clone(&store),
        );

        assert_eq!(viewer.collection(), pictures(&[7]).as_slice());
    }

    #[test]
    fn test_malformed_snapshot_falls_back() {
        let store = Rc::new(MemoryStore::new());
        store.set(KEY, "{not json").unwrap();

        let viewer =
            IndexedCollectionViewer::initialize(&pictures(&[1, 2]), config(), Rc::clone(&store));

        assert_eq!(viewer.collection(), pictures(&[1, 2]).as_slice());
        assert!(matches!(
            viewer.last_error(),
            Some(ViewerError::PersistenceRead { .. })
        ));
        // One write from the test setup, one from the fallback
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let store = FlakyStore {
            fail_reads: true,
            fail_writes: true,
            ..Default::default()
        };

        let mut viewer = IndexedCollectionViewer::initialize(&pictures(&[1, 2, 3]), config(), store);

        assert_eq!(viewer.len(), 3);
        assert!(matches!(
            viewer.last_error(),
            Some(ViewerError::PersistenceWrite { .. })
        ));

        viewer.set_cursor(2);
        assert_eq!(viewer.current_item().map(|p| p.id), Some(ItemId(3)));
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let (store, viewer) = setup(&[1, 2, 1, 3, 2]);

        assert_eq!(viewer.collection(), pictures(&[1, 2, 3]).as_slice());
        let stored = store.get(KEY).unwrap().unwrap();
        assert_eq!(stored, encode(1, &pictures(&[1, 2, 3])).unwrap());
    }

    // ========================
    // Cursor
    // ========================

    #[test]
    fn test_set_cursor_wraps_modulo_length() {
        for len in 1..=5u32 {
            let ids: Vec<u32> = (1..=len).collect();
            let (_, mut viewer) = setup(&ids);
            let l = len as isize;
            for n in -12..=12isize {
                viewer.set_cursor(n);
                let expected = (((n % l) + l) % l) as usize;
                assert_eq!(viewer.cursor(), Some(expected), "len={} n={}", len, n);
            }
        }
    }

    #[test]
    fn test_set_cursor_extreme_values() {
        let (_, mut viewer) = setup(&[1, 2, 3]);

        viewer.set_cursor(isize::MIN);
        assert!(viewer.cursor().unwrap() < 3);
        viewer.set_cursor(isize::MAX);
        assert!(viewer.cursor().unwrap() < 3);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let (_, mut viewer) = setup(&[1, 2, 3]);

        viewer.prev();
        assert_eq!(viewer.cursor(), Some(2));
        viewer.next();
        assert_eq!(viewer.cursor(), Some(0));
        viewer.next();
        assert_eq!(viewer.cursor(), Some(1));
    }

    #[test]
    fn test_jump_to() {
        let (_, mut viewer) = setup(&[10, 20, 30]);

        viewer.jump_to(ItemId(30));
        assert_eq!(viewer.cursor(), Some(2));

        viewer.jump_to(ItemId(99));
        assert_eq!(viewer.cursor(), Some(2));
        assert_eq!(viewer.last_error(), Some(&ViewerError::LookupMiss("99".to_string())));
        assert_eq!(
            viewer.last_error().map(ToString::to_string).as_deref(),
            Some("no item with id 99")
        );

        assert_eq!(viewer.find_index_by_id(ItemId(20)), Some(1));
        assert_eq!(viewer.find_index_by_id(ItemId(21)), None);
    }

    // ========================
    // Views
    // ========================

    #[test]
    fn test_refresh_renders_current_item() {
        let (_, mut viewer) = setup(&[1, 2, 3]);
        let view = RecordingView::default();
        viewer.register_view(view.clone());

        viewer.refresh_views();
        assert_eq!(
            view.take(),
            vec![
                Call::State(ViewerState::Ready),
                Call::Render {
                    id: ItemId(1),
                    index: 0,
                    len: 3
                },
            ]
        );
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let (_, mut viewer) = setup(&[1, 2, 3]);
        let first = RecordingView::default();
        let second = RecordingView::default();
        viewer.register_view(first.clone());
        viewer.register_view(second.clone());
        viewer.set_cursor(1);
        first.take();
        second.take();

        viewer.refresh_views();
        let a = (first.take(), second.take());
        viewer.refresh_views();
        let b = (first.take(), second.take());

        assert_eq!(a, b);
        assert_eq!(a.0, a.1);
    }

    #[test]
    fn test_every_mutation_refreshes_all_views() {
        let (_, mut viewer) = setup(&[1, 2, 3]);
        let view = RecordingView::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        viewer.register_view(view.clone());
        viewer.register_fn(move |item: &Image, index, _| sink.borrow_mut().push((item.id, index)));

        viewer.set_cursor(-1);
        viewer.jump_to(ItemId(2));
        viewer.next();

        let renders: Vec<usize> = view
            .take()
            .into_iter()
            .filter_map(|call| match call {
                Call::Render { index, .. } => Some(index),
                Call::State(_) => None,
            })
            .collect();
        assert_eq!(renders, vec![2, 1, 2]);
        assert_eq!(
            *seen.borrow(),
            vec![(ItemId(3), 2), (ItemId(2), 1), (ItemId(3), 2)]
        );
    }

    #[test]
    fn test_deregistered_view_is_not_called() {
        let (_, mut viewer) = setup(&[1, 2]);
        let kept = RecordingView::default();
        let removed = RecordingView::default();
        viewer.register_view(kept.clone());
        let handle = viewer.register_view(removed.clone());

        assert!(viewer.deregister_view(handle));
        assert!(!viewer.deregister_view(handle));
        viewer.next();

        assert_eq!(viewer.view_count(), 1);
        assert!(!kept.take().is_empty());
        assert!(removed.take().is_empty());
    }

    #[test]
    fn test_instances_do_not_interfere() {
        let store = Rc::new(MemoryStore::new());
        let mut gallery = IndexedCollectionViewer::initialize(
            &pictures(&[1, 2, 3]),
            ViewerConfig::new("gallery", 1),
            Rc::clone(&store),
        );
        let mut music = IndexedCollectionViewer::initialize(
            &pictures(&[4, 5]),
            ViewerConfig::new("music", 1),
            Rc::clone(&store),
        );

        gallery.set_cursor(2);
        music.next();

        assert_eq!(gallery.cursor(), Some(2));
        assert_eq!(music.cursor(), Some(1));
        assert_eq!(store.len(), 2);
    }

    // ========================
    // Scenarios
    // ========================

    #[test]
    fn test_three_item_scenario() {
        let (_, mut viewer) = setup(&[1, 2, 3]);
        let view = RecordingView::default();
        viewer.register_view(view.clone());
        viewer.refresh_views();

        assert_eq!(viewer.cursor(), Some(0));
        assert_eq!(viewer.state(), ViewerState::Ready);
        assert_eq!(viewer.current_item().map(|p| p.id), Some(ItemId(1)));

        viewer.set_cursor(-1);
        assert_eq!(viewer.cursor(), Some(2));

        viewer.jump_to(ItemId(2));
        assert_eq!(viewer.cursor(), Some(1));
    }

    #[test]
    fn test_empty_scenario() {
        let (store, mut viewer) = setup(&[]);
        let view = RecordingView::default();
        viewer.register_view(view.clone());

        assert_eq!(viewer.state(), ViewerState::Empty);
        assert_eq!(viewer.cursor(), None);
        assert_eq!(store.write_count(), 1);

        viewer.set_cursor(0);
        viewer.next();
        viewer.prev();
        viewer.jump_to(ItemId(1));
        assert_eq!(viewer.state(), ViewerState::Empty);
        assert_eq!(viewer.cursor(), None);
        assert!(viewer.current_item().is_none());
        assert!(view.take().is_empty());

        viewer.refresh_views();
        assert_eq!(view.take(), vec![Call::State(ViewerState::Empty)]);
    }
}
