//! Tests for outside-interaction dismissal.
//!
//! The tests drive the guard through an in-memory document whose nodes are plain ids, which
//! lets them dispatch synthetic pointer events and inspect which listeners are still attached.


use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

use super::*;

/// Node id of the menu panel
pub const PANEL: u32 = 1;
/// Node id of a link inside the menu panel
pub const PANEL_LINK: u32 = 2;
/// Node id of the toggle control
pub const TOGGLE: u32 = 3;
/// Node id of page content outside the menu
pub const PAGE: u32 = 4;

struct Listener {
    id: usize,
    kind: PointerKind,
    callback: PointerCallback<u32>,
}

#[derive(Default)]
struct FakeDocumentInner {
    next_id: Cell<usize>,
    listeners: RefCell<Vec<Listener>>,
    removals: Cell<usize>,
    stray_removals: Cell<usize>,
    fail_on: Cell<Option<PointerKind>>,
}

/// In-memory document shared between a test and the guard under test
#[derive(Clone, Default)]
pub struct FakeDocument {
    inner: Rc<FakeDocumentInner>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that refuses listeners of one kind
    pub fn failing_on(kind: PointerKind) -> Self {
        let document = Self::new();
        document.inner.fail_on.set(Some(kind));
        document
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, kind: PointerKind) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    pub fn removals(&self) -> usize {
        self.inner.removals.get()
    }

    pub fn stray_removals(&self) -> usize {
        self.inner.stray_removals.get()
    }

    /// Dispatch a synthetic pointer event to every listener of `kind`
    pub fn dispatch(&self, kind: PointerKind, target: u32) {
        let callbacks: Vec<PointerCallback<u32>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| Rc::clone(&listener.callback))
            .collect();

        for callback in callbacks {
            callback(&target);
        }
    }
}

impl ListenerHost for FakeDocument {
    type Target = u32;
    type Handle = usize;

    fn add_listener(
        &self,
        kind: PointerKind,
        callback: PointerCallback<u32>,
    ) -> Result<usize, ListenerError> {
        if self.inner.fail_on.get() == Some(kind) {
            return Err(ListenerError::Register {
                event: kind.event_name(),
                reason: "refused by test document".to_string(),
            });
        }

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push(Listener { id, kind, callback });

        Ok(id)
    }

    fn remove_listener(&self, kind: PointerKind, handle: usize) {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|listener| !(listener.id == handle && listener.kind == kind));

        if listeners.len() == before {
            self.inner.stray_removals.set(self.inner.stray_removals.get() + 1);
        } else {
            self.inner.removals.set(self.inner.removals.get() + 1);
        }
    }
}

/// Region made of a fixed set of node ids that can be unmounted
pub struct FakeRegion {
    nodes: HashSet<u32>,
    mounted: Rc<Cell<bool>>,
}

impl FakeRegion {
    pub fn new(nodes: &[u32]) -> Self {
        Self {
            nodes: nodes.iter().copied().collect(),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Handle to mount or unmount the region after it was handed to a guard
    pub fn mounted(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.mounted)
    }
}

impl Region<u32> for FakeRegion {
    fn contains(&self, target: &u32) -> Option<bool> {
        if !self.mounted.get() {
            return None;
        }

        Some(self.nodes.contains(target))
    }
}

/// Panel and toggle regions of the navigation menu
pub fn menu_regions() -> Vec<Box<dyn Region<u32>>> {
    vec![
        Box::new(FakeRegion::new(&[PANEL, PANEL_LINK])),
        Box::new(FakeRegion::new(&[TOGGLE])),
    ]
}

/// Counter bumped by the dismiss callback
pub fn dismiss_counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    (count, move || counter.set(counter.get() + 1))
}
