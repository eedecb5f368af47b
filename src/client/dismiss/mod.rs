//! Outside-interaction dismissal for transient overlays.
//!
//! An overlay that should close when the visitor interacts anywhere else on the page needs a
//! document-wide pointer listener, but only while the overlay is shown. [`OutsideDismiss`]
//! owns those listeners: acquiring it registers one listener per [`PointerKind`] and dropping
//! it removes every listener it registered, exactly once, whichever way the overlay closed.
//!
//! The listener host is abstracted behind [`ListenerHost`] so the guard can be driven by the
//! browser document on the web and by an in-memory host elsewhere.

#[cfg(feature = "web")]
pub mod document;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use dioxus_logger::tracing;
use thiserror::Error;

/// Pointer interactions that count as "interacting with the page"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    MouseDown,
    TouchStart,
}

impl PointerKind {
    pub const ALL: [PointerKind; 2] = [PointerKind::MouseDown, PointerKind::TouchStart];

    /// DOM event name the listener is registered under
    pub fn event_name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
        }
    }
}

#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Failed to register {event} listener: {reason}")]
    Register { event: &'static str, reason: String },
}

/// Callback invoked with the target of every pointer event on the host
pub type PointerCallback<T> = Rc<dyn Fn(&T)>;

/// Something global pointer listeners can be attached to, usually the document
pub trait ListenerHost {
    /// The node an event was dispatched to
    type Target: 'static;
    /// Token needed to remove a listener again
    type Handle;

    fn add_listener(
        &self,
        kind: PointerKind,
        callback: PointerCallback<Self::Target>,
    ) -> Result<Self::Handle, ListenerError>;

    fn remove_listener(&self, kind: PointerKind, handle: Self::Handle);
}

/// An area of the page an interaction can land inside of
pub trait Region<T> {
    /// Whether `target` lies inside this region, `None` if the region is not currently mounted
    fn contains(&self, target: &T) -> Option<bool>;
}

/// Whether `target` lies outside every region
///
/// All regions must be mounted for an interaction to count as outside; while any region is
/// missing nothing is dismissed.
pub fn is_outside<T>(regions: &[Box<dyn Region<T>>], target: &T) -> bool {
    regions
        .iter()
        .all(|region| region.contains(target) == Some(false))
}

/// Guard holding the outside-dismiss listeners for as long as it lives
pub struct OutsideDismiss<H: ListenerHost> {
    host: H,
    registered: Vec<(PointerKind, H::Handle)>,
}

impl<H: ListenerHost> OutsideDismiss<H> {
    /// Register listeners for every [`PointerKind`] on `host`
    ///
    /// `on_dismiss` runs whenever a pointer event lands outside all `regions`. A listener that
    /// fails to register is logged and skipped, the remaining ones stay active.
    pub fn acquire<F>(host: H, regions: Vec<Box<dyn Region<H::Target>>>, on_dismiss: F) -> Self
    where
        F: Fn() + 'static,
    {
        let regions: Rc<[Box<dyn Region<H::Target>>]> = regions.into();
        let callback: PointerCallback<H::Target> = Rc::new(move |target: &H::Target| {
            if is_outside(&regions, target) {
                on_dismiss();
            }
        });

        let mut registered = Vec::with_capacity(PointerKind::ALL.len());
        for kind in PointerKind::ALL {
            match host.add_listener(kind, Rc::clone(&callback)) {
                Ok(handle) => registered.push((kind, handle)),
                Err(e) => tracing::warn!(event = kind.event_name(), "{}", e),
            }
        }

        tracing::debug!(
            listeners = registered.len(),
            "Acquired outside-dismiss listeners"
        );

        Self { host, registered }
    }

    /// Number of listeners currently registered on the host
    pub fn listener_count(&self) -> usize {
        self.registered.len()
    }

    /// Remove all listeners now instead of at the end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl<H: ListenerHost> Drop for OutsideDismiss<H> {
    fn drop(&mut self) {
        let released = self.registered.len();
        for (kind, handle) in self.registered.drain(..) {
            self.host.remove_listener(kind, handle);
        }

        tracing::debug!(listeners = released, "Released outside-dismiss listeners");
    }
}

/// Holds an [`OutsideDismiss`] guard only while the overlay it belongs to is open
pub struct DismissSlot<H: ListenerHost> {
    guard: Option<OutsideDismiss<H>>,
}

impl<H: ListenerHost> Default for DismissSlot<H> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<H: ListenerHost> DismissSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the slot in line with the overlay's open state
    ///
    /// Acquires through `acquire` when the overlay opened without a guard held and drops the
    /// guard when the overlay closed. `acquire` may return `None` if no host is available.
    pub fn sync<F>(&mut self, open: bool, acquire: F)
    where
        F: FnOnce() -> Option<OutsideDismiss<H>>,
    {
        match (open, self.guard.is_some()) {
            (true, false) => self.guard = acquire(),
            (false, true) => self.clear(),
            _ => {}
        }
    }

    /// Drop the guard if one is held
    pub fn clear(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }
}
