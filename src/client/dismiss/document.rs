//! Browser document as a [`ListenerHost`].

use dioxus_logger::tracing;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Event, Node};

use super::{ListenerError, ListenerHost, PointerCallback, PointerKind, Region};

/// The current page's document
#[derive(Clone)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    /// The document of the current window, `None` outside a browser
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// A region backed by the element with the given id
    pub fn region(&self, id: &'static str) -> ElementRegion {
        ElementRegion {
            document: self.document.clone(),
            id,
        }
    }
}

impl ListenerHost for DocumentHost {
    type Target = Node;
    type Handle = Closure<dyn FnMut(Event)>;

    fn add_listener(
        &self,
        kind: PointerKind,
        callback: PointerCallback<Node>,
    ) -> Result<Self::Handle, ListenerError> {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
            else {
                return;
            };

            callback(&target);
        }) as Box<dyn FnMut(Event)>);

        self.document
            .add_event_listener_with_callback(kind.event_name(), closure.as_ref().unchecked_ref())
            .map_err(|e| ListenerError::Register {
                event: kind.event_name(),
                reason: format!("{:?}", e),
            })?;

        Ok(closure)
    }

    fn remove_listener(&self, kind: PointerKind, handle: Self::Handle) {
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback(kind.event_name(), handle.as_ref().unchecked_ref())
        {
            tracing::error!(
                event = kind.event_name(),
                "Failed to remove document listener: {:?}",
                e
            );
        }
    }
}

/// Element looked up by id at event time
///
/// Resolving on every event means a re-rendered element is never checked through a stale
/// node reference.
pub struct ElementRegion {
    document: Document,
    id: &'static str,
}

impl Region<Node> for ElementRegion {
    fn contains(&self, target: &Node) -> Option<bool> {
        let element = self.document.get_element_by_id(self.id)?;
        Some(element.contains(Some(target)))
    }
}
