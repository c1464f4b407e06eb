//! In-memory page used to drive the controller without a browser.
#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use overlay_core::{
    ContentItem, ElementKind, FocusCandidate, Media, OpenOptions, OverlayConfig,
    OverlayContent, OverlayController, OverlaySurface, ScrollSnapshot,
};

pub type NodeId = &'static str;

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    candidate: FocusCandidate<NodeId>,
    attached: bool,
}

#[derive(Debug)]
pub struct MemorySurface {
    order: Vec<NodeId>,
    nodes: HashMap<NodeId, Node>,
    containers: BTreeSet<NodeId>,
    pub focused: Option<NodeId>,
    pub overflow: String,
    pub offset: f64,
    pub shown: Vec<NodeId>,
    pub media: HashMap<NodeId, Media>,
    pub titles: HashMap<NodeId, Option<String>>,
    pub rendered: Vec<(NodeId, Option<String>)>,
    pub programmatic: BTreeSet<NodeId>,
    pub listening: BTreeSet<NodeId>,
    unfocusable: BTreeSet<NodeId>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            nodes: HashMap::new(),
            containers: BTreeSet::new(),
            focused: None,
            overflow: "auto".to_string(),
            offset: 120.0,
            shown: Vec::new(),
            media: HashMap::new(),
            titles: HashMap::new(),
            rendered: Vec::new(),
            programmatic: BTreeSet::new(),
            listening: BTreeSet::new(),
            unfocusable: BTreeSet::new(),
        }
    }
}

impl MemorySurface {
    fn insert(&mut self, id: NodeId, parent: Option<NodeId>, candidate: FocusCandidate<NodeId>) {
        self.order.push(id);
        self.nodes.insert(
            id,
            Node {
                parent,
                candidate,
                attached: true,
            },
        );
    }

    /// Overlay container (not focusable by default).
    pub fn container(mut self, id: NodeId) -> Self {
        self.insert(id, None, FocusCandidate::new(id, ElementKind::Other));
        self.containers.insert(id);
        self
    }

    pub fn child(mut self, parent: NodeId, candidate: FocusCandidate<NodeId>) -> Self {
        let id = candidate.element;
        self.insert(id, Some(parent), candidate);
        self
    }

    pub fn button(self, parent: NodeId, id: NodeId) -> Self {
        self.child(parent, FocusCandidate::new(id, ElementKind::Button))
    }

    /// Focusable element in the page body, outside every overlay.
    pub fn page_button(mut self, id: NodeId) -> Self {
        self.insert(id, None, FocusCandidate::new(id, ElementKind::Button));
        self
    }

    /// Element whose `focus()` call has no effect.
    pub fn refuses_focus(mut self, id: NodeId) -> Self {
        self.unfocusable.insert(id);
        self
    }

    pub fn focused_on(mut self, id: NodeId) -> Self {
        self.focused = Some(id);
        self
    }

    pub fn detach(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.attached = false;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    fn is_descendant(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = self.nodes.get(id).and_then(|node| node.parent);
        while let Some(parent) = cursor {
            if parent == ancestor {
                return true;
            }
            cursor = self.nodes.get(parent).and_then(|node| node.parent);
        }
        false
    }
}

impl OverlaySurface for MemorySurface {
    type Element = NodeId;

    fn resolve_container(&self, target: &str) -> Option<NodeId> {
        self.containers
            .iter()
            .copied()
            .find(|id| *id == target && self.is_attached(id))
    }

    fn show(&mut self, container: &NodeId, content: &OverlayContent, options: &OpenOptions) {
        self.shown.push(*container);
        self.media.insert(*container, content.media.clone());
        self.titles.insert(*container, options.title.clone());
    }

    fn hide(&mut self, container: &NodeId) {
        self.shown.retain(|id| id != container);
    }

    fn render_item(&mut self, container: &NodeId, item: &ContentItem) {
        self.media.insert(*container, item.media.clone());
        self.titles.insert(*container, item.title.clone());
        self.rendered.push((*container, item.title.clone()));
    }

    fn lock_scroll(&mut self) -> ScrollSnapshot {
        let snapshot = ScrollSnapshot {
            overflow: self.overflow.clone(),
            offset: self.offset,
        };
        self.overflow = "hidden".to_string();
        snapshot
    }

    fn unlock_scroll(&mut self, snapshot: &ScrollSnapshot) {
        self.overflow = snapshot.overflow.clone();
        self.offset = snapshot.offset;
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, element: &NodeId) -> bool {
        if !self.is_attached(element) || self.unfocusable.contains(element) {
            return false;
        }
        self.focused = Some(*element);
        true
    }

    fn make_focusable(&mut self, container: &NodeId) {
        self.programmatic.insert(*container);
    }

    fn is_attached(&self, element: &NodeId) -> bool {
        self.nodes.get(element).is_some_and(|node| node.attached)
    }

    fn contains(&self, container: &NodeId, element: &NodeId) -> bool {
        container == element || self.is_descendant(*container, *element)
    }

    fn focus_candidates(&self, container: &NodeId) -> Vec<FocusCandidate<NodeId>> {
        self.order
            .iter()
            .filter(|id| self.is_attached(id) && self.is_descendant(*container, **id))
            .filter_map(|id| self.nodes.get(id).map(|node| node.candidate.clone()))
            .collect()
    }

    fn query(&self, container: &NodeId, selector: &str) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| *id == selector && self.is_descendant(*container, *id))
    }

    fn attach_listeners(&mut self, container: &NodeId) {
        self.listening.insert(*container);
    }

    fn detach_listeners(&mut self, container: &NodeId) {
        self.listening.remove(container);
    }
}

/// Page with a form dialog, a lightbox, an empty notice and two page buttons.
pub fn standard_page() -> MemorySurface {
    MemorySurface::default()
        .page_button("open-form")
        .page_button("open-gallery")
        .container("form-modal")
        .child(
            "form-modal",
            FocusCandidate::new("name", ElementKind::Input),
        )
        .child(
            "form-modal",
            FocusCandidate::new("hidden-token", ElementKind::Input).hidden(),
        )
        .child(
            "form-modal",
            FocusCandidate::new("email", ElementKind::Input),
        )
        .button("form-modal", "submit")
        .container("lightbox")
        .button("lightbox", "lb-prev")
        .button("lightbox", "lb-next")
        .button("lightbox", "lb-close")
        .container("notice")
        .focused_on("open-form")
}

pub fn controller(surface: MemorySurface) -> OverlayController<MemorySurface> {
    init_logging();
    OverlayController::new(surface, OverlayConfig::default())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn image_items(len: usize) -> Vec<ContentItem> {
    (0..len)
        .map(|i| {
            ContentItem::new(Media::Image {
                src: format!("assets/gallery-{i}.jpg"),
                alt: None,
            })
            .titled(format!("Photo {i}"))
            .described(format!("Caption {i}"))
        })
        .collect()
}
