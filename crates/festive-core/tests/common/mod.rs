// In-memory stand-in for the DOM container used by the host-side tests.

#![allow(dead_code)]

use festive_core::{Decoration, ElementSpec, PlayState, Surface, VisibilityCallback};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct NodeRecord {
    pub id: u64,
    pub class: &'static str,
    pub styles: Vec<(&'static str, String)>,
    pub text: Option<&'static str>,
    pub play_state: Option<PlayState>,
}

impl NodeRecord {
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric part of a style value such as `12.5%` or `3s`.
    pub fn style_num(&self, property: &str) -> f64 {
        let raw = self.style(property).unwrap_or_default();
        raw.trim_end_matches(['%', 's'])
            .parse()
            .unwrap_or(f64::NAN)
    }
}

#[derive(Default)]
struct DomState {
    children: Vec<NodeRecord>,
    next_id: u64,
    watches: Vec<(u64, f64, VisibilityCallback)>,
    created: usize,
    detached: usize,
}

/// Inspection handle onto the fake container.
#[derive(Clone, Default)]
pub struct FakeDom(Rc<RefCell<DomState>>);

impl FakeDom {
    pub fn surface(&self, viewport_width: f64) -> FakeSurface {
        FakeSurface {
            dom: self.clone(),
            viewport_width,
        }
    }

    pub fn children(&self) -> Vec<NodeRecord> {
        self.0.borrow().children.clone()
    }

    pub fn with_class(&self, class: &str) -> Vec<NodeRecord> {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|n| n.class == class)
            .cloned()
            .collect()
    }

    pub fn count(&self, class: &str) -> usize {
        self.with_class(class).len()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn watch_count(&self) -> usize {
        self.0.borrow().watches.len()
    }

    pub fn watch_thresholds(&self) -> Vec<f64> {
        self.0.borrow().watches.iter().map(|(_, t, _)| *t).collect()
    }

    pub fn created(&self) -> usize {
        self.0.borrow().created
    }

    pub fn detached(&self) -> usize {
        self.0.borrow().detached
    }

    /// Deliver an intersection change to every registered watcher.
    pub fn fire_visibility(&self, visible: bool) {
        // callbacks re-enter the DOM state, so run them outside the borrow
        let mut watches = std::mem::take(&mut self.0.borrow_mut().watches);
        for (_, _, cb) in watches.iter_mut() {
            cb(visible);
        }
        let mut state = self.0.borrow_mut();
        watches.append(&mut state.watches);
        state.watches = watches;
    }
}

#[derive(Clone)]
pub struct FakeElement {
    id: u64,
    dom: FakeDom,
}

impl Decoration for FakeElement {
    fn set_play_state(&self, state: PlayState) {
        let mut dom = self.dom.0.borrow_mut();
        if let Some(node) = dom.children.iter_mut().find(|n| n.id == self.id) {
            node.play_state = Some(state);
        }
    }

    fn detach(&self) {
        let mut dom = self.dom.0.borrow_mut();
        let before = dom.children.len();
        dom.children.retain(|n| n.id != self.id);
        if dom.children.len() != before {
            dom.detached += 1;
        }
    }
}

pub struct FakeSurface {
    dom: FakeDom,
    pub viewport_width: f64,
}

impl Surface for FakeSurface {
    type Element = FakeElement;
    type Watch = u64;

    fn spawn(&mut self, spec: &ElementSpec) -> Option<FakeElement> {
        let mut dom = self.dom.0.borrow_mut();
        let id = dom.next_id;
        dom.next_id += 1;
        dom.created += 1;
        dom.children.push(NodeRecord {
            id,
            class: spec.class(),
            styles: spec.styles.iter().cloned().collect(),
            text: spec.text,
            play_state: None,
        });
        Some(FakeElement {
            id,
            dom: self.dom.clone(),
        })
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn watch_visibility(&mut self, threshold: f64, on_change: VisibilityCallback) -> u64 {
        let mut dom = self.dom.0.borrow_mut();
        let id = dom.next_id;
        dom.next_id += 1;
        dom.watches.push((id, threshold, on_change));
        id
    }

    fn unwatch(&mut self, watch: u64) {
        self.dom.0.borrow_mut().watches.retain(|(id, _, _)| *id != watch);
    }
}

pub const DESKTOP: f64 = 1280.0;
pub const PHONE: f64 = 390.0;
