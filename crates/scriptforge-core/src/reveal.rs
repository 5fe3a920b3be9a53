//! One-shot scroll-reveal state machine
//!
//! Models intersection observation as an explicit event stream: the page is
//! scanned once for observable elements, then (element id, intersection
//! ratio) events are fed in as they happen. The first event at or above the
//! threshold marks the element visible and permanently stops observing it;
//! later scroll-outs never retract the marker. Events are independent per
//! element, with no ordering guarantee between elements.

use std::collections::HashSet;

use crate::page::Element;

/// Class marking an element for reveal-on-scroll observation
pub const REVEAL_CLASS: &str = "reveal-on-scroll";

/// Class applied once an element first intersects the viewport
pub const VISIBLE_CLASS: &str = "is-visible";

/// Fraction of the element that must intersect before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Tracks which reveal elements are still awaiting their first intersection
#[derive(Debug, Default)]
pub struct RevealObserver {
    watched: HashSet<String>,
}

impl RevealObserver {
    /// Scan `document` for elements carrying [`REVEAL_CLASS`] and start
    /// observing them. Elements without an id cannot receive intersection
    /// events and are skipped.
    pub fn observe(document: &Element) -> Self {
        let mut watched = HashSet::new();
        document.visit(&mut |el| {
            if el.has_class(REVEAL_CLASS) {
                if let Some(id) = &el.id {
                    watched.insert(id.clone());
                }
            }
        });
        Self { watched }
    }

    /// Feed one intersection event.
    ///
    /// Returns true when the event revealed the element. Unwatched ids and
    /// ratios below [`REVEAL_THRESHOLD`] leave everything unchanged; a
    /// revealing event unsubscribes the element permanently.
    pub fn on_intersection(&mut self, document: &mut Element, id: &str, ratio: f64) -> bool {
        if !self.watched.contains(id) {
            return false;
        }
        if ratio < REVEAL_THRESHOLD {
            return false;
        }
        if let Some(el) = document.find_id_mut(id) {
            el.add_class(VISIBLE_CLASS);
        }
        self.watched.remove(id);
        true
    }

    /// Whether `id` is still awaiting its first intersection
    pub fn is_observing(&self, id: &str) -> bool {
        self.watched.contains(id)
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }
}
