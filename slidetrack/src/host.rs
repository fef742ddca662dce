use crate::{CardBox, ScrollCommand};

/// The UI side of a carousel.
///
/// A host owns the real track element (DOM node, widget, terminal pane). It answers layout
/// queries and applies the commands the carousel emits. Every method is infallible: a host
/// with a missing indicator container or scroll surface simply does nothing.
pub trait Host {
    /// Number of slides. Read once at mount.
    fn slide_count(&self) -> usize;

    /// Rendered box of the first card, or `None` when it cannot be measured right now.
    fn first_card(&self) -> Option<CardBox>;

    /// Gap between cards as laid out by the host (e.g. computed `column-gap`).
    ///
    /// Return `None` to fall back to `CarouselOptions::card_gap`.
    fn card_gap(&self) -> Option<f32> {
        None
    }

    /// Starts scrolling the track.
    fn scroll_to(&mut self, command: ScrollCommand);

    /// Sets the track's scroll offset directly, bypassing any smooth-scroll behavior.
    fn set_scroll_offset(&mut self, offset: u64);

    /// Marks the indicator for `active` as current and all others as inactive.
    fn sync_indicators(&mut self, active: usize, count: usize) {
        let _ = (active, count);
    }
}
