use crate::sections::{Extent, SectionId, SECTIONS};

/// Height of the sticky navigation bar, added to the scroll position.
pub const NAV_OFFSET: f64 = 100.0;

/// Tracks which section the viewport is currently in.
///
/// The active section only changes when the adjusted scroll position lands
/// inside some section; gaps and missing elements keep the previous value.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    offset: f64,
    active: SectionId,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(NAV_OFFSET)
    }
}

impl ScrollSpy {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: SECTIONS[0].id,
        }
    }

    pub fn update<F>(&mut self, scroll_y: f64, extent_of: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<Extent>,
    {
        if let Some(id) = locate(scroll_y + self.offset, extent_of) {
            self.active = id;
        }
        self.active
    }
}

/// First section, in page order, whose extent contains `position`.
pub fn locate<F>(position: f64, extent_of: F) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<Extent>,
{
    SECTIONS
        .iter()
        .map(|s| s.id)
        .find(|id| extent_of(*id).is_some_and(|e| e.contains(position)))
}

/// Coalesces bursts of scroll events into one evaluation per animation frame.
///
/// Once closed, no new frames are requested and a frame already in flight is
/// told not to evaluate.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    closed: bool,
}

impl FrameGate {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        !self.closed && !std::mem::replace(&mut self.pending, true)
    }

    /// Called from the frame callback. Returns true when it should evaluate.
    pub fn release(&mut self) -> bool {
        self.pending = false;
        !self.closed
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}
