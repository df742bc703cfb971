//! Render state tracking for display updates.
//!
//! The face is redrawn only when something on it changed. Layers overlap
//! (hands cross the sub-dials, the cap covers the hands), so any change
//! means a full redraw rather than a partial one.
//!
//! | Element | Changes on | Marked by |
//! |---------|-----------|-----------|
//! | Clock hands | Minute tick | [`RenderState::mark_clock`] |
//! | Step dial | Step refresh, restore | [`RenderState::mark_steps`] |
//! | Temperature dial | Phone message, restore, theme | [`RenderState::mark_temperature`] |

/// Tracks which parts of the face changed since the last frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderState {
    first_frame: bool,
    clock_dirty: bool,
    steps_dirty: bool,
    temperature_dirty: bool,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            clock_dirty: false,
            steps_dirty: false,
            temperature_dirty: false,
        }
    }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    #[inline]
    pub fn mark_clock(&mut self) { self.clock_dirty = true; }

    #[inline]
    pub fn mark_steps(&mut self) { self.steps_dirty = true; }

    #[inline]
    pub fn mark_temperature(&mut self) { self.temperature_dirty = true; }

    /// Mark every layer, e.g. after the display was cleared externally.
    pub fn mark_all(&mut self) {
        self.clock_dirty = true;
        self.steps_dirty = true;
        self.temperature_dirty = true;
    }

    #[inline]
    pub const fn steps_dirty(&self) -> bool { self.steps_dirty }

    #[inline]
    pub const fn temperature_dirty(&self) -> bool { self.temperature_dirty }

    /// Whether the next frame must be drawn.
    #[inline]
    pub const fn needs_redraw(&self) -> bool {
        self.first_frame || self.clock_dirty || self.steps_dirty || self.temperature_dirty
    }

    /// Call at end of frame to reset per-frame state.
    pub fn end_frame(&mut self) {
        self.first_frame = false;
        self.clock_dirty = false;
        self.steps_dirty = false;
        self.temperature_dirty = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
