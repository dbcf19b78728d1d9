//! Viewport classification
//!
//! A single breakpoint splits widths into `Compact` and `Regular`. The boundary
//! itself belongs to `Compact`, matching a `down(md)` media query at 900px.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default breakpoint in CSS pixels
pub const DEFAULT_BREAKPOINT_PX: u32 = 900;

/// Classification of the available screen width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Compact,
    Regular,
}

/// Which of the two header layouts is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Horizontal bar with entries side by side
    Inline,
    /// Off-canvas panel with one full-width row per entry
    Stacked,
}

impl From<ViewportClass> for PresentationMode {
    fn from(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Compact => PresentationMode::Stacked,
            ViewportClass::Regular => PresentationMode::Inline,
        }
    }
}

impl PresentationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::Inline => "inline",
            PresentationMode::Stacked => "stacked",
        }
    }
}

/// Width threshold separating compact from regular viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(u32);

impl Breakpoint {
    pub fn new(threshold_px: u32) -> Self {
        Self(threshold_px)
    }

    pub fn threshold_px(&self) -> u32 {
        self.0
    }

    /// Classify a width. Widths at or below the threshold are compact.
    pub fn classify(&self, width_px: u32) -> ViewportClass {
        if width_px <= self.0 {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_BREAKPOINT_PX)
    }
}

/// Keeps the current classification across resize signals
///
/// Raw readings come straight from the host (`window.innerWidth`), so they
/// are validated here: non-finite, zero, or negative widths are dropped and
/// the last valid classification stays in effect.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoint: Breakpoint,
    current: ViewportClass,
    last_width: Option<u32>,
}

impl ViewportTracker {
    /// Starts as `Regular` until the first valid reading arrives
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            current: ViewportClass::Regular,
            last_width: None,
        }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    pub fn last_width(&self) -> Option<u32> {
        self.last_width
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Replace the breakpoint and reclassify against the last valid width
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
        if let Some(width) = self.last_width {
            self.current = breakpoint.classify(width);
        }
    }

    /// Feed a raw width reading. Returns the classification now in effect.
    pub fn observe(&mut self, raw_width: f64) -> ViewportClass {
        let Some(width) = sanitize_width(raw_width) else {
            warn!(raw_width, "Ignoring invalid viewport reading");
            return self.current;
        };

        let class = self.breakpoint.classify(width);
        if class != self.current {
            debug!(width, ?class, "Viewport reclassified");
        }
        self.current = class;
        self.last_width = Some(width);
        class
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(Breakpoint::default())
    }
}

fn sanitize_width(raw: f64) -> Option<u32> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    // Fractional widths show up with browser zoom; round down like CSS media queries do.
    Some(raw.floor().min(u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_compact() {
        let bp = Breakpoint::new(900);
        assert_eq!(bp.classify(899), ViewportClass::Compact);
        assert_eq!(bp.classify(900), ViewportClass::Compact);
        assert_eq!(bp.classify(901), ViewportClass::Regular);
    }

    #[test]
    fn test_single_discontinuity() {
        let bp = Breakpoint::new(640);
        let flips = (1..2000u32)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| bp.classify(w[0]) != bp.classify(w[1]))
            .count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let bp = Breakpoint::default();
        for width in [0, 1, 450, 900, 901, 1920] {
            assert_eq!(bp.classify(width), bp.classify(width));
        }
    }

    #[test]
    fn test_tracker_ignores_invalid_readings() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.observe(600.0), ViewportClass::Compact);

        assert_eq!(tracker.observe(0.0), ViewportClass::Compact);
        assert_eq!(tracker.observe(-320.0), ViewportClass::Compact);
        assert_eq!(tracker.observe(f64::NAN), ViewportClass::Compact);
        assert_eq!(tracker.observe(f64::INFINITY), ViewportClass::Compact);
        assert_eq!(tracker.last_width(), Some(600));

        assert_eq!(tracker.observe(1280.0), ViewportClass::Regular);
    }

    #[test]
    fn test_tracker_reclassifies_both_directions() {
        let mut tracker = ViewportTracker::new(Breakpoint::new(900));
        assert_eq!(tracker.observe(901.0), ViewportClass::Regular);
        assert_eq!(tracker.observe(900.0), ViewportClass::Compact);
        assert_eq!(tracker.observe(900.7), ViewportClass::Compact);
        assert_eq!(tracker.observe(901.0), ViewportClass::Regular);
    }

    #[test]
    fn test_tracker_starts_regular() {
        let tracker = ViewportTracker::default();
        assert_eq!(tracker.current(), ViewportClass::Regular);
        assert_eq!(tracker.last_width(), None);
    }

    #[test]
    fn test_set_breakpoint_reclassifies() {
        let mut tracker = ViewportTracker::new(Breakpoint::new(900));
        tracker.observe(1000.0);
        assert_eq!(tracker.current(), ViewportClass::Regular);

        tracker.set_breakpoint(Breakpoint::new(1200));
        assert_eq!(tracker.current(), ViewportClass::Compact);
    }

    #[test]
    fn test_presentation_mode_mapping() {
        assert_eq!(
            PresentationMode::from(ViewportClass::Compact),
            PresentationMode::Stacked
        );
        assert_eq!(
            PresentationMode::from(ViewportClass::Regular),
            PresentationMode::Inline
        );
    }
}
