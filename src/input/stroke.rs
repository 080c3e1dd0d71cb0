use crate::foundation::core::Point;

/// One erase step produced by the tracker, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Previous position within the same stroke; `None` means the step is a
    /// standalone dab.
    pub from: Option<Point>,
    /// Current position.
    pub to: Point,
}

/// Turns discrete input positions into a continuous erased path.
///
/// Consecutive positions within one stroke connect as segments so fast
/// motion leaves no gaps; `end` clears the last position so separate strokes
/// never get joined by a phantom line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeTracker {
    active: bool,
    last: Option<Point>,
}

impl StrokeTracker {
    /// Fresh tracker, inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the input is pressed/touched.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark input active and record the stroke's first position. Nothing is
    /// drawn yet.
    pub fn start(&mut self, position: Point) {
        self.active = true;
        self.last = Some(position);
    }

    /// Advance the stroke, yielding the segment to erase, or `None` while
    /// inactive.
    pub fn move_to(&mut self, position: Point) -> Option<Segment> {
        if !self.active {
            return None;
        }
        let segment = Segment {
            from: self.last,
            to: position,
        };
        self.last = Some(position);
        Some(segment)
    }

    /// Mark input inactive; the next `start` begins a disconnected path.
    pub fn end(&mut self) {
        self.active = false;
        self.last = None;
    }
}
