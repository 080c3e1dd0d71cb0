use crate::foundation::core::{ClientRect, Point, SurfaceSize};

/// A single touch contact, viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Horizontal viewport coordinate.
    pub client_x: f64,
    /// Vertical viewport coordinate.
    pub client_y: f64,
}

/// Input events consumed by the engine, in viewport (client) coordinates.
///
/// Pointer and touch variants are handled uniformly: a single
/// [`position`](InputEvent::position) extraction resolves either into one
/// coordinate pair before any further processing. Only one active stroke is
/// modeled; multi-touch beyond the first contact is ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse/pen press.
    PointerDown {
        /// Horizontal viewport coordinate.
        client_x: f64,
        /// Vertical viewport coordinate.
        client_y: f64,
    },
    /// Mouse/pen movement.
    PointerMove {
        /// Horizontal viewport coordinate.
        client_x: f64,
        /// Vertical viewport coordinate.
        client_y: f64,
    },
    /// Mouse/pen release (or the pointer leaving the card).
    PointerUp,
    /// Touch contact start.
    TouchStart {
        /// Active contacts; the first one drives the stroke.
        touches: Vec<TouchPoint>,
    },
    /// Touch movement.
    TouchMove {
        /// Active contacts; the first one drives the stroke.
        touches: Vec<TouchPoint>,
    },
    /// Touch end.
    TouchEnd,
}

/// Which stroke transition an event maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Start,
    Move,
    End,
}

impl InputEvent {
    /// Resolve the event to a single viewport position.
    ///
    /// Returns `None` for release/end events and for malformed touch events
    /// carrying no contact points; callers drop such events silently.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { client_x, client_y } | Self::PointerMove { client_x, client_y } => {
                Some(Point::new(*client_x, *client_y))
            }
            Self::TouchStart { touches } | Self::TouchMove { touches } => touches
                .first()
                .map(|t| Point::new(t.client_x, t.client_y)),
            Self::PointerUp | Self::TouchEnd => None,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        match self {
            Self::PointerDown { .. } | Self::TouchStart { .. } => Phase::Start,
            Self::PointerMove { .. } | Self::TouchMove { .. } => Phase::Move,
            Self::PointerUp | Self::TouchEnd => Phase::End,
        }
    }
}

/// Map a viewport position into surface coordinates.
///
/// Scales by (surface resolution / displayed size) per axis, so erasure is
/// geometrically correct regardless of how the element is scaled on screen.
/// Returns `None` when the displayed rect is degenerate.
pub fn map_to_surface(client: Point, rect: ClientRect, size: SurfaceSize) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let scale_x = f64::from(size.width) / rect.width;
    let scale_y = f64::from(size.height) / rect.height;
    Some(Point::new(
        (client.x - rect.x) * scale_x,
        (client.y - rect.y) * scale_y,
    ))
}
