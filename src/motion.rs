//! A small tween/timeline engine for choreographing page sections.
//!
//! Everything here is plain data and arithmetic so it can be exercised without a
//! browser. The browser side (`app::motion`) owns a [`Scene`], ticks it from a
//! `requestAnimationFrame` loop and writes the resulting [`Frame`]s to inline styles.

mod ease;
mod playhead;
mod scene;
mod style;
mod timeline;
mod trigger;
mod tween;

pub use ease::{Direction, Ease};
pub use playhead::{Playhead, PlayheadEvent};
pub use scene::{Playback, PlaybackId, Scene, Tick, Viewport};
pub use style::Style;
pub use timeline::{Frame, Position, Timeline};
pub use trigger::{Anchor, ScrollTrigger, ToggleAction, ToggleActions, TriggerPoint, TriggerRect};
pub use tween::{Repeat, Stagger, StaggerFrom, Target, Tween};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown ease: {0}")]
    UnknownEase(String),
    #[error("invalid ease parameter: {0}")]
    EaseParam(String),
    #[error("invalid timeline position: {0}")]
    Position(String),
    #[error("invalid trigger point: {0}")]
    TriggerPoint(String),
    #[error("invalid toggle actions: {0}")]
    ToggleActions(String),
}
