use crate::{Axis, Offset, Size};

/// A lightweight snapshot of the engine's session state.
///
/// Handed to the drag/momentum callbacks, and useful for debugging overlays or for persisting
/// the current slide. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwiperState {
    pub index: usize,
    pub total: usize,
    pub size: Size,
    /// Last committed scroll offset.
    pub offset: Offset,
    pub axis: Axis,
    pub loop_jump: bool,
    pub is_scrolling: bool,
    pub autoplay_end: bool,
}
