/// The scroll dimension that carries meaningful offset values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Builds an offset that is `value` on this axis and 0 on the other.
    pub fn offset(self, value: f64) -> Offset {
        match self {
            Self::Horizontal => Offset { x: value, y: 0.0 },
            Self::Vertical => Offset { x: 0.0, y: value },
        }
    }
}

/// The direction autoplay advances in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayDirection {
    #[default]
    Forward,
    Backward,
}

impl AutoplayDirection {
    /// The index delta of a single autoplay step.
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The slide at which a non-looping autoplay run ends.
    pub fn terminal_index(self, total: usize) -> usize {
        match self {
            Self::Forward => total.saturating_sub(1),
            Self::Backward => 0,
        }
    }
}

/// A scroll position reported by (or sent to) the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent along `axis`, i.e. the offset distance of one slide.
    pub fn step(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Rounds to the nearest integer, with halves rounded away from zero.
///
/// `1.49 -> 1`, `1.5 -> 2`, `-1.5 -> -2`. Works without `std` (no `f64::round` in `core`).
pub fn round_half_away_from_zero(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        -((-value + 0.5) as i64)
    }
}
