use alloc::vec::Vec;

/// One mounted slot in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSlot {
    /// Position inside the render sequence (what the viewport lays out).
    pub render_index: usize,
    /// The logical slide shown in this slot.
    pub slide_index: usize,
    /// `true` for the two boundary copies added when looping.
    pub is_duplicate: bool,
}

/// The ordered, non-empty slide contents supplied by the host.
///
/// Empty entries (`None`) are dropped, so hosts can pass conditionally rendered children
/// as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slides<T> {
    items: Vec<T>,
}

impl<T> Slides<T> {
    pub fn new(items: impl IntoIterator<Item = Option<T>>) -> Self {
        Self {
            items: items.into_iter().flatten().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Pairs each render slot with its content. See [`render_slots`].
    pub fn render_sequence(&self, loop_enabled: bool) -> impl Iterator<Item = (RenderSlot, &T)> {
        render_slots(self.items.len(), loop_enabled)
            .map(|slot| (slot, &self.items[slot.slide_index]))
    }
}

impl<T> From<Vec<T>> for Slides<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Whether a swiper over `total` slides actually loops.
pub fn effective_loop(loop_enabled: bool, total: usize) -> bool {
    loop_enabled && total > 1
}

/// Number of mounted slots: `total + 2` when looping, `total` otherwise.
pub fn render_len(total: usize, loop_enabled: bool) -> usize {
    if effective_loop(loop_enabled, total) {
        total + 2
    } else {
        total
    }
}

/// Yields the render sequence: `[last, 0, 1, .., last, 0]` when looping, `[0, .., last]`
/// otherwise.
pub fn render_slots(total: usize, loop_enabled: bool) -> impl Iterator<Item = RenderSlot> {
    let looping = effective_loop(loop_enabled, total);
    (0..render_len(total, loop_enabled)).map(move |render_index| {
        if !looping {
            return RenderSlot {
                render_index,
                slide_index: render_index,
                is_duplicate: false,
            };
        }
        let (slide_index, is_duplicate) = if render_index == 0 {
            (total - 1, true)
        } else if render_index == total + 1 {
            (0, true)
        } else {
            (render_index - 1, false)
        };
        RenderSlot {
            render_index,
            slide_index,
            is_duplicate,
        }
    })
}

/// Decides whether the slot at `render_index` should mount its content when load-minimal
/// mode is on.
///
/// A slot is loaded when its render position is within `window` of the current slide's render
/// position. When looping, the boundary copies are always loaded so wrapping never reveals an
/// empty slot.
pub fn should_load(
    render_index: usize,
    current_index: usize,
    total: usize,
    loop_enabled: bool,
    window: usize,
) -> bool {
    let looping = effective_loop(loop_enabled, total);
    if looping && (render_index == 0 || render_index == total + 1) {
        return true;
    }
    let current = if looping {
        current_index + 1
    } else {
        current_index
    };
    render_index.abs_diff(current) <= window
}
