/// One indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Read-only view of `(index, total)` for pagination renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    pub index: usize,
    pub total: usize,
    pub shows_pagination: bool,
}

impl Pagination {
    pub fn new(index: usize, total: usize, shows_pagination: bool) -> Self {
        Self {
            index,
            total,
            shows_pagination,
        }
    }

    /// Pagination is hidden when disabled or when there is at most one slide.
    pub fn is_visible(&self) -> bool {
        self.shows_pagination && self.total > 1
    }

    /// Yields one dot per slide, with the current one marked active.
    ///
    /// Yields nothing when the pagination is hidden.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + use<> {
        let index = self.index;
        let count = if self.is_visible() { self.total } else { 0 };
        (0..count).map(move |i| Dot {
            index: i,
            active: i == index,
        })
    }

    /// Delegates rendering to a custom hook (e.g. "3 / 5" text instead of dots).
    ///
    /// Returns `None` when the pagination is hidden.
    pub fn render_with<R>(&self, render: impl FnOnce(usize, usize) -> R) -> Option<R> {
        if !self.is_visible() {
            return None;
        }
        Some(render(self.index, self.total))
    }
}
