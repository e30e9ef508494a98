/// One logo in the marquee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoItem {
    pub id: String,
    pub label: String,
    pub href: Option<String>,
}

impl LogoItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: Option<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href,
        }
    }
}

/// Remembers which logo a press started on.
///
/// Pointer capture retargets the follow-up click to the marquee root, so the
/// click alone cannot always tell which logo was hit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressedLogo {
    id: Option<String>,
}

impl PressedLogo {
    /// Records the logo under a new press; `None` for presses on gaps.
    pub fn press(&mut self, id: Option<String>) {
        self.id = id;
    }

    #[inline]
    pub fn pressed(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The logo a click belongs to: the click's own logo when it has one,
    /// otherwise the logo the press started on. Consumes the press.
    pub fn resolve_click(&mut self, target_id: Option<&str>) -> Option<String> {
        let pressed = self.id.take();
        target_id.map(str::to_string).or(pressed)
    }
}

/// The canonical, non-duplicated list of logos, fixed for the lifetime of a
/// mounted marquee.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<LogoItem>,
}

impl ItemSet {
    /// Builds the set, dropping entries without an id (they cannot be clicked
    /// through to anything).
    pub fn new(items: Vec<LogoItem>) -> Self {
        let before = items.len();
        let items: Vec<LogoItem> = items
            .into_iter()
            .filter(|item| !item.id.trim().is_empty())
            .collect();
        if items.len() != before {
            log::warn!(
                "[marquee] dropped {} logo(s) without an id",
                before - items.len()
            );
        }
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[LogoItem] {
        &self.items
    }

    /// The rendered sequence: every item twice, in order.
    pub fn doubled(&self) -> impl Iterator<Item = &LogoItem> + '_ {
        self.items.iter().chain(self.items.iter())
    }

    pub fn get(&self, id: &str) -> Option<&LogoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Where a click on `id` should take the visitor, if anywhere.
    pub fn navigation_target(&self, id: &str) -> Option<&str> {
        self.get(id)
            .and_then(|item| item.href.as_deref())
            .filter(|href| !href.trim().is_empty())
    }
}
