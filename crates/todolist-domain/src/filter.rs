use crate::Item;

/// Visibility rule applied to a list's items before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Filter bar order.
    pub fn all() -> [FilterMode; 3] {
        [FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn next(&self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.is_done,
            FilterMode::Completed => item.is_done,
        }
    }

    /// Visible subset of `items`, relative order preserved.
    pub fn project<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
