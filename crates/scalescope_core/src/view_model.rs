use crate::StartupEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenView {
    /// Listing not yet received.
    #[default]
    Loading,
    /// Terminal fetch error; no retry affordance.
    Error { message: &'static str },
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub entry: StartupEntry,
    pub is_top_voted: bool,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub trending: Vec<String>,
    pub categories: Vec<CategoryChip>,
    pub cards: Vec<CardView>,
    pub max_votes: u64,
    pub search_term: String,
    pub show_favorites_only: bool,
    pub favorite_count: usize,
}
