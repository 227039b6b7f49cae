use crate::view::{self, ALL_CATEGORIES};
use crate::view_model::{AppViewModel, CardView, CategoryChip, ScreenView};
use crate::{FavoriteSet, StartupEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStatus {
    #[default]
    NotRequested,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorState {
    #[default]
    None,
    RateLimited,
    FetchFailed,
}

impl ErrorState {
    /// Maps an optional HTTP status from a failed request to a user-facing error.
    pub fn classify(http_status: Option<u16>) -> Self {
        match http_status {
            Some(429) => ErrorState::RateLimited,
            _ => ErrorState::FetchFailed,
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            ErrorState::None => None,
            ErrorState::RateLimited => {
                Some("Rate limit reached. Please try again in a few minutes.")
            }
            ErrorState::FetchFailed => Some("Failed to fetch startups. Please try again later."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub selected_category: String,
    pub search_term: String,
    pub show_favorites_only: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            show_favorites_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    entries: Vec<StartupEntry>,
    favorites: FavoriteSet,
    ui: UiState,
    listing: ListingStatus,
    error: ErrorState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[StartupEntry] {
        &self.entries
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn listing(&self) -> ListingStatus {
        self.listing
    }

    pub fn error(&self) -> ErrorState {
        self.error
    }

    /// Entries after the favorites-only, category and search filters.
    pub fn visible_entries(&self) -> Vec<&StartupEntry> {
        let source = if self.ui.show_favorites_only {
            self.favorites.entries()
        } else {
            &self.entries
        };
        view::visible_entries(source, &self.ui.selected_category, &self.ui.search_term)
    }

    pub fn view(&self) -> AppViewModel {
        let screen = if let Some(message) = self.error.message() {
            ScreenView::Error { message }
        } else if self.listing != ListingStatus::Loaded {
            ScreenView::Loading
        } else {
            ScreenView::Dashboard
        };

        let max_votes = view::max_votes(&self.entries);
        let cards = self
            .visible_entries()
            .into_iter()
            .map(|entry| CardView {
                entry: entry.clone(),
                is_top_voted: entry.votes == max_votes,
                is_favorite: self.favorites.is_favorite(&entry.name),
            })
            .collect();
        let categories = view::category_set(&self.entries)
            .into_iter()
            .map(|name| CategoryChip {
                selected: name == self.ui.selected_category,
                name,
            })
            .collect();

        AppViewModel {
            screen,
            trending: view::trending_tags(&self.entries),
            categories,
            cards,
            max_votes,
            search_term: self.ui.search_term.clone(),
            show_favorites_only: self.ui.show_favorites_only,
            favorite_count: self.favorites.len(),
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Moves `NotRequested` to `Loading`. Returns `false` if a request was already made.
    pub(crate) fn begin_listing_request(&mut self) -> bool {
        if self.listing != ListingStatus::NotRequested {
            return false;
        }
        self.listing = ListingStatus::Loading;
        self.mark_dirty();
        true
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<StartupEntry>) -> bool {
        if self.error != ErrorState::None {
            return false;
        }
        self.entries = entries;
        self.listing = ListingStatus::Loaded;
        self.mark_dirty();
        true
    }

    pub(crate) fn record_error(&mut self, error: ErrorState) -> bool {
        if self.error != ErrorState::None || error == ErrorState::None {
            return false;
        }
        self.error = error;
        self.listing = ListingStatus::Failed;
        self.mark_dirty();
        true
    }

    pub(crate) fn restore_favorites(&mut self, entries: Vec<StartupEntry>) {
        self.favorites = FavoriteSet::from_entries(entries);
        self.mark_dirty();
    }

    pub(crate) fn toggle_favorite(&mut self, entry: &StartupEntry) {
        self.favorites.toggle(entry);
        self.mark_dirty();
    }

    pub(crate) fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }
}
