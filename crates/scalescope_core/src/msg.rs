use crate::{ErrorState, StartupEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished initialization; triggers the listing fetch.
    Started,
    /// Restore favorites previously loaded from storage.
    FavoritesRestored(Vec<StartupEntry>),
    /// Listing request succeeded.
    ListingLoaded(Vec<StartupEntry>),
    /// Listing request failed, already classified.
    ListingFailed(ErrorState),
    /// User picked a category chip ("All" clears the filter).
    CategorySelected(String),
    /// User edited the search box.
    SearchChanged(String),
    /// User flipped between all entries and favorites only.
    FavoritesOnlyToggled,
    /// User clicked the heart on a card.
    FavoriteToggled(StartupEntry),
    /// User clicked export.
    ExportClicked,
}
