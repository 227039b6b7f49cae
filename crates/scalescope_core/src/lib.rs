//! ScaleScope core: pure state machine, derived views and view-model helpers.
mod effect;
mod entry;
mod favorites;
mod msg;
mod state;
mod update;
mod view;
mod view_model;

pub use effect::Effect;
pub use entry::StartupEntry;
pub use favorites::FavoriteSet;
pub use msg::Msg;
pub use state::{AppState, ErrorState, ListingStatus, UiState};
pub use update::update;
pub use view::{
    category_set, csv_document, max_votes, trending_tags, visible_entries, ALL_CATEGORIES,
    CSV_FILENAME, CSV_HEADER, CSV_MIME_TYPE, TRENDING_LIMIT,
};
pub use view_model::{AppViewModel, CardView, CategoryChip, ScreenView};
