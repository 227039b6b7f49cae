use crate::view::{csv_document, ALL_CATEGORIES, CSV_FILENAME};
use crate::{AppState, Effect, ListingStatus, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_listing_request() {
                vec![Effect::FetchListing]
            } else {
                Vec::new()
            }
        }
        Msg::FavoritesRestored(entries) => {
            state.restore_favorites(entries);
            Vec::new()
        }
        Msg::ListingLoaded(entries) => {
            state.replace_entries(entries);
            Vec::new()
        }
        Msg::ListingFailed(error) => {
            state.record_error(error);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            let category = if category.trim().is_empty() {
                ALL_CATEGORIES.to_string()
            } else {
                category
            };
            if state.ui().selected_category != category {
                state.ui_mut().selected_category = category;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            if state.ui().search_term != term {
                state.ui_mut().search_term = term;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FavoritesOnlyToggled => {
            let ui = state.ui_mut();
            ui.show_favorites_only = !ui.show_favorites_only;
            state.mark_dirty();
            Vec::new()
        }
        Msg::FavoriteToggled(entry) => {
            state.toggle_favorite(&entry);
            vec![Effect::PersistFavorites(
                state.favorites().entries().to_vec(),
            )]
        }
        Msg::ExportClicked => {
            // Nothing to export until a listing has been shown.
            if state.listing() != ListingStatus::Loaded {
                return (state, Vec::new());
            }
            let content = csv_document(state.visible_entries());
            vec![Effect::ExportCsv {
                filename: CSV_FILENAME.to_string(),
                content,
            }]
        }
    };

    (state, effects)
}
