use scalescope_core::{AppViewModel, CardView, ScreenView};

const TITLE: &str = "ScaleScope - Startup Tracker";

/// Renders the view model into terminal lines.
///
/// `fetched_at` is the local time the listing arrived, if it has.
pub fn render(view: &AppViewModel, fetched_at: Option<&str>, notices: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    match view.screen {
        ScreenView::Error { message } => {
            lines.push(message.to_string());
            lines.extend(notices.iter().cloned());
            return lines;
        }
        ScreenView::Loading => {
            lines.push("Fetching startups...".to_string());
            lines.extend(notices.iter().cloned());
            return lines;
        }
        ScreenView::Dashboard => {}
    }

    lines.push(TITLE.to_string());
    lines.push(format!("Trending: {}", view.trending.join(", ")));

    let search = if view.search_term.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", view.search_term)
    };
    let source = if view.show_favorites_only {
        "My Favorites"
    } else {
        "All startups"
    };
    lines.push(format!(
        "Search: {search} | Showing: {source} | Favorites saved: {}",
        view.favorite_count
    ));

    let chips: Vec<String> = view
        .categories
        .iter()
        .map(|chip| {
            if chip.selected {
                format!("[{}]", chip.name)
            } else {
                chip.name.clone()
            }
        })
        .collect();
    lines.push(format!("Categories: {}", chips.join(" ")));
    lines.push(String::new());

    if view.cards.is_empty() {
        lines.push("No startups match the current filters.".to_string());
    }
    for (idx, card) in view.cards.iter().enumerate() {
        lines.extend(format_card(idx + 1, card));
    }

    lines.push(String::new());
    match fetched_at {
        Some(at) => lines.push(format!("Data from Product Hunt API | fetched {at}")),
        None => lines.push("Data from Product Hunt API".to_string()),
    }
    lines.extend(notices.iter().cloned());
    lines
}

fn format_card(number: usize, card: &CardView) -> Vec<String> {
    let entry = &card.entry;
    let heart = if card.is_favorite { "<3" } else { "  " };
    let badge = if card.is_top_voted { "  * Top Voted" } else { "" };

    let mut lines = vec![format!(
        "{heart} {number:>2}. {name} ({category}){badge}",
        name = entry.name,
        category = entry.category
    )];
    if !entry.tagline.is_empty() {
        lines.push(format!("       {}", entry.tagline));
    }
    let link = if entry.product_url.is_empty() {
        String::new()
    } else {
        format!("  {}", entry.product_url)
    };
    lines.push(format!("       {} votes{link}", entry.votes));
    lines
}
