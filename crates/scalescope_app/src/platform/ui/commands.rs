//! Line commands typed at the dashboard prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search term; empty clears it.
    Search(String),
    /// Select a category chip; empty selects "All".
    Category(String),
    ToggleFavoritesOnly,
    /// Toggle the heart on the 1-based card number.
    ToggleFavorite(usize),
    Export,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &[&str] = &[
    "search <text>     filter by name (blank clears)",
    "category <name>   filter by category (blank shows All)",
    "favorites         switch between all startups and favorites",
    "fav <n>           save/remove card n as a favorite",
    "export            write the visible cards to startups.csv",
    "help              show this list",
    "quit              exit",
];

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" | "/" => Command::Search(rest.to_string()),
        "category" | "cat" | "c" => Command::Category(rest.to_string()),
        "favorites" | "favs" => Command::ToggleFavoritesOnly,
        "fav" | "f" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => Command::ToggleFavorite(n),
            _ => Command::Unknown(line.to_string()),
        },
        "export" | "e" => Command::Export,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::{parse, Command};

    #[test]
    fn search_keeps_inner_spaces_and_may_be_blank() {
        assert_eq!(
            parse("search  deep tech "),
            Some(Command::Search("deep tech".to_string()))
        );
        assert_eq!(parse("search"), Some(Command::Search(String::new())));
    }

    #[test]
    fn fav_requires_positive_card_number() {
        assert_eq!(parse("fav 2"), Some(Command::ToggleFavorite(2)));
        assert_eq!(parse("fav 0"), Some(Command::Unknown("fav 0".to_string())));
        assert_eq!(parse("fav x"), Some(Command::Unknown("fav x".to_string())));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse("EXPORT"), Some(Command::Export));
        assert_eq!(parse("Cat AI"), Some(Command::Category("AI".to_string())));
        assert_eq!(parse("favorites"), Some(Command::ToggleFavoritesOnly));
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse("   "), None);
    }
}
