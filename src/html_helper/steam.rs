//! Steam storefront clean-up.
//!
//! Steam descriptions open with a localized `<h1>About the Game</h1>` header
//! followed by the actual body. Stripping everything up to and including that
//! header leaves only the body.

use regex::Regex;
use std::sync::LazyLock;

use super::formatting::html_format_remove;

/// "About the Game" headers in every storefront locale
pub const ABOUT_GAME_HEADERS: &[&str] = &[
    "<h1>About the Game</h1>",
    "<h1>À propos du jeu</h1>",
    "<h1>Относно играта</h1>",
    "<h1>关于游戏</h1>",
    "<h1>關於此遊戲</h1>",
    "<h1>O hře</h1>",
    "<h1>Om spillet</h1>",
    "<h1>Info over het spel</h1>",
    "<h1>Tietoja pelistä</h1>",
    "<h1>Über das Spiel</h1>",
    "<h1>Σχετικά με το παιχνίδι</h1>",
    "<h1>A játékról:&nbsp;</h1>",
    "<h1>Informazioni sul gioco</h1>",
    "<h1>ゲームについて</h1>",
    "<h1>게임 정보</h1>",
    "<h1>Informacje o&nbsp;grze</h1>",
    "<h1>Acerca do Jogo</h1>",
    "<h1>Sobre o jogo</h1>",
    "<h1>Despre joc</h1>",
    "<h1>Об игре</h1>",
    "<h1>Acerca del juego</h1>",
    "<h1>Om spelet</h1>",
    "<h1>ข้อมูลเกม</h1>",
    "<h1>Oyun Açıklaması</h1>",
    "<h1>Про гру</h1>",
    "<h1>Về trò chơi này</h1>",
];

// One alternation over every header; leftmost match is the earliest header
static ABOUT_GAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ABOUT_GAME_HEADERS
        .iter()
        .map(|header| regex::escape(header))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{alternation})")).expect("ABOUT_GAME_RE: escaped literals are valid")
});

/// Remove everything up to and including the "About the Game" header.
///
/// The text is flattened first. Among all localized headers the earliest one
/// in the text wins, matched case-insensitively. Without any header the
/// flattened text is returned.
///
/// # Example
/// ```
/// use description_editor::html_helper::steam_remove_about;
///
/// let html = "<h1>About the Game</h1>Some text";
/// assert_eq!(steam_remove_about(html), "Some text");
/// ```
#[must_use]
pub fn steam_remove_about(html: &str) -> String {
    let flat = html_format_remove(html);
    if flat.is_empty() {
        return flat;
    }

    match ABOUT_GAME_RE.find(&flat) {
        Some(header) => {
            log::debug!("Stripping storefront header '{}' at byte {}", header.as_str(), header.start());
            flat[header.end()..].to_string()
        }
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_english_header() {
        assert_eq!(steam_remove_about("<h1>About the Game</h1>Some text"), "Some text");
    }

    #[test]
    fn test_strips_prefix_before_header() {
        let html = "<img src=\"banner.jpg\">\n<h1>ABOUT THE GAME</h1>\n<p>Body</p>";
        assert_eq!(steam_remove_about(html), "<p>Body</p>");
    }

    #[test]
    fn test_strips_localized_header() {
        let html = "<h1>Über das Spiel</h1><p>Inhalt</p>";
        assert_eq!(steam_remove_about(html), "<p>Inhalt</p>");
        let html = "<h1>Informacje o&nbsp;grze</h1>Treść";
        assert_eq!(steam_remove_about(html), "Treść");
    }

    #[test]
    fn test_earliest_header_wins() {
        let html = "<h1>Об игре</h1>first<h1>About the Game</h1>second";
        assert_eq!(steam_remove_about(html), "first<h1>About the Game</h1>second");
    }

    #[test]
    fn test_no_header_returns_flattened() {
        let html = "<p>No\n    header</p>";
        assert_eq!(steam_remove_about(html), "<p>Noheader</p>");
    }

    #[test]
    fn test_headers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for header in ABOUT_GAME_HEADERS {
            assert!(seen.insert(header.to_lowercase()), "duplicate header {header}");
        }
    }
}
