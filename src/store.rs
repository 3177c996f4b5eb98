/// Storefront classification and grouping for the game catalog
use crate::game_data::Game;

/// Label used when no known storefront matches
pub const DEFAULT_STORE: &str = "Outros";

/// Known storefront domain fragments, checked in order. First match wins.
const STORE_RULES: &[(&str, &str)] = &[
    ("steampowered.com", "Steam"),
    ("epicgames.com", "Epic Games"),
    ("roblox.com", "Roblox"),
    ("battle.net", "Battle.net"),
    ("origin.com", "Origin"),
    ("xbox.com", "Xbox"),
    ("playstation.com", "PlayStation"),
    ("gog.com", "GOG"),
    ("store.ubi.com", "Ubisoft"),
    ("itch.io", "itch.io"),
    ("amazon.com", "Amazon"),
];

/// Map a game detail URL to the storefront that hosts it
///
/// Plain substring matching against `STORE_RULES`, so any input is accepted:
/// - https://store.steampowered.com/app/1 → Steam
/// - https://www.gog.com/game/x → GOG
/// - https://unknown.example.com → Outros
pub fn classify(url: &str) -> &'static str {
    STORE_RULES
        .iter()
        .find(|(fragment, _)| url.contains(fragment))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_STORE)
}

/// Games grouped by storefront label.
///
/// Stores appear in the order they were first seen; games keep arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreGroups {
    groups: Vec<(String, Vec<Game>)>,
}

impl StoreGroups {
    pub fn new() -> Self {
        StoreGroups { groups: Vec::new() }
    }

    pub fn push(&mut self, store: &str, game: Game) {
        match self.groups.iter_mut().find(|(label, _)| label == store) {
            Some((_, games)) => games.push(game),
            None => self.groups.push((store.to_string(), vec![game])),
        }
    }

    pub fn get(&self, store: &str) -> Option<&[Game]> {
        self.groups
            .iter()
            .find(|(label, _)| label == store)
            .map(|(_, games)| games.as_slice())
    }

    pub fn stores(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Game])> {
        self.groups
            .iter()
            .map(|(label, games)| (label.as_str(), games.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn game_count(&self) -> usize {
        self.groups.iter().map(|(_, games)| games.len()).sum()
    }
}

/// Group games by the storefront of their `game_url`
pub fn group_by_store(games: Vec<Game>) -> StoreGroups {
    games.into_iter().fold(StoreGroups::new(), |mut groups, game| {
        let store = classify(&game.game_url);
        groups.push(store, game);
        groups
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_game(id: u64, title: &str, game_url: &str) -> Game {
        Game {
            id: Some(id),
            title: title.to_string(),
            thumbnail: format!("https://www.freetogame.com/g/{}/thumbnail.jpg", id),
            platform: "PC (Windows)".to_string(),
            game_url: game_url.to_string(),
        }
    }

    #[test]
    fn test_classify_known_stores() {
        assert_eq!(classify("https://store.steampowered.com/app/570"), "Steam");
        assert_eq!(classify("https://store.epicgames.com/p/fortnite"), "Epic Games");
        assert_eq!(classify("https://www.roblox.com/games/1"), "Roblox");
        assert_eq!(classify("https://us.battle.net/overwatch"), "Battle.net");
        assert_eq!(classify("https://www.xbox.com/games/halo"), "Xbox");
        assert_eq!(classify("https://www.gog.com/game/gwent"), "GOG");
        assert_eq!(classify("https://store.ubi.com/brawlhalla"), "Ubisoft");
        assert_eq!(classify("https://someone.itch.io/game"), "itch.io");
        assert_eq!(classify("https://www.amazon.com/games/lost-ark"), "Amazon");
    }

    #[test]
    fn test_classify_unknown_falls_back() {
        assert_eq!(classify("https://unknown.example.com"), DEFAULT_STORE);
        assert_eq!(classify("https://www.freetogame.com/open/warframe"), "Outros");
        assert_eq!(classify(""), "Outros");
        assert_eq!(classify("not a url at all"), "Outros");
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // Both steampowered.com and gog.com appear; Steam is earlier in the table
        assert_eq!(
            classify("https://www.gog.com/redirect?to=store.steampowered.com"),
            "Steam"
        );
        // playstation.com comes before amazon.com
        assert_eq!(
            classify("https://amazon.com/ref/playstation.com"),
            "PlayStation"
        );
    }

    #[test]
    fn test_group_by_store_scenario() {
        let games = vec![
            create_test_game(1, "A", "https://store.steampowered.com/x"),
            create_test_game(2, "B", "https://unknown.example.com"),
        ];

        let groups = group_by_store(games);

        assert_eq!(groups.len(), 2);
        let steam = groups.get("Steam").unwrap();
        assert_eq!(steam.len(), 1);
        assert_eq!(steam[0].title, "A");
        let other = groups.get("Outros").unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].title, "B");
    }

    #[test]
    fn test_group_by_store_preserves_order() {
        let games = vec![
            create_test_game(1, "Other 1", "https://example.com/1"),
            create_test_game(2, "Steam 1", "https://store.steampowered.com/1"),
            create_test_game(3, "Other 2", "https://example.com/2"),
            create_test_game(4, "Epic 1", "https://store.epicgames.com/1"),
            create_test_game(5, "Steam 2", "https://store.steampowered.com/2"),
        ];

        let groups = group_by_store(games);

        let stores: Vec<&str> = groups.stores().collect();
        assert_eq!(stores, vec!["Outros", "Steam", "Epic Games"]);

        let steam_titles: Vec<&str> = groups
            .get("Steam")
            .unwrap()
            .iter()
            .map(|g| g.title.as_str())
            .collect();
        assert_eq!(steam_titles, vec!["Steam 1", "Steam 2"]);
        assert_eq!(groups.game_count(), 5);
    }

    #[test]
    fn test_group_by_store_empty() {
        let groups = group_by_store(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(groups.game_count(), 0);
    }
}
