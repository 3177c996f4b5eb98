/// Data structures for the game catalog and wishlist
use serde::{Deserialize, Serialize};

pub type GameId = u64;
pub type ItemId = u64;

/// A free-to-play game as returned by `GET /search-games`
///
/// The identifier is optional so that an entry missing it still renders;
/// adding such a game to the wishlist is rejected before any request is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Game {
    #[serde(default)]
    pub id: Option<GameId>,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub platform: String,
    pub game_url: String,
}

/// A game the backend has persisted on the wishlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub platform: String,
    pub game_url: String,
}

impl From<WishlistItem> for Game {
    fn from(item: WishlistItem) -> Game {
        Game {
            id: Some(item.id),
            title: item.title,
            thumbnail: item.thumbnail,
            platform: item.platform,
            game_url: item.game_url,
        }
    }
}

/// Query filters for `GET /search-games`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl GameFilters {
    pub fn platform(platform: &str) -> GameFilters {
        GameFilters {
            platform: Some(platform.to_string()),
            ..GameFilters::default()
        }
    }

    /// Query pairs in a stable order, skipping unset filters
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("platform", &self.platform),
            ("title", &self.title),
            ("genre", &self.genre),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
        .collect()
    }
}

/// A backend payload that does not match the expected schema
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {index}: field `{field}` is blank")]
    BlankField { index: usize, field: &'static str },
}

fn require(index: usize, field: &'static str, value: &str) -> Result<(), PayloadError> {
    if value.trim().is_empty() {
        Err(PayloadError::BlankField { index, field })
    } else {
        Ok(())
    }
}

impl Game {
    fn validate(&self, index: usize) -> Result<(), PayloadError> {
        require(index, "title", &self.title)?;
        require(index, "game_url", &self.game_url)
    }
}

impl WishlistItem {
    fn validate(&self, index: usize) -> Result<(), PayloadError> {
        require(index, "title", &self.title)?;
        require(index, "game_url", &self.game_url)
    }
}

/// Parse and validate a `GET /search-games` body
pub fn parse_games(body: &str) -> Result<Vec<Game>, PayloadError> {
    let games: Vec<Game> = serde_json::from_str(body)?;
    for (index, game) in games.iter().enumerate() {
        game.validate(index)?;
    }
    Ok(games)
}

/// Parse and validate a `GET /wishlist` body
pub fn parse_wishlist(body: &str) -> Result<Vec<WishlistItem>, PayloadError> {
    let items: Vec<WishlistItem> = serde_json::from_str(body)?;
    for (index, item) in items.iter().enumerate() {
        item.validate(index)?;
    }
    Ok(items)
}

/// Parse the body of a successful add. An empty body is a valid success.
pub fn parse_created_item(body: &str) -> Result<Option<WishlistItem>, PayloadError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let item: Option<WishlistItem> = serde_json::from_str(body)?;
    if let Some(item) = &item {
        item.validate(0)?;
    }
    Ok(item)
}
