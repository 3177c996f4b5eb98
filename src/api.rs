/// Backend REST client over `reqwest` (fetch on wasm32)

use async_trait::async_trait;
use log::debug;
use reqwest::RequestBuilder;

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::game_data::{
    parse_created_item, parse_games, parse_wishlist, Game, GameFilters, GameId, ItemId,
    PayloadError, WishlistItem,
};

// Every call is single-shot: no retry, no caching. Dropping the future cancels it.
#[async_trait(?Send)]
pub trait WishlistApi {
    /// `GET /search-games`
    async fn list_games(&self, filters: &GameFilters) -> Result<Vec<Game>, ClientError>;

    /// `GET /wishlist`
    async fn list_wishlist(&self) -> Result<Vec<WishlistItem>, ClientError>;

    /// `POST /wishlist/from-freetogame?id=`. `None` when the backend answers with an empty body.
    async fn add_to_wishlist(&self, game_id: GameId) -> Result<Option<WishlistItem>, ClientError>;

    /// `DELETE /wishlist/{id}`. Not idempotent: removing twice fails with a 404.
    async fn remove_from_wishlist(&self, item_id: ItemId) -> Result<(), ClientError>;
}

pub struct HttpClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl HttpClient {
    pub fn new(config: AppConfig) -> Self {
        HttpClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn search_games_request(&self, filters: &GameFilters) -> RequestBuilder {
        self.http
            .get(self.config.endpoint("/search-games"))
            .query(&filters.to_query())
    }

    fn wishlist_request(&self) -> RequestBuilder {
        self.http.get(self.config.endpoint("/wishlist"))
    }

    fn add_request(&self, game_id: GameId) -> RequestBuilder {
        self.http
            .post(self.config.endpoint("/wishlist/from-freetogame"))
            .query(&[("id", game_id)])
    }

    fn remove_request(&self, item_id: ItemId) -> RequestBuilder {
        self.http
            .delete(self.config.endpoint(&format!("/wishlist/{}", item_id)))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ClientError> {
        let request = request
            .build()
            .map_err(|e| ClientError::transport(e.to_string()))?;
        debug!("{} {}", request.method(), request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::RequestFailed {
                status: Some(status),
                detail: None,
                reason: format!("failed to read response body: {}", e),
            })?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl WishlistApi for HttpClient {
    async fn list_games(&self, filters: &GameFilters) -> Result<Vec<Game>, ClientError> {
        let (status, body) = self.send(self.search_games_request(filters)).await?;
        decode_response(status, &body, parse_games)
    }

    async fn list_wishlist(&self) -> Result<Vec<WishlistItem>, ClientError> {
        let (status, body) = self.send(self.wishlist_request()).await?;
        decode_response(status, &body, parse_wishlist)
    }

    async fn add_to_wishlist(&self, game_id: GameId) -> Result<Option<WishlistItem>, ClientError> {
        let (status, body) = self.send(self.add_request(game_id)).await?;
        decode_response(status, &body, parse_created_item)
    }

    async fn remove_from_wishlist(&self, item_id: ItemId) -> Result<(), ClientError> {
        let (status, body) = self.send(self.remove_request(item_id)).await?;
        check_status(status, &body)
    }
}

/// Turn a non-2xx response into `RequestFailed`, lifting a string `detail` out of the body
pub fn check_status(status: u16, body: &str) -> Result<(), ClientError> {
    if (200..=299).contains(&status) {
        return Ok(());
    }

    Err(ClientError::RequestFailed {
        status: Some(status),
        detail: error_detail(body),
        reason: format!("backend answered with status {}", status),
    })
}

/// Check the status, then run the payload through its schema validation
pub fn decode_response<T>(
    status: u16,
    body: &str,
    parse: impl FnOnce(&str) -> Result<T, PayloadError>,
) -> Result<T, ClientError> {
    check_status(status, body)?;
    parse(body).map_err(|e| ClientError::malformed(status, e))
}

fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(|detail| detail.to_string())
}
