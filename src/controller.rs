/// View controllers for the catalog and wishlist pages
///
/// Each controller owns the API client and the notification channel it was
/// built with. Every client failure is caught here and surfaces as exactly one
/// error toast; nothing propagates further.
use std::rc::Rc;

use log::{error, info, warn};

use crate::api::WishlistApi;
use crate::error::ClientError;
use crate::game_data::{Game, GameFilters, ItemId, WishlistItem};
use crate::notify::Notifier;
use crate::store::{group_by_store, StoreGroups};

pub const MSG_GAMES_EMPTY: &str = "Nenhum jogo encontrado.";
pub const MSG_GAMES_FAILED: &str = "Erro ao carregar jogos. Tente novamente.";
pub const MSG_MISSING_ID: &str = "Erro: ID do jogo não encontrado para adicionar à wishlist.";
pub const MSG_ADDED: &str = "Jogo adicionado à wishlist!";
pub const MSG_ADD_FAILED: &str = "Erro ao adicionar jogo. Por favor, tente novamente.";
pub const MSG_WISHLIST_EMPTY: &str = "Sua lista de desejos está vazia.";
pub const MSG_WISHLIST_FAILED: &str = "Erro ao carregar sua wishlist. Tente novamente.";
pub const MSG_REMOVED: &str = "Jogo removido da wishlist!";
pub const MSG_REMOVE_FAILED: &str = "Erro ao remover jogo da wishlist. Tente novamente.";

/// `Idle → Loading → {Ready, Failed}`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct CatalogController {
    api: Rc<dyn WishlistApi>,
    notifier: Notifier,
    filters: GameFilters,
}

impl CatalogController {
    /// Catalog of PC games
    pub fn new(api: Rc<dyn WishlistApi>, notifier: Notifier) -> Self {
        CatalogController::with_filters(api, notifier, GameFilters::platform("pc"))
    }

    pub fn with_filters(api: Rc<dyn WishlistApi>, notifier: Notifier, filters: GameFilters) -> Self {
        CatalogController {
            api,
            notifier,
            filters,
        }
    }

    pub fn filters(&self) -> &GameFilters {
        &self.filters
    }

    /// Fetch and group the catalog. The caller shows `ViewState::Loading` while this runs.
    pub async fn load(&self) -> ViewState<StoreGroups> {
        match self.api.list_games(&self.filters).await {
            Ok(games) if games.is_empty() => {
                info!("Catalog is empty for {:?}", self.filters);
                self.notifier.info(MSG_GAMES_EMPTY);
                ViewState::Ready(StoreGroups::new())
            }
            Ok(games) => {
                let groups = group_by_store(games);
                info!(
                    "Loaded {} games across {} stores",
                    groups.game_count(),
                    groups.len()
                );
                ViewState::Ready(groups)
            }
            Err(e) => {
                error!("Failed to load games: {}", e);
                let message = e.user_message(MSG_GAMES_FAILED);
                self.notifier.error(message.clone());
                ViewState::Failed(message)
            }
        }
    }

    pub async fn add_to_wishlist(&self, game: &Game) -> Result<Option<WishlistItem>, ClientError> {
        let Some(game_id) = game.id else {
            warn!("Refusing to add {:?} without an id", game.title);
            self.notifier.error(MSG_MISSING_ID);
            return Err(ClientError::Validation(MSG_MISSING_ID.to_string()));
        };

        info!("Adding {} (id {}) to the wishlist", game.title, game_id);
        match self.api.add_to_wishlist(game_id).await {
            Ok(item) => {
                self.notifier.success(MSG_ADDED);
                Ok(item)
            }
            Err(e) => {
                error!("Failed to add {} to the wishlist: {}", game_id, e);
                self.notifier.error(e.user_message(MSG_ADD_FAILED));
                Err(e)
            }
        }
    }
}

/// State transitions of the wishlist page
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    StartLoading,
    Loaded(ViewState<Vec<WishlistItem>>),
    /// Backend confirmed the deletion
    Removed(ItemId),
}

impl ViewState<Vec<WishlistItem>> {
    /// Apply to the latest state so overlapping removals never bring an item back
    pub fn apply(&self, action: WishlistAction) -> Self {
        match action {
            WishlistAction::StartLoading => ViewState::Loading,
            WishlistAction::Loaded(next) => next,
            WishlistAction::Removed(id) => match self {
                ViewState::Ready(items) => {
                    ViewState::Ready(items.iter().filter(|i| i.id != id).cloned().collect())
                }
                other => other.clone(),
            },
        }
    }
}

#[derive(Clone)]
pub struct WishlistController {
    api: Rc<dyn WishlistApi>,
    notifier: Notifier,
}

impl WishlistController {
    pub fn new(api: Rc<dyn WishlistApi>, notifier: Notifier) -> Self {
        WishlistController { api, notifier }
    }

    pub async fn load(&self) -> ViewState<Vec<WishlistItem>> {
        match self.api.list_wishlist().await {
            Ok(items) => {
                info!("Loaded {} wishlist items", items.len());
                if items.is_empty() {
                    self.notifier.info(MSG_WISHLIST_EMPTY);
                }
                ViewState::Ready(items)
            }
            Err(e) => {
                error!("Failed to load wishlist: {}", e);
                self.notifier.error(MSG_WISHLIST_FAILED);
                ViewState::Failed(MSG_WISHLIST_FAILED.to_string())
            }
        }
    }

    /// On `Ok` the caller applies `WishlistAction::Removed`; on `Err` the item stays.
    /// No automatic retry.
    pub async fn remove(&self, item_id: ItemId) -> Result<(), ClientError> {
        info!("Removing wishlist item {}", item_id);
        match self.api.remove_from_wishlist(item_id).await {
            Ok(()) => {
                self.notifier.success(MSG_REMOVED);
                Ok(())
            }
            Err(e) => {
                error!("Failed to remove wishlist item {}: {}", item_id, e);
                self.notifier.error(e.user_message(MSG_REMOVE_FAILED));
                Err(e)
            }
        }
    }
}
