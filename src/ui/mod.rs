/// UI module exports
use std::rc::Rc;

use crate::api::{HttpClient, WishlistApi};
use crate::config::AppConfig;
use crate::controller::{CatalogController, WishlistController};
use crate::notify::Notifier;

pub mod app;
pub mod catalog;
pub mod components;
pub mod wishlist;

/// Services shared by every view, created once at application start
#[derive(Clone)]
pub struct AppContext {
    pub api: Rc<dyn WishlistApi>,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        AppContext {
            api: Rc::new(HttpClient::new(config)),
            notifier: Notifier::browser(),
        }
    }

    pub fn catalog(&self) -> CatalogController {
        CatalogController::new(self.api.clone(), self.notifier.clone())
    }

    pub fn wishlist(&self) -> WishlistController {
        WishlistController::new(self.api.clone(), self.notifier.clone())
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.api), Rc::as_ptr(&other.api))
            && self.notifier == other.notifier
    }
}
