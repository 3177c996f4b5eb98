/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::game_data::Game;
use crate::notify::{Notification, Notifier, Severity};

/// Shown when a thumbnail fails to load
pub const FALLBACK_THUMBNAIL: &str =
    "https://placehold.co/400x200/cccccc/333333?text=Imagem+Nao+Disponivel";

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="loading-text-center">
            <Spinner />
            if let Some(msg) = &props.message {
                <p class="loading-text">{msg}</p>
            }
        </div>
    }
}

#[derive(PartialEq, Clone, Copy)]
pub enum CardAction {
    AddToWishlist,
    RemoveFromWishlist,
}

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    pub action: CardAction,
    pub on_action: Callback<Game>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;

    let on_thumbnail_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            // only swap once, the fallback itself may fail
            if img.src() != FALLBACK_THUMBNAIL {
                img.set_src(FALLBACK_THUMBNAIL);
            }
        }
    });

    let onclick = props.on_action.reform({
        let game = game.clone();
        move |_: MouseEvent| game.clone()
    });

    let (test_id, label, variant) = match props.action {
        CardAction::AddToWishlist => ("game-card", "Adicionar à Wishlist", ButtonVariant::Primary),
        CardAction::RemoveFromWishlist => {
            ("wishlist-card", "Remover da Wishlist", ButtonVariant::Danger)
        }
    };

    html! {
        <div class="game-card" data-testid={test_id}>
            <img
                class="game-thumbnail"
                src={game.thumbnail.clone()}
                alt={game.title.clone()}
                onerror={on_thumbnail_error}
            />
            <div class="game-card-body">
                <h3 class="game-title">{&game.title}</h3>
                <p class="game-platform">{&game.platform}</p>
                <a
                    class="game-link"
                    href={game.game_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Ver no site"}
                </a>
                <Button {onclick} {variant} block={true}>
                    {label}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub notifier: Notifier,
}

/// Renders the notification channel's current toast
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let current = use_state(|| props.notifier.current());

    {
        let current = current.clone();
        use_effect_with(props.notifier.clone(), move |notifier| {
            let subscription = notifier.subscribe(move |n: &Notification| current.set(n.clone()));
            move || drop(subscription)
        });
    }

    if !current.visible {
        return html! {};
    }

    let alert_type = match current.severity {
        Severity::Info => AlertType::Info,
        Severity::Success => AlertType::Success,
        Severity::Error => AlertType::Danger,
    };

    let on_close = {
        let notifier = props.notifier.clone();
        Callback::from(move |_| notifier.hide())
    };

    html! {
        <div class="toast-container" role="alert">
            <Alert r#type={alert_type} title={current.message.clone()} inline={true}>
            </Alert>
            <Button onclick={on_close} variant={ButtonVariant::Plain}>
                {"✕"}
            </Button>
        </div>
    }
}
