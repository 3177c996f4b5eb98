/// Catalog page: free-to-play PC games grouped by storefront

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::controller::ViewState;
use crate::game_data::Game;
use crate::store::StoreGroups;
use crate::ui::components::{CardAction, GameCard, Loader};
use crate::ui::AppContext;

/// Window event that exercises the add-without-id path from end-to-end tests
pub const INVALID_ADD_EVENT: &str = "game:add-invalid";

#[derive(Properties, PartialEq)]
pub struct CatalogPageProps {
    pub context: AppContext,
}

#[function_component(CatalogPage)]
pub fn catalog_page(props: &CatalogPageProps) -> Html {
    let controller = use_memo(props.context.clone(), |context| context.catalog());
    let state = use_state(|| ViewState::<StoreGroups>::Idle);

    let on_reload = {
        let controller = controller.clone();
        let state = state.clone();

        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let state = state.clone();

            state.set(ViewState::Loading);
            spawn_local(async move {
                state.set(controller.load().await);
            });
        })
    };

    // Load on mount
    {
        let on_reload = on_reload.clone();
        use_effect_with((), move |_| {
            on_reload.emit(());
            || ()
        });
    }

    // End-to-end hook: dispatching `game:add-invalid` on window tries to add a game without an id
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let controller = controller.clone();
                spawn_local(async move {
                    let _ = controller.add_to_wishlist(&Game::default()).await;
                });
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    INVALID_ADD_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        INVALID_ADD_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_add = {
        let controller = controller.clone();
        Callback::from(move |game: Game| {
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.add_to_wishlist(&game).await;
            });
        })
    };

    html! {
        <div class="page">
            <h1 class="page-title">{"Jogos Gratuitos por Loja"}</h1>

            {match &*state {
                ViewState::Idle | ViewState::Loading => html! {
                    <Loader message={Some("Carregando jogos...".to_string())} />
                },
                ViewState::Failed(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Erro"} inline={true}>
                            {err.clone()}
                        </Alert>
                        <Button onclick={on_reload.reform(|_| ())} variant={ButtonVariant::Secondary}>
                            {"Tentar novamente"}
                        </Button>
                    </div>
                },
                ViewState::Ready(groups) if groups.is_empty() => html! {
                    <div class="empty-state" role="status" aria-live="polite">
                        <p>{"Nenhum jogo encontrado."}</p>
                    </div>
                },
                ViewState::Ready(groups) => html! {
                    <>
                        {for groups.iter().map(|(store, games)| html! {
                            <section key={store.to_string()} class="store-group">
                                <h2 class="store-title">{format!("{} ({})", store, games.len())}</h2>
                                <div class="game-grid">
                                    {for games.iter().enumerate().map(|(index, game)| html! {
                                        <GameCard
                                            key={card_key(game, index)}
                                            game={game.clone()}
                                            action={CardAction::AddToWishlist}
                                            on_action={on_add.clone()}
                                        />
                                    })}
                                </div>
                            </section>
                        })}
                    </>
                },
            }}
        </div>
    }
}

fn card_key(game: &Game, index: usize) -> String {
    match game.id {
        Some(id) => id.to_string(),
        None => format!("missing-{}", index),
    }
}
