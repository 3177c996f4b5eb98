/// Wishlist page

use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::controller::{ViewState, WishlistAction};
use crate::game_data::{Game, WishlistItem};
use crate::ui::components::{CardAction, GameCard, Loader};
use crate::ui::AppContext;

impl Reducible for ViewState<Vec<WishlistItem>> {
    type Action = WishlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct WishlistPageProps {
    pub context: AppContext,
}

#[function_component(WishlistPage)]
pub fn wishlist_page(props: &WishlistPageProps) -> Html {
    let controller = use_memo(props.context.clone(), |context| context.wishlist());
    let state = use_reducer(ViewState::<Vec<WishlistItem>>::default);

    let on_reload = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();

        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();

            dispatcher.dispatch(WishlistAction::StartLoading);
            spawn_local(async move {
                let next = controller.load().await;
                dispatcher.dispatch(WishlistAction::Loaded(next));
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

    let on_remove = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();

        Callback::from(move |game: Game| {
            let Some(item_id) = game.id else {
                return;
            };
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                // local state only changes once the backend confirmed the delete
                if controller.remove(item_id).await.is_ok() {
                    dispatcher.dispatch(WishlistAction::Removed(item_id));
                }
            });
        })
    };

    html! {
        <div class="page" role="main" aria-label="Wishlist de jogos">
            <h1 class="page-title">{"Lista de Desejos"}</h1>

            {match &*state {
                ViewState::Idle | ViewState::Loading => html! {
                    <Loader message={Some("Carregando wishlist...".to_string())} />
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
                ViewState::Ready(items) if items.is_empty() => html! {
                    <div class="empty-state" role="status" aria-live="polite">
                        <p>{"Sua lista de desejos está vazia. Adicione alguns jogos!"}</p>
                    </div>
                },
                ViewState::Ready(items) => html! {
                    <div class="game-grid">
                        {for items.iter().map(|item| html! {
                            <GameCard
                                key={item.id.to_string()}
                                game={Game::from(item.clone())}
                                action={CardAction::RemoveFromWishlist}
                                on_action={on_remove.clone()}
                            />
                        })}
                    </div>
                },
            }}

            if let Some(items) = state.ready() {
                <div class="footer">
                    {format!("{} jogos na wishlist", items.len())}
                </div>
            }
        </div>
    }
}
