/// Application shell: header navigation, the active page and the toast host

use yew::prelude::*;

use crate::config::AppConfig;
use crate::ui::catalog::CatalogPage;
use crate::ui::components::ToastHost;
use crate::ui::wishlist::WishlistPage;
use crate::ui::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum ActivePage {
    Catalog,
    Wishlist,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let context = use_memo(props.config.clone(), |config| AppContext::new(config.clone()));
    let active_page = use_state(|| ActivePage::Catalog);

    // Tear the notification channel down with the app so no timer outlives it
    {
        let notifier = context.notifier.clone();
        use_effect_with((), move |_| move || notifier.shutdown());
    }

    let on_nav_click = {
        let active_page = active_page.clone();
        move |page: ActivePage| {
            let active_page = active_page.clone();
            Callback::from(move |_: MouseEvent| {
                active_page.set(page);
            })
        }
    };

    let nav_class = |page: ActivePage| {
        if *active_page == page {
            "pf-v5-c-tabs__item pf-m-current"
        } else {
            "pf-v5-c-tabs__item"
        }
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">{"Game Wishlist"}</h1>
                <div class="pf-v5-c-tabs tabs-nav">
                    <ul class="pf-v5-c-tabs__list">
                        <li class={nav_class(ActivePage::Catalog)}>
                            <button class="pf-v5-c-tabs__link" onclick={on_nav_click(ActivePage::Catalog)}>
                                <span class="pf-v5-c-tabs__item-text">{"Buscar Jogos"}</span>
                            </button>
                        </li>
                        <li class={nav_class(ActivePage::Wishlist)}>
                            <button class="pf-v5-c-tabs__link" onclick={on_nav_click(ActivePage::Wishlist)}>
                                <span class="pf-v5-c-tabs__item-text">{"Minha Wishlist"}</span>
                            </button>
                        </li>
                    </ul>
                </div>
            </header>

            <main class="container">
                {match *active_page {
                    ActivePage::Catalog => html! { <CatalogPage context={(*context).clone()} /> },
                    ActivePage::Wishlist => html! { <WishlistPage context={(*context).clone()} /> },
                }}
            </main>

            <ToastHost notifier={context.notifier.clone()} />
        </div>
    }
}
