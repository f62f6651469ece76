use crate::{components::user_dropdown::UserDropdown, models::app_state::AppState, routes::MainRoute};
use shared::catalog::CatalogView;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_store};

const CATEGORIES: [&str; 3] = ["Feminino", "Masculino", "Acessórios"];

#[function_component(Header)]
pub fn header() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let session = use_selector(|state: &AppState| state.session.clone());
    let cart_len = use_selector(|state: &AppState| state.cart.len());
    let search_term = use_state(String::new);

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search_term.set(input.value());
            }
        })
    };

    // Enter performs the search; an empty or whitespace-only term is a
    // no-op and keeps both the current view and the typed text.
    let on_search_keypress = {
        let search_term = search_term.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let term = (*search_term).clone();
            let mut performed = false;
            dispatch.reduce_mut(|state| {
                let products = state.products.clone().unwrap_or_default();
                if let Some(view) = CatalogView::search(&products, &term) {
                    state.view = view;
                    performed = true;
                }
            });
            if performed {
                search_term.set(String::new());
            }
        })
    };

    let filter_button = |category: &'static str| -> Html {
        let dispatch = dispatch.clone();
        let onclick = Callback::from(move |_| {
            dispatch.reduce_mut(|state| {
                let products = state.products.clone().unwrap_or_default();
                state.view = CatalogView::filter(&products, category);
            });
        });
        html! {
            <li><button class="btn btn-ghost" {onclick}>{category}</button></li>
        }
    };

    let on_cart_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|state| state.cart_open = !state.cart_open);
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Maya Bay"}
                </Link<MainRoute>>
            </a>
            <ul class="hidden menu sm:menu-horizontal">
                { for CATEGORIES.iter().map(|category| filter_button(*category)) }
            </ul>
            <div class="flex items-center gap-2">
                <input
                    class="input input-bordered input-sm w-40"
                    type="search"
                    placeholder="Buscar..."
                    value={(*search_term).clone()}
                    oninput={on_search_input}
                    onkeypress={on_search_keypress}
                />
                <button class="btn btn-ghost btn-circle" onclick={on_cart_click}>
                    <i class="fa-solid fa-bag-shopping text-lg"></i>
                    <span class="badge badge-sm badge-primary">{ *cart_len }</span>
                </button>
                {
                    if session.is_some() {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-circle">
                                <i class="fa-regular fa-user text-lg"></i>
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
