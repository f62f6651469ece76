use crate::api::MayaBayClient;
use crate::browser;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::cart::CartLine;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

#[function_component(CartSidebar)]
pub fn cart_sidebar() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let cart = use_selector(|state: &AppState| state.cart.clone());
    let cart_open = use_selector(|state: &AppState| state.cart_open);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    if !*cart_open {
        return html! {};
    }

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|state| state.cart_open = false))
    };

    let line_row = |line: &CartLine| -> Html {
        let dispatch = dispatch.clone();
        let line_id = line.line_id;
        let on_remove = Callback::from(move |_| {
            dispatch.reduce_mut(|state| state.cart.remove(line_id));
        });
        html! {
            <div class="flex items-center gap-3 py-2 border-b border-base-300" key={line_id.to_string()}>
                <img src={line.image_url.clone()} class="w-14 h-14 object-cover rounded" />
                <div class="flex-grow">
                    <p class="text-sm font-medium">{ &line.name }</p>
                    <p class="text-xs text-base-content/70">{ format!("TAM: {}", line.size) }</p>
                    <p class="text-sm">{ format!("R$ {:.2}", line.price) }</p>
                </div>
                <button class="btn btn-ghost btn-xs" onclick={on_remove}>
                    <i class="fa-solid fa-trash-can"></i>
                </button>
            </div>
        }
    };

    // Checkout needs a session and a non-empty cart; the whole cart is
    // posted and a returned init_point sends the browser to the gateway.
    let on_checkout = {
        let dispatch = dispatch.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let state = dispatch.get();
            if state.session.is_none() {
                browser::alert("Por favor, faça login para finalizar sua compra.");
                dispatch.reduce_mut(|state| state.cart_open = false);
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&MainRoute::Login);
                }
                return;
            }
            if state.cart.is_empty() {
                browser::alert("Sacola vazia.");
                return;
            }
            let lines = state.cart.lines().to_vec();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let client = MayaBayClient::shared();
                match client.checkout(&lines).await {
                    Ok(response) => {
                        if let Some(url) = response.init_point {
                            browser::redirect(&url);
                        }
                    }
                    Err(err) => {
                        log::error!("falha no checkout: {err}");
                        browser::alert("Erro no checkout.");
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <aside class="fixed top-0 right-0 h-full w-80 bg-base-100 shadow-lg z-50 p-4 flex flex-col">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-lg font-bold">{"Sacola"}</h3>
                <button class="btn btn-sm btn-circle" onclick={on_close}>{"✕"}</button>
            </div>
            <div class="flex-grow overflow-y-auto">
                { for cart.lines().iter().map(line_row) }
            </div>
            <div class="border-t border-base-300 pt-3">
                <p class="flex justify-between font-semibold">
                    <span>{"Total"}</span>
                    <span>{ format!("R$ {:.2}", cart.total()) }</span>
                </p>
                <button class="btn btn-primary w-full mt-3" onclick={on_checkout} disabled={*busy}>
                    { if *busy { "Processando..." } else { "Finalizar Compra" } }
                </button>
            </div>
        </aside>
    }
}
