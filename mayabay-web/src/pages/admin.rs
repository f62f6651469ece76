use crate::api::MayaBayClient;
use crate::app::load_catalog;
use crate::browser;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::models::{NewProduct, Product};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

fn bind_input(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Product management: create and delete against the backend, with the
/// catalog re-fetched after every mutation (no optimistic update).
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let products = use_selector(|state: &AppState| state.products.clone().unwrap_or_default());
    let name = use_state(String::new);
    let price = use_state(String::new);
    let category = use_state(String::new);
    let sub_category = use_state(String::new);
    let image_url = use_state(String::new);
    let saving = use_state(|| false);
    let navigator = use_navigator();

    let on_save = {
        let name_handle = name.clone();
        let price_handle = price.clone();
        let category_handle = category.clone();
        let sub_category_handle = sub_category.clone();
        let image_url_handle = image_url.clone();
        let saving_handle = saving.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(price_value) = price_handle.parse::<f64>() else {
                browser::alert("Preço inválido.");
                return;
            };
            let Some(token) = session::stored_token() else {
                browser::alert("Sessão expirada.");
                return;
            };
            let payload = NewProduct {
                name: (*name_handle).clone(),
                price: price_value,
                category: (*category_handle).clone(),
                sub_category: (*sub_category_handle).clone(),
                image_url: (*image_url_handle).clone(),
            };
            saving_handle.set(true);
            let name_ref = name_handle.clone();
            let price_ref = price_handle.clone();
            let category_ref = category_handle.clone();
            let sub_category_ref = sub_category_handle.clone();
            let image_url_ref = image_url_handle.clone();
            let saving_ref = saving_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = MayaBayClient::shared();
                match client.create_product(&payload, &token).await {
                    Ok(_created) => {
                        browser::alert("Produto adicionado com sucesso!");
                        name_ref.set(String::new());
                        price_ref.set(String::new());
                        category_ref.set(String::new());
                        sub_category_ref.set(String::new());
                        image_url_ref.set(String::new());
                        load_catalog(dispatch);
                        // Panel closes after a successful save.
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        browser::alert(&err.admin_message());
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    let on_delete = {
        let dispatch = dispatch;
        move |id: i64| {
            let dispatch = dispatch.clone();
            Callback::from(move |_| {
                if !browser::confirm("Remover este item permanentemente?") {
                    return;
                }
                let Some(token) = session::stored_token() else {
                    browser::alert("Sessão expirada.");
                    return;
                };
                let dispatch = dispatch.clone();
                spawn_local(async move {
                    let client = MayaBayClient::shared();
                    match client.delete_product(id, &token).await {
                        Ok(()) => load_catalog(dispatch),
                        Err(err) => browser::alert(&err.admin_message()),
                    }
                });
            })
        }
    };

    let product_row = |product: &Product| -> Html {
        html! {
            <div class="flex items-center justify-between py-2 border-b border-base-300" key={product.id}>
                <span>
                    <strong>{ &product.name }</strong>
                    { format!(" (R$ {:.2})", product.price) }
                </span>
                <button class="btn btn-ghost btn-xs" onclick={on_delete(product.id)}>
                    <i class="fa-solid fa-trash-can"></i>
                </button>
            </div>
        }
    };

    let is_saving = *saving;

    html! {
        <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
            <form class="card bg-base-100 shadow p-6" onsubmit={on_save}>
                <h2 class="card-title">{"Novo Produto"}</h2>
                <div class="form-control">
                    <label class="label" for="p-name">
                        <span class="label-text">{"Nome"}</span>
                    </label>
                    <input id="p-name" class="input input-bordered" required=true
                        value={(*name).clone()} oninput={bind_input(name.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="p-price">
                        <span class="label-text">{"Preço"}</span>
                    </label>
                    <input id="p-price" class="input input-bordered" required=true
                        value={(*price).clone()} oninput={bind_input(price.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="p-category">
                        <span class="label-text">{"Categoria"}</span>
                    </label>
                    <input id="p-category" class="input input-bordered" required=true
                        value={(*category).clone()} oninput={bind_input(category.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="p-sub">
                        <span class="label-text">{"Subcategoria"}</span>
                    </label>
                    <input id="p-sub" class="input input-bordered" required=true
                        value={(*sub_category).clone()} oninput={bind_input(sub_category.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="p-img-url">
                        <span class="label-text">{"URL da imagem"}</span>
                    </label>
                    <input id="p-img-url" class="input input-bordered" required=true
                        value={(*image_url).clone()} oninput={bind_input(image_url.clone())} />
                </div>
                <div class="form-control mt-4">
                    <button class="btn btn-primary" type="submit" disabled={is_saving}>
                        { if is_saving { "Salvando..." } else { "Salvar" } }
                    </button>
                </div>
            </form>
            <div class="card bg-base-100 shadow p-6">
                <h2 class="card-title">{"Produtos"}</h2>
                { for products.iter().map(product_row) }
            </div>
        </div>
    }
}
