use crate::browser;
use crate::models::app_state::AppState;
use shared::cart::CartLine;
use shared::models::Product;
use yew::prelude::*;
use yewdux::prelude::use_store;

const SIZES: [&str; 4] = ["P", "M", "G", "GG"];

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub product: Product,
    pub on_close: Callback<()>,
}

#[function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let selected_size = use_state(|| None::<String>);

    let size_button = |size: &'static str| -> Html {
        let selected_size = selected_size.clone();
        let active = selected_size.as_deref() == Some(size);
        let onclick = Callback::from(move |_| selected_size.set(Some(size.to_string())));
        html! {
            <button
                class={classes!("btn", "btn-sm", active.then_some("btn-active"))}
                {onclick}
            >
                {size}
            </button>
        }
    };

    // Adding requires a chosen size. The line id is minted from the
    // current time, unique enough for this session's list only.
    let on_add = {
        let product = props.product.clone();
        let selected_size = selected_size.clone();
        let dispatch = dispatch;
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            let Some(size) = (*selected_size).clone() else {
                browser::alert("Selecione um tamanho.");
                return;
            };
            let line_id = js_sys::Date::now() as u64;
            let line = CartLine::new(&product, size, line_id);
            dispatch.reduce_mut(|state| {
                state.cart.add(line);
                state.cart_open = true;
            });
            on_close.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <button class="btn btn-sm btn-circle absolute right-2 top-2" onclick={on_close}>
                    {"✕"}
                </button>
                <figure>
                    <img src={props.product.image_url.clone()} alt={props.product.name.clone()} />
                </figure>
                <h3 class="text-lg font-bold mt-4">{ &props.product.name }</h3>
                <p class="font-semibold">{ format!("R$ {:.2}", props.product.price) }</p>
                <div class="flex gap-2 mt-4">
                    { for SIZES.iter().map(|size| size_button(*size)) }
                </div>
                <div class="modal-action">
                    <button class="btn btn-primary w-full" onclick={on_add}>
                        {"Adicionar à Sacola"}
                    </button>
                </div>
            </div>
        </div>
    }
}
