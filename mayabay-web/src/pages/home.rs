use crate::components::{
    empty_results::EmptyResults, loading::Loading, product_card::ProductCard,
    product_modal::ProductModal,
};
use crate::models::app_state::AppState;
use shared::catalog::CatalogView;
use shared::models::Product;
use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let products = use_selector(|state: &AppState| state.products.clone());
    let view = use_selector(|state: &AppState| state.view.clone());
    let selected = use_state(|| None::<Product>);

    // Catalog never fetched (or fetch failed): stay on the placeholder.
    if products.is_none() {
        return html! { <Loading /> };
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |product: Product| selected.set(Some(product)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let on_reset = {
        let dispatch = dispatch;
        Callback::from(move |()| {
            dispatch.reduce_mut(|state| {
                let products = state.products.clone().unwrap_or_default();
                state.view = CatalogView::all(&products);
            });
        })
    };

    let grid = if view.items.is_empty() {
        html! { <EmptyResults {on_reset} /> }
    } else {
        html! {
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                { for view.items.iter().map(|product| html! {
                    <ProductCard
                        key={product.id}
                        product={product.clone()}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <section id="loja">
            <h2 class="text-2xl font-bold text-center my-6">{ &view.title }</h2>
            {grid}
            {
                if let Some(product) = (*selected).clone() {
                    html! { <ProductModal {product} {on_close} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
