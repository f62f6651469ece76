use shared::models::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_select: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let onclick = {
        let product = props.product.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(product.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow cursor-pointer" {onclick}>
            <figure>
                <img src={props.product.image_url.clone()} alt={props.product.name.clone()} />
            </figure>
            <div class="card-body p-4">
                <h4 class="card-title text-base">{ &props.product.name }</h4>
                <p class="text-sm font-semibold">{ format!("R$ {:.2}", props.product.price) }</p>
            </div>
        </div>
    }
}
