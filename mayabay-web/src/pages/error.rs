use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16">
            <h2 class="text-3xl font-bold">{"404"}</h2>
            <p class="mt-2 text-base-content/70">{"Página não encontrada."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-neutral mt-6">
                {"Voltar à loja"}
            </Link<MainRoute>>
        </div>
    }
}
