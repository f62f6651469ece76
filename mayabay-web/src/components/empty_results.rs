use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyResultsProps {
    pub on_reset: Callback<()>,
}

/// Empty-state shown when a search or filter matches nothing.
#[function_component(EmptyResults)]
pub fn empty_results(props: &EmptyResultsProps) -> Html {
    let onclick = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    html! {
        <div class="flex flex-col items-center text-center py-16">
            <i class="fa-solid fa-magnifying-glass text-3xl text-base-content/40"></i>
            <h3 class="text-lg font-bold mt-4">{"Busca sem resultados"}</h3>
            <p class="text-sm text-base-content/70 mt-2">
                {"Não encontramos itens correspondentes à sua procura."}
                <br />
                {"Que tal explorar nossa curadoria completa?"}
            </p>
            <button class="btn btn-neutral mt-6 min-w-48" {onclick}>
                {"Veja Toda a Curadoria"}
            </button>
        </div>
    }
}
