use yew::{function_component, html, Html};

/// Placeholder shown while the catalog has not loaded. There is no
/// automatic retry; a failed fetch leaves this in place.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full py-16">
            <div class="text-xl font-medium flex items-center gap-2">
                <i class="fa-solid fa-gem text-primary"></i>
                <span>{"Maya Bay"}</span>
            </div>
            <div class="mt-3">
                <span>{"Conectando ao catálogo..."}</span>
            </div>
        </div>
    }
}
