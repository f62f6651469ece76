use crate::api::MayaBayClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::catalog::CatalogView;
use wasm_bindgen_futures::spawn_local;
use yew::{function_component, html, use_effect_with, Html};
use yew_router::prelude::*;
use yewdux::prelude::use_store;
use yewdux::Dispatch;

/// Fetches the catalog and publishes it to the store.
///
/// On failure the products stay unset so the grid keeps its connecting
/// placeholder; the error is logged and never surfaced as an alert.
pub fn load_catalog(dispatch: Dispatch<AppState>) {
    spawn_local(async move {
        let client = MayaBayClient::shared();
        match client.get_products().await {
            Ok(products) => {
                dispatch.reduce_mut(|state| {
                    state.view = CatalogView::all(&products);
                    state.products = Some(products);
                });
            }
            Err(err) => {
                log::error!("falha ao carregar o catálogo: {err}");
            }
        }
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            // Session first, so the header renders the right affordances
            // while the catalog is still loading.
            let session = session::check_auth();
            dispatch.reduce_mut(|state| state.session = session);
            load_catalog(dispatch);
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
