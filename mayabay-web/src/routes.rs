use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The storefront routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let session_opt = (*session).clone();
    let is_authenticated = session_opt.is_some();
    let is_admin = session_opt
        .as_ref()
        .map(|session| session.is_admin)
        .unwrap_or(false);

    match props.route.clone() {
        // The catalog is public; authentication only gates checkout and
        // the admin panel.
        MainRoute::Home => html! {
            <Layout>
                <HomePage />
            </Layout>
        },
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Admin => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            // Locally-derived flag, a UX convenience only. The backend
            // re-checks the bearer token on every admin request.
            if !is_admin {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Layout>
                    <AdminPage />
                </Layout>
            }
        }
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the storefront routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}
