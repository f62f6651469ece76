use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let session_state = use_selector(|state: &AppState| state.session.clone());
    let Some(session) = (*session_state).clone() else {
        return html! {};
    };

    let admin_link = session.is_admin.then(|| {
        html! {
            <li>
                <Link<MainRoute> to={MainRoute::Admin}>{"Painel Admin"}</Link<MainRoute>>
            </li>
        }
    });

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // Reloads the page, resetting all in-memory state.
            session::logout();
        });
        html! {
            <li><a {onclick}>{"Sair"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <i class="fa-solid fa-user-check text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">
                        { format!("Olá, {}", session.display_name) }
                    </div>
                    <div class="text-xs text-base-content/70">{ &session.email }</div>
                </li>
                <div class="divider my-0"></div>
                { for admin_link }
                {logout_button}
            </ul>
        </div>
    }
}
