use crate::api::MayaBayClient;
use crate::browser;
use crate::components::password_input::PasswordInput;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use chrono::Utc;
use shared::models::{LoginRequest, RegisterRequest};
use shared::session::Session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Clone, Copy, PartialEq)]
enum AuthForm {
    Login,
    Register,
}

fn bind_input(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(|| AuthForm::Login);

    let switch_to = |target: AuthForm| {
        let form = form.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            form.set(target);
        })
    };

    let on_registered = {
        let form = form.clone();
        Callback::from(move |()| form.set(AuthForm::Login))
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                {
                    match *form {
                        AuthForm::Login => html! {
                            <LoginForm on_register={switch_to(AuthForm::Register)} />
                        },
                        AuthForm::Register => html! {
                            <RegisterForm
                                on_login={switch_to(AuthForm::Login)}
                                {on_registered}
                            />
                        },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LoginFormProps {
    on_register: Callback<MouseEvent>,
}

#[function_component(LoginForm)]
fn login_form(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let email_ref = email_handle.clone();
            let password_ref = password_handle.clone();
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = MayaBayClient::shared();
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        session::store_credentials(&response.access_token, response.is_admin);
                        match Session::from_token(&response.access_token, Utc::now().timestamp()) {
                            Ok(new_session) => {
                                // In-place UI update, no page reload; the
                                // admin affordances follow the new session.
                                dispatch.reduce_mut(|state| state.session = Some(new_session));
                                // Credential fields never outlive the login.
                                email_ref.set(String::new());
                                password_ref.set(String::new());
                                if let Some(ref nav) = navigator {
                                    nav.push(&MainRoute::Home);
                                }
                            }
                            Err(err) => {
                                log::error!("token recém-emitido inválido: {err}");
                                session::clear_credentials();
                                error_ref
                                    .set(Some("Não foi possível iniciar a sessão.".to_string()));
                            }
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.user_message()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_forgot = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        browser::alert("Um link de recuperação foi enviado para o seu e-mail.");
    });

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <form class="card-body" onsubmit={onsubmit}>
            <h2 class="card-title text-2xl">{"Entrar"}</h2>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            <div class="form-control">
                <label class="label" for="login-email">
                    <span class="label-text">{"E-mail"}</span>
                </label>
                <input
                    id="login-email"
                    class="input input-bordered"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(email.clone())}
                />
            </div>
            <PasswordInput
                id="login-pass"
                label="Senha"
                value={(*password).clone()}
                on_input={bind_input(password.clone())}
            />
            <div class="form-control mt-6">
                <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                    {if is_busy { "VERIFICANDO..." } else { "ENTRAR" }}
                </button>
            </div>
            <div class="flex justify-between text-sm mt-2">
                <a href="#" class="link" onclick={on_forgot}>{"Esqueci minha senha"}</a>
                <a href="#" class="link" onclick={props.on_register.clone()}>{"Criar conta"}</a>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct RegisterFormProps {
    on_login: Callback<MouseEvent>,
    on_registered: Callback<()>,
}

#[function_component(RegisterForm)]
fn register_form(props: &RegisterFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let admin_key = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm.clone();
        let admin_key_handle = admin_key.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let confirm_value = (*confirm_handle).clone();
            let admin_key_value = (*admin_key_handle).clone();

            // Client-side checks run before any network call.
            if email_value.is_empty() || password_value.is_empty() {
                error_handle.set(Some("Preencha todos os campos obrigatórios.".to_string()));
                return;
            }
            if password_value != confirm_value {
                error_handle.set(Some("As senhas não coincidem.".to_string()));
                return;
            }
            if password_value.len() < 6 {
                error_handle.set(Some(
                    "A senha deve ter no mínimo 6 caracteres.".to_string(),
                ));
                return;
            }

            loading_handle.set(true);
            error_handle.set(None);
            let email_ref = email_handle.clone();
            let password_ref = password_handle.clone();
            let confirm_ref = confirm_handle.clone();
            let admin_key_ref = admin_key_handle.clone();
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let client = MayaBayClient::shared();
                let request = RegisterRequest {
                    email: email_value,
                    password: password_value,
                    admin_key: (!admin_key_value.is_empty()).then_some(admin_key_value),
                };
                match client.register(&request).await {
                    Ok(response) => {
                        browser::alert(if response.is_admin {
                            "Conta STAFF criada!"
                        } else {
                            "Conta criada com sucesso!"
                        });
                        email_ref.set(String::new());
                        password_ref.set(String::new());
                        confirm_ref.set(String::new());
                        admin_key_ref.set(String::new());
                        // Registration never starts a session; back to login.
                        on_registered.emit(());
                    }
                    Err(err) => {
                        error_ref.set(Some(err.user_message()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;

    html! {
        <form class="card-body" onsubmit={onsubmit}>
            <h2 class="card-title text-2xl">{"Criar conta"}</h2>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            <div class="form-control">
                <label class="label" for="reg-email">
                    <span class="label-text">{"E-mail"}</span>
                </label>
                <input
                    id="reg-email"
                    class="input input-bordered"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(email.clone())}
                />
            </div>
            <PasswordInput
                id="reg-pass"
                label="Senha"
                value={(*password).clone()}
                on_input={bind_input(password.clone())}
            />
            <PasswordInput
                id="reg-pass-conf"
                label="Confirmar senha"
                value={(*confirm).clone()}
                on_input={bind_input(confirm.clone())}
            />
            <div class="form-control">
                <label class="label" for="reg-admin-key">
                    <span class="label-text">{"Chave staff (opcional)"}</span>
                </label>
                <input
                    id="reg-admin-key"
                    class="input input-bordered"
                    type="password"
                    value={(*admin_key).clone()}
                    oninput={bind_input(admin_key.clone())}
                />
            </div>
            <div class="form-control mt-6">
                <button class="btn btn-primary" type="submit" disabled={is_busy}>
                    {if is_busy { "ENVIANDO..." } else { "CRIAR CONTA" }}
                </button>
            </div>
            <div class="text-sm mt-2">
                <a href="#" class="link" onclick={props.on_login.clone()}>{"Já tenho conta"}</a>
            </div>
        </form>
    }
}
