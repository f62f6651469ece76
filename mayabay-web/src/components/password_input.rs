use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<InputEvent>,
}

fn input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

fn eye_icon(visible: bool) -> &'static str {
    if visible {
        "fa-solid fa-eye-slash"
    } else {
        "fa-solid fa-eye"
    }
}

/// Password field with an eye-icon toggle that reveals the typed value.
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let visible = use_state(|| false);

    let on_toggle = {
        let visible = visible.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            visible.set(!*visible);
        })
    };

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <div class="relative">
                <input
                    id={props.id.clone()}
                    class="input input-bordered w-full pr-10"
                    type={input_type(*visible)}
                    required=true
                    value={props.value.clone()}
                    oninput={props.on_input.clone()}
                />
                <button
                    type="button"
                    class="btn btn-ghost btn-xs absolute right-2 top-3"
                    onclick={on_toggle}
                >
                    <i class={eye_icon(*visible)}></i>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_controls_input_type() {
        assert_eq!(input_type(false), "password");
        assert_eq!(input_type(true), "text");
    }

    #[test]
    fn test_eye_icon_follows_visibility() {
        assert_eq!(eye_icon(false), "fa-solid fa-eye");
        assert_eq!(eye_icon(true), "fa-solid fa-eye-slash");
    }
}
