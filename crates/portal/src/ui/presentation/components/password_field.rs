//! Password input with an eye-icon reveal toggle

use dioxus::prelude::*;
use rollcall_domain::PasswordVisibility;

/// Ids of the toggle button and its icon, derived from the input id
/// (`password` -> `togglePassword`, `passwordIcon`).
fn toggle_ids(input_id: &str) -> (String, String) {
    let mut chars = input_id.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    (format!("toggle{capitalized}"), format!("{input_id}Icon"))
}

#[derive(Props, Clone, PartialEq)]
pub struct PasswordFieldProps {
    pub id: String,
    pub name: String,
    #[props(default)]
    pub placeholder: String,
    /// Render the eye-icon toggle next to the input
    #[props(default)]
    pub revealable: bool,
    /// Controlled value; uncontrolled when absent
    pub value: Option<String>,
    pub oninput: Option<EventHandler<String>>,
}

#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let mut visibility = use_signal(PasswordVisibility::default);
    let (toggle_id, icon_id) = toggle_ids(&props.id);
    let input_type = visibility.read().input_type();
    let icon_class = visibility.read().icon_class();
    let oninput = props.oninput;

    rsx! {
        div {
            class: "input-group",
            input {
                id: "{props.id}",
                name: "{props.name}",
                r#type: "{input_type}",
                class: "form-control",
                placeholder: "{props.placeholder}",
                required: true,
                value: props.value.clone(),
                oninput: move |e: FormEvent| {
                    if let Some(handler) = oninput {
                        handler.call(e.value());
                    }
                },
            }
            if props.revealable {
                button {
                    id: "{toggle_id}",
                    r#type: "button",
                    class: "btn btn-outline-secondary",
                    onclick: move |_| visibility.write().toggle(),
                    i { id: "{icon_id}", class: "fas {icon_class}" }
                }
            }
        }
    }
}
