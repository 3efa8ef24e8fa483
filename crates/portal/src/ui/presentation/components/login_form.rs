//! Login form - group select driving the person select
//!
//! The person list is re-rendered from the page roster whenever the group
//! changes. Both the chosen value and the option nodes follow the selection
//! state, so a group change always lands on the list's header or
//! placeholder. The form itself posts to the server like a plain HTML form.

use dioxus::prelude::*;
use rollcall_domain::{SelectOption, SelectionState};

use crate::presentation::components::PasswordField;
use crate::presentation::state::use_portal_state;

#[component]
pub fn LoginForm() -> Element {
    let state = use_portal_state();
    let mut selection = use_signal(SelectionState::new);

    let person_options = use_memo(move || {
        let selection = selection.read();
        let options = state
            .selector
            .read()
            .render(selection.group(), &state.roster.read());
        tracing::debug!(
            group = selection.group(),
            options = options.len(),
            "Person list rendered"
        );
        options
    });

    // A chosen person that left the list is cleared
    use_effect(move || {
        let options = person_options.read();
        let mut next = selection.peek().clone();
        next.reconcile(&options);
        if next != *selection.peek() {
            selection.set(next);
        }
    });

    let group = selection.read().group().to_string();
    let person_entries: Vec<(String, SelectOption)> = person_options
        .read()
        .iter()
        .enumerate()
        .map(|(index, entry)| (option_key(&group, index), entry.clone()))
        .collect();
    let person_value = person_select_value(&selection.read(), &person_options.read());
    let can_submit = selection.read().is_complete();

    rsx! {
        form {
            method: "post",
            action: "/login",
            class: "login-form",

            div {
                class: "mb-3",
                label { r#for: "group", class: "form-label", "Группа" }
                select {
                    id: "group",
                    name: "group",
                    class: "form-select",
                    onchange: move |e: FormEvent| selection.write().choose_group(e.value()),
                    for entry in state.group_options.read().iter() {
                        OptionTag { entry: entry.clone() }
                    }
                }
            }

            div {
                class: "mb-3",
                label { r#for: "username", class: "form-label", "Пользователь" }
                select {
                    id: "username",
                    name: "username",
                    class: "form-select",
                    required: true,
                    value: "{person_value}",
                    onchange: move |e: FormEvent| selection.write().choose_person(e.value()),
                    for (key, entry) in person_entries {
                        OptionTag { key: "{key}", entry }
                    }
                }
            }

            div {
                class: "mb-3",
                label { r#for: "password", class: "form-label", "Пароль" }
                PasswordField {
                    id: "password",
                    name: "password",
                    placeholder: "Введите пароль",
                    revealable: true,
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary w-100",
                disabled: !can_submit,
                "Войти"
            }
        }
    }
}

/// Value the person `<select>` shows: the chosen person while it is still
/// selectable, otherwise `""` (the header or placeholder).
fn person_select_value(selection: &SelectionState, options: &[SelectOption]) -> String {
    let person = selection.person();
    let selectable = options
        .iter()
        .any(|o| !o.disabled && !o.value.is_empty() && o.value == person);
    if selectable {
        person.to_string()
    } else {
        String::new()
    }
}

/// Option keys change with the group, so a new group gets fresh option nodes
fn option_key(group: &str, index: usize) -> String {
    format!("{group}#{index}")
}

#[component]
fn OptionTag(entry: SelectOption) -> Element {
    rsx! {
        option {
            value: "{entry.value}",
            disabled: entry.disabled,
            selected: entry.selected,
            "{entry.label}"
        }
    }
}
