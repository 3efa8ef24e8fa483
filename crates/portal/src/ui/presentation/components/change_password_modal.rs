//! Change password modal
//!
//! Submission is blocked on the client only when the confirmation differs;
//! everything else is validated by the server on `POST /change-password`.
//!
//! Escape is handled by the page surface (see `dismiss_on_key`), which sees
//! key presses wherever focus is; the backdrop takes focus when shown.

use dioxus::prelude::*;
use rollcall_domain::{ChangePasswordDialog, ModalEvent, PASSWORD_MISMATCH_MESSAGE};

use crate::presentation::components::PasswordField;
use crate::presentation::state::use_portal_state;

/// Route a key press to the dialog. Returns whether it changed anything.
pub fn dismiss_on_key(dialog: &mut ChangePasswordDialog, key: &str) -> bool {
    if !dialog.is_open() {
        return false;
    }
    match ModalEvent::from_key(key) {
        Some(event) => {
            dialog.handle(event);
            !dialog.is_open()
        }
        None => false,
    }
}

#[component]
pub fn ChangePasswordModal() -> Element {
    let mut dialog = use_portal_state().password_dialog;

    if !dialog.read().is_open() {
        return rsx! {};
    }

    let error_class = if dialog.read().form.error_visible() {
        "text-danger"
    } else {
        "text-danger d-none"
    };
    let new_password = dialog.read().form.new_password.clone();
    let confirm_password = dialog.read().form.confirm_password.clone();

    let onsubmit = move |e: FormEvent| {
        if let Err(err) = dialog.write().form.submit() {
            tracing::debug!("Change password blocked: {}", err);
            e.prevent_default();
        }
    };

    rsx! {
        div {
            id: "changePasswordModal",
            class: "modal-backdrop fixed inset-0 flex items-center justify-center z-[1000]",
            tabindex: "-1",
            onclick: move |_| dialog.write().handle(ModalEvent::BackdropClick),
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!("Could not focus change password modal: {:?}", err);
                }
            },
            div {
                class: "modal-dialog bg-white rounded-lg w-[90%] max-w-[480px]",
                onclick: move |e| {
                    e.stop_propagation();
                    dialog.write().handle(ModalEvent::ContentClick);
                },

                // Header
                div {
                    class: "modal-header flex justify-between items-center p-4",
                    h5 { class: "modal-title m-0", "Смена пароля" }
                    button {
                        r#type: "button",
                        class: "btn-close",
                        onclick: move |_| dialog.write().handle(ModalEvent::Close),
                        "×"
                    }
                }

                form {
                    method: "post",
                    action: "/change-password",
                    onsubmit: onsubmit,

                    div {
                        class: "modal-body p-4 flex flex-col gap-3",
                        label { r#for: "newPassword", class: "form-label", "Новый пароль" }
                        PasswordField {
                            id: "newPassword",
                            name: "newPassword",
                            value: new_password,
                            oninput: move |v: String| dialog.write().form.new_password = v,
                        }
                        label { r#for: "confirmPassword", class: "form-label", "Подтвердите пароль" }
                        PasswordField {
                            id: "confirmPassword",
                            name: "confirmPassword",
                            value: confirm_password,
                            oninput: move |v: String| dialog.write().form.confirm_password = v,
                        }
                        div {
                            id: "passwordError",
                            class: "{error_class}",
                            "{PASSWORD_MISMATCH_MESSAGE}"
                        }
                    }

                    div {
                        class: "modal-footer flex justify-end gap-2 p-4",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| dialog.write().handle(ModalEvent::Close),
                            "Отмена"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            "Сохранить"
                        }
                    }
                }
            }
        }
    }
}
