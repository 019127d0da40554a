//! Read-only view of the last accepted submission.

use leptos::prelude::*;

use crate::form::{FormValues, MessageDisplay, SubmittedValues};

/// Renders each accepted value in its own element so it can be located by
/// its exact text. The message line depends on `message_display`.
#[component]
pub fn SubmittedDisplay(
    values: SubmittedValues,
    #[prop(optional)] message_display: MessageDisplay,
) -> impl IntoView {
    let show_message = values.shows_message(message_display);
    let FormValues { first_name, last_name, email, message } = values.values().clone();

    view! {
        <div id="displayContainer" class="contact-form__display">
            <h2>"You Submitted:"</h2>
            <p>
                <strong>"First Name: "</strong>
                <span data-testid="firstnameDisplay">{first_name}</span>
            </p>
            <p>
                <strong>"Last Name: "</strong>
                <span data-testid="lastnameDisplay">{last_name}</span>
            </p>
            <p>
                <strong>"Email: "</strong>
                <span data-testid="emailDisplay">{email}</span>
            </p>
            {show_message
                .then(|| {
                    view! {
                        <p>
                            <strong>"Message: "</strong>
                            <span data-testid="messageDisplay">{message}</span>
                        </p>
                    }
                })}
        </div>
    }
}
