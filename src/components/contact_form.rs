//! Contact form with inline validation and a submitted-values display.

#[cfg(all(test, feature = "ssr"))]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::components::submitted_display::SubmittedDisplay;
use crate::form::{ContactFormState, Field, MessageDisplay, SubmitOutcome};

/// The contact form.
///
/// Each keystroke revalidates the edited field; submit validates everything
/// and either shows one `data-testid="error"` node per failing field or the
/// accepted values. `initial` seeds the form state, mainly for SSR.
#[component]
pub fn ContactForm(
    #[prop(optional)] initial: ContactFormState,
    #[prop(optional)] message_display: MessageDisplay,
) -> impl IntoView {
    let form = RwSignal::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|state| report_submit(&state.on_submit()));
    };

    view! {
        <section class="contact-form">
            <h1>"Contact Form"</h1>
            <form class="contact-form__form" novalidate=true on:submit=on_submit>
                {Field::ALL.into_iter().map(|field| view! { <FormField field=field form=form/> }).collect_view()}
                <button class="contact-form__submit" type="submit">
                    "Submit"
                </button>
            </form>
            {move || {
                form.with(|state| state.submitted.clone())
                    .map(|values| view! { <SubmittedDisplay values=values message_display=message_display/> })
            }}
        </section>
    }
}

/// One labeled input plus its error line.
#[component]
fn FormField(field: Field, form: RwSignal<ContactFormState>) -> impl IntoView {
    let value = move || form.with(|state| state.values.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|state| state.on_change(field, event_target_value(&ev)));
    };

    let control = if field.is_multiline() {
        view! {
            <textarea
                class="contact-form__input contact-form__input--multiline"
                id=field.name()
                name=field.name()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="contact-form__input"
                id=field.name()
                name=field.name()
                type=field.input_type()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field">
            <label for=field.name()>{field.label()}</label>
            {control}
            {move || {
                form.with(|state| state.errors.get(field).map(|err| format!("Error: {err}")))
                    .map(|text| view! { <p class="contact-form__error" data-testid="error">{text}</p> })
            }}
        </div>
    }
}

fn report_submit(#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] outcome: &SubmitOutcome<'_>) {
    #[cfg(feature = "hydrate")]
    {
        match outcome {
            SubmitOutcome::Accepted(_) => log::debug!("contact form accepted"),
            SubmitOutcome::Rejected { error_count } => {
                log::info!("contact form rejected: {error_count} invalid field(s)");
            }
        }
    }
}
