//! Landing page hosting the contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="contact-page">
            <ContactForm/>
        </main>
    }
}
