//=============================================================================
// File: src/sections/contact_form.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::primitives::{Button, ButtonKind};
use crate::components::subject_dropdown::SubjectDropdown;
use crate::components::word_reveal::RevealBlock;
use crate::forms::{self, Field, FormError, Subject};
use crate::hooks::{use_element_id, use_in_view, use_motion_support};
use crate::motion::reveal::{Reveal, RevealPhase};
use crate::motion::scroll_trigger::InView;

const FORM_ENTRY: InView = InView::amount(0.2);

fn message_for(errors: &[FormError], field: Field) -> Option<String> {
    errors.iter().find(|e| e.field() == field).map(|e| e.to_string())
}

fn field_class(message: Option<&String>) -> &'static str {
    if message.is_some() {
        "contact-form-field invalid"
    } else {
        "contact-form-field"
    }
}

#[component]
fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(text) = message {
            p { class: "field-error", role: "alert", "{text}" }
        }
    }
}

#[component]
pub fn ContactForm() -> Element {
    let id = use_element_id("contact-form");
    let support = use_motion_support();
    let seen = use_in_view(id.clone(), FORM_ENTRY);
    let phase = RevealPhase::new(support, seen());

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(|| None::<Subject>);
    let mut message = use_signal(String::new);
    let mut errors = use_signal(Vec::<FormError>::new);
    let mut sent = use_signal(|| false);

    let current = errors.read().clone();
    let name_error = message_for(&current, Field::Name);
    let email_error = message_for(&current, Field::Email);
    let subject_error = message_for(&current, Field::Subject);
    let message_error = message_for(&current, Field::Message);
    let name_class = field_class(name_error.as_ref());
    let email_class = field_class(email_error.as_ref());
    let message_class = field_class(message_error.as_ref());
    let subject_invalid = subject_error.is_some();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = forms::ContactForm {
            name: name.peek().clone(),
            email: email.peek().clone(),
            subject: *subject.peek(),
            message: message.peek().clone(),
        };
        match form.validate() {
            Ok(submission) => {
                forms::submit_contact(&submission);
                errors.set(Vec::new());
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                subject.set(None);
                sent.set(true);
            }
            Err(first) => {
                dioxus_logger::tracing::debug!("contact form rejected: {first}");
                errors.set(form.errors());
                sent.set(false);
            }
        }
    };

    rsx! {
        section {
            class: "contact-form-section",
            div {
                class: "container two-column",
                div {}
                form {
                    id: "{id}",
                    class: "contact-form",
                    onsubmit: onsubmit,
                    RevealBlock {
                        reveal: Reveal::FORM_FIELDS,
                        phase,
                        index: 0,
                        label { r#for: "name", "YOUR NAME*" }
                        input {
                            id: "name",
                            class: name_class,
                            r#type: "text",
                            placeholder: "Full name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        FieldError { message: name_error }
                    }
                    RevealBlock {
                        reveal: Reveal::FORM_FIELDS,
                        phase,
                        index: 1,
                        label { r#for: "email", "YOUR EMAIL*" }
                        input {
                            id: "email",
                            class: email_class,
                            r#type: "email",
                            placeholder: "Email address",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        FieldError { message: email_error }
                    }
                    RevealBlock {
                        reveal: Reveal::FORM_FIELDS,
                        phase,
                        index: 2,
                        label { r#for: "subject", "SUBJECT*" }
                        SubjectDropdown { selected: subject, invalid: subject_invalid }
                        FieldError { message: subject_error }
                    }
                    RevealBlock {
                        reveal: Reveal::FORM_FIELDS,
                        phase,
                        index: 3,
                        label { r#for: "message", "YOUR MESSAGE*" }
                        textarea {
                            id: "message",
                            class: message_class,
                            rows: "4",
                            placeholder: "Write a message...",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                        FieldError { message: message_error }
                    }
                    RevealBlock {
                        reveal: Reveal::FORM_FIELDS,
                        phase,
                        index: 4,
                        Button { kind: ButtonKind::Solid, button_type: "submit", "Submit Request" }
                        if sent() {
                            p { class: "form-status", role: "status", "Thanks! We'll be in touch soon." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_attach_to_their_fields() {
        let errors = forms::ContactForm::default().errors();
        assert_eq!(message_for(&errors, Field::Name).as_deref(), Some("Please enter your name."));
        assert_eq!(message_for(&errors, Field::Subject).as_deref(), Some("Please choose a subject."));
        assert_eq!(message_for(&[], Field::Email), None);
    }

    #[test]
    fn only_the_failing_email_check_is_shown() {
        let form = forms::ContactForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: Some(Subject::Other),
            message: "Hi".to_string(),
        };
        let errors = form.errors();
        assert_eq!(message_for(&errors, Field::Name), None);
        assert_eq!(
            message_for(&errors, Field::Email).as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn failing_fields_are_marked_invalid() {
        let errors = forms::ContactForm::default().errors();
        let name_error = message_for(&errors, Field::Name);
        assert_eq!(field_class(name_error.as_ref()), "contact-form-field invalid");
        assert_eq!(name_error.as_deref(), Some("Please enter your name."));
        assert_eq!(field_class(message_for(&[], Field::Message).as_ref()), "contact-form-field");
    }
}
