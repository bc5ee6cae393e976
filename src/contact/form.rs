use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FileReader, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::schema::{
    self, Budget, ContactPayload, ContactSubmission, FieldEdit, FileAttachment,
};
use crate::i18n::{ContactText, Language};

/// Transient submission state. `Success` and `Error` revert to `Idle` after
/// `STATUS_RESET_MS` so the form stays usable without a reload.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Success,
    Error,
}

const STATUS_RESET_MS: u32 = 5_000;
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Arm the 5s revert back to `Idle`. Storing the handle drops (and thereby
/// cancels) whichever revert was pending before, so each submission attempt
/// owns exactly one deferred revert.
fn schedule_status_revert(
    status: UseStateHandle<SubmissionStatus>,
    revert_timer: Rc<RefCell<Option<Timeout>>>,
) {
    let timer = Timeout::new(STATUS_RESET_MS, move || {
        status.set(SubmissionStatus::Idle);
    });
    *revert_timer.borrow_mut() = Some(timer);
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub text: &'static ContactText,
    pub language: Language,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let text = props.text;
    let form = use_state(ContactSubmission::default);
    let status = use_state(|| SubmissionStatus::Idle);
    let file_error = use_state(|| None::<&'static str>);
    let file_input_ref = use_node_ref();

    // Monotonic counters shared with the async paths: `read_generation` keeps
    // only the latest file read, `attempt`/`settled` give each submission
    // exactly one Sending -> {Success|Error} transition.
    let read_generation = use_mut_ref(|| 0u32);
    let attempt = use_mut_ref(|| 0u64);
    let settled = use_mut_ref(|| 0u64);
    let revert_timer = use_mut_ref(|| None::<Timeout>);
    let deadline_timer = use_mut_ref(|| None::<Timeout>);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            FieldEdit::Name(input.value()).apply(&mut next);
            form.set(next);
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            FieldEdit::Email(input.value()).apply(&mut next);
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            FieldEdit::Message(input.value()).apply(&mut next);
            form.set(next);
        })
    };

    let on_budget_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let budget = Budget::from_value(&select.value()).unwrap_or_default();
            let mut next = (*form).clone();
            FieldEdit::Budget(budget).apply(&mut next);
            form.set(next);
        })
    };

    let on_file_change = {
        let form = form.clone();
        let file_error = file_error.clone();
        let read_generation = read_generation.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if let Err(err) = schema::check_attachment_candidate(&file.type_(), file.size()) {
                file_error.set(Some(err.message()));
                return;
            }
            file_error.set(None);

            // Reads have no cancellation; the generation stamp makes sure a
            // slow earlier read cannot overwrite a newer selection.
            *read_generation.borrow_mut() += 1;
            let generation = *read_generation.borrow();

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(_) => return,
            };
            let file_name = file.name();
            let form = form.clone();
            let read_generation = read_generation.clone();
            let reader_handle = reader.clone();
            let onloadend = Closure::wrap(Box::new(move |_e: web_sys::ProgressEvent| {
                if *read_generation.borrow() != generation {
                    return;
                }
                if let Ok(result) = reader_handle.result() {
                    if let Some(data) = result.as_string() {
                        let mut next = (*form).clone();
                        next.attachment = Some(FileAttachment {
                            name: file_name.clone(),
                            data,
                        });
                        form.set(next);
                    }
                }
            }) as Box<dyn FnMut(web_sys::ProgressEvent)>);
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&file);
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let attempt = attempt.clone();
        let settled = settled.clone();
        let revert_timer = revert_timer.clone();
        let deadline_timer = deadline_timer.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The new attempt takes over the status timers: a pending revert
            // from a previous attempt must not flip state mid-flight.
            *attempt.borrow_mut() += 1;
            let this_attempt = *attempt.borrow();
            revert_timer.borrow_mut().take();
            deadline_timer.borrow_mut().take();
            status.set(SubmissionStatus::Sending);

            if let Err(err) = schema::validate(&form) {
                log!("contact form validation failed:", err.field, err.message);
                *settled.borrow_mut() = this_attempt;
                status.set(SubmissionStatus::Error);
                schedule_status_revert(status.clone(), revert_timer.clone());
                return;
            }

            let Some(endpoint) = config::contact_webhook_url() else {
                log!("contact webhook is not configured");
                *settled.borrow_mut() = this_attempt;
                status.set(SubmissionStatus::Error);
                schedule_status_revert(status.clone(), revert_timer.clone());
                return;
            };

            let payload = ContactPayload::new(&form, Utc::now());

            // A hung request settles as Error when the deadline fires.
            {
                let status = status.clone();
                let settled = settled.clone();
                let revert_timer = revert_timer.clone();
                let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || {
                    if *settled.borrow() >= this_attempt {
                        return;
                    }
                    log!("contact webhook request timed out");
                    *settled.borrow_mut() = this_attempt;
                    status.set(SubmissionStatus::Error);
                    schedule_status_revert(status.clone(), revert_timer.clone());
                });
                *deadline_timer.borrow_mut() = Some(timer);
            }

            let form = form.clone();
            let status = status.clone();
            let attempt = attempt.clone();
            let settled = settled.clone();
            let revert_timer = revert_timer.clone();
            let deadline_timer = deadline_timer.clone();
            let file_input_ref = file_input_ref.clone();
            spawn_local(async move {
                let result = Request::post(endpoint)
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await;

                // The deadline or a newer attempt may have settled this one.
                if *attempt.borrow() != this_attempt || *settled.borrow() >= this_attempt {
                    return;
                }
                *settled.borrow_mut() = this_attempt;
                deadline_timer.borrow_mut().take();

                match result {
                    Ok(response) if response.ok() => {
                        form.set(ContactSubmission::default());
                        if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        status.set(SubmissionStatus::Success);
                    }
                    Ok(response) => {
                        log!("contact webhook returned status:", response.status());
                        status.set(SubmissionStatus::Error);
                    }
                    Err(e) => {
                        log!("contact webhook request failed:", e.to_string());
                        status.set(SubmissionStatus::Error);
                    }
                }
                schedule_status_revert(status.clone(), revert_timer.clone());
            });
        })
    };

    let select_wrap_class = if props.language.is_rtl() {
        "select-wrap rtl"
    } else {
        "select-wrap"
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <h2 class="section-title">{text.title}</h2>
                <p class="section-subtitle">{text.subtitle}</p>
                <form class="contact-form" onsubmit={on_submit}>
                    <div class="field-grid">
                        <div class="field">
                            <label for="contact-name">{text.name}</label>
                            <input
                                id="contact-name"
                                type="text"
                                value={form.name.clone()}
                                oninput={on_name_input}
                                placeholder={text.placeholder_name}
                                required=true
                            />
                        </div>
                        <div class="field">
                            <label for="contact-email">{text.email}</label>
                            <input
                                id="contact-email"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email_input}
                                placeholder="email@example.com"
                                required=true
                            />
                        </div>
                    </div>

                    <div class="field-grid">
                        <div class="field">
                            <label for="contact-budget">{text.budget}</label>
                            <div class={select_wrap_class}>
                                <select id="contact-budget" onchange={on_budget_change}>
                                    <option value="" selected={form.budget == Budget::Unspecified}>
                                        {text.budget_hint}
                                    </option>
                                    <option value="1k-5k" selected={form.budget == Budget::From1kTo5k}>
                                        {"₪1,000 - ₪5,000"}
                                    </option>
                                    <option value="5k-10k" selected={form.budget == Budget::From5kTo10k}>
                                        {"₪5,000 - ₪10,000"}
                                    </option>
                                    <option value="10k-30k" selected={form.budget == Budget::From10kTo30k}>
                                        {"₪10,000 - ₪30,000"}
                                    </option>
                                    <option value="30k+" selected={form.budget == Budget::Above30k}>
                                        {"₪30,000+"}
                                    </option>
                                </select>
                            </div>
                        </div>
                        <div class="field">
                            <label for="contact-file">{text.file_label}</label>
                            <div class="file-field">
                                <input
                                    id="contact-file"
                                    type="file"
                                    ref={file_input_ref.clone()}
                                    onchange={on_file_change}
                                    accept="image/*,application/pdf"
                                />
                                <span class="file-name">
                                    {
                                        form.attachment
                                            .as_ref()
                                            .map(|attachment| attachment.name.as_str())
                                            .unwrap_or(text.file_hint)
                                    }
                                </span>
                            </div>
                            {
                                if let Some(message) = *file_error {
                                    html! { <p class="field-error">{message}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                    <div class="field">
                        <label for="contact-message">{text.message}</label>
                        <textarea
                            id="contact-message"
                            value={form.message.clone()}
                            oninput={on_message_input}
                            placeholder={text.placeholder_message}
                            required=true
                        />
                    </div>

                    <button
                        type="submit"
                        class="submit-button"
                        disabled={*status == SubmissionStatus::Sending}
                    >
                        {
                            if *status == SubmissionStatus::Sending {
                                text.sending
                            } else {
                                text.send
                            }
                        }
                    </button>

                    {
                        match *status {
                            SubmissionStatus::Success => html! {
                                <div class="form-status success" role="alert">{text.success}</div>
                            },
                            SubmissionStatus::Error => html! {
                                <div class="form-status error" role="alert">{text.error}</div>
                            },
                            _ => html! {},
                        }
                    }
                </form>
            </div>
        </section>
    }
}
