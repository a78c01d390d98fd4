use gloo::net::http::Request;
use shared::constants::{LEADS_ENDPOINT, NETWORK_ERROR};
use shared::lead::{
    format_phone_number, LeadErrorResponse, LeadField, LeadFieldErrors, LeadResponse, LeadSubmission,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::api_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DiscountFormProps {
    pub discount: String,
    pub on_success: Callback<LeadResponse>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

enum SubmitError {
    Fields(String, LeadFieldErrors),
    Message(String),
}

async fn submit_lead(submission: &LeadSubmission) -> Result<LeadResponse, SubmitError> {
    let request = Request::post(&api_url(LEADS_ENDPOINT))
        .json(submission)
        .map_err(|e| SubmitError::Message(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        log::error!("Lead submission failed: {}", e);
        SubmitError::Message(NETWORK_ERROR.to_string())
    })?;

    if response.ok() {
        return response
            .json::<LeadResponse>()
            .await
            .map_err(|e| SubmitError::Message(e.to_string()));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<LeadErrorResponse>(&body) {
        Ok(LeadErrorResponse { error, fields: Some(fields) }) => Err(SubmitError::Fields(error, fields)),
        Ok(LeadErrorResponse { error, fields: None }) => Err(SubmitError::Message(error)),
        Err(_) => Err(SubmitError::Message(format!("Server error: {}", status))),
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(DiscountForm)]
pub fn discount_form(props: &DiscountFormProps) -> Html {
    let email = use_state(String::new);
    let full_name = use_state(String::new);
    let mobile = use_state(String::new);
    let field_errors = use_state(LeadFieldErrors::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_field_input = |value: UseStateHandle<String>, field: LeadField, format: fn(&str) -> String| {
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            value.set(format(&input_value(&e)));
            if field_errors.get(field).is_some() {
                let mut errors = (*field_errors).clone();
                errors.clear(field);
                field_errors.set(errors);
            }
        })
    };
    let on_email = on_field_input(email.clone(), LeadField::Email, str::to_string);
    let on_full_name = on_field_input(full_name.clone(), LeadField::FullName, str::to_string);
    let on_mobile = on_field_input(mobile.clone(), LeadField::Mobile, format_phone_number);

    let onsubmit = {
        let email = email.clone();
        let full_name = full_name.clone();
        let mobile = mobile.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let discount = props.discount.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            error.set(None);

            let submission = LeadSubmission {
                email: (*email).clone(),
                full_name: (*full_name).clone(),
                mobile: (*mobile).clone(),
                discount: discount.clone(),
            };
            if let Err(errors) = submission.validate() {
                // The discount has no input of its own.
                if let Some(message) = errors.discount.clone() {
                    error.set(Some(message));
                }
                field_errors.set(errors);
                return;
            }

            submitting.set(true);
            let field_errors = field_errors.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                match submit_lead(&submission).await {
                    Ok(response) => on_success.emit(response),
                    Err(SubmitError::Fields(message, fields)) => {
                        field_errors.set(fields);
                        error.set(Some(message));
                    }
                    Err(SubmitError::Message(message)) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    let input_class = |field: LeadField| {
        if field_errors.get(field).is_some() {
            styles::INPUT_ERROR
        } else {
            styles::INPUT
        }
    };
    let field_error = |field: LeadField| {
        field_errors
            .get(field)
            .map(|message| html! { <p class={styles::TEXT_ERROR}>{message}</p> })
    };

    html! {
        <main class={styles::PAGE}>
            <div class="text-center space-y-6 md:space-y-8 max-w-md w-full">
                <div class="space-y-4">
                    <div class="text-4xl md:text-5xl mb-4">{"🎁"}</div>
                    <h1 class={styles::TEXT_H1}>
                        {format!("Where should we send your {}% discount code?", props.discount)}
                    </h1>
                    <p class={styles::TEXT_BODY}>{"Enter your details below to receive your exclusive discount code."}</p>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class={styles::ALERT_ERROR}>
                        <p class="text-sm font-medium">{message}</p>
                        <p class="text-xs mt-1">{"Please check your information and try again."}</p>
                    </div>
                }

                <form {onsubmit} class="space-y-4 md:space-y-6">
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Email Address *"}</label>
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            class={input_class(LeadField::Email)}
                            placeholder="you@example.com"
                            disabled={*submitting}
                            inputmode="email"
                            autocomplete="email"
                        />
                        { field_error(LeadField::Email) }
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Full Name *"}</label>
                        <input
                            type="text"
                            value={(*full_name).clone()}
                            oninput={on_full_name}
                            class={input_class(LeadField::FullName)}
                            placeholder="John Smith"
                            disabled={*submitting}
                            autocomplete="name"
                        />
                        { field_error(LeadField::FullName) }
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Mobile Number *"}</label>
                        <input
                            type="tel"
                            value={(*mobile).clone()}
                            oninput={on_mobile}
                            class={input_class(LeadField::Mobile)}
                            placeholder="(123) 456-7890"
                            disabled={*submitting}
                            inputmode="tel"
                            autocomplete="tel"
                        />
                        {
                            field_error(LeadField::Mobile).unwrap_or_else(|| html! {
                                <p class={styles::TEXT_HINT}>{"Enter your 10-digit mobile number"}</p>
                            })
                        }
                    </div>
                    <div class="pt-4">
                        <button type="submit" class={styles::BUTTON_PRIMARY} disabled={*submitting}>
                            if *submitting {
                                <span class="flex items-center justify-center gap-2">
                                    <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                                    </svg>
                                    {"Processing..."}
                                </span>
                            } else {
                                {format!("Get My {}% Discount Code", props.discount)}
                            }
                        </button>
                    </div>
                </form>

                if let Some(on_back) = props.on_back.clone() {
                    <button class={styles::BUTTON_LINK} onclick={move |_| on_back.emit(())}>
                        {"Back to the wheel"}
                    </button>
                }

                <div class={styles::TEXT_SMALL}>
                    <p>{"By submitting, you agree to receive the discount code via email and SMS"}</p>
                </div>
            </div>
        </main>
    }
}
