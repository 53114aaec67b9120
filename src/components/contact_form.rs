use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics;
use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected the message: {0}")]
    Rejected(String),
    #[error("unexpected relay response: {0}")]
    Decode(String),
}

impl ContactError {
    /// Text shown under the form.
    pub fn user_message(&self) -> &str {
        match self {
            ContactError::Validation(msg) => msg,
            _ => "Ошибка отправки. Попробуйте позже 🙏",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub channel: String,
    pub message: String,
    /// Hidden field; people never fill it in.
    pub bot_trap: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ContactRequest {
    pub access_key: String,
    pub subject: String,
    pub name: String,
    pub email: String,
    pub channel: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

impl ContactDraft {
    pub fn is_bot(&self) -> bool {
        !self.bot_trap.trim().is_empty()
    }

    pub fn into_request(self, access_key: &str) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        if name.is_empty() {
            return Err(ContactError::Validation("Укажите ваше имя"));
        }
        if email.is_empty() {
            return Err(ContactError::Validation("Укажите почту"));
        }
        let valid_email = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err(ContactError::Validation("Проверьте адрес почты"));
        }
        Ok(ContactRequest {
            access_key: access_key.to_string(),
            subject: format!("Новая заявка {}", config::AGENCY_NAME),
            name,
            email,
            channel: self.channel.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

pub async fn submit(request: &ContactRequest) -> Result<(), ContactError> {
    let response = Request::post(config::get_form_relay_url())
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    let body: RelayResponse = response
        .json()
        .await
        .map_err(|e| ContactError::Decode(e.to_string()))?;
    if body.success {
        Ok(())
    } else {
        Err(ContactError::Rejected(body.message))
    }
}

#[derive(Serialize)]
struct SubmitEventProps {
    has_channel: bool,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let is_submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if draft.is_bot() {
                info!("Dropping contact submission from honeypot");
                return;
            }
            let request = match (*draft).clone().into_request(config::get_form_access_key()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.user_message().to_string()));
                    return;
                }
            };
            error.set(None);
            is_submitting.set(true);

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let submitted = submitted.clone();
            let error = error.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                let result = submit(&request).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        analytics::track(
                            "contact_submit",
                            &SubmitEventProps { has_channel: !request.channel.is_empty() },
                        );
                        draft.set(ContactDraft::default());
                        submitted.set(true);
                        let submitted = submitted.clone();
                        *reset_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_RESET_MS, move || {
                            submitted.set(false);
                        }));
                    }
                    Err(e) => {
                        warn!("Contact form submission failed: {}", e);
                        error.set(Some(e.user_message().to_string()));
                    }
                }
            });
        })
    };

    let field = |update: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            };
            let mut next = (*draft).clone();
            update(&mut next, value);
            draft.set(next);
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            if *submitted {
                <div class="contact-thanks">
                    <div class="contact-thanks-badge">{"✅"}</div>
                    <p class="contact-thanks-title">{"Спасибо! Совсем скоро мы ответим вам 🎉"}</p>
                    <p class="contact-thanks-note">{"Форма вернётся автоматически"}</p>
                </div>
            } else {
                <input
                    type="text"
                    name="bot_trap"
                    class="contact-trap"
                    tabindex="-1"
                    autocomplete="off"
                    value={draft.bot_trap.clone()}
                    oninput={field(|d, v| d.bot_trap = v)}
                />
                <input
                    name="name"
                    placeholder="Ваше имя"
                    required={true}
                    value={draft.name.clone()}
                    oninput={field(|d, v| d.name = v)}
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Почта"
                    required={true}
                    value={draft.email.clone()}
                    oninput={field(|d, v| d.email = v)}
                />
                <input
                    name="channel"
                    placeholder="Ссылка на канал/видео"
                    value={draft.channel.clone()}
                    oninput={field(|d, v| d.channel = v)}
                />
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Кратко опишите задачу (язык, длительность, дедлайн)"
                    value={draft.message.clone()}
                    oninput={field(|d, v| d.message = v)}
                />
                if let Some(message) = (*error).clone() {
                    <div class="contact-error">{message}</div>
                }
                <div class="contact-actions">
                    <button
                        type="submit"
                        class={classes!("contact-submit", (*is_submitting).then(|| "busy"))}
                        disabled={*is_submitting}
                    >
                        {if *is_submitting { "Отправляем..." } else { "Отправить" }}
                    </button>
                    <a href={config::TELEGRAM_LINK} target="_blank" rel="noopener noreferrer" class="contact-telegram">
                        {"Написать в Telegram"}
                    </a>
                </div>
            }
            <style>
                {r#"
                .contact-form {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1rem;
                }
                .contact-form input,
                .contact-form textarea {
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    background: #fff;
                    padding: 0.5rem 1rem;
                    font: inherit;
                    color: inherit;
                }
                .dark .contact-form input,
                .dark .contact-form textarea {
                    background: #171717;
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(249, 115, 22, 0.5);
                }
                .contact-form .contact-trap {
                    display: none;
                }
                .contact-error {
                    color: #dc2626;
                    font-size: 0.875rem;
                }
                .contact-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .contact-submit {
                    border: none;
                    border-radius: 1rem;
                    background: #ea580c;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(234, 88, 12, 0.25);
                }
                .contact-submit:hover {
                    background: #c2410c;
                }
                .contact-submit.busy {
                    background: #9ca3af;
                    cursor: not-allowed;
                }
                .contact-telegram {
                    border-radius: 1rem;
                    border: 1px solid #fdba74;
                    color: #c2410c;
                    padding: 0.5rem 1rem;
                    text-decoration: none;
                }
                .contact-thanks {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1.5rem 0;
                    animation: contactPop 0.4s ease-out;
                }
                .contact-thanks-badge {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: #22c55e;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.875rem;
                }
                .contact-thanks-title {
                    font-size: 1.125rem;
                    font-weight: 500;
                }
                .contact-thanks-note {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                @keyframes contactPop {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "  Anna ".into(),
            email: "anna@example.com".into(),
            channel: "https://youtube.com/@anna".into(),
            message: "EN + ES, 12 min".into(),
            bot_trap: String::new(),
        }
    }

    #[test]
    fn valid_draft_becomes_request() {
        let request = draft().into_request("key").unwrap();
        assert_eq!(request.name, "Anna");
        assert_eq!(request.access_key, "key");
        assert!(request.subject.contains("lang2lang"));
    }

    #[test]
    fn honeypot_marks_bots() {
        let mut d = draft();
        assert!(!d.is_bot());
        d.bot_trap = "http://spam".into();
        assert!(d.is_bot());
    }

    #[test]
    fn required_fields_are_checked() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(d.into_request("k"), Err(ContactError::Validation("Укажите ваше имя")));

        let mut d = draft();
        d.email = "anna.example.com".into();
        assert!(matches!(d.into_request("k"), Err(ContactError::Validation(_))));

        let mut d = draft();
        d.email = "@example.com".into();
        assert!(d.into_request("k").is_err());
    }

    #[test]
    fn request_serializes_with_access_key() {
        let request = draft().into_request("abc").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["access_key"], "abc");
        assert_eq!(json["email"], "anna@example.com");
    }

    #[test]
    fn transport_errors_hide_details_from_users() {
        let err = ContactError::Network("timeout".into());
        assert_eq!(err.to_string(), "network error: timeout");
        assert_eq!(err.user_message(), "Ошибка отправки. Попробуйте позже 🙏");
    }
}
