use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics;

const SUBTITLES_PER_MIN: u32 = 6;
const VOICEOVER_PER_MIN: u32 = 12;
// Each language past the first adds 30%.
const EXTRA_LANGUAGE_RATE: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceInput {
    pub minutes: u32,
    pub subs: bool,
    pub voice: bool,
    pub langs: u32,
}

impl Default for PriceInput {
    fn default() -> Self {
        Self {
            minutes: 10,
            subs: true,
            voice: true,
            langs: 1,
        }
    }
}

impl PriceInput {
    pub fn quote(&self) -> u32 {
        let mut per_minute = 0;
        if self.subs {
            per_minute += SUBTITLES_PER_MIN;
        }
        if self.voice {
            per_minute += VOICEOVER_PER_MIN;
        }
        let multiplier = 1.0 + f64::from(self.langs.max(1) - 1) * EXTRA_LANGUAGE_RATE;
        (f64::from(per_minute * self.minutes) * multiplier).round() as u32
    }
}

pub fn clamp_langs(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).clamp(1, 10)
}

#[derive(Serialize)]
struct QuoteEvent {
    minutes: u32,
    subs: bool,
    voice: bool,
    langs: u32,
    price: u32,
}

impl From<PriceInput> for QuoteEvent {
    fn from(input: PriceInput) -> Self {
        Self {
            minutes: input.minutes,
            subs: input.subs,
            voice: input.voice,
            langs: input.langs,
            price: input.quote(),
        }
    }
}

#[function_component(PriceCalculator)]
pub fn price_calculator() -> Html {
    let input = use_state(PriceInput::default);
    let price = input.quote();

    let on_minutes = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            if let Ok(minutes) = el.value().parse::<u32>() {
                input.set(PriceInput { minutes: minutes.clamp(1, 60), ..*input });
            }
        })
    };
    let on_subs = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(PriceInput { subs: el.checked(), ..*input });
        })
    };
    let on_voice = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(PriceInput { voice: el.checked(), ..*input });
        })
    };
    let on_langs = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(PriceInput { langs: clamp_langs(&el.value()), ..*input });
        })
    };
    let on_submit = {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::track("calc_submit", &QuoteEvent::from(*input));
        })
    };

    html! {
        <div class="price-calc">
            <div class="price-calc-title">{"Калькулятор"}</div>
            <div class="price-calc-row">
                <label>{"Длительность, мин"}</label>
                <span class="price-calc-value">{input.minutes.to_string()}</span>
            </div>
            <input
                type="range"
                min="1"
                max="60"
                value={input.minutes.to_string()}
                oninput={on_minutes}
            />
            <label class="price-calc-check">
                <input type="checkbox" checked={input.subs} onchange={on_subs} />
                {"Перевод + субтитры (от $6/мин)"}
            </label>
            <label class="price-calc-check">
                <input type="checkbox" checked={input.voice} onchange={on_voice} />
                {"Озвучка (от $12/мин)"}
            </label>
            <div class="price-calc-row">
                <label>{"Языков"}</label>
                <input
                    class="price-calc-langs"
                    type="number"
                    min="1"
                    max="10"
                    value={input.langs.to_string()}
                    oninput={on_langs}
                />
            </div>
            <div class="price-calc-total">
                {"Итог: "}<b>{format!("${}", price)}</b>
                <span class="price-calc-note">{" (оценка)"}</span>
            </div>
            <button class="price-calc-submit" onclick={on_submit}>
                {"Получить точный расчёт"}
            </button>
            <style>
                {r#"
                .price-calc {
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    background: #fff;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                    text-align: left;
                }
                .dark .price-calc {
                    background: #171717;
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .price-calc-title {
                    font-weight: 600;
                }
                .price-calc-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #4b5563;
                }
                .price-calc-value {
                    font-weight: 600;
                }
                .price-calc-check {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .price-calc-langs {
                    width: 5rem;
                    text-align: right;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    padding: 0.25rem 0.5rem;
                }
                .price-calc-total {
                    font-size: 1.125rem;
                }
                .price-calc-note {
                    color: #6b7280;
                }
                .price-calc-submit {
                    align-self: flex-start;
                    border: none;
                    border-radius: 1rem;
                    background: #ea580c;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(234, 88, 12, 0.25);
                }
                .price-calc-submit:hover {
                    background: #c2410c;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quote() {
        assert_eq!(PriceInput::default().quote(), 180);
    }

    #[test]
    fn extra_languages_add_thirty_percent_each() {
        let input = PriceInput { minutes: 10, subs: true, voice: false, langs: 3 };
        // 6 * 10 * 1.6
        assert_eq!(input.quote(), 96);
    }

    #[test]
    fn nothing_selected_is_free() {
        let input = PriceInput { subs: false, voice: false, ..PriceInput::default() };
        assert_eq!(input.quote(), 0);
    }

    #[test]
    fn language_count_is_clamped() {
        assert_eq!(clamp_langs(""), 1);
        assert_eq!(clamp_langs("0"), 1);
        assert_eq!(clamp_langs("4"), 4);
        assert_eq!(clamp_langs("42"), 10);
        assert_eq!(clamp_langs("-3"), 1);
    }
}
