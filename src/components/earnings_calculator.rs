use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const MIN_VIEWS: u32 = 50_000;
pub const MAX_VIEWS: u32 = 5_000_000;
pub const VIEWS_STEP: u32 = 50_000;
const DEFAULT_VIEWS: u32 = 500_000;
const TWEEN_MS: f64 = 260.0;
const FRAME_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Market {
    English,
    Portuguese,
    Spanish,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::English, Market::Portuguese, Market::Spanish];

    /// Revenue per thousand views, USD.
    pub fn rpm(self) -> f64 {
        match self {
            Market::English => 5.0,
            Market::Portuguese => 1.5,
            Market::Spanish => 2.5,
        }
    }

    fn flag(self) -> &'static str {
        match self {
            Market::English => "🇺🇸",
            Market::Portuguese => "🇵🇹",
            Market::Spanish => "🇪🇸",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Market::English => "en",
            Market::Portuguese => "pt",
            Market::Spanish => "es",
        }
    }

    fn enabled_by_default(self) -> bool {
        !matches!(self, Market::Spanish)
    }
}

pub fn monthly_income(views: u32, markets: &[Market]) -> f64 {
    markets
        .iter()
        .map(|market| f64::from(views) / 1000.0 * market.rpm())
        .sum()
}

pub fn clamp_views(views: u32) -> u32 {
    let snapped = (views / VIEWS_STEP) * VIEWS_STEP;
    snapped.clamp(MIN_VIEWS, MAX_VIEWS)
}

/// Position of `views` along the slider track, 0..=100.
pub fn slider_percent(views: u32) -> f64 {
    f64::from(views - MIN_VIEWS) / f64::from(MAX_VIEWS - MIN_VIEWS) * 100.0
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Displayed value `progress` (0..=1) of the way from `start` to `end`.
pub fn tween(start: f64, end: f64, progress: f64) -> f64 {
    (start + (end - start) * progress.clamp(0.0, 1.0)).floor()
}

#[function_component(EarningsCalculator)]
pub fn earnings_calculator() -> Html {
    let views = use_state(|| DEFAULT_VIEWS);
    let markets = use_state(|| {
        Market::ALL
            .iter()
            .copied()
            .filter(|m| m.enabled_by_default())
            .collect::<Vec<_>>()
    });
    let shown_income = use_state(|| 0.0_f64);
    let bubble_visible = use_state(|| false);
    // Bumped on every new target and on unmount; a tween stops as soon as it
    // no longer owns the current generation.
    let generation = use_mut_ref(|| 0_u32);
    // Last value written by a tween; the next one starts from here.
    let last_income = use_mut_ref(|| 0.0_f64);

    {
        let shown_income = shown_income.clone();
        let generation = generation.clone();
        let last_income = last_income.clone();
        let target = monthly_income(*views, &markets);
        use_effect_with_deps(
            move |_| {
                *generation.borrow_mut() += 1;
                let owned = *generation.borrow();
                let start = *last_income.borrow();
                spawn_local(async move {
                    let started_at = Date::now();
                    loop {
                        if *generation.borrow() != owned {
                            break;
                        }
                        let progress = (Date::now() - started_at) / TWEEN_MS;
                        let value = tween(start, target, progress);
                        *last_income.borrow_mut() = value;
                        shown_income.set(value);
                        if progress >= 1.0 {
                            break;
                        }
                        TimeoutFuture::new(FRAME_MS).await;
                    }
                });
                || ()
            },
            (*views, (*markets).clone()),
        );
    }

    {
        let generation = generation.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *generation.borrow_mut() += 1;
                }
            },
            (),
        );
    }

    let on_input = {
        let views = views.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                views.set(clamp_views(value));
            }
        })
    };

    let show_bubble = {
        let bubble_visible = bubble_visible.clone();
        Callback::from(move |_: PointerEvent| bubble_visible.set(true))
    };
    let hide_bubble = {
        let bubble_visible = bubble_visible.clone();
        Callback::from(move |_: PointerEvent| bubble_visible.set(false))
    };

    let percent = slider_percent(*views);
    let views_label = group_thousands(u64::from(*views));

    html! {
        <div class="earnings-card">
            <span class="earnings-caption">{"Месячные просмотры"}</span>
            <div class="earnings-range">
                <input
                    type="range"
                    min={MIN_VIEWS.to_string()}
                    max={MAX_VIEWS.to_string()}
                    step={VIEWS_STEP.to_string()}
                    value={views.to_string()}
                    style={format!("--percent: {:.2}%;", percent)}
                    oninput={on_input}
                    onpointerdown={show_bubble}
                    onpointerup={hide_bubble.clone()}
                    onpointerleave={hide_bubble}
                />
                <div
                    class={classes!("range-bubble", (*bubble_visible).then(|| "show"))}
                    style={format!("left: {:.2}%;", percent)}
                >
                    {views_label.clone()}
                </div>
            </div>
            <div class="earnings-views">{views_label}</div>
            <div class="earnings-markets">
                { for Market::ALL.iter().map(|&market| {
                    let checked = markets.contains(&market);
                    let onchange = {
                        let markets = markets.clone();
                        Callback::from(move |_: Event| {
                            let mut next = (*markets).clone();
                            if let Some(pos) = next.iter().position(|m| *m == market) {
                                next.remove(pos);
                            } else {
                                next.push(market);
                            }
                            markets.set(next);
                        })
                    };
                    html! {
                        <label key={market.code()} class="market-toggle">
                            <input type="checkbox" {checked} {onchange} />
                            <span class="market-dot"></span>
                            <span class="market-flag">{market.flag()}</span>
                        </label>
                    }
                }) }
            </div>
            <div class="earnings-caption">{"Потенциальный доход:"}</div>
            <div class="earnings-income">
                {format!("${} / месяц", group_thousands(*shown_income as u64))}
            </div>
            <style>
                {r#"
                .earnings-card {
                    position: relative;
                    max-width: 36rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .dark .earnings-card {
                    background: #171717;
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .earnings-caption {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .earnings-range {
                    position: relative;
                    margin: 1.5rem 0;
                }
                .earnings-range input[type="range"] {
                    width: 100%;
                    accent-color: #ea580c;
                }
                .range-bubble {
                    position: absolute;
                    top: -2rem;
                    transform: translateX(-50%);
                    padding: 0.15rem 0.5rem;
                    border-radius: 0.5rem;
                    background: #ea580c;
                    color: #fff;
                    font-size: 0.75rem;
                    opacity: 0;
                    transition: opacity 0.15s ease;
                    pointer-events: none;
                }
                .range-bubble.show {
                    opacity: 1;
                }
                .earnings-views {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .earnings-markets {
                    display: flex;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .market-toggle {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                    cursor: pointer;
                }
                .market-toggle input {
                    display: none;
                }
                .market-dot {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    border: 2px solid #9ca3af;
                    transition: all 0.2s ease;
                }
                .market-toggle input:checked + .market-dot {
                    border-color: #ea580c;
                    background: #ea580c;
                }
                .market-flag {
                    font-size: 1.5rem;
                }
                .earnings-income {
                    font-size: 1.875rem;
                    font-weight: 800;
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
    fn default_selection_income() {
        let income = monthly_income(500_000, &[Market::English, Market::Portuguese]);
        assert_eq!(income, 3250.0);
    }

    #[test]
    fn no_markets_no_income() {
        assert_eq!(monthly_income(MAX_VIEWS, &[]), 0.0);
    }

    #[test]
    fn views_snap_to_slider_steps() {
        assert_eq!(clamp_views(0), MIN_VIEWS);
        assert_eq!(clamp_views(123_456), 100_000);
        assert_eq!(clamp_views(9_000_000), MAX_VIEWS);
    }

    #[test]
    fn slider_percent_spans_track() {
        assert_eq!(slider_percent(MIN_VIEWS), 0.0);
        assert_eq!(slider_percent(MAX_VIEWS), 100.0);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(500_000), "500,000");
        assert_eq!(group_thousands(5_000_000), "5,000,000");
    }

    #[test]
    fn tween_clamps_progress() {
        assert_eq!(tween(0.0, 3250.0, 0.5), 1625.0);
        assert_eq!(tween(100.0, 0.0, 2.0), 0.0);
        assert_eq!(tween(100.0, 0.0, -1.0), 100.0);
    }
}
