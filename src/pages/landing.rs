use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::earnings_calculator::EarningsCalculator;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::floating_orbs::FloatingOrbs;
use crate::components::glass_card::GlassCard;
use crate::components::price_calculator::PriceCalculator;
use crate::components::scroll_spy::use_scroll_spy;
use crate::components::tech_marquee::TechMarquee;
use crate::components::theme_switch::{Theme, ThemeSwitch};
use crate::config;
use crate::content;
use crate::showcase::player::MediaSwitcher;
use crate::Route;

const HEADER_SCROLLED_PX: f64 = 10.0;
const BACK_TO_TOP_PX: f64 = 600.0;

const SPY_SECTIONS: &[&str] = &["services", "process", "pricing", "cases", "contact", "faq"];

const NAV_LINKS: [(&str, &str); 6] = [
    ("services", "Вы получаете"),
    ("process", "Как мы работаем"),
    ("cases", "Кейсы"),
    ("pricing", "Формат"),
    ("contact", "Контакты"),
    ("faq", "FAQ"),
];

const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Заявка", "Оставляете заявку на сайте, мы быстро связываемся, чтобы обсудить детали и запуск."),
    ("Старт", "Запускаем локализованные каналы, адаптируем контент и берём все технические задачи на себя."),
    ("Рост", "Продвигаем ролики, увеличиваем охваты и помогаем вам выйти на новую аудиторию."),
    ("Оплата", "Справедливое распределение доходов: мы зарабатываем только тогда, когда зарабатываете вы."),
];

const SERVICE_PERKS: [&str; 3] = [
    "Профессиональный перевод и озвучка",
    "Согласование деталей и контроль качества",
    "Быстрый запуск и поддержка",
];

struct PartnerCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PARTNER_CARDS: [PartnerCard; 3] = [
    PartnerCard {
        icon: "🚀",
        title: "Global scale",
        description: "Полный цикл локализации, дубляжа и управления каналами. Вы говорите с миром как будто сами владеете каждым языком.",
    },
    PartnerCard {
        icon: "♡",
        title: "Partner-first",
        description: "Мы не агентство, мы партнёры. Создаём международные медиа-бренды вместе, а не продаём услуги.",
    },
    PartnerCard {
        icon: "◎",
        title: "Zero-risk pilot",
        description: "Запуск на одном рынке без риска. Аналитика, прогноз, тест, масштабирование только после подтверждённого результата.",
    },
];

/// Smooth-scrolls so that section `id` sits just below the fixed header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(id) else {
        gloo_console::error!("Section not found:", id.to_string());
        return;
    };
    let header_height = document
        .query_selector("header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = section_offset(target.get_bounding_client_rect().top(), scroll_y, header_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Page offset for a section whose box starts `rect_top` px below the viewport top.
pub fn section_offset(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height - 8.0
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn mailto_link() -> String {
    let subject = format!("Заявка {}", config::AGENCY_NAME);
    format!(
        "mailto:{}?subject={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode(&subject)
    )
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    scrolled: bool,
    active: Option<String>,
    theme: Theme,
    on_theme_change: Callback<Theme>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <header class={classes!("site-header", props.scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="header-globe">{"🌐"}</span>
                    {config::AGENCY_NAME}
                </Link<Route>>
                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let active = props.active.as_deref() == Some(*id);
                        html! {
                            <a key={*id} href={format!("#{}", id)} class={classes!("header-link", active.then(|| "active"))}>
                                {*label}
                            </a>
                        }
                    }) }
                </nav>
                <div class="header-actions">
                    <ThemeSwitch theme={props.theme} on_change={props.on_theme_change.clone()} />
                    <button class="header-contact" onclick={on_contact}>{"Связаться"}</button>
                </div>
            </div>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let home = use_memo(|_| content::home(), ());
    let theme = use_state(Theme::preferred);
    let (_, scroll_y) = use_window_scroll();
    let active_section = use_scroll_spy(SPY_SECTIONS);
    let year = chrono::Local::now().year();

    let on_theme_change = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };
    let on_primary_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });
    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <div class={classes!("landing", (*theme == Theme::Dark).then(|| "dark"))}>
            <div class="landing-surface">
                <div aria-hidden="true" class="hero-gradient"></div>
                <Header
                    scrolled={scroll_y > HEADER_SCROLLED_PX}
                    active={active_section}
                    theme={*theme}
                    {on_theme_change}
                />

                <section class="hero">
                    <FloatingOrbs />
                    <div class="container hero-grid">
                        <div class="hero-copy">
                            <h1>
                                {&home.hero_title}{" "}
                                <span class="accent-text">{"каналы YouTube"}</span>
                                <br />{"на других языках"}
                            </h1>
                            <p class="hero-subtitle">{&home.hero_subtitle}</p>
                            <div class="hero-actions">
                                <button class="btn-primary" onclick={on_primary_cta}>
                                    {&home.cta_primary}{" →"}
                                </button>
                                <a href="#pricing" class="btn-outline">{&home.cta_secondary}{" ▶"}</a>
                            </div>
                            <div class="hero-badges">
                                <span>{"⏱ Быстрый запуск"}</span>
                                <span>{"🛡 Качественная озвучка"}</span>
                                <span>{"✨ Проверка носителями языка"}</span>
                            </div>
                        </div>
                        <div class="hero-demo">
                            <MediaSwitcher />
                            <p class="hero-caption">
                                {"Переключайте аудио-дорожки: EN / RU / ES, демонстрация локализации."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="services" class="section">
                    <div class="container">
                        <h2>{"Вы получаете"}</h2>
                        <p class="section-lead">{"Начните сотрудничество сейчас, чтобы не начинать потом"}</p>
                        <div class="grid-3">
                            { for home.services.iter().enumerate().map(|(i, service)| html! {
                                <GlassCard key={i}>
                                    <div class="card-title">{&service.title}</div>
                                    <p class="card-text">{&service.desc}</p>
                                    <ul class="perk-list">
                                        { for SERVICE_PERKS.iter().map(|perk| html! { <li>{"✓ "}{*perk}</li> }) }
                                    </ul>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="process" class="section section-tinted">
                    <div class="container">
                        <h2>{"Как мы работаем"}</h2>
                        <div class="grid-4">
                            { for PROCESS_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                                <GlassCard key={i}>
                                    <div class="step-title">{format!("Шаг {}. {}", i + 1, title)}</div>
                                    <div class="card-text">{*text}</div>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="cases" class="section">
                    <div class="container">
                        <h2>{"Кейсы"}</h2>
                        <p class="section-lead">{"Несколько примеров до/после."}</p>
                        <div class="grid-3">
                            { for (1..=3).map(|i| html! {
                                <GlassCard key={i}>
                                    <div class="case-frame">
                                        <div class="case-video">{format!("Видео {}", i)}</div>
                                        <div class="case-body">
                                            <div class="card-title">{"Tech review → Spanish"}</div>
                                            <div class="card-text">{"+130% просмотров из Латам"}</div>
                                        </div>
                                    </div>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="yt-calculator" class="section section-tinted section-centered">
                    <h2>{"Сколько ваш канал может приносить на других языках?"}</h2>
                    <p class="section-lead">{"Передвиньте ползунок и узнайте потенциал вашего YouTube-канала"}</p>
                    <EarningsCalculator />
                </section>

                <section id="pricing" class="section section-centered">
                    <h2>{"Формат сотрудничества"}</h2>
                    <p class="section-lead">{"Или почему вам стоит выбрать нас"}</p>
                    <div class="container grid-3">
                        { for PARTNER_CARDS.iter().map(|card| html! {
                            <div key={card.title} class="flip-card">
                                <div class="flip-card-inner">
                                    <div class="flip-face flip-front">
                                        <div class="flip-icons">
                                            <span class="flip-icon">{card.icon}</span>
                                            <span class="flip-check">{"✓"}</span>
                                        </div>
                                        <div class="flip-title">{card.title}</div>
                                    </div>
                                    <div class="flip-face flip-back">
                                        <div class="flip-icons">
                                            <span class="flip-icon">{card.icon}</span>
                                            <span class="flip-check done">{"✓✓"}</span>
                                        </div>
                                        <p>{card.description}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="container price-slot">
                        <PriceCalculator />
                    </div>
                </section>

                <TechMarquee />

                <section id="contact" class="section section-muted">
                    <div class="container narrow">
                        <h2 class="centered">{"Расскажите о проекте"}</h2>
                        <p class="section-lead centered">
                            {"Мы ответим в течение рабочего дня. Или напишите сразу в Telegram."}
                        </p>
                        <ContactForm />
                    </div>
                </section>

                <section id="faq" class="section">
                    <div class="container">
                        <h2>{"FAQ"}</h2>
                        <FaqAccordion items={home.faq.clone()} />
                    </div>
                </section>

                <footer class="site-footer">
                    <div class="container footer-row">
                        <div>{format!("© {} {}. Все права защищены.", year, config::AGENCY_NAME)}</div>
                        <div class="footer-links">
                            <a href={config::TELEGRAM_LINK} target="_blank" rel="noreferrer">{"Telegram"}</a>
                            <a href={mailto_link()}>{"Email"}</a>
                            <Link<Route> to={Route::Privacy}>{"Политика конфиденциальности"}</Link<Route>>
                        </div>
                    </div>
                </footer>

                if scroll_y > BACK_TO_TOP_PX {
                    <button class="back-to-top" aria-label="Наверх" title="Наверх" onclick={on_back_to_top}>
                        {"↑"}
                    </button>
                }
            </div>
            <style>
                {r#"
                .landing-surface {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: #fff;
                    color: #111827;
                    transition: background-color 0.3s ease, color 0.3s ease;
                }
                .dark .landing-surface {
                    background: #0a0a0a;
                    color: #f5f5f5;
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .container.narrow {
                    max-width: 42rem;
                }
                .hero-gradient {
                    pointer-events: none;
                    position: absolute;
                    top: -10rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 900px;
                    height: 600px;
                    border-radius: 40%;
                    filter: blur(64px);
                    opacity: 0.4;
                    background: linear-gradient(90deg, #ea580c, #f59e0b, #f43f5e);
                    background-size: 200% 200%;
                    animation: heroGradient 12s ease infinite;
                }
                .dark .hero-gradient {
                    opacity: 0.25;
                }
                @keyframes heroGradient {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(8px);
                    transition: all 0.3s ease;
                }
                .dark .site-header {
                    background: rgba(10, 10, 10, 0.4);
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .dark .site-header.scrolled {
                    background: rgba(10, 10, 10, 0.75);
                }
                .header-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: inherit;
                    text-decoration: none;
                }
                .header-nav {
                    display: none;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .header-nav {
                        display: flex;
                    }
                }
                .header-link {
                    position: relative;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .header-link::after {
                    content: "";
                    position: absolute;
                    left: 0;
                    bottom: -0.25rem;
                    width: 100%;
                    height: 2px;
                    border-radius: 2px;
                    background: currentColor;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }
                .header-link.active {
                    color: #ea580c;
                }
                .header-link.active::after {
                    opacity: 1;
                }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .header-contact,
                .btn-primary {
                    border: none;
                    border-radius: 1rem;
                    background: #ea580c;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                    box-shadow: 0 6px 16px rgba(234, 88, 12, 0.2);
                }
                .header-contact:hover,
                .btn-primary:hover {
                    background: #c2410c;
                }
                .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 1rem;
                    border: 1px solid #fdba74;
                    color: #c2410c;
                    padding: 0.5rem 1rem;
                    text-decoration: none;
                }

                .hero {
                    position: relative;
                    padding-top: 7rem;
                }
                .hero-grid {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                    padding-top: 4rem;
                    padding-bottom: 4rem;
                }
                @media (min-width: 768px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .hero h1 {
                    font-size: 2.75rem;
                    font-weight: 700;
                    line-height: 1.15;
                }
                .accent-text {
                    background: linear-gradient(90deg, #ea580c, #f59e0b);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle,
                .section-lead,
                .card-text {
                    color: #4b5563;
                }
                .dark .hero-subtitle,
                .dark .section-lead,
                .dark .card-text {
                    color: #d4d4d4;
                }
                .hero-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .hero-badges {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .hero-caption {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .section {
                    scroll-margin-top: 6rem;
                    padding: 5rem 0;
                }
                .section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .section-tinted {
                    background: #fff7ed;
                }
                .dark .section-tinted,
                .dark .section-muted {
                    background: #0d0b0a;
                }
                .section-muted {
                    background: #f9fafb;
                }
                .section-centered,
                .centered {
                    text-align: center;
                }
                .section-centered {
                    padding-left: 1rem;
                    padding-right: 1rem;
                }
                .grid-3,
                .grid-4 {
                    margin-top: 2.5rem;
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .grid-3 {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .grid-4 {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .card-title {
                    font-weight: 600;
                }
                .step-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                .perk-list {
                    list-style: none;
                    padding: 0;
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    display: grid;
                    gap: 0.5rem;
                }
                .case-frame {
                    border-radius: 0.75rem;
                    overflow: hidden;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                }
                .case-video {
                    aspect-ratio: 16 / 9;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f3f4f6;
                    color: #9ca3af;
                }
                .dark .case-video {
                    background: #262626;
                }
                .case-body {
                    padding: 1rem;
                }

                .flip-card {
                    perspective: 1200px;
                    cursor: pointer;
                }
                .flip-card-inner {
                    position: relative;
                    height: 20rem;
                    transition: transform 0.9s ease;
                    transform-style: preserve-3d;
                }
                .flip-card:hover .flip-card-inner {
                    transform: rotateY(180deg);
                }
                .flip-face {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    text-align: left;
                    backface-visibility: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.5s ease;
                }
                .flip-card:hover .flip-face {
                    box-shadow: 0 0 32px 6px rgba(255, 127, 80, 0.35);
                }
                .flip-front {
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(24px);
                }
                .flip-back {
                    background: #fff;
                    transform: rotateY(180deg);
                }
                .dark .flip-front {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .dark .flip-back {
                    background: #171717;
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .flip-icons {
                    display: flex;
                    justify-content: space-between;
                    font-size: 1.75rem;
                }
                .flip-check {
                    opacity: 0.4;
                }
                .flip-check.done {
                    opacity: 1;
                    color: #ea580c;
                }
                .flip-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .price-slot {
                    max-width: 28rem;
                    margin-top: 3rem;
                }

                .site-footer {
                    border-top: 1px solid rgba(0, 0, 0, 0.05);
                    padding: 2.5rem 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .dark .site-footer {
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #a3a3a3;
                }
                .footer-row {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: #c2410c;
                    text-decoration: underline;
                }
                .back-to-top {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                    border: none;
                    border-radius: 999px;
                    background: #ea580c;
                    color: #fff;
                    padding: 0.5rem 0.75rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    transition: background-color 0.2s ease;
                }
                .back-to-top:hover {
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
    fn section_offset_clears_header() {
        // Section 900px down the viewport, already scrolled 100px, 64px header.
        assert_eq!(section_offset(900.0, 100.0, 64.0), 928.0);
        assert_eq!(section_offset(0.0, 0.0, 0.0), -8.0);
    }

    #[test]
    fn mailto_subject_is_encoded() {
        let link = mailto_link();
        assert!(link.starts_with("mailto:support@lang2lang.io?subject="));
        assert!(!link.contains(' '));
    }

    #[test]
    fn nav_links_are_spied() {
        for (id, _) in NAV_LINKS {
            assert!(SPY_SECTIONS.contains(&id));
        }
    }
}
