use yew::prelude::*;

use crate::showcase::language::DemoLanguage;

#[derive(Properties, PartialEq)]
pub struct LanguageSliderProps {
    pub active: DemoLanguage,
    pub on_select: Callback<DemoLanguage>,
}

#[function_component(LanguageSlider)]
pub fn language_slider(props: &LanguageSliderProps) -> Html {
    html! {
        <div class="language-slider">
            <span class="language-slider-label">{"Язык"}</span>
            { for DemoLanguage::ALL.iter().map(|&language| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(language);
                });
                html! {
                    <button
                        key={language.code()}
                        class={classes!("language-option", (props.active == language).then(|| "active"))}
                        aria-pressed={(props.active == language).to_string()}
                        {onclick}
                    >
                        <span class="language-flag">{language.flag()}</span>
                        {language.label()}
                    </button>
                }
            }) }
            <style>
                {r#"
                .language-slider {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.4rem 1rem;
                    background: rgba(0, 0, 0, 0.45);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    color: #fff;
                }
                .language-slider-label {
                    font-size: 0.75rem;
                    opacity: 0.8;
                }
                .language-option {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.25rem 0.5rem;
                    border: none;
                    border-radius: 0.4rem;
                    background: transparent;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .language-option:hover {
                    color: #fff;
                }
                .language-option.active {
                    color: #f97316;
                }
                .language-flag {
                    font-size: 1.1rem;
                }
                "#}
            </style>
        </div>
    }
}
