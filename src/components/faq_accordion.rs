use yew::prelude::*;

use crate::content::FaqEntry;

/// Next open index after clicking `clicked`; clicking the open item closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-grid">
            { for props.items.iter().enumerate().map(|(i, item)| {
                let opened = *open == Some(i);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle(*open, i));
                    })
                };
                html! {
                    <button
                        key={i}
                        class={classes!("faq-item", opened.then(|| "open"))}
                        aria-expanded={opened.to_string()}
                        {onclick}
                    >
                        <div class="faq-question">
                            <span>{&item.q}</span>
                            <span class="faq-toggle">{"＋"}</span>
                        </div>
                        <div class="faq-answer">
                            <p>{&item.a}</p>
                        </div>
                    </button>
                }
            }) }
            <style>
                {r#"
                .faq-grid {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 1.5rem;
                }
                .faq-item {
                    width: 100%;
                    text-align: left;
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    background: #fff;
                    padding: 1.5rem;
                    font: inherit;
                    color: inherit;
                    cursor: pointer;
                }
                .dark .faq-item {
                    background: #171717;
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .faq-item:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(249, 115, 22, 0.5);
                }
                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    font-weight: 600;
                }
                .faq-toggle {
                    transition: transform 0.3s ease;
                }
                .faq-item.open .faq-toggle {
                    transform: rotate(45deg);
                }
                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    overflow: hidden;
                    transition: grid-template-rows 0.4s ease-in-out;
                    color: #4b5563;
                }
                .faq-answer > p {
                    min-height: 0;
                    margin: 0;
                }
                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                    margin-top: 0.75rem;
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
    fn only_one_item_open() {
        let open = toggle(None, 1);
        assert_eq!(open, Some(1));
        assert_eq!(toggle(open, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }
}
