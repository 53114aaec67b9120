use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub interactive: bool,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass-card", props.interactive.then(|| "glass-card--interactive"), props.class.clone())}>
            <div class="glass-card__inner">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .glass-card {
                    position: relative;
                    height: 100%;
                    border-radius: 1rem;
                    padding: 1px;
                    background: rgba(0, 0, 0, 0.05);
                    transition: background 0.4s ease, transform 0.3s ease;
                }
                .dark .glass-card {
                    background: rgba(255, 255, 255, 0.08);
                }
                .glass-card--interactive:hover {
                    background: linear-gradient(135deg, rgba(249, 115, 22, 0.8), rgba(236, 72, 153, 0.6));
                    transform: translateY(-4px);
                }
                .glass-card__inner {
                    height: 100%;
                    border-radius: calc(1rem - 1px);
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(16px);
                }
                .dark .glass-card__inner {
                    background: rgba(23, 23, 23, 0.9);
                }
                "#}
            </style>
        </div>
    }
}
