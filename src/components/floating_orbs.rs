use yew::prelude::*;

#[function_component(FloatingOrbs)]
pub fn floating_orbs() -> Html {
    html! {
        <div aria-hidden="true" class="floating-orbs">
            <div class="orb orb-warm"></div>
            <div class="orb orb-rose"></div>
            <style>
                {r#"
                .floating-orbs {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .orb-warm {
                    top: -2.5rem;
                    left: -2.5rem;
                    width: 18rem;
                    height: 18rem;
                    background: radial-gradient(closest-side, rgba(255, 102, 0, 0.35), transparent);
                    animation: orbDriftA 10s ease-in-out infinite;
                }
                .orb-rose {
                    bottom: 0;
                    right: 0;
                    width: 20rem;
                    height: 20rem;
                    background: radial-gradient(closest-side, rgba(255, 45, 85, 0.3), transparent);
                    animation: orbDriftB 12s ease-in-out 1.2s infinite;
                }
                @keyframes orbDriftA {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(10px, 20px); }
                }
                @keyframes orbDriftB {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(-10px, -15px); }
                }
                "#}
            </style>
        </div>
    }
}
