use yew::prelude::*;

struct Logo {
    alt: &'static str,
    light_src: &'static str,
    dark_src: &'static str,
}

const LOGOS: [Logo; 7] = [
    Logo { alt: "OpenAI", light_src: "/logos/OpenAI-black-monoblossom.png", dark_src: "/logos/OpenAI-white-monoblossom.png" },
    Logo { alt: "ElevenLabs", light_src: "/logos/elevenlabs-logo-black.png", dark_src: "/logos/elevenlabs-logo-white.png" },
    Logo { alt: "Vercel", light_src: "/logos/vercel-logotype-light.png", dark_src: "/logos/vercel-logotype-dark.png" },
    Logo { alt: "Zapier", light_src: "/logos/zapier-logo_black.png", dark_src: "/logos/zapier-logo_white.png" },
    Logo { alt: "DeepL", light_src: "/logos/DeepL-dark.png", dark_src: "/logos/DeepL-white.png" },
    Logo { alt: "Notion", light_src: "/logos/notion.png", dark_src: "/logos/notion-white.png" },
    Logo { alt: "Adobe", light_src: "/logos/adobe-dark.png", dark_src: "/logos/adobe-white.png" },
];

fn logo_row(prefix: &'static str) -> Html {
    html! {
        { for LOGOS.iter().enumerate().map(|(i, logo)| html! {
            <div key={format!("{}{}", prefix, i)} class="marquee-item">
                <img src={logo.light_src} alt={logo.alt} loading="lazy" class="marquee-logo logo-light" />
                <img src={logo.dark_src} alt={logo.alt} loading="lazy" class="marquee-logo logo-dark" />
            </div>
        }) }
    }
}

#[function_component(TechMarquee)]
pub fn tech_marquee() -> Html {
    html! {
        <section class="tech-marquee">
            <h3>{"Technology stack & integrations"}</h3>
            <div class="marquee-mask">
                // The row is rendered twice so the -50% keyframe loops seamlessly.
                <div class="marquee-track">
                    { logo_row("") }
                    { logo_row("dup-") }
                </div>
            </div>
            <style>
                {r#"
                .tech-marquee {
                    width: 100%;
                    overflow: hidden;
                    padding: 3.5rem 0;
                    margin-top: 6rem;
                }
                .tech-marquee h3 {
                    text-align: center;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 2rem;
                }
                .marquee-mask {
                    position: relative;
                    overflow: hidden;
                    mask-image: linear-gradient(to right, transparent, #000 10%, #000 90%, transparent);
                }
                .marquee-track {
                    display: flex;
                    align-items: center;
                    white-space: nowrap;
                    width: max-content;
                    animation: marquee 22s linear infinite;
                }
                .marquee-track:hover {
                    animation-play-state: paused;
                }
                @media (min-width: 768px) {
                    .marquee-track {
                        animation-duration: 35s;
                    }
                }
                .marquee-item {
                    flex-shrink: 0;
                    width: 140px;
                    height: 40px;
                    margin: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .marquee-logo {
                    max-height: 100%;
                    max-width: 100%;
                    object-fit: contain;
                    opacity: 0.8;
                    transition: opacity 0.2s ease;
                }
                .marquee-logo:hover {
                    opacity: 1;
                }
                .logo-dark,
                .dark .logo-light {
                    display: none;
                }
                .dark .logo-dark {
                    display: block;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </section>
    }
}
