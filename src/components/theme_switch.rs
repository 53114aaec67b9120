use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored choice first, then the OS preference, then light.
    pub fn preferred() -> Theme {
        let Some(window) = window() else {
            return Theme::Light;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::from_stored(&stored) {
                    return theme;
                }
            }
        }
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) if query.matches() => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn persist(self) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, self.as_str());
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeSwitchProps {
    pub theme: Theme,
    pub on_change: Callback<Theme>,
}

#[function_component(ThemeSwitch)]
pub fn theme_switch(props: &ThemeSwitchProps) -> Html {
    let is_dark = props.theme == Theme::Dark;

    {
        use_effect_with_deps(
            move |theme: &Theme| {
                theme.persist();
                || ()
            },
            props.theme,
        );
    }

    let onclick = {
        let on_change = props.on_change.clone();
        let theme = props.theme;
        Callback::from(move |_: MouseEvent| on_change.emit(theme.toggled()))
    };

    html! {
        <button
            role="switch"
            aria-checked={is_dark.to_string()}
            aria-label="Переключить тему"
            title={if is_dark { "Светлая тема" } else { "Тёмная тема" }}
            class={classes!("theme-switch", is_dark.then(|| "on"))}
            {onclick}
        >
            <span class="theme-knob">{if is_dark { "☾" } else { "☀" }}</span>
            <style>
                {r#"
                .theme-switch {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    width: 3rem;
                    height: 1.75rem;
                    border-radius: 999px;
                    border: 1px solid #d1d5db;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: background-color 0.3s ease, border-color 0.3s ease;
                }
                .theme-switch.on {
                    background: #ea580c;
                    border-color: #ea580c;
                }
                .theme-knob {
                    position: absolute;
                    left: 0.125rem;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: #fff;
                    color: #f97316;
                    font-size: 0.8rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: left 0.25s cubic-bezier(0.5, 1.6, 0.4, 0.8);
                }
                .theme-switch.on .theme-knob {
                    left: calc(100% - 1.375rem);
                }
                "#}
            </style>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_stored("sepia"), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
