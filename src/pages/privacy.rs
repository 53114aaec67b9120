use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Политика конфиденциальности"}</h1>

                <section>
                    <h2>{"1. Какие данные мы получаем"}</h2>
                    <p>{"Через форму обратной связи вы передаёте нам:"}</p>
                    <ul>
                        <li>{"Имя (чтобы знать, как к вам обращаться)"}</li>
                        <li>{"Адрес электронной почты (для ответа на заявку)"}</li>
                        <li>{"Ссылку на канал или видео и описание задачи (по желанию)"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Как мы используем данные"}</h2>
                    <ul>
                        <li>{"Связываемся с вами по поводу заявки"}</li>
                        <li>{"Готовим оценку стоимости и сроков локализации"}</li>
                        <li>{"Не продаём и не передаём данные третьим лицам для рекламы"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Передача заявок"}</h2>
                    <p>{"Заявки доставляются на нашу почту через сервис обработки форм по защищённому соединению HTTPS."}</p>
                </section>

                <section>
                    <h2>{"4. Аналитика"}</h2>
                    <p>{"Мы используем обезличенную веб-аналитику, чтобы понимать, какие разделы сайта полезны. Сохраняется только выбранная тема оформления в локальном хранилище браузера."}</p>
                </section>

                <section>
                    <h2>{"5. Ваши права"}</h2>
                    <p>{"Вы можете запросить доступ к своим данным, их исправление или удаление, написав нам."}</p>
                </section>

                <section>
                    <h2>{"6. Контакты"}</h2>
                    <p>{format!("Email: {}", config::SUPPORT_EMAIL)}</p>
                    <p>
                        {"Telegram: "}
                        <a href={config::TELEGRAM_LINK} target="_blank" rel="noreferrer">{config::TELEGRAM_LINK}</a>
                    </p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{format!("← {}", config::AGENCY_NAME)}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #0a0a0a;
                    padding: 4rem 2rem;
                    color: #f5f5f5;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    background: rgba(23, 23, 23, 0.8);
                    border: 1px solid rgba(249, 115, 22, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    margin: 0 auto;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .legal-content h1 {
                    font-size: 2rem;
                    background: linear-gradient(45deg, #fff, #fdba74);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 2.5rem;
                    text-align: center;
                }
                .legal-content section {
                    margin-bottom: 2rem;
                }
                .legal-content h2 {
                    font-size: 1.25rem;
                    color: #fdba74;
                    margin-bottom: 0.75rem;
                }
                .legal-content p,
                .legal-content li {
                    color: #d4d4d4;
                    line-height: 1.6;
                }
                .legal-content a {
                    color: #fb923c;
                }
                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
