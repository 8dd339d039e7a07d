use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Footer with contact details and quick links.
#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let site = ctx.config.with_value(|c| c.site.clone());
    let mailto = format!("mailto:{}", site.email);

    view! {
        <footer class=css::footer>
            <div class=css::footerInner>
                <section>
                    <h3 class=css::footerTitle>{site.name.clone()}</h3>
                    <p class=css::footerText>{format!("Serving our community since {}", site.established)}</p>
                </section>

                <section>
                    <h3 class=css::footerTitle>"Quick Links"</h3>
                    <ul class=css::footerLinks>
                        {AppRoute::NAV
                            .iter()
                            .map(|route| view! {
                                <li><a href=route.to_hash()>{route.nav_label()}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section>
                    <h3 class=css::footerTitle>"Contact"</h3>
                    <p class=css::footerText>
                        <Icon icon=ic::LOCATION />
                        <span>{site.address.clone()}</span>
                    </p>
                    <p class=css::footerText>
                        <Icon icon=ic::MAIL />
                        <a href=mailto>{site.email.clone()}</a>
                    </p>
                </section>
            </div>
            <p class=css::copyright>{format!("© {}", site.name)}</p>
        </footer>
    }
}
