//! Application shell: routing, shared context, and the SSR document.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_host::ToastHost;
use crate::pages::lost_and_found::LostAndFoundPage;
use crate::pages::overview::OverviewPage;
use crate::pages::phonebook::PhoneBookPage;
use crate::pages::repairs::RepairsPage;
use crate::pages::reservations::ReservationsPage;
use crate::state::toast::ToastState;

/// Root component mounting the five admin screens behind a shared nav.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-admin.css"/>
        <Title text="Campus Admin"/>
        <Router>
            <nav class="shell-nav">
                <span class="shell-nav__brand">"Campus Admin"</span>
                <A href="/">"Overview"</A>
                <A href="/lost-and-found">"Lost & Found"</A>
                <A href="/phonebook">"Phone Directory"</A>
                <A href="/repairs">"Repairs"</A>
                <A href="/reservations">"Reservations"</A>
            </nav>
            <main class="shell-main">
                <Routes fallback=|| view! { <p class="shell-main__missing">"Page not found"</p> }>
                    <Route path=path!("/") view=OverviewPage/>
                    <Route path=path!("/lost-and-found") view=LostAndFoundPage/>
                    <Route path=path!("/phonebook") view=PhoneBookPage/>
                    <Route path=path!("/repairs") view=RepairsPage/>
                    <Route path=path!("/reservations") view=ReservationsPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// HTML document shell used by the SSR server binary.
#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options=options.clone()/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
