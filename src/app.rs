//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, simulation::SimulationPage,
};
use crate::state::{session::SessionState, toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Every route except `/login` sits behind [`ProtectedRoute`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/retyrment.css"/>
        <Title text="Retyrment"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <ProtectedRoute>
                            <DashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <ProtectedRoute require_admin=true>
                            <AdminPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("simulation")
                    view=|| view! {
                        <ProtectedRoute require_feature="simulation".to_owned()>
                            <SimulationPage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
