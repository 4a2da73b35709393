// services/clinic-dash/src/app.rs
//
// Hospital CMS Dashboard - application shell
//

use leptos::*;

use crate::browser;
use crate::components::{Footer, Header};
use crate::pages::{AdminDashboard, DoctorDashboard, Home};
use crate::state::use_app_state;

#[component]
pub fn App() -> impl IntoView {
    let state = use_app_state();

    // The original ships a static page per dashboard; dispatching on the
    // pathname keeps that model without pulling in a router.
    let path = browser::current_path();

    let page = if path.starts_with("/admin") {
        view! { <AdminDashboard state=state.clone() /> }.into_view()
    } else if path.starts_with("/doctor") {
        view! { <DoctorDashboard state=state.clone() /> }.into_view()
    } else {
        view! { <Home state=state.clone() /> }.into_view()
    };

    view! {
        <div class="cms-app">
            <Header state=state />

            <main class="page-content">{page}</main>

            <Footer />
        </div>
    }
}
