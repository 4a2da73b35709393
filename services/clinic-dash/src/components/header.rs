// services/clinic-dash/src/components/header.rs
//
// Hospital CMS Dashboard - Header Component
//
// Renders one of four navigation variants keyed by the stored role. The
// session is gated first: the site root always starts anonymous, and a
// privileged role without a token forces a fresh login.

use leptos::*;

use cmskit::session::{gate, is_root_path, GateDecision, NavVariant, Role};

use crate::browser;
use crate::state::AppState;

#[component]
pub fn Header(state: AppState) -> impl IntoView {
    let session = state.session.load();
    let at_root = is_root_path(&browser::current_path());

    match gate(at_root, &session) {
        GateDecision::ClearAll => {
            state.session.clear();
            view! { <BrandHeader /> }.into_view()
        }
        GateDecision::ForceLogout => {
            log::warn!("stored role has no token; forcing re-login");
            state.session.clear_role();
            browser::alert("Session expired or invalid login. Please log in again.");
            browser::redirect("/");
            view! { <BrandHeader /> }.into_view()
        }
        GateDecision::Render(variant) => {
            view! { <NavHeader state=state variant=variant /> }.into_view()
        }
    }
}

/// Logo-only header shown at the root and while redirecting.
#[component]
fn BrandHeader() -> impl IntoView {
    view! {
        <header class="header">
            <div class="logo-section">
                <span class="logo-title">"Hospital CMS"</span>
            </div>
        </header>
    }
}

#[component]
fn NavHeader(state: AppState, variant: NavVariant) -> impl IntoView {
    let session = state.session;

    let nav = match variant {
        NavVariant::Admin => view! {
            <button class="adminBtn" on:click=move |_| browser::redirect("/admin/dashboard")>
                "Add Doctor"
            </button>
            <button class="adminBtn" on:click=move |_| {
                session.clear();
                browser::redirect("/");
            }>
                "Logout"
            </button>
        }
        .into_view(),

        NavVariant::Doctor => view! {
            <button class="adminBtn" on:click=move |_| {
                session.select_role(Role::Doctor);
                browser::redirect("/doctor/dashboard");
            }>
                "Home"
            </button>
            <button class="adminBtn" on:click=move |_| {
                session.clear();
                browser::redirect("/");
            }>
                "Logout"
            </button>
        }
        .into_view(),

        NavVariant::LoggedPatient => view! {
            <button class="adminBtn" on:click=move |_| browser::redirect("/patient/dashboard")>
                "Home"
            </button>
            <button class="adminBtn" on:click=move |_| browser::redirect("/patient/appointments")>
                "Appointments"
            </button>
            <button class="adminBtn" on:click=move |_| {
                session.logout_patient();
                browser::redirect("/patient/dashboard");
            }>
                "Logout"
            </button>
        }
        .into_view(),

        // Default: patient not logged in, or unknown. The patient modal
        // lives outside this app; mirror its absent-modal fallback.
        NavVariant::Anonymous => view! {
            <button class="adminBtn" on:click=move |_| browser::alert("Modal not available.")>
                "Login"
            </button>
            <button class="adminBtn" on:click=move |_| browser::alert("Modal not available.")>
                "Sign Up"
            </button>
        }
        .into_view(),
    };

    view! {
        <header class="header">
            <div class="logo-section">
                <span class="logo-title">"Hospital CMS"</span>
            </div>
            <nav>{nav}</nav>
        </header>
    }
}
