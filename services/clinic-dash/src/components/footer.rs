// services/clinic-dash/src/components/footer.rs
//
// Hospital CMS Dashboard - Footer Component
//

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-logo">
                    <p>{format!("© {year}. All Rights Reserved by Hospital CMS.")}</p>
                </div>
                <div class="footer-links">
                    <FooterColumn title="Company" links=["About", "Careers", "Press"] />
                    <FooterColumn title="Support" links=["Account", "Help Center", "Contact Us"] />
                    <FooterColumn
                        title="Legals"
                        links=["Terms & Conditions", "Privacy Policy", "Licensing"]
                    />
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: [&'static str; 3]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4>{title}</h4>
            {links
                .into_iter()
                .map(|label| view! { <a href="#">{label}</a> })
                .collect_view()}
        </div>
    }
}
