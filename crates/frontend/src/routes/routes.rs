use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::SalesDashboard;
use crate::domain::a101_product::ui::list::ProductList;
use crate::domain::a102_service::ui::list::ServiceList;
use crate::domain::a103_news::ui::list::NewsList;
use crate::domain::a104_job::ui::list::JobList;
use crate::system::auth::guard::ProtectedRoute;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

/// All routes except `/login` sit behind [`ProtectedRoute`], including the
/// fallback, so unknown paths never leak to a signed-out visitor.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <ProtectedRoute><NotFoundPage /></ProtectedRoute> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| view! { <ProtectedRoute><HomePage /></ProtectedRoute> } />
                <Route path=path!("/products") view=|| view! { <ProtectedRoute><ProductList /></ProtectedRoute> } />
                <Route path=path!("/services") view=|| view! { <ProtectedRoute><ServiceList /></ProtectedRoute> } />
                <Route path=path!("/news") view=|| view! { <ProtectedRoute><NewsList /></ProtectedRoute> } />
                <Route path=path!("/careers") view=|| view! { <ProtectedRoute><JobList /></ProtectedRoute> } />
                <Route path=path!("/sales") view=|| view! { <ProtectedRoute><SalesDashboard /></ProtectedRoute> } />
            </Routes>
        </Router>
    }
}
