use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="header-inner">
                <span class="logo">"Getting to Know the Classics | AI Edition"</span>
                <div class="nav-links">
                    <a href="/">"Home"</a>
                    <a href="/upload">"Upload"</a>
                </div>
            </nav>
        </header>
        <main class="site-main">
            {children()}
        </main>
    }
}
