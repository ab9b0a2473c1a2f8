pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(on_open_settings: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader on_open_settings=on_open_settings />
            <div class="app-main" style="flex: 1; overflow: auto;">
                {children()}
            </div>
        </div>
    }
}
