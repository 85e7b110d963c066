use yew::prelude::*;

/// Renders the hero banner
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-square-root-variable"></i> {" Math2Code"}</h1>
            <p class="subtitle">{"Convert research math into runnable SymPy, NumPy and PyTorch code"}</p>
        </header>
    }
}
