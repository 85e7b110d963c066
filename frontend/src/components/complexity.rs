use shared::{ComplexityBlock, classify_complexity};
use yew::prelude::*;

pub fn render_complexity(content: &str) -> Html {
    html! {
        <div class="complexity-grid">
            { for classify_complexity(content).iter().map(render_block) }
        </div>
    }
}

fn render_block(block: &ComplexityBlock) -> Html {
    html! {
        <div class={classes!(
            "complexity-block",
            format!("complexity-{}", block.category),
            block.category.is_full_width().then_some("full-width")
        )}>
            <span class="complexity-icon">{ block.icon() }</span>
            <span class="complexity-text">{ &block.text }</span>
        </div>
    }
}
