use shared::{ExplanationLine, format_explanation};
use yew::prelude::*;

pub fn render_explanation(content: &str) -> Html {
    html! {
        <ul class="explanation-list">
            { for format_explanation(content).iter().map(render_line) }
        </ul>
    }
}

fn render_line(line: &ExplanationLine) -> Html {
    html! {
        <li class="explanation-item">
            <span class="bullet-dot"></span>
            <span>
                { for line.segments.iter().map(|segment| {
                    if segment.emphasized {
                        html! { <strong class="emphasis">{ &segment.text }</strong> }
                    } else {
                        html! { <span>{ &segment.text }</span> }
                    }
                })}
            </span>
        </li>
    }
}
