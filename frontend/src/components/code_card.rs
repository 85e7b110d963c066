use super::utils::write_clipboard;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COPIED_RESET_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CodeCardProps {
    pub title: AttrValue,
    pub content: AttrValue,
    pub label_class: &'static str,
}

#[function_component(CodeCard)]
pub fn code_card(props: &CodeCardProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let content = props.content.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let content = content.clone();
            spawn_local(async move {
                match write_clipboard(content.as_str()).await {
                    Ok(()) => {
                        copied.set(true);
                        TimeoutFuture::new(COPIED_RESET_MS).await;
                        copied.set(false);
                    }
                    Err(e) => log::warn!("Clipboard write failed: {:?}", e),
                }
            });
        })
    };

    html! {
        <div class="result-card">
            <div class="card-header">
                <span class={props.label_class}>{ props.title.as_str() }</span>
                <button class="copy-btn" title="Copy to clipboard" onclick={on_copy}>
                    {
                        if *copied {
                            html! { <><i class="fa-solid fa-check"></i>{" Copied!"}</> }
                        } else {
                            html! { <><i class="fa-regular fa-copy"></i>{" Copy"}</> }
                        }
                    }
                </button>
            </div>
            <pre class="code-block"><code>{ props.content.as_str() }</code></pre>
        </div>
    }
}
