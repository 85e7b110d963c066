use super::super::{Model, Msg};
use gloo_file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

/// Saves `contents` through a temporary object URL and a synthetic link click.
pub fn download_text(file_name: &str, mime_type: &str, contents: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let url = ObjectUrl::from(Blob::new_with_options(contents, Some(mime_type)));
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoked on drop; give the browser time to start the download.
    Timeout::new(1_000, move || drop(url)).forget();
    Ok(())
}

pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    JsFuture::from(window.navigator().clipboard().write_text(text)).await?;
    Ok(())
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(error_msg) = model.session.error() else {
        return html! {};
    };

    html! {
        <div class="error-message">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p>{ error_msg }</p>
            <button
                class="dismiss-btn"
                title="Dismiss"
                onclick={ctx.link().callback(|_| Msg::DismissError)}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
