use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use shared::Framework;
use strum::IntoEnumIterator;
use web_sys::{DragEvent, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const PLACEHOLDER: &str = "Enter your LaTeX math expression here...

Example:
\\int_0^\\infty e^{-x^2} dx = \\frac{\\sqrt{\\pi}}{2}

or

\\sum_{n=1}^{N} \\frac{1}{n^2} \\approx \\frac{\\pi^2}{6}";

pub fn render_input_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_input = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetEquation(textarea.value())
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <section class="input-section">
            <div
                id="drop-zone"
                class={classes!("input-card", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                <textarea
                    class="equation-input"
                    placeholder={PLACEHOLDER}
                    spellcheck="false"
                    value={model.session.equation().to_string()}
                    oninput={handle_input}
                />
            </div>

            <div class="controls">
                { render_framework_toggle(model, ctx) }
                { render_upload_button(model, ctx) }
                { render_convert_button(model, ctx) }
            </div>
        </section>
    }
}

fn render_framework_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    let selected = model.session.framework();

    html! {
        <div class="framework-toggle">
            { for Framework::iter().map(|framework| html! {
                <button
                    class={classes!("framework-option", (framework == selected).then_some("active"))}
                    onclick={ctx.link().callback(move |_| Msg::SetFramework(framework))}
                >
                    { framework.label() }
                </button>
            })}
        </div>
    }
}

fn render_upload_button(model: &Model, ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));
        input.set_value("");
        file.map(|file| Msg::ImageSelected(GlooFile::from(file)))
    });

    html! {
        <label class={classes!("upload-btn", model.session.is_loading().then_some("disabled"))}>
            <i class="fa-solid fa-upload"></i>
            <span>{" Upload Image"}</span>
            <input
                type="file"
                accept="image/*"
                style="display: none;"
                disabled={model.session.is_loading()}
                onchange={handle_change}
            />
        </label>
    }
}

fn render_convert_button(model: &Model, ctx: &Context<Model>) -> Html {
    let label = if model.session.is_loading() {
        "Converting...".to_string()
    } else {
        match model.session.framework() {
            Framework::Pytorch => "Convert to PyTorch".to_string(),
            Framework::Numpy => "Convert to Code".to_string(),
        }
    };

    html! {
        <button
            class="convert-btn"
            disabled={!model.session.can_convert()}
            onclick={ctx.link().callback(|_| Msg::Convert)}
        >
            {
                if model.session.is_loading() {
                    html! { <i class="fa-solid fa-spinner fa-spin"></i> }
                } else {
                    html! { <i class="fa-solid fa-wand-magic-sparkles"></i> }
                }
            }
            { format!(" {}", label) }
        </button>
    }
}
