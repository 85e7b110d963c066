mod api;
mod components;

use api::Client;
use components::handlers;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use shared::{ConversionError, ConversionResult, ConversionSession, Framework};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Input
    SetEquation(String),
    SetFramework(Framework),
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    ImageSelected(GlooFile),

    // Conversion
    Convert,
    ImageEncoded(Result<String, ConversionError>),
    ConversionSettled(Result<ConversionResult, ConversionError>),

    // Results
    ExportNotebook,
    DismissError,
}

// Main component
struct Model {
    session: ConversionSession,
    client: Rc<Client>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: ConversionSession::new(),
            client: Rc::new(api::build_client()),
            is_dragging: false,
            paste_listener: None,
        };

        match web_sys::window() {
            Some(window) => {
                let link = ctx.link().clone();
                let listener = EventListener::new(&window, "paste", move |event| {
                    if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                        link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                    }
                });
                model.paste_listener = Some(listener);
            }
            None => log::warn!("No window available, image paste disabled"),
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEquation(equation) => {
                self.session.set_equation(equation);
                true
            }
            Msg::SetFramework(framework) => {
                self.session.set_framework(framework);
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, ctx, file),

            Msg::Convert => handlers::handle_convert(self, ctx),
            Msg::ImageEncoded(payload) => handlers::handle_image_encoded(self, ctx, payload),
            Msg::ConversionSettled(outcome) => handlers::handle_conversion_settled(self, outcome),

            Msg::ExportNotebook => handlers::handle_export_notebook(self),
            Msg::DismissError => {
                self.session.dismiss_error();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header() }

                <main class="main-content">
                { components::input_section::render_input_section(self, ctx) }
                { components::utils::render_error_message(self, ctx) }
                { components::results::render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Math2Code | LaTeX to SymPy, NumPy and PyTorch"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
