use super::super::{Model, Msg};
use super::utils::download_text;
use crate::api::{Client, encode_image};
use gloo_file::File as GlooFile;
use shared::notebook::{NOTEBOOK_FILE_NAME, NOTEBOOK_MIME_TYPE};
use shared::upload::is_image_type;
use shared::{ConversionError, ConversionRequest, ConversionResult, Notebook};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_convert(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.session.begin_text_submission() {
        Some(request) => {
            send_conversion_request(ctx, Rc::clone(&model.client), request);
            true
        }
        None => false,
    }
}

pub fn handle_image_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if !model.session.begin_image_submission() {
        log::warn!("Conversion already in progress, ignoring {}", file.name());
        return false;
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        let payload = encode_image(&file).await;
        link.send_message(Msg::ImageEncoded(payload));
    });

    true
}

pub fn handle_image_encoded(
    model: &mut Model,
    ctx: &Context<Model>,
    payload: Result<String, ConversionError>,
) -> bool {
    match payload {
        Ok(payload) => {
            let request = model.session.image_request(payload);
            send_conversion_request(ctx, Rc::clone(&model.client), request);
            false
        }
        Err(e) => handle_conversion_settled(model, Err(e)),
    }
}

pub fn handle_conversion_settled(
    model: &mut Model,
    outcome: Result<ConversionResult, ConversionError>,
) -> bool {
    if let Err(e) = &outcome {
        log::error!("Conversion failed: {}", e);
    }
    model.session.settle(outcome)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image(&file_list))
    {
        ctx.link().send_message(Msg::ImageSelected(file));
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let image = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image(&file_list));

    // Text pastes fall through to the textarea.
    if let Some(file) = image {
        event.prevent_default();
        ctx.link().send_message(Msg::ImageSelected(file));
    }
    false
}

pub fn handle_export_notebook(model: &mut Model) -> bool {
    let Some(result) = model.session.result() else {
        return false;
    };

    match Notebook::from_result(result).to_json() {
        Ok(json) => {
            if let Err(e) = download_text(NOTEBOOK_FILE_NAME, NOTEBOOK_MIME_TYPE, &json) {
                log::warn!("Notebook download failed: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to serialize notebook: {}", e),
    }

    false
}

fn first_image(file_list: &FileList) -> Option<GlooFile> {
    let file = file_list.item(0)?;
    if is_image_type(&file.type_()) {
        Some(GlooFile::from(file))
    } else {
        log::warn!("Skipping non-image file: {}", file.name());
        None
    }
}

pub fn send_conversion_request(ctx: &Context<Model>, client: Rc<Client>, request: ConversionRequest) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = client.submit(&request).await;
            link.send_message(Msg::ConversionSettled(outcome));
        }
    });
}
