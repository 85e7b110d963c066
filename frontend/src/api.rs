use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_data_url;
use gloo_net::http::Request;
use shared::upload::payload_from_data_url;
use shared::{ApiConfig, ConversionClient, ConversionError, RawResponse, Transport};

pub type Client = ConversionClient<GlooTransport>;

/// Backend override baked in at build time; a wasm bundle has no runtime environment.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("MATH2CODE_API_URL"))
}

pub fn build_client() -> Client {
    let config = api_config();
    log::info!("Conversion backend: {}", config.base_url);
    ConversionClient::new(config, GlooTransport)
}

pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ConversionError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ConversionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ConversionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Failed to read response body ({}): {}", status, e);
                String::new()
            }
        };

        Ok(RawResponse { status, body })
    }
}

/// Reads an image file and returns its base64 payload without the `data:` prefix.
pub async fn encode_image(file: &GlooFile) -> Result<String, ConversionError> {
    let data_url = read_as_data_url(file)
        .await
        .map_err(|e| ConversionError::FileRead(e.to_string()))?;

    Ok(payload_from_data_url(&data_url))
}
