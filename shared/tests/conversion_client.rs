use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::{Value, json};
use shared::{
    ApiConfig, ConversionClient, ConversionError, ConversionRequest, ConversionSession, Framework,
    RawResponse, Transport,
};

/// Replies with a canned response and remembers what was posted.
struct ScriptedTransport {
    reply: Result<RawResponse, ConversionError>,
    sent: RefCell<Vec<(String, String)>>,
}

impl ScriptedTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: Err(ConversionError::Transport("connection refused".into())),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for &ScriptedTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ConversionError> {
        self.sent.borrow_mut().push((url.to_string(), body));
        self.reply.clone()
    }
}

fn sent_body(transport: &ScriptedTransport) -> Value {
    let sent = transport.sent.borrow();
    serde_json::from_str(&sent[0].1).unwrap()
}

#[test]
fn posts_to_convert_endpoint_and_maps_success() {
    let transport = ScriptedTransport::replying(
        200,
        r#"{"sympy":"x = sp.Symbol('x')","numpy":"np.zeros(3)","explanation":"* ok","complexity":"Time: O(1)."}"#,
    );
    let client = ConversionClient::new(ApiConfig::new("http://backend:9000/"), &transport);

    let request = ConversionRequest::from_text("\\sum_i x_i", Framework::Numpy);
    let result = block_on(client.submit(&request)).unwrap();

    assert_eq!(result.numerical_code, "np.zeros(3)");
    assert_eq!(transport.sent.borrow()[0].0, "http://backend:9000/convert");
    assert_eq!(
        sent_body(&transport),
        json!({ "equation": "\\sum_i x_i", "framework": "numpy" })
    );
}

#[test]
fn image_only_request_sends_placeholder_equation() {
    let transport = ScriptedTransport::replying(200, "{}");
    let client = ConversionClient::new(ApiConfig::default(), &transport);

    let request = ConversionRequest::from_image("iVBORw0KGgo=", Framework::Pytorch);
    let result = block_on(client.submit(&request)).unwrap();

    assert_eq!(result.symbolic_code, "");
    assert_eq!(
        sent_body(&transport),
        json!({ "equation": "Image Uploaded", "image_data": "iVBORw0KGgo=", "framework": "pytorch" })
    );
}

#[test]
fn backend_detail_surfaces_as_failure() {
    let transport = ScriptedTransport::replying(500, r#"{"detail":"bad equation"}"#);
    let client = ConversionClient::new(ApiConfig::default(), &transport);

    let err = block_on(client.submit(&ConversionRequest::from_text("x", Framework::Numpy)))
        .unwrap_err();

    assert_eq!(err.to_string(), "bad equation");
}

#[test]
fn unparseable_error_body_falls_back() {
    let transport = ScriptedTransport::replying(500, "Internal Server Error");
    let client = ConversionClient::new(ApiConfig::default(), &transport);

    let err = block_on(client.submit(&ConversionRequest::from_text("x", Framework::Numpy)))
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to convert equation");
}

#[test]
fn transport_failure_settles_session_with_message() {
    let transport = ScriptedTransport::unreachable();
    let client = ConversionClient::new(ApiConfig::default(), &transport);
    let mut session = ConversionSession::new();
    session.set_equation("x^2 + y^2");

    let request = session.begin_text_submission().unwrap();
    assert!(session.begin_text_submission().is_none());

    let outcome = block_on(client.submit(&request));
    assert!(session.settle(outcome));

    assert_eq!(session.error(), Some("Network error: connection refused"));
    assert_eq!(transport.sent.borrow().len(), 1);
}
