use crate::error::ConversionError;
use crate::model::{ConversionRequest, ConversionResult, Framework};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Succeeded(ConversionResult),
    Failed(String),
}

/// Input and outcome of the converter view. At most one conversion is in
/// flight: every `begin_*` call is refused while [`ViewState::Loading`].
#[derive(Clone, Debug, Default)]
pub struct ConversionSession {
    equation: String,
    framework: Framework,
    state: ViewState,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn set_equation(&mut self, equation: impl Into<String>) {
        self.equation = equation.into();
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn set_framework(&mut self, framework: Framework) {
        self.framework = framework;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        match &self.state {
            ViewState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_convert(&self) -> bool {
        !self.is_loading() && !self.equation.trim().is_empty()
    }

    /// Starts a text conversion, clearing the previous outcome.
    pub fn begin_text_submission(&mut self) -> Option<ConversionRequest> {
        if !self.can_convert() {
            return None;
        }

        self.state = ViewState::Loading;
        Some(ConversionRequest::from_text(self.equation.clone(), self.framework))
    }

    /// Claims the loading slot for an image conversion; the file is read
    /// afterwards and passed to [`Self::image_request`].
    pub fn begin_image_submission(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }

        self.state = ViewState::Loading;
        true
    }

    pub fn image_request(&self, payload: String) -> ConversionRequest {
        ConversionRequest::from_image(payload, self.framework)
    }

    /// Records the outcome of the in-flight conversion. Returns `false` when
    /// nothing was in flight.
    pub fn settle(&mut self, outcome: Result<ConversionResult, ConversionError>) -> bool {
        if !self.is_loading() {
            log::warn!("Ignoring conversion outcome with no request in flight");
            return false;
        }

        self.state = match outcome {
            Ok(result) => ViewState::Succeeded(result),
            Err(e) => ViewState::Failed(e.to_string()),
        };
        true
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.state, ViewState::Failed(_)) {
            self.state = ViewState::Idle;
        }
    }
}
