pub mod client;
pub mod complexity;
pub mod error;
pub mod explanation;
pub mod model;
pub mod notebook;
pub mod session;
pub mod upload;

pub use client::{ApiConfig, ConversionClient, RawResponse, Transport};
pub use complexity::{ComplexityBlock, ComplexityCategory, classify_complexity};
pub use error::ConversionError;
pub use explanation::{ExplanationLine, Segment, format_explanation};
pub use model::{ConversionRequest, ConversionResult, Framework};
pub use notebook::Notebook;
pub use session::{ConversionSession, ViewState};
