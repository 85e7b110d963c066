use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter};

/// Equation sent in place of an empty text field when only an image is provided.
pub const IMAGE_PLACEHOLDER: &str = "Image Uploaded";

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Framework {
    #[default]
    Numpy,
    Pytorch,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Numpy => "NumPy",
            Framework::Pytorch => "PyTorch",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversionRequest {
    pub equation_text: String,
    pub image_payload: Option<String>,
    pub framework: Framework,
}

impl ConversionRequest {
    pub fn from_text(equation_text: impl Into<String>, framework: Framework) -> Self {
        Self {
            equation_text: equation_text.into(),
            image_payload: None,
            framework,
        }
    }

    pub fn from_image(image_payload: impl Into<String>, framework: Framework) -> Self {
        Self {
            equation_text: String::new(),
            image_payload: Some(image_payload.into()),
            framework,
        }
    }

    /// Serialized `POST /convert` body. The body holds only strings and a
    /// unit enum, so encoding cannot fail.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_body()).expect("convert body serializes")
    }

    pub fn to_body(&self) -> ConvertBody<'_> {
        let equation = if self.equation_text.is_empty() {
            IMAGE_PLACEHOLDER
        } else {
            self.equation_text.as_str()
        };

        ConvertBody {
            equation,
            image_data: self.image_payload.as_deref(),
            framework: self.framework,
        }
    }
}

/// JSON body of `POST /convert`.
#[derive(Serialize, Debug, PartialEq)]
pub struct ConvertBody<'a> {
    pub equation: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<&'a str>,
    pub framework: Framework,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConversionResult {
    #[serde(rename = "sympy", default, deserialize_with = "nullable_string")]
    pub symbolic_code: String,
    #[serde(rename = "numpy", default, deserialize_with = "nullable_string")]
    pub numerical_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub explanation: String,
    #[serde(rename = "complexity", default, deserialize_with = "nullable_string")]
    pub complexity_analysis: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
