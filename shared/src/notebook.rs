use serde::Serialize;

use crate::model::ConversionResult;

pub const NOTEBOOK_FILE_NAME: &str = "optimization_solver.ipynb";
pub const NOTEBOOK_MIME_TYPE: &str = "application/x-ipynb+json";

const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 4;

const TITLE: &str = "# Optimization Solver";
const SYMBOLIC_HEADER: &str = "# Symbolic formulation (SymPy)";
const NUMERICAL_HEADER: &str = "# Numerical implementation";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: serde_json::Map<String, serde_json::Value>,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: serde_json::Map<String, serde_json::Value>,
        outputs: Vec<serde_json::Value>,
        source: Vec<String>,
    },
}

impl Cell {
    fn markdown(text: &str) -> Self {
        Cell::Markdown {
            metadata: serde_json::Map::new(),
            source: source_lines(text),
        }
    }

    fn code(text: &str) -> Self {
        Cell::Code {
            execution_count: None,
            metadata: serde_json::Map::new(),
            outputs: Vec::new(),
            source: source_lines(text),
        }
    }

    pub fn source(&self) -> String {
        match self {
            Cell::Markdown { source, .. } | Cell::Code { source, .. } => source.concat(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KernelSpec {
    pub display_name: &'static str,
    pub language: &'static str,
    pub name: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LanguageInfo {
    pub name: &'static str,
}

impl Default for NotebookMetadata {
    fn default() -> Self {
        Self {
            kernelspec: KernelSpec {
                display_name: "Python 3",
                language: "python",
                name: "python3",
            },
            language_info: LanguageInfo { name: "python" },
        }
    }
}

impl Notebook {
    /// Explanation, symbolic code and numerical code, always in that order.
    pub fn from_result(result: &ConversionResult) -> Self {
        let cells = vec![
            Cell::markdown(&format!(
                "{}\n\n## Explanation\n\n{}",
                TITLE, result.explanation
            )),
            Cell::code(&format!("{}\n{}", SYMBOLIC_HEADER, result.symbolic_code)),
            Cell::code(&format!("{}\n{}", NUMERICAL_HEADER, result.numerical_code)),
        ];

        Self {
            cells,
            metadata: NotebookMetadata::default(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// nbformat stores sources as lines that keep their trailing newline.
fn source_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> ConversionResult {
        ConversionResult {
            symbolic_code: "x = sp.Symbol('x')\nexpr = x**2".into(),
            numerical_code: "import numpy as np\nx = np.linspace(0, 1)".into(),
            explanation: "* Minimizes **x squared**".into(),
            complexity_analysis: "Time: O(n).".into(),
        }
    }

    fn cell_types(value: &Value) -> Vec<&str> {
        value["cells"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["cell_type"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn cells_are_markdown_code_code() {
        let notebook = Notebook::from_result(&sample());
        let value: Value = serde_json::from_str(&notebook.to_json().unwrap()).unwrap();

        assert_eq!(cell_types(&value), vec!["markdown", "code", "code"]);
        assert_eq!(value["nbformat"], 4);
        assert_eq!(value["nbformat_minor"], 4);
        assert_eq!(value["metadata"]["kernelspec"]["name"], "python3");
    }

    #[test]
    fn empty_result_still_has_three_cells() {
        let notebook = Notebook::from_result(&ConversionResult::default());
        let value: Value = serde_json::from_str(&notebook.to_json().unwrap()).unwrap();

        assert_eq!(cell_types(&value), vec!["markdown", "code", "code"]);
        assert_eq!(notebook.cells[1].source(), "# Symbolic formulation (SymPy)\n");
    }

    #[test]
    fn code_cells_carry_headers_and_no_outputs() {
        let notebook = Notebook::from_result(&sample());

        assert!(notebook.cells[0].source().starts_with("# Optimization Solver\n\n"));
        assert!(notebook.cells[0].source().ends_with("* Minimizes **x squared**"));
        assert_eq!(
            notebook.cells[2].source(),
            "# Numerical implementation\nimport numpy as np\nx = np.linspace(0, 1)"
        );

        let value = serde_json::to_value(&notebook).unwrap();
        assert_eq!(value["cells"][1]["execution_count"], Value::Null);
        assert_eq!(value["cells"][1]["outputs"], Value::Array(vec![]));
        assert_eq!(
            value["cells"][1]["source"],
            serde_json::json!(["# Symbolic formulation (SymPy)\n", "x = sp.Symbol('x')\n", "expr = x**2"])
        );
    }
}
