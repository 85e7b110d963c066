use super::super::{Model, Msg};
use super::code_card::CodeCard;
use super::complexity::render_complexity;
use super::explanation::render_explanation;
use shared::{ConversionResult, ViewState};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    match model.session.state() {
        ViewState::Loading => html! {
            <div class="loading-results">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Converting..."}</p>
            </div>
        },
        ViewState::Succeeded(result) => render_result_grid(model, ctx, result),
        ViewState::Idle | ViewState::Failed(_) => html! {},
    }
}

fn render_result_grid(model: &Model, ctx: &Context<Model>, result: &ConversionResult) -> Html {
    let numerical_title = format!("{} (Numerical)", model.session.framework().label());

    html! {
        <div class="results-container">
            <div class="results-grid">
                <CodeCard
                    title="SymPy (Symbolic)"
                    content={result.symbolic_code.clone()}
                    label_class="card-label"
                />
                <CodeCard
                    title={numerical_title}
                    content={result.numerical_code.clone()}
                    label_class="card-label-cyan"
                />
            </div>

            <div class="result-card full-width">
                <div class="card-header">
                    <span class="card-label-blue">{"Explanation"}</span>
                </div>
                { render_explanation(&result.explanation) }
            </div>

            <div class="result-card full-width">
                <div class="card-header">
                    <span class="card-label-orange">{"Complexity Analysis"}</span>
                </div>
                { render_complexity(&result.complexity_analysis) }
            </div>

            <div class="button-container">
                <button
                    class="export-btn"
                    onclick={ctx.link().callback(|_| Msg::ExportNotebook)}
                >
                    <i class="fa-solid fa-download"></i>{" Export Notebook"}
                </button>
            </div>
        </div>
    }
}
