//! Text rendering of classification results and formula diagrams

use crate::classification::coefficient::Coefficient;
use crate::classification::distance::Formula;
use crate::classification::engine::{ClassificationReport, Outcome};
use crate::classification::selection::Score;
use crate::io::configuration::{BANNER_RULE, SCORE_PRECISION};
use crate::io::loader::LoadedCatalog;
use crate::model::standard::Standard;

const SQUARE_ROOT_DIAGRAM: &str = concat!(
    "                      /-------------\n",
    "                _    /n             2\n",
    "   L(Si, Xj) =   \\  / Σ (Sik - Xjk)\n",
    "                  \\/ k=1",
);

const MODULE_DIAGRAM: &str = concat!(
    "               n\n",
    "   L(Si, Xj) = Σ |(Sik - Xjk)|\n",
    "               k=1",
);

const COEFFICIENT_DIAGRAM: &str = concat!(
    "                      /-------------\n",
    "                _    /n             2\n",
    "   L(Si, Xj) =   \\  / Σ Ŋk(Sik - Xjk)\n",
    "                  \\/ k=1",
);

const MODULE_AND_FRACTION_DIAGRAM: &str = concat!(
    "               n   |Sik - Xjk|\n",
    "   L(Si, Xj) = Σ   ———————————\n",
    "               k=1 |Sik + Xjk|",
);

const ARCCOS_DIAGRAM: &str = concat!(
    "                      n\n",
    "   L(Si, Xj) = arccos(Σ Sik×Xjk / |Si|×|Xj|)\n",
    "                      k=1",
);

/// ASCII diagram of a distance formula
pub const fn formula_diagram(formula: Formula) -> &'static str {
    match formula {
        Formula::SquareRoot => SQUARE_ROOT_DIAGRAM,
        Formula::Module => MODULE_DIAGRAM,
        Formula::Coefficient => COEFFICIENT_DIAGRAM,
        Formula::ModuleAndFraction => MODULE_AND_FRACTION_DIAGRAM,
        Formula::ArcCos => ARCCOS_DIAGRAM,
    }
}

/// Comma-separated list of labels in brackets
pub fn render_labels(labels: &[Standard]) -> String {
    let names: Vec<String> = labels.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}

/// Which standards and weights were loaded
pub fn render_catalog_summary(loaded: &LoadedCatalog) -> String {
    format!(
        "Standards loaded: {}\nMetadata loaded: {}",
        render_labels(&loaded.catalog.labels()),
        render_labels(&loaded.catalog.metadata_labels())
    )
}

/// Warnings about standards and weights that could not be loaded
///
/// Missing weights only matter to the weighted formula, so they are listed
/// only when `weights_required` is set.
pub fn render_load_warnings(loaded: &LoadedCatalog, weights_required: bool) -> Vec<String> {
    if loaded.catalog.is_empty() {
        return vec!["No standards loaded, nothing to classify against".to_string()];
    }

    let mut warnings = Vec::new();
    if !loaded.skipped_standards.is_empty() {
        warnings.push(format!(
            "Standards not found: {}",
            render_labels(&loaded.skipped_standards)
        ));
    }
    if weights_required {
        let labels = loaded.catalog.labels();
        warnings.extend(
            loaded
                .skipped_metadata
                .iter()
                .filter(|standard| labels.contains(standard))
                .map(|standard| format!("No weights loaded for standard {standard}")),
        );
    }
    warnings
}

/// One line per standard with its score
pub fn render_scores(scores: &[Score]) -> String {
    scores
        .iter()
        .map(|score| {
            format!(
                "   {}: {:.precision$}\n",
                score.standard,
                score.value,
                precision = SCORE_PRECISION
            )
        })
        .collect()
}

/// Banner naming the formula and its winning standard
pub fn render_result(outcome: &Outcome<Formula>, show_scores: bool) -> String {
    let mut text = format!(
        "{BANNER_RULE}\nUsed formula: {}\n{}\n",
        outcome.kind,
        formula_diagram(outcome.kind)
    );
    if show_scores {
        text.push_str(&render_scores(&outcome.scores));
    }
    text.push_str(&format!(
        "\n----> Your character is {} <----\n{BANNER_RULE}\n",
        outcome.winner
    ));
    text
}

/// Banner listing the winner of every coefficient
pub fn render_coefficient_results(outcomes: &[Outcome<Coefficient>], show_scores: bool) -> String {
    let names: Vec<&str> = outcomes.iter().map(|outcome| outcome.kind.name()).collect();
    let winners: Vec<Standard> = outcomes.iter().map(|outcome| outcome.winner).collect();

    let mut text = format!("{BANNER_RULE}\nUsed formulas: {}\n", names.join(", "));
    if show_scores {
        for outcome in outcomes {
            text.push_str(&format!("{}:\n", outcome.kind));
            text.push_str(&render_scores(&outcome.scores));
        }
    }
    text.push_str(&format!(
        "\n----> Results by formulas {} <----\n{BANNER_RULE}\n",
        render_labels(&winners)
    ));
    text
}

/// Full report for one input file
pub fn render_report(name: &str, report: &ClassificationReport, show_scores: bool) -> String {
    let mut text = format!("Input: {name}\n");
    for outcome in &report.formulas {
        text.push_str(&render_result(outcome, show_scores));
    }
    if !report.coefficients.is_empty() {
        text.push_str(&render_coefficient_results(
            &report.coefficients,
            show_scores,
        ));
    }
    text
}
