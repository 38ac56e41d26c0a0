use services::ResultsView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub number: usize,
    pub selected: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: String,
    pub max_possible: String,
    pub percentage: String,
    pub answered: String,
    pub answers: Vec<AnswerRowVm>,
}

/// Render a score without a trailing `.0`, keeping its sign.
#[must_use]
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

impl From<&ResultsView> for ResultsVm {
    fn from(view: &ResultsView) -> Self {
        let answers = view
            .answers
            .iter()
            .map(|(question, selected)| AnswerRowVm {
                number: question.number(),
                selected: if selected.is_empty() {
                    "no answer".to_string()
                } else {
                    selected
                        .iter()
                        .map(|o| (o.value() + 1).to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            })
            .collect();

        Self {
            score: format_score(view.score),
            max_possible: format_score(view.max_possible),
            percentage: format!("{:.1}%", view.percentage),
            answered: format!("{} of {}", view.progress.answered, view.progress.total),
            answers,
        }
    }
}
