use services::QuestionView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub input_id: String,
}

/// UI-ready question: heading, choices and the input kind to render them with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub is_multiple: bool,
    pub input_kind: &'static str,
    pub hint: &'static str,
}

impl From<&QuestionView> for QuestionVm {
    fn from(view: &QuestionView) -> Self {
        let options = view
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| OptionVm {
                index,
                label: label.clone(),
                input_id: format!("answer-{index}"),
            })
            .collect();
        let (input_kind, hint) = if view.is_multiple {
            ("checkbox", "Select all that apply.")
        } else {
            ("radio", "Select one answer.")
        };

        Self {
            heading: format!("Question {} of {}", view.number, view.progress.total),
            text: view.text.clone(),
            options,
            is_multiple: view.is_multiple,
            input_kind,
            hint,
        }
    }
}

/// Next selection after the user clicks `index`.
///
/// Checkboxes toggle membership; radios replace the selection.
#[must_use]
pub fn toggle_selection(current: &[usize], index: usize, is_multiple: bool) -> Vec<usize> {
    if !is_multiple {
        return vec![index];
    }
    if current.contains(&index) {
        current.iter().copied().filter(|i| *i != index).collect()
    } else {
        let mut next = current.to_vec();
        next.push(index);
        next.sort_unstable();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{OptionIndex, Question, QuestionIndex};

    fn view(multiple: bool) -> QuestionView {
        let correct = if multiple {
            vec![OptionIndex::new(0), OptionIndex::new(2)]
        } else {
            vec![OptionIndex::new(1)]
        };
        let question =
            Question::new("Pick", vec!["a".into(), "b".into(), "c".into()], correct).unwrap();
        QuestionView::from_question(QuestionIndex::new(1), &question, 4)
    }

    #[test]
    fn maps_heading_and_input_kind() {
        let vm = QuestionVm::from(&view(false));
        assert_eq!(vm.heading, "Question 2 of 4");
        assert_eq!(vm.input_kind, "radio");
        assert_eq!(vm.options.len(), 3);
        assert_eq!(vm.options[2].input_id, "answer-2");

        let vm = QuestionVm::from(&view(true));
        assert_eq!(vm.input_kind, "checkbox");
        assert!(vm.is_multiple);
    }

    #[test]
    fn radio_selection_replaces() {
        assert_eq!(toggle_selection(&[0], 2, false), vec![2]);
        assert_eq!(toggle_selection(&[], 1, false), vec![1]);
    }

    #[test]
    fn checkbox_selection_toggles() {
        let once = toggle_selection(&[], 2, true);
        let twice = toggle_selection(&once, 0, true);
        assert_eq!(twice, vec![0, 2]);
        assert_eq!(toggle_selection(&twice, 2, true), vec![0]);
    }
}
