use quiz_core::model::OptionIndex;

use crate::error::FlowError;

/// Parse raw submitted form values into option indices.
///
/// Every value must be a non-negative integer; nothing is skipped or defaulted.
///
/// # Errors
///
/// Returns `FlowError::InvalidInput` naming the first value that does not parse.
pub fn parse_selection<S: AsRef<str>>(raw: &[S]) -> Result<Vec<OptionIndex>, FlowError> {
    raw.iter()
        .map(|value| {
            value
                .as_ref()
                .parse::<OptionIndex>()
                .map_err(|err| FlowError::InvalidInput {
                    value: err.raw().to_string(),
                })
        })
        .collect()
}
