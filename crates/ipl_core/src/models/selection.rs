use serde::{Deserialize, Serialize};

/// Label the selection widgets use for "no filtering on this dimension".
pub const WILDCARD_LABEL: &str = "All";

/// A season or team selection.
///
/// The wildcard is its own variant so a season or team that happens to be called "All"
/// can never be mistaken for it once inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Wildcard,
    /// Selected names in the order the user picked them.
    Specific(Vec<String>),
}

impl Selection {
    pub fn specific<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Specific(values.into_iter().map(Into::into).collect())
    }

    /// Build a selection from raw widget values, where [`WILDCARD_LABEL`] anywhere in the
    /// list selects everything.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|v| v == WILDCARD_LABEL) {
            Selection::Wildcard
        } else {
            Selection::Specific(values)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Selection::Wildcard)
    }

    /// A specific selection with nothing picked behaves like no selection at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Specific(values) if values.is_empty())
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::Wildcard => true,
            Selection::Specific(values) => values.iter().any(|v| v == value),
        }
    }
}
