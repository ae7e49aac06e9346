//! Display state of a view after a fetch.
//!
//! Every fetch outcome lands in one of these states, so a failed request
//! shows an error marker instead of leaving earlier data on screen.

use serde::{Deserialize, Serialize};

use super::error::ServiceResult;

/// Data that can be "present but empty", which renders as a no-data state.
pub trait ViewData {
    fn has_data(&self) -> bool;
}

impl<T> ViewData for Vec<T> {
    fn has_data(&self) -> bool {
        !self.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Ready { data: T },
    Empty,
    Error { kind: String, message: String },
}

impl<T: ViewData> ViewState<T> {
    /// Map a service outcome to a display state.
    pub fn from_result(result: ServiceResult<T>) -> Self {
        match result {
            Ok(data) if data.has_data() => ViewState::Ready { data },
            Ok(_) => ViewState::Empty,
            Err(err) => ViewState::Error {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready { data } => Some(data),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }
}
