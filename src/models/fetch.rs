//! Snapshot of an asynchronous load, as handed over by the data-fetch layer

use super::RideSummary;

/// `{loading, data, error}` triple describing where a fetch currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState<T = RideSummary> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            data: None,
            error: None,
        }
    }

    #[must_use]
    pub fn loaded(data: T) -> Self {
        Self {
            loading: false,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            loading: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// The fetched value, only once loading finished without an error
    #[must_use]
    pub fn loaded_data(&self) -> Option<&T> {
        if self.loading || self.error.is_some() {
            return None;
        }
        self.data.as_ref()
    }
}

impl FetchState<RideSummary> {
    #[must_use]
    pub fn loaded_ride(&self) -> Option<&RideSummary> {
        self.loaded_data()
    }
}
