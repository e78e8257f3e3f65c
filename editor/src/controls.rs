//! In-flight guards for controls that trigger collaborator requests.
//!
//! A control is disabled from `begin` until `finish`. A second `begin` while
//! the first request is outstanding is refused rather than raced; there is no
//! cancellation.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use serde::Serialize;

use crate::error::ValidationError;

/// A UI control whose action suspends on a collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    TemplateUpload,
    DataUpload,
    Preview,
    Download,
}

impl Control {
    pub const ALL: [Control; 4] = [Self::TemplateUpload, Self::DataUpload, Self::Preview, Self::Download];

    fn bit(self) -> u8 {
        match self {
            Self::TemplateUpload => 1,
            Self::DataUpload => 1 << 1,
            Self::Preview => 1 << 2,
            Self::Download => 1 << 3,
        }
    }
}

/// Set of controls with a request in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    busy: u8,
}

impl Controls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `control` busy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Busy`] if it is already in flight.
    pub fn begin(&mut self, control: Control) -> Result<(), ValidationError> {
        if self.is_busy(control) {
            return Err(ValidationError::Busy(control));
        }
        self.busy |= control.bit();
        Ok(())
    }

    /// Mark `control` idle again. Idempotent.
    pub fn finish(&mut self, control: Control) {
        self.busy &= !control.bit();
    }

    #[must_use]
    pub fn is_busy(&self, control: Control) -> bool {
        self.busy & control.bit() != 0
    }
}
