//! Reading parameters: what every reading request is built from.
//!
//! [`ReadingParams`] is assembled once at startup and shared read-only by the
//! reading use cases.

use tarot_domain::{Model, PromptTemplate};

/// Static parameters for generating readings.
#[derive(Debug, Clone, Default)]
pub struct ReadingParams {
    /// Backend model every request is sent to.
    pub model: Model,
    /// Template the question and card names are substituted into.
    pub template: PromptTemplate,
}

impl ReadingParams {
    pub fn new(model: Model, template: PromptTemplate) -> Self {
        Self { model, template }
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }
}
