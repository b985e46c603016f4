use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::budget::{derive_summary, order_lines, PricingRule};
use crate::catalog::Catalog;
use crate::error::{MessError, Result};
use crate::models::{BudgetInputs, BudgetSummary, OrderLine};
use crate::selection::SelectionStore;

/// Rolled-up totals included with a submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSummary {
    pub total_items: usize,
    pub total_price: f64,
    pub selected_item_ids: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionMetadata {
    pub submitted_by: Option<String>,
    pub pricing_rule: PricingRule,
}

/// The JSON body handed to the submission endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub selections: Vec<OrderLine>,
    pub summary: SubmissionSummary,
    pub budget_info: BudgetSummary,
    pub metadata: SubmissionMetadata,
}

/// Assemble the submission payload from the current state.
pub fn build_payload(
    store: &SelectionStore,
    catalog: &Catalog,
    inputs: &BudgetInputs,
    rule: PricingRule,
    submitted_by: Option<String>,
) -> SubmissionPayload {
    let selections = order_lines(store, catalog, rule);
    let budget_info = derive_summary(inputs, store, catalog, rule);

    SubmissionPayload {
        summary: SubmissionSummary {
            total_items: selections.len(),
            total_price: budget_info.total_selection_price,
            selected_item_ids: store.selected_ids(),
        },
        selections,
        budget_info,
        metadata: SubmissionMetadata {
            submitted_by,
            pricing_rule: rule,
        },
    }
}

/// Where completed orders go. The real backend is a POST endpoint; here it is
/// a seam so the CLI can write a file and tests can inject failures.
pub trait SubmissionEndpoint {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()>;
}

/// File-writing endpoint used by the CLI.
pub struct JsonFileEndpoint {
    path: PathBuf,
}

impl JsonFileEndpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SubmissionEndpoint for JsonFileEndpoint {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Where the ordering session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    Error,
}

/// Drives the Idle -> Editing -> Submitting -> Idle|Error lifecycle and holds
/// the single-flight submission token.
///
/// Every attempt takes a fresh monotonic token; a second submit while one is
/// in flight is rejected outright rather than relying on a disabled control.
/// A failed submission is recoverable: the selection is untouched and the
/// error message is kept for display until the next attempt.
#[derive(Debug, Default)]
pub struct OrderSession {
    phase: OrderPhase,
    submit_token: u64,
    last_error: Option<String>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &OrderPhase {
        &self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Mark the session dirty. Called on the first toggle or slot change.
    pub fn mark_editing(&mut self) {
        if self.phase != OrderPhase::Submitting {
            self.phase = OrderPhase::Editing;
        }
    }

    /// Submit the current selection through the endpoint.
    ///
    /// On success the store's snapshot is rebased (`commit`) and the phase
    /// returns to Idle. On failure the store is left untouched, the phase
    /// moves to Error, and the error is surfaced as a message for retry.
    pub fn submit(
        &mut self,
        endpoint: &mut dyn SubmissionEndpoint,
        store: &mut SelectionStore,
        payload: &SubmissionPayload,
    ) -> Result<()> {
        if self.phase == OrderPhase::Submitting {
            return Err(MessError::SubmitInProgress);
        }

        self.submit_token += 1;
        let token = self.submit_token;
        self.phase = OrderPhase::Submitting;

        let outcome = endpoint.submit(payload);

        // A stale attempt must not clobber a newer one's state.
        if token != self.submit_token {
            return outcome;
        }

        match outcome {
            Ok(()) => {
                store.commit();
                self.phase = OrderPhase::Idle;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.phase = OrderPhase::Error;
                let msg = e.to_string();
                self.last_error = Some(msg.clone());
                Err(MessError::SubmissionFailed(msg))
            }
        }
    }
}
