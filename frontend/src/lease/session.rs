use std::cell::RefCell;
use std::rc::Rc;

use super::entitlement::{self, Gate};
use super::error::{ApiError, StartError, ValidationError};
use super::flow::{Flow, Ticket};
use super::identity::ClientIdentity;
use super::models::{AnalysisData, CheckoutRequest, QuickClauseResult};
use crate::config::QUICK_CLAUSE_MAX_CHARS;

pub const QUICK_CLAUSE_FAILED: &str = "Failed to analyze clause. Please try again.";
pub const CHECKOUT_FAILED: &str = "Failed to create checkout";

/// All client state of one page session.
///
/// The identity is read-only after bootstrap. The three flows are independent;
/// entitlement is derived from the analysis flow's latest result.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaseSession {
    identity: ClientIdentity,
    analysis: Flow<AnalysisData>,
    quick_clause: Flow<QuickClauseResult>,
    checkout: Flow<String>,
}

pub type SharedSession = Rc<RefCell<LeaseSession>>;

/// A started document analysis, carrying everything the request needs.
pub struct PendingAnalysis<D> {
    pub ticket: Ticket,
    pub user_id: ClientIdentity,
    pub document: D,
}

pub fn validate_clause_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyClause);
    }
    if text.chars().count() > QUICK_CLAUSE_MAX_CHARS {
        return Err(ValidationError::ClauseTooLong);
    }
    Ok(())
}

impl LeaseSession {
    pub fn new(identity: ClientIdentity) -> Self {
        Self {
            identity,
            analysis: Flow::default(),
            quick_clause: Flow::default(),
            checkout: Flow::default(),
        }
    }

    pub fn shared(identity: ClientIdentity) -> SharedSession {
        Rc::new(RefCell::new(Self::new(identity)))
    }

    pub fn analysis(&self) -> &Flow<AnalysisData> {
        &self.analysis
    }

    pub fn quick_clause(&self) -> &Flow<QuickClauseResult> {
        &self.quick_clause
    }

    pub fn checkout(&self) -> &Flow<String> {
        &self.checkout
    }

    pub fn analysis_id(&self) -> Option<&str> {
        self.analysis
            .result()
            .and_then(|data| data.analysis_id.as_deref())
    }

    /// Entitlement as last disclosed by the analysis service; false until then.
    pub fn has_full_access(&self) -> bool {
        self.analysis
            .result()
            .map_or(false, |data| data.has_full_access)
    }

    pub fn gate(&self) -> Gate<'_> {
        entitlement::gate(self.analysis.result())
    }

    pub fn start_analysis<D>(&mut self, document: Option<D>) -> Result<PendingAnalysis<D>, StartError> {
        if self.analysis.is_busy() {
            return Err(StartError::Busy);
        }
        let Some(document) = document else {
            return Err(self.analysis.reject(ValidationError::MissingDocument));
        };
        let identity_check = if self.identity.is_empty() {
            Err(ValidationError::MissingIdentity)
        } else {
            Ok(())
        };
        let ticket = self.analysis.start(identity_check)?;
        Ok(PendingAnalysis {
            ticket,
            user_id: self.identity.clone(),
            document,
        })
    }

    pub fn finish_analysis(&mut self, ticket: Ticket, outcome: Result<AnalysisData, ApiError>) {
        let outcome = outcome.map_err(|e| {
            log::warn!("Lease analysis failed: {}", e);
            e.to_string()
        });
        if !self.analysis.complete(ticket, outcome) {
            log::debug!("Dropped stale lease analysis response");
        }
    }

    pub fn start_quick_clause(&mut self, text: &str) -> Result<Ticket, StartError> {
        self.quick_clause.start(validate_clause_text(text))
    }

    pub fn finish_quick_clause(&mut self, ticket: Ticket, outcome: Result<QuickClauseResult, ApiError>) {
        let outcome = outcome.map_err(|e| {
            log::warn!("Quick clause analysis failed: {}", e);
            QUICK_CLAUSE_FAILED.to_string()
        });
        if !self.quick_clause.complete(ticket, outcome) {
            log::debug!("Dropped stale quick clause response");
        }
    }

    pub fn start_checkout(&mut self, email: &str) -> Result<(Ticket, CheckoutRequest), StartError> {
        let email = email.trim();
        let validation = if self.identity.is_empty() {
            Err(ValidationError::MissingIdentity)
        } else if email.is_empty() {
            Err(ValidationError::MissingEmail)
        } else {
            Ok(())
        };
        let ticket = self.checkout.start(validation)?;
        let request = CheckoutRequest {
            email: email.to_string(),
            user_id: self.identity.as_str().to_string(),
        };
        Ok((ticket, request))
    }

    /// Returns the URL to navigate to when the checkout session was created.
    pub fn finish_checkout(&mut self, ticket: Ticket, outcome: Result<String, ApiError>) -> Option<String> {
        let redirect = outcome.as_ref().ok().cloned();
        let outcome = outcome.map_err(|e| {
            log::warn!("Checkout session failed: {}", e);
            match e {
                ApiError::Rejected(message) => message,
                _ => CHECKOUT_FAILED.to_string(),
            }
        });
        if !self.checkout.complete(ticket, outcome) {
            return None;
        }
        redirect
    }

    pub fn checkout_redirect_failed(&mut self, message: impl Into<String>) {
        self.checkout.set_error(message);
    }
}
