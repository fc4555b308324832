use web_sys::{File, FormData};

use super::error::ApiError;
use super::identity::ClientIdentity;
use super::models::{
    parse_access_response, parse_analysis_response, parse_checkout_response,
    parse_quick_clause_response, AccessStatus, AnalysisData, CheckoutRequest, QuickClauseRequest,
    QuickClauseResult,
};
use crate::utils::api::{with_user_id, Api};

pub const ANALYZE_PATH: &str = "/api/lease/analyze";
pub const QUICK_ANALYZE_PATH: &str = "/api/lease/clause/quick-analyze";
pub const CHECKOUT_PATH: &str = "/api/checkout";
pub const CHECK_ACCESS_PATH: &str = "/api/billing/check-access";

/// Calls this site makes to the lease backend.
///
/// `Document` is whatever the platform hands us for an uploaded file.
#[allow(async_fn_in_trait)]
pub trait LeaseApi {
    type Document;

    async fn analyze_document(
        &self,
        user_id: &ClientIdentity,
        document: &Self::Document,
    ) -> Result<AnalysisData, ApiError>;

    async fn quick_analyze(&self, clause_text: &str) -> Result<QuickClauseResult, ApiError>;

    /// Returns the URL of the hosted checkout page.
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<String, ApiError>;

    async fn check_access(&self, user_id: &ClientIdentity) -> Result<AccessStatus, ApiError>;
}

/// Browser implementation over `fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpLeaseApi;

impl LeaseApi for HttpLeaseApi {
    type Document = File;

    async fn analyze_document(
        &self,
        user_id: &ClientIdentity,
        document: &File,
    ) -> Result<AnalysisData, ApiError> {
        let form = FormData::new().map_err(ApiError::from_js)?;
        form.append_with_blob_and_filename("file", document, &document.name())
            .map_err(ApiError::from_js)?;
        let response = Api::post(&with_user_id(ANALYZE_PATH, user_id.as_str()))
            .body(form)
            .send()
            .await?;
        parse_analysis_response(response.status, &response.body)
    }

    async fn quick_analyze(&self, clause_text: &str) -> Result<QuickClauseResult, ApiError> {
        let response = Api::post(QUICK_ANALYZE_PATH)
            .json(&QuickClauseRequest { clause_text })?
            .send()
            .await?;
        parse_quick_clause_response(response.status, &response.body)
    }

    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<String, ApiError> {
        let response = Api::post(CHECKOUT_PATH).json(request)?.send().await?;
        parse_checkout_response(response.status, &response.body)
    }

    async fn check_access(&self, user_id: &ClientIdentity) -> Result<AccessStatus, ApiError> {
        let response = Api::get(&with_user_id(CHECK_ACCESS_PATH, user_id.as_str()))
            .header("Accept", "application/json")
            .send()
            .await?;
        parse_access_response(response.status, &response.body)
    }
}
