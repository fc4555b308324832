use super::models::{AnalysisData, ClauseFinding};

/// What the analysis panel shows, derived only from the latest analysis.
///
/// Purely presentational: it mirrors what the service disclosed and grants nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate<'a> {
    UploadOnly,
    Preview {
        clauses: &'a [ClauseFinding],
        locked: u32,
    },
    Full {
        clauses: &'a [ClauseFinding],
    },
}

pub fn gate(latest: Option<&AnalysisData>) -> Gate<'_> {
    let Some(data) = latest else {
        return Gate::UploadOnly;
    };
    if data.has_full_access {
        return Gate::Full {
            clauses: &data.clauses,
        };
    }
    let shown = (data.shown_clauses as usize).min(data.clauses.len());
    Gate::Preview {
        clauses: &data.clauses[..shown],
        locked: locked_clauses(data),
    }
}

pub fn locked_clauses(data: &AnalysisData) -> u32 {
    data.total_clauses.saturating_sub(data.shown_clauses)
}

pub fn locked_label(locked: u32) -> Option<String> {
    match locked {
        0 => None,
        1 => Some("1 more clause locked".to_string()),
        n => Some(format!("{} more clauses locked", n)),
    }
}

/// Call to action on the pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingCta {
    /// Already entitled, nothing to buy.
    HasFullAccess,
    /// No analysis yet.
    GetStarted,
    /// A preview exists and can be unlocked.
    Unlock,
}

pub fn pricing_cta(has_full_access: bool, analysis_id: Option<&str>) -> PricingCta {
    match (has_full_access, analysis_id) {
        (true, _) => PricingCta::HasFullAccess,
        (false, None) => PricingCta::GetStarted,
        (false, Some(_)) => PricingCta::Unlock,
    }
}
