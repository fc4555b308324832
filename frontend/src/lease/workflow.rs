//! Request drivers for the three user-triggered flows.
//!
//! Each `submit_*` validates and marks its flow busy synchronously, before
//! returning. Only the returned future touches the network, so a handler that
//! calls `submit_*` twice in a row can never send two requests.

use std::future::Future;
use std::rc::Rc;

use super::client::LeaseApi;
use super::error::StartError;
use super::session::SharedSession;

pub fn submit_analysis<A>(
    api: Rc<A>,
    session: SharedSession,
    document: Option<A::Document>,
) -> Result<impl Future<Output = ()>, StartError>
where
    A: LeaseApi + 'static,
    A::Document: 'static,
{
    let pending = session.borrow_mut().start_analysis(document)?;
    Ok(async move {
        let outcome = api
            .analyze_document(&pending.user_id, &pending.document)
            .await;
        session.borrow_mut().finish_analysis(pending.ticket, outcome);
    })
}

pub fn submit_quick_clause<A>(
    api: Rc<A>,
    session: SharedSession,
    clause_text: String,
) -> Result<impl Future<Output = ()>, StartError>
where
    A: LeaseApi + 'static,
{
    let ticket = session.borrow_mut().start_quick_clause(&clause_text)?;
    Ok(async move {
        let outcome = api.quick_analyze(&clause_text).await;
        session.borrow_mut().finish_quick_clause(ticket, outcome);
    })
}

/// Resolves to the hosted checkout URL when the backend created a session.
pub fn submit_checkout<A>(
    api: Rc<A>,
    session: SharedSession,
    email: &str,
) -> Result<impl Future<Output = Option<String>>, StartError>
where
    A: LeaseApi + 'static,
{
    let (ticket, request) = session.borrow_mut().start_checkout(email)?;
    Ok(async move {
        let outcome = api.create_checkout(&request).await;
        session.borrow_mut().finish_checkout(ticket, outcome)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::Value;

    use super::*;
    use crate::config::USER_ID_STORAGE_KEY;
    use crate::lease::entitlement::{locked_label, Gate};
    use crate::lease::error::{ApiError, ValidationError};
    use crate::lease::identity::testing::MemoryStorage;
    use crate::lease::identity::{bootstrap_identity, ClientIdentity};
    use crate::lease::models::{
        AccessStatus, AnalysisData, CheckoutRequest, ClauseFinding, QuickClauseResult, RiskLevel,
    };
    use crate::lease::session::{LeaseSession, CHECKOUT_FAILED, QUICK_CLAUSE_FAILED};

    type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

    /// Records every call and answers from queued channels, so tests decide
    /// when each response arrives.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        analysis_replies: RefCell<VecDeque<Reply<AnalysisData>>>,
        quick_replies: RefCell<VecDeque<Reply<QuickClauseResult>>>,
        checkout_replies: RefCell<VecDeque<Reply<String>>>,
    }

    impl FakeApi {
        fn calls(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }
    }

    async fn answer<T>(queue: &RefCell<VecDeque<Reply<T>>>) -> Result<T, ApiError> {
        let reply = queue.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("dropped".to_string()))),
            None => Err(ApiError::Transport("no reply queued".to_string())),
        }
    }

    impl LeaseApi for FakeApi {
        type Document = String;

        async fn analyze_document(
            &self,
            user_id: &ClientIdentity,
            document: &String,
        ) -> Result<AnalysisData, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("analyze {} {}", user_id, document));
            answer(&self.analysis_replies).await
        }

        async fn quick_analyze(&self, clause_text: &str) -> Result<QuickClauseResult, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("quick {}", clause_text.chars().count()));
            answer(&self.quick_replies).await
        }

        async fn create_checkout(&self, request: &CheckoutRequest) -> Result<String, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("checkout {} {}", request.email, request.user_id));
            answer(&self.checkout_replies).await
        }

        async fn check_access(&self, _user_id: &ClientIdentity) -> Result<AccessStatus, ApiError> {
            Err(ApiError::Status(404))
        }
    }

    fn queue<T>(slot: &RefCell<VecDeque<Reply<T>>>) -> oneshot::Sender<Result<T, ApiError>> {
        let (tx, rx) = oneshot::channel();
        slot.borrow_mut().push_back(rx);
        tx
    }

    fn ready<T>(slot: &RefCell<VecDeque<Reply<T>>>, value: Result<T, ApiError>) {
        let _ = queue(slot).send(value);
    }

    fn session() -> SharedSession {
        let identity = bootstrap_identity(Ok(MemoryStorage::with(USER_ID_STORAGE_KEY, "user-1")));
        LeaseSession::shared(identity)
    }

    fn preview(total: u32, shown: u32) -> AnalysisData {
        AnalysisData {
            analysis_id: Some("an_42".to_string()),
            has_full_access: false,
            key_info: Value::Null,
            clauses: (1..=shown)
                .map(|n| ClauseFinding {
                    clause_number: n,
                    clause_text: format!("Clause {}", n),
                    risk_level: Some(RiskLevel::Caution),
                    analysis: "Check this.".to_string(),
                    suggestion: "Negotiate.".to_string(),
                })
                .collect(),
            total_clauses: total,
            shown_clauses: shown,
            page_count: Some(6),
            processing_time: Some(3.1),
        }
    }

    fn quick_result() -> QuickClauseResult {
        QuickClauseResult {
            risk_level: RiskLevel::Danger,
            analysis: "Five days is far below typical notice.".to_string(),
            suggestion: "Ask for 30 days.".to_string(),
        }
    }

    #[test]
    fn analysis_without_file_makes_no_call() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        let err = submit_analysis(api.clone(), session.clone(), None).err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::MissingDocument)));
        assert_eq!(api.calls("analyze"), 0);
        assert_eq!(
            session.borrow().analysis().error(),
            Some("Please select a file first")
        );
        assert!(!session.borrow().analysis().is_busy());
    }

    #[test]
    fn analysis_without_identity_makes_no_call() {
        let api = Rc::new(FakeApi::default());
        let session = LeaseSession::shared(ClientIdentity::default());
        let err = submit_analysis(api.clone(), session.clone(), Some("lease.pdf".to_string())).err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::MissingIdentity)));
        assert_eq!(api.calls("analyze"), 0);
        assert_eq!(
            session.borrow().analysis().error(),
            Some("User ID not available. Please refresh the page.")
        );
    }

    #[test]
    fn preview_analysis_locks_remaining_clauses() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        ready(&api.analysis_replies, Ok(preview(15, 5)));

        let request = submit_analysis(api.clone(), session.clone(), Some("lease.pdf".to_string())).unwrap();
        assert!(session.borrow().analysis().is_busy());
        block_on(request);

        assert_eq!(api.calls.borrow()[0], "analyze user-1 lease.pdf");
        let session = session.borrow();
        assert!(!session.analysis().is_busy());
        assert!(!session.has_full_access());
        assert_eq!(session.analysis_id(), Some("an_42"));
        match session.gate() {
            Gate::Preview { clauses, locked } => {
                assert_eq!(clauses.len(), 5);
                assert_eq!(locked_label(locked).as_deref(), Some("10 more clauses locked"));
            }
            other => panic!("expected preview, got {:?}", other),
        }
    }

    #[test]
    fn failed_analysis_keeps_previous_result() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        ready(&api.analysis_replies, Ok(preview(15, 5)));
        block_on(submit_analysis(api.clone(), session.clone(), Some("a.pdf".to_string())).unwrap());

        ready(&api.analysis_replies, Err(ApiError::Status(500)));
        block_on(submit_analysis(api.clone(), session.clone(), Some("b.pdf".to_string())).unwrap());

        let session = session.borrow();
        assert_eq!(session.analysis().error(), Some("HTTP error! status: 500"));
        assert_eq!(session.analysis().result(), Some(&preview(15, 5)));
        assert_eq!(api.calls("analyze"), 2);
    }

    #[test]
    fn analysis_is_not_reentrant() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        let reply = queue(&api.analysis_replies);
        let mut pool = LocalPool::new();

        let first = submit_analysis(api.clone(), session.clone(), Some("a.pdf".to_string())).unwrap();
        pool.spawner().spawn_local(first).unwrap();
        pool.run_until_stalled();

        let second = submit_analysis(api.clone(), session.clone(), Some("a.pdf".to_string()));
        assert_eq!(second.err(), Some(StartError::Busy));

        let _ = reply.send(Ok(preview(4, 4)));
        pool.run_until_stalled();
        assert_eq!(api.calls("analyze"), 1);
        assert!(!session.borrow().analysis().is_busy());
    }

    #[test]
    fn quick_clause_length_bounds() {
        let api = Rc::new(FakeApi::default());
        let session = session();

        let too_long = "a".repeat(301);
        let err = submit_quick_clause(api.clone(), session.clone(), too_long).err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::ClauseTooLong)));
        assert_eq!(api.calls("quick"), 0);
        assert_eq!(
            session.borrow().quick_clause().error(),
            Some("Text too long. Maximum 300 characters.")
        );

        let err = submit_quick_clause(api.clone(), session.clone(), "   ".to_string()).err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::EmptyClause)));
        assert_eq!(api.calls("quick"), 0);

        ready(&api.quick_replies, Ok(quick_result()));
        let at_limit = "a".repeat(300);
        block_on(submit_quick_clause(api.clone(), session.clone(), at_limit).unwrap());
        assert_eq!(api.calls.borrow().clone(), vec!["quick 300".to_string()]);
        assert_eq!(session.borrow().quick_clause().result(), Some(&quick_result()));
        assert_eq!(session.borrow().quick_clause().error(), None);
    }

    #[test]
    fn quick_clause_counts_characters_not_bytes() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        ready(&api.quick_replies, Ok(quick_result()));
        let accented = "é".repeat(300);
        assert!(submit_quick_clause(api.clone(), session.clone(), accented).is_ok());
    }

    #[test]
    fn quick_clause_transport_error_is_generic() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        ready(&api.quick_replies, Err(ApiError::Transport("offline".to_string())));
        let text = "Landlord may terminate with 5 days notice".to_string();
        block_on(submit_quick_clause(api.clone(), session.clone(), text).unwrap());
        assert_eq!(session.borrow().quick_clause().error(), Some(QUICK_CLAUSE_FAILED));
        assert_eq!(session.borrow().quick_clause().result(), None);
    }

    #[test]
    fn checkout_without_email_prompts_and_skips_backend() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        let err = submit_checkout(api.clone(), session.clone(), "  ").err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::MissingEmail)));
        assert_eq!(api.calls("checkout"), 0);
        assert_eq!(
            session.borrow().checkout().error(),
            Some("Please enter your email address to continue with payment")
        );
    }

    #[test]
    fn checkout_redirects_or_surfaces_error() {
        let api = Rc::new(FakeApi::default());
        let session = session();

        ready(&api.checkout_replies, Ok("https://pay.example/c/9".to_string()));
        let url = block_on(submit_checkout(api.clone(), session.clone(), " renter@example.com ").unwrap());
        assert_eq!(url.as_deref(), Some("https://pay.example/c/9"));
        assert_eq!(api.calls.borrow()[0], "checkout renter@example.com user-1");

        ready(&api.checkout_replies, Err(ApiError::Rejected("Email is blocked".to_string())));
        let url = block_on(submit_checkout(api.clone(), session.clone(), "renter@example.com").unwrap());
        assert_eq!(url, None);
        assert_eq!(session.borrow().checkout().error(), Some("Email is blocked"));

        ready(&api.checkout_replies, Err(ApiError::Status(503)));
        block_on(submit_checkout(api.clone(), session.clone(), "renter@example.com").unwrap());
        assert_eq!(session.borrow().checkout().error(), Some(CHECKOUT_FAILED));
    }

    #[test]
    fn checkout_requires_identity() {
        let api = Rc::new(FakeApi::default());
        let session = LeaseSession::shared(ClientIdentity::default());
        let err = submit_checkout(api.clone(), session, "renter@example.com").err();
        assert_eq!(err, Some(StartError::Invalid(ValidationError::MissingIdentity)));
        assert_eq!(api.calls("checkout"), 0);
    }

    #[test]
    fn flows_do_not_interfere() {
        let api = Rc::new(FakeApi::default());
        let session = session();
        let analysis_reply = queue(&api.analysis_replies);
        let quick_reply = queue(&api.quick_replies);
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let analysis = submit_analysis(api.clone(), session.clone(), Some("lease.pdf".to_string())).unwrap();
        spawner.spawn_local(analysis).unwrap();
        let quick = submit_quick_clause(api.clone(), session.clone(), "No pets allowed".to_string()).unwrap();
        spawner.spawn_local(quick).unwrap();
        pool.run_until_stalled();

        // a second quick-clause submission is refused while the first is pending
        let again = submit_quick_clause(api.clone(), session.clone(), "No smoking".to_string());
        assert_eq!(again.err(), Some(StartError::Busy));
        assert!(session.borrow().analysis().is_busy());
        assert!(session.borrow().quick_clause().is_busy());

        let _ = quick_reply.send(Err(ApiError::Status(500)));
        pool.run_until_stalled();
        {
            let session = session.borrow();
            assert_eq!(session.quick_clause().error(), Some(QUICK_CLAUSE_FAILED));
            assert!(!session.quick_clause().is_busy());
            assert!(session.analysis().is_busy());
            assert_eq!(session.analysis().error(), None);
        }

        let _ = analysis_reply.send(Ok(preview(15, 5)));
        pool.run_until_stalled();
        let session = session.borrow();
        assert!(!session.analysis().is_busy());
        assert_eq!(session.analysis().error(), None);
        assert!(session.analysis().result().is_some());
        assert_eq!(session.quick_clause().error(), Some(QUICK_CLAUSE_FAILED));
        assert_eq!(session.quick_clause().result(), None);
        assert_eq!(api.calls("quick"), 1);
    }
}
