use super::error::{StartError, ValidationError};

/// Identifies one started request of a [`Flow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// Busy/error/result state of a single request-response flow.
///
/// A flow never runs two requests at once. Each started request gets a
/// ticket; a completion carrying a ticket other than the current one is
/// dropped, so an old response can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow<T> {
    busy: bool,
    generation: u64,
    result: Option<T>,
    error: Option<String>,
}

impl<T> Default for Flow<T> {
    fn default() -> Self {
        Self {
            busy: false,
            generation: 0,
            result: None,
            error: None,
        }
    }
}

impl<T> Flow<T> {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks the flow busy if `validation` passed.
    ///
    /// A busy flow refuses without touching its state. A validation failure is
    /// recorded as the flow error; the previous result stays as it was.
    pub fn start(&mut self, validation: Result<(), ValidationError>) -> Result<Ticket, StartError> {
        if self.busy {
            return Err(StartError::Busy);
        }
        if let Err(err) = validation {
            return Err(self.reject(err));
        }
        self.busy = true;
        self.generation += 1;
        self.error = None;
        Ok(Ticket {
            generation: self.generation,
        })
    }

    /// Records a validation failure without starting anything.
    pub fn reject(&mut self, err: ValidationError) -> StartError {
        self.error = Some(err.to_string());
        StartError::Invalid(err)
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    /// A failure keeps the last successful result.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Records an error that happened after the flow finished, e.g. a failed redirect.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_flow_refuses_second_start() {
        let mut flow: Flow<u32> = Flow::default();
        let ticket = flow.start(Ok(())).unwrap();
        assert!(flow.is_busy());
        assert_eq!(flow.start(Ok(())), Err(StartError::Busy));
        assert!(flow.complete(ticket, Ok(7)));
        assert!(!flow.is_busy());
        assert_eq!(flow.result(), Some(&7));
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut flow: Flow<u32> = Flow::default();
        let first = flow.start(Ok(())).unwrap();
        flow.complete(first, Ok(1));

        let second = flow.start(Ok(())).unwrap();
        assert_eq!(flow.result(), Some(&1));
        flow.complete(second, Err("HTTP error! status: 500".to_string()));
        assert_eq!(flow.result(), Some(&1));
        assert_eq!(flow.error(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn validation_error_does_not_start() {
        let mut flow: Flow<u32> = Flow::default();
        let err = flow.start(Err(ValidationError::MissingDocument)).unwrap_err();
        assert_eq!(err, StartError::Invalid(ValidationError::MissingDocument));
        assert!(!flow.is_busy());
        assert_eq!(flow.error(), Some("Please select a file first"));

        // the next start clears the stale validation message
        let _ticket = flow.start(Ok(())).unwrap();
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut flow: Flow<&str> = Flow::default();
        let old = flow.start(Ok(())).unwrap();
        flow.complete(old, Ok("first"));
        let current = flow.start(Ok(())).unwrap();

        assert!(!flow.complete(old, Ok("late duplicate")));
        assert!(flow.is_busy());
        assert_eq!(flow.result(), Some(&"first"));

        assert!(flow.complete(current, Ok("second")));
        assert_eq!(flow.result(), Some(&"second"));
    }
}
