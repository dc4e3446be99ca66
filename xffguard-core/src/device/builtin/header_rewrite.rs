use crate::conf::types::{Policy, SanitizerConfig};
use crate::ctx::{RequestCtx, RequestId};
use crate::device::core::{Device, DeviceError, DeviceResult};
use crate::headers::{FORWARDED_FOR, HeaderStore, HeaderStoreError};
use crate::resolve::Indeterminate;
use crate::rewrite::{HeaderWrite, RewriteNotice, RewritePlan, WriteMode, plan_rewrite};
use thiserror::Error;

/// Driver progress for one request. Every request starts in `Idle` and
/// returns there once the driver is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RewriteState {
    Idle,
    HeaderLocated,
    OriginalPreserved,
    PrimaryRewritten,
}

/// Per-request problems. None of them stop the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RewriteIssue {
    #[error("failed to get request headers: {0}")]
    HeadersUnavailable(#[source] HeaderStoreError),

    #[error("failed to preserve original chain: {0}")]
    PreserveFailed(#[source] HeaderStoreError),

    #[error("forwarded-for chain left untouched: {0}")]
    UnreadableChain(#[source] HeaderStoreError),

    #[error("failed to write '{header}' header: {source}")]
    WriteFailed {
        header: String,
        #[source]
        source: HeaderStoreError,
    },

    #[error("client address not determinable: {0}")]
    Indeterminate(Indeterminate),

    #[error("header '{header}' already present, overwriting is disabled by configuration")]
    InjectedHeaderExists { header: String },
}

impl From<RewriteNotice> for RewriteIssue {
    fn from(notice: RewriteNotice) -> Self {
        match notice {
            RewriteNotice::Indeterminate(reason) => RewriteIssue::Indeterminate(reason),
            RewriteNotice::InjectedHeaderExists { header } => {
                RewriteIssue::InjectedHeaderExists { header }
            }
        }
    }
}

/// What the driver did for one request.
///
/// Inserted into the request extensions so later devices read the result
/// instead of re-parsing the rewritten headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Last state reached before returning to `Idle`.
    pub reached: RewriteState,
    pub plan: Option<RewritePlan>,
    pub issues: Vec<RewriteIssue>,
}

impl RewriteOutcome {
    fn idle() -> Self {
        Self {
            reached: RewriteState::Idle,
            plan: None,
            issues: Vec::new(),
        }
    }

    fn advance(&mut self, request_id: &RequestId, next: RewriteState) {
        tracing::trace!(request_id = %request_id, from = ?self.reached, to = ?next, "rewrite state");
        self.reached = next;
    }

    /// Client address chosen by the resolver, if any.
    pub fn client_addr(&self) -> Option<String> {
        self.plan
            .as_ref()
            .and_then(|plan| plan.resolution.as_ref())
            .and_then(|resolution| resolution.client_addr())
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Sanitizes the forwarded-for header according to the configured policy.
pub struct HeaderRewriteDevice {
    policy: Policy,
}

impl HeaderRewriteDevice {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn from_config(cfg: &SanitizerConfig) -> Self {
        Self::new(cfg.policy.clone())
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Run the driver state machine against one request's headers.
    pub fn rewrite(&self, headers: &mut dyn HeaderStore, request_id: &RequestId) -> RewriteOutcome {
        let mut outcome = RewriteOutcome::idle();

        //---------------------------------------------------------------------
        // Idle -> HeaderLocated
        //---------------------------------------------------------------------
        let pairs = match headers.header_pairs() {
            Ok(pairs) => pairs,
            Err(err) => {
                tracing::error!(request_id = %request_id, error = %err, "failed to get request headers");
                outcome.issues.push(RewriteIssue::HeadersUnavailable(err));
                return outcome;
            }
        };

        let Some(plan) = plan_rewrite(&pairs, &self.policy) else {
            tracing::debug!(request_id = %request_id, "no forwarded-for header, nothing to rewrite");
            return outcome;
        };
        outcome.advance(request_id, RewriteState::HeaderLocated);

        //---------------------------------------------------------------------
        // HeaderLocated -> OriginalPreserved (best effort)
        //---------------------------------------------------------------------
        if let Err(err) = headers.preserve(FORWARDED_FOR, &plan.preserve.name) {
            tracing::error!(
                request_id = %request_id,
                header = %plan.preserve.name,
                error = %err,
                "failed to preserve original forwarded-for chain"
            );
            outcome.issues.push(RewriteIssue::PreserveFailed(err));
        }
        outcome.advance(request_id, RewriteState::OriginalPreserved);

        // The plan was computed from a lossy view; never write it back over
        // bytes it could not represent.
        if let Err(err) = headers.header(FORWARDED_FOR) {
            tracing::error!(
                request_id = %request_id,
                error = %err,
                "forwarded-for value is unreadable, skipping rewrite"
            );
            outcome.issues.push(RewriteIssue::UnreadableChain(err));
            outcome.plan = Some(plan);
            return outcome;
        }

        //---------------------------------------------------------------------
        // OriginalPreserved -> PrimaryRewritten
        //---------------------------------------------------------------------
        if let Some(notice) = &plan.notice {
            match notice {
                RewriteNotice::Indeterminate(_) => tracing::warn!(
                    request_id = %request_id,
                    policy = self.policy.kind(),
                    chain = %plan.original,
                    "{notice}"
                ),
                RewriteNotice::InjectedHeaderExists { .. } => tracing::error!(
                    request_id = %request_id,
                    policy = self.policy.kind(),
                    "{notice}"
                ),
            }
            outcome.issues.push(notice.clone().into());
        }

        if let Some(write) = &plan.primary {
            match apply(headers, write) {
                Ok(()) => tracing::debug!(
                    request_id = %request_id,
                    header = %write.name,
                    value = %write.value,
                    "header rewritten"
                ),
                Err(err) => {
                    tracing::error!(
                        request_id = %request_id,
                        header = %write.name,
                        error = %err,
                        "failed to write header"
                    );
                    outcome.issues.push(RewriteIssue::WriteFailed {
                        header: write.name.clone(),
                        source: err,
                    });
                }
            }
        }
        outcome.advance(request_id, RewriteState::PrimaryRewritten);

        outcome.plan = Some(plan);
        outcome
    }
}

fn apply(headers: &mut dyn HeaderStore, write: &HeaderWrite) -> Result<(), HeaderStoreError> {
    match write.mode {
        WriteMode::Add => headers.add_header(&write.name, &write.value),
        WriteMode::Replace => headers.replace_header(&write.name, &write.value),
    }
}

impl Device for HeaderRewriteDevice {
    fn name(&self) -> &'static str {
        "header_rewrite"
    }

    fn on_request(&self, ctx: &mut RequestCtx<'_>) -> DeviceResult {
        let outcome = self.rewrite(&mut *ctx.headers, &ctx.request_id);

        let result = if outcome.is_clean() {
            DeviceResult::Continue
        } else {
            let message = outcome
                .issues
                .iter()
                .map(|issue| issue.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            DeviceResult::Degraded(DeviceError::new(self.name(), message))
        };

        // Downstream devices read the outcome from ctx.extensions.
        ctx.extensions.insert(outcome);
        result
    }
}
