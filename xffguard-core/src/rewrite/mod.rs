
use crate::chain::AddressChain;
use crate::conf::types::Policy;
use crate::headers::{FORWARDED_FOR, ORIGINAL_FORWARDED_FOR, find_header};
use crate::resolve::{Indeterminate, Resolution};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Append next to existing values.
    Add,
    /// Leave exactly this value.
    Replace,
}

/// One header mutation to hand to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderWrite {
    pub name: String,
    pub value: String,
    pub mode: WriteMode,
}

impl HeaderWrite {
    pub fn replace(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            mode: WriteMode::Replace,
        }
    }

    pub fn add(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            mode: WriteMode::Add,
        }
    }
}

/// Non-fatal condition found while planning; always logged by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteNotice {
    /// No client address could be chosen.
    Indeterminate(Indeterminate),
    /// The injection target exists and overwriting is disabled.
    InjectedHeaderExists { header: String },
}

impl Display for RewriteNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteNotice::Indeterminate(reason) => {
                write!(f, "client address not determinable: {reason}")
            }
            RewriteNotice::InjectedHeaderExists { header } => write!(
                f,
                "header '{header}' already present, overwriting is disabled by configuration"
            ),
        }
    }
}

/// Header state changes computed for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePlan {
    /// Forwarded-for value exactly as received.
    pub original: String,
    /// `None` for policies that do not look at the chain.
    pub resolution: Option<Resolution>,
    /// Always applied first.
    pub preserve: HeaderWrite,
    pub primary: Option<HeaderWrite>,
    pub notice: Option<RewriteNotice>,
}

/// Compute the header writes for one request.
///
/// Returns `None` when the request carries no forwarded-for header, in which
/// case nothing must be written at all.
pub fn plan_rewrite(headers: &[(String, String)], policy: &Policy) -> Option<RewritePlan> {
    let original = find_header(headers, FORWARDED_FOR)?;
    let chain = AddressChain::parse(original);

    let mut plan = RewritePlan {
        original: original.to_owned(),
        resolution: None,
        preserve: HeaderWrite::replace(ORIGINAL_FORWARDED_FOR, original),
        primary: None,
        notice: None,
    };

    match policy {
        Policy::FilterChain { trust } => {
            let resolution = trust.resolve(&chain);
            match resolution.indeterminate {
                Some(reason) => plan.notice = Some(RewriteNotice::Indeterminate(reason)),
                None => {
                    plan.primary = Some(HeaderWrite::replace(
                        FORWARDED_FOR,
                        resolution.retained_chain(),
                    ))
                }
            }
            plan.resolution = Some(resolution);
        }

        Policy::InjectHeader {
            trust,
            header,
            overwrite_on_exists,
        } => {
            let resolution = trust.resolve(&chain);
            match resolution.client_addr() {
                None => {
                    plan.notice = resolution.indeterminate.map(RewriteNotice::Indeterminate);
                }
                // An empty target carries no address and counts as absent.
                Some(client) => match find_header(headers, header.as_str()) {
                    None => plan.primary = Some(HeaderWrite::add(header.as_str(), client)),
                    Some(existing) if existing.is_empty() || *overwrite_on_exists => {
                        plan.primary = Some(HeaderWrite::replace(header.as_str(), client))
                    }
                    Some(_) => {
                        plan.notice = Some(RewriteNotice::InjectedHeaderExists {
                            header: header.to_string(),
                        })
                    }
                },
            }
            plan.resolution = Some(resolution);
        }

        Policy::TrustDepth { trust } => {
            let resolution = trust.resolve(&chain);
            // Fail closed: an undeterminable client still narrows the header.
            let client = resolution.client_addr().unwrap_or_default();
            plan.notice = resolution.indeterminate.map(RewriteNotice::Indeterminate);
            plan.primary = Some(HeaderWrite::replace(FORWARDED_FOR, client));
            plan.resolution = Some(resolution);
        }

        Policy::Static { header, value } => {
            plan.primary = Some(HeaderWrite::replace(header.as_str(), value.as_str()));
        }
    }

    Some(plan)
}
