use crate::conf::{SanitizerConfig, load_config};
use crate::ctx::RequestCtx;
use crate::device::{Device, DevicePipeline, DeviceResult, HeaderRewriteDevice, RewriteOutcome};
use crate::headers::HeaderStore;
use anyhow::{Context, anyhow};
use clap::Args;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Path to the JSON configuration file
    #[arg(long, short)]
    pub config: PathBuf,

    /// Request header as "name: value", repeatable
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Headers after one pass through the device pipeline.
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    pub request_id: String,
    pub client: Option<String>,
    pub headers: Vec<(String, String)>,
    pub issues: Vec<String>,
}

impl RewriteReport {
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.headers {
            out.push_str(&format!("{name}: {value}\n"));
        }
        out
    }
}

pub fn run(args: RewriteArgs) -> anyhow::Result<()> {
    let validated = load_config(&args.config)?;
    let report = rewrite_headers(&validated.config, &args.headers)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_plain());
    }
    Ok(())
}

/// Parse `raw_headers` and run them through a single header rewrite device.
pub fn rewrite_headers(
    config: &SanitizerConfig,
    raw_headers: &[String],
) -> anyhow::Result<RewriteReport> {
    let mut headers = HeaderMap::new();
    for raw in raw_headers {
        let (name, value) = parse_header_arg(raw)?;
        headers.append(name, value);
    }

    let devices: Vec<Arc<dyn Device>> = vec![Arc::new(HeaderRewriteDevice::from_config(config))];

    let mut ctx = RequestCtx::new(&mut headers);
    if let DeviceResult::Degraded(err) = DevicePipeline::run_on_request(&devices, &mut ctx) {
        tracing::debug!(request_id = %ctx.request_id(), error = %err, "pipeline degraded");
    }

    let request_id = ctx.request_id().to_string();
    let outcome = ctx.extensions.remove::<RewriteOutcome>();
    drop(ctx);

    Ok(RewriteReport {
        request_id,
        client: outcome.as_ref().and_then(RewriteOutcome::client_addr),
        issues: outcome
            .map(|o| o.issues.iter().map(ToString::to_string).collect())
            .unwrap_or_default(),
        headers: headers.header_pairs()?,
    })
}

/// Split a curl-style `name: value` argument.
pub fn parse_header_arg(raw: &str) -> anyhow::Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header '{raw}' must look like 'name: value'"))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("invalid header name in '{raw}'"))?;
    let value = HeaderValue::from_str(value.trim())
        .with_context(|| format!("invalid header value in '{raw}'"))?;

    Ok((name, value))
}
