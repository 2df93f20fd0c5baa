//! Handler entry/exit log lines tagged with the request prefix.

use crate::RequestContext;

use std::fmt::Display;

use log::{debug, info, warn};

pub fn log_entry(ctx: &RequestContext, handler: &str) {
    debug!("{} -> {}", ctx.log_prefix(), handler);
}

/// Successes log at info, failures at warn, both with elapsed time.
pub fn log_exit<T, E: Display>(ctx: &RequestContext, handler: &str, result: &Result<T, E>) {
    let elapsed = ctx.elapsed_ms();

    match result {
        Ok(_) => info!("{} <- {} ok in {}ms", ctx.log_prefix(), handler, elapsed),
        Err(e) => warn!(
            "{} <- {} failed in {}ms: {}",
            ctx.log_prefix(),
            handler,
            elapsed,
            e
        ),
    }
}
