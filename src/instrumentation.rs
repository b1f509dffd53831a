//! Span timing for profiling the opponent search.
//!
//! Compiled only with `--features instrumentation`. Every span entered through
//! `#[instrument]` is timed; totals are kept per worker thread and merged when
//! printed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Span name -> (calls, total nanoseconds), one map per thread.
static SPAN_TIMINGS: Lazy<ThreadLocal<Mutex<HashMap<&'static str, (u64, u64)>>>> =
    Lazy::new(ThreadLocal::new);

struct SpanTimer;

impl<S> Layer<S> for SpanTimer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let timings = SPAN_TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut timings) = timings.lock() {
            let entry = timings.entry(span.name()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += started.elapsed().as_nanos() as u64;
        }
    }
}

/// Installs the timing layer as the global subscriber. Span events are also
/// printed when `RUST_LOG` is set.
pub fn init_tracing() {
    let verbose = std::env::var("RUST_LOG")
        .map_or(false, |filter| !filter.is_empty() && filter != "off");

    let result = if verbose {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(SpanTimer)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact());
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(SpanTimer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        log::warn!("span timing disabled: {}", error);
    }
}

/// Prints the merged span timings to stderr, slowest first.
pub fn print_timing_statistics() {
    let mut merged: HashMap<&'static str, (u64, u64)> = HashMap::new();
    for timings in SPAN_TIMINGS.iter() {
        if let Ok(timings) = timings.lock() {
            for (name, (calls, nanos)) in timings.iter() {
                let entry = merged.entry(*name).or_insert((0, 0));
                entry.0 += calls;
                entry.1 += nanos;
            }
        }
    }

    if merged.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    let mut rows: Vec<_> = merged.into_iter().collect();
    rows.sort_by_key(|(_, (_, nanos))| std::cmp::Reverse(*nanos));

    eprintln!("\n{:<40} {:>10} {:>12} {:>12}", "Span", "Calls", "Total (ms)", "Avg (µs)");
    eprintln!("{:-<78}", "");
    for (name, (calls, nanos)) in rows {
        eprintln!(
            "{:<40} {:>10} {:>12.2} {:>12.2}",
            name,
            calls,
            nanos as f64 / 1_000_000.0,
            nanos as f64 / calls.max(1) as f64 / 1_000.0
        );
    }
}
