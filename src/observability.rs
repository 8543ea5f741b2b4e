//! Observability module for pacer
//! Provides structured logging for paced flows

use std::time::Instant;
use tracing::{info, instrument, Span};
use tracing_subscriber::EnvFilter;

/// Initialize logging (JSON or pretty based on env)
pub fn init_observability() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Base env filter (e.g., RUST_LOG=info,pacer=debug)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_json = std::env::var("PACER_LOG_JSON").ok() == Some("1".to_string());

    if is_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_current_span(true)
            .try_init()?;
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init()?;
    }

    info!("pacer observability initialized");
    Ok(())
}

/// Structured context for one paced flow
#[derive(Debug, Clone)]
pub struct FlowContext {
    pub flow: String,
    pub start_time: Instant,
}

impl FlowContext {
    pub fn new(flow: String) -> Self {
        Self {
            flow,
            start_time: Instant::now(),
        }
    }

    /// Create a span for this flow
    pub fn span(&self) -> Span {
        tracing::info_span!("flow", flow = %self.flow)
    }

    /// Record flow completion with final progress
    #[instrument(skip(self))]
    pub fn record_completion(&self, progress: u8) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;

        info!(
            flow = %self.flow,
            progress = progress,
            duration_ms = duration_ms,
            "Flow completed"
        );

        info!(
            metric_name = "pacer_flow_duration_ms",
            value = duration_ms,
            flow = %self.flow,
            "metric"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_span_is_enabled_and_named() {
        let subscriber = tracing_subscriber::fmt().finish();
        tracing::subscriber::with_default(subscriber, || {
            let ctx = FlowContext::new("demo".to_string());
            let span = ctx.span();
            assert_eq!(span.metadata().map(|m| m.name()), Some("flow"));
        });
    }
}
