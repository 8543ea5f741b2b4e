use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Instrument};

use pacer::adapters::TokioTimeAdapter;
use pacer::delay::Pacer;
use pacer::observability::{init_observability, FlowContext};
use pacer::progress::Progress;
use pacer::schema::TimingDoc;
use pacer::scope::Scoped;

static PACER: Scoped<Pacer> = Scoped::new("pacer");

#[derive(Parser, Debug)]
#[command(name = "pacer", version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a paced demo flow: stepped progress, then a success hold
    Run {
        /// Timing tuning document (JSON); defaults apply when omitted
        #[arg(short = 'f', long = "timing")]
        timing: Option<PathBuf>,
        #[arg(long = "steps", default_value_t = 4)]
        steps: u8,
        /// Skip the success-message hold at the end
        #[arg(long = "no-hold")]
        no_hold: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_observability().map_err(|e| anyhow::anyhow!(e))?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            timing,
            steps,
            no_hold,
        } => {
            let doc: TimingDoc = match timing {
                Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
                None => TimingDoc::default(),
            };
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            rt.block_on(run_flow(doc, steps, no_hold))
        }
    }
}

async fn run_flow(doc: TimingDoc, steps: u8, no_hold: bool) -> anyhow::Result<()> {
    let _guard = PACER.provide(Pacer::new(Arc::new(TokioTimeAdapter)));
    // The one runtime-checked acquisition; the handle is passed explicitly after this.
    let pacer = PACER.acquire()?;

    let ctx = FlowContext::new("demo".to_string());
    let steps = steps.max(1);
    let step = (doc.max_progress / steps).max(1);
    let mut progress = Progress::default();

    async {
        for _ in 0..steps {
            pacer.delay(Some(doc.short_delay_ms)).await;
            progress.advance_toward(step, doc.max_progress);
            info!(progress = progress.get(), "step");
        }

        if !no_hold {
            pacer.delay(Some(doc.success_message_duration_ms)).await;
        }
    }
    .instrument(ctx.span())
    .await;

    ctx.record_completion(progress.get());
    Ok(())
}
