use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tapline::kernel::channel::ChannelKernelFactory;
use tapline::pipeline::lifecycle::Command;
use tapline::pipeline::reactor::SubmitError;
use tapline::{Input, PipelineEngine, Reactor, ServiceConfig};

// Harness: newline-delimited JSON inputs on stdin, structured events on stdout.
// Logs go to stderr so stdout stays machine-readable.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let config = ServiceConfig::from_env().context("loading configuration")?;
    tracing::info!(?config, "Starting tapline");

    // Kernel stand-in: drain submitted events to stdout.
    let (factory, mut events) = ChannelKernelFactory::with_buffer(config.kernel_buffer);
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::warn!("Failed to encode event: {}", e),
            }
        }
    });

    let engine = PipelineEngine::new(&config, Box::new(factory));
    let (reactor, handle) = Reactor::new(engine, config.queue_capacity);

    let mut notifications = handle.subscribe();
    tokio::spawn(async move {
        while let Ok(n) = notifications.recv().await {
            tracing::info!(notification = ?n, "Pipeline notification");
        }
    });

    let reactor_task = tokio::spawn(reactor.run());
    handle.command(Command::PipelineCreate).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                None
            }
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let input: Input = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("Skipping unparseable input: {}", e);
                continue;
            }
        };

        let result = match input {
            Input::Signal(signal) => handle.try_signal(signal),
            other => handle.send(other).await,
        };
        match result {
            Ok(()) => {}
            Err(SubmitError::QueueFull) => tracing::warn!("Input queue full, signal dropped"),
            Err(SubmitError::Closed) => break,
        }
    }

    drop(handle);
    let stats = reactor_task.await.context("reactor task failed")?;
    printer.await.context("event printer failed")?;
    tracing::info!(?stats, "Shut down");
    Ok(())
}
