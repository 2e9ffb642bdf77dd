//! TagCache demo - construct a cache, write one item, read it back

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tagcache::Cache;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 5)]
    capacity: usize,

    /// Tag to write and read back
    #[arg(short, long, default_value = "a")]
    tag: String,

    /// Value to store under the tag
    #[arg(short, long, default_value = "0")]
    value: String,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    ensure!(args.capacity > 0, "cache capacity must be greater than 0");

    info!("Starting TagCache demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let mut cache = Cache::new(args.capacity);
    cache.write(&args.tag, args.value.clone());

    let item = cache
        .read(&args.tag)
        .with_context(|| format!("reading back tag {:?}", args.tag))?;

    info!(expected = %args.value, got = %item.data(), tag = item.tag(), "read back item");
    info!(
        uses = cache.uses(),
        hits = cache.hits(),
        misses = cache.misses(),
        "cache counters"
    );

    Ok(())
}
