use clap::Parser;
use log::info;
use occipital::{fetch_image, BuiltinModel, Classifier};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the JPEG image to classify
    url: String,

    /// Directory holding the graph and label files (defaults to /model,
    /// or $OCCIPITAL_MODEL_DIR when set)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    info!("URL: {}", args.url);
    let image = fetch_image(&args.url)?;

    let start_time = Instant::now();
    info!("Building classifier...");

    let builder = match &args.model_dir {
        Some(dir) => Classifier::builder().with_model_in(BuiltinModel::Inception, dir)?,
        None => Classifier::builder().with_model(BuiltinModel::Inception)?,
    };
    let classifier = builder.build()?;
    info!("Classifier built (took {:.2?})", start_time.elapsed());

    let classify_start = Instant::now();
    let top = classifier.classify(&image)?;
    info!("Classification took {:.2?}", classify_start.elapsed());

    for entry in top {
        println!("{}", entry);
    }

    Ok(())
}
