use clap::{Parser, Subcommand};
use qrlabel::{
    AppConfig, AppError, BatchItem, ChunkedTransport, Customer, EscPosBuilder, FileTransport, LabelRequest, PrintJob,
    PrinterTransport, QrPayload,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Render QR customer labels as PDF or ESC/POS raster jobs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a label request to a PDF with one page per copy
    Pdf {
        request: PathBuf,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render a label request to an ESC/POS raster command file
    Raster {
        request: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = false)]
        form_feed: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a batch of labels to a printer device or file
    Print {
        batch: PathBuf,
        #[arg(long)]
        device: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the compact QR payload for a customer record
    Payload { customer: PathBuf },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "qrlabel=info");
        }
    }
    env_logger::init();

    match Cli::parse().command {
        Command::Pdf { request, quantity, out_dir, config } => {
            let config = AppConfig::load_or_default(config.as_deref())?;
            let request: LabelRequest = read_json(&request)?;
            let pdf = config.pipeline(false)?.generate_pdf(&request, quantity)?;
            let path = out_dir.join(&pdf.filename);
            fs::write(&path, &pdf.bytes)?;
            println!("{} ({} page(s))", path.display(), pdf.page_count);
        }
        Command::Raster { request, out, form_feed, config } => {
            let config = AppConfig::load_or_default(config.as_deref())?;
            let request: LabelRequest = read_json(&request)?;
            let label = config.pipeline(true)?.render_raster(&request)?;
            let builder = EscPosBuilder::new().raw(&label.commands);
            let bytes = (if form_feed { builder.form_feed() } else { builder }).build();
            fs::write(&out, &bytes)?;
            println!(
                "{} ({}x{} dots, {} bytes)",
                out.display(),
                label.surface.width_px(),
                label.surface.height_px(),
                bytes.len()
            );
        }
        Command::Print { batch, device, config } => {
            let config = AppConfig::load_or_default(config.as_deref())?;
            let items: Vec<BatchItem> = read_json(&batch)?;
            let job = PrintJob::new(config.pipeline(true)?, &config.printer);
            let file = FileTransport::open(&device)?;
            let mut transport: Box<dyn PrinterTransport> = match config.printer.max_chunk {
                Some(max_chunk) => Box::new(ChunkedTransport::new(file, max_chunk)),
                None => Box::new(file),
            };
            let report = job.print_batch(&items, &mut transport).await;
            println!("{} printed, {} failed", report.printed, report.failed);
        }
        Command::Payload { customer } => {
            let customer: Customer = read_json(&customer)?;
            println!("{}", QrPayload::from(&customer).to_json()?);
        }
    }
    Ok(())
}
