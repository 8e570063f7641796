use anyhow::Context;
use clap::Parser;
use qrprint::app::{PrintOutcome, QrApp};
use qrprint::config::Config;
use qrprint::encoder::ErrorCorrection;
use qrprint::error::QrPrintError;
use qrprint::helper::{print_raster, read_line_lossy};
use qrprint::logger;
use qrprint::printer::RasterPageDevice;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "qrprint")]
#[command(about = "Generate a QR code for an HTTPS address and print it")]
struct Cli {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rendered image size in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Error correction level
    #[arg(long, value_enum)]
    ecc: Option<ErrorCorrection>,

    /// Quiet zone width in modules
    #[arg(long)]
    quiet_zone: Option<usize>,

    #[arg(long, short, help = "Enable verbose output")]
    verbose: bool,

    /// Address to generate right away
    url: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(size) = self.size {
            config.pixel_size = size;
        }
        if let Some(ecc) = self.ecc {
            config.error_correction = ecc;
        }
        if let Some(quiet_zone) = self.quiet_zone {
            config.quiet_zone = quiet_zone;
        }
        config.validate()?;
        Ok(config)
    }
}

fn report(err: &QrPrintError) {
    tracing::debug!("{}", err);
    eprintln!("{}: {}", err.title(), err.user_message());
}

fn submit(app: &mut QrApp, columns: u32, raw: &str) {
    match app.generate(raw) {
        Ok(image) => print_raster(image, columns),
        Err(e) => report(&e),
    }
}

fn print(app: &QrApp, device: &mut RasterPageDevice) {
    match app.print(device) {
        Ok(PrintOutcome::Printed { pages }) => {
            let geometry = app.config().page.geometry();
            println!("Printed {} page(s) at ({}, {}).", pages, geometry.x, geometry.y);
        }
        Ok(PrintOutcome::Cancelled) => println!("Printing cancelled."),
        Err(e) => report(&e),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = cli.load_config()?;
    tracing::debug!("config: {:?}", config);

    let columns = config.terminal_columns;
    let mut device = RasterPageDevice::new(config.page.geometry());
    let mut app = QrApp::new(config);

    if let Some(url) = &cli.url {
        submit(&mut app, columns, url);
    }

    println!("Enter an HTTPS address to generate a QR code, `print` to print it, `quit` to exit.");
    let mut stdin = io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = read_line_lossy(&mut stdin, &mut buf)? else {
            break;
        };
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "print" => print(&app, &mut device),
            other => submit(&mut app, columns, other),
        }
    }

    Ok(())
}
