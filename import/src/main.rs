use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Catalog export to import, a local file path or an http(s) URL.
    source: String,

    /// Catalog file to merge into.
    #[arg(default_value = "catalog.json")]
    catalog_path: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = import::run_import(&args.source, args.catalog_path.as_ref()).await {
        eprintln!("Import failed: {e:#}");
        std::process::exit(1);
    }
}
