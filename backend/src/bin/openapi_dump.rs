//! Write the OpenAPI document to stdout or a file.

use std::fs;
use std::io;
use std::path::PathBuf;

use backend::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the feedback API OpenAPI document")]
struct Cli {
    /// Emit YAML instead of pretty JSON.
    #[arg(long)]
    yaml: bool,
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = if cli.yaml {
        doc.to_yaml().map_err(io::Error::other)?
    } else {
        doc.to_pretty_json().map_err(io::Error::other)?
    };
    match cli.output {
        Some(path) => fs::write(path, rendered),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
