//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for the REST API to disk, by default to
//! `openapi.json` in the current directory.

use api_lib::web::rest::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

#[derive(Parser, Debug)]
#[command(about = "Generate the OpenAPI document for the word of the day API")]
struct Cli {
    /// Where to write the document.
    #[arg(short, long, default_value = "openapi.json")]
    output: String,
}

fn generate_spec(
    api_doc: utoipa::openapi::OpenApi,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    println!("OpenAPI document written to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    generate_spec(ApiDoc::openapi(), &cli.output)
}
