use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use rdf_deref_backend::DEFAULT_INDEX_TOOL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "rdf-deref")]
/// RDF Deref: resolves Linked Data URIs using a SPARQL endpoint or an HDT file
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the URI resolution HTTP server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Where the triples come from
    #[arg(long, value_enum)]
    pub source: SourceKind,
    /// The namespace of the resolved URIs (e.g. http://example.org)
    ///
    /// A request for /foo/bar resolves the URI <namespace>/foo/bar.
    #[arg(long, value_hint = ValueHint::Url)]
    pub uri_host: String,
    /// URL of a SPARQL 1.1 endpoint
    #[arg(long, required_if_eq("source", "sparql"), value_hint = ValueHint::Url)]
    pub endpoint: Option<String>,
    /// Path to an .hdt file
    #[arg(long, required_if_eq("source", "hdt"), value_hint = ValueHint::FilePath)]
    pub hdt_file: Option<PathBuf>,
    /// The executable used to search the HDT file
    #[arg(long, default_value = DEFAULT_INDEX_TOOL, value_hint = ValueHint::CommandName)]
    pub hdt_tool: PathBuf,
    /// Host and port to listen to
    #[arg(short, long, default_value = "localhost:8080", value_hint = ValueHint::Hostname)]
    pub bind: String,
    /// Maximum time in milliseconds to wait for the backend
    ///
    /// Defaults to 5000 for HDT files and 1500 for SPARQL endpoints.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
    /// An HTML file that is served on / instead of the built-in page
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub landing_page: Option<PathBuf>,
    /// Also keep HDT results whose object is a blank node or an IRI not starting with "h"
    #[arg(long)]
    pub extended_objects: bool,
    /// Allows cross-origin requests
    #[arg(long)]
    pub cors: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// A SPARQL 1.1 endpoint
    Sparql,
    /// An HDT file searched with hdtSearch
    Hdt,
}
