use crate::cli::{Args, Command, ServeArgs, SourceKind};
use anyhow::{bail, Context};
use clap::Parser;
use rdf_deref_backend::{BackendConfig, LocalIndexConfig, RemoteGraphConfig, Url};
use rdf_deref_model::validation;
use rdf_deref_model::ObjectDispatch;
use rdf_deref_web::ServerConfig;
use std::fs;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

const DEFAULT_LOG_DIRECTIVES: &str =
    "rdf_deref_cli=info,rdf_deref_web=info,rdf_deref_backend=info,tower_http=info";

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = Args::parse();
    match matches.command {
        Command::Serve(args) => serve(args).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    validation::init();

    let namespace = args.uri_host.trim_end_matches('/').to_owned();
    if !validation::is_valid_uri(&namespace) {
        bail!("The URI host '{namespace}' contains characters that are not allowed in resolved URIs")
    }

    let landing_page = args
        .landing_page
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Could not read the landing page {}", path.display()))
        })
        .transpose()?;

    let server_config = ServerConfig {
        bind: args.bind.clone(),
        namespace,
        backend: backend_config(&args)?,
        landing_page,
        cors: args.cors,
    };
    rdf_deref_web::serve(server_config).await
}

fn backend_config(args: &ServeArgs) -> anyhow::Result<BackendConfig> {
    let timeout = args.timeout_ms.map(Duration::from_millis);
    match args.source {
        SourceKind::Sparql => {
            let Some(endpoint) = &args.endpoint else {
                bail!("No SPARQL endpoint URL provided. Use the --endpoint option")
            };
            let endpoint = Url::parse(endpoint)
                .with_context(|| format!("Invalid SPARQL endpoint URL '{endpoint}'"))?;
            let mut config = RemoteGraphConfig::new(endpoint);
            if let Some(timeout) = timeout {
                config.timeout = timeout;
            }
            info!(endpoint = %config.endpoint, "Using SPARQL endpoint");
            Ok(BackendConfig::RemoteGraph(config))
        }
        SourceKind::Hdt => {
            let Some(hdt_file) = &args.hdt_file else {
                bail!("No HDT file provided. Use the --hdt-file option")
            };
            if !hdt_file.is_file() {
                bail!("The HDT file {} does not exist", hdt_file.display())
            }
            let mut config = LocalIndexConfig::new(hdt_file);
            config.tool.clone_from(&args.hdt_tool);
            if let Some(timeout) = timeout {
                config.timeout = timeout;
            }
            if args.extended_objects {
                config.dispatch = ObjectDispatch::Extended;
            }
            info!(hdt_file = %hdt_file.display(), tool = %config.tool.display(), "Using HDT file");
            Ok(BackendConfig::LocalIndex(config))
        }
    }
}
