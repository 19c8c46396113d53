mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use promptpack_assemble::{ContextAssembler, Limits};
use promptpack_corpus::{CorpusLoader, DocumentStore};
use promptpack_match::Matcher;
use promptpack_types::Bundle;
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;
    promptpack_logging::init_logging(&config.logging.level)?;

    // Populate the store once; everything after this is in-memory only
    let root = cli.corpus.as_deref().unwrap_or(&config.corpus.root);
    let loader = CorpusLoader::new()?;
    let store = loader.load(Path::new(root))?;

    match cli.command {
        Command::List => cmd_list(&store),
        Command::Match { request, top_k } => {
            cmd_match(&store, &request, top_k.unwrap_or(config.matcher.top_k));
        }
        Command::Assemble {
            paths,
            max_documents,
            max_bytes,
            json,
        } => {
            let limits = Limits::new(
                max_documents.unwrap_or(config.assembler.max_documents),
                max_bytes.unwrap_or(config.assembler.max_bytes),
            );
            cmd_assemble(&store, &paths, limits, json)?;
        }
        Command::Ask { request, json } => {
            let limits = Limits::new(config.assembler.max_documents, config.assembler.max_bytes);
            cmd_ask(&store, &request, limits, json)?;
        }
    }

    Ok(())
}

fn cmd_list(store: &DocumentStore) {
    for document in store.documents() {
        println!("{:<9} {}", format!("{:?}", document.kind), document.path);
        if !document.trigger_text.is_empty() {
            println!("          {}", document.trigger_text);
        }
    }
    info!("{} documents listed", store.len());
}

fn cmd_match(store: &DocumentStore, request: &str, top_k: usize) {
    let matcher = Matcher::new(store);
    let matches = matcher.rank(request, top_k);

    if matches.is_empty() {
        println!("No matching documents.");
        return;
    }
    for m in &matches {
        println!("{:>8.3}  {}", m.score, m.path);
    }
    info!("{} of {} candidates matched", matches.len(), matcher.candidate_count());
}

fn cmd_assemble(store: &DocumentStore, seeds: &[String], limits: Limits, json: bool) -> Result<()> {
    // Explicit seeds must exist; a typo here is a hard error, unlike a
    // dangling link discovered during traversal.
    for seed in seeds {
        store
            .get(seed)
            .with_context(|| format!("Seed document '{seed}' not found"))?;
    }

    let assembler = ContextAssembler::new(store);
    let bundle = assembler.assemble(seeds, limits);
    print_bundle(&bundle, json)
}

fn cmd_ask(store: &DocumentStore, request: &str, limits: Limits, json: bool) -> Result<()> {
    let matcher = Matcher::new(store);
    let matches = matcher.rank(request, 1);

    let Some(top) = matches.first() else {
        println!("No matching document for this request.");
        return Ok(());
    };
    info!("Top match: {} (score {:.3})", top.path, top.score);

    let assembler = ContextAssembler::new(store);
    let bundle = assembler.assemble(&[top.path.clone()], limits);
    print_bundle(&bundle, json)
}

fn print_bundle(bundle: &Bundle, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
        return Ok(());
    }

    println!("{}", bundle.concatenate());
    info!(
        "Bundle: {} documents, {} bytes",
        bundle.documents_included, bundle.bytes_used
    );
    if bundle.documents_omitted > 0 {
        warn!("{} documents omitted by budget caps", bundle.documents_omitted);
    }
    for link in &bundle.unresolved_links {
        warn!("Unresolved link: {}", link);
    }
    Ok(())
}
