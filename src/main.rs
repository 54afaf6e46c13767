//! # tgsift CLI
//!
//! Command-line interface for the tgsift library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use tgsift::cli::{Args, Scope};
use tgsift::core::output::{ReportHeader, write_csv, write_grouped_report, write_report};
use tgsift::core::{
    ConversationSummary, Discovery, FilterConfig, discover_conversations, extract_all_from,
    extract_single_from, strip_bom,
};
use tgsift::{ExtractConfig, SiftError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SiftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Validate the author filter before touching the file
    let filter = args.filter_config()?;
    let config = args.extract_config();

    println!("📦 tgsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("👤 Filter:  {}", filter.describe());
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }

    let bytes = fs::read(&args.input)?;
    let raw = String::from_utf8(bytes)?;
    let text = strip_bom(&raw);

    // The listing goes out before selection so a bad selector still shows it
    let discovery = discover_conversations(text, &config);
    print_listing(&discovery.summaries(), config.listing_limit);

    match args.scope() {
        Scope::Single => run_single(&args, &discovery, &filter, &config)?,
        Scope::All => run_all(&args, &discovery, &filter)?,
    }

    println!();
    println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

fn run_single(
    args: &Args,
    discovery: &Discovery<'_>,
    filter: &FilterConfig,
    config: &ExtractConfig,
) -> Result<(), SiftError> {
    let txt_path = args.txt_path()?;
    let csv_path = args.csv_path()?;

    let result = extract_single_from(discovery, &args.conversation_query(), filter, config)?;

    write_report(&txt_path, &ReportHeader::for_chat(&result.chat_name, filter), &result.rows)?;
    write_csv(&result.rows, &csv_path)?;

    println!();
    println!("💬 Chat:    {}", result.chat_name);
    println!("🔍 Found:   {} messages", result.rows.len());
    println!("💾 TXT:     {}", txt_path);
    println!("💾 CSV:     {}", csv_path);
    Ok(())
}

fn run_all(args: &Args, discovery: &Discovery<'_>, filter: &FilterConfig) -> Result<(), SiftError> {
    let txt_path = args.txt_path()?;
    let csv_path = args.csv_path()?;

    let result = extract_all_from(discovery, filter);

    write_grouped_report(&txt_path, &ReportHeader::all_chats(filter), &result.rows_by_chat())?;
    write_csv(result.results.iter().flat_map(|r| r.rows.iter()), &csv_path)?;

    println!();
    println!("📊 Per chat (with matches):");
    for matched in result.matched() {
        println!("   - {}: {}", matched.summary, matched.count());
    }

    println!();
    println!("🔍 Found:   {} messages", result.total_rows());
    println!("💾 TXT:     {}", txt_path);
    println!("💾 CSV:     {}", csv_path);
    Ok(())
}

fn print_listing(conversations: &[ConversationSummary], limit: usize) {
    println!();
    println!("📋 Discovered chats:");
    for (i, summary) in conversations.iter().take(limit).enumerate() {
        println!("{:>4}. {}", i + 1, summary);
    }
    if conversations.len() > limit {
        println!("      ... and {} more", conversations.len() - limit);
    }
}
