//! Debug script to inspect the search results markup from euroshare.eu
//!
//! Usage: cargo run --example debug_search -- "doctor who" [page]

use euroshare_core::url::build_search_path;
use euroshare_core::{ClientConfig, EuroshareClient, Session, parse_search_results};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| "doctor who".to_string());
    let page = args.next().and_then(|p| p.parse().ok()).unwrap_or(1);

    let storage = std::env::temp_dir().join("euroshare-debug");
    let session = Session::open(&storage);
    let client = EuroshareClient::new(&ClientConfig::default(), &session)?;

    let path = build_search_path(&query, page);
    println!("Fetching {}{} ...\n", client.base_url(), path);
    let html = client.fetch(&path, None).await?;

    // Save HTML to file for inspection
    std::fs::write("debug_search.html", &html)?;
    println!("HTML saved to debug_search.html");

    let results = parse_search_results(&html, client.base_url())?;
    println!("\n=== {} results, next page: {:?} ===\n", results.videos.len(), results.next_page);
    for video in &results.videos {
        println!("{:>12}  {}\n              {}", video.size_bytes, video.label, video.detail_url);
    }

    Ok(())
}
