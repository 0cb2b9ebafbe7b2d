use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tdsearch_core::{Index, IndexFiles};
use tdsearch_search::{read_query, write_ranking, SearchEngine};

/// Load the index, read the query from stdin and print the ranking.
pub fn run_search(index_dir: &Path, files: &IndexFiles) -> Result<()> {
    let index = Index::load_with(index_dir, files)?;

    let query = read_query(io::stdin().lock())
        .context("Failed to read query from standard input")?;
    log::debug!("Query: {:?}", query);

    let results = SearchEngine::new(&index).search(&query);
    log::info!("Ranked {} documents", results.len());

    write_ranking(io::stdout().lock(), &results).context("Failed to write results")?;
    Ok(())
}
