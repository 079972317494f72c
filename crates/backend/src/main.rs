pub mod domain;
pub mod shared;

use contracts::domain::a001_category::CategoryIndex;

use domain::a001_category::{repository, service};
use shared::{config, logger, search_query};

/// Usage: `backend [QUERY]`
///
/// Loads the category snapshot, logs a classification summary and, when a
/// query string is given, prints its normalized form for the search endpoint.
fn main() -> anyhow::Result<()> {
    logger::init()?;

    let config = config::load_config()?;
    let snapshot_path = config::get_snapshot_path(&config);
    tracing::info!("Loading category snapshot from {}", snapshot_path.display());

    let categories = repository::load_snapshot(&snapshot_path)?;
    let classifications = service::classify(&categories);
    let summary = service::summarize(&classifications);

    tracing::info!(
        "Classified {} categories: {:?}, unresolved {}, cyclic {}",
        summary.total,
        summary.by_type,
        summary.unresolved,
        summary.cyclic
    );

    if let Some(query) = std::env::args().nth(1) {
        let index = CategoryIndex::new(&categories);
        let mut filter = search_query::parse_query(&query, config.filters.strict)?;
        if search_query::infer_product_type(&mut filter, &index) {
            tracing::info!("Product type inferred from category: {:?}", filter.product_type);
        }
        tracing::info!("Filter branch: {}", filter.branch());
        println!("{}", search_query::build_query(&filter));
    }

    Ok(())
}
