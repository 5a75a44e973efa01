//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `neo_core` linkage with a fixed two-object sample catalog.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `NEO_CATALOG_LOG_DIR` to an absolute path to also write core logs.

use neo_core::{
    create_filters, limit, CloseApproach, FilterOptions, NearEarthObject, NeoCatalog, NO_FILTERS,
};

const LOG_DIR_ENV: &str = "NEO_CATALOG_LOG_DIR";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = neo_core::init_logging(neo_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let catalog = sample_catalog();
    println!("neo_core version={}", neo_core::core_version());
    println!(
        "catalog neos={} approaches={} linked={}",
        catalog.neo_count(),
        catalog.approach_count(),
        catalog.linked_approach_count()
    );

    if let Some(eros) = catalog.get_by_name("Eros") {
        println!("{} approaches={}", eros.record(), eros.approaches().len());
    }

    for approach in limit(catalog.query(NO_FILTERS), Some(2)) {
        println!("{}", approach.record());
    }

    let options = FilterOptions {
        hazardous: Some(true),
        ..FilterOptions::default()
    };
    match create_filters(&options) {
        Ok(filters) => println!("hazardous approaches={}", catalog.query(&filters).count()),
        Err(err) => eprintln!("filter error: {err}"),
    }
}

fn sample_catalog() -> NeoCatalog {
    let neos = vec![
        NearEarthObject::new("433")
            .with_name("Eros")
            .with_diameter_km(16.84),
        NearEarthObject::new("99942")
            .with_name("Apophis")
            .with_diameter_km(0.37)
            .with_hazardous(true),
    ];
    let approaches = vec![
        // 1900-12-27 01:30 UTC
        CloseApproach::new("433", -2_177_879_400_000, 0.3149, 5.58),
        // 2029-04-13 21:26 UTC
        CloseApproach::new("99942", 1_870_810_000_000, 0.000_254, 7.42),
        CloseApproach::new("2020 QG", 1_597_622_400_000, 0.000_062, 12.33),
    ];
    NeoCatalog::new(neos, approaches)
}
