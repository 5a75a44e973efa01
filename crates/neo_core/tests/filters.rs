use neo_core::{
    create_filters, limit, ApproachFilter, ApproachRef, AttributeFilter, CalendarDate,
    CloseApproach, Comparison, FilterError, FilterOptions, NearEarthObject, NeoCatalog,
    NO_FILTERS,
};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;
const JAN_1_2020_MS: i64 = 1_577_836_800_000;

fn sample_catalog() -> NeoCatalog {
    let neos = vec![
        NearEarthObject::new("433").with_name("Eros").with_diameter_km(16.84),
        NearEarthObject::new("99942")
            .with_name("Apophis")
            .with_diameter_km(0.37)
            .with_hazardous(true),
        NearEarthObject::new("2020 AB"),
    ];
    let approaches = vec![
        CloseApproach::new("433", JAN_1_2020_MS + 10 * HOUR_MS, 0.31, 5.6),
        CloseApproach::new("unknown", JAN_1_2020_MS + DAY_MS, 0.02, 20.0),
        CloseApproach::new("99942", JAN_1_2020_MS + 3 * DAY_MS - 60_000, 0.0003, 7.4),
        CloseApproach::new("2020 AB", JAN_1_2020_MS + 3 * DAY_MS, 0.05, 12.0),
        CloseApproach::new("433", JAN_1_2020_MS + 4 * DAY_MS, 0.45, 4.1),
    ];
    NeoCatalog::new(neos, approaches)
}

fn matching_indices(catalog: &NeoCatalog, options: &FilterOptions) -> Vec<usize> {
    let filters = create_filters(options).unwrap();
    catalog
        .query(&filters)
        .map(|approach| approach.id().index())
        .collect()
}

#[test]
fn default_options_build_no_filters() {
    let catalog = sample_catalog();
    let filters = create_filters(&FilterOptions::default()).unwrap();

    assert!(filters.is_empty());
    assert_eq!(catalog.query(&filters).count(), 5);
}

#[test]
fn date_matches_whole_utc_day() {
    let catalog = sample_catalog();
    let options = FilterOptions {
        date: Some("2020-01-03".to_string()),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &options), vec![2]);
}

#[test]
fn start_and_end_dates_are_inclusive() {
    let catalog = sample_catalog();
    let options = FilterOptions {
        start_date: Some("2020-01-02".to_string()),
        end_date: Some("2020-01-04".to_string()),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &options), vec![1, 2, 3]);
}

#[test]
fn distance_and_velocity_bounds_are_inclusive() {
    let catalog = sample_catalog();
    let distance = FilterOptions {
        distance_min: Some(0.05),
        distance_max: Some(0.4),
        ..FilterOptions::default()
    };
    let velocity = FilterOptions {
        velocity_min: Some(5.0),
        velocity_max: Some(12.0),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &distance), vec![0, 3]);
    assert_eq!(matching_indices(&catalog, &velocity), vec![0, 2, 3]);
}

#[test]
fn diameter_bounds_skip_unknown_diameters_and_unlinked_approaches() {
    let catalog = sample_catalog();
    let large = FilterOptions {
        diameter_min: Some(1.0),
        ..FilterOptions::default()
    };
    let small = FilterOptions {
        diameter_max: Some(1.0),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &large), vec![0, 4]);
    assert_eq!(matching_indices(&catalog, &small), vec![2]);
}

#[test]
fn hazardous_flag_matches_linked_objects_only() {
    let catalog = sample_catalog();
    let hazardous = FilterOptions {
        hazardous: Some(true),
        ..FilterOptions::default()
    };
    let harmless = FilterOptions {
        hazardous: Some(false),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &hazardous), vec![2]);
    assert_eq!(matching_indices(&catalog, &harmless), vec![0, 3, 4]);
}

#[test]
fn combined_options_intersect() {
    let catalog = sample_catalog();
    let options = FilterOptions {
        start_date: Some("2020-01-01".to_string()),
        distance_max: Some(0.1),
        hazardous: Some(false),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &options), vec![3]);
}

#[test]
fn malformed_date_reports_the_option() {
    let options = FilterOptions {
        start_date: Some("01/02/2020".to_string()),
        ..FilterOptions::default()
    };

    let err = create_filters(&options).err().unwrap();
    assert!(matches!(
        err,
        FilterError::InvalidDate {
            option: "start_date",
            ..
        }
    ));
    assert!(err.to_string().contains("start_date"), "unexpected error: {err}");
}

#[test]
fn nan_bound_is_rejected() {
    let options = FilterOptions {
        velocity_max: Some(f64::NAN),
        ..FilterOptions::default()
    };

    let err = create_filters(&options).err().unwrap();
    assert!(matches!(
        err,
        FilterError::InvalidBound {
            option: "velocity_max",
            ..
        }
    ));
}

#[test]
fn options_deserialize_from_json() {
    let options: FilterOptions =
        serde_json::from_str(r#"{"date": "2020-01-03", "hazardous": true}"#).unwrap();

    assert_eq!(options.date.as_deref(), Some("2020-01-03"));
    assert_eq!(options.hazardous, Some(true));
    assert_eq!(options.distance_min, None);

    let unknown = serde_json::from_str::<FilterOptions>(r#"{"distance": 1.0}"#);
    assert!(unknown.is_err());
}

#[test]
fn attribute_filters_compose_with_custom_predicates() {
    let catalog = sample_catalog();
    let before_jan_3 = AttributeFilter::Date(
        Comparison::Lt,
        CalendarDate::parse("2020-01-03").unwrap(),
    );
    let filters: Vec<ApproachFilter> = vec![
        before_jan_3.into_filter(),
        Box::new(|approach: &ApproachRef<'_>| approach.designation != "unknown"),
    ];

    let matched: Vec<_> = catalog
        .query(&filters)
        .map(|approach| approach.id().index())
        .collect();
    assert_eq!(matched, vec![0]);
}

#[test]
fn limit_caps_only_positive_counts() {
    let catalog = sample_catalog();

    assert_eq!(limit(catalog.query(NO_FILTERS), Some(2)).count(), 2);
    assert_eq!(limit(catalog.query(NO_FILTERS), Some(10)).count(), 5);
    assert_eq!(limit(catalog.query(NO_FILTERS), Some(0)).count(), 5);
    assert_eq!(limit(catalog.query(NO_FILTERS), None).count(), 5);
}

#[test]
fn date_filters_skip_timestamps_outside_the_calendar() {
    let catalog = NeoCatalog::new(
        vec![NearEarthObject::new("433")],
        vec![
            CloseApproach::new("433", i64::MAX, 0.1, 5.0),
            CloseApproach::new("433", JAN_1_2020_MS, 0.2, 5.0),
            CloseApproach::new("433", i64::MIN, 0.3, 5.0),
        ],
    );
    let options = FilterOptions {
        start_date: Some("1970-01-01".to_string()),
        ..FilterOptions::default()
    };

    assert_eq!(matching_indices(&catalog, &options), vec![1]);
    assert_eq!(
        catalog.query(NO_FILTERS).next().unwrap().time_str(),
        format!("epoch_ms={}", i64::MAX)
    );
}
