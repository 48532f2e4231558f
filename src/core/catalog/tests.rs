use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;

use super::*;
use crate::core::decode::CsvDecoder;
use crate::models::{MediaType, Rating};

fn movie(title: &str, year: i16, rating: Rating) -> Movie {
    Movie::new(title, "", ["Someone"], year, rating, MediaType::Dvd)
}

fn titles(movies: &[Arc<Movie>]) -> Vec<&str> {
    movies.iter().map(|m| m.title()).collect()
}

fn scenario() -> Catalog {
    let catalog = Catalog::new();
    catalog.add_movies([
        movie("Alpha", 1990, Rating::PG),
        movie("Beta", 1985, Rating::R),
        movie("Gamma", 1990, Rating::G),
    ]);
    catalog
}

#[test]
fn add_movies_preserves_order_and_duplicates() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());

    assert_eq!(catalog.add_movies([movie("A", 2000, Rating::G)]), 1);
    assert_eq!(
        catalog.add_movies(vec![movie("B", 2001, Rating::G), movie("A", 2000, Rating::G)]),
        2
    );
    assert_eq!(catalog.add_movies(Vec::new()), 0);

    assert_eq!(titles(&catalog.get_movies()), vec!["A", "B", "A"]);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn scenario_sort_and_filter() {
    let catalog = scenario();
    assert_eq!(
        titles(&catalog.sort_movies(Field::Year, true)),
        vec!["Beta", "Alpha", "Gamma"]
    );
    assert_eq!(
        titles(&catalog.filter_movies(Field::Year, Operator::Equals, "1990")),
        vec!["Alpha", "Gamma"]
    );
}

#[test]
fn descending_sort_reverses_ties() {
    let catalog = scenario();
    assert_eq!(
        titles(&catalog.sort_movies(Field::Year, false)),
        vec!["Gamma", "Alpha", "Beta"]
    );
}

#[test]
fn queries_do_not_reorder_catalog() {
    let catalog = scenario();
    let _ = catalog.sort_movies(Field::Title, false);
    let _ = catalog.filter_movies(Field::Rating, Operator::LessThan, "R");
    let _ = catalog.search_movies("a");
    assert_eq!(titles(&catalog.get_movies()), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn returned_vec_is_detached_from_catalog() {
    let catalog = scenario();
    let mut movies = catalog.get_movies();
    movies.clear();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn snapshot_is_unaffected_by_later_adds() {
    let catalog = scenario();
    let before = catalog.get_movies();
    catalog.add_movies([movie("Delta", 2001, Rating::NR)]);
    assert_eq!(before.len(), 3);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn rating_greater_than_uses_enum_order() {
    let catalog = Catalog::new();
    catalog.add_movies([
        movie("g", 2000, Rating::G),
        movie("pg", 2000, Rating::PG),
        movie("pg13", 2000, Rating::PG13),
        movie("r", 2000, Rating::R),
    ]);
    assert_eq!(
        titles(&catalog.filter_movies(Field::Rating, Operator::GreaterThan, "PG")),
        vec!["pg13", "r"]
    );
}

#[test]
fn search_is_case_insensitive_and_keeps_catalog_order() {
    let catalog = Catalog::new();
    catalog.add_movies([
        movie("STAR TREK", 1979, Rating::G),
        movie("Alien", 1979, Rating::R),
        movie("Star Wars", 1977, Rating::PG),
    ]);
    assert_eq!(titles(&catalog.search_movies("star")), vec!["STAR TREK", "Star Wars"]);
    assert_eq!(catalog.search_movies("").len(), 3);
    assert!(catalog.search_movies("predator").is_empty());
}

#[test]
fn filter_expr_matches_filter_movies() {
    let catalog = scenario();
    let expr: FilterExpr = "year = 1990".parse().unwrap();
    assert_eq!(
        catalog.filter_expr(&expr),
        catalog.filter_movies(Field::Year, Operator::Equals, "1990")
    );
}

#[test]
fn malformed_stream_leaves_catalog_unchanged() {
    let catalog = scenario();
    let input = r#"[{"title": "Delta", "year": 2001, "rating": "R", "media": "DVD"}, {"title": "#;

    let err = catalog.add_movies_from_reader(input.as_bytes()).unwrap_err();

    assert!(matches!(err, DecodeError::Json(_)));
    assert_eq!(titles(&catalog.get_movies()), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn reader_ingestion_appends_decoded_movies() {
    let catalog = scenario();
    let input = r#"[{"title": "Delta", "year": 2001, "rating": "R", "media": "DVD"}]"#;

    assert_eq!(catalog.add_movies_from_reader(Cursor::new(input)).unwrap(), 1);
    assert_eq!(titles(&catalog.get_movies()), vec!["Alpha", "Beta", "Gamma", "Delta"]);
}

#[test]
fn custom_decoder_is_used_for_streams() {
    let catalog = Catalog::with_decoder(Box::new(CsvDecoder));
    let input = "title,description,actors,year,rating,media\nHeat,,Al Pacino,1995,R,DVD\n";

    assert_eq!(catalog.add_movies_from_reader(input.as_bytes()).unwrap(), 1);
    assert_eq!(catalog.get_movies()[0].actors(), ["Al Pacino"]);
}

#[test]
fn path_ingestion_picks_decoder_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("shelf.csv");
    std::fs::write(
        &csv_path,
        "title,description,actors,year,rating,media\nHeat,,Al Pacino,1995,R,DVD\n",
    )
    .unwrap();
    let json_path = dir.path().join("shelf.json");
    std::fs::write(
        &json_path,
        r#"[{"title": "Alien", "year": 1979, "rating": "R", "media": "Blu-ray"}]"#,
    )
    .unwrap();

    let catalog = Catalog::new();
    assert_eq!(catalog.add_movies_from_path(&csv_path).unwrap(), 1);
    assert_eq!(catalog.add_movies_from_path(&json_path).unwrap(), 1);
    assert_eq!(titles(&catalog.get_movies()), vec!["Heat", "Alien"]);
}

#[test]
fn missing_file_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = scenario();

    let err = catalog
        .add_movies_from_path(dir.path().join("nope.json"))
        .unwrap_err();

    assert!(matches!(err, DecodeError::Open { .. }));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn concurrent_readers_see_consistent_snapshots() {
    let catalog = Arc::new(Catalog::new());

    thread::scope(|s| {
        let writer = Arc::clone(&catalog);
        s.spawn(move || {
            for year in 1900..1950 {
                writer.add_movies([movie("w", year, Rating::G), movie("w", year, Rating::G)]);
            }
        });
        for _ in 0..4 {
            let reader = Arc::clone(&catalog);
            s.spawn(move || {
                for _ in 0..50 {
                    // writes come in pairs, so a consistent snapshot is always even
                    assert_eq!(reader.get_movies().len() % 2, 0);
                    let sorted = reader.sort_movies(Field::Year, true);
                    assert!(sorted.windows(2).all(|w| w[0].year() <= w[1].year()));
                }
            });
        }
    });

    assert_eq!(catalog.len(), 100);
}
