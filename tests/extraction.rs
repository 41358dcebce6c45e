use std::collections::HashSet;
use std::fs;
use std::path::Path;

use innkeeper::context::RunContext;
use innkeeper::io::layout::{self, HOTELS_FILE};
use innkeeper::pipelines::{Extraction, Pipeline};
use tempfile::tempdir;

fn write_file(root: &Path, city: &str, name: &str, content: &str) {
    let city = root.join(city);
    fs::create_dir_all(&city).unwrap();
    fs::write(city.join(name), content).unwrap();
}

fn run(src: &Path, dst: &Path, chunk_size: usize) -> innkeeper::pipelines::RunSummary {
    let ctx = RunContext::new(src.to_path_buf(), dst.to_path_buf(), chunk_size).unwrap();
    Extraction::new(ctx).run().unwrap()
}

/// Rows of a csv file, header excluded.
fn rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

/// A source tree with several cities and file kinds.
fn sample_tree(root: &Path) {
    write_file(
        root,
        "london",
        "grand_file",
        "The room was spacious and bright.\nOur room faced the river.\n\n",
    );
    write_file(
        root,
        "london",
        "the_savoy.csv",
        "id,comment,rating\n1,\"Great stay, clean room\",5\n2,meh,2\n",
    );
    write_file(
        root,
        "new-york-city",
        "hilton_new_york_city.txt",
        "LOUD TITLE LINE OF THE REVIEW FILE\n# exported by a scraper\nStaff were lovely.\nBreakfast was served until eleven every day.\nThe lobby smelled of fresh flowers and coffee.\n",
    );
    write_file(
        root,
        "reykjavik",
        "harbour-view",
        "A short one\nthen more\n\nA quiet place\nwith a view\n",
    );
    fs::create_dir_all(root.join("empty_city")).unwrap();
}

#[test_log::test]
fn grand_file() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_file(
        src.path(),
        "london",
        "grand_file",
        "The room was spacious and bright.\nOur room faced the river.\n\n",
    );

    let summary = run(src.path(), dst.path(), 500);
    assert_eq!(summary.nb_hotels, 1);
    assert_eq!(summary.nb_reviews, 2);
    assert_eq!(summary.nb_chunks, 1);

    assert_eq!(
        rows(&dst.path().join(HOTELS_FILE)),
        vec![vec!["1", "Grand File", "London", "UK"]]
    );
    assert_eq!(
        rows(&dst.path().join("reviews_chunk_1.csv")),
        vec![
            vec!["1", "1", "The room was spacious and bright."],
            vec!["2", "1", "Our room faced the river."],
        ]
    );

    let ctx = RunContext::new(src.path().to_path_buf(), dst.path().to_path_buf(), 500).unwrap();
    let extracted = Extraction::new(ctx).extract().unwrap();
    let numbers: Vec<usize> = extracted.reviews.iter().map(|r| r.line_number()).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn tabular_comment_column() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_file(
        src.path(),
        "london",
        "the_savoy.csv",
        "id,comment,rating\n1,\"Great stay, clean room\",5\n",
    );

    let summary = run(src.path(), dst.path(), 500);
    assert_eq!(summary.nb_reviews, 1);
    assert_eq!(
        rows(&dst.path().join(HOTELS_FILE)),
        vec![vec!["1", "The Savoy", "London", "UK"]]
    );
    assert_eq!(
        rows(&dst.path().join("reviews_chunk_1.csv")),
        vec![vec!["1", "1", "Great stay, clean room"]]
    );
}

#[test]
fn mixed_tree() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    sample_tree(src.path());

    let summary = run(src.path(), dst.path(), 500);
    assert!(summary.failed_hotels.is_empty());

    assert_eq!(
        rows(&dst.path().join(HOTELS_FILE)),
        vec![
            vec!["1", "Grand File", "London", "UK"],
            vec!["2", "The Savoy", "London", "UK"],
            vec!["3", "Hilton New York City", "New-York-City", "USA"],
            vec!["4", "Harbour View", "Reykjavik", "Unknown"],
        ]
    );

    let reviews: Vec<(String, String)> = rows(&dst.path().join("reviews_chunk_1.csv"))
        .into_iter()
        .map(|r| (r[1].clone(), r[2].clone()))
        .collect();
    let expected: Vec<(String, String)> = [
        ("1", "The room was spacious and bright."),
        ("1", "Our room faced the river."),
        ("2", "Great stay, clean room"),
        ("3", "Staff were lovely."),
        ("3", "Breakfast was served until eleven every day."),
        ("3", "The lobby smelled of fresh flowers and coffee."),
        ("4", "A short one\nthen more"),
        ("4", "A quiet place\nwith a view"),
    ]
    .iter()
    .map(|(h, t)| (h.to_string(), t.to_string()))
    .collect();
    assert_eq!(reviews, expected);
}

#[test]
fn line_mode_does_not_fall_through() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_file(
        src.path(),
        "chicago",
        "lakeside",
        "Nice room with a view.\n\nshort\nstill\n\nThe staff were helpful.\n",
    );

    let ctx = RunContext::new(src.path().to_path_buf(), dst.path().to_path_buf(), 10).unwrap();
    let extracted = Extraction::new(ctx).extract().unwrap();
    let got: Vec<(&str, usize)> = extracted
        .reviews
        .iter()
        .map(|r| (r.text(), r.line_number()))
        .collect();
    assert_eq!(
        got,
        vec![("Nice room with a view.", 1), ("The staff were helpful.", 6)]
    );
}

#[test]
fn determinism() {
    let src = tempdir().unwrap();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    sample_tree(src.path());

    run(src.path(), first.path(), 3);
    run(src.path(), second.path(), 3);

    let names: Vec<String> = fs::read_dir(first.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(!names.is_empty());
    for name in names {
        assert_eq!(
            fs::read(first.path().join(&name)).unwrap(),
            fs::read(second.path().join(&name)).unwrap(),
            "{} differs",
            name
        );
    }
}

#[test]
fn integrity_and_ordering() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    sample_tree(src.path());
    run(src.path(), dst.path(), 3);

    let hotel_ids: HashSet<String> = rows(&dst.path().join(HOTELS_FILE))
        .into_iter()
        .map(|r| r[0].clone())
        .collect();

    let mut previous = 0u64;
    for (_, path) in layout::list_chunks(dst.path()).unwrap() {
        for row in rows(&path) {
            let id: u64 = row[0].parse().unwrap();
            assert_eq!(id, previous + 1);
            previous = id;
            assert!(hotel_ids.contains(&row[1]));
        }
    }
    assert_eq!(previous, 8);
}

#[test]
fn chunk_boundaries() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    sample_tree(src.path());

    let summary = run(src.path(), dst.path(), 3);
    assert_eq!(summary.nb_reviews, 8);
    assert_eq!(summary.nb_chunks, 3);

    let sizes: Vec<usize> = layout::list_chunks(dst.path())
        .unwrap()
        .iter()
        .map(|(_, path)| rows(path).len())
        .collect();
    assert_eq!(sizes, vec![3, 3, 2]);

    // rerun with a bigger chunk size leaves no stale chunk behind
    let summary = run(src.path(), dst.path(), 4);
    assert_eq!(summary.nb_chunks, 2);
    assert_eq!(layout::list_chunks(dst.path()).unwrap().len(), 2);
}

#[test]
fn no_reviews_still_writes_hotels() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_file(src.path(), "montreal", "tiny", "short\n");

    let summary = run(src.path(), dst.path(), 500);
    assert_eq!(summary.nb_hotels, 1);
    assert_eq!(summary.nb_reviews, 0);
    assert_eq!(summary.nb_chunks, 0);
    assert_eq!(
        rows(&dst.path().join(HOTELS_FILE)),
        vec![vec!["1", "Tiny", "Montreal", "Canada"]]
    );
}

#[test]
fn configuration_errors() {
    let dst = tempdir().unwrap();
    let ctx = RunContext::new(
        dst.path().join("missing"),
        dst.path().join("out"),
        500,
    )
    .unwrap();
    assert!(Extraction::new(ctx).run().unwrap_err().is_config());
    assert!(!dst.path().join("out").exists());

    let src = tempdir().unwrap();
    fs::create_dir(src.path().join("empty_city")).unwrap();
    let ctx = RunContext::new(src.path().to_path_buf(), dst.path().to_path_buf(), 500).unwrap();
    assert!(Extraction::new(ctx).run().unwrap_err().is_config());

    assert!(RunContext::new(src.path().to_path_buf(), dst.path().to_path_buf(), 0)
        .unwrap_err()
        .is_config());
}
