//! End-to-end pipeline tests over real label-file corpora.

use std::collections::HashMap;
use std::path::Path;

use tagweave_core::{build_library, Config, SeedPolicy, TemplateLibrary};

fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

fn config_with_threshold(threshold: f32) -> Config {
    let mut config = Config::default();
    config.ingest.threshold = threshold;
    config.ingest.exclude_labels = vec![];
    config
}

/// Collect every label from the library's non-main sections.
fn output_labels(library: &TemplateLibrary) -> Vec<String> {
    library
        .sections()
        .iter()
        .filter(|s| s.name != "character_main")
        .flat_map(|s| s.lines.iter())
        .flat_map(|line| line.split(", ").map(|l| l.to_string()))
        .collect()
}

fn section_lines<'a>(library: &'a TemplateLibrary, name: &str) -> &'a [String] {
    &library
        .sections()
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("missing section {name}"))
        .lines
}

#[test]
fn scenario_a_identical_items_categorized() {
    let dir = tempfile::tempdir().unwrap();
    let content = "long_hair, blue_eyes, smile, school_uniform";
    write_corpus(
        dir.path(),
        &[("a.txt", content), ("b.txt", content), ("c.txt", content)],
    );

    let library = build_library(&config_with_threshold(0.0), dir.path()).unwrap();

    let face = section_lines(&library, "character_face");
    assert_eq!(face.len(), 1);
    assert!(face[0].contains("long_hair"));
    assert!(face[0].contains("blue_eyes"));

    let clothing = section_lines(&library, "clothing");
    assert_eq!(clothing, &["school_uniform".to_string()]);

    let emotion = section_lines(&library, "emotion");
    assert_eq!(emotion, &["smile".to_string()]);
}

#[test]
fn scenario_b_excluded_label_absent_from_output() {
    let dir = tempfile::tempdir().unwrap();
    let content = "pool, long_hair, smile";
    write_corpus(dir.path(), &[("a.txt", content), ("b.txt", content)]);

    let mut config = config_with_threshold(0.0);
    config.ingest.exclude_labels = vec!["pool".to_string()];

    let library = build_library(&config, dir.path()).unwrap();
    let text = library.to_wildcard();
    assert!(!text.contains("pool"), "excluded label leaked: {text}");
    assert!(text.contains("long_hair"));
}

#[test]
fn scenario_c_single_label_category_degenerate_group() {
    let dir = tempfile::tempdir().unwrap();
    // "monochrome" is the only style label in the corpus
    write_corpus(
        dir.path(),
        &[("a.txt", "monochrome, long_hair"), ("b.txt", "long_hair")],
    );

    let library = build_library(&config_with_threshold(0.0), dir.path()).unwrap();
    let style = section_lines(&library, "style");
    assert_eq!(style, &["monochrome".to_string()]);
}

#[test]
fn scenario_d_perfect_cooccurrence_pair_shares_group() {
    let dir = tempfile::tempdir().unwrap();
    // "black_hair" and "red_eyes" always appear together and never with the
    // other face labels; the face category is large enough to force the
    // greedy path (12 labels > max_group_size).
    let mut files: Vec<(String, String)> = Vec::new();
    for i in 0..4 {
        files.push((format!("pair{i}.txt"), "black_hair, red_eyes".to_string()));
    }
    let fillers = [
        "long_hair", "short_hair", "blue_eyes", "green_eyes", "ponytail", "braid", "bangs",
        "glasses", "ahoge", "sidelocks",
    ];
    for (i, pair) in fillers.chunks(2).enumerate() {
        let line = pair.join(", ");
        files.push((format!("fill{i}a.txt"), line.clone()));
        files.push((format!("fill{i}b.txt"), line));
    }
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    write_corpus(dir.path(), &refs);

    let mut config = config_with_threshold(0.0);
    config.synthesis.min_group_size = 2;
    config.synthesis.max_group_size = 4;

    let library = build_library(&config, dir.path()).unwrap();
    let face = section_lines(&library, "character_face");
    let pair_line = face
        .iter()
        .find(|line| line.contains("black_hair"))
        .expect("black_hair missing from face groups");
    assert!(pair_line.contains("red_eyes"));
}

#[test]
fn property_coverage_and_exclusivity() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("1.txt", "1girl, long_hair, blue_eyes, smile, dress, outdoors"),
            ("2.txt", "1girl, long_hair, frown, skirt, indoors, sitting"),
            ("3.txt", "2girls, short_hair, smile, school_uniform, standing"),
            ("4.txt", "1girl, ponytail, blush, sweater, classroom"),
            ("5.txt", "mystery_token, long_hair, smile"),
        ],
    );

    let library = build_library(&config_with_threshold(0.0), dir.path()).unwrap();
    let mut labels = output_labels(&library);
    labels.sort();

    // Every non-subject input label appears exactly once across all groups.
    let mut expected: Vec<String> = [
        "long_hair",
        "blue_eyes",
        "smile",
        "dress",
        "frown",
        "skirt",
        "indoors",
        "sitting",
        "short_hair",
        "school_uniform",
        "standing",
        "ponytail",
        "blush",
        "sweater",
        "classroom",
        "outdoors",
        "mystery_token",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected.sort();

    assert_eq!(labels, expected);
}

#[test]
fn property_size_bound() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = Vec::new();
    // 20 distinct clothing labels spread over items
    let clothing = [
        "dress", "skirt", "shirt", "pants", "school_uniform", "hoodie", "sweater", "jacket",
        "coat", "gloves", "boots", "socks", "scarf", "hat", "apron", "kimono", "blazer",
        "cardigan", "leotard", "pajamas",
    ];
    for (i, chunk) in clothing.chunks(4).enumerate() {
        files.push((format!("{i}.txt"), chunk.join(", ")));
    }
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    write_corpus(dir.path(), &refs);

    let mut config = config_with_threshold(0.0);
    config.synthesis.min_group_size = 2;
    config.synthesis.max_group_size = 5;

    let library = build_library(&config, dir.path()).unwrap();
    for line in section_lines(&library, "clothing") {
        let size = line.split(", ").count();
        assert!((1..=5).contains(&size), "group out of bounds: {line}");
    }
}

#[test]
fn property_deterministic_output() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("1.txt", "long_hair, blue_eyes, smile, dress"),
            ("2.txt", "short_hair, green_eyes, frown, skirt"),
            ("3.txt", "long_hair, smile, dress, outdoors"),
        ],
    );

    for policy in [SeedPolicy::Frequency, SeedPolicy::Random] {
        let mut config = config_with_threshold(0.0);
        config.synthesis.seed_policy = policy;
        config.synthesis.rng_seed = 7;

        let first = build_library(&config, dir.path()).unwrap().to_wildcard();
        let second = build_library(&config, dir.path()).unwrap().to_wildcard();
        assert_eq!(first, second, "non-deterministic under {policy:?}");
    }
}

#[test]
fn exclusion_round_trip_default_list() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[("1.txt", "watermark, artist name, long_hair, smile")],
    );

    // Default config carries the stock exclusion list
    let mut config = Config::default();
    config.ingest.threshold = 0.0;

    let library = build_library(&config, dir.path()).unwrap();
    let text = library.to_wildcard();
    assert!(!text.contains("watermark"));
    assert!(!text.contains("artist name"));
    assert!(text.contains("long_hair"));
}

#[test]
fn missing_input_directory_is_fatal() {
    let config = config_with_threshold(0.0);
    let err = build_library(&config, Path::new("/nonexistent/tagweave-input")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/tagweave-input"));
}

#[test]
fn empty_corpus_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), &[("1.txt", "smile: 0.05")]);

    let config = config_with_threshold(0.9);
    assert!(build_library(&config, dir.path()).is_err());
}

#[test]
fn multi_subject_archetype_emitted_when_observed() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("1.txt", "1girl, long_hair"),
            ("2.txt", "2girls, smile"),
        ],
    );

    let library = build_library(&config_with_threshold(0.0), dir.path()).unwrap();
    let main = section_lines(&library, "character_main");
    assert_eq!(main.len(), 2);
    assert!(main[0].starts_with("1girl, solo"));
    assert!(main[1].starts_with("2girls, multiple girls"));
}

#[test]
fn main_section_references_resolve() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), &[("1.txt", "long_hair, smile, dress")]);

    let library = build_library(&config_with_threshold(0.0), dir.path()).unwrap();
    let sections: HashMap<&str, ()> = library
        .sections()
        .iter()
        .map(|s| (s.name.as_str(), ()))
        .collect();

    // Every __name__ reference in character_main points at an emitted section
    for line in section_lines(&library, "character_main") {
        for token in line.split(", ") {
            if let Some(name) = token
                .strip_prefix("__")
                .and_then(|t| t.strip_suffix("__"))
            {
                assert!(sections.contains_key(name), "dangling reference {token}");
            }
        }
    }
}
