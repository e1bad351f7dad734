//! Domain layer unit tests
//!
//! Tests for entities, the selection and planning rules, and link rules.

use proptest::prelude::*;
use rstest::*;
use site_assets::domain::entities::{DerivationOutcome, LinkFinding, SkipReason};
use site_assets::domain::services::{
    PathDecision, SelectionRules, SourceDecision, TargetDecision, TargetSkip, attainable_targets,
    candidate_paths, classify_source, classify_target, derivative_path, is_external_or_ignored,
    normalize_target, resolve_target,
};
use site_assets::domain::services::link_rules::LinkExtractor;
use std::path::{Path, PathBuf};

// ============================================================================
// SkipReason Tests
// ============================================================================

#[rstest]
#[case(SkipReason::WouldUpscale, "no_upscale", "source smaller than target (no upscale)")]
#[case(SkipReason::OutputAlreadyExists, "already_exists", "already exists")]
#[case(
    SkipReason::BelowMinimumWidth { width: 800, minimum: 1280 },
    "source_width_800_below_1280",
    "source width 800 below 1280"
)]
#[case(
    SkipReason::WidthUnreadable { error: None },
    "metadata_missing_width",
    "missing width metadata"
)]
#[case(
    SkipReason::WidthUnreadable { error: Some("bad header".into()) },
    "metadata_read_failed: bad header",
    "unreadable (bad header)"
)]
fn test_skip_reason_wording(
    #[case] reason: SkipReason,
    #[case] detailed: &str,
    #[case] flat: &str,
) {
    assert_eq!(reason.to_string(), detailed);
    assert_eq!(reason.describe(), flat);
}

#[rstest]
fn test_outcome_accessors() {
    let outcome = DerivationOutcome::Skipped {
        source: PathBuf::from("a.jpg"),
        target: Some(2560),
        reason: SkipReason::WouldUpscale,
    };
    assert_eq!(outcome.source(), Path::new("a.jpg"));
    assert_eq!(outcome.target(), Some(2560));
    assert!(!outcome.is_generated());
    assert_eq!(outcome.skip_reason(), Some(&SkipReason::WouldUpscale));
}

#[rstest]
fn test_link_finding_broken_when_missing() {
    let finding = LinkFinding::new(
        PathBuf::from("/site/index.html"),
        "missing.png".into(),
        PathBuf::from("/site/missing.png"),
        false,
    );
    assert!(finding.is_broken());
    assert_eq!(finding.link(), "missing.png");
}

// ============================================================================
// Selection Tests
// ============================================================================

#[fixture]
fn photos() -> SelectionRules {
    SelectionRules::photos()
}

#[rstest]
#[case("photo.jpg", PathDecision::Source)]
#[case("photo.JPG", PathDecision::Source)]
#[case("banner.png", PathDecision::Source)]
#[case("hero-1280.jpg", PathDecision::Excluded(SkipReason::PreSizedDerivative))]
#[case("hero-2560.png", PathDecision::Excluded(SkipReason::PreSizedDerivative))]
#[case("hero-1600.jpeg", PathDecision::Excluded(SkipReason::PreSizedDerivative))]
#[case("hero-1000.jpg", PathDecision::Source)]
#[case("photo-960.avif", PathDecision::Ignored)]
#[case("notes.txt", PathDecision::Ignored)]
#[case("README", PathDecision::Ignored)]
fn test_classify_file(photos: SelectionRules, #[case] name: &str, #[case] expected: PathDecision) {
    assert_eq!(photos.classify_file(name), expected);
}

#[rstest]
#[case("node_modules", "node_modules")]
#[case(".git", ".git")]
#[case("_stage1_backup", "assets/img/_stage1_backup")]
fn test_classify_dir_excluded(photos: SelectionRules, #[case] name: &str, #[case] relative: &str) {
    assert_eq!(
        photos.classify_dir(name, relative),
        PathDecision::Excluded(SkipReason::DirectoryExcluded)
    );
}

#[rstest]
fn test_jpeg_only_ignores_png() {
    let rules = SelectionRules::jpeg_only();
    assert_eq!(rules.classify_file("map.png"), PathDecision::Ignored);
    assert_eq!(rules.classify_file("camp.jpeg"), PathDecision::Source);
    assert_eq!(
        rules.classify_file("camp-1920.jpg"),
        PathDecision::Excluded(SkipReason::PreSizedDerivative)
    );
}

// ============================================================================
// Planner Tests
// ============================================================================

#[rstest]
fn test_classify_source_read_error() {
    assert_eq!(
        classify_source(Err("truncated".into()), Some(1280)),
        SourceDecision::Skip(SkipReason::WidthUnreadable {
            error: Some("truncated".into())
        })
    );
}

#[rstest]
fn test_classify_source_missing_width() {
    assert_eq!(
        classify_source(Ok(None), None),
        SourceDecision::Skip(SkipReason::WidthUnreadable { error: None })
    );
}

#[rstest]
fn test_classify_source_below_minimum() {
    assert_eq!(
        classify_source(Ok(Some(800)), Some(1280)),
        SourceDecision::Skip(SkipReason::BelowMinimumWidth {
            width: 800,
            minimum: 1280
        })
    );
    assert_eq!(classify_source(Ok(Some(800)), None), SourceDecision::Derive { width: 800 });
}

#[rstest]
#[case(2000, 960, false, TargetDecision::Derive)]
#[case(2000, 2560, false, TargetDecision::Skip(TargetSkip::WouldUpscale))]
#[case(2000, 1920, true, TargetDecision::Skip(TargetSkip::OutputAlreadyExists))]
#[case(1920, 1920, false, TargetDecision::Derive)]
fn test_classify_target(
    #[case] width: u32,
    #[case] target: u32,
    #[case] exists: bool,
    #[case] expected: TargetDecision,
) {
    assert_eq!(classify_target(width, target, exists), expected);
}

#[rstest]
fn test_photo_2000_attainable_targets() {
    let targets = [960, 1280, 1920, 2560];
    let got: Vec<u32> = attainable_targets(2000, &targets).collect();
    assert_eq!(got, vec![960, 1280, 1920]);
    assert_eq!(
        derivative_path(Path::new("img/photo.jpg"), 1920),
        PathBuf::from("img/photo-1920.avif")
    );
}

proptest! {
    #[test]
    fn prop_attainable_targets_never_exceed_width(
        width in 0u32..5000,
        targets in proptest::collection::vec(1u32..5000, 0..8),
    ) {
        let got: Vec<u32> = attainable_targets(width, &targets).collect();
        prop_assert!(got.iter().all(|t| *t <= width));
        prop_assert_eq!(got.len(), targets.iter().filter(|t| **t <= width).count());
        for t in &targets {
            let derive = classify_target(width, *t, false) == TargetDecision::Derive;
            prop_assert_eq!(derive, *t <= width);
        }
    }
}

// ============================================================================
// Link Rules Tests
// ============================================================================

#[rstest]
#[case("https://example.com/a.png")]
#[case("http://example.com")]
#[case("//cdn.example.com/x.js")]
#[case("mailto:info@example.com")]
#[case("tel:+39000")]
#[case("#top")]
#[case("data:image/png;base64,AAAA")]
#[case("")]
fn test_ignored_links(#[case] link: &str) {
    assert!(is_external_or_ignored(link));
}

#[rstest]
#[case("page.html?x=1#top", Some("page.html"))]
#[case("?only=query", None)]
#[case("/ItalianExperience/travel/", Some("/travel/"))]
#[case("/ItalianExperience", Some("/"))]
#[case("/ItalianExperienceX/a", Some("/ItalianExperienceX/a"))]
#[case("assets/img/a.png", Some("assets/img/a.png"))]
fn test_normalize_target(#[case] link: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        normalize_target(link, Some("/ItalianExperience")).as_deref(),
        expected
    );
}

#[rstest]
fn test_resolve_relative_and_absolute() {
    let root = Path::new("/site");
    let page = Path::new("/site/travel/index.html");
    assert_eq!(
        resolve_target(root, page, "../assets/a.png"),
        PathBuf::from("/site/assets/a.png")
    );
    assert_eq!(
        resolve_target(root, page, "/contact/"),
        PathBuf::from("/site/contact")
    );
}

#[rstest]
fn test_candidate_paths() {
    let [plain, html, index] = candidate_paths(Path::new("/site/about"));
    assert_eq!(plain, PathBuf::from("/site/about"));
    assert_eq!(html, PathBuf::from("/site/about.html"));
    assert_eq!(index, PathBuf::from("/site/about/index.html"));
}

#[rstest]
fn test_extractor_skips_single_quoted_values() {
    let extractor = LinkExtractor::new().unwrap();
    let html = r#"<a href='single.html'></a><img src=" spaced.png ">"#;
    let links: Vec<&str> = extractor.extract(html).collect();
    assert_eq!(links, vec!["spaced.png"]);
}

const SCHEMES: [&str; 6] = ["http://", "https://", "mailto:", "tel:", "data:", "//"];

proptest! {
    #[test]
    fn prop_excluded_schemes_are_always_ignored(
        scheme in proptest::sample::select(SCHEMES.to_vec()),
        rest in "[a-z0-9./]{0,20}",
    ) {
        let link = format!("{scheme}{rest}");
        prop_assert!(is_external_or_ignored(&link));
    }
}
