use gigtape::manifest::Manifest;
use gigtape::performance;
use std::fs;
use tempfile::TempDir;

const FESTIVAL_MANIFEST: &str = r#"defaults:
  track_num: null
  filepath: null
  title: null
  artist: null
  album: Breakaway Festival
  genre: Live
  cover: cover.jpg
  date: 2023-10-13
  year: null
  start: null
  stop: null
  recording: audience
  resolution: 1920x1080
  bitrate: 320k
  long_title: "{artist} - {album} - {date}"
  output_dirpath: "{manifest_dirpath}/{album_safe}/{artist_safe}"
  video_filename: "{track_num} - {artist_safe} - {title_safe}.mp4"
  audio_filename: "{track_num} - {artist_safe} - {title_safe}.mp3"
performances:
  - artist: Night/Tales
    title: Opening Set
    filepath: raw/clip-001.mp4
  - artist: Moon Racer
    title: Headline Set
    filepath: raw/clip-002.mp4
    track_num: 7
"#;

#[test]
fn test_full_pipeline_from_one_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("festival.yaml");
    fs::write(&manifest_path, FESTIVAL_MANIFEST).unwrap();

    let manifest = Manifest::load(&manifest_path).unwrap();
    assert!(manifest.problems.is_empty());
    assert_eq!(
        manifest.defaults.get("manifest_basename"),
        Some("festival.yaml")
    );
    assert_eq!(manifest.defaults.get("manifest_filename"), Some("festival"));

    let mut performances =
        performance::resolve_all(&manifest.defaults, &manifest.performances);
    assert_eq!(performances.len(), 2);

    let first = &mut performances[0];
    assert_eq!(first.get("album"), Some("Breakaway Festival"));
    assert_eq!(first.get("year"), Some("2023"));
    assert_eq!(first.track_num(), Some(1));
    assert_eq!(
        first.video_filename().unwrap(),
        "1 - Night-Tales - Opening_Set.mp4"
    );
    assert_eq!(
        first.long_title().unwrap(),
        "Night/Tales - Breakaway Festival - 2023-10-13"
    );
    let dirpath = first.output_dirpath().unwrap();
    assert!(dirpath.ends_with("/Breakaway_Festival/Night-Tales"), "{dirpath}");
    assert_eq!(first.problems(), Vec::<String>::new());

    let second = &mut performances[1];
    assert_eq!(second.track_num(), Some(7));
    assert_eq!(
        second.audio_filename().unwrap(),
        "7 - Moon_Racer - Headline_Set.mp3"
    );
}

#[test]
fn test_combining_manifests_across_files() {
    let temp_dir = TempDir::new().unwrap();

    let day1 = temp_dir.path().join("day1.yaml");
    fs::write(
        &day1,
        "defaults:\n  album: Breakaway Festival\n  genre: Live\nperformances:\n  - title: Friday Opener\n",
    )
    .unwrap();

    let day2 = temp_dir.path().join("day2.yaml");
    fs::write(
        &day2,
        "defaults:\n  genre: Electronic\nperformances:\n  - title: Saturday Opener\n  - title: Saturday Closer\n",
    )
    .unwrap();

    let combined = Manifest::combine(vec![
        Manifest::load(&day1).unwrap(),
        Manifest::load(&day2).unwrap(),
    ]);

    // later defaults overlay earlier ones; performances concatenate
    assert_eq!(combined.defaults.get("album"), Some("Breakaway Festival"));
    assert_eq!(combined.defaults.get("genre"), Some("Electronic"));
    assert_eq!(combined.defaults.get("manifest_filename"), Some("day2"));
    assert_eq!(combined.performances.len(), 3);

    let performances =
        performance::resolve_all(&combined.defaults, &combined.performances);
    let numbers: Vec<Option<u32>> = performances.iter().map(|p| p.track_num()).collect();
    assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_incomplete_metadata_fails_loudly() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("sparse.yaml");
    fs::write(
        &manifest_path,
        "defaults:\n  title: null\n  video_filename: \"{title_safe}.mp4\"\nperformances:\n  - title: Good Set\n  - [not, a, mapping]\n  - {}\n",
    )
    .unwrap();

    let manifest = Manifest::load(&manifest_path).unwrap();
    assert_eq!(manifest.performances.len(), 2);
    assert_eq!(manifest.problems.len(), 1);
    assert!(manifest.problems[0].contains("performance 1"));

    let mut performances =
        performance::resolve_all(&manifest.defaults, &manifest.performances);

    // the complete entry renders; the empty one fails, it does not blank out
    assert_eq!(
        performances[0].video_filename().unwrap(),
        "Good_Set.mp4"
    );
    assert!(performances[1].video_filename().is_err());

    let problems = performances[1].problems();
    assert!(problems.iter().any(|p| p == "missing title"));
    assert!(problems.iter().any(|p| p.starts_with("video_filename:")));
}
