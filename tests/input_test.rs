//! レビュー入力の統合テスト

use review_analysis_rust::input;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_load_text_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reviews.txt");
    std::fs::write(&path, "\u{feff}美味しかった！\n\n接客が遅い。\n").unwrap();

    let reviews = input::load_file(&path).unwrap();
    assert_eq!(reviews, vec!["美味しかった！", "接客が遅い。"]);
}

#[test]
fn test_load_text_file_with_invalid_utf8() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.txt");
    let mut bytes = "美味しい\n".as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice("まずい".as_bytes());
    std::fs::write(&path, bytes).unwrap();

    let reviews = input::load_file(&path).unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0], "美味しい");
    assert_eq!(reviews[2], "まずい");
}

#[test]
fn test_load_csv_picks_text_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reviews.csv");
    std::fs::write(
        &path,
        "id,review,stars\n1,パスタが美味しい,5\n2,,3\n3,\"店員が親切, また来たい\",4\n",
    )
    .unwrap();

    let reviews = input::load_file(&path).unwrap();
    assert_eq!(reviews, vec!["パスタが美味しい", "店員が親切, また来たい"]);
}

#[test]
fn test_scan_folder_sorted_and_filtered() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("b.txt"), "二件目").unwrap();
    std::fs::write(dir.path().join("a.txt"), "一件目").unwrap();
    std::fs::write(dir.path().join("notes.md"), "対象外").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("c.txt"), "サブフォルダ").unwrap();

    let files = input::scan_folder(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);

    let reviews = input::collect_reviews(&[dir.path().to_path_buf()], &[]).unwrap();
    assert_eq!(reviews, vec!["一件目", "二件目"]);
}

#[test]
fn test_collect_keeps_order_of_files_then_texts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("reviews.txt");
    std::fs::write(&file, "ファイル1\nファイル2").unwrap();

    let paths: Vec<PathBuf> = vec![file];
    let texts = vec!["直接1\n直接2".to_string()];
    let reviews = input::collect_reviews(&paths, &texts).unwrap();
    assert_eq!(reviews, vec!["ファイル1", "ファイル2", "直接1", "直接2"]);
}
