use std::fs;

use rs_partials::{split, write_views, write_views_with_options, Error, Options, SplitResult};

#[test]
fn write_views_creates_index_and_partials() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("views");
    let result = split("<header><h1>T</h1></header><footer><p>bye</p></footer>").unwrap();

    let written = write_views(&result, &out).unwrap();

    assert_eq!(
        written,
        vec![
            out.join("index.ejs"),
            out.join("partials/footer.ejs"),
            out.join("partials/header.ejs"),
        ]
    );
    assert_eq!(fs::read_to_string(out.join("index.ejs")).unwrap(), result.main_html);
    assert_eq!(
        fs::read_to_string(out.join("partials/header.ejs")).unwrap(),
        "<header><h1>T</h1></header>"
    );
}

#[test]
fn write_views_uses_configured_partials_dir() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        partials_dir: "components".to_string(),
        ..Options::default()
    };
    let result = rs_partials::split_with_options("<header><h1>T</h1></header><footer>f</footer>", &options).unwrap();

    write_views_with_options(&result, dir.path(), &options).unwrap();

    assert!(dir.path().join("components/header.ejs").is_file());
    let index = fs::read_to_string(dir.path().join("index.ejs")).unwrap();
    assert!(index.contains("include('components/header')"));
}

#[test]
fn write_views_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.ejs"), "stale").unwrap();
    let result = SplitResult {
        main_html: "fresh".to_string(),
        ..SplitResult::default()
    };

    write_views(&result, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("index.ejs")).unwrap(), "fresh");
}

#[test]
fn write_views_rejects_non_slug_names() {
    let dir = tempfile::tempdir().unwrap();

    for bad in ["Header", "a/b", "", "trailing-", "two--dashes"] {
        let mut result = SplitResult::default();
        result.partials.insert(bad.to_string(), "x".to_string());

        let err = write_views(&result, dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidPartialName(ref name) if name == bad), "{bad:?}");
    }
}

#[test]
fn write_views_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = write_views(&SplitResult::default(), &blocker.join("views")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}
