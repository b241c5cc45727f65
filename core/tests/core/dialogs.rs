use drishti_core::DrishtiError;
use drishti_core::search::{SearchSettings, SearchStatus, run_search};
use drishti_core::upload::{UploadKind, UploadSettings, UploadStatus, process_upload};
use std::time::Duration;
use test_helpers::{MockTimer, assert_rejected};

#[tokio::test]
async fn zip_upload_validates_then_succeeds_then_closes() -> anyhow::Result<()> {
    let timer = MockTimer::new();
    let mut statuses = Vec::new();

    let kind = process_upload(
        &timer,
        &UploadSettings::default(),
        "area.zip",
        |status| statuses.push(status),
    )
    .await?;

    assert_eq!(kind, UploadKind::Shapefile);
    assert_eq!(
        statuses,
        vec![
            UploadStatus::Validating,
            UploadStatus::ShapefileValidated,
            UploadStatus::Closed,
        ]
    );
    assert_eq!(
        timer.slept(),
        vec![Duration::from_millis(1500), Duration::from_millis(2000)]
    );
    assert_eq!(
        statuses[0].message(),
        "Validating Shapefile components..."
    );

    Ok(())
}

#[tokio::test]
async fn plain_upload_skips_validation() -> anyhow::Result<()> {
    let timer = MockTimer::new();
    let mut statuses = Vec::new();

    process_upload(
        &timer,
        &UploadSettings::default(),
        "Region.GeoJSON",
        |status| statuses.push(status),
    )
    .await?;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].message(), "\"Region.GeoJSON\" uploaded successfully!");
    assert_eq!(statuses[1], UploadStatus::Closed);
    assert_eq!(timer.total(), Duration::from_millis(2000));

    Ok(())
}

#[tokio::test]
async fn unsupported_extension_reports_nothing() {
    let timer = MockTimer::new();
    let mut statuses = Vec::new();

    let result = process_upload(
        &timer,
        &UploadSettings::default(),
        "notes.docx",
        |status| statuses.push(status),
    )
    .await;

    assert_rejected(result, DrishtiError::UnsupportedFileExtension);
    assert!(statuses.is_empty());
    assert!(timer.slept().is_empty());
}

#[tokio::test]
async fn search_lands_on_the_fixed_target() -> anyhow::Result<()> {
    let timer = MockTimer::new();
    let settings = SearchSettings::default();
    let mut statuses = Vec::new();

    let viewport =
        run_search(&timer, &settings, "Bengaluru", |s| statuses.push(s)).await?;

    assert_eq!(viewport, settings.target);
    assert_eq!(viewport.zoom, 10);
    assert_eq!(statuses[0].message(), "Searching for \"Bengaluru\"...");
    assert_eq!(
        statuses[1],
        SearchStatus::Found {
            query: "Bengaluru".into()
        }
    );
    assert_eq!(statuses[2], SearchStatus::Closed);
    assert_eq!(timer.total(), Duration::from_millis(2500));

    Ok(())
}

#[tokio::test]
async fn every_query_finds_the_same_place() -> anyhow::Result<()> {
    let timer = MockTimer::new();
    let settings = SearchSettings::default();

    let a = run_search(&timer, &settings, "Paris", |_| {}).await?;
    let b = run_search(&timer, &settings, "Lima", |_| {}).await?;
    assert_eq!(a, b);

    Ok(())
}

#[tokio::test]
async fn empty_search_is_rejected() {
    let timer = MockTimer::new();
    let result =
        run_search(&timer, &SearchSettings::default(), "", |_| {}).await;
    assert_rejected(result, DrishtiError::EmptySearchQuery);
    assert!(timer.slept().is_empty());
}
