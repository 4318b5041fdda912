use std::io::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use barchart_rs::api::{BarChartConfig, BarChartEngine};
use barchart_rs::core::Viewport;
use barchart_rs::error::{BarChartError, BarChartResult};
use barchart_rs::loader::{LoadError, load_tsv_path};
use barchart_rs::render::{RenderFrame, Renderer};

/// Renderer that counts calls through a shared handle, so tests can observe
/// whether a failed load produced any render side effects.
struct CountingRenderer {
    calls: Arc<AtomicUsize>,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> BarChartResult<()> {
        frame.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn write_fixture(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn loads_series_from_disk() {
    let fixture = write_fixture("name\tnumber\nalpha\t4\nbeta\t2\ngamma\t7\n");
    let points = load_tsv_path(fixture.path()).expect("valid fixture");
    assert_eq!(points.len(), 3);
    assert_eq!(points[2].name, "gamma");
    assert!((points[2].value - 7.0).abs() <= 1e-12);
}

#[test]
fn missing_file_is_an_io_error() {
    let error = load_tsv_path("/nonexistent/histogram_data.tsv").expect_err("missing file");
    assert!(matches!(error, LoadError::Io(_)));
}

#[test]
fn engine_builds_from_a_valid_fixture() {
    let fixture = write_fixture("name\tnumber\nalpha\t4\nbeta\t2\n");
    let calls = Arc::new(AtomicUsize::new(0));
    let renderer = CountingRenderer {
        calls: Arc::clone(&calls),
    };

    let config = BarChartConfig::new(Viewport::new(960, 500));
    let mut engine =
        BarChartEngine::from_tsv_path(renderer, config, fixture.path()).expect("engine from tsv");
    assert_eq!(engine.order(), vec!["alpha", "beta"]);
    assert_eq!(engine.value_domain(), (0.0, 4.0));

    engine.render().expect("render");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn load_failure_short_circuits_with_no_render_side_effects() {
    let fixture = write_fixture("name\tnumber\nalpha\tnot-a-number\n");
    let calls = Arc::new(AtomicUsize::new(0));
    let renderer = CountingRenderer {
        calls: Arc::clone(&calls),
    };

    let config = BarChartConfig::new(Viewport::new(960, 500));
    let error = BarChartEngine::from_tsv_path(renderer, config, fixture.path())
        .err()
        .expect("load must fail");

    assert!(matches!(error, BarChartError::Load(LoadError::Malformed(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn duplicate_names_in_the_file_are_rejected_at_series_init() {
    let fixture = write_fixture("name\tnumber\nalpha\t1\nalpha\t2\n");
    let calls = Arc::new(AtomicUsize::new(0));
    let renderer = CountingRenderer {
        calls: Arc::clone(&calls),
    };

    let config = BarChartConfig::new(Viewport::new(960, 500));
    let error = BarChartEngine::from_tsv_path(renderer, config, fixture.path())
        .err()
        .expect("duplicate names must fail");

    assert!(matches!(error, BarChartError::DuplicateName(name) if name == "alpha"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
