use drishti_core::geo::{Bounds, Viewport};
use drishti_core::map::{MapSurface, RectangleStyle};
use drishti_core::tutorial::{ClientRect, HighlightTarget, RegionLocator};
use drishti_core::{DrishtiConfig, DrishtiError, MapController};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, Once};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[cfg(feature = "mock-time")]
pub use drishti_core::time::MockTimer;

static LOGGING: Once = Once::new();

/// Route `tracing` output through the test harness. Quiet unless `RUST_LOG`
/// asks for more.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("error"));
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Plain-text log lines collected by [`capture_logs`].
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut lines) => lines.extend_from_slice(buf),
            Err(poisoned) => poisoned.into_inner().extend_from_slice(buf),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber that keeps events at `level` or
/// above, and returns what they printed.
pub fn capture_logs(level: Level, f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let subscriber = fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(buffer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = match buffer.0.lock() {
        Ok(lines) => lines.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    String::from_utf8_lossy(&bytes).into_owned()
}

/// One call the controller made on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetView(Viewport),
    ZoomIn,
    ZoomOut,
    ShowRectangle { bounds: Bounds, color: &'static str },
    ClearRectangle,
    FitBounds { bounds: Bounds, padding_px: u32 },
    Crosshair(bool),
}

/// A [`MapSurface`] that only remembers what it was told.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub rectangles_shown: usize,
    pub crosshair: bool,
}

impl RecordingSurface {
    pub fn last_view(&self) -> Option<Viewport> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetView(viewport) => Some(*viewport),
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, viewport: Viewport) {
        self.calls.push(SurfaceCall::SetView(viewport));
    }

    fn zoom_in(&mut self) {
        self.calls.push(SurfaceCall::ZoomIn);
    }

    fn zoom_out(&mut self) {
        self.calls.push(SurfaceCall::ZoomOut);
    }

    fn show_rectangle(&mut self, bounds: &Bounds, style: &RectangleStyle) {
        self.rectangles_shown += 1;
        self.calls.push(SurfaceCall::ShowRectangle {
            bounds: *bounds,
            color: style.color,
        });
    }

    fn clear_rectangle(&mut self) {
        self.rectangles_shown = self.rectangles_shown.saturating_sub(1);
        self.calls.push(SurfaceCall::ClearRectangle);
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32) {
        self.calls.push(SurfaceCall::FitBounds {
            bounds: *bounds,
            padding_px,
        });
    }

    fn set_crosshair(&mut self, enabled: bool) {
        self.crosshair = enabled;
        self.calls.push(SurfaceCall::Crosshair(enabled));
    }
}

/// A controller over a fresh [`RecordingSurface`] with default settings.
pub fn recording_controller() -> MapController<RecordingSurface> {
    let config = DrishtiConfig::default();
    MapController::new(RecordingSurface::default(), config.area, config.map)
}

/// Regions keyed by selector and by whether the target asks for the matched
/// element's parent. Unknown keys are not on screen.
#[derive(Debug, Default)]
pub struct FixedLocator {
    regions: HashMap<(&'static str, bool), ClientRect>,
}

impl FixedLocator {
    /// `rect` is the box of the element matching `selector`.
    pub fn with(mut self, selector: &'static str, rect: ClientRect) -> Self {
        self.regions.insert((selector, false), rect);
        self
    }

    /// `rect` is the box of the parent of the element matching `selector`.
    pub fn with_parent(
        mut self,
        selector: &'static str,
        rect: ClientRect,
    ) -> Self {
        self.regions.insert((selector, true), rect);
        self
    }

    /// Every target in the tutorial table resolves to `rect`.
    pub fn everywhere(rect: ClientRect) -> Self {
        drishti_core::tutorial::STEPS
            .iter()
            .filter_map(|step| step.target)
            .fold(Self::default(), |locator, target| {
                if target.parent {
                    locator.with_parent(target.selector, rect)
                } else {
                    locator.with(target.selector, rect)
                }
            })
    }
}

impl RegionLocator for FixedLocator {
    fn locate(&self, target: &HighlightTarget) -> Option<ClientRect> {
        self.regions.get(&(target.selector, target.parent)).copied()
    }
}

pub fn rect(top: f64, left: f64, width: f64, height: f64) -> ClientRect {
    ClientRect {
        top,
        left,
        width,
        height,
    }
}

pub fn assert_rejected<T: std::fmt::Debug>(
    result: Result<T, DrishtiError>,
    expected: DrishtiError,
) {
    match result {
        Err(error) => assert_eq!(error, expected),
        Ok(value) => panic!("Expected {expected:?}, got Ok({value:?})"),
    }
}
