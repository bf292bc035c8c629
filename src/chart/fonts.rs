use once_cell::sync::OnceCell;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};

/// Family name every chart label is drawn with.
pub const CHART_FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, shipped with the crate for hosts without any usable TTF.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Where the registered chart font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Bundled,
}

static REGISTERED: OnceCell<Option<FontSource>> = OnceCell::new();

/// Registers a TTF under [`CHART_FONT_FAMILY`] once per process: `preferred`,
/// then the usual system locations, then the bundled font. Returns whether
/// text can be drawn. The first call decides; later `preferred` values are
/// ignored.
pub fn ensure_registered(preferred: Option<&Path>) -> bool {
    registered_source(preferred).is_some()
}

pub fn registered_source(preferred: Option<&Path>) -> Option<&'static FontSource> {
    REGISTERED
        .get_or_init(|| {
            let candidates = preferred
                .map(Path::to_path_buf)
                .into_iter()
                .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

            for path in candidates {
                if register_file(&path) {
                    log::info!("Chart font: {}", path.display());
                    return Some(FontSource::File(path));
                }
            }

            if register_bytes(BUNDLED_FONT) {
                log::info!("Chart font: bundled DejaVu Sans");
                return Some(FontSource::Bundled);
            }

            log::error!("❌ No usable TTF font, charts cannot be labelled");
            None
        })
        .as_ref()
}

fn register_file(path: &Path) -> bool {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    // plotters keeps a 'static reference. Only reached from the one-time init.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    let ok = register_bytes(bytes);
    if !ok {
        log::warn!("⚠️  Font {} is not a valid TTF", path.display());
    }
    ok
}

fn register_bytes(bytes: &'static [u8]) -> bool {
    register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes).is_ok()
}
