//! The generation request: the snapshot of everything the user can edit.
//!
//! A [`GenerationRequest`] has no identity or lifecycle of its own. Front ends
//! keep one as their live form state and hand a shared reference to the URL
//! builder every frame; actions never see the request itself, only the URL
//! built from it at click time.

use std::fmt;
use std::str::FromStr;

use bon::Builder;

/// Default foreground (module) color.
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// QR error-correction level understood by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    /// Recovers ~7% of damaged codewords.
    L,
    /// Recovers ~15% of damaged codewords.
    #[default]
    M,
    /// Recovers ~25% of damaged codewords.
    Q,
    /// Recovers ~30% of damaged codewords.
    H,
}

impl ErrorCorrection {
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Single-letter code sent as the `ecc` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    /// Human-readable label used by the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::L => "Low (7%)",
            Self::M => "Medium (15%)",
            Self::Q => "Quartile (25%)",
            Self::H => "High (30%)",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error correction level `{0}`, expected one of L, M, Q, H")]
pub struct ParseErrorCorrectionError(String);

impl FromStr for ErrorCorrection {
    type Err = ParseErrorCorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::L),
            "m" | "medium" => Ok(Self::M),
            "q" | "quartile" => Ok(Self::Q),
            "h" | "high" => Ok(Self::H),
            _ => Err(ParseErrorCorrectionError(s.to_owned())),
        }
    }
}

/// Rendered edge length of the square QR image, in pixels.
///
/// Always inside `[MIN, MAX]` and a multiple of `STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QrSize(u16);

impl QrSize {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 500;
    pub const STEP: u16 = 10;
    pub const DEFAULT: Self = Self(200);

    /// Clamps `px` into range and snaps it to the nearest step.
    pub fn new(px: u32) -> Self {
        let clamped = px.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        let step = u32::from(Self::STEP);
        let snapped = (clamped + step / 2) / step * step;
        // `snapped` <= MAX because MAX is itself a multiple of STEP.
        Self(u16::try_from(snapped).unwrap_or(Self::MAX))
    }

    pub fn px(self) -> u16 {
        self.0
    }

    /// The `WxH` dimension string sent as the `size` query parameter.
    pub fn dimensions(self) -> String {
        format!("{0}x{0}", self.0)
    }
}

impl Default for QrSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for QrSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Everything needed to ask the remote service for one QR image.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct GenerationRequest {
    /// Text, URL or any data to encode. Blank means "nothing to generate".
    #[builder(into, default)]
    pub payload: String,
    #[builder(default)]
    pub size: QrSize,
    #[builder(default)]
    pub error_correction: ErrorCorrection,
    /// Hex color, usually `#rrggbb`.
    #[builder(into, default = DEFAULT_FOREGROUND.to_owned())]
    pub foreground_color: String,
    /// Hex color, usually `#rrggbb`.
    #[builder(into, default = DEFAULT_BACKGROUND.to_owned())]
    pub background_color: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GenerationRequest {
    /// Whether there is anything to generate.
    pub fn has_payload(&self) -> bool {
        !self.payload.trim().is_empty()
    }
}
