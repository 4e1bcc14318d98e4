use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use qrgen_business::{
    BusinessConfig, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, ErrorCorrection, GenerationRequest,
    QrSize,
};

#[derive(Parser, Debug)]
#[command(name = "qrgen")]
#[command(about = "Generate QR codes through a remote image service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub request: RequestArgs,

    /// QR image service endpoint (overrides QR_SERVICE_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// What to encode and how it should look.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Text, URL or any data to encode. Piped stdin is used when omitted.
    #[arg(long, short = 't', global = true)]
    pub text: Option<String>,

    /// Image size in pixels, clamped to 100..=500 in steps of 10
    #[arg(long, short = 's', global = true, default_value_t = u32::from(QrSize::DEFAULT.px()))]
    pub size: u32,

    /// Error correction level: L, M, Q or H
    #[arg(long, short = 'e', global = true, default_value = "M")]
    pub ecc: ErrorCorrection,

    /// Foreground color as hex
    #[arg(long, global = true, default_value = DEFAULT_FOREGROUND)]
    pub fg: String,

    /// Background color as hex
    #[arg(long, global = true, default_value = DEFAULT_BACKGROUND)]
    pub bg: String,
}

impl RequestArgs {
    pub fn to_request(&self, payload: String) -> GenerationRequest {
        GenerationRequest::builder()
            .payload(payload)
            .size(QrSize::new(self.size))
            .error_correction(self.ecc)
            .foreground_color(self.fg.clone())
            .background_color(self.bg.clone())
            .build()
    }
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self) -> BusinessConfig {
        let mut config = BusinessConfig::from_env();
        if let Some(endpoint) = self.endpoint.as_ref().filter(|e| !e.trim().is_empty()) {
            config.qr_service_url = endpoint.clone();
        }
        if let Commands::Download { out: Some(dir) } = &self.command {
            config.download_dir = dir.clone();
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the QR image URL
    Url,
    /// Download the QR code as a PNG
    Download {
        /// Directory to save into (defaults to DOWNLOAD_DIR or the downloads folder)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// Copy the QR image URL to the clipboard
    Copy {
        /// On X11/Wayland, keep serving the URL for up to this many seconds so
        /// it can be pasted after qrgen exits (ends early once something else
        /// is copied; 0 disables)
        #[arg(long, value_name = "SECS", default_value_t = 10)]
        hold: u64,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
