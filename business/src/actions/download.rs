//! Download action: fetch the PNG and hand it to a platform sink.
//!
//! Sinks own the "materialize as a file" step. Whatever temporary resource a
//! sink allocates (a reserved name and its `.part` file natively, an object URL
//! in the browser) is released by a drop guard, so it never outlives a single
//! `save` call.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::{ActionReport, ActionResult};
use crate::error::{ActionError, ActionKind};
use crate::http::Client;

/// A file produced by a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    /// Full path when the sink knows where the file landed.
    pub location: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("platform download failed: {0}")]
    Platform(String),
    #[error("no free file name for {0}")]
    NoFreeName(String),
}

/// Turns downloaded bytes into a user-visible file.
pub trait DownloadSink: Send + Sync {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError>;
}

/// `qrcode-{unix_millis}.png`
pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("qrcode-{}.png", now.timestamp_millis())
}

/// Fetches the image behind `url` and saves it through `sink`.
///
/// Non-2xx responses count as failures; nothing is written in that case.
pub async fn download_qr_code(url: &str, sink: &dyn DownloadSink) -> ActionResult {
    if url.is_empty() {
        return Err(ActionError::EmptyInput);
    }

    debug!("Downloading QR code from {url}");
    let response = Client::get(url)
        .header("Accept", "image/png")
        .send()
        .await
        .map_err(|err| {
            warn!("QR code request failed: {err}");
            ActionError::failed(ActionKind::Download, err)
        })?;

    if !response.is_success() {
        warn!("QR service returned status {}", response.status);
        return Err(ActionError::failed(
            ActionKind::Download,
            format!("unexpected status {}", response.status),
        ));
    }

    let file_name = download_file_name(Utc::now());
    let saved = sink.save(&file_name, &response.body).map_err(|err| {
        warn!("Saving {file_name} failed: {err}");
        ActionError::failed(ActionKind::Download, err)
    })?;

    info!(
        "Downloaded QR code: {} ({} bytes)",
        saved.file_name,
        response.body.len()
    );
    Ok(ActionReport::Downloaded(saved))
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::DirectorySink;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{self, Write as _};
    use std::path::{Path, PathBuf};

    use super::{DownloadError, DownloadSink, SavedFile};

    const MAX_NAME_ATTEMPTS: usize = 1000;

    /// Saves downloads into a directory, like a browser's download folder.
    #[derive(Debug, Clone)]
    pub struct DirectorySink {
        dir: PathBuf,
    }

    impl DirectorySink {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `name.png`, then `name (1).png`, `name (2).png`...
        fn candidates<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
            let (stem, ext) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
            std::iter::once(self.dir.join(file_name)).chain((1..).map(move |n| {
                if ext.is_empty() {
                    self.dir.join(format!("{stem} ({n})"))
                } else {
                    self.dir.join(format!("{stem} ({n}).{ext}"))
                }
            }))
        }

        /// Claims the first free name by creating an empty placeholder with
        /// `create_new`, so concurrent saves never pick the same target.
        fn reserve(&self, file_name: &str) -> Result<PartFile, DownloadError> {
            for target in self.candidates(file_name).take(MAX_NAME_ATTEMPTS) {
                match OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&target)
                {
                    Ok(_) => return Ok(PartFile::new(target)),
                    Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                    Err(source) => {
                        return Err(DownloadError::Io {
                            path: target,
                            source,
                        });
                    }
                }
            }
            Err(DownloadError::NoFreeName(file_name.to_owned()))
        }
    }

    impl DownloadSink for DirectorySink {
        fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError> {
            fs::create_dir_all(&self.dir).map_err(|source| DownloadError::Io {
                path: self.dir.clone(),
                source,
            })?;

            let part = self.reserve(file_name)?;
            let io_error = |source| DownloadError::Io {
                path: part.path().to_path_buf(),
                source,
            };
            let mut file = File::create(part.path()).map_err(io_error)?;
            file.write_all(bytes).map_err(io_error)?;
            drop(file);

            let target = part.commit()?;
            Ok(SavedFile {
                file_name: target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file_name.to_owned()),
                location: Some(target),
            })
        }
    }

    /// In-progress download: the reserved (empty) target plus `target.part`.
    /// Both are removed on drop unless committed.
    struct PartFile {
        target: PathBuf,
        path: PathBuf,
        committed: bool,
    }

    impl PartFile {
        fn new(target: PathBuf) -> Self {
            let mut name = target.file_name().unwrap_or_default().to_os_string();
            name.push(".part");
            Self {
                path: target.with_file_name(name),
                target,
                committed: false,
            }
        }

        fn path(&self) -> &Path {
            &self.path
        }

        /// Replaces the placeholder with the finished file.
        fn commit(mut self) -> Result<PathBuf, DownloadError> {
            fs::rename(&self.path, &self.target).map_err(|source| DownloadError::Io {
                path: self.target.clone(),
                source,
            })?;
            self.committed = true;
            Ok(std::mem::take(&mut self.target))
        }
    }

    impl Drop for PartFile {
        fn drop(&mut self) {
            if self.committed {
                return;
            }
            for path in [&self.path, &self.target] {
                if path.exists()
                    && let Err(err) = fs::remove_file(path)
                {
                    log::warn!("Failed to clean up {}: {err}", path.display());
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_save_writes_file() {
            let dir = tempfile::tempdir().expect("tempdir");
            let sink = DirectorySink::new(dir.path());

            let saved = sink.save("qrcode-1.png", b"png-bytes").expect("save");

            assert_eq!(saved.file_name, "qrcode-1.png");
            let location = saved.location.expect("directory sink knows the path");
            assert_eq!(fs::read(&location).expect("read back"), b"png-bytes");
        }

        #[test]
        fn test_save_leaves_no_part_file() {
            let dir = tempfile::tempdir().expect("tempdir");
            let sink = DirectorySink::new(dir.path());
            sink.save("qrcode-2.png", b"data").expect("save");

            let names: Vec<_> = fs::read_dir(dir.path())
                .expect("read_dir")
                .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
                .collect();
            assert_eq!(names, vec!["qrcode-2.png".to_owned()]);
        }

        #[test]
        fn test_save_does_not_clobber_existing_file() {
            let dir = tempfile::tempdir().expect("tempdir");
            let sink = DirectorySink::new(dir.path());

            sink.save("qrcode-3.png", b"first").expect("first save");
            let second = sink.save("qrcode-3.png", b"second").expect("second save");

            assert_eq!(second.file_name, "qrcode-3 (1).png");
            assert_eq!(
                fs::read(dir.path().join("qrcode-3.png")).expect("read first"),
                b"first"
            );
        }

        #[test]
        fn test_save_skips_name_reserved_by_download_in_flight() {
            let dir = tempfile::tempdir().expect("tempdir");
            let sink = DirectorySink::new(dir.path());
            let in_flight = sink.reserve("qrcode-5.png").expect("reserve");

            let saved = sink.save("qrcode-5.png", b"mine").expect("save");

            assert_eq!(saved.file_name, "qrcode-5 (1).png");
            assert!(dir.path().join("qrcode-5.png").exists());
            drop(in_flight);
            assert!(!dir.path().join("qrcode-5.png").exists());
        }

        #[test]
        fn test_concurrent_saves_of_same_name_keep_every_file() {
            let dir = tempfile::tempdir().expect("tempdir");
            let sink = DirectorySink::new(dir.path());

            let mut saved: Vec<Vec<u8>> = std::thread::scope(|scope| {
                let handles: Vec<_> = (0..8u8)
                    .map(|i| {
                        let sink = &sink;
                        scope.spawn(move || sink.save("qrcode-6.png", &[i]).expect("save"))
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().expect("join"))
                    .map(|file| fs::read(file.location.expect("location")).expect("read"))
                    .collect()
            });
            saved.sort();

            assert_eq!(saved, (0..8u8).map(|i| vec![i]).collect::<Vec<_>>());
            let names: Vec<_> = fs::read_dir(dir.path())
                .expect("read_dir")
                .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
                .collect();
            assert_eq!(names.len(), 8);
            assert!(names.iter().all(|n| !n.ends_with(".part")));
        }

        #[test]
        fn test_save_creates_missing_directory() {
            let dir = tempfile::tempdir().expect("tempdir");
            let nested = dir.path().join("a").join("b");
            let sink = DirectorySink::new(&nested);

            sink.save("qrcode-4.png", b"x").expect("save");
            assert!(nested.join("qrcode-4.png").exists());
        }

        #[test]
        fn test_uncommitted_part_file_is_removed() {
            let dir = tempfile::tempdir().expect("tempdir");
            let target = dir.path().join("orphan.png");
            fs::write(&target, b"").expect("write placeholder");
            let part = PartFile::new(target.clone());
            fs::write(part.path(), b"partial").expect("write part");
            let part_path = part.path().to_path_buf();

            drop(part);
            assert!(!part_path.exists());
            assert!(!target.exists());
        }
    }
}
