//! Headless Chromium session management.
//!
//! A [`BrowserSession`] is an explicitly owned resource: the caller launches
//! it once, passes it by reference into each conversion, and closes it when
//! done. Launch options apply exactly at [`BrowserSession::launch`]; changing
//! them means launching a new session, never a silent no-op against a cached
//! global.

use std::path::{Path, PathBuf};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{Error, Result};

/// How to locate and launch the Chromium executable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Search the platform's known browser install locations instead of
    /// relying on chromiumoxide's own detection.
    pub use_system_browser: bool,
    /// Explicit executable path; takes precedence over everything else.
    pub executable: Option<PathBuf>,
}

/// Known system install locations, checked in order when
/// `use_system_browser` is set.
#[cfg(target_os = "macos")]
const SYSTEM_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];
#[cfg(target_os = "windows")]
const SYSTEM_LOCATIONS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];
#[cfg(all(unix, not(target_os = "macos")))]
const SYSTEM_LOCATIONS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
];

/// Resolve the executable once, before launch.
///
/// `Ok(None)` means "let chromiumoxide detect its default"; a configured but
/// missing executable fails here with [`Error::ExecutableNotFound`] instead of
/// surfacing as an opaque launch failure.
fn locate_executable(options: &BrowserOptions) -> Result<Option<PathBuf>> {
    if let Some(path) = &options.executable {
        if path.is_file() {
            return Ok(Some(path.clone()));
        }
        return Err(Error::ExecutableNotFound(format!(
            "no file at configured path `{}`",
            path.display()
        )));
    }
    if options.use_system_browser {
        for candidate in SYSTEM_LOCATIONS {
            if Path::new(candidate).is_file() {
                return Ok(Some(PathBuf::from(candidate)));
            }
        }
        return Err(Error::ExecutableNotFound(format!(
            "no system browser at any of: {}",
            SYSTEM_LOCATIONS.join(", ")
        )));
    }
    Ok(None)
}

/// A running headless Chromium instance shared by conversions.
///
/// Each conversion opens its own page against the session, so concurrent
/// conversions are isolated from each other; the session itself is the only
/// shared resource.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch headless Chromium.
    pub async fn launch(options: &BrowserOptions) -> Result<Self> {
        let executable = locate_executable(options)?;

        let mut builder = BrowserConfig::builder().no_sandbox();
        if let Some(path) = &executable {
            debug!(executable = %path.display(), "launching system chromium");
            builder = builder.chrome_executable(path);
        } else {
            debug!("launching chromium via default detection");
        }
        let config = builder.build().map_err(Error::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::BrowserLaunch(e.to_string()))?;

        // Drive the CDP event stream until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a fresh blank page scoped to one conversion.
    pub(crate) async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::PageLoad(e.to_string()))
    }

    /// Terminate the browser and join the event task. Shutdown errors are
    /// ignored; the process is done with the session either way.
    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.handler_task.await;
    }
}
