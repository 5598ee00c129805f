//! Implementation of `mksdk create`.
//!
//! A run always performs the same steps in the same order:
//! 1. scaffold the bundle directories
//! 2. copy `headers/` into `System/usr/include`
//! 3. copy each `frameworks/<name>/` into `<name>.framework/Headers`
//! 4. write `SDKSettings.plist`
//! 5. write one `.tbd` stub per file in `symbols/`
//!
//! Missing source directories are skipped. Any I/O error aborts the run and
//! leaves whatever was already written in place.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::{SdkConfig, SdkLayout};
use crate::ops::materialize::{copy_framework, copy_headers, discover_frameworks, FrameworkCopy};
use crate::ops::scaffold::scaffold;
use crate::ops::settings::write_settings;
use crate::ops::stubs::{discover_symbol_files, generate_stub, StubLibrary};
use crate::util::shell::{Shell, Status};

/// Options for creating an SDK bundle.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory holding `headers/`, `frameworks/` and `symbols/`
    pub source_root: PathBuf,

    /// SDK bundle directory to create or refresh
    pub output_root: PathBuf,

    /// SDK metadata and target
    pub sdk: SdkConfig,
}

impl CreateOptions {
    pub fn headers_dir(&self) -> PathBuf {
        self.source_root.join("headers")
    }

    pub fn frameworks_dir(&self) -> PathBuf {
        self.source_root.join("frameworks")
    }

    pub fn symbols_dir(&self) -> PathBuf {
        self.source_root.join("symbols")
    }
}

/// What a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSummary {
    /// SDK bundle root
    pub root: PathBuf,

    /// Header files copied, or `None` without a headers source
    pub headers: Option<usize>,

    /// Frameworks copied, in name order
    pub frameworks: Vec<FrameworkCopy>,

    /// Written `SDKSettings.plist`
    pub settings: PathBuf,

    /// Stubs written, in name order
    pub stubs: Vec<StubLibrary>,
}

/// Build (or rebuild) an SDK bundle.
pub fn create_sdk(opts: &CreateOptions, shell: &Shell) -> Result<CreateSummary> {
    opts.sdk.validate()?;

    let layout = SdkLayout::new(&opts.output_root);
    let span = shell.span(
        Status::Creating,
        format!("{} SDK at {}", opts.sdk.sdk_name, layout.root().display()),
    );

    scaffold(&layout)?;
    shell.json_event(&serde_json::json!({
        "reason": "scaffold",
        "root": layout.root(),
    }));

    let headers = materialize_headers(&opts.headers_dir(), &layout, shell)?;
    let frameworks = materialize_frameworks(&opts.frameworks_dir(), &layout, shell)?;

    shell.status(Status::Writing, layout.settings_path().display());
    let settings = write_settings(&opts.sdk, &layout)?;
    shell.json_event(&serde_json::json!({
        "reason": "settings-written",
        "path": settings,
    }));

    let stubs = generate_stubs(&opts.sdk, &opts.symbols_dir(), &layout, shell)?;

    let summary = CreateSummary {
        root: layout.root().to_path_buf(),
        headers,
        frameworks,
        settings,
        stubs,
    };

    shell.json_event(&serde_json::json!({
        "reason": "sdk-created",
        "sdk": opts.sdk.sdk_name,
        "summary": summary,
    }));
    span.finish(format!("`{}` SDK created", opts.sdk.sdk_name));

    Ok(summary)
}

fn materialize_headers(src: &Path, layout: &SdkLayout, shell: &Shell) -> Result<Option<usize>> {
    if !src.is_dir() {
        shell.verbose_status(Status::Skipped, format!("headers (no {})", src.display()));
        return Ok(None);
    }

    shell.status(Status::Copying, format!("headers from {}", src.display()));
    let copied = copy_headers(src, layout)?;
    if let Some(files) = copied {
        shell.json_event(&serde_json::json!({
            "reason": "headers-copied",
            "files": files,
        }));
    }
    Ok(copied)
}

fn materialize_frameworks(
    src: &Path,
    layout: &SdkLayout,
    shell: &Shell,
) -> Result<Vec<FrameworkCopy>> {
    let mut copied = Vec::new();
    for (name, path) in discover_frameworks(src)? {
        shell.status(Status::Copying, format!("framework `{}`", name));
        let copy = copy_framework(&name, &path, layout)?;
        shell.json_event(&serde_json::json!({
            "reason": "framework-copied",
            "framework": copy,
        }));
        copied.push(copy);
    }
    Ok(copied)
}

fn generate_stubs(
    sdk: &SdkConfig,
    src: &Path,
    layout: &SdkLayout,
    shell: &Shell,
) -> Result<Vec<StubLibrary>> {
    let files = discover_symbol_files(src)?;
    if files.is_empty() {
        shell.verbose_status(
            Status::Skipped,
            format!("stubs (no symbol lists in {})", src.display()),
        );
        return Ok(Vec::new());
    }

    let noun = if files.len() == 1 { "library" } else { "libraries" };
    shell.status(Status::Generating, format!("{} stub {}", files.len(), noun));

    let progress = shell.progress(files.len() as u64, "stubs");
    let mut stubs = Vec::with_capacity(files.len());
    for file in &files {
        let stub = generate_stub(sdk, file, layout)?;
        shell.verbose_status(
            Status::Created,
            format!("{} ({} symbols)", stub.path.display(), stub.symbols),
        );
        shell.json_event(&serde_json::json!({
            "reason": "stub-written",
            "stub": stub,
        }));
        stubs.push(stub);
        progress.inc(1);
    }
    progress.finish();

    Ok(stubs)
}
