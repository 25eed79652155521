//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole scaffolding workflow:
//! 1. Compute the module layout (pure)
//! 2. Refuse if the module directory exists and `force` is off
//! 3. Create directories parent-first, writing each file once its directory exists
//! 4. Build the site-config descriptor and write it last
//!
//! Nothing is rolled back: a failing step leaves earlier directories and
//! files in place and returns the error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProgressReporter, ScaffoldEvent},
    domain::{ModuleLayout, PlannedFile, Profile, ScaffoldRequest, SiteConfig, boilerplate},
    error::{WsaError, WsaResult},
};

/// What `generate` did.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldOutcome {
    /// Everything was written.
    Created(ScaffoldReport),
    /// The module directory already existed and `force` was off. No changes.
    Refused { module_dir: PathBuf },
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldReport {
    pub module: String,
    pub module_dir: PathBuf,
    pub profile: Profile,
    pub directories_created: Vec<PathBuf>,
    pub directories_skipped: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
    pub site_config: SiteConfig,
}

/// Dry-run preview of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub module_dir: PathBuf,
    /// `true` if the module directory exists; without `force` the run would
    /// be refused.
    pub module_dir_exists: bool,
    pub would_refuse: bool,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Describe what `generate` would do without touching disk.
    pub fn plan(&self, request: &ScaffoldRequest) -> ScaffoldPlan {
        let layout = ModuleLayout::for_request(request);
        let module_dir_exists = self.filesystem.is_dir(&layout.module_dir);
        ScaffoldPlan {
            would_refuse: module_dir_exists && !request.force(),
            module_dir_exists,
            directories: layout.planned_directories(request),
            files: layout.planned_files(request),
            module_dir: layout.module_dir,
        }
    }

    /// Scaffold a web-standard-app module.
    #[instrument(
        skip_all,
        fields(
            module = %request.name(),
            root = %request.root().display(),
            profile = %request.profile(),
        )
    )]
    pub fn generate(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> WsaResult<ScaffoldOutcome> {
        let layout = ModuleLayout::for_request(request);
        let name = request.name();
        let assets = request.profile().writes_assets();

        reporter.report(&ScaffoldEvent::Started {
            name,
            root: request.root(),
        });

        if self.filesystem.is_dir(&layout.module_dir) && !request.force() {
            info!(path = %layout.module_dir.display(), "Module directory exists, refusing");
            reporter.report(&ScaffoldEvent::AlreadyExists {
                module_dir: &layout.module_dir,
            });
            return Ok(ScaffoldOutcome::Refused {
                module_dir: layout.module_dir,
            });
        }

        let mut run = Run {
            filesystem: self.filesystem.as_ref(),
            reporter,
            created: Vec::new(),
            skipped: Vec::new(),
            written: Vec::new(),
        };

        run.ensure_dir(&layout.module_dir)?;

        if assets {
            run.write(&layout.init_file, boilerplate::PYTHON_PACKAGE_INIT)?;
            run.write(&layout.modules_file, &boilerplate::python_modules(name))?;
        }

        for dir in layout.template_dirs() {
            run.ensure_dir(dir)?;
        }
        run.write(&layout.template_file, &boilerplate::html_stub(name))?;

        for dir in layout.static_dirs() {
            run.ensure_dir(dir)?;
        }

        let mut site_config = SiteConfig::for_module(request.config_version(), name);

        if request.js() {
            run.ensure_dir(&layout.js_modules_dir)?;
            if assets {
                run.write(&layout.js_file, boilerplate::JS_MODULE_TEMPLATE)?;
            }
            site_config.set_js_path(name, request.site_modules_layout());
        }

        if request.css() {
            run.ensure_dir(&layout.css_modules_dir)?;
            if assets {
                run.write(&layout.css_file, &boilerplate::css_stub(name))?;
            }
            site_config.set_css_path(name, request.site_modules_layout());
        }

        let json = site_config.to_json_pretty().map_err(WsaError::Domain)?;
        run.write(&layout.site_config_file, &json)?;

        reporter.report(&ScaffoldEvent::Finished {
            module_dir: &layout.module_dir,
        });
        info!(
            directories = run.created.len(),
            files = run.written.len(),
            "Scaffold completed"
        );

        Ok(ScaffoldOutcome::Created(ScaffoldReport {
            module: name.to_string(),
            module_dir: layout.module_dir,
            profile: request.profile(),
            directories_created: run.created,
            directories_skipped: run.skipped,
            files_written: run.written,
            site_config,
        }))
    }
}

/// Per-call bookkeeping for `generate`.
struct Run<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn ProgressReporter,
    created: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
    written: Vec<PathBuf>,
}

impl Run<'_> {
    fn ensure_dir(&mut self, dir: &Path) -> WsaResult<()> {
        if self.filesystem.is_dir(dir) {
            debug!(path = %dir.display(), "Directory exists, skipping");
            self.reporter.report(&ScaffoldEvent::DirectoryFound(dir));
            self.skipped.push(dir.to_path_buf());
        } else {
            debug!(path = %dir.display(), "Creating directory");
            self.reporter.report(&ScaffoldEvent::CreatingDirectory(dir));
            self.filesystem.create_dir(dir)?;
            self.created.push(dir.to_path_buf());
        }
        Ok(())
    }

    fn write(&mut self, file: &Path, content: &str) -> WsaResult<()> {
        let dir = file.parent().unwrap_or(file);
        debug!(path = %file.display(), bytes = content.len(), "Writing file");
        self.reporter.report(&ScaffoldEvent::WritingFile { file, dir });
        self.filesystem.write_file(file, content)?;
        self.written.push(file.to_path_buf());
        Ok(())
    }
}
