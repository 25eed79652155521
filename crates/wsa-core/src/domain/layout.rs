use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{ModuleName, ScaffoldRequest, TemplateVariant};

const MODULES: &str = "modules";

/// Every path a scaffold run may touch, rooted at `<dir>/<name>/`.
///
/// Pure path joining; building a layout never performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    pub module_dir: PathBuf,

    pub template_dir: PathBuf,
    pub template_modules_dir: PathBuf,
    pub template_module_name_dir: PathBuf,
    pub template_file: PathBuf,

    pub static_dir: PathBuf,
    pub css_dir: PathBuf,
    pub css_modules_dir: PathBuf,
    pub css_file: PathBuf,
    pub js_dir: PathBuf,
    pub js_modules_dir: PathBuf,
    pub js_file: PathBuf,

    pub site_config_dir: PathBuf,
    pub site_config_modules_dir: PathBuf,
    pub site_config_file: PathBuf,

    pub init_file: PathBuf,
    pub modules_file: PathBuf,
}

/// What a planned file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    PythonPackage,
    PythonModules,
    HtmlTemplate,
    Script,
    Stylesheet,
    SiteConfig,
}

/// A file a run would write, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub role: FileRole,
}

impl ModuleLayout {
    pub fn compute(root: &Path, name: &ModuleName, template: &TemplateVariant) -> Self {
        let name = name.as_str();
        let module_dir = root.join(name);

        let template_dir = module_dir.join("templates");
        let template_modules_dir = template_dir.join(MODULES);
        let template_module_name_dir = template_modules_dir.join(name);
        let template_file = template_module_name_dir.join(format!("{name}-{template}.html"));

        let static_dir = module_dir.join("static");
        let css_dir = static_dir.join("css");
        let css_modules_dir = css_dir.join(MODULES);
        let css_file = css_modules_dir.join(format!("{name}.css"));
        let js_dir = static_dir.join("js");
        let js_modules_dir = js_dir.join(MODULES);
        let js_file = js_modules_dir.join(format!("{name}.js"));

        let site_config_dir = js_dir.join("siteconfig");
        let site_config_modules_dir = site_config_dir.join(MODULES);
        let site_config_file = site_config_modules_dir.join(format!("{name}-siteconfig.json"));

        Self {
            init_file: module_dir.join("__init__.py"),
            modules_file: module_dir.join("modules.py"),
            module_dir,
            template_dir,
            template_modules_dir,
            template_module_name_dir,
            template_file,
            static_dir,
            css_dir,
            css_modules_dir,
            css_file,
            js_dir,
            js_modules_dir,
            js_file,
            site_config_dir,
            site_config_modules_dir,
            site_config_file,
        }
    }

    pub fn for_request(request: &ScaffoldRequest) -> Self {
        Self::compute(request.root(), request.name(), request.template())
    }

    /// Value stored in `siteModules` for the JS and CSS entries.
    pub fn asset_reference(name: &ModuleName) -> String {
        format!("{MODULES}/{name}")
    }

    /// Template directories, created parent-first after the module root.
    pub fn template_dirs(&self) -> [&Path; 3] {
        [
            &self.template_dir,
            &self.template_modules_dir,
            &self.template_module_name_dir,
        ]
    }

    /// Static and site-config directories, created parent-first.
    pub fn static_dirs(&self) -> [&Path; 5] {
        [
            &self.static_dir,
            &self.css_dir,
            &self.js_dir,
            &self.site_config_dir,
            &self.site_config_modules_dir,
        ]
    }

    /// All directories a request needs, in creation order.
    pub fn planned_directories(&self, request: &ScaffoldRequest) -> Vec<PathBuf> {
        let mut dirs = vec![self.module_dir.clone()];
        dirs.extend(self.template_dirs().iter().map(|p| p.to_path_buf()));
        dirs.extend(self.static_dirs().iter().map(|p| p.to_path_buf()));
        if request.js() {
            dirs.push(self.js_modules_dir.clone());
        }
        if request.css() {
            dirs.push(self.css_modules_dir.clone());
        }
        dirs
    }

    /// All files a request writes, in write order.
    pub fn planned_files(&self, request: &ScaffoldRequest) -> Vec<PlannedFile> {
        let assets = request.profile().writes_assets();
        let mut files = Vec::new();
        let mut push = |path: &Path, role| {
            files.push(PlannedFile {
                path: path.to_path_buf(),
                role,
            });
        };

        if assets {
            push(&self.init_file, FileRole::PythonPackage);
            push(&self.modules_file, FileRole::PythonModules);
        }
        push(&self.template_file, FileRole::HtmlTemplate);
        if assets && request.js() {
            push(&self.js_file, FileRole::Script);
        }
        if assets && request.css() {
            push(&self.css_file, FileRole::Stylesheet);
        }
        push(&self.site_config_file, FileRole::SiteConfig);
        files
    }
}
