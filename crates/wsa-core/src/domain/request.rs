use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::{ModuleName, TemplateVariant};

/// Which set of boilerplate files a run writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Python package stub plus templated JS and CSS files.
    #[default]
    Assets,
    /// Directories, the HTML stub and the site-config only.
    Minimal,
}

impl Profile {
    pub fn writes_assets(self) -> bool {
        matches!(self, Self::Assets)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assets => write!(f, "assets"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

/// Where the `path` / `css` entries go inside `siteModules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteModulesLayout {
    /// `path` and `css` are top-level keys next to the module name, which maps
    /// to an empty object. This is the format existing site builds consume.
    #[default]
    Flat,
    /// `path` and `css` live inside the module-name object.
    Nested,
}

/// Options for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    root: PathBuf,
    name: ModuleName,
    js: bool,
    css: bool,
    config_version: i64,
    template: TemplateVariant,
    force: bool,
    profile: Profile,
    site_modules_layout: SiteModulesLayout,
}

impl ScaffoldRequest {
    pub const DEFAULT_CONFIG_VERSION: i64 = 2;

    /// A request with every option at its default.
    pub fn new(root: impl Into<PathBuf>, name: ModuleName) -> Self {
        Self {
            root: root.into(),
            name,
            js: true,
            css: true,
            config_version: Self::DEFAULT_CONFIG_VERSION,
            template: TemplateVariant::default(),
            force: false,
            profile: Profile::default(),
            site_modules_layout: SiteModulesLayout::default(),
        }
    }

    pub fn with_js(mut self, js: bool) -> Self {
        self.js = js;
        self
    }

    pub fn with_css(mut self, css: bool) -> Self {
        self.css = css;
        self
    }

    pub fn with_config_version(mut self, version: i64) -> Self {
        self.config_version = version;
        self
    }

    pub fn with_template(mut self, template: TemplateVariant) -> Self {
        self.template = template;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_site_modules_layout(mut self, layout: SiteModulesLayout) -> Self {
        self.site_modules_layout = layout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn js(&self) -> bool {
        self.js
    }

    pub fn css(&self) -> bool {
        self.css
    }

    pub fn config_version(&self) -> i64 {
        self.config_version
    }

    pub fn template(&self) -> &TemplateVariant {
        &self.template
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn site_modules_layout(&self) -> SiteModulesLayout {
        self.site_modules_layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ModuleName {
        ModuleName::try_new("widget").unwrap()
    }

    #[test]
    fn defaults_match_documented_options() {
        let req = ScaffoldRequest::new("/tmp/x", widget());
        assert!(req.js());
        assert!(req.css());
        assert_eq!(req.config_version(), 2);
        assert_eq!(req.template().as_str(), "primary");
        assert!(!req.force());
        assert_eq!(req.profile(), Profile::Assets);
        assert_eq!(req.site_modules_layout(), SiteModulesLayout::Flat);
    }

    #[test]
    fn setters_chain() {
        let req = ScaffoldRequest::new("/tmp/x", widget())
            .with_js(false)
            .with_css(false)
            .with_config_version(-7)
            .with_force(true)
            .with_profile(Profile::Minimal);
        assert!(!req.js());
        assert!(!req.css());
        assert_eq!(req.config_version(), -7);
        assert!(req.force());
        assert_eq!(req.profile(), Profile::Minimal);
    }
}
