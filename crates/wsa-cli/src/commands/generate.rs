//! The default command: scaffold one module.
//!
//! Responsibility: merge CLI flags with configuration defaults into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No path or content rules live here.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use wsa_adapters::LocalFilesystem;
use wsa_core::{
    application::{ScaffoldOutcome, ScaffoldPlan, ScaffoldReport, ScaffoldService},
    domain::{ModuleName, Profile, ScaffoldRequest, SiteModulesLayout, TemplateVariant},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, ProfileArg},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// JSON document printed with `--output-format json`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonOutcome<'a> {
    Created {
        generated_at: DateTime<Utc>,
        #[serde(flatten)]
        report: &'a ScaffoldReport,
    },
    Refused {
        generated_at: DateTime<Utc>,
        module_dir: &'a Path,
    },
}

/// Execute the default scaffold command.
///
/// 1. Resolve name and directory (prompting if allowed)
/// 2. Merge flags over configuration defaults
/// 3. Early-exit with a preview if `--dry-run`
/// 4. Run the scaffold service against the local filesystem
/// 5. Render the outcome
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = resolve_request(args.request_flags(), config)?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    debug!(
        module = %request.name(),
        root = %request.root().display(),
        js = request.js(),
        css = request.css(),
        config_version = request.config_version(),
        template = %request.template(),
        profile = %request.profile(),
        "Request resolved"
    );

    if args.dry_run {
        let plan = service.plan(&request);
        return show_plan(&plan, output);
    }

    let reporter = output.reporter();
    let outcome = service.generate(&request, &reporter)?;

    match &outcome {
        ScaffoldOutcome::Created(report) => {
            info!(
                module = %report.module,
                files = report.files_written.len(),
                "Module created"
            );
            if output.format() == OutputFormat::Json {
                output.json(&JsonOutcome::Created {
                    generated_at: Utc::now(),
                    report,
                })?;
            }
        }
        ScaffoldOutcome::Refused { module_dir } => {
            info!(module_dir = %module_dir.display(), "Module directory exists, nothing done");
            if output.format() == OutputFormat::Json {
                output.json(&JsonOutcome::Refused {
                    generated_at: Utc::now(),
                    module_dir,
                })?;
            }
        }
    }

    Ok(())
}

/// Flag values the request is built from, separated from the mode switches
/// (`--dry-run`, `--yes`) that only steer this handler.
#[derive(Debug, Default)]
pub(crate) struct RequestFlags {
    pub dir: Option<std::path::PathBuf>,
    pub name: Option<String>,
    pub js: Option<bool>,
    pub css: Option<bool>,
    pub config_version: Option<i64>,
    pub template: Option<String>,
    pub force: bool,
    pub profile: Option<ProfileArg>,
    pub nested_site_modules: bool,
    pub interactive: bool,
}

impl GenerateArgs {
    fn request_flags(&self) -> RequestFlags {
        RequestFlags {
            dir: self.dir.clone(),
            name: self.name.clone(),
            js: self.js_flag(),
            css: self.css_flag(),
            config_version: self.config_version,
            template: self.template.clone(),
            force: self.force,
            profile: self.profile,
            nested_site_modules: self.nested_site_modules,
            interactive: prompt::can_prompt(self.yes),
        }
    }
}

/// Merge flags over configuration defaults. Flags always win.
pub(crate) fn resolve_request(flags: RequestFlags, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let defaults = &config.defaults;

    let name = prompt::module_name(flags.name, flags.interactive)?;
    let root = prompt::module_root(flags.dir, flags.interactive)?;

    let name = ModuleName::try_new(name).map_err(|e| CliError::Core(e.into()))?;
    let template = TemplateVariant::try_new(
        flags.template.unwrap_or_else(|| defaults.template.clone()),
    )
    .map_err(|e| CliError::Core(e.into()))?;

    let profile = flags.profile.map(Profile::from).unwrap_or(defaults.profile);
    let layout = if flags.nested_site_modules || defaults.nested_site_modules {
        SiteModulesLayout::Nested
    } else {
        SiteModulesLayout::Flat
    };

    Ok(ScaffoldRequest::new(root, name)
        .with_js(flags.js.unwrap_or(defaults.js))
        .with_css(flags.css.unwrap_or(defaults.css))
        .with_config_version(flags.config_version.unwrap_or(defaults.config_version))
        .with_template(template)
        .with_force(flags.force)
        .with_profile(profile)
        .with_site_modules_layout(layout))
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Assets => Profile::Assets,
            ProfileArg::Minimal => Profile::Minimal,
        }
    }
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create {}", plan.module_dir.display()))?;
    if plan.would_refuse {
        output.warning("Directory already exists; without --force nothing would be written")?;
        return Ok(());
    }

    output.header("Directories:")?;
    for dir in &plan.directories {
        output.print(&format!("  {}/", dir.display()))?;
    }
    output.header("Files:")?;
    for file in &plan.files {
        output.print(&format!("  {}", file.path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn flags(name: &str) -> RequestFlags {
        RequestFlags {
            dir: Some(PathBuf::from("/tmp/x")),
            name: Some(name.into()),
            ..RequestFlags::default()
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let req = resolve_request(flags("widget"), &AppConfig::default()).unwrap();
        assert!(req.js());
        assert!(req.css());
        assert_eq!(req.config_version(), 2);
        assert_eq!(req.template().as_str(), "primary");
        assert_eq!(req.profile(), Profile::Assets);
        assert_eq!(req.site_modules_layout(), SiteModulesLayout::Flat);
        assert!(!req.force());
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = AppConfig::default();
        cfg.defaults.template = "hero".into();
        cfg.defaults.css = false;

        let req = resolve_request(
            RequestFlags {
                js: Some(false),
                css: Some(true),
                config_version: Some(-1),
                template: Some("card".into()),
                profile: Some(ProfileArg::Minimal),
                nested_site_modules: true,
                force: true,
                ..flags("widget")
            },
            &cfg,
        )
        .unwrap();

        assert!(!req.js());
        assert!(req.css());
        assert_eq!(req.config_version(), -1);
        assert_eq!(req.template().as_str(), "card");
        assert_eq!(req.profile(), Profile::Minimal);
        assert_eq!(req.site_modules_layout(), SiteModulesLayout::Nested);
        assert!(req.force());
    }

    #[test]
    fn config_template_used_when_flag_absent() {
        let mut cfg = AppConfig::default();
        cfg.defaults.template = "hero".into();
        let req = resolve_request(flags("widget"), &cfg).unwrap();
        assert_eq!(req.template().as_str(), "hero");
    }

    #[test]
    fn illegal_name_is_user_error() {
        let err = resolve_request(flags("a/b"), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_name_is_user_error() {
        let err = resolve_request(
            RequestFlags {
                name: None,
                ..flags("unused")
            },
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::MissingOption { option: "name" }));
    }

    #[test]
    fn refused_json_is_tagged() {
        let value = serde_json::to_value(JsonOutcome::Refused {
            generated_at: Utc::now(),
            module_dir: Path::new("/tmp/x/widget"),
        })
        .unwrap();
        assert_eq!(value["status"], "refused");
        assert_eq!(value["module_dir"], "/tmp/x/widget");
    }
}
