use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DomainError, ModuleLayout, ModuleName, SiteModulesLayout};

/// The site-config descriptor written to `<name>-siteconfig.json`.
///
/// Built fresh for every run; `siteModules` keeps insertion order so the file
/// reads module name, then `path`, then `css`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub version: i64,
    pub site_modules: Map<String, Value>,
}

impl SiteConfig {
    const JS_KEY: &'static str = "path";
    const CSS_KEY: &'static str = "css";

    /// The default shape with `version` set and the module registered as an
    /// empty object.
    pub fn for_module(version: i64, name: &ModuleName) -> Self {
        let mut site_modules = Map::new();
        site_modules.insert(name.to_string(), Value::Object(Map::new()));
        Self {
            version,
            site_modules,
        }
    }

    /// Record the JS module reference (`"path": "modules/<name>"`).
    pub fn set_js_path(&mut self, name: &ModuleName, layout: SiteModulesLayout) {
        self.set_entry(name, layout, Self::JS_KEY);
    }

    /// Record the CSS module reference (`"css": "modules/<name>"`).
    pub fn set_css_path(&mut self, name: &ModuleName, layout: SiteModulesLayout) {
        self.set_entry(name, layout, Self::CSS_KEY);
    }

    fn set_entry(&mut self, name: &ModuleName, layout: SiteModulesLayout, key: &str) {
        let value = Value::String(ModuleLayout::asset_reference(name));
        match layout {
            SiteModulesLayout::Flat => {
                self.site_modules.insert(key.to_string(), value);
            }
            SiteModulesLayout::Nested => {
                let entry = self
                    .site_modules
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(obj) = entry {
                    obj.insert(key.to_string(), value);
                } else {
                    *entry = Value::Object(Map::from_iter([(key.to_string(), value)]));
                }
            }
        }
    }

    /// Two-space indented JSON with `,` / `: ` separators and no trailing
    /// newline.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::SiteConfigSerialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn widget() -> ModuleName {
        ModuleName::try_new("widget").unwrap()
    }

    #[test]
    fn fresh_config_registers_module_as_empty_object() {
        let cfg = SiteConfig::for_module(2, &widget());
        assert_eq!(cfg.version, 2);
        assert_eq!(cfg.site_modules.get("widget"), Some(&json!({})));
        assert_eq!(cfg.site_modules.len(), 1);
    }

    #[test]
    fn flat_layout_sets_top_level_keys() {
        let mut cfg = SiteConfig::for_module(3, &widget());
        cfg.set_js_path(&widget(), SiteModulesLayout::Flat);
        cfg.set_css_path(&widget(), SiteModulesLayout::Flat);

        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 3,
                "siteModules": {
                    "widget": {},
                    "path": "modules/widget",
                    "css": "modules/widget"
                }
            })
        );
    }

    #[test]
    fn nested_layout_places_keys_under_module() {
        let mut cfg = SiteConfig::for_module(2, &widget());
        cfg.set_js_path(&widget(), SiteModulesLayout::Nested);
        cfg.set_css_path(&widget(), SiteModulesLayout::Nested);
        assert_eq!(
            cfg.site_modules,
            *json!({"widget": {"path": "modules/widget", "css": "modules/widget"}})
                .as_object()
                .unwrap()
        );
    }

    #[test]
    fn pretty_output_uses_two_space_indent_and_preserves_order() {
        let mut cfg = SiteConfig::for_module(2, &widget());
        cfg.set_js_path(&widget(), SiteModulesLayout::Flat);
        let text = cfg.to_json_pretty().unwrap();
        assert_eq!(
            text,
            "{\n  \"version\": 2,\n  \"siteModules\": {\n    \"widget\": {},\n    \"path\": \"modules/widget\"\n  }\n}"
        );
    }

    #[test]
    fn module_named_path_is_overwritten_in_flat_layout() {
        // The flat format shares one namespace between module names and keys.
        let path = ModuleName::try_new("path").unwrap();
        let mut cfg = SiteConfig::for_module(2, &path);
        cfg.set_js_path(&path, SiteModulesLayout::Flat);
        assert_eq!(cfg.site_modules.get("path"), Some(&json!("modules/path")));
    }

    #[test]
    fn negative_versions_round_trip() {
        let cfg = SiteConfig::for_module(-5, &widget());
        let back: SiteConfig = serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back.version, -5);
    }

    #[test]
    fn non_ascii_names_are_written_as_utf8() {
        let name = ModuleName::try_new("ünï").unwrap();
        let text = SiteConfig::for_module(2, &name).to_json_pretty().unwrap();
        assert!(text.contains("\"ünï\": {}"));
        assert!(!text.contains("\\u"));
    }
}
