//! Contents of the generated stub files.
//!
//! Substitution is literal: the module name is pasted in as-is, with no
//! escaping for HTML, CSS or Python.

use super::ModuleName;

/// Bundled JS module template, copied verbatim.
pub const JS_MODULE_TEMPLATE: &str = include_str!("../../assets/template.js");

/// Bundled `modules.py` template; `{name}` is replaced with the module name.
const PYTHON_MODULES_TEMPLATE: &str = include_str!("../../assets/modules.py");

/// Contents of the generated `__init__.py`.
pub const PYTHON_PACKAGE_INIT: &str = "# -*- coding: utf-8 -*-";

pub fn html_stub(name: &ModuleName) -> String {
    format!("<div class=\"{name}-container\"></div>")
}

pub fn css_stub(name: &ModuleName) -> String {
    format!(".{name}-container {{}}")
}

pub fn python_modules(name: &ModuleName) -> String {
    PYTHON_MODULES_TEMPLATE.replace("{name}", name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ModuleName {
        ModuleName::try_new(s).unwrap()
    }

    #[test]
    fn html_stub_is_exact() {
        assert_eq!(
            html_stub(&name("widget")),
            r#"<div class="widget-container"></div>"#
        );
    }

    #[test]
    fn html_stub_does_not_escape() {
        assert_eq!(
            html_stub(&name("a\"<b>")),
            r#"<div class="a"<b>-container"></div>"#
        );
    }

    #[test]
    fn css_stub_is_exact() {
        assert_eq!(css_stub(&name("widget")), ".widget-container {}");
    }

    #[test]
    fn python_modules_substitutes_every_placeholder() {
        let rendered = python_modules(&name("widget"));
        assert!(!rendered.contains("{name}"));
        assert!(rendered.contains("MODULE_NAME = \"widget\""));
    }

    #[test]
    fn js_template_has_no_placeholders() {
        assert!(!JS_MODULE_TEMPLATE.contains("{name}"));
        assert!(!JS_MODULE_TEMPLATE.is_empty());
    }
}
