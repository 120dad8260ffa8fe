//! Renders one `fmt::formatter` specialization per enum
//!
//! The generated `format` routes the value through the enum's existing
//! `operator<<`, so the formatted text always matches the stream output.

use handlebars::Handlebars;
use serde_json::json;

use crate::{
    error::{GenerationError, Result},
    models::{CanonicalEnumList, EnumTypeName, FormatterFragment},
};

const FORMATTER_TEMPLATE_NAME: &str = "formatter";
const FORMATTER_TEMPLATE: &str = include_str!("../templates/formatter.hbs");

/// Renders formatter fragments for a fixed namespace
pub struct FormatterEmitter {
    registry: Handlebars<'static>,
    namespace: String,
}

impl FormatterEmitter {
    /// Create an emitter qualifying enums with `namespace`
    ///
    /// An empty namespace leaves enum names unqualified.
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        // Output is C++, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(FORMATTER_TEMPLATE_NAME, FORMATTER_TEMPLATE)
            .map_err(|e| GenerationError::Template(e.to_string()))?;

        Ok(Self {
            registry,
            namespace: namespace.into(),
        })
    }

    /// Namespace used to qualify enum names
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully qualified C++ name of the enum
    pub fn qualified_name(&self, enum_name: &EnumTypeName) -> String {
        if self.namespace.is_empty() {
            enum_name.to_string()
        } else {
            format!("{}::{}", self.namespace, enum_name)
        }
    }

    /// Render the specialization for a single enum
    pub fn emit(&self, enum_name: &EnumTypeName) -> Result<FormatterFragment> {
        let data = json!({ "qualified_name": self.qualified_name(enum_name) });
        let text = self
            .registry
            .render(FORMATTER_TEMPLATE_NAME, &data)
            .map_err(|e| GenerationError::Template(e.to_string()))?;

        Ok(FormatterFragment {
            enum_name: enum_name.clone(),
            text,
        })
    }

    /// Render specializations for every enum, preserving canonical order
    pub fn emit_all(&self, enums: &CanonicalEnumList) -> Result<Vec<FormatterFragment>> {
        enums.iter().map(|name| self.emit(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalizer::canonicalize;

    const COLOR_FRAGMENT: &str = r#"
template <>
struct fmt::formatter<wgpu::Color> {
    constexpr auto parse(format_parse_context& ctx) { return ctx.begin(); }

    template <typename FormatContext>
    auto format(wgpu::Color value, FormatContext& ctx) const {
        std::ostringstream oss;
        oss << value;
        return fmt::format_to(ctx.out(), "{}", oss.str());
    }
};
"#;

    #[test]
    fn test_emit_matches_expected_text() {
        let emitter = FormatterEmitter::new("wgpu").unwrap();
        let fragment = emitter.emit(&"Color".into()).unwrap();
        assert_eq!(fragment.text, COLOR_FRAGMENT);
        assert_eq!(fragment.enum_name.as_str(), "Color");
    }

    #[test]
    fn test_custom_namespace() {
        let emitter = FormatterEmitter::new("terra::gfx").unwrap();
        let fragment = emitter.emit(&"Shape".into()).unwrap();
        assert!(fragment.text.contains("struct fmt::formatter<terra::gfx::Shape> {"));
        assert!(fragment.text.contains("auto format(terra::gfx::Shape value, FormatContext& ctx) const {"));
    }

    #[test]
    fn test_empty_namespace_leaves_name_unqualified() {
        let emitter = FormatterEmitter::new("").unwrap();
        let fragment = emitter.emit(&"Shape".into()).unwrap();
        assert!(fragment.text.contains("struct fmt::formatter<Shape> {"));
        assert!(!fragment.text.contains("::Shape"));
    }

    #[test]
    fn test_no_html_escaping() {
        let emitter = FormatterEmitter::new("wgpu").unwrap();
        let fragment = emitter.emit(&"Color".into()).unwrap();
        assert!(fragment.text.contains("oss << value;"));
        assert!(fragment.text.contains("format_parse_context& ctx"));
        assert!(!fragment.text.contains("&amp;"));
        assert!(!fragment.text.contains("&lt;"));
    }

    #[test]
    fn test_emit_all_preserves_order() {
        let emitter = FormatterEmitter::new("wgpu").unwrap();
        let enums = canonicalize(["Shape", "Color"].into_iter().map(EnumTypeName::from));
        let fragments = emitter.emit_all(&enums).unwrap();
        let order: Vec<_> = fragments.iter().map(|f| f.enum_name.as_str()).collect();
        assert_eq!(order, vec!["Color", "Shape"]);
    }

    #[test]
    fn test_fragment_independent_of_other_emissions() {
        let emitter = FormatterEmitter::new("wgpu").unwrap();
        let alone = emitter.emit(&"Color".into()).unwrap();
        let _ = emitter.emit(&"Shape".into()).unwrap();
        let again = emitter.emit(&"Color".into()).unwrap();
        assert_eq!(alone, again);
    }
}
