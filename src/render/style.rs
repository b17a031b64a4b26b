//! Style vocabulary passed to the emitter.

use serde::{Deserialize, Serialize};

use super::defaults;

/// One CSS class and its declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub class: String,
    pub declarations: String,
}

/// Classes and decoration sizes shared by every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub rules: Vec<StyleRule>,
    pub background: String,
    pub point_radius: f64,
    /// Offset of a vertex label from its point, `[dx, dy]` in pixels.
    pub label_offset: [f64; 2],
    pub right_angle_mark: f64,
    pub angle_arc_radius: f64,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            rules: defaults::STYLE_RULES
                .iter()
                .map(|(class, declarations)| StyleRule {
                    class: class.to_string(),
                    declarations: declarations.to_string(),
                })
                .collect(),
            background: defaults::BACKGROUND.to_string(),
            point_radius: defaults::POINT_RADIUS,
            label_offset: defaults::LABEL_OFFSET.to_array(),
            right_angle_mark: defaults::RIGHT_ANGLE_MARK,
            angle_arc_radius: defaults::ANGLE_ARC_RADIUS,
        }
    }
}

impl StyleSheet {
    pub fn rule(&self, class: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.class == class)
    }

    /// Replace the declarations of `class`, or append a new rule.
    pub fn with_rule(mut self, class: &str, declarations: &str) -> Self {
        match self.rules.iter_mut().find(|r| r.class == class) {
            Some(rule) => rule.declarations = declarations.to_string(),
            None => self.rules.push(StyleRule {
                class: class.to_string(),
                declarations: declarations.to_string(),
            }),
        }
        self
    }

    pub fn with_background(mut self, background: &str) -> Self {
        self.background = background.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary() {
        let style = StyleSheet::default();
        let classes: Vec<_> = style.rules.iter().map(|r| r.class.as_str()).collect();
        assert_eq!(
            classes,
            ["shape-fill", "shape-fill-light", "point", "label", "dimension", "angle-arc", "grid"]
        );
        assert!(style.rule("dimension").unwrap().declarations.contains("stroke-dasharray"));
    }

    #[test]
    fn with_rule_overrides_in_place() {
        let style = StyleSheet::default().with_rule("point", "fill: black;");
        assert_eq!(style.rules.len(), 7);
        assert_eq!(style.rule("point").unwrap().declarations, "fill: black;");

        let style = style.with_rule("highlight", "stroke: orange;");
        assert_eq!(style.rules.last().unwrap().class, "highlight");
    }
}
