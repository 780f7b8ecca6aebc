//! Method groups and the name templates they expand to.

use serde::{Deserialize, Serialize};

/// A category of generated accessor methods.
///
/// Every delegated attribute expands into one method name per template of
/// each active group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodGroup {
    /// Plain attribute reader (`name`).
    Reader,
    /// Attribute writer (`name=`).
    Writer,
    /// Presence predicate (`name?`).
    Predicate,
    /// Raw value accessor (`name_before_type_cast`).
    TypeCast,
    /// Change tracking accessors (`name_changed?` and friends).
    Dirty,
}

impl MethodGroup {
    /// All groups, in canonical order.
    ///
    /// Selection never reorders groups; generated names always follow this
    /// order.
    pub const ALL: [MethodGroup; 5] = [
        MethodGroup::Reader,
        MethodGroup::Writer,
        MethodGroup::Predicate,
        MethodGroup::TypeCast,
        MethodGroup::Dirty,
    ];

    /// Returns the snake_case name of this group.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodGroup::Reader => "reader",
            MethodGroup::Writer => "writer",
            MethodGroup::Predicate => "predicate",
            MethodGroup::TypeCast => "type_cast",
            MethodGroup::Dirty => "dirty",
        }
    }

    /// Returns the name templates this group expands to, in generation order.
    pub fn templates(self) -> &'static [MethodTemplate] {
        match self {
            MethodGroup::Reader => &[MethodTemplate {
                prefix: "",
                suffix: "",
            }],
            MethodGroup::Writer => &[MethodTemplate {
                prefix: "",
                suffix: "=",
            }],
            MethodGroup::Predicate => &[MethodTemplate {
                prefix: "",
                suffix: "?",
            }],
            MethodGroup::TypeCast => &[MethodTemplate {
                prefix: "",
                suffix: "_before_type_cast",
            }],
            MethodGroup::Dirty => &[
                MethodTemplate {
                    prefix: "",
                    suffix: "_change",
                },
                MethodTemplate {
                    prefix: "",
                    suffix: "_changed?",
                },
                MethodTemplate {
                    prefix: "",
                    suffix: "_will_change!",
                },
                MethodTemplate {
                    prefix: "",
                    suffix: "_was",
                },
                MethodTemplate {
                    prefix: "reset_",
                    suffix: "!",
                },
            ],
        }
    }
}

impl std::fmt::Display for MethodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method name pattern wrapped around an attribute identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTemplate {
    /// Text placed before the attribute name.
    pub prefix: &'static str,
    /// Text placed after the attribute name.
    pub suffix: &'static str,
}

impl MethodTemplate {
    /// Renders the template for an attribute.
    pub fn apply(&self, attribute: &str) -> String {
        format!("{}{}{}", self.prefix, attribute, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = MethodGroup::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(
            names,
            vec!["reader", "writer", "predicate", "type_cast", "dirty"]
        );
    }

    #[test]
    fn test_single_templates() {
        assert_eq!(MethodGroup::Reader.templates()[0].apply("name"), "name");
        assert_eq!(MethodGroup::Writer.templates()[0].apply("name"), "name=");
        assert_eq!(MethodGroup::Predicate.templates()[0].apply("name"), "name?");
        assert_eq!(
            MethodGroup::TypeCast.templates()[0].apply("name"),
            "name_before_type_cast"
        );
    }

    #[test]
    fn test_dirty_templates() {
        let names: Vec<String> = MethodGroup::Dirty
            .templates()
            .iter()
            .map(|t| t.apply("email"))
            .collect();
        assert_eq!(
            names,
            vec![
                "email_change",
                "email_changed?",
                "email_will_change!",
                "email_was",
                "reset_email!",
            ]
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MethodGroup::TypeCast).unwrap();
        assert_eq!(json, "\"type_cast\"");
        let group: MethodGroup = serde_json::from_str("\"dirty\"").unwrap();
        assert_eq!(group, MethodGroup::Dirty);
    }
}
