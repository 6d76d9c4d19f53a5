//! Layout organizer
//!
//! Groups discovered fields by their declared column group and resolves the
//! final group ordering. An explicit column-order hint wins; groups not
//! mentioned in the hint are appended in discovery order. A hinted group
//! with no fields is skipped rather than emitted as an empty section.

use formkit_schema::FieldDescriptor;

// ============================================================================
// Types
// ============================================================================

/// One resolved column group with its fields in discovery order
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGroup {
    /// Column group name
    pub name: String,
    /// Fields in the group, in discovery order
    pub fields: Vec<FieldDescriptor>,
}

/// Result of organizing a field list into layout groups
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganizedLayout {
    /// Groups in final render order
    pub groups: Vec<LayoutGroup>,
    /// Fields without a column group, in discovery order
    pub ungrouped: Vec<FieldDescriptor>,
}

impl OrganizedLayout {
    /// Look up a resolved group by name
    pub fn group(&self, name: &str) -> Option<&LayoutGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Names of the resolved groups, in render order
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }
}

// ============================================================================
// Organize
// ============================================================================

/// Organize fields into ordered column groups plus an ungrouped remainder
pub fn organize(fields: &[FieldDescriptor], column_order: &[String]) -> OrganizedLayout {
    let mut ungrouped = Vec::new();
    let mut grouped: Vec<LayoutGroup> = Vec::new();

    for field in fields {
        match &field.column_group {
            None => ungrouped.push(field.clone()),
            Some(group_name) => {
                match grouped.iter_mut().find(|g| &g.name == group_name) {
                    Some(group) => group.fields.push(field.clone()),
                    None => grouped.push(LayoutGroup {
                        name: group_name.clone(),
                        fields: vec![field.clone()],
                    }),
                }
            }
        }
    }

    if column_order.is_empty() {
        return OrganizedLayout {
            groups: grouped,
            ungrouped,
        };
    }

    let mut ordered = Vec::with_capacity(grouped.len());
    for hinted in column_order {
        // A hint entry with no matching (non-empty) group is skipped
        if let Some(pos) = grouped.iter().position(|g| &g.name == hinted) {
            ordered.push(grouped.remove(pos));
        }
    }
    // Groups the hint never mentioned keep their discovery order
    ordered.append(&mut grouped);

    OrganizedLayout {
        groups: ordered,
        ungrouped,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::FieldType;

    fn field(name: &str, group: Option<&str>) -> FieldDescriptor {
        let descriptor = FieldDescriptor::new(name, FieldType::Text);
        match group {
            Some(g) => descriptor.in_group(g),
            None => descriptor,
        }
    }

    #[test]
    fn test_partition_grouped_and_ungrouped() {
        let fields = vec![
            field("a", Some("G")),
            field("b", None),
            field("c", Some("G")),
            field("d", None),
        ];

        let layout = organize(&fields, &[]);
        assert_eq!(layout.groups.len(), 1);
        let group = layout.group("G").unwrap();
        assert_eq!(group.fields.len(), 2);
        assert_eq!(group.fields[0].name, "a");
        assert_eq!(group.fields[1].name, "c");
        assert_eq!(layout.ungrouped.len(), 2);
    }

    #[test]
    fn test_hint_order_wins() {
        // Discovery order declares A before B; the hint reverses them
        let fields = vec![field("a", Some("A")), field("b", Some("B"))];
        let hint = vec!["B".to_string(), "A".to_string()];

        let layout = organize(&fields, &hint);
        assert_eq!(layout.group_names(), vec!["B", "A"]);
    }

    #[test]
    fn test_unknown_hint_entries_skipped() {
        let fields = vec![field("a", Some("A"))];
        let hint = vec!["Ghost".to_string(), "A".to_string()];

        let layout = organize(&fields, &hint);
        assert_eq!(layout.group_names(), vec!["A"]);
        assert!(layout.group("Ghost").is_none());
    }

    #[test]
    fn test_unhinted_groups_appended_in_discovery_order() {
        let fields = vec![
            field("a", Some("A")),
            field("b", Some("B")),
            field("c", Some("C")),
        ];
        let hint = vec!["C".to_string()];

        let layout = organize(&fields, &hint);
        assert_eq!(layout.group_names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_hint_keeps_discovery_order() {
        let fields = vec![field("a", Some("Z")), field("b", Some("A"))];

        let layout = organize(&fields, &[]);
        assert_eq!(layout.group_names(), vec!["Z", "A"]);
    }

    #[test]
    fn test_no_fields() {
        let layout = organize(&[], &["A".to_string()]);
        assert!(layout.groups.is_empty());
        assert!(layout.ungrouped.is_empty());
    }
}
