pub mod common;

pub mod a001_level;
pub mod a002_district;
pub mod a003_school_type;
pub mod a004_discipline;
pub mod a005_facility;
pub mod a006_university;
pub mod a007_course;
pub mod a008_school;
pub mod a009_admission;
pub mod a010_scholarship;
pub mod a011_event;
pub mod a012_information;
pub mod a013_advertisement;
pub mod a014_inquiry;

use crate::shared::metadata::EntityDescriptor;

/// Entities managed through the generic admin pages, in sidebar order
pub static ADMIN_ENTITIES: &[&EntityDescriptor] = &[
    &a008_school::SCHOOL,
    &a006_university::UNIVERSITY,
    &a007_course::COURSE,
    &a010_scholarship::SCHOLARSHIP,
    &a009_admission::ADMISSION,
    &a011_event::EVENT,
    &a012_information::INFORMATION,
    &a013_advertisement::ADVERTISEMENT,
    &a004_discipline::DISCIPLINE,
    &a002_district::DISTRICT,
    &a001_level::LEVEL,
    &a003_school_type::SCHOOL_TYPE,
    &a005_facility::FACILITY,
];

/// Looks an admin entity up by its `entity_name`
pub fn admin_entity(name: &str) -> Option<&'static EntityDescriptor> {
    ADMIN_ENTITIES
        .iter()
        .copied()
        .find(|d| d.info.entity_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{CrossFieldRule, FieldType};

    #[test]
    fn test_registry_lookup() {
        assert_eq!(admin_entity("admission").map(|d| d.info.entity_index), Some("a009"));
        assert!(admin_entity("inquiry").is_none());
    }

    #[test]
    fn test_rules_reference_declared_fields() {
        for desc in ADMIN_ENTITIES {
            for rule in desc.rules {
                let names: Vec<&str> = match rule {
                    CrossFieldRule::DateAfter { earlier, later, .. }
                    | CrossFieldRule::DateNotBefore { earlier, later, .. } => vec![*earlier, *later],
                    CrossFieldRule::AtLeastOneOf { fields, .. } => fields.to_vec(),
                    CrossFieldRule::RequiredWhen {
                        field, when_field, ..
                    } => vec![*field, *when_field],
                };
                for name in names {
                    assert!(
                        desc.field(name).is_some(),
                        "{}: rule names unknown field {}",
                        desc.info.entity_name,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_derived_fields_have_a_source() {
        for desc in ADMIN_ENTITIES {
            for field in desc.fields.iter().filter(|f| f.derive_from.is_some()) {
                let source = field.derive_from.unwrap_or_default();
                assert!(desc.field(source).is_some(), "{}", desc.info.entity_name);
            }
        }
    }

    #[test]
    fn test_nested_tables_declare_rows() {
        for desc in ADMIN_ENTITIES {
            for field in desc.fields {
                if matches!(field.field_type, FieldType::NestedTable(_)) {
                    assert!(!field.nested().is_empty(), "{}", field.name);
                }
            }
        }
    }

    #[test]
    fn test_school_dropdowns_include_nested_course_ref() {
        let keys = a008_school::SCHOOL.dropdowns();
        assert!(keys.contains(&crate::shared::dropdown::DropdownKey::Courses));
        assert!(keys.contains(&crate::shared::dropdown::DropdownKey::Facilities));
    }
}
