use serde::{Deserialize, Deserializer, Serialize};

/// Reference lists that populate select and checkbox-group controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownKey {
    Schools,
    Universities,
    Courses,
    Levels,
    Districts,
    Types,
    Facilities,
    Disciplines,
    InformationCategories,
}

impl DropdownKey {
    /// API path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Schools => "/schools/dropdown/",
            Self::Universities => "/universities/dropdown/",
            Self::Courses => "/courses/dropdown/",
            Self::Levels => "/levels/dropdown/",
            Self::Districts => "/districts/dropdown/",
            Self::Types => "/types/dropdown/",
            Self::Facilities => "/facilities/dropdown/",
            Self::Disciplines => "/disciplines/dropdown/",
            Self::InformationCategories => "/information/categories/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schools => "schools",
            Self::Universities => "universities",
            Self::Courses => "courses",
            Self::Levels => "levels",
            Self::Districts => "districts",
            Self::Types => "types",
            Self::Facilities => "facilities",
            Self::Disciplines => "disciplines",
            Self::InformationCategories => "information_categories",
        }
    }
}

/// One selectable option. The backend labels options with either `name` or `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownItem {
    pub id: i64,
    pub label: String,
}

impl<'de> Deserialize<'de> for DropdownItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: i64,
            name: Option<String>,
            title: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let label = raw
            .name
            .or(raw.title)
            .unwrap_or_else(|| format!("#{}", raw.id));
        Ok(DropdownItem { id: raw.id, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label_from_name_or_title() {
        let items: Vec<DropdownItem> = serde_json::from_str(
            r#"[{"id": 1, "name": "Kathmandu"}, {"id": 7, "title": "Bachelor"}, {"id": 9}]"#,
        )
        .unwrap();
        assert_eq!(items[0].label, "Kathmandu");
        assert_eq!(items[1].label, "Bachelor");
        assert_eq!(items[2].label, "#9");
    }
}
