//! Transport-neutral model of a multipart/form-data body.
//!
//! The frontend builds a `MultipartPayload` from form state and converts it to
//! a browser `FormData` only at the HTTP boundary.

use std::fmt;

/// Binary content picked by the user and not yet uploaded
#[derive(Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileBlob {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBlob")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(FileBlob),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

/// Ordered list of named parts; a name may repeat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
    }

    pub fn append_file(&mut self, name: impl Into<String>, blob: FileBlob) {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::File(blob),
        });
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// All values appended under `name`, in insertion order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PartValue> + 'a {
        self.parts
            .iter()
            .filter(move |p| p.name == name)
            .map(|p| &p.value)
    }

    /// First text value under `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .filter(|p| p.name == name)
            .find_map(|p| match &p.value {
                PartValue::Text(s) => Some(s.as_str()),
                PartValue::File(_) => None,
            })
    }

    pub fn count(&self, name: &str) -> usize {
        self.parts.iter().filter(|p| p.name == name).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }
}

/// Key under which a new upload belonging to row `index` of a nested
/// collection travels, e.g. `gallery_0_image`. The backend pairs the file
/// with the metadata entry at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalFileKey<'a> {
    pub collection: &'a str,
    pub index: usize,
    pub subfield: &'a str,
}

impl fmt::Display for PositionalFileKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.collection, self.index, self.subfield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_names_keep_order() {
        let mut payload = MultipartPayload::new();
        payload.append_text("facilities", "3");
        payload.append_text("name", "Everest College");
        payload.append_text("facilities", "5");

        let values: Vec<_> = payload.get_all("facilities").collect();
        assert_eq!(
            values,
            vec![
                &PartValue::Text("3".to_string()),
                &PartValue::Text("5".to_string())
            ]
        );
        assert_eq!(payload.text("name"), Some("Everest College"));
        assert!(!payload.contains("logo"));
    }

    #[test]
    fn test_positional_key() {
        let key = PositionalFileKey {
            collection: "gallery",
            index: 2,
            subfield: "image",
        };
        assert_eq!(key.to_string(), "gallery_2_image");
    }

    #[test]
    fn test_blob_debug_hides_bytes() {
        let blob = FileBlob::new("logo.png", "image/png", vec![0; 2048]);
        let printed = format!("{:?}", blob);
        assert!(printed.contains("size: 2048"));
        assert_eq!(blob.size(), 2048);
    }
}
