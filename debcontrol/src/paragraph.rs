//! Paragraphs and the fields they contain.

/// A field in a control paragraph.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// The name of the field, as written.
    pub name: String,

    /// The value of the field, with continuation lines joined.
    pub value: String,
}

/// A control paragraph.
///
/// Field names are unique and kept in the order they first appeared.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Paragraph {
    fields: Vec<Field>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field by name.
    ///
    /// Returns `None` if the field does not exist.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Check whether a field is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return the number of fields in the paragraph.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The fields of the paragraph, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate over the field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Iterate over the fields in the paragraph.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str()))
    }

    /// Set the value of a field.
    ///
    /// If a field with the same name already exists its value is replaced in
    /// place and the old value returned; otherwise the field is appended.
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        self.set_owned(name.to_string(), value.to_string())
    }

    pub(crate) fn set_owned(&mut self, name: String, value: String) -> Option<String> {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => Some(std::mem::replace(&mut field.value, value)),
            None => {
                self.fields.push(Field { name, value });
                None
            }
        }
    }

    /// Remove a field from the paragraph, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.fields.iter().position(|field| field.name == name)?;
        Some(self.fields.remove(index).value)
    }
}

impl std::ops::Index<&str> for Paragraph {
    type Output = str;

    /// Returns the value of the field called `name`.
    ///
    /// # Panics
    ///
    /// Panics if the field is not present.
    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no field named {:?} in paragraph", name),
        }
    }
}

impl From<Vec<(String, String)>> for Paragraph {
    fn from(fields: Vec<(String, String)>) -> Self {
        fields.into_iter().collect()
    }
}

impl FromIterator<(String, String)> for Paragraph {
    /// Collect fields into a paragraph. Later values win for repeated names.
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut paragraph = Paragraph::new();
        for (name, value) in iter {
            paragraph.set_owned(name, value);
        }
        paragraph
    }
}

impl IntoIterator for Paragraph {
    type Item = (String, String);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Field>, fn(Field) -> (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields
            .into_iter()
            .map(|field| (field.name, field.value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Paragraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paragraph {
        Paragraph::from(vec![
            ("Package".to_string(), "hello".to_string()),
            ("Version".to_string(), "2.10".to_string()),
        ])
    }

    #[test]
    fn test_accessors() {
        let para = sample();
        assert_eq!(para.get("Package"), Some("hello"));
        assert_eq!(para.get("package"), None);
        assert!(para.contains_key("Version"));
        assert!(!para.contains_key("Description"));
        assert_eq!(para.len(), 2);
        assert!(!para.is_empty());
        assert_eq!(para.keys().collect::<Vec<_>>(), vec!["Package", "Version"]);
        assert_eq!(
            para.iter().collect::<Vec<_>>(),
            vec![("Package", "hello"), ("Version", "2.10")]
        );
        assert_eq!(para.fields()[1].name, "Version");
        assert_eq!(&para["Version"], "2.10");
    }

    #[test]
    #[should_panic(expected = "no field named \"Missing\"")]
    fn test_index_missing() {
        let _ = &sample()["Missing"];
    }

    #[test]
    fn test_empty() {
        let para = Paragraph::new();
        assert!(para.is_empty());
        assert_eq!(para.len(), 0);
        assert_eq!(para.iter().count(), 0);
        assert_eq!(para.get("Any"), None);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut para = sample();
        assert_eq!(para.set("Package", "world"), Some("hello".to_string()));
        assert_eq!(para.set("Section", "net"), None);
        assert_eq!(
            para.iter().collect::<Vec<_>>(),
            vec![("Package", "world"), ("Version", "2.10"), ("Section", "net")]
        );
    }

    #[test]
    fn test_remove() {
        let mut para = sample();
        assert_eq!(para.remove("Package"), Some("hello".to_string()));
        assert_eq!(para.remove("Package"), None);
        assert_eq!(para.keys().collect::<Vec<_>>(), vec!["Version"]);
    }

    #[test]
    fn test_from_iter_last_wins() {
        let para: Paragraph = vec![
            ("Key".to_string(), "Value1".to_string()),
            ("Other".to_string(), "x".to_string()),
            ("Key".to_string(), "Value2".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(para.len(), 2);
        assert_eq!(para.get("Key"), Some("Value2"));
        assert_eq!(para.keys().collect::<Vec<_>>(), vec!["Key", "Other"]);
    }

    #[test]
    fn test_into_iter() {
        let mut iter = sample().into_iter();
        assert_eq!(
            iter.next(),
            Some(("Package".to_string(), "hello".to_string()))
        );
        assert_eq!(
            iter.next(),
            Some(("Version".to_string(), "2.10".to_string()))
        );
        assert_eq!(iter.next(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_keeps_order() {
        let mut para = sample();
        para.set("Description", "short\n long");
        assert_eq!(
            serde_json::to_string(&para).unwrap(),
            r#"{"Package":"hello","Version":"2.10","Description":"short\n long"}"#
        );
    }
}
