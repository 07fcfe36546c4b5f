use std::collections::BTreeMap;

/// Fields every contact form starts with
const DEFAULT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// The contact form. Nothing typed here is ever sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: BTreeMap<String, String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS
                .into_iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }
}

impl ContactForm {
    /// Set the value of a field, adding the field if the form does not have it yet
    pub fn set(&mut self, field: &str, value: &str) {
        self.fields.insert(field.to_string(), value.to_string());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Empty every field, keeping the fields themselves
    pub fn reset(&mut self) {
        self.fields.values_mut().for_each(String::clear);
    }

    /// Number of fields with something typed in
    pub fn filled(&self) -> usize {
        self.fields.values().filter(|v| !v.is_empty()).count()
    }
}
