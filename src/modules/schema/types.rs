// src/modules/schema/types.rs

use serde::Serialize;
use serde_json::Value;

/// Primitive kind of a schema field, mirroring the widget set the studio
/// offers.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum FieldKind {
    String,
    Text,
    RichText,
    Boolean,
    Number,
    Datetime,
    Url,
    Image,
    File,
    /// Tag-style list of short strings.
    StringArray,
    Slug {
        source: &'static str,
        max_length: usize,
    },
    Object {
        fields: Vec<FieldDef>,
    },
    ObjectArray {
        fields: Vec<FieldDef>,
    },
    Reference {
        to: &'static str,
    },
    ReferenceArray {
        to: &'static str,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<Value>,
}

impl FieldDef {
    pub fn new(name: &'static str, title: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            title,
            kind,
            initial: None,
        }
    }

    pub fn with_initial(mut self, initial: Value) -> Self {
        self.initial = Some(initial);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemaType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
}

impl SchemaType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }
}
