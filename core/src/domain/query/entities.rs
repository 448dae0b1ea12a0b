use serde::{Deserialize, Serialize};

/// Semantic type of a queryable field, as declared by the entity metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Integer,
    Float,
    /// Timestamp with time of day.
    Date,
    /// Calendar date without time of day.
    DateOnly,
    Boolean,
    Uuid,
    #[default]
    String,
}

impl FieldType {
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, FieldType::Date | FieldType::DateOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered set of the queryable fields of one entity.
///
/// Declaration order is kept because free-text search walks the fields in
/// that order when it assembles its OR clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySchema {
    fields: Vec<FieldDescriptor>,
}

impl EntitySchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        let descriptor = FieldDescriptor::new(name, field_type);
        match self.fields.iter_mut().find(|f| f.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.fields.push(descriptor),
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.field(name).map(|f| f.field_type)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for EntitySchema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        iter.into_iter()
            .fold(EntitySchema::new(), |schema, f| schema.with_field(f.name, f.field_type))
    }
}

/// A joined entity whose fields take part in free-text search and in
/// `alias.column` sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationDescriptor {
    pub alias: String,
    pub fields: Vec<String>,
}

impl AssociationDescriptor {
    pub fn new<I, S>(alias: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alias: alias.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

/// Implemented by every domain entity exposed through a listing endpoint.
pub trait QueryableEntity {
    fn schema() -> EntitySchema;

    fn associations() -> Vec<AssociationDescriptor> {
        Vec::new()
    }
}
