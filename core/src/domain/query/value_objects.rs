use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use uuid::Uuid;

/// Raw listing parameters as they arrive on the query string.
///
/// Every field stays a string here; coercion happens in the builder so that
/// a malformed `page` does not reject the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryRequest {
    /// 1-based page number
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size
    #[param(example = "10")]
    pub limit: Option<String>,
    /// Comma separated `field-DIRECTION` tokens, `alias.column` for joined sorts
    #[param(example = "name-DESC,created_at")]
    pub sort: Option<String>,
    /// JSON object of field → value; `from`/`to` select a date range
    #[param(example = r#"{"status":"open","from":"2024-01-01"}"#)]
    pub filter: Option<String>,
    /// Free-text term matched across the entity and its associations
    pub search: Option<String>,
}

impl QueryRequest {
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.limit.is_none()
            && self.sort.is_none()
            && self.filter.is_none()
            && self.search.is_none()
    }
}

/// Defaults handed to the builder instead of being read from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub page: u64,
    pub limit: u64,
    /// Upper bound for `limit`; `None` keeps page sizes unbounded.
    pub max_limit: Option<u64>,
    pub identity_field: String,
    /// Field targeted by the reserved `from`/`to` filter keys.
    pub date_range_field: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            max_limit: None,
            identity_field: "id".to_string(),
            date_range_field: "created_at".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `ASC`/`DESC`; anything else is not a direction.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Field {
        field: String,
        direction: SortDirection,
    },
    Joined {
        association: String,
        column: String,
        direction: SortDirection,
    },
}

impl SortKey {
    pub fn field(field: impl Into<String>, direction: SortDirection) -> Self {
        SortKey::Field {
            field: field.into(),
            direction,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::Field { direction, .. } | SortKey::Joined { direction, .. } => *direction,
        }
    }
}

/// A typed operand, already coerced to the column's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Eq(Scalar),
    Between(Scalar, Scalar),
    Gte(Scalar),
    Lte(Scalar),
    /// Substring match against the raw, unescaped term.
    Like(String),
}

/// Where a search clause points: a column of the entity itself or a column
/// of a joined association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    Column(String),
    Associated { alias: String, field: String },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Column(name) => write!(f, "{name}"),
            FieldPath::Associated { alias, field } => write!(f, "${alias}.{field}$"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchClause {
    pub path: FieldPath,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPredicate {
    /// No search constraint at all.
    #[default]
    None,
    /// Matches when any clause matches. Never empty.
    AnyOf(Vec<SearchClause>),
}

impl SearchPredicate {
    pub fn from_clauses(clauses: Vec<SearchClause>) -> Self {
        if clauses.is_empty() {
            SearchPredicate::None
        } else {
            SearchPredicate::AnyOf(clauses)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchPredicate::None)
    }

    pub fn clauses(&self) -> &[SearchClause] {
        match self {
            SearchPredicate::None => &[],
            SearchPredicate::AnyOf(clauses) => clauses,
        }
    }
}

/// Store-agnostic description of one listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub page: u64,
    pub limit: u64,
    pub sort: Vec<SortKey>,
    pub filter: BTreeMap<String, FilterValue>,
    pub search: SearchPredicate,
}

impl QuerySpec {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, spec: &QuerySpec, total: u64) -> Self {
        Self {
            data,
            page: spec.page,
            limit: spec.limit,
            total,
        }
    }
}
