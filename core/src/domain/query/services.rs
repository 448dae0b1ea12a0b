use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::query::{
    coercion::{
        SearchTerm, day_bounds, json_number, json_text, parse_bool, parse_datetime, parse_number,
        parse_uuid, split_range,
    },
    entities::{AssociationDescriptor, EntitySchema, FieldType, QueryableEntity},
    errors::QueryError,
    value_objects::{
        FieldPath, FilterValue, QueryDefaults, QueryRequest, QuerySpec, Scalar, SearchClause,
        SearchPredicate, SortDirection, SortKey,
    },
};

const RANGE_FROM: &str = "from";
const RANGE_TO: &str = "to";

/// Turns raw listing parameters into a typed [`QuerySpec`].
///
/// The builder is a pure function of its inputs. Values that do not fit the
/// declared column type are dropped rather than rejected; the only error is
/// a `filter` parameter that is not a JSON object.
#[derive(Debug, Clone, Default)]
pub struct QueryFilterBuilder {
    defaults: QueryDefaults,
}

impl QueryFilterBuilder {
    pub fn new(defaults: QueryDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    pub fn build_for<E: QueryableEntity>(
        &self,
        request: Option<&QueryRequest>,
    ) -> Result<QuerySpec, QueryError> {
        self.build(request, &E::schema(), &E::associations())
    }

    pub fn build(
        &self,
        request: Option<&QueryRequest>,
        schema: &EntitySchema,
        associations: &[AssociationDescriptor],
    ) -> Result<QuerySpec, QueryError> {
        let request = match request {
            Some(request) if !request.is_empty() => request,
            _ => return Ok(self.default_spec()),
        };

        let filter = match request.filter.as_deref() {
            Some(raw) => self.filter(raw, schema)?,
            None => BTreeMap::new(),
        };

        let search = request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(|term| search_predicate(term, schema, associations))
            .unwrap_or_default();

        Ok(QuerySpec {
            page: positive(request.page.as_deref()).unwrap_or(self.defaults.page),
            limit: self.limit(request.limit.as_deref()),
            sort: self.sort(request.sort.as_deref(), associations),
            filter,
            search,
        })
    }

    fn default_spec(&self) -> QuerySpec {
        QuerySpec {
            page: self.defaults.page,
            limit: self.limit(None),
            sort: vec![self.identity_sort()],
            filter: BTreeMap::new(),
            search: SearchPredicate::None,
        }
    }

    fn identity_sort(&self) -> SortKey {
        SortKey::field(self.defaults.identity_field.clone(), SortDirection::Asc)
    }

    fn limit(&self, raw: Option<&str>) -> u64 {
        let limit = positive(raw).unwrap_or(self.defaults.limit);
        match self.defaults.max_limit {
            Some(max) => limit.min(max.max(1)),
            None => limit,
        }
    }

    fn sort(&self, raw: Option<&str>, associations: &[AssociationDescriptor]) -> Vec<SortKey> {
        let keys: Vec<SortKey> = raw
            .map(|raw| {
                raw.split(',')
                    .filter_map(|token| sort_key(token, associations))
                    .collect()
            })
            .unwrap_or_default();

        if keys.is_empty() {
            vec![self.identity_sort()]
        } else {
            keys
        }
    }

    fn filter(
        &self,
        raw: &str,
        schema: &EntitySchema,
    ) -> Result<BTreeMap<String, FilterValue>, QueryError> {
        let entries = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(entries)) => entries,
            Ok(Value::Null) => return Ok(BTreeMap::new()),
            Ok(_) => {
                return Err(QueryError::ParseError(
                    "filter must be a JSON object".to_string(),
                ));
            }
            Err(e) => return Err(QueryError::ParseError(e.to_string())),
        };

        let mut filter = BTreeMap::new();
        for (key, value) in &entries {
            if key == RANGE_FROM || key == RANGE_TO {
                continue;
            }

            let Some(field_type) = schema.field_type(key) else {
                debug!(field = %key, "ignoring filter on unknown field");
                continue;
            };

            match field_predicate(field_type, value) {
                Some(predicate) => {
                    filter.insert(key.clone(), predicate);
                }
                None => debug!(field = %key, ?field_type, "dropping filter value of wrong type"),
            }
        }

        if let Some(range) = self.date_range(&entries, schema) {
            filter.insert(self.defaults.date_range_field.clone(), range);
        }

        Ok(filter)
    }

    fn date_range(&self, entries: &Map<String, Value>, schema: &EntitySchema) -> Option<FilterValue> {
        schema.field(&self.defaults.date_range_field)?;

        let bound = |key: &str| {
            entries
                .get(key)
                .and_then(json_text)
                .and_then(|raw| parse_datetime(&raw))
                .map(Scalar::Timestamp)
        };

        match (bound(RANGE_FROM), bound(RANGE_TO)) {
            (Some(from), Some(to)) => Some(FilterValue::Between(from, to)),
            (Some(from), None) => Some(FilterValue::Gte(from)),
            (None, Some(to)) => Some(FilterValue::Lte(to)),
            (None, None) => None,
        }
    }
}

fn positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|value| *value > 0)
}

fn sort_key(token: &str, associations: &[AssociationDescriptor]) -> Option<SortKey> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let (field, direction) = match token.rsplit_once('-') {
        Some((field, direction)) => (
            field.trim(),
            SortDirection::parse(direction).unwrap_or_default(),
        ),
        None => (token, SortDirection::Asc),
    };
    if field.is_empty() {
        return None;
    }

    if let Some((alias, column)) = field.split_once('.')
        && !column.is_empty()
        && associations.iter().any(|a| a.alias == alias)
    {
        return Some(SortKey::Joined {
            association: alias.to_string(),
            column: column.to_string(),
            direction,
        });
    }

    Some(SortKey::field(field, direction))
}

fn field_predicate(field_type: FieldType, value: &Value) -> Option<FilterValue> {
    match field_type {
        FieldType::Integer | FieldType::Float => {
            let integer = field_type == FieldType::Integer;
            match value {
                Value::Number(number) => json_number(number, integer).map(FilterValue::Eq),
                Value::String(raw) => match parse_number(raw, integer) {
                    Some(exact) => Some(FilterValue::Eq(exact)),
                    None => {
                        let (min, max) = split_range(raw)?;
                        Some(FilterValue::Between(
                            parse_number(min, integer)?,
                            parse_number(max, integer)?,
                        ))
                    }
                },
                _ => None,
            }
        }
        FieldType::Date | FieldType::DateOnly => parse_datetime(&json_text(value)?)
            .map(|instant| FilterValue::Eq(Scalar::Timestamp(instant))),
        FieldType::Boolean => match value {
            Value::Bool(flag) => Some(FilterValue::Eq(Scalar::Bool(*flag))),
            Value::String(raw) => parse_bool(raw).map(|flag| FilterValue::Eq(Scalar::Bool(flag))),
            _ => None,
        },
        FieldType::Uuid => match value {
            Value::String(raw) => parse_uuid(raw).map(|id| FilterValue::Eq(Scalar::Uuid(id))),
            _ => None,
        },
        FieldType::String => json_text(value).map(FilterValue::Like),
    }
}

fn search_predicate(
    raw: &str,
    schema: &EntitySchema,
    associations: &[AssociationDescriptor],
) -> SearchPredicate {
    let term = SearchTerm::normalize(raw);

    let own = schema.fields().filter_map(|descriptor| {
        search_value(descriptor.field_type, raw, &term).map(|value| SearchClause {
            path: FieldPath::Column(descriptor.name.clone()),
            value,
        })
    });

    let associated = associations.iter().flat_map(|association| {
        association.fields.iter().map(|field| SearchClause {
            path: FieldPath::Associated {
                alias: association.alias.clone(),
                field: field.clone(),
            },
            value: FilterValue::Like(raw.to_string()),
        })
    });

    SearchPredicate::from_clauses(own.chain(associated).collect())
}

fn search_value(field_type: FieldType, raw: &str, term: &SearchTerm) -> Option<FilterValue> {
    match (field_type, term) {
        (FieldType::Date | FieldType::DateOnly, SearchTerm::Date(instant)) => {
            let (start, end) = day_bounds(*instant);
            Some(FilterValue::Between(
                Scalar::Timestamp(start),
                Scalar::Timestamp(end),
            ))
        }
        (FieldType::Integer, SearchTerm::Number(number)) => {
            // a fractional term can never equal an integer column
            (number.fract() == 0.0 && number.abs() < i64::MAX as f64)
                .then(|| FilterValue::Eq(Scalar::Int(*number as i64)))
        }
        (FieldType::Float, SearchTerm::Number(number)) => {
            Some(FilterValue::Eq(Scalar::Float(*number)))
        }
        (FieldType::Boolean, _) => parse_bool(raw).map(|flag| FilterValue::Eq(Scalar::Bool(flag))),
        (FieldType::Uuid, _) => parse_uuid(raw).map(|id| FilterValue::Eq(Scalar::Uuid(id))),
        (FieldType::String, _) => Some(FilterValue::Like(raw.to_string())),
        _ => None,
    }
}
