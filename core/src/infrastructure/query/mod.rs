//! Translates a [`QuerySpec`] into SeaORM conditions, ordering and paging.
//!
//! Own columns are resolved through the entity's `Column::from_str`, so every
//! predicate is table-qualified and names the schema does not know are
//! dropped. Association columns are addressed through the alias the caller
//! used in its `join_as`.

use std::str::FromStr;

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
    sea_query::{Alias, Expr, Order, SimpleExpr},
};
use tracing::debug;

use crate::domain::query::{
    entities::{AssociationDescriptor, EntitySchema, FieldType},
    value_objects::{FieldPath, FilterValue, QuerySpec, Scalar, SearchPredicate, SortDirection, SortKey},
};

pub trait QuerySpecExt: Sized {
    /// Adds the filter map (AND) and the search predicate (OR).
    fn apply_query_filter(self, spec: &QuerySpec, schema: &EntitySchema) -> Self;

    /// Adds ordering, offset and limit. Call after counting.
    fn apply_query_page(self, spec: &QuerySpec, associations: &[AssociationDescriptor]) -> Self;
}

impl<E> QuerySpecExt for Select<E>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    fn apply_query_filter(self, spec: &QuerySpec, schema: &EntitySchema) -> Self {
        let mut query = self;

        let mut all = Condition::all();
        for (field, value) in &spec.filter {
            match column_condition::<E>(field, value, schema) {
                Some(expr) => all = all.add(expr),
                None => debug!(field = %field, "dropping filter on unknown column"),
            }
        }
        if !all.is_empty() {
            query = query.filter(all);
        }

        if let SearchPredicate::AnyOf(clauses) = &spec.search {
            let mut any = Condition::any();
            for clause in clauses {
                let expr = match &clause.path {
                    FieldPath::Column(field) => column_condition::<E>(field, &clause.value, schema),
                    FieldPath::Associated { alias, field } => {
                        associated_condition(alias, field, &clause.value)
                    }
                };
                if let Some(expr) = expr {
                    any = any.add(expr);
                }
            }
            if !any.is_empty() {
                query = query.filter(any);
            }
        }

        query
    }

    fn apply_query_page(self, spec: &QuerySpec, associations: &[AssociationDescriptor]) -> Self {
        let mut query = self;

        for key in &spec.sort {
            let order = match key.direction() {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };

            match key {
                SortKey::Field { field, .. } => match E::Column::from_str(field) {
                    Ok(column) => query = query.order_by(column, order),
                    Err(_) => debug!(field = %field, "dropping sort on unknown column"),
                },
                SortKey::Joined {
                    association,
                    column,
                    ..
                } => {
                    let declared = associations
                        .iter()
                        .any(|a| a.alias == *association && a.has_field(column));
                    if declared {
                        let expr: SimpleExpr =
                            Expr::col((Alias::new(association), Alias::new(column))).into();
                        query = query.order_by(expr, order);
                    } else {
                        debug!(%association, %column, "dropping sort on undeclared association column");
                    }
                }
            }
        }

        query.offset(spec.offset()).limit(spec.limit)
    }
}

fn column_condition<E>(field: &str, value: &FilterValue, schema: &EntitySchema) -> Option<SimpleExpr>
where
    E: EntityTrait,
    E::Column: ColumnTrait,
{
    let column = E::Column::from_str(field).ok()?;
    let date_only = schema.field_type(field) == Some(FieldType::DateOnly);
    let value_of = |scalar: &Scalar| to_value(scalar, date_only);

    Some(match value {
        FilterValue::Eq(v) => column.eq(value_of(v)),
        FilterValue::Between(min, max) => column.between(value_of(min), value_of(max)),
        FilterValue::Gte(v) => column.gte(value_of(v)),
        FilterValue::Lte(v) => column.lte(value_of(v)),
        FilterValue::Like(term) => column.like(like_contains(term)),
    })
}

fn associated_condition(alias: &str, field: &str, value: &FilterValue) -> Option<SimpleExpr> {
    let col = || Expr::col((Alias::new(alias), Alias::new(field)));

    Some(match value {
        FilterValue::Like(term) => col().like(like_contains(term)),
        FilterValue::Eq(v) => col().eq(to_value(v, false)),
        FilterValue::Between(min, max) => col().between(to_value(min, false), to_value(max, false)),
        FilterValue::Gte(v) => col().gte(to_value(v, false)),
        FilterValue::Lte(v) => col().lte(to_value(v, false)),
    })
}

fn to_value(scalar: &Scalar, date_only: bool) -> Value {
    match scalar {
        Scalar::Int(v) => (*v).into(),
        Scalar::Float(v) => (*v).into(),
        Scalar::Bool(v) => (*v).into(),
        Scalar::Text(v) => v.clone().into(),
        Scalar::Timestamp(v) if date_only => v.date_naive().into(),
        Scalar::Timestamp(v) => (*v).into(),
        Scalar::Uuid(v) => (*v).into(),
    }
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use sea_orm::{
        JoinType, QueryTrait, RelationTrait,
        sea_query::PostgresQueryBuilder,
    };
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        project::entities::{CUSTOMER_ALIAS, Project},
        query::{entities::QueryableEntity, value_objects::SearchClause},
    };
    use crate::entity::projects;

    fn spec() -> QuerySpec {
        QuerySpec {
            page: 1,
            limit: 10,
            sort: vec![SortKey::field("id", SortDirection::Asc)],
            filter: BTreeMap::new(),
            search: SearchPredicate::None,
        }
    }

    fn render(spec: &QuerySpec) -> String {
        projects::Entity::find()
            .join_as(
                JoinType::LeftJoin,
                projects::Relation::Customer.def(),
                Alias::new(CUSTOMER_ALIAS),
            )
            .apply_query_filter(spec, &Project::schema())
            .apply_query_page(spec, &Project::associations())
            .into_query()
            .to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_like_escape_quotes_wildcards() {
        assert_eq!(like_escape("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(like_contains("Acme"), "%Acme%");
    }

    #[test]
    fn test_default_spec_orders_by_identity_and_pages() {
        let sql = render(&spec());

        assert!(sql.contains(r#"LEFT JOIN "customers" AS "customer""#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "projects"."id" ASC"#), "{sql}");
        assert!(sql.ends_with("LIMIT 10 OFFSET 0"), "{sql}");
    }

    #[test]
    fn test_filters_are_conjunctive_and_qualified() {
        let mut spec = spec();
        spec.page = 3;
        spec.limit = 5;
        spec.filter.insert(
            "status".to_string(),
            FilterValue::Like("open".to_string()),
        );
        spec.filter.insert(
            "project_number".to_string(),
            FilterValue::Between(Scalar::Int(100), Scalar::Int(200)),
        );

        let sql = render(&spec);

        assert!(sql.contains(r#""projects"."project_number" BETWEEN 100 AND 200"#), "{sql}");
        assert!(sql.contains(r#"AND "projects"."status" LIKE '%open%'"#), "{sql}");
        assert!(!sql.contains(" OR "), "{sql}");
        assert!(sql.ends_with("LIMIT 5 OFFSET 10"), "{sql}");
    }

    #[test]
    fn test_date_only_column_compares_calendar_date() {
        let mut spec = spec();
        spec.filter.insert(
            "start_date".to_string(),
            FilterValue::Gte(Scalar::Timestamp(
                Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            )),
        );

        let sql = render(&spec);

        assert!(sql.contains(r#""projects"."start_date" >= '2024-05-01'"#), "{sql}");
    }

    #[test]
    fn test_unknown_filter_and_sort_columns_are_dropped() {
        let mut spec = spec();
        spec.filter.insert(
            "password".to_string(),
            FilterValue::Eq(Scalar::Text("x".to_string())),
        );
        spec.sort = vec![SortKey::field("nope", SortDirection::Desc)];

        let sql = render(&spec);

        assert!(!sql.contains("password"), "{sql}");
        assert!(!sql.contains("ORDER BY"), "{sql}");
    }

    #[test]
    fn test_search_is_disjunctive_across_associations() {
        let mut spec = spec();
        spec.search = SearchPredicate::AnyOf(vec![
            SearchClause {
                path: FieldPath::Column("name".to_string()),
                value: FilterValue::Like("Acme".to_string()),
            },
            SearchClause {
                path: FieldPath::Associated {
                    alias: CUSTOMER_ALIAS.to_string(),
                    field: "email".to_string(),
                },
                value: FilterValue::Like("Acme".to_string()),
            },
        ]);

        let sql = render(&spec);

        assert!(
            sql.contains(r#""projects"."name" LIKE '%Acme%' OR "customer"."email" LIKE '%Acme%'"#),
            "{sql}"
        );
    }

    #[test]
    fn test_uuid_filter_matches_exactly() {
        let id = Uuid::new_v4();
        let mut spec = spec();
        spec.filter
            .insert("customer_id".to_string(), FilterValue::Eq(Scalar::Uuid(id)));

        let sql = render(&spec);

        assert!(sql.contains(&format!(r#""projects"."customer_id" = '{id}'"#)), "{sql}");
    }

    #[test]
    fn test_joined_sort_requires_declared_column() {
        let mut spec = spec();
        spec.sort = vec![
            SortKey::Joined {
                association: CUSTOMER_ALIAS.to_string(),
                column: "name".to_string(),
                direction: SortDirection::Desc,
            },
            SortKey::Joined {
                association: CUSTOMER_ALIAS.to_string(),
                column: "phone".to_string(),
                direction: SortDirection::Asc,
            },
        ];

        let sql = render(&spec);

        assert!(sql.contains(r#"ORDER BY "customer"."name" DESC"#), "{sql}");
        assert!(!sql.contains(r#""customer"."phone""#), "{sql}");
    }
}
