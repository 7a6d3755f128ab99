//! Query composition for the schedule list operation: compiles the request
//! parameters into a conjunctive predicate set and resolves the sort key
//! through fixed safelists. Caller-supplied text only ever becomes a bound
//! value, never part of the SQL itself.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, IntoSimpleExpr, Order};

use crate::domain::schedule::value_objects::ListSchedulesParams;
use crate::entity::shift_schedules::Column;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Safelisted sort destination. `FirstElement` orders by the first element
/// of an embedded collection (`organization->0->>'name'`); `CollectionField`
/// extracts the field from the collection value as a whole. The asymmetry
/// with the any-element filters below is intentional, preserved behavior.
#[derive(Debug, Clone)]
pub enum SortTarget {
    Column(Column),
    FirstElement {
        collection: &'static str,
        field: &'static str,
    },
    CollectionField {
        collection: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct ResolvedSort {
    pub target: SortTarget,
    pub order: Order,
}

impl SortTarget {
    pub fn into_simple_expr(self) -> SimpleExpr {
        match self {
            SortTarget::Column(column) => column.into_simple_expr(),
            SortTarget::FirstElement { collection, field } => {
                Expr::cust(format!("({collection}->0->>'{field}')"))
            }
            SortTarget::CollectionField { collection, field } => {
                Expr::cust(format!("{collection}->>'{field}'"))
            }
        }
    }
}

/// Resolves `(sort_by, sort_order)` to a column-direction pair. Total: every
/// input resolves, unknown sort keys fall back to `created_at` and unknown
/// order tokens to `DESC`.
pub fn resolve_sort(sort_by: &str, sort_order: &str) -> ResolvedSort {
    let order = match sort_order {
        "ASC" | "asc" => Order::Asc,
        "DESC" | "desc" => Order::Desc,
        _ => Order::Desc,
    };

    // Dotted aliases: first element of the embedded collection.
    let target = match sort_by {
        "organization.name" => first_element("organization", "name"),
        "organization.mail" => first_element("organization", "mail"),
        "organization.phone" => first_element("organization", "phone"),
        "manager.name" => first_element("manager", "name"),
        "manager.mail" => first_element("manager", "mail"),
        "manager.phone" => first_element("manager", "phone"),
        "user.name" => first_element("users", "name"),
        "user.mail" => first_element("users", "mail"),
        "user.phone" => first_element("users", "phone"),
        "shift.start" => first_element("shifts", "start"),
        "shift.end" => first_element("shifts", "end"),
        "shift.user" => first_element("shifts", "user"),

        // Flat filter-style keys against the collection value.
        "organization_name" => collection_field("organization", "name"),
        "organization_mail" => collection_field("organization", "mail"),
        "organization_phone" => collection_field("organization", "phone"),
        "manager_name" => collection_field("manager", "name"),
        "manager_mail" => collection_field("manager", "mail"),
        "manager_phone" => collection_field("manager", "phone"),
        "user_id" => collection_field("users", "id"),
        "user_name" => collection_field("users", "name"),
        "user_mail" => collection_field("users", "mail"),
        "user_phone" => collection_field("users", "phone"),
        "shift_id" => collection_field("shifts", "id"),
        "shift_start" => collection_field("shifts", "start"),
        "shift_end" => collection_field("shifts", "end"),
        "shift_user" => collection_field("shifts", "user"),

        // Plain columns.
        "ID" => SortTarget::Column(Column::Id),
        "alias" => SortTarget::Column(Column::Alias),
        "year" => SortTarget::Column(Column::Year),
        "start_date" => SortTarget::Column(Column::StartDate),
        "end_date" => SortTarget::Column(Column::EndDate),
        "status" => SortTarget::Column(Column::Status),
        "frequency" => SortTarget::Column(Column::Frequency),
        "created_at" => SortTarget::Column(Column::CreatedAt),
        "updated_at" => SortTarget::Column(Column::UpdatedAt),
        "description" => SortTarget::Column(Column::Description),

        _ => SortTarget::Column(Column::CreatedAt),
    };

    ResolvedSort { target, order }
}

fn first_element(collection: &'static str, field: &'static str) -> SortTarget {
    SortTarget::FirstElement { collection, field }
}

fn collection_field(collection: &'static str, field: &'static str) -> SortTarget {
    SortTarget::CollectionField { collection, field }
}

/// Compiles the normalized parameters into one conjunctive predicate set.
/// Each present field contributes exactly one independent predicate;
/// malformed optional dates skip their predicate instead of failing the
/// request.
pub fn filter_conditions(params: &ListSchedulesParams) -> Condition {
    let mut condition = Condition::all();

    if let Some(only_active) = params.only_active {
        condition = condition.add(if only_active {
            Column::DeletedAt.is_null()
        } else {
            Column::DeletedAt.is_not_null()
        });
    }

    if let Some(ref search) = params.search {
        let pattern = like_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Alias).ilike(pattern.clone()))
                .add(Expr::col(Column::Description).ilike(pattern))
                .add(any_element_ilike("organization", "name", search))
                .add(any_element_ilike("manager", "name", search)),
        );
    }

    if let Some(status) = params.status {
        condition = condition.add(Column::Status.eq(status));
    }
    if let Some(year) = params.year {
        condition = condition.add(Column::Year.eq(year));
    }

    if let Some(ref name) = params.organization_name {
        condition = condition.add(any_element_ilike("organization", "name", name));
    }
    if let Some(ref mail) = params.organization_mail {
        condition = condition.add(any_element_ilike("organization", "mail", mail));
    }
    if let Some(ref phone) = params.organization_phone {
        condition = condition.add(any_element_ilike("organization", "phone", phone));
    }

    if let Some(ref name) = params.manager_name {
        condition = condition.add(any_element_ilike("manager", "name", name));
    }
    if let Some(ref mail) = params.manager_mail {
        condition = condition.add(any_element_ilike("manager", "mail", mail));
    }
    if let Some(ref phone) = params.manager_phone {
        condition = condition.add(any_element_ilike("manager", "phone", phone));
    }

    if let Some(user_id) = params.user_id {
        condition = condition.add(any_element_id_eq("users", user_id));
    }
    if let Some(ref name) = params.user_name {
        condition = condition.add(any_element_ilike("users", "name", name));
    }
    if let Some(ref mail) = params.user_mail {
        condition = condition.add(any_element_ilike("users", "mail", mail));
    }
    if let Some(ref phone) = params.user_phone {
        condition = condition.add(any_element_ilike("users", "phone", phone));
    }

    if let Some(shift_id) = params.shift_id {
        condition = condition.add(any_element_id_eq("shifts", shift_id));
    }
    if let Some(ref shift_start) = params.shift_start {
        if let Some(date) = parse_date(shift_start) {
            condition = condition.add(any_shift_date("start", ">=", date));
        }
    }
    if let Some(ref shift_end) = params.shift_end {
        if let Some(date) = parse_date(shift_end) {
            condition = condition.add(any_shift_date("end", "<=", date));
        }
    }
    if let Some(ref shift_user) = params.shift_user {
        condition = condition.add(any_element_ilike("shifts", "user", shift_user));
    }

    if let Some(ref start_date) = params.start_date {
        if let Some(date) = parse_date(start_date) {
            condition = condition.add(Column::StartDate.gte(start_of_day(date)));
        }
    }
    if let Some(ref end_date) = params.end_date {
        if let Some(date) = parse_date(end_date) {
            condition = condition.add(Column::EndDate.lte(start_of_day(date)));
        }
    }

    if let Some(range_year) = params.range_year {
        if let Some((year_start, year_end)) = year_bounds(range_year) {
            // [start_date, end_date] overlaps the calendar year interval
            condition = condition
                .add(Column::StartDate.lte(year_end))
                .add(Column::EndDate.gte(year_start));
        }
    }

    condition
}

fn like_pattern(value: &str) -> String {
    format!("%{value}%")
}

/// At least one element of the collection has `field` matching the value,
/// case-insensitive partial.
fn any_element_ilike(collection: &str, field: &str, value: &str) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            "EXISTS (SELECT 1 FROM jsonb_array_elements({collection}) AS e WHERE e->>'{field}' ILIKE $1)"
        ),
        [like_pattern(value)],
    )
}

/// At least one element of the collection has a numeric `id` equal to the
/// given value.
fn any_element_id_eq(collection: &str, id: i32) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            "EXISTS (SELECT 1 FROM jsonb_array_elements({collection}) AS e WHERE (e->>'id')::int = $1)"
        ),
        [id],
    )
}

/// At least one element of the shifts collection has `field`, read as a
/// date, on the wanted side of the given day.
fn any_shift_date(field: &str, op: &'static str, date: NaiveDate) -> SimpleExpr {
    Expr::cust_with_values(
        format!(
            "EXISTS (SELECT 1 FROM jsonb_array_elements(shifts) AS e WHERE (e->>'{field}')::date {op} $1)"
        ),
        [date],
    )
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Calendar-year bounds [Jan 1 00:00:00, Dec 31 23:59:59] in UTC+3, the
/// timezone schedule dates are entered in.
fn year_bounds(year: i32) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let tz = FixedOffset::east_opt(3 * 3600)?;
    let start = tz.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let end = tz.with_ymd_and_hms(year, 12, 31, 23, 59, 59).single()?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryOrder, QueryTrait};

    use super::*;
    use crate::entity::shift_schedules::Entity;

    fn render(params: &ListSchedulesParams) -> String {
        Entity::find()
            .filter(filter_conditions(params))
            .build(DbBackend::Postgres)
            .to_string()
    }

    fn render_sorted(sort_by: &str, sort_order: &str) -> String {
        let resolved = resolve_sort(sort_by, sort_order);
        Entity::find()
            .order_by(resolved.target.into_simple_expr(), resolved.order)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn dotted_aliases_resolve_to_first_element() {
        let cases = [
            ("organization.name", "organization", "name"),
            ("organization.mail", "organization", "mail"),
            ("organization.phone", "organization", "phone"),
            ("manager.name", "manager", "name"),
            ("manager.mail", "manager", "mail"),
            ("manager.phone", "manager", "phone"),
            ("user.name", "users", "name"),
            ("user.mail", "users", "mail"),
            ("user.phone", "users", "phone"),
            ("shift.start", "shifts", "start"),
            ("shift.end", "shifts", "end"),
            ("shift.user", "shifts", "user"),
        ];
        for (sort_by, collection, field) in cases {
            let resolved = resolve_sort(sort_by, "ASC");
            assert_eq!(resolved.order, Order::Asc);
            match resolved.target {
                SortTarget::FirstElement {
                    collection: c,
                    field: f,
                } => {
                    assert_eq!((c, f), (collection, field), "alias {sort_by}");
                }
                other => panic!("alias {sort_by} resolved to {other:?}"),
            }
        }
    }

    #[test]
    fn flat_keys_resolve_to_collection_field() {
        let resolved = resolve_sort("shift_user", "asc");
        assert_eq!(resolved.order, Order::Asc);
        match resolved.target {
            SortTarget::CollectionField { collection, field } => {
                assert_eq!((collection, field), ("shifts", "user"));
            }
            other => panic!("unexpected target {other:?}"),
        }
    }

    #[test]
    fn plain_columns_resolve_to_themselves() {
        assert!(matches!(
            resolve_sort("ID", "DESC").target,
            SortTarget::Column(Column::Id)
        ));
        assert!(matches!(
            resolve_sort("alias", "DESC").target,
            SortTarget::Column(Column::Alias)
        ));
        assert!(matches!(
            resolve_sort("year", "DESC").target,
            SortTarget::Column(Column::Year)
        ));
    }

    #[test]
    fn resolution_is_total_and_never_echoes_input() {
        for sort_by in ["", "unknown", "alias; DROP TABLE shift_schedule", "id"] {
            for sort_order in ["", "ASC", "sideways", "desc; --"] {
                let resolved = resolve_sort(sort_by, sort_order);
                assert!(matches!(resolved.target, SortTarget::Column(Column::CreatedAt)));
                assert!(matches!(resolved.order, Order::Asc | Order::Desc));
            }
        }
    }

    #[test]
    fn order_token_falls_back_to_desc() {
        assert_eq!(resolve_sort("alias", "ASC").order, Order::Asc);
        assert_eq!(resolve_sort("alias", "asc").order, Order::Asc);
        assert_eq!(resolve_sort("alias", "DESC").order, Order::Desc);
        assert_eq!(resolve_sort("alias", "").order, Order::Desc);
        assert_eq!(resolve_sort("alias", "upwards").order, Order::Desc);
        // validated on the dotted branch too
        assert_eq!(resolve_sort("organization.name", "sideways").order, Order::Desc);
    }

    #[test]
    fn sort_renders_safelisted_expression() {
        let sql = render_sorted("organization.name", "ASC");
        assert!(sql.contains("ORDER BY (organization->0->>'name') ASC"), "{sql}");

        let sql = render_sorted("shift_user", "DESC");
        assert!(sql.contains("ORDER BY shifts->>'user' DESC"), "{sql}");

        let sql = render_sorted("anything-else", "DESC");
        assert!(sql.contains(r#"ORDER BY "shift_schedule"."created_at" DESC"#), "{sql}");
    }

    #[test]
    fn only_active_partitions_on_deleted_at() {
        let active = render(&ListSchedulesParams::default().normalized());
        assert!(active.contains(r#""deleted_at" IS NULL"#), "{active}");

        let deleted = render(
            &ListSchedulesParams {
                only_active: Some(false),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(deleted.contains(r#""deleted_at" IS NOT NULL"#), "{deleted}");
    }

    #[test]
    fn search_matches_four_ways() {
        let sql = render(
            &ListSchedulesParams {
                search: Some("acme".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(sql.contains(r#""alias" ILIKE '%acme%'"#), "{sql}");
        assert!(sql.contains(r#""description" ILIKE '%acme%'"#), "{sql}");
        assert!(
            sql.contains("jsonb_array_elements(organization) AS e WHERE e->>'name' ILIKE '%acme%'"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(manager) AS e WHERE e->>'name' ILIKE '%acme%'"),
            "{sql}"
        );
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn status_and_year_are_exact_equality() {
        let sql = render(
            &ListSchedulesParams {
                status: Some(1),
                year: Some(2024),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(sql.contains(r#""status" = 1"#), "{sql}");
        assert!(sql.contains(r#""year" = 2024"#), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
    }

    #[test]
    fn collection_filters_are_existential() {
        let sql = render(
            &ListSchedulesParams {
                organization_mail: Some("ops@corp".to_string()),
                manager_phone: Some("555".to_string()),
                user_name: Some("alice".to_string()),
                shift_user: Some("bob".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(
            sql.contains("EXISTS (SELECT 1 FROM jsonb_array_elements(organization) AS e WHERE e->>'mail' ILIKE '%ops@corp%')"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(manager) AS e WHERE e->>'phone' ILIKE '%555%'"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(users) AS e WHERE e->>'name' ILIKE '%alice%'"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(shifts) AS e WHERE e->>'user' ILIKE '%bob%'"),
            "{sql}"
        );
        // every fragment value is substituted into the render, never left
        // as a placeholder
        assert!(!sql.contains('?'), "{sql}");
        assert!(!sql.contains("$1"), "{sql}");
    }

    #[test]
    fn id_filters_compare_numerically() {
        let sql = render(
            &ListSchedulesParams {
                user_id: Some(42),
                shift_id: Some(7),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(
            sql.contains("jsonb_array_elements(users) AS e WHERE (e->>'id')::int = 42"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(shifts) AS e WHERE (e->>'id')::int = 7"),
            "{sql}"
        );
        assert!(!sql.contains('?'), "{sql}");
        assert!(!sql.contains("$1"), "{sql}");
    }

    #[test]
    fn shift_date_filters_compare_as_dates() {
        let sql = render(
            &ListSchedulesParams {
                shift_start: Some("2024-03-01".to_string()),
                shift_end: Some("2024-03-31".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(
            sql.contains("jsonb_array_elements(shifts) AS e WHERE (e->>'start')::date >= '2024-03-01'"),
            "{sql}"
        );
        assert!(
            sql.contains("jsonb_array_elements(shifts) AS e WHERE (e->>'end')::date <= '2024-03-31'"),
            "{sql}"
        );
    }

    #[test]
    fn malformed_dates_skip_their_predicate() {
        let baseline = render(&ListSchedulesParams::default().normalized());
        let with_bad_dates = render(
            &ListSchedulesParams {
                shift_start: Some("not-a-date".to_string()),
                shift_end: Some("2024-13-99".to_string()),
                start_date: Some("yesterday".to_string()),
                end_date: Some("2024/01/01".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert_eq!(baseline, with_bad_dates);
    }

    #[test]
    fn top_level_date_filters_compare_columns() {
        let sql = render(
            &ListSchedulesParams {
                start_date: Some("2024-01-01".to_string()),
                end_date: Some("2024-06-30".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(sql.contains(r#""start_date" >="#), "{sql}");
        assert!(sql.contains(r#""end_date" <="#), "{sql}");
    }

    #[test]
    fn range_year_overlaps_utc_plus_three_interval() {
        let sql = render(
            &ListSchedulesParams {
                range_year: Some(2023),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(sql.contains(r#""start_date" <="#), "{sql}");
        assert!(sql.contains(r#""end_date" >="#), "{sql}");
        assert!(sql.contains("2023-12-31 23:59:59"), "{sql}");
        assert!(sql.contains("2023-01-01 00:00:00"), "{sql}");
    }

    #[test]
    fn filters_are_conjunctive() {
        let one = render(
            &ListSchedulesParams {
                status: Some(1),
                ..Default::default()
            }
            .normalized(),
        );
        let two = render(
            &ListSchedulesParams {
                status: Some(1),
                organization_name: Some("acme".to_string()),
                ..Default::default()
            }
            .normalized(),
        );
        assert!(two.len() > one.len());
        assert!(two.contains(" AND "), "{two}");
        assert!(!two.contains(" OR "), "{two}");
    }
}
