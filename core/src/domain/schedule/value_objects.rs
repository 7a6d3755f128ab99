use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::schedule::entities::{Contact, ScheduleUser, Shift, ShiftSchedule};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_SORT_BY: &str = "created_at";
pub const DEFAULT_SORT_ORDER: &str = "DESC";

/// Request-scoped list parameters. Raw request values bind here; call
/// [`ListSchedulesParams::normalized`] before handing the value to the
/// repository. Unknown or malformed filter values never raise an error;
/// they degrade to "not provided" further downstream, per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSchedulesParams {
    pub page: u64,
    pub page_size: u64,
    pub search: Option<String>,

    pub sort_by: String,
    pub sort_order: String,

    /// `Some(true)` keeps live rows, `Some(false)` selects soft-deleted rows
    /// only. Defaults to `Some(true)` when unset.
    pub only_active: Option<bool>,
    pub status: Option<i32>,
    pub year: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub organization_name: Option<String>,
    pub organization_mail: Option<String>,
    pub organization_phone: Option<String>,
    pub manager_name: Option<String>,
    pub manager_mail: Option<String>,
    pub manager_phone: Option<String>,
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    pub user_mail: Option<String>,
    pub user_phone: Option<String>,
    pub shift_id: Option<i32>,
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
    pub shift_user: Option<String>,
    pub range_year: Option<i32>,
}

impl ListSchedulesParams {
    /// Applies the normalization defaults: page >= 1, page_size within
    /// [1, 100], sort defaults, only_active defaulting to true, and blank
    /// string filters collapsing to "not provided".
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = DEFAULT_PAGE;
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.sort_by.trim().is_empty() {
            self.sort_by = DEFAULT_SORT_BY.to_string();
        }
        if self.sort_order.trim().is_empty() {
            self.sort_order = DEFAULT_SORT_ORDER.to_string();
        }
        if self.only_active.is_none() {
            self.only_active = Some(true);
        }

        self.search = none_if_blank(self.search);
        self.start_date = none_if_blank(self.start_date);
        self.end_date = none_if_blank(self.end_date);
        self.organization_name = none_if_blank(self.organization_name);
        self.organization_mail = none_if_blank(self.organization_mail);
        self.organization_phone = none_if_blank(self.organization_phone);
        self.manager_name = none_if_blank(self.manager_name);
        self.manager_mail = none_if_blank(self.manager_mail);
        self.manager_phone = none_if_blank(self.manager_phone);
        self.user_name = none_if_blank(self.user_name);
        self.user_mail = none_if_blank(self.user_mail);
        self.user_phone = none_if_blank(self.user_phone);
        self.shift_start = none_if_blank(self.shift_start);
        self.shift_end = none_if_blank(self.shift_end);
        self.shift_user = none_if_blank(self.shift_user);

        self
    }

    /// Saturates instead of overflowing: `page` comes straight off the
    /// query string and can be arbitrarily large.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// One page of schedules plus the envelope metadata echoed back to the
/// caller. `sort_by`/`sort_order` carry the requested strings (default-filled
/// when blank), not the safelist-resolved expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleListPage {
    pub data: Vec<ShiftSchedule>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub sort_by: String,
    pub sort_order: String,
}

impl ScheduleListPage {
    pub fn new(data: Vec<ShiftSchedule>, total: u64, params: &ListSchedulesParams) -> Self {
        // page_size is clamped to >= 1 during normalization
        let total_pages = total.div_ceil(params.page_size.max(1));
        Self {
            data,
            total,
            page: params.page,
            page_size: params.page_size,
            total_pages,
            sort_by: params.sort_by.clone(),
            sort_order: params.sort_order.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleInput {
    pub alias: String,
    pub description: Option<String>,
    pub frequency: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub year: i32,
    pub status: i32,
    pub organization: Vec<Contact>,
    pub manager: Vec<Contact>,
    pub users: Vec<ScheduleUser>,
    pub shifts: Vec<Shift>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleInput {
    pub alias: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub year: Option<i32>,
    pub status: Option<i32>,
    pub organization: Option<Vec<Contact>>,
    pub manager: Option<Vec<Contact>>,
    pub users: Option<Vec<ScheduleUser>>,
    pub shifts: Option<Vec<Shift>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_applies_defaults_to_empty_params() {
        let params = ListSchedulesParams::default().normalized();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert_eq!(params.sort_by, "created_at");
        assert_eq!(params.sort_order, "DESC");
        assert_eq!(params.only_active, Some(true));
    }

    #[test]
    fn normalized_clamps_page_and_page_size() {
        let params = ListSchedulesParams {
            page: 0,
            page_size: 101,
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);

        let params = ListSchedulesParams {
            page: 3,
            page_size: 100,
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.page, 3);
        assert_eq!(params.page_size, 100);
        assert_eq!(params.offset(), 200);
    }

    #[test]
    fn offset_saturates_on_huge_page() {
        let params = ListSchedulesParams {
            page: u64::MAX,
            page_size: 100,
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.offset(), u64::MAX);

        // page 0 never underflows either, normalized or not
        let raw = ListSchedulesParams {
            page: 0,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(raw.offset(), 0);
    }

    #[test]
    fn normalized_keeps_explicit_only_active() {
        let params = ListSchedulesParams {
            only_active: Some(false),
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.only_active, Some(false));
    }

    #[test]
    fn normalized_drops_blank_string_filters() {
        let params = ListSchedulesParams {
            search: Some("  ".to_string()),
            organization_name: Some(String::new()),
            shift_user: Some("alice".to_string()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.search, None);
        assert_eq!(params.organization_name, None);
        assert_eq!(params.shift_user.as_deref(), Some("alice"));
    }

    #[test]
    fn normalized_preserves_unknown_sort_by() {
        // Unknown sort keys are echoed back as-is; the safelist fallback
        // happens at query-build time.
        let params = ListSchedulesParams {
            sort_by: "no-such-column".to_string(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(params.sort_by, "no-such-column");
    }

    #[test]
    fn page_envelope_rounds_total_pages_up() {
        let params = ListSchedulesParams::default().normalized();
        for (total, expected) in [(0, 0), (1, 1), (10, 1), (11, 2), (15, 2), (100, 10)] {
            let page = ScheduleListPage::new(Vec::new(), total, &params);
            assert_eq!(page.total_pages, expected, "total={total}");
            assert_eq!(page.total_pages == 0, total == 0);
        }
    }

    #[test]
    fn page_envelope_echoes_requested_sort() {
        let params = ListSchedulesParams {
            sort_by: "organization.name".to_string(),
            sort_order: "ASC".to_string(),
            ..Default::default()
        }
        .normalized();
        let page = ScheduleListPage::new(Vec::new(), 0, &params);
        assert_eq!(page.sort_by, "organization.name");
        assert_eq!(page.sort_order, "ASC");
    }
}
