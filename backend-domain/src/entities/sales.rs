// Sales order records browsed on the sales page

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesContact {
    #[serde(default)]
    pub f_name: Option<String>,
    #[serde(default)]
    pub l_name: Option<String>,
    #[serde(default)]
    pub phone: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    /// Store key, filled in by the repository when the mapping is flattened.
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub f_name: Option<String>,
    #[serde(default)]
    pub l_name: Option<String>,
    #[serde(default)]
    pub primary_contact: Option<SalesContact>,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub create_new_order: Option<String>,
    #[serde(default)]
    pub payment_amount: Option<f64>,
}

impl SalesOrder {
    /// `"fName lName"` with per-field fallback to the primary contact.
    pub fn client_name(&self) -> String {
        let first = self
            .f_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.contact_field(|contact| contact.f_name.as_deref()))
            .unwrap_or("");
        let last = self
            .l_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.contact_field(|contact| contact.l_name.as_deref()))
            .unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }

    /// Order date used for filtering: updateDate, falling back to the
    /// creation stamp.
    pub fn order_date(&self) -> Option<&str> {
        self.update_date
            .as_deref()
            .or(self.create_new_order.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        self.primary_contact
            .as_ref()?
            .phone
            .first()
            .map(String::as_str)
    }

    fn contact_field<'a, F>(&'a self, field: F) -> Option<&'a str>
    where
        F: Fn(&'a SalesContact) -> Option<&'a str>,
    {
        self.primary_contact.as_ref().and_then(field)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    /// Exact client full name, or no client restriction.
    pub client: Option<String>,
    /// `YYYY-MM` prefix of the order date.
    pub month: Option<String>,
    /// `YYYY` prefix of the order date.
    pub year: Option<String>,
}

impl SalesFilter {
    pub fn matches(&self, order: &SalesOrder) -> bool {
        if let Some(client) = &self.client {
            if order.client_name() != *client {
                return false;
            }
        }
        for prefix in [&self.month, &self.year].into_iter().flatten() {
            match order.order_date() {
                Some(date) if date.starts_with(prefix.as_str()) => {}
                _ => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub orders: Vec<SalesOrder>,
    pub total_sum: f64,
    /// Distinct client names over the full set, ascending.
    pub clients: Vec<String>,
    /// Distinct `YYYY-MM` values over the full set, most recent first.
    pub months: Vec<String>,
    /// Distinct `YYYY` values over the full set, most recent first.
    pub years: Vec<String>,
}

/// Filter option lists always come from the full set; only the order list
/// and the payment sum honor the filter.
pub fn build_sales_report(all_orders: &[SalesOrder], filter: &SalesFilter) -> SalesReport {
    let mut clients = BTreeSet::new();
    let mut months = BTreeSet::new();
    let mut years = BTreeSet::new();
    for order in all_orders {
        let name = order.client_name();
        if !name.is_empty() {
            clients.insert(name);
        }
        if let Some(date) = order.order_date() {
            if let Some(month) = date.get(0..7) {
                months.insert(month.to_string());
            }
            if let Some(year) = date.get(0..4) {
                years.insert(year.to_string());
            }
        }
    }

    let orders: Vec<SalesOrder> = all_orders
        .iter()
        .filter(|order| filter.matches(order))
        .cloned()
        .collect();
    let total_sum = orders
        .iter()
        .filter_map(|order| order.payment_amount)
        .sum();

    SalesReport {
        orders,
        total_sum,
        clients: clients.into_iter().collect(),
        months: months.into_iter().rev().collect(),
        years: years.into_iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(
        f_name: Option<&str>,
        l_name: Option<&str>,
        update_date: Option<&str>,
        payment: Option<f64>,
    ) -> SalesOrder {
        SalesOrder {
            f_name: f_name.map(str::to_string),
            l_name: l_name.map(str::to_string),
            update_date: update_date.map(str::to_string),
            payment_amount: payment,
            ..SalesOrder::default()
        }
    }

    #[test]
    fn client_name_falls_back_to_primary_contact_per_field() {
        let mut sample = order(None, Some("Shevchenko"), None, None);
        sample.primary_contact = Some(SalesContact {
            f_name: Some("Taras".to_string()),
            l_name: Some("Ignored".to_string()),
            phone: vec![],
        });
        assert_eq!(sample.client_name(), "Taras Shevchenko");
    }

    #[test]
    fn order_date_prefers_update_date() {
        let mut sample = order(None, None, Some("2026-07-01 10:00:00"), None);
        sample.create_new_order = Some("2026-06-01 09:00:00".to_string());
        assert_eq!(sample.order_date(), Some("2026-07-01 10:00:00"));
        sample.update_date = None;
        assert_eq!(sample.order_date(), Some("2026-06-01 09:00:00"));
    }

    #[test]
    fn report_filters_by_month_prefix_and_sums_payments() {
        let all = vec![
            order(Some("A"), Some("B"), Some("2026-07-01 10:00:00"), Some(100.0)),
            order(Some("C"), Some("D"), Some("2026-07-15 10:00:00"), Some(25.5)),
            order(Some("E"), Some("F"), Some("2026-06-30 10:00:00"), Some(999.0)),
        ];
        let filter = SalesFilter {
            month: Some("2026-07".to_string()),
            ..SalesFilter::default()
        };
        let report = build_sales_report(&all, &filter);
        assert_eq!(report.orders.len(), 2);
        assert!((report.total_sum - 125.5).abs() < f64::EPSILON);
        assert_eq!(report.months, vec!["2026-07", "2026-06"]);
        assert_eq!(report.years, vec!["2026"]);
    }

    #[test]
    fn report_option_lists_ignore_the_active_filter() {
        let all = vec![
            order(Some("A"), Some("B"), Some("2026-07-01 10:00:00"), None),
            order(Some("C"), Some("D"), Some("2025-01-01 10:00:00"), None),
        ];
        let filter = SalesFilter {
            year: Some("2026".to_string()),
            ..SalesFilter::default()
        };
        let report = build_sales_report(&all, &filter);
        assert_eq!(report.orders.len(), 1);
        assert_eq!(report.clients, vec!["A B", "C D"]);
        assert_eq!(report.years, vec!["2026", "2025"]);
    }

    #[test]
    fn missing_date_never_matches_a_date_filter() {
        let undated = order(Some("A"), Some("B"), None, None);
        let filter = SalesFilter {
            year: Some("2026".to_string()),
            ..SalesFilter::default()
        };
        assert!(!filter.matches(&undated));
        assert!(SalesFilter::default().matches(&undated));
    }
}
