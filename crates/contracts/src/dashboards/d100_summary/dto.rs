use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a003_order::OrderStatus;

/// Response of `GET /api/orders/stats/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "todayOrders", default)]
    pub today_orders: u32,
    #[serde(rename = "ordersByStatus", default)]
    pub orders_by_status: Vec<StatusCount>,
    #[serde(rename = "revenueThisMonth", default)]
    pub revenue_this_month: f64,
    #[serde(rename = "outstandingBalance", default)]
    pub outstanding_balance: f64,
    #[serde(rename = "inProgressOrders", default)]
    pub in_progress_orders: u32,
}

/// Order count for one status (`_id` is the status value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    #[serde(rename = "_id")]
    pub status: String,
    pub count: u32,
}

/// One row of the orders-by-status breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct StatusShare {
    pub label: String,
    /// Known status, `None` for values the dashboard does not recognize
    pub status: Option<OrderStatus>,
    pub count: u32,
    /// Percentage of all orders, 0..=100
    pub percent: f64,
}

impl DashboardStats {
    pub fn total_orders(&self) -> u32 {
        self.orders_by_status.iter().map(|s| s.count).sum()
    }

    /// Breakdown rows ordered by the status lifecycle, unknown statuses last.
    pub fn status_shares(&self) -> Vec<StatusShare> {
        let total = self.total_orders();
        let mut rows: Vec<StatusShare> = self
            .orders_by_status
            .iter()
            .map(|s| StatusShare {
                label: s.status.clone(),
                status: OrderStatus::from_code(&s.status),
                count: s.count,
                percent: if total == 0 {
                    0.0
                } else {
                    f64::from(s.count) * 100.0 / f64::from(total)
                },
            })
            .collect();
        rows.sort_by_key(|r| {
            r.status
                .and_then(|st| OrderStatus::all().iter().position(|x| *x == st))
                .unwrap_or(usize::MAX)
        });
        rows
    }
}

/// Entry of `GET /api/customers/top`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "montoAbonado", default)]
    pub amount_paid: f64,
    #[serde(rename = "cantidadPagos", default)]
    pub payment_count: u32,
    #[serde(rename = "ultimaFecha", default)]
    pub last_date: Option<DateTime<Utc>>,
}

/// Order not completed within three days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayedOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fecha", default)]
    pub date: Option<DateTime<Utc>>,
}

/// Response of `GET /api/orders/delayed` (five oldest plus the total count)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelayedOrders {
    #[serde(default)]
    pub orders: Vec<DelayedOrder>,
    #[serde(rename = "totalCount", default)]
    pub total_count: u32,
}

impl DelayedOrders {
    /// Delayed orders beyond the ones listed
    pub fn hidden_count(&self) -> u32 {
        self.total_count
            .saturating_sub(u32::try_from(self.orders.len()).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_wire() {
        let json = r#"{
            "todayOrders": 3,
            "ordersByStatus": [
                {"_id": "Entregado", "count": 2},
                {"_id": "Recibido", "count": 6},
                {"_id": "Archivado", "count": 2}
            ],
            "revenueThisMonth": 125000.5,
            "outstandingBalance": 4000,
            "inProgressOrders": 1
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders(), 10);

        let shares = stats.status_shares();
        assert_eq!(shares[0].status, Some(OrderStatus::Received));
        assert_eq!(shares[0].percent, 60.0);
        assert_eq!(shares[1].status, Some(OrderStatus::Delivered));
        assert_eq!(shares[2].status, None);
        assert_eq!(shares[2].label, "Archivado");
    }

    #[test]
    fn test_empty_stats_have_no_division_by_zero() {
        let stats = DashboardStats {
            orders_by_status: vec![StatusCount {
                status: "Recibido".into(),
                count: 0,
            }],
            ..Default::default()
        };
        assert_eq!(stats.status_shares()[0].percent, 0.0);
    }

    #[test]
    fn test_delayed_orders() {
        let json = r#"{"orders":[{"_id":"o1","nombre":"Ana Gómez","estado":"Recibido","fecha":"2024-01-01T00:00:00Z"}],"totalCount":7}"#;
        let delayed: DelayedOrders = serde_json::from_str(json).unwrap();
        assert_eq!(delayed.orders[0].name, "Ana Gómez");
        assert_eq!(delayed.hidden_count(), 6);
    }
}
