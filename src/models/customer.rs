use crate::error::Result;
use crate::models::labels::parse_label_list;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// Raw label-list text, e.g. `['Books', 'Fashion']`. Parsed on demand so
    /// a malformed value fails a single request, not the catalog load.
    #[serde(rename = "Browsing_History")]
    pub browsing_history: String,
    #[serde(rename = "Purchase_History")]
    pub purchase_history: String,
    #[serde(rename = "Customer_Segment")]
    pub customer_segment: String,
    #[serde(rename = "Avg_Order_Value")]
    pub avg_order_value: f64,
    #[serde(rename = "Holiday")]
    pub holiday: String,
    #[serde(rename = "Season")]
    pub season: String,
}

impl Customer {
    pub fn browsing_labels(&self) -> Result<Vec<String>> {
        parse_label_list(&self.browsing_history)
    }

    pub fn purchase_labels(&self) -> Result<Vec<String>> {
        parse_label_list(&self.purchase_history)
    }

    /// Union of browsing and purchase labels, in first-seen order.
    pub fn interest_labels(&self) -> Result<Vec<String>> {
        let mut labels = self.browsing_labels()?;
        for label in self.purchase_labels()? {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        Ok(labels)
    }
}
