use crate::error::Result;
use crate::models::labels::parse_label_list;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product_ID")]
    pub product_id: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Average_Rating_of_Similar_Products")]
    pub avg_similar_rating: f64,
    #[serde(rename = "Product_Rating")]
    pub product_rating: f64,
    #[serde(rename = "Customer_Review_Sentiment_Score")]
    pub sentiment_score: f64,
    #[serde(rename = "Holiday")]
    pub holiday: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Geographical_Location")]
    pub location: String,
    /// Raw label-list text, e.g. `['Jeans', 'Shoes']`.
    #[serde(rename = "Similar_Product_List")]
    pub similar_products: String,
    #[serde(rename = "Probability_of_Recommendation")]
    pub recommendation_probability: f64,
}

impl Product {
    pub fn similar_labels(&self) -> Result<Vec<String>> {
        parse_label_list(&self.similar_products)
    }

    /// Descriptive text fed to the embedder: category, subcategory, and the
    /// string form of the similar-product list.
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {}",
            self.category, self.subcategory, self.similar_products
        )
    }

    pub fn price_within(&self, min_price: f64, max_price: f64) -> bool {
        self.price >= min_price && self.price <= max_price
    }
}
