use crate::config::Config;
use crate::error::Result;
use crate::models::{Customer, Product};
use csv::ReaderBuilder;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

/// Minimal compiled-in tables used when the configured CSV files cannot be
/// read. Mirrors the shipped sample data so every endpoint stays usable.
const SAMPLE_CUSTOMERS_CSV: &str = "\
Customer_ID,Age,Gender,Location,Browsing_History,Purchase_History,Customer_Segment,Avg_Order_Value,Holiday,Season
C1000,28,Female,Chennai,\"['Books', 'Fashion']\",\"['Biography', 'Jeans']\",New Visitor,4806.99,No,Winter
C1001,27,Male,Delhi,\"['Books', 'Fitness', 'Fashion']\",\"['Biography', 'Resistance Bands', 'T-shirt']\",Occasional Shopper,795.03,Yes,Autumn
C1002,34,Other,Chennai,['Electronics'],['Smartphone'],Occasional Shopper,1742.45,Yes,Summer
";

const SAMPLE_PRODUCTS_CSV: &str = "\
Product_ID,Category,Subcategory,Price,Brand,Average_Rating_of_Similar_Products,Product_Rating,Customer_Review_Sentiment_Score,Holiday,Season,Geographical_Location,Similar_Product_List,Probability_of_Recommendation
P2000,Fashion,Jeans,1713,Brand B,4.2,2.3,0.26,No,Summer,Canada,\"['Jeans', 'Shoes']\",0.91
P2001,Beauty,Lipstick,1232,Brand C,4.7,2.1,0.21,Yes,Winter,India,\"['Moisturizer', 'Lipstick', 'Lipstick']\",0.26
P2002,Electronics,Laptop,4833,Brand B,3.5,2.4,0.74,Yes,Spring,Canada,\"['Headphones', 'Headphones', 'Smartphone']\",0.6
";

/// Immutable snapshot of both source tables. Loaded once at startup and
/// shared read-only across requests; nothing mutates it after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    /// True when the configured files could not be read and the embedded
    /// sample was substituted. Surfaced through the health endpoint.
    pub from_embedded_sample: bool,
}

impl Catalog {
    /// Loads both tables from the configured CSV paths, falling back to the
    /// embedded sample on any read or parse failure. Never fails: a data-load
    /// problem degrades the catalog, it does not stop the process.
    pub fn load(config: &Config) -> Catalog {
        match Self::read_files(&config.customers_csv, &config.products_csv) {
            Ok(mut catalog) => {
                catalog.validate();
                info!(
                    "Loaded catalog: {} customers, {} products",
                    catalog.customers.len(),
                    catalog.products.len()
                );
                catalog
            }
            Err(e) => {
                warn!("Data loading error: {e}. Using embedded sample data.");
                Self::embedded_sample()
            }
        }
    }

    /// The compiled-in fallback tables.
    pub fn embedded_sample() -> Catalog {
        let mut catalog = Self::from_csv_text(SAMPLE_CUSTOMERS_CSV, SAMPLE_PRODUCTS_CSV)
            .expect("embedded sample data is well-formed");
        catalog.from_embedded_sample = true;
        catalog.validate();
        catalog
    }

    /// Parses both tables from in-memory CSV text.
    pub fn from_csv_text(customers_csv: &str, products_csv: &str) -> Result<Catalog> {
        let customers = read_records(customers_csv.trim_start().as_bytes())?;
        let products = read_records(products_csv.trim_start().as_bytes())?;
        Ok(Catalog {
            customers,
            products,
            from_embedded_sample: false,
        })
    }

    fn read_files(customers_path: &str, products_path: &str) -> Result<Catalog> {
        let customers = read_records(File::open(Path::new(customers_path))?)?;
        let products = read_records(File::open(Path::new(products_path))?)?;
        Ok(Catalog {
            customers,
            products,
            from_embedded_sample: false,
        })
    }

    /// Clamps out-of-range score columns and negative prices back into their
    /// documented ranges. A bad value is logged, never fatal.
    fn validate(&mut self) {
        for product in &mut self.products {
            if product.price < 0.0 {
                warn!(
                    "Product {} has negative price {}; clamping to 0",
                    product.product_id, product.price
                );
                product.price = 0.0;
            }
            if !(0.0..=1.0).contains(&product.sentiment_score) {
                warn!(
                    "Product {} sentiment score {} outside [0,1]; clamping",
                    product.product_id, product.sentiment_score
                );
                product.sentiment_score = product.sentiment_score.clamp(0.0, 1.0);
            }
            if !(0.0..=1.0).contains(&product.recommendation_probability) {
                warn!(
                    "Product {} recommendation probability {} outside [0,1]; clamping",
                    product.product_id, product.recommendation_probability
                );
                product.recommendation_probability =
                    product.recommendation_probability.clamp(0.0, 1.0);
            }
        }
    }

    pub fn find_customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id == customer_id)
    }

    /// The customer view after the location/season multi-select filters.
    /// `None` means the filter is not applied (all values pass).
    pub fn filtered_customers(
        &self,
        locations: Option<&[String]>,
        seasons: Option<&[String]>,
    ) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| matches_filter(&c.location, locations))
            .filter(|c| matches_filter(&c.season, seasons))
            .collect()
    }

    pub fn customer_ids(&self) -> Vec<String> {
        self.customers.iter().map(|c| c.customer_id.clone()).collect()
    }

    pub fn distinct_locations(&self) -> Vec<String> {
        distinct(self.customers.iter().map(|c| c.location.as_str()))
    }

    pub fn distinct_seasons(&self) -> Vec<String> {
        distinct(self.customers.iter().map(|c| c.season.as_str()))
    }
}

fn matches_filter(value: &str, filter: Option<&[String]>) -> bool {
    match filter {
        Some(allowed) => allowed.iter().any(|f| f == value),
        None => true,
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

fn read_records<T, R>(reader: R) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    R: std::io::Read,
{
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn embedded_sample_parses() {
        let catalog = Catalog::embedded_sample();
        assert!(catalog.from_embedded_sample);
        assert_eq!(catalog.customers.len(), 3);
        assert_eq!(catalog.products.len(), 3);

        let c1000 = catalog.find_customer("C1000").unwrap();
        assert_eq!(
            c1000.interest_labels().unwrap(),
            vec!["Books", "Fashion", "Biography", "Jeans"]
        );
        let p2000 = &catalog.products[0];
        assert_eq!(p2000.product_id, "P2000");
        assert_eq!(p2000.category, "Fashion");
        assert_eq!(p2000.recommendation_probability, 0.91);
    }

    #[test]
    fn unreadable_paths_fall_back_to_sample() {
        let config = Config {
            customers_csv: "no/such/customers.csv".into(),
            products_csv: "no/such/products.csv".into(),
            ..Config::default()
        };
        let catalog = Catalog::load(&config);
        assert!(catalog.from_embedded_sample);
        assert!(!catalog.customers.is_empty());
    }

    #[test]
    fn filters_narrow_the_customer_view() {
        let catalog = Catalog::embedded_sample();
        let chennai = vec!["Chennai".to_string()];
        let filtered = catalog.filtered_customers(Some(&chennai), None);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.location == "Chennai"));

        let summer = vec!["Summer".to_string()];
        let filtered = catalog.filtered_customers(Some(&chennai), Some(&summer));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer_id, "C1002");
    }

    #[test]
    fn validate_clamps_out_of_range_scores() {
        let products_csv = "\
Product_ID,Category,Subcategory,Price,Brand,Average_Rating_of_Similar_Products,Product_Rating,Customer_Review_Sentiment_Score,Holiday,Season,Geographical_Location,Similar_Product_List,Probability_of_Recommendation
P1,Fashion,Jeans,-5,Brand A,4.0,3.0,1.4,No,Summer,India,\"['Jeans']\",-0.2
";
        let mut catalog = Catalog::from_csv_text(SAMPLE_CUSTOMERS_CSV, products_csv).unwrap();
        catalog.validate();
        let p = &catalog.products[0];
        assert_eq!(p.price, 0.0);
        assert_eq!(p.sentiment_score, 1.0);
        assert_eq!(p.recommendation_probability, 0.0);
    }
}
