use crate::error::Result;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_CUSTOMERS_CSV: &str = "data/customers.csv";
const DEFAULT_PRODUCTS_CSV: &str = "data/products.csv";
const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    /// Path to the customer table CSV.
    pub customers_csv: String,
    /// Path to the product catalog CSV.
    pub products_csv: String,
    /// Default result count for the similarity recommender.
    pub default_top_n: usize,
}

impl Config {
    /// Assemble configuration from `APP_*` environment variables with coded
    /// defaults. Missing variables are never fatal; a missing or unreadable
    /// CSV path is handled later by the catalog's sample-data fallback.
    pub fn load() -> Result<Self> {
        Ok(Config {
            port: env::var("APP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            host: env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            customers_csv: env::var("APP_CUSTOMERS_CSV")
                .unwrap_or_else(|_| DEFAULT_CUSTOMERS_CSV.to_string()),
            products_csv: env::var("APP_PRODUCTS_CSV")
                .unwrap_or_else(|_| DEFAULT_PRODUCTS_CSV.to_string()),
            default_top_n: env::var("APP_DEFAULT_TOP_N")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOP_N),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            customers_csv: DEFAULT_CUSTOMERS_CSV.to_string(),
            products_csv: DEFAULT_PRODUCTS_CSV.to_string(),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}
