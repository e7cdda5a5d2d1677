use crate::ml::{cosine_similarity, TextEmbedder};
use crate::models::{Product, SimilarProduct};
use tracing::{debug, info};

/// Product vectors cached at catalog-load time, row-aligned with the product
/// table. The embedder is deterministic, so the cache never needs refreshing
/// while the snapshot lives.
pub struct SimilarityIndex {
    embedder: TextEmbedder,
    vectors: Vec<Vec<f32>>,
}

impl SimilarityIndex {
    /// Embeds every product's descriptive text once. O(catalog size),
    /// amortized over the process lifetime.
    pub fn build(embedder: TextEmbedder, products: &[Product]) -> Self {
        let vectors = products
            .iter()
            .map(|p| embedder.encode(&p.embedding_text()))
            .collect::<Vec<_>>();
        info!("Built similarity index over {} products", vectors.len());
        Self { embedder, vectors }
    }

    /// Ranks the catalog by cosine similarity to the customer's combined
    /// interest text and returns the best `top_n` rows. Ties keep first-seen
    /// catalog order (stable sort); see DESIGN.md.
    ///
    /// `products` must be the same table the index was built from.
    pub fn top_similar(
        &self,
        products: &[Product],
        interests: &[String],
        top_n: usize,
    ) -> Vec<SimilarProduct> {
        let query_text = interests.join(" ");
        let query = self.embedder.encode(&query_text);
        debug!(
            "Ranking {} products against interest text `{}`",
            products.len(),
            query_text
        );

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(row, vector)| (row, cosine_similarity(&query, vector)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(top_n)
            .filter_map(|(row, similarity)| {
                products.get(row).map(|product| SimilarProduct {
                    product: product.clone(),
                    similarity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, subcategory: &str, similar: &str) -> Product {
        Product {
            product_id: id.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            price: 100.0,
            brand: "Brand A".into(),
            avg_similar_rating: 4.0,
            product_rating: 3.0,
            sentiment_score: 0.5,
            holiday: "No".into(),
            season: "Summer".into(),
            location: "India".into(),
            similar_products: similar.into(),
            recommendation_probability: 0.5,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("P1", "Fashion", "Jeans", "['Jeans', 'Shoes']"),
            product("P2", "Electronics", "Laptop", "['Headphones', 'Smartphone']"),
            product("P3", "Books", "Biography", "['Novel', 'Biography']"),
            product("P4", "Fashion", "T-shirt", "['Jeans', 'T-shirt']"),
        ]
    }

    #[test]
    fn interest_overlap_drives_the_ranking() {
        let products = fixture();
        let index = SimilarityIndex::build(TextEmbedder::new(), &products);
        let interests = vec!["Fashion".to_string(), "Jeans".to_string()];
        let top = index.top_similar(&products, &interests, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product.product_id, "P1");
        assert!(top[0].similarity >= top[1].similarity);
    }

    #[test]
    fn ranking_is_invariant_to_catalog_row_order() {
        let products = fixture();
        let mut reversed = products.clone();
        reversed.reverse();

        let interests = vec!["Books".to_string(), "Biography".to_string()];
        let forward = SimilarityIndex::build(TextEmbedder::new(), &products);
        let backward = SimilarityIndex::build(TextEmbedder::new(), &reversed);

        let mut ids_forward: Vec<String> = forward
            .top_similar(&products, &interests, 2)
            .into_iter()
            .map(|r| r.product.product_id)
            .collect();
        let mut ids_backward: Vec<String> = backward
            .top_similar(&reversed, &interests, 2)
            .into_iter()
            .map(|r| r.product.product_id)
            .collect();
        ids_forward.sort();
        ids_backward.sort();
        assert_eq!(ids_forward, ids_backward);
    }

    #[test]
    fn top_n_larger_than_catalog_returns_everything() {
        let products = fixture();
        let index = SimilarityIndex::build(TextEmbedder::new(), &products);
        let top = index.top_similar(&products, &["Fashion".to_string()], 50);
        assert_eq!(top.len(), products.len());
    }

    #[test]
    fn scores_are_sorted_descending() {
        let products = fixture();
        let index = SimilarityIndex::build(TextEmbedder::new(), &products);
        let top = index.top_similar(&products, &["Jeans".to_string()], 4);
        for pair in top.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }
}
