use log::debug;

/// Output dimension of every embedding this module produces.
pub const EMBEDDING_DIMENSIONS: usize = 256;

const MAX_TEXT_PREVIEW_LENGTH: usize = 60;

/// Deterministic, process-local text embedder.
///
/// Encodes text as a hashed bag of tokens: each alphanumeric token is
/// FNV-1a-hashed into one of `EMBEDDING_DIMENSIONS` buckets with a
/// length-based weight, then the vector is L2-normalized. Identical text
/// always yields an identical vector, which is the contract the similarity
/// core relies on when it caches product vectors at startup.
#[derive(Debug, Clone, Default)]
pub struct TextEmbedder;

impl TextEmbedder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a single text into a fixed-dimension unit vector. Empty or
    /// non-alphanumeric text maps to the zero vector.
    pub fn encode(&self, text: &str) -> Vec<f32> {
        debug!(
            "Encoding text (length: {}): {}{}",
            text.len(),
            &text[..text.len().min(MAX_TEXT_PREVIEW_LENGTH)],
            if text.len() > MAX_TEXT_PREVIEW_LENGTH {
                "..."
            } else {
                ""
            }
        );

        let mut vector = vec![0.0_f32; EMBEDDING_DIMENSIONS];
        let mut token = String::with_capacity(24);
        for ch in text.chars() {
            if ch.is_alphanumeric() {
                token.extend(ch.to_lowercase());
            } else {
                accumulate_token(&mut vector, &mut token);
            }
        }
        accumulate_token(&mut vector, &mut token);

        normalize(&mut vector);
        vector
    }
}

fn accumulate_token(vector: &mut [f32], token: &mut String) {
    if token.is_empty() {
        return;
    }
    let weight = 1.0 + (token.len() as f32).ln();
    let bucket = (fnv1a(token.as_bytes()) % vector.len() as u64) as usize;
    vector[bucket] += weight;
    token.clear();
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf29ce484222325_u64;
    for byte in bytes {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x00000100000001b3_u64);
    }
    hash
}

/// Cosine similarity over the shared prefix of two vectors. Zero-magnitude
/// input yields 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_yields_identical_vectors() {
        let embedder = TextEmbedder::new();
        let a = embedder.encode("Fashion Jeans ['Jeans', 'Shoes']");
        let b = embedder.encode("Fashion Jeans ['Jeans', 'Shoes']");
        assert_eq!(a, b);
        assert_eq!(a.len(), EMBEDDING_DIMENSIONS);
    }

    #[test]
    fn encoded_vectors_are_unit_length() {
        let embedder = TextEmbedder::new();
        let v = embedder.encode("Books Biography Fiction");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_maps_to_zero_vector() {
        let embedder = TextEmbedder::new();
        let v = embedder.encode("  ... ");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn overlapping_text_scores_higher_than_disjoint() {
        let embedder = TextEmbedder::new();
        let query = embedder.encode("Fashion Jeans");
        let close = embedder.encode("Fashion Jeans Shoes");
        let far = embedder.encode("Electronics Laptop Headphones");
        assert!(
            cosine_similarity(&query, &close) > cosine_similarity(&query, &far),
            "token overlap should dominate the ranking"
        );
    }

    #[test]
    fn cosine_handles_non_normalized_and_zero_vectors() {
        assert!((cosine_similarity(&[2.0, 0.0], &[4.0, 0.0]) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
