pub mod embedder;

pub use embedder::{cosine_similarity, TextEmbedder};
