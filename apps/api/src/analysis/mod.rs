// Keyword match engine: normalization, JD keyword extraction, resume scoring.
// Everything in here is synchronous and side-effect free apart from logging.
// HTTP and document decoding live in `routes` and `documents`.

pub mod diagnostics;
pub mod feedback;
pub mod frequency;
pub mod keywords;
pub mod matching;
pub mod normalizer;
pub mod pipeline;
pub mod resources;
pub mod stopwords;
pub mod tokenizer;
