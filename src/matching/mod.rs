pub mod match_model;
pub mod matcher;
pub mod synonyms;
