pub mod cleaner;
pub mod intensity;
pub mod lexicon;
pub mod scorer;
pub mod stopwords;
pub mod subjectivity;

pub use cleaner::TextCleaner;
pub use intensity::IntensityAnalyzer;
pub use scorer::LexiconScorer;
pub use subjectivity::SubjectivityAnalyzer;
