pub mod config;
pub mod context;
pub mod normalizer;
pub mod pipeline;
pub mod settings;
pub mod stage;
pub mod unicode;

pub use config::{flags, Config};
pub use context::Context;
pub use normalizer::{normalize, NormalizeError, Normalizer};
pub use pipeline::Pipeline;
pub use settings::{MemoryStore, SettingsStore, SETTINGS_KEY};
pub use stage::append_periods::AppendPeriods;
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::decode_urls::DecodeUrls;
pub use stage::fix_english_quotes::FixEnglishQuotes;
pub use stage::fullwidth_punctuation::FullwidthPunctuation;
pub use stage::join_wrapped_words::JoinWrappedWords;
pub use stage::sentence_linebreaks::SentenceLinebreaks;
pub use stage::space_cjk_latin::SpaceCjkLatin;
pub use stage::strip_garbled::StripGarbled;
pub use stage::strip_linebreaks::StripLinebreaks;
pub use stage::trim_start::TrimStart;
pub use stage::unspace_cjk::UnspaceCjk;
