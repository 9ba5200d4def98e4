//! Word cloud of the most frequent terms across all review texts.
//!
//! Frequencies are counted case-insensitively with stopwords removed, then
//! words are laid out largest-first along an Archimedean spiral from the
//! canvas center. A word that cannot be placed shrinks until it fits; once a
//! word fails at the minimum size, layout stops.

use crate::analysis::stopwords;
use crate::config::WordCloudSettings;
use crate::presenter::svg::SvgDocument;
use crate::utils::error::{Result, SentimentError};
use regex::Regex;
use std::collections::{HashMap, HashSet};

const RELATIVE_SCALING: f64 = 0.5;
const MIN_FONT_SIZE: f64 = 4.0;
const SHRINK_FACTOR: f64 = 0.85;
/// Approximate glyph advance as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.58;
const SPIRAL_STEP: f64 = 0.1;
const SPIRAL_GROWTH: f64 = 2.0;
const PADDING: f64 = 1.0;
const PALETTE: [&str; 6] = ["#440154", "#414487", "#2a788e", "#22a884", "#7ad151", "#bddf26"];

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: f64,
    /// Center of the word's bounding box.
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub words: Vec<PlacedWord>,
}

#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl BoundingBox {
    fn centered(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            left: x - w / 2.0 - PADDING,
            top: y - h / 2.0 - PADDING,
            right: x + w / 2.0 + PADDING,
            bottom: y + h / 2.0 + PADDING,
        }
    }

    fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
    }
}

pub struct WordCloudBuilder {
    settings: WordCloudSettings,
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl WordCloudBuilder {
    pub fn new(settings: WordCloudSettings) -> Self {
        Self {
            settings,
            token_regex: Regex::new(r"\w[\w']+").expect("static token pattern"),
            stop_words: stopwords::wordcloud(),
        }
    }

    /// Word counts across `texts`, most frequent first (ties alphabetical),
    /// truncated to `max_words`.
    pub fn frequencies<'a, I>(&self, texts: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for text in texts {
            let lowered = text.to_lowercase();
            for token in self.token_regex.find_iter(&lowered) {
                let word = token.as_str();
                let word = word.strip_suffix("'s").unwrap_or(word);
                if word.chars().count() < 2
                    || word.chars().all(|c| c.is_ascii_digit())
                    || self.stop_words.contains(word)
                {
                    continue;
                }
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }

        let counts = fold_plurals(counts);
        let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted.truncate(self.settings.max_words);
        sorted
    }

    /// Builds the cloud from all texts. Fails when no words remain after
    /// stopword removal.
    pub fn generate<'a, I>(&self, texts: I) -> Result<WordCloud>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let frequencies = self.frequencies(texts);
        if frequencies.is_empty() {
            return Err(SentimentError::ProcessingError {
                message: "word cloud needs at least 1 word, got 0".to_string(),
            });
        }
        Ok(self.layout(&frequencies))
    }

    fn layout(&self, frequencies: &[(String, usize)]) -> WordCloud {
        let width = self.settings.width as f64;
        let height = self.settings.height as f64;
        let mut placed: Vec<PlacedWord> = Vec::new();
        let mut boxes: Vec<BoundingBox> = Vec::new();

        // Largest size at which the most frequent word still fits across the canvas.
        let first_len = frequencies[0].0.chars().count() as f64;
        let mut font_size = (height * 0.6).min(width * 0.9 / (first_len * CHAR_WIDTH));
        let mut last_count = frequencies[0].1 as f64;

        for (index, (word, count)) in frequencies.iter().enumerate() {
            let count_f = *count as f64;
            if index > 0 {
                font_size = (RELATIVE_SCALING * (count_f / last_count) + (1.0 - RELATIVE_SCALING))
                    * font_size;
                font_size = font_size.round();
            }

            let chars = word.chars().count() as f64;
            let mut size = font_size;
            let mut spot = None;
            while size >= MIN_FONT_SIZE {
                let w = chars * size * CHAR_WIDTH;
                let h = size;
                if let Some((x, y, bbox)) = find_spot(width, height, w, h, &boxes) {
                    spot = Some((x, y, bbox));
                    break;
                }
                size = (size * SHRINK_FACTOR).floor();
            }

            let Some((x, y, bbox)) = spot else {
                tracing::debug!(
                    "Word cloud full after {} words, dropping '{}' and the rest",
                    placed.len(),
                    word
                );
                break;
            };

            boxes.push(bbox);
            placed.push(PlacedWord {
                text: word.clone(),
                count: *count,
                font_size: size,
                x,
                y,
                color: PALETTE[index % PALETTE.len()],
            });
            font_size = size;
            last_count = count_f;
        }

        WordCloud {
            width,
            height,
            background: self.settings.background.clone(),
            words: placed,
        }
    }
}

/// Merges `words` into `word` when both forms occur. Words ending in "ss"
/// are left alone.
fn fold_plurals(mut counts: HashMap<String, usize>) -> HashMap<String, usize> {
    let plurals: Vec<String> = counts
        .keys()
        .filter(|w| w.ends_with('s') && !w.ends_with("ss"))
        .filter(|w| counts.contains_key(&w[..w.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        if let Some(n) = counts.remove(&plural) {
            *counts.entry(plural[..plural.len() - 1].to_string()).or_insert(0) += n;
        }
    }
    counts
}

fn find_spot(
    width: f64,
    height: f64,
    w: f64,
    h: f64,
    boxes: &[BoundingBox],
) -> Option<(f64, f64, BoundingBox)> {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = height / width;
    let max_radius = (width * width + height * height).sqrt() / 2.0;

    let mut t: f64 = 0.0;
    loop {
        let r = SPIRAL_GROWTH * t;
        if r > max_radius {
            return None;
        }
        let x = cx + r * t.cos();
        let y = cy + r * t.sin() * aspect;
        let bbox = BoundingBox::centered(x, y, w, h);
        if bbox.inside(width, height) && !boxes.iter().any(|b| b.overlaps(&bbox)) {
            return Some((x, y, bbox));
        }
        t += SPIRAL_STEP;
    }
}

impl WordCloud {
    pub fn render_svg(&self) -> String {
        let mut doc = SvgDocument::new(self.width, self.height);
        doc.rect(0.0, 0.0, self.width, self.height, &self.background, 1.0);
        for word in &self.words {
            doc.styled_text(
                word.x,
                word.y,
                word.font_size,
                "middle",
                word.color,
                r#" dominant-baseline="central""#,
                &word.text,
            );
        }
        doc.finish()
    }
}
