//! Word lists backing the two analyzers.
//!
//! Valences follow the VADER convention (mean human rating in [-4, 4]).
//! Adjective entries carry `(polarity, subjectivity, intensity)` the way
//! pattern-style lexicons do.

/// Intensity lexicon: word -> valence in [-4, 4].
pub const VALENCE: &[(&str, f64)] = &[
    // positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lovely", 2.8),
    ("like", 2.0),
    ("liked", 1.8),
    ("likes", 1.8),
    ("great", 3.1),
    ("greatest", 3.2),
    ("good", 1.9),
    ("goodness", 2.0),
    ("better", 1.9),
    ("best", 3.2),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("nice", 1.8),
    ("happy", 2.7),
    ("happily", 2.6),
    ("glad", 2.0),
    ("pleased", 1.9),
    ("pleasant", 2.3),
    ("delicious", 2.7),
    ("yummy", 2.4),
    ("tasty", 2.0),
    ("fresh", 1.3),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("recommend", 1.5),
    ("recommended", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoys", 2.0),
    ("fun", 2.3),
    ("beautiful", 2.9),
    ("pretty", 2.2),
    ("satisfied", 1.8),
    ("satisfying", 2.0),
    ("excited", 1.4),
    ("helpful", 1.8),
    ("worth", 0.9),
    ("wow", 2.8),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("super", 2.9),
    ("cool", 1.3),
    ("healthy", 1.7),
    ("easy", 1.9),
    ("comfortable", 1.5),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("superb", 3.1),
    ("outstanding", 3.0),
    ("brilliant", 2.8),
    ("fine", 0.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("sweet", 2.0),
    ("smile", 1.5),
    ("win", 2.8),
    ("winner", 2.8),
    ("reliable", 1.9),
    ("free", 2.3),
    ("fast", 1.0),
    ("gift", 1.9),
    ("care", 2.2),
    ("crisp", 1.2),
    ("treat", 1.7),
    ("success", 2.7),
    ("superior", 2.5),
    ("glorious", 3.2),
    ("heaven", 2.5),
    // negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("poor", -2.1),
    ("poorly", -2.0),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("broken", -2.1),
    ("broke", -1.8),
    ("stale", -1.4),
    ("gross", -2.1),
    ("disgusting", -2.4),
    ("nasty", -2.6),
    ("sad", -2.1),
    ("angry", -2.3),
    ("unhappy", -1.8),
    ("problem", -1.7),
    ("problems", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("sick", -2.3),
    ("bitter", -1.8),
    ("bland", -0.9),
    ("ugly", -2.3),
    ("useless", -1.8),
    ("wrong", -2.1),
    ("damaged", -2.2),
    ("annoying", -2.2),
    ("boring", -1.3),
    ("complaint", -1.5),
    ("sorry", -0.3),
    ("weak", -1.9),
    ("pain", -2.3),
    ("stupid", -2.4),
    ("avoid", -1.2),
    ("mess", -1.5),
    ("crap", -1.6),
    ("garbage", -1.8),
    ("dead", -3.3),
    ("died", -2.6),
    ("ruined", -2.4),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("misleading", -1.5),
    ("sucks", -1.5),
    ("sucked", -2.0),
    ("expensive", -0.5),
    ("overpriced", -1.6),
    ("rotten", -2.3),
    ("moldy", -1.8),
    ("unfortunately", -1.4),
    ("fraud", -2.8),
    ("scam", -2.9),
    ("trash", -1.6),
    ("dislike", -1.6),
    ("hurt", -2.4),
    ("mad", -2.2),
    ("worried", -1.2),
    ("upset", -1.6),
    ("refused", -1.2),
];

/// Booster word -> scalar, added to a neighbouring valence.
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCR),
    ("amazingly", BOOST_INCR),
    ("awfully", BOOST_INCR),
    ("completely", BOOST_INCR),
    ("considerably", BOOST_INCR),
    ("decidedly", BOOST_INCR),
    ("deeply", BOOST_INCR),
    ("enormously", BOOST_INCR),
    ("entirely", BOOST_INCR),
    ("especially", BOOST_INCR),
    ("exceptionally", BOOST_INCR),
    ("extremely", BOOST_INCR),
    ("fabulously", BOOST_INCR),
    ("fully", BOOST_INCR),
    ("greatly", BOOST_INCR),
    ("highly", BOOST_INCR),
    ("hugely", BOOST_INCR),
    ("incredibly", BOOST_INCR),
    ("intensely", BOOST_INCR),
    ("majorly", BOOST_INCR),
    ("more", BOOST_INCR),
    ("most", BOOST_INCR),
    ("particularly", BOOST_INCR),
    ("purely", BOOST_INCR),
    ("quite", BOOST_INCR),
    ("really", BOOST_INCR),
    ("remarkably", BOOST_INCR),
    ("so", BOOST_INCR),
    ("substantially", BOOST_INCR),
    ("thoroughly", BOOST_INCR),
    ("totally", BOOST_INCR),
    ("tremendously", BOOST_INCR),
    ("unbelievably", BOOST_INCR),
    ("unusually", BOOST_INCR),
    ("utterly", BOOST_INCR),
    ("very", BOOST_INCR),
    ("almost", BOOST_DECR),
    ("barely", BOOST_DECR),
    ("hardly", BOOST_DECR),
    ("kinda", BOOST_DECR),
    ("less", BOOST_DECR),
    ("little", BOOST_DECR),
    ("marginally", BOOST_DECR),
    ("occasionally", BOOST_DECR),
    ("partly", BOOST_DECR),
    ("scarcely", BOOST_DECR),
    ("slightly", BOOST_DECR),
    ("somewhat", BOOST_DECR),
    ("sorta", BOOST_DECR),
];

pub const BOOST_INCR: f64 = 0.293;
pub const BOOST_DECR: f64 = -0.293;

/// Tokens that flip the valence of what follows. Any token containing
/// `n't` also negates.
pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never",
    "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
    "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// Adjective lexicon: word -> (polarity, subjectivity, intensity).
///
/// Adverbs with an intensity other than 1.0 act as modifiers for the
/// following entry instead of being scored themselves.
pub const ASSESSMENTS: &[(&str, f64, f64, f64)] = &[
    ("good", 0.7, 0.6, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("excellent", 1.0, 1.0, 1.0),
    ("amazing", 0.6, 0.9, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    ("fantastic", 0.4, 0.9, 1.0),
    ("perfect", 1.0, 1.0, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("delicious", 1.0, 1.0, 1.0),
    ("tasty", 0.4, 0.6, 1.0),
    ("love", 0.5, 0.6, 1.0),
    ("favorite", 0.5, 1.0, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("fresh", 0.3, 0.5, 1.0),
    ("easy", 0.43, 0.83, 1.0),
    ("healthy", 0.5, 0.5, 1.0),
    ("fine", 0.42, 0.5, 1.0),
    ("ok", 0.5, 0.5, 1.0),
    ("cheap", 0.4, 0.7, 1.0),
    ("expensive", -0.5, 0.7, 1.0),
    ("strong", 0.43, 0.73, 1.0),
    ("sweet", 0.35, 0.65, 1.0),
    ("free", 0.4, 0.8, 1.0),
    ("quick", 0.33, 0.5, 1.0),
    ("fast", 0.2, 0.6, 1.0),
    ("hot", 0.25, 0.85, 1.0),
    ("new", 0.14, 0.45, 1.0),
    ("high", 0.16, 0.54, 1.0),
    ("real", 0.2, 0.3, 1.0),
    ("old", 0.1, 0.2, 1.0),
    ("big", 0.0, 0.1, 1.0),
    ("small", -0.25, 0.4, 1.0),
    ("little", -0.19, 0.5, 1.0),
    ("hard", -0.29, 0.54, 1.0),
    ("slow", -0.3, 0.39, 1.0),
    ("bad", -0.7, 0.67, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("disappointed", -0.75, 0.75, 1.0),
    ("disappointing", -0.6, 0.7, 1.0),
    ("poor", -0.4, 0.6, 1.0),
    ("broken", -0.4, 0.4, 1.0),
    ("stale", -0.5, 0.5, 1.0),
    ("disgusting", -1.0, 1.0, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("angry", -0.5, 1.0, 1.0),
    ("boring", -1.0, 1.0, 1.0),
    ("wrong", -0.5, 0.9, 1.0),
    ("useless", -0.5, 0.2, 1.0),
    ("bitter", -0.1, 0.4, 1.0),
    ("bland", -0.33, 0.67, 1.0),
    ("hate", -0.8, 0.9, 1.0),
    // intensifiers
    ("very", 0.2, 0.3, 1.3),
    ("really", 0.2, 0.2, 1.3),
    ("so", 0.0, 0.0, 1.3),
    ("too", 0.0, 0.0, 1.3),
    ("extremely", 0.0, 1.0, 1.5),
    ("incredibly", 0.9, 0.9, 1.4),
    ("totally", 0.0, 0.75, 1.3),
    ("absolutely", 0.2, 0.9, 1.3),
    ("highly", 0.16, 0.54, 1.3),
    ("quite", 0.0, 0.0, 1.1),
    ("fairly", 0.0, 0.0, 0.9),
    ("somewhat", 0.0, 0.0, 0.8),
    ("slightly", -0.17, 0.17, 0.7),
];

/// Negations recognised by the adjective analyzer.
pub const ASSESSMENT_NEGATIONS: &[&str] = &["no", "not", "never", "n't"];
