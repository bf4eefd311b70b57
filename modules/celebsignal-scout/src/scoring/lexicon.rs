// Built-in English polarity lexicon. Values sit in [-1, 1]; the sign is the
// polarity and the magnitude is strength. Entries are lower-case and already
// apostrophe-free, because posts are normalized before they are scored.

pub(crate) const WORDS: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("congrats", 0.6),
    ("congratulations", 0.6),
    ("cool", 0.35),
    ("cute", 0.5),
    ("delightful", 0.8),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("fabulous", 0.4),
    ("fantastic", 0.4),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("fine", 0.4),
    ("fun", 0.3),
    ("funny", 0.25),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("incredible", 0.9),
    ("inspiring", 0.5),
    ("legend", 0.4),
    ("legendary", 0.5),
    ("like", 0.2),
    ("liked", 0.2),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loving", 0.6),
    ("lucky", 0.33),
    ("magnificent", 1.0),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pretty", 0.25),
    ("proud", 0.8),
    ("recommend", 0.3),
    ("special", 0.36),
    ("stunning", 0.5),
    ("super", 0.33),
    ("superb", 1.0),
    ("talented", 0.6),
    ("thank", 0.3),
    ("thanks", 0.3),
    ("win", 0.8),
    ("winner", 0.7),
    ("wonderful", 1.0),
    ("wow", 0.1),
    // negative
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("crap", -0.8),
    ("cringe", -0.5),
    ("dead", -0.2),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("dull", -0.3),
    ("dumb", -0.38),
    ("fail", -0.5),
    ("failed", -0.5),
    ("fake", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("idiot", -0.8),
    ("lame", -0.5),
    ("lost", -0.2),
    ("mad", -0.62),
    ("mediocre", -0.4),
    ("overrated", -0.5),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("rip", -0.3),
    ("rude", -0.3),
    ("sad", -0.5),
    ("scary", -0.5),
    ("sick", -0.71),
    ("sorry", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("trash", -0.6),
    ("ugly", -0.7),
    ("upset", -0.4),
    ("useless", -0.5),
    ("waste", -0.6),
    ("weak", -0.38),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Multiply the polarity of the next sentiment word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
    ("slightly", 0.7),
    ("somewhat", 0.7),
    ("barely", 0.5),
];

/// Flip and damp the next sentiment word.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cant", "cannot", "couldnt", "didnt", "doesnt", "dont", "hardly", "isnt",
    "never", "no", "not", "nothing", "shouldnt", "wasnt", "werent", "wont", "wouldnt",
];

pub(crate) const NEGATION_FACTOR: f64 = -0.5;
