//! The canonical category keyword table.
//!
//! One ordered, version-controlled table. Matching is lowercase substring
//! containment; the order of `ORDERED_KEYWORDS` is the classification
//! priority and must not be reshuffled casually — "blue_hair" must hit the
//! face keywords before anything generic, and overlap terms like "breasts"
//! resolve to whichever category appears first.

use super::Category;

/// Subject-count/gender markers, matched exactly (after normalization).
pub(crate) const SUBJECT_MARKERS: &[&str] = &[
    "1girl",
    "girl",
    "female",
    "1boy",
    "male",
    "woman",
    "man",
    "solo",
    "2girls",
    "2boys",
    "multiple_girls",
    "multiple_boys",
];

/// Markers implying a single-subject scene.
pub const SINGLE_SUBJECT_MARKERS: &[&str] = &[
    "1girl", "girl", "female", "1boy", "male", "woman", "man", "solo",
];

/// Markers implying a multi-subject scene.
pub const MULTI_SUBJECT_MARKERS: &[&str] = &["2girls", "2boys", "multiple_girls", "multiple_boys"];

const FACE_KEYWORDS: &[&str] = &[
    "hair",
    "eyes",
    "eyebrows",
    "eyelashes",
    "bangs",
    "sidelocks",
    "ponytail",
    "twintails",
    "braid",
    "ahoge",
    "heterochromia",
    "glasses",
    "sunglasses",
    "makeup",
    "lipstick",
    "fangs",
    "tongue",
    "forehead",
    "face",
];

const BODY_KEYWORDS: &[&str] = &[
    "breasts",
    "nipples",
    "ass",
    "thighs",
    "legs",
    "tail",
    "wings",
    "animal_ears",
    "cat_ears",
    "cleavage",
    "collarbone",
    "navel",
    "midriff",
    "flat_chest",
    "stomach",
    "armpits",
    "tattoo",
    "bare_shoulders",
    "muscle",
    "skin",
    "freckles",
    "mole",
    "toes",
    "feet",
    "body",
];

const CLOTHING_KEYWORDS: &[&str] = &[
    "dress",
    "shirt",
    "skirt",
    "pants",
    "uniform",
    "costume",
    "swimsuit",
    "bikini",
    "naked",
    "nude",
    "clothes",
    "hat",
    "shoes",
    "boots",
    "gloves",
    "coat",
    "jacket",
    "suit",
    "maid",
    "serafuku",
    "shorts",
    "hoodie",
    "pantyhose",
    "thighhighs",
    "lingerie",
    "underwear",
    "panties",
    "bra",
    "kimono",
    "apron",
    "scarf",
    "necktie",
    "bow",
    "sweater",
    "cardigan",
    "blazer",
    "leotard",
    "pajamas",
    "socks",
    "collar",
    "choker",
    "frills",
    "veil",
    "sleeves",
];

const POSE_KEYWORDS: &[&str] = &[
    "standing",
    "sitting",
    "lying",
    "kneeling",
    "bent_over",
    "arms_up",
    "hands_up",
    "hand_on",
    "crossed_arms",
    "spread",
    "walking",
    "running",
    "squatting",
    "leaning",
    "jumping",
    "stretching",
    "sleeping",
    "hugging",
    "holding",
    "straddling",
    "all_fours",
    "arm_support",
    "head_tilt",
    "on_back",
    "on_stomach",
    "on_side",
    "pose",
];

const EMOTION_KEYWORDS: &[&str] = &[
    "smile",
    "open_mouth",
    "closed_mouth",
    "parted_lips",
    "blush",
    "frown",
    "pout",
    "wink",
    "tears",
    "crying",
    "happy",
    "sad",
    "angry",
    "surprised",
    "embarrassed",
    "annoyed",
    "laughing",
    "grin",
    "smirk",
    "serious",
    "worried",
    "confused",
    "excited",
    "scared",
    "expressionless",
    "teeth",
    "sweatdrop",
    "emotion",
];

const ANGLE_KEYWORDS: &[&str] = &[
    "looking",
    "from_above",
    "from_below",
    "from_side",
    "from_behind",
    "close-up",
    "wide_shot",
    "profile",
    "dutch_angle",
    "pov",
    "selfie",
    "upper_body",
    "full_body",
    "cowboy_shot",
    "angle",
    "view",
];

const BACKGROUND_KEYWORDS: &[&str] = &[
    "indoors",
    "outdoors",
    "sky",
    "night",
    "day",
    "city",
    "beach",
    "forest",
    "water",
    "mountain",
    "sunset",
    "sunlight",
    "room",
    "bed",
    "pillow",
    "curtains",
    "classroom",
    "street",
    "bathroom",
    "kitchen",
    "garden",
    "park",
    "building",
    "ruins",
    "cafe",
    "restaurant",
    "shop",
    "school",
    "train",
    "car",
    "vehicle",
    "rain",
    "snow",
    "window",
    "tree",
    "flower",
    "cloud",
    "background",
];

const STYLE_KEYWORDS: &[&str] = &[
    "anime",
    "manga",
    "realistic",
    "3d",
    "sketch",
    "painting",
    "drawing",
    "digital_art",
    "traditional_media",
    "chibi",
    "comic",
    "illustration",
    "monochrome",
    "grayscale",
    "blurry",
    "depth_of_field",
    "lighting",
    "shadow",
    "highres",
    "absurdres",
    "quality",
    "style",
];

const EXPLICIT_KEYWORDS: &[&str] = &[
    "sex",
    "cum",
    "penis",
    "pussy",
    "vagina",
    "anal",
    "fellatio",
    "masturbation",
    "orgasm",
    "penetration",
    "handjob",
    "footjob",
    "cunnilingus",
    "bondage",
    "bdsm",
    "tentacle",
    "vibrator",
    "dildo",
    "condom",
    "cameltoe",
    "sideboob",
    "underboob",
    "areola",
    "hetero",
    "explicit",
];

/// The classification priority order. First matching category wins.
pub(crate) const ORDERED_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Face, FACE_KEYWORDS),
    (Category::Body, BODY_KEYWORDS),
    (Category::Clothing, CLOTHING_KEYWORDS),
    (Category::Pose, POSE_KEYWORDS),
    (Category::Emotion, EMOTION_KEYWORDS),
    (Category::Angle, ANGLE_KEYWORDS),
    (Category::Background, BACKGROUND_KEYWORDS),
    (Category::Style, STYLE_KEYWORDS),
    (Category::Explicit, EXPLICIT_KEYWORDS),
];
