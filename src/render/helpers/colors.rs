use printpdf::Rgb;

/// Text and answer lines
pub const INK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Header rule and multiple-choice bubbles
pub const RULE_GRAY: Rgb = Rgb {
    r: 0.4,
    g: 0.4,
    b: 0.4,
    icc_profile: None,
};

/// Outline of placement boxes when `--debug-boxes` is on
pub const DEBUG_RED: Rgb = Rgb {
    r: 0.9,
    g: 0.1,
    b: 0.1,
    icc_profile: None,
};
