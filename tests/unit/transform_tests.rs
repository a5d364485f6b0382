// Transformation directive and URL assembly tests

use quoteable_media::transform::{
    build_image_url, CropMode, FontWeight, Gravity, Quality, TextOverlayOptions, Transformation,
    TransformError,
};

#[test]
fn test_resize_grammar_for_every_crop_mode() {
    let cases = [
        (CropMode::Fill, "fill"),
        (CropMode::Scale, "scale"),
        (CropMode::Fit, "fit"),
        (CropMode::Crop, "crop"),
        (CropMode::Thumb, "thumb"),
    ];

    for (mode, token) in cases {
        let directive = Transformation::resize(800, 600, mode).unwrap().to_directive();
        assert_eq!(directive, format!("w_800,h_600,c_{}", token));
    }
}

#[test]
fn test_resize_default_mode_is_fill() {
    let directive = Transformation::resize(1280, 720, CropMode::default())
        .unwrap()
        .to_directive();
    assert_eq!(directive, "w_1280,h_720,c_fill");
}

#[test]
fn test_resize_signals_which_dimension_failed() {
    match Transformation::resize(0, 600, CropMode::Fill) {
        Err(TransformError::InvalidDimension { dimension, .. }) => assert_eq!(dimension, "width"),
        other => panic!("Expected InvalidDimension, got {:?}", other),
    }
    match Transformation::resize(800, 0, CropMode::Fill) {
        Err(TransformError::InvalidDimension { dimension, .. }) => assert_eq!(dimension, "height"),
        other => panic!("Expected InvalidDimension, got {:?}", other),
    }
}

#[test]
fn test_optimize_defaults_and_fixed_quality() {
    let auto = Transformation::optimize("auto", Quality::Auto).unwrap();
    assert_eq!(auto.to_directive(), "f_auto,q_auto");

    let webp = Transformation::optimize("webp", Quality::Value(80)).unwrap();
    assert_eq!(webp.to_directive(), "f_webp,q_80");
}

#[test]
fn test_optimize_quality_bounds() {
    assert!(Transformation::optimize("webp", Quality::Value(1)).is_ok());
    assert!(Transformation::optimize("webp", Quality::Value(100)).is_ok());
    assert_eq!(
        Transformation::optimize("webp", Quality::Value(0)),
        Err(TransformError::InvalidQuality { quality: 0 })
    );
    assert_eq!(
        Transformation::optimize("webp", Quality::Value(101)),
        Err(TransformError::InvalidQuality { quality: 101 })
    );
}

#[test]
fn test_background_overlay_grammar_and_bounds() {
    let overlay = Transformation::background_overlay(50, "black").unwrap();
    assert_eq!(overlay.to_directive(), "l_black,e_colorize:50,fl_layer_apply");

    assert!(Transformation::background_overlay(0, "black").is_ok());
    assert!(Transformation::background_overlay(100, "black").is_ok());
    assert_eq!(
        Transformation::background_overlay(101, "black"),
        Err(TransformError::InvalidOpacity { opacity: 101 })
    );
}

#[test]
fn test_background_overlay_color_pass_through() {
    // Prefixed literal color-space values are not validated
    let overlay = Transformation::background_overlay(75, "rgb:3e2222").unwrap();
    assert_eq!(
        overlay.to_directive(),
        "l_rgb:3e2222,e_colorize:75,fl_layer_apply"
    );
}

#[test]
fn test_text_overlay_percent_encoding() {
    let hello = Transformation::text_overlay("Hello World", TextOverlayOptions::default());
    assert!(hello.to_directive().contains("l_text:Arial_48:Hello%20World"));

    let comma = Transformation::text_overlay("Hello, World", TextOverlayOptions::default());
    assert!(comma.to_directive().contains("Hello%2C%20World"));

    let quoted = Transformation::text_overlay(r#"a "quote""#, TextOverlayOptions::default());
    assert!(quoted.to_directive().contains("%22quote%22"));
}

#[test]
fn test_text_overlay_bold_weight() {
    let options = TextOverlayOptions {
        font_weight: FontWeight::Bold,
        ..TextOverlayOptions::default()
    };
    let directive = Transformation::text_overlay("Test", options).to_directive();
    assert!(directive.contains("l_text:Arial_48_bold:Test"));
}

#[test]
fn test_text_overlay_optional_fragments() {
    // Absent options omit their fragments entirely
    let bare = Transformation::text_overlay("Q", TextOverlayOptions::default()).to_directive();
    assert_eq!(bare, "l_text:Arial_48:Q");

    // Supplied options appear in fixed order: font+text, color, gravity, y, x, width+fit
    let options = TextOverlayOptions {
        color: Some("EEEEEE".to_string()),
        gravity: Some(Gravity::NorthEast),
        y_offset: Some(80),
        max_width: Some(700),
        ..TextOverlayOptions::default()
    };
    let directive = Transformation::text_overlay("Q", options).to_directive();
    assert_eq!(
        directive,
        "l_text:Arial_48:Q,co_rgb:EEEEEE,g_north_east,y_80,w_700,c_fit"
    );
}

#[test]
fn test_url_with_no_directives() {
    let url = build_image_url("id", &[], "cloud").unwrap();
    assert_eq!(url, "https://res.cloudinary.com/cloud/image/upload/id");
}

#[test]
fn test_url_missing_fields() {
    assert_eq!(
        build_image_url("", &[], "cloud"),
        Err(TransformError::MissingAssetId)
    );
    assert_eq!(
        build_image_url("id", &[], ""),
        Err(TransformError::MissingAccountName)
    );
}

#[test]
fn test_quote_image_chain_end_to_end() {
    // The full quote-image composition: resize, darken, quote text, optimize
    let chain = vec![
        Transformation::resize(1024, 768, CropMode::Fill).unwrap(),
        Transformation::background_overlay(60, "black").unwrap(),
        Transformation::text_overlay(
            "Stay hungry, stay foolish",
            TextOverlayOptions {
                color: Some("FFFFFF".to_string()),
                gravity: Some(Gravity::Center),
                max_width: Some(900),
                ..TextOverlayOptions::default()
            },
        ),
        Transformation::optimize("auto", Quality::Auto).unwrap(),
    ];

    let url = build_image_url("quoteable/quotes/jobs", &chain, "demo").unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload\
         /w_1024,h_768,c_fill\
         /l_black,e_colorize:60,fl_layer_apply\
         /l_text:Arial_48:Stay%20hungry%2C%20stay%20foolish,co_rgb:FFFFFF,g_center,w_900,c_fit\
         /f_auto,q_auto\
         /quoteable/quotes/jobs"
    );
}

#[test]
fn test_compilation_is_idempotent() {
    let chain = vec![
        Transformation::background_overlay(40, "black").unwrap(),
        Transformation::text_overlay("same inputs", TextOverlayOptions::default()),
    ];
    assert_eq!(
        build_image_url("id", &chain, "cloud").unwrap(),
        build_image_url("id", &chain, "cloud").unwrap()
    );
}

#[test]
fn test_enum_parsing_round_trip() {
    for token in ["fill", "scale", "fit", "crop", "thumb"] {
        let mode: CropMode = token.parse().unwrap();
        assert_eq!(mode.as_str(), token);
    }
    for token in ["center", "north", "south_west", "north_east"] {
        let gravity: Gravity = token.parse().unwrap();
        assert_eq!(gravity.as_str(), token);
    }
}
