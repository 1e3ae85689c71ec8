//! End-to-end pipeline behavior over in-memory document sets.

use themecast::{run, SourceDocument, HEADER};

fn doc(name: &str, text: &str) -> SourceDocument {
    SourceDocument::new(name, text)
}

#[test]
fn test_spacing_scale_renders_in_ascending_numeric_order() {
    let bundle = run(&[doc(
        "spacing.json",
        r#"{"Spacing": {
            "16": {"$type": "number", "$value": 64},
            "2": {"$type": "number", "$value": 8},
            "48": {"$type": "number", "$value": 192},
            "8": {"$type": "number", "$value": 32},
            "32": {"$type": "number", "$value": 128}
        }}"#,
    )]);

    let expected = ["--spacing-2:", "--spacing-8:", "--spacing-16:", "--spacing-32:", "--spacing-48:"];
    let positions: Vec<usize> = expected
        .iter()
        .map(|needle| bundle.css.find(needle).expect(needle))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_light_dark_override_renders_one_dual_mode_declaration() {
    let bundle = run(&[
        doc(
            "tokens.light.json",
            r##"{"mode": "light", "Color": {"link": {"$type": "color", "$value": "#112233"}}}"##,
        ),
        doc(
            "tokens.dark.json",
            r##"{"mode": "dark", "Color": {"link": {"$type": "color", "$value": "#445566"}}}"##,
        ),
    ]);

    assert!(bundle.css.contains("--color-link: light-dark(#112233, #445566);"));
    assert_eq!(bundle.css.matches("--color-link:").count(), 1);
    assert_eq!(bundle.tokens["color"]["link"]["light"], "#112233");
    assert_eq!(bundle.tokens["color"]["link"]["dark"], "#445566");
}

#[test]
fn test_device_mode_font_size_renders_fluid_clamp() {
    let bundle = run(&[
        doc(
            "mobile.json",
            r#"{"mode": "mobile", "FontSize": {"body": {"$type": "number", "$value": 16}}}"#,
        ),
        doc(
            "desktop.json",
            r#"{"mode": "desktop", "FontSize": {"body": {"$type": "number", "$value": 18}}}"#,
        ),
    ]);

    assert!(bundle.css.contains(
        "--font-size-body: clamp(var(--font-size-body-mobile), 0.951rem + 0.2174vw, var(--font-size-body-desktop));"
    ));
    // The synthesized endpoint primitives are registered and rendered.
    assert!(bundle.css.contains("--font-size-body-mobile: 1rem;"));
    assert!(bundle.css.contains("--font-size-body-desktop: 1.125rem;"));
    assert_eq!(bundle.primitives["fontSize"]["body-mobile"], "1rem");
}

#[test]
fn test_equal_device_endpoints_render_flat_without_clamp() {
    let bundle = run(&[
        doc(
            "mobile.json",
            r#"{"mode": "mobile", "FontSize": {"body": {"$type": "number", "$value": 16}}}"#,
        ),
        doc(
            "desktop.json",
            r#"{"mode": "desktop", "FontSize": {"body": {"$type": "number", "$value": 16}}}"#,
        ),
    ]);

    assert!(!bundle.css.contains("clamp("));
    assert!(bundle.css.contains("--font-size-body: var(--font-size-body-mobile);"));
}

#[test]
fn test_single_named_mode_token_degenerates_to_primitive() {
    let bundle = run(&[doc(
        "light.json",
        r##"{"mode": "light", "Color": {"accent": {"$type": "color", "$value": "#2563eb"}}}"##,
    )]);

    // Never in tokens.json, present in primitives.json under the same name.
    assert!(bundle.tokens.get("color").is_none());
    assert_eq!(bundle.primitives["color"]["accent"], "#2563eb");
    assert!(bundle
        .report
        .lines()
        .any(|line| line.starts_with("missing-mode-variant: token 'accent'")));
}

#[test]
fn test_single_mode_less_contribution_demotes_without_warning() {
    let bundle = run(&[doc(
        "plain.json",
        r##"{"Color": {"accent": {"$type": "color", "$value": "#2563eb"}}}"##,
    )]);

    assert_eq!(bundle.primitives["color"]["accent"], "#2563eb");
    assert_eq!(bundle.report.warning_count(), 0);
}

#[test]
fn test_semantic_named_demotion_renders_one_declaration() {
    // `background` collides with a builtin semantic entry: the demoted
    // primitive must surface in its group only, never twice.
    let bundle = run(&[doc(
        "plain.json",
        r##"{"Color": {"background": {"$type": "color", "$value": "#fdfdfd"}}}"##,
    )]);

    assert_eq!(bundle.css.matches("--color-background:").count(), 1);
    assert!(bundle.css.contains("--color-background: #fdfdfd;"));
}

#[test]
fn test_ramp_named_token_renders_one_declaration() {
    // A dual-mode token colliding with a ramp name owns that ramp slot.
    let bundle = run(&[
        doc(
            "light.json",
            r##"{"mode": "light", "Color": {"white": {"$type": "color", "$value": "#fafafa"}}}"##,
        ),
        doc(
            "dark.json",
            r##"{"mode": "dark", "Color": {"white": {"$type": "color", "$value": "#111111"}}}"##,
        ),
    ]);

    assert_eq!(bundle.css.matches("--color-white:").count(), 1);
    assert!(bundle
        .css
        .contains("--color-white: light-dark(#fafafa, #111111);"));
}

#[test]
fn test_identical_variants_still_emit_with_warning() {
    let bundle = run(&[
        doc(
            "light.json",
            r##"{"mode": "light", "Color": {"link": {"$type": "color", "$value": "#112233"}}}"##,
        ),
        doc(
            "dark.json",
            r##"{"mode": "dark", "Color": {"link": {"$type": "color", "$value": "#112233"}}}"##,
        ),
    ]);

    assert!(bundle.css.contains("--color-link: light-dark(#112233, #112233);"));
    assert!(bundle
        .report
        .lines()
        .any(|line| line.starts_with("identical-variants: token 'link'")));
}

#[test]
fn test_empty_input_yields_complete_theme() {
    let bundle = run(&[]);

    assert!(bundle.css.starts_with(HEADER));
    assert!(bundle.css.contains("color-scheme: light dark;"));
    assert!(bundle.css.contains("--color-gray-500: #737373;"));
    assert!(bundle.css.contains("--color-primary: var(--color-blue-600);"));
    assert!(bundle.css.contains("--spacing-4: 1rem;"));
    assert!(bundle.css.contains("--font-size-sm: 0.875rem;"));
    assert!(bundle.css.contains("--font-size-base: 1rem;"));
    assert!(bundle.css.contains("--font-size-lg: 1.125rem;"));

    assert_eq!(bundle.primitives["color"]["gray-500"], "#737373");
    assert_eq!(bundle.primitives["spacing"]["4"], "1rem");
    assert_eq!(bundle.primitives["fontSize"]["base"], "1rem");
}

#[test]
fn test_parse_failure_is_isolated_from_the_batch() {
    let bundle = run(&[
        doc("broken.json", "{this is not json"),
        doc(
            "good.json",
            r#"{"Spacing": {"4": {"$type": "number", "$value": 16}}}"#,
        ),
    ]);

    assert!(bundle.css.contains("--spacing-4: 1rem;"));
    assert!(bundle
        .report
        .lines()
        .any(|line| line.starts_with("parse-error: broken.json")));
}

#[test]
fn test_nested_primitives_and_alias_pointer_resolution() {
    let bundle = run(&[
        doc(
            "base.json",
            r##"{"Color": {"gray": {"100": {"$type": "color", "$value": "#f5f5f5"}}}}"##,
        ),
        doc(
            "light.json",
            r##"{"mode": "light", "Color": {"surface": {
                "$type": "color", "$value": "#ffffff",
                "$extensions": {"token": true, "alias": "gray-100"}
            }}}"##,
        ),
        doc(
            "dark.json",
            r##"{"mode": "dark", "Color": {"surface": {
                "$type": "color", "$value": "#0a0a0a", "$extensions": {"token": true}
            }}}"##,
        ),
    ]);

    assert_eq!(bundle.primitives["color"]["gray-100"], "#f5f5f5");
    assert_eq!(bundle.tokens["color"]["surface"]["light"], "var(--color-gray-100)");
    assert_eq!(bundle.tokens["color"]["surface"]["dark"], "#0a0a0a");
    assert!(bundle
        .css
        .contains("--color-surface: light-dark(var(--color-gray-100), #0a0a0a);"));
}

#[test]
fn test_raw_value_matching_reuses_known_primitive() {
    let bundle = run(&[
        doc(
            "base.json",
            r##"{"Color": {"gray": {"100": {"$type": "color", "$value": "#F5F5F5"}}}}"##,
        ),
        doc(
            "light.json",
            r##"{"mode": "light", "Color": {"card": {"$type": "color", "$value": "#f5f5f5"}}}"##,
        ),
        doc(
            "dark.json",
            r##"{"mode": "dark", "Color": {"card": {"$type": "color", "$value": "#171717"}}}"##,
        ),
    ]);

    assert_eq!(bundle.tokens["color"]["card"]["light"], "var(--color-gray-100)");
    assert_eq!(bundle.tokens["color"]["card"]["dark"], "#171717");
}

#[test]
fn test_spacing_aliases_shadowed_by_primitives_are_dropped() {
    let bundle = run(&[doc(
        "spacing.json",
        r#"{"Spacing": {"4": {"$type": "number", "$value": 16}}}"#,
    )]);

    assert!(bundle.tokens.get("spacing").is_none());
    assert_eq!(bundle.primitives["spacing"]["4"], "1rem");
}

#[test]
fn test_mode_less_typography_promotes_into_missing_device_modes() {
    let bundle = run(&[
        doc(
            "base.json",
            r#"{"FontSize": {"body": {"$type": "number", "$value": 16}}}"#,
        ),
        doc(
            "desktop.json",
            r#"{"mode": "desktop", "FontSize": {"body": {"$type": "number", "$value": 18}}}"#,
        ),
    ]);

    // Promotion copies the mode-less 16 into mobile; the pair then clamps.
    assert!(bundle.css.contains("--font-size-body: clamp("));
    let body = &bundle.tokens["fontSize"]["body"];
    assert!(body.get("mobile").is_some());
    assert!(body.get("desktop").is_some());
    assert!(body.get("default").is_some());
}

#[test]
fn test_unrecognized_sections_flow_into_ungrouped_primitives() {
    let bundle = run(&[doc(
        "extras.json",
        r#"{"FontWeight": {"bold": {"$type": "number", "$value": 700}}}"#,
    )]);

    assert_eq!(bundle.primitives["other"]["fontweight-bold"], "43.75rem");
}

#[test]
fn test_artifacts_are_deterministic_across_arrival_order() {
    let light = doc(
        "light.json",
        r##"{"mode": "light", "Color": {"link": {"$type": "color", "$value": "#112233"}}}"##,
    );
    let dark = doc(
        "dark.json",
        r##"{"mode": "dark", "Color": {"link": {"$type": "color", "$value": "#445566"}}}"##,
    );

    let forward = run(&[light.clone(), dark.clone()]);
    let reverse = run(&[dark, light]);
    assert_eq!(forward.css, reverse.css);
    assert_eq!(forward.primitives, reverse.primitives);
    assert_eq!(forward.tokens, reverse.tokens);
}
