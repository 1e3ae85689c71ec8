//! Immutable global default tables.
//!
//! Every table here is configuration data shared by the registry (baseline
//! injection for empty input) and the assembler (overridable section
//! defaults). Nothing else in the crate declares default values.

/// Canonical color ramp, emitted in this order.
///
/// Every entry is individually overridable by a like-named extracted
/// token, else a like-named project primitive. The ramp owns these names;
/// no other section declares them.
pub(crate) const COLOR_RAMP: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray-50", "#fafafa"),
    ("gray-100", "#f5f5f5"),
    ("gray-200", "#e5e5e5"),
    ("gray-300", "#d4d4d4"),
    ("gray-400", "#a3a3a3"),
    ("gray-500", "#737373"),
    ("gray-600", "#525252"),
    ("gray-700", "#404040"),
    ("gray-800", "#262626"),
    ("gray-900", "#171717"),
    ("gray-950", "#0a0a0a"),
    ("blue-600", "#2563eb"),
    ("blue-700", "#1d4ed8"),
    ("sky-600", "#0284c7"),
    ("green-600", "#16a34a"),
    ("amber-500", "#f59e0b"),
    ("red-600", "#dc2626"),
];

/// A titled group of fixed declarations with builtin default expressions.
pub(crate) struct TokenGroup {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// Global semantic color-token groups, emitted in this order.
///
/// Each entry is overridable by a like-named extracted token, else a
/// like-named project primitive, else falls back to the builtin expression.
pub(crate) const SEMANTIC_GROUPS: &[TokenGroup] = &[
    TokenGroup {
        title: "Primary",
        entries: &[
            ("primary", "var(--color-blue-600)"),
            ("primary-hover", "var(--color-blue-700)"),
        ],
    },
    TokenGroup {
        title: "Accent",
        entries: &[("accent", "var(--color-sky-600)")],
    },
    TokenGroup {
        title: "Surface",
        entries: &[
            ("background", "light-dark(var(--color-white), var(--color-gray-950))"),
            ("foreground", "light-dark(var(--color-gray-900), var(--color-gray-50))"),
            ("muted", "light-dark(var(--color-gray-500), var(--color-gray-400))"),
        ],
    },
    TokenGroup {
        title: "Depth",
        entries: &[
            ("layer-1", "light-dark(var(--color-white), var(--color-gray-900))"),
            ("layer-2", "light-dark(var(--color-gray-50), var(--color-gray-800))"),
            ("layer-3", "light-dark(var(--color-gray-100), var(--color-gray-700))"),
        ],
    },
    TokenGroup {
        title: "Interactive",
        entries: &[
            ("hover", "light-dark(var(--color-gray-100), var(--color-gray-800))"),
            ("active", "light-dark(var(--color-gray-200), var(--color-gray-700))"),
            ("focus-ring", "var(--color-blue-600)"),
        ],
    },
    TokenGroup {
        title: "Selection",
        entries: &[("selection", "light-dark(var(--color-blue-600), var(--color-sky-600))")],
    },
    TokenGroup {
        title: "Alerts",
        entries: &[
            ("info", "var(--color-sky-600)"),
            ("success", "var(--color-green-600)"),
            ("warning", "var(--color-amber-500)"),
            ("danger", "var(--color-red-600)"),
        ],
    },
    TokenGroup {
        title: "Borders",
        entries: &[
            ("border", "light-dark(var(--color-gray-200), var(--color-gray-800))"),
            ("border-strong", "light-dark(var(--color-gray-300), var(--color-gray-700))"),
        ],
    },
];

/// Non-color global primitives, emitted after the color sections.
///
/// Same override rule as the ramp: a like-named project primitive wins.
pub(crate) const GLOBAL_GROUPS: &[TokenGroup] = &[
    TokenGroup {
        title: "Motion",
        entries: &[
            ("transition-fast", "150ms"),
            ("transition", "250ms"),
            ("transition-slow", "400ms"),
        ],
    },
    TokenGroup {
        title: "Layers",
        entries: &[
            ("z-base", "0"),
            ("z-dropdown", "1000"),
            ("z-sticky", "1100"),
            ("z-overlay", "1200"),
            ("z-modal", "1300"),
            ("z-toast", "1400"),
        ],
    },
    TokenGroup {
        title: "Radii",
        entries: &[
            ("rounded-none", "0"),
            ("rounded-sm", "0.125rem"),
            ("rounded-md", "0.25rem"),
            ("rounded-lg", "0.5rem"),
            ("rounded-full", "9999px"),
        ],
    },
    TokenGroup {
        title: "Typefaces",
        entries: &[
            ("font-sans", "ui-sans-serif, system-ui, sans-serif"),
            ("font-mono", "ui-monospace, monospace"),
            ("font-weight-normal", "400"),
            ("font-weight-medium", "500"),
            ("font-weight-bold", "700"),
        ],
    },
];

/// Baseline spacing scale injected when the input set is empty, in px.
pub(crate) const FALLBACK_SPACING: &[(&str, f64)] = &[
    ("0", 0.0),
    ("1", 4.0),
    ("2", 8.0),
    ("3", 12.0),
    ("4", 16.0),
    ("6", 24.0),
    ("8", 32.0),
];

/// Baseline font sizes injected when the input set is empty, in px.
pub(crate) const FALLBACK_FONT_SIZES: &[(&str, f64)] =
    &[("sm", 14.0), ("base", 16.0), ("lg", 18.0)];
