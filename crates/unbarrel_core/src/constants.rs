//! File extensions eligible for import rewriting.

/// TypeScript file extensions considered when walking the source and test
/// trees.
pub const TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_extensions_cover_typescript_family() {
        assert!(TS_EXTENSIONS.contains(&"ts"));
        assert!(TS_EXTENSIONS.contains(&"tsx"));
        assert!(TS_EXTENSIONS.contains(&"mts"));
        assert!(TS_EXTENSIONS.contains(&"cts"));
        assert!(!TS_EXTENSIONS.contains(&"js"));
    }
}
