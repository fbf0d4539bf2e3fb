/// Compile a regular expression once, on first use, and hand back a
/// `&'static Regex` thereafter. Patterns are literals in this crate so a
/// failure to compile is a programming error.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
