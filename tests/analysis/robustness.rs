#[cfg(test)]
mod verify {
    use relevance::analysis::*;
    use relevance::formatting::*;

    const AWKWARD: [&str; 14] = [
        "",
        ")",
        ")))",
        "(((",
        ")(",
        "if",
        "then else",
        "else if then",
        "whose (",
        "whose (it",
        "of it",
        ") of it",
        "é(ü",
        "((it) of",
    ];

    #[test]
    fn every_operation_is_total() {
        for text in AWKWARD {
            let length = text
                .chars()
                .count();

            for offset in 0..=length + 3 {
                analyze_at(text, offset);
                match_bracket(text, offset);
                match_block(text, offset);
                resolve_referent(text, offset);
                depth_at(text, offset);
            }

            reformat(text);
            expand(text);
            compact(text);
        }
    }

    #[test]
    fn empty_text_has_no_highlights() {
        assert!(analyze_at("", 0).is_empty());
        assert!(analyze_at("", 10).is_empty());
    }

    #[test]
    fn offsets_past_the_end_are_clamped() {
        assert_eq!(analyze_at("(a)", 100), analyze_at("(a)", 3));
        assert_eq!(analyze_at("x it", 50), analyze_at("x it", 4));
    }

    #[test]
    fn depth_goes_negative_on_surplus_closers() {
        assert_eq!(depth_at("))(", 2), -2);
        assert_eq!(depth_at("))(", 3), -1);
        assert_eq!(depth_at("(((", 10), 3);
        assert_eq!(depth_at("(a (b) c", 8), 1);
    }

    #[test]
    fn only_closers_are_unmatched() {
        let result = analyze_at(")))", 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].start, 0);
    }
}
