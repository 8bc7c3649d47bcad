//! logos-based tokenizer for inline styles and registry rules.
//!
//! Token priority in logos is determined by longest match first. The ordering
//! below keeps `#ff00aa` a [`Token::HexColor`], `50%` a [`Token::Dimension`]
//! and `:focus` a [`Token::PseudoClass`].
//!
//! Identifiers may carry one leading hyphen so that runtime-internal classes
//! such as `-highlight` or `-hide` survive a round trip through the parser.

use logos::Logos;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `!important` flag.
    #[token("!important")]
    Important,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number with a unit suffix: `1fr`, `50%`, `10vw`, `80vh`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(fr|%|vw|vh)")]
    Dimension,

    /// Pseudo-class: `:hover`, `:focus-within`.
    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*")]
    PseudoClass,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Variable reference: `$accent`, `$border-blurred`.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_-]*")]
    Variable,

    /// Integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: property names, type names, class names, keywords.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("#")]
    Hash,

    #[token("*")]
    Star,

    #[token(">")]
    GreaterThan,
}

/// Tokenize a string into `(Token, text)` pairs, skipping unlexable input.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn hyphen_prefixed_class_is_one_ident() {
        let result = tokenize(".-highlight");
        assert_eq!(result[0], (Token::Dot, ".".into()));
        assert_eq!(result[1], (Token::Ident, "-highlight".into()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn negative_number_is_not_ident() {
        assert_eq!(tokens("-5"), vec![Token::Number]);
        assert_eq!(tokens("-10%"), vec![Token::Dimension]);
    }

    #[test]
    fn idents_with_inner_hyphens_and_digits() {
        let result = tokenize("my-widget _private tab2");
        assert_eq!(result[0], (Token::Ident, "my-widget".into()));
        assert_eq!(result[1], (Token::Ident, "_private".into()));
        assert_eq!(result[2], (Token::Ident, "tab2".into()));
    }

    #[test]
    fn highlight_rule_tokens() {
        assert_eq!(
            tokens(".-highlight { background: $accent 50% !important; }"),
            vec![
                Token::Dot,
                Token::Ident,
                Token::BraceOpen,
                Token::Ident,
                Token::Colon,
                Token::Variable,
                Token::Dimension,
                Token::Important,
                Token::Semicolon,
                Token::BraceClose,
            ]
        );
    }

    #[test]
    fn hex_color_beats_hash() {
        assert_eq!(tokens("#fff"), vec![Token::HexColor]);
        assert_eq!(tokens("#my-id"), vec![Token::Hash, Token::Ident]);
    }

    #[test]
    fn inline_declarations() {
        let result = tokenize("width: 40; color: #ff0000;");
        assert_eq!(result[0], (Token::Ident, "width".into()));
        assert_eq!(result[1], (Token::Colon, ":".into()));
        assert_eq!(result[2], (Token::Number, "40".into()));
        assert_eq!(result[3], (Token::Semicolon, ";".into()));
        assert_eq!(result[6], (Token::HexColor, "#ff0000".into()));
    }

    #[test]
    fn pseudo_class_priority_over_colon() {
        assert_eq!(tokens(":focus-within"), vec![Token::PseudoClass]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(tokens("  \t\n ").is_empty());
    }
}
