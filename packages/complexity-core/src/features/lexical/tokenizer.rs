//! Line-oriented tokenizer for the highlighter
//!
//! # Tokenization Strategy
//!
//! 1. **Comment split**: a line is cut at its first `#`. The scan is naive
//!    and does not skip string literals, so `"a # b"` splits inside the
//!    string. Existing renderings depend on this, so it is kept.
//! 2. **Longest match** on the code part, chosen by the first character:
//!    whitespace run, quoted string, number, identifier, or one plain char.
//!
//! Token texts always concatenate back to the input.

use super::token::{Token, TokenKind};
use super::vocabulary::{is_builtin, is_keyword};

pub const COMMENT_MARKER: char = '#';

/// Tokenize a whole snippet. Newlines are emitted as plain tokens.
pub fn tokenize(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for (i, line) in code.split('\n').enumerate() {
        if i > 0 {
            tokens.push(Token::new(TokenKind::Plain, "\n"));
        }
        tokenize_line(line, &mut tokens);
    }
    tokens
}

/// Tokenize one line (no `\n` inside)
pub fn tokenize_line<'a>(line: &'a str, out: &mut Vec<Token<'a>>) {
    if line.is_empty() {
        return;
    }

    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        out.push(Token::new(TokenKind::Plain, line));
        return;
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        out.push(Token::new(TokenKind::Comment, line));
        return;
    }

    let (code, comment) = match line.find(COMMENT_MARKER) {
        Some(at) => (&line[..at], Some(&line[at..])),
        None => (line, None),
    };

    tokenize_code(code, out);

    if let Some(comment) = comment {
        out.push(Token::new(TokenKind::Comment, comment));
    }
}

fn tokenize_code<'a>(code: &'a str, out: &mut Vec<Token<'a>>) {
    let mut pos = 0;
    while let Some(ch) = code[pos..].chars().next() {
        let (kind, end) = if ch.is_whitespace() {
            (TokenKind::Plain, scan_while(code, pos, char::is_whitespace))
        } else if ch == '\'' || ch == '"' {
            (TokenKind::String, scan_string(code, pos, ch))
        } else if ch.is_ascii_digit() {
            let end = scan_while(code, pos, |c| c.is_ascii_digit() || c == '.');
            (TokenKind::Number, end)
        } else if ch.is_alphabetic() || ch == '_' {
            let end = scan_while(code, pos, |c| c.is_alphanumeric() || c == '_');
            (word_kind(&code[pos..end]), end)
        } else {
            (TokenKind::Plain, pos + ch.len_utf8())
        };

        out.push(Token::new(kind, &code[pos..end]));
        pos = end;
    }
}

fn word_kind(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else if is_builtin(word) {
        TokenKind::Builtin
    } else {
        TokenKind::Plain
    }
}

/// End of the run starting at `start` whose chars satisfy `pred`
fn scan_while(text: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    text[start..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| start + i)
}

/// End of the string literal opened by `quote` at `start`.
///
/// A backslash escapes the following character. Unterminated literals run
/// to the end of `text`.
fn scan_string(text: &str, start: usize, quote: char) -> usize {
    let body = start + quote.len_utf8();
    let mut chars = text[body..].char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return body + i + c.len_utf8();
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(code: &str) -> Vec<(TokenKind, &str)> {
        tokenize(code).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_keywords_builtins_numbers() {
        use TokenKind::*;
        assert_eq!(
            kinds("for i in range(10):"),
            vec![
                (Keyword, "for"),
                (Plain, " "),
                (Plain, "i"),
                (Plain, " "),
                (Keyword, "in"),
                (Plain, " "),
                (Builtin, "range"),
                (Plain, "("),
                (Number, "10"),
                (Plain, ")"),
                (Plain, ":"),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let tokens = kinds(r#"s = "a\"b" + x"#);
        assert!(tokens.contains(&(TokenKind::String, r#""a\"b""#)));
        assert!(tokens.contains(&(TokenKind::Plain, "x")));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = kinds("x = 'abc");
        assert_eq!(tokens.last(), Some(&(TokenKind::String, "'abc")));
    }

    #[test]
    fn test_trailing_backslash_in_string() {
        let tokens = kinds("'abc\\");
        assert_eq!(tokens, vec![(TokenKind::String, "'abc\\")]);
    }

    #[test]
    fn test_multi_dot_number_is_one_token() {
        assert_eq!(kinds("1.2.3"), vec![(TokenKind::Number, "1.2.3")]);
    }

    #[test]
    fn test_full_line_comment() {
        assert_eq!(
            kinds("    # note: for x in y"),
            vec![(TokenKind::Comment, "    # note: for x in y")]
        );
    }

    #[test]
    fn test_trailing_comment() {
        let tokens = kinds("x = 1  # set x");
        assert_eq!(tokens.last(), Some(&(TokenKind::Comment, "# set x")));
        assert!(tokens.contains(&(TokenKind::Number, "1")));
    }

    #[test]
    fn test_hash_inside_string_splits_naively() {
        // Known limitation: the first `#` wins even inside a literal
        let tokens = kinds(r#"s = "a # b""#);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Plain, "s"),
                (TokenKind::Plain, " "),
                (TokenKind::Plain, "="),
                (TokenKind::Plain, " "),
                (TokenKind::String, "\"a "),
                (TokenKind::Comment, "# b\""),
            ]
        );
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(kinds("_len2"), vec![(TokenKind::Plain, "_len2")]);
        assert_eq!(kinds("len"), vec![(TokenKind::Builtin, "len")]);
    }

    #[test]
    fn test_tokens_reconstruct_input() {
        let code = "def f(a):\n\n    return a  # done\n  \r\nx = \"é\" ♥ 3.14\n";
        let rebuilt: String = tokenize(code).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, code);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
