//! Tokenize transcription segments and derive word counts.
//!
//! Tokenization is relatively dumb: it divides the input into simple token
//! categories without validating that tokens consist of allowed character
//! sequences. Counting only needs the categories — `[...]` marks overlapping
//! speech, `(...)` non-verbal comments, `<...>` uncertain passages,
//! `@`-prefixed tokens are anonymized words, and `..` / `...` are pauses.
//!
//! Whitespace is normalized prior to tokenization, as this isn't something
//! we'd want people to fix by hand.

use std::sync::LazyLock;

use regex::{Match, Regex, RegexBuilder};

static WHITESPACE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());

static TOKENIZER_RE: LazyLock<Regex> = LazyLock::new(|| {
  RegexBuilder::new(
    r#"
    # paired delimiter token:
        [
            \[\]\(\)<>
        ]
    |
    # whitespace:
        \s+
    |
    # non-whitespace:
        [^
            \[\]\(\)<>
            \s
        ]+
    "#,
  )
  .ignore_whitespace(true)
  .build()
  .unwrap()
});

// ─── Tokens ──────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DelimKind {
  /// `(...)` — non-verbal comment.
  Round,
  /// `[...]` — overlapping speech.
  Square,
  /// `<...>` — uncertain passage.
  Angle,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind {
  Word,
  /// `..` or `...`.
  Pause,
  /// `@`-prefixed anonymized word.
  Anonymized,
  Open(DelimKind),
  Close(DelimKind),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token {
  pub kind:  TokenKind,
  pub start: usize,
  pub end:   usize,
}

impl<'t> From<Match<'t>> for Token {
  fn from(mat: Match) -> Self {
    use DelimKind::*;
    use TokenKind::*;

    let kind = match mat.as_str() {
      "(" => Open(Round),
      ")" => Close(Round),
      "[" => Open(Square),
      "]" => Close(Square),
      "<" => Open(Angle),
      ">" => Close(Angle),
      ".." | "..." => Pause,
      s if s.starts_with('@') => Anonymized,
      _ => Word,
    };
    Self {
      kind,
      start: mat.start(),
      end: mat.end(),
    }
  }
}

/// A tokenized segment. `source` is the whitespace-normalized input; token
/// offsets index into it.
#[derive(Debug)]
pub struct Tokenized {
  pub source: String,
  pub tokens: Vec<Token>,
}

impl Tokenized {
  pub fn as_str(&self, token: &Token) -> &str {
    &self.source[token.start..token.end]
  }

  /// The number of spoken word tokens: words and anonymized words, excluding
  /// pauses and anything inside a non-verbal comment.
  pub fn word_count(&self) -> i64 {
    let mut comment_depth = 0u32;
    let mut count = 0;
    for token in &self.tokens {
      match token.kind {
        TokenKind::Open(DelimKind::Round) => comment_depth += 1,
        TokenKind::Close(DelimKind::Round) => {
          comment_depth = comment_depth.saturating_sub(1);
        }
        TokenKind::Word | TokenKind::Anonymized if comment_depth == 0 => {
          count += 1;
        }
        _ => {}
      }
    }
    count
  }
}

/// Tokenize one transcription segment.
pub fn tokenize(source: &str) -> Tokenized {
  // normalize whitespace
  let source = WHITESPACE_RE.replace_all(source.trim(), " ").into_owned();
  let tokens = TOKENIZER_RE
    .find_iter(&source)
    .filter_map::<Token, _>(|m| {
      if m.as_str() == " " {
        None
      } else {
        Some(Token::from(m))
      }
    })
    .collect();
  Tokenized { source, tokens }
}

#[cfg(test)]
mod tests {
  use super::{DelimKind::*, TokenKind::*, *};

  #[test]
  fn tokenize_square_brackets() {
    let seg = tokenize("foo [bar] baz");
    assert_eq!(seg.tokens[1].kind, Open(Square));
    assert_eq!(seg.tokens[3].kind, Close(Square));
  }

  #[test]
  fn tokenize_round_brackets() {
    let seg = tokenize("foo (bar) baz");
    assert_eq!(seg.tokens[1].kind, Open(Round));
    assert_eq!(seg.tokens[3].kind, Close(Round));
  }

  #[test]
  fn tokenize_angle_brackets() {
    let seg = tokenize("foo <bar> baz");
    assert_eq!(seg.tokens[1].kind, Open(Angle));
    assert_eq!(seg.tokens[3].kind, Close(Angle));
  }

  fn compare_tokens(source: &str, tokens: &[&str]) {
    let segment = tokenize(source);
    assert_eq!(
      segment.tokens.len(),
      tokens.len(),
      "Number of tokens differs."
    );
    for (tokenized, reference) in segment.tokens.iter().zip(tokens.iter()) {
      let tokenized = segment.as_str(tokenized);
      assert_eq!(&tokenized, reference, "Token values as str differ.");
    }
  }

  #[test]
  fn compare_nice() {
    compare_tokens(
      "čáp [dřepí @u <SM v] .. (louži>)",
      &[
        "čáp", "[", "dřepí", "@u", "<", "SM", "v", "]", "..", "(", "louži",
        ">", ")",
      ],
    );
  }

  #[test]
  fn compare_not_nice() {
    compare_tokens(
      "foo][ bar(baz)..",
      &["foo", "]", "[", "bar", "(", "baz", ")", ".."],
    );
  }

  #[test]
  fn count_skips_pauses_and_comments() {
    // "hm" inside the round comment and the pause don't count; the
    // anonymized "@novák" and the overlapped words do.
    let seg = tokenize("no tak @novák [šel ven] .. (hm) jo");
    assert_eq!(seg.word_count(), 6);
  }

  #[test]
  fn count_normalizes_whitespace() {
    let seg = tokenize("  jedna\t dvě \n tři ");
    assert_eq!(seg.word_count(), 3);
    assert_eq!(seg.source, "jedna dvě tři");
  }

  #[test]
  fn count_empty_segment() {
    assert_eq!(tokenize("   ").word_count(), 0);
  }
}
