//! Tokenizer for mobile layer strings
//!
//! Mobile layer rows mix literal output tokens with inline escapes of the
//! form `\s{name}` or `\s{name:width}`. The tokenizer turns one row line
//! into tagged tokens so row building never touches the string format.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    #[regex(r"\\s\{[^}]*\}", |lex| lex.slice().to_string(), priority = 3)]
    Escape(String),

    #[regex(r"[^ \t]+", |lex| lex.slice().to_string(), priority = 1)]
    Text(String),
}

/// One token of a mobile layer row.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyToken {
    /// Literal character output
    Literal(String),
    /// Named non-printing key, with an optional width override
    Special { name: String, width: Option<f32> },
    /// Layout gap; consumes no physical position
    Spacer { width: Option<f32> },
}

/// Tokenizes a single row line. Malformed escapes are dropped.
pub fn tokenize_row(line: &str) -> Vec<KeyToken> {
    let mut tokens = Vec::new();
    for raw in RawToken::lexer(line).flatten() {
        match raw {
            RawToken::Escape(text) => {
                if let Some(token) = parse_escape(&text) {
                    tokens.push(token);
                }
            }
            RawToken::Text(text) => tokens.push(KeyToken::Literal(text)),
        }
    }
    tokens
}

fn parse_escape(text: &str) -> Option<KeyToken> {
    let inner = text.strip_prefix(r"\s{")?.strip_suffix('}')?;
    let (name, width) = match inner.split_once(':') {
        Some((name, width)) => (name.trim(), width.trim().parse::<f32>().ok()),
        None => (inner.trim(), None),
    };
    if name.is_empty() {
        return None;
    }
    if name == "spacer" {
        Some(KeyToken::Spacer { width })
    } else {
        Some(KeyToken::Special {
            name: name.to_string(),
            width,
        })
    }
}
