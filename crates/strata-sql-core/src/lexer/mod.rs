//! SQL lexer.
//!
//! The [`Lexer`] scans source text into [`Token`]s, classifying words
//! through the dialect's [`KeywordTable`]. The [`TokenStream`] buffers those
//! tokens for the parser and supports arbitrary lookahead plus mark/rewind.

mod keyword;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use keyword::{Keyword, KeywordClass, KeywordTable};
pub use span::Span;
pub use stream::{Mark, TokenStream};
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
