/// The shared cursor over a token sequence.
///
/// Every element of a grammar parses through the same `Scanner`.
/// The position only ever moves forward, and never beyond the end of the tokens.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    tokens: &'t [&'t str],
    position: usize,
}

impl<'t> Scanner<'t> {
    /// Create a scanner positioned at the first token.
    pub fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor, or `None` when exhausted.
    pub fn current(&self) -> Option<&'t str> {
        self.lookahead(0)
    }

    /// The token `offset` positions past the cursor, without moving.
    pub fn lookahead(&self, offset: usize) -> Option<&'t str> {
        self.tokens.get(self.position + offset).copied()
    }

    /// Move the cursor forward by `count` tokens.
    pub fn advance(&mut self, count: usize) {
        assert!(
            self.position + count <= self.tokens.len(),
            "internal error - cannot advance beyond the end of the tokens"
        );
        self.position += count;
    }

    /// The index of the token under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Whether every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position == self.tokens.len()
    }

    /// The total number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
