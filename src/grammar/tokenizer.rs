//! Tokenizer for command strings
//!
//! Converts a command string (an axiom or a rule template) into a lazy,
//! left-to-right stream of [`Token`]s. Characters that do not start a
//! recognizable token are skipped silently — stray whitespace or separators
//! between tokens never survive into expansion output.
//!
//! Repeat blocks are matched with balanced `{}`/`()` scanning, so blocks may
//! nest. Call argument lists are *not* balanced: the list ends at the first
//! `>` after the opening `<`, which means an atom call cannot appear as a
//! literal argument to another call. That restriction is part of the
//! supported grammar and is relied on by existing command strings.

use super::token::Token;

/// Lazy tokenizer over a command string.
///
/// Implements [`Iterator`], producing tokens on demand in order of
/// appearance.
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a tokenizer for the given command string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Collect the characters in `range` into an owned string.
    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }

    /// Scan a `{content}(count)` block starting at the current `{`.
    ///
    /// Both the braces and the count parentheses are matched with depth
    /// counting. Returns `None` without consuming anything when the block
    /// is malformed (unbalanced braces, or no `(` directly after `}`), in
    /// which case the caller drops the `{` and rescans the content.
    fn scan_repeat(&mut self) -> Option<Token> {
        let content_start = self.position + 1;
        let mut cursor = content_start;
        let mut depth = 1usize;

        while cursor < self.input.len() {
            match self.input[cursor] {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            cursor += 1;
        }
        if depth != 0 {
            return None;
        }
        let content_end = cursor;

        // The count expression must follow the closing brace directly.
        if self.input.get(content_end + 1) != Some(&'(') {
            return None;
        }
        let count_start = content_end + 2;
        let mut cursor = count_start;
        let mut depth = 1usize;
        while cursor < self.input.len() {
            match self.input[cursor] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            cursor += 1;
        }
        if depth != 0 {
            return None;
        }
        let count_end = cursor;

        self.position = count_end + 1;
        Some(Token::Repeat {
            content: self.slice(content_start, content_end),
            count: self.slice(count_start, count_end),
        })
    }

    /// Scan a `name<args>` call starting at the current word character.
    ///
    /// The argument list ends at the first `>`. Returns `None` without
    /// consuming anything when the word is not followed by a complete
    /// argument list.
    fn scan_call(&mut self) -> Option<Token> {
        let mut cursor = self.position;
        while cursor < self.input.len() && is_word(self.input[cursor]) {
            cursor += 1;
        }
        if self.input.get(cursor) != Some(&'<') {
            return None;
        }
        let atom = self.slice(self.position, cursor);
        let args_start = cursor + 1;
        let args_end = (args_start..self.input.len()).find(|&i| self.input[i] == '>')?;

        let raw = self.slice(args_start, args_end);
        let args = raw
            .split(',')
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();

        self.position = args_end + 1;
        Some(Token::Call { atom, args })
    }

    /// Skip the word-character run at the current position.
    fn skip_word(&mut self) {
        while self.peek(0).is_some_and(is_word) {
            self.position += 1;
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.position < self.input.len() {
            let c = self.input[self.position];
            match c {
                '[' => {
                    self.position += 1;
                    return Some(Token::Push);
                }
                ']' => {
                    self.position += 1;
                    return Some(Token::Pop);
                }
                '{' => {
                    if let Some(token) = self.scan_repeat() {
                        return Some(token);
                    }
                    // Malformed block: drop the brace and rescan its content.
                    self.position += 1;
                }
                c if is_word(c) => {
                    if let Some(token) = self.scan_call() {
                        return Some(token);
                    }
                    // Bare identifier with no argument list.
                    self.skip_word();
                }
                _ => self.position += 1,
            }
        }
        None
    }
}

/// Word characters: what `\w` matches in the declaration grammar.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse a rule declaration key of the form `name<param1,param2,...>`.
///
/// Returns the atom name and the declared parameter list, or `None` when
/// the key does not match the declaration grammar. An empty `<>` list
/// declares zero parameters; empty pieces between commas are dropped.
pub fn parse_declaration(key: &str) -> Option<(String, Vec<String>)> {
    let chars: Vec<char> = key.chars().collect();
    let mut cursor = 0;
    while cursor < chars.len() && is_word(chars[cursor]) {
        cursor += 1;
    }
    if cursor == 0 || chars.get(cursor) != Some(&'<') {
        return None;
    }
    let atom: String = chars[..cursor].iter().collect();
    let params_end = (cursor + 1..chars.len()).find(|&i| chars[i] == '>')?;
    let raw: String = chars[cursor + 1..params_end].iter().collect();
    let params = raw
        .split(',')
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    Some((atom, params))
}
