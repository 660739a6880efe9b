//! Loop nesting depth from indentation
//!
//! Sequential loops at the same indentation do not accumulate; only a loop
//! header indented deeper than the enclosing open loop counts as nested.
//!
//! ```text
//! for i in range(n):        depth 1
//!     for j in range(n):    depth 2
//! for k in range(n):        depth 1 (sibling, pops back)
//! ```

/// Leading whitespace width, one column per character
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Does the (trimmed) line open with `keyword` as a whole word?
pub fn starts_with_keyword(trimmed: &str, keyword: &str) -> bool {
    match trimmed.strip_prefix(keyword) {
        Some(rest) => !rest
            .chars()
            .next()
            .map_or(false, |c| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Is this line a `for`/`while` loop header?
pub fn is_loop_header(trimmed: &str) -> bool {
    starts_with_keyword(trimmed, "for") || starts_with_keyword(trimmed, "while")
}

/// Indentation-stack walker that tracks open loop bodies.
#[derive(Debug, Default)]
pub struct NestingScanner {
    /// Indentation columns of currently open loop headers
    stack: Vec<usize>,
    depth: usize,
    max_depth: usize,
}

impl NestingScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting depth of `code`
    pub fn max_depth(code: &str) -> usize {
        let mut scanner = Self::new();
        for line in code.lines() {
            scanner.feed_line(line);
        }
        scanner.finish()
    }

    pub fn feed_line(&mut self, line: &str) {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let indent = indentation(line);

        if is_loop_header(trimmed) {
            let nested = self.stack.last().map_or(true, |&top| indent > top);
            if !nested {
                // Sibling or shallower loop: close everything at this level or deeper
                while self.stack.last().map_or(false, |&top| top >= indent) {
                    self.stack.pop();
                    self.depth = self.depth.saturating_sub(1);
                }
            }
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
            self.stack.push(indent);
        } else if self.stack.last().map_or(false, |&top| indent < top) {
            while self.stack.last().map_or(false, |&top| top > indent) {
                self.stack.pop();
                self.depth = self.depth.saturating_sub(1);
            }
        }

        tracing::trace!(indent, depth = self.depth, "nesting line");
    }

    pub fn current_depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> usize {
        self.max_depth
    }
}
