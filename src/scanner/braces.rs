//! Brace-depth automaton and the brace walks built on it.
//!
//! Depth changes at most once per direction per line: a line holding any `{` adds 1, a line
//! holding any `}` subtracts 1. `{{` counts the same as `{`.

/// True if the line contains at least one `{`.
pub fn opens(line: &str) -> bool {
    line.contains('{')
}

/// True if the line contains at least one `}`.
pub fn closes(line: &str) -> bool {
    line.contains('}')
}

/// Integer nesting depth, updated one line at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceDepth(i32);

impl BraceDepth {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Apply one line's transition (-1, 0 or +1) and return the new depth.
    pub fn step(&mut self, line: &str) -> i32 {
        if opens(line) {
            self.0 += 1;
        }
        if closes(line) {
            self.0 -= 1;
        }
        self.0
    }
}

/// Walk upward from `line - 1` until the depth first reaches 1.
/// Returns the index of that line (the nearest enclosing opener), or None.
pub fn find_enclosing_opener<S: AsRef<str>>(lines: &[S], line: usize) -> Option<usize> {
    if line > lines.len() {
        return None;
    }
    let mut depth = BraceDepth::new();
    (0..line).rev().find(|&i| depth.step(lines[i].as_ref()) == 1)
}

/// First line at or after `from` that contains `{`.
pub fn find_opening_brace<S: AsRef<str>>(lines: &[S], from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, l)| opens(l.as_ref()))
        .map(|(i, _)| i)
}

/// Walk forward from `open` until a line with `}` brings the depth back to exactly 0.
/// None when the sequence runs out first (unbalanced input).
pub fn find_matching_closing_brace<S: AsRef<str>>(lines: &[S], open: usize) -> Option<usize> {
    let mut depth = BraceDepth::new();
    for (i, line) in lines.iter().enumerate().skip(open) {
        let line = line.as_ref();
        if depth.step(line) == 0 && closes(line) {
            return Some(i);
        }
    }
    None
}

/// True if `target` is a direct member line of the block opened at `open`: the depth before
/// the target line is exactly 1 and the line holds neither brace or both.
pub fn is_at_block_top_level<S: AsRef<str>>(lines: &[S], open: usize, target: usize) -> bool {
    if target < open || target >= lines.len() {
        return false;
    }
    let mut depth = BraceDepth::new();
    for line in &lines[open..target] {
        depth.step(line.as_ref());
    }
    let line = lines[target].as_ref();
    depth.get() == 1 && opens(line) == closes(line)
}
