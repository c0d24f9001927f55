//! Box-drawing glyphs and the prefix bookkeeping that nests them.

/// The four glyph strings used to draw branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Connector for a sibling that is followed by more siblings.
    pub branch: &'static str,
    /// Connector for the last sibling in a listing.
    pub last_branch: &'static str,
    /// Continuation under an ancestor that still has siblings below it.
    pub indent: &'static str,
    /// Continuation under an ancestor that was the last sibling.
    pub last_indent: &'static str,
}

impl Glyphs {
    pub const BOX_DRAWING: Glyphs = Glyphs {
        branch: "\u{251c}\u{2500}\u{2500} ",      // ├──
        last_branch: "\u{2514}\u{2500}\u{2500} ", // └──
        indent: "\u{2502}   ",                    // │
        last_indent: "    ",
    };

    /// Connector printed directly before an entry's name.
    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last {
            self.last_branch
        } else {
            self.branch
        }
    }

    /// Continuation segment prepended to everything below an entry.
    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last {
            self.last_indent
        } else {
            self.indent
        }
    }
}

/// Whether position `index` is the final one in a listing of `len` entries.
///
/// Last-ness is decided over the raw listing, before hidden or filtered
/// entries are dropped, so a trailing hidden entry leaves every visible
/// sibling drawn with the middle connector.
pub fn is_last_child(index: usize, len: usize) -> bool {
    index + 1 == len
}

/// Per-call rendering state threaded through the recursion.
///
/// Each recursive call receives its own derived copy; nothing is shared
/// between siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Accumulated continuation segments of every ancestor level.
    pub indent: String,
    /// Whether this entry is last among its siblings.
    pub is_last: bool,
    /// Recursion depth (1 = direct child of the root).
    pub depth: usize,
}

impl RenderContext {
    /// Context for a direct child of the root.
    pub fn top_level(is_last: bool) -> Self {
        Self {
            indent: String::new(),
            is_last,
            depth: 1,
        }
    }

    /// Full prefix displayed before this entry's name.
    pub fn prefix(&self, glyphs: &Glyphs) -> String {
        format!("{}{}", self.indent, glyphs.connector(self.is_last))
    }

    /// Context forwarded to one child of this entry.
    ///
    /// The same `is_last` flag that picked this entry's connector picks the
    /// continuation drawn under it.
    pub fn child(&self, glyphs: &Glyphs, child_is_last: bool) -> Self {
        let mut indent = String::with_capacity(self.indent.len() + glyphs.indent.len());
        indent.push_str(&self.indent);
        indent.push_str(glyphs.continuation(self.is_last));
        Self {
            indent,
            is_last: child_is_last,
            depth: self.depth + 1,
        }
    }
}
