use crate::util::unicode;

/// Single-line text entry with a grapheme-aware cursor and horizontal scroll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Byte offset into `text`, always on a grapheme boundary
    cursor: usize,
    /// First visible display column
    scroll: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c.is_control() { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text. Line breaks and tabs become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean: String = s
            .chars()
            .filter(|&c| c != '\r')
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn word_left(&mut self) {
        self.cursor = unicode::word_start_before(&self.text, self.cursor);
    }

    pub fn word_right(&mut self) {
        self.cursor = unicode::word_start_after(&self.text, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Delete everything before the cursor (Ctrl+U)
    pub fn kill_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete the word before the cursor (Ctrl+W)
    pub fn delete_word_before(&mut self) {
        let start = unicode::word_start_before(&self.text, self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Place the cursor at visible column `col` (a mouse click)
    pub fn click(&mut self, col: usize) {
        self.cursor = unicode::col_to_offset(&self.text, self.scroll + col);
    }

    /// Adjust the scroll so the cursor fits in `width` cells and return the
    /// visible tail of the text plus the cursor column relative to it.
    pub fn view(&mut self, width: usize) -> (&str, usize) {
        let cursor_col = unicode::offset_to_col(&self.text, self.cursor);
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if width > 0 && cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }
        let start = unicode::col_to_offset(&self.text, self.scroll);
        let start_col = unicode::offset_to_col(&self.text, start);
        (&self.text[start..], cursor_col - start_col)
    }
}
