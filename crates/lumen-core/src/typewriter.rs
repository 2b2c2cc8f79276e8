//! Character-by-character title reveal.

/// One reveal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    /// Text revealed so far
    pub revealed: String,
    /// 1-based step number
    pub step: usize,
    /// Set only on the last step
    pub complete: bool,
}

/// Reveals `text` one `char` per tick.
///
/// A text of `L` chars yields exactly `L` frames; the last one is marked
/// complete and its `revealed` equals the whole text. An empty text yields no
/// frames and reports complete immediately.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offsets just past each char
    boundaries: Vec<usize>,
    step: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(offset, c)| offset + c.len_utf8())
            .collect();
        Self {
            text,
            boundaries,
            step: 0,
        }
    }

    /// Number of frames this text produces.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.boundaries.len()
    }

    /// Text revealed so far.
    pub fn revealed(&self) -> &str {
        match self.step {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Reveal one more character.
    pub fn tick(&mut self) -> Option<TypewriterFrame> {
        if self.is_complete() {
            return None;
        }
        self.step += 1;
        Some(TypewriterFrame {
            revealed: self.revealed().to_string(),
            step: self.step,
            complete: self.is_complete(),
        })
    }
}

impl Iterator for Typewriter {
    type Item = TypewriterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick() {
        let frames: Vec<_> = Typewriter::new("Hey").collect();
        let revealed: Vec<_> = frames.iter().map(|f| f.revealed.as_str()).collect();
        assert_eq!(revealed, ["H", "He", "Hey"]);
    }

    #[test]
    fn completion_only_on_last_step() {
        let frames: Vec<_> = Typewriter::new("abcd").collect();
        assert_eq!(frames.len(), 4);
        assert!(frames[..3].iter().all(|f| !f.complete));
        assert!(frames[3].complete);
        assert_eq!(frames[3].step, 4);
    }

    #[test]
    fn multibyte_chars_are_single_steps() {
        let mut writer = Typewriter::new("héllo ✨");
        assert_eq!(writer.len(), 7);
        let last = writer.by_ref().last().unwrap();
        assert_eq!(last.revealed, "héllo ✨");
        assert!(writer.tick().is_none());
    }

    #[test]
    fn empty_text_is_already_complete() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_complete());
        assert!(writer.tick().is_none());
        assert_eq!(writer.revealed(), "");
    }
}
