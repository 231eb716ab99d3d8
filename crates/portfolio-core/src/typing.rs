//! Hero title typing effect.
//!
//! Types a title one character at a time, holds it, deletes it, then moves
//! on to the next title. The renderer drives it with a timer: show
//! [`TypingFrame::text`], sleep [`TypingFrame::delay`], call
//! [`TypingAnimation::tick`] again.

use std::time::Duration;

pub const TYPING_DELAY: Duration = Duration::from_millis(100);
pub const DELETING_DELAY: Duration = Duration::from_millis(50);
pub const PAUSE_DELAY: Duration = Duration::from_millis(2000);
pub const START_DELAY: Duration = Duration::from_millis(1000);

pub const DEFAULT_TITLES: [&str; 5] = [
    "Mobile App Developer",
    "iOS Developer",
    "Android Developer",
    "Swift Enthusiast",
    "Kotlin Developer",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimation {
    titles: Vec<Vec<char>>,
    title_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Default for TypingAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_TITLES.iter().map(|t| t.to_string()).collect())
    }
}

impl TypingAnimation {
    /// Empty titles are dropped.
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles: titles
                .into_iter()
                .filter(|t| !t.is_empty())
                .map(|t| t.chars().collect())
                .collect(),
            title_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// Advance one step. `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let title = self.titles.get(self.title_index)?;

        if !self.deleting {
            self.char_index += 1;
            let text: String = title[..self.char_index].iter().collect();
            if self.char_index == title.len() {
                self.deleting = true;
                return Some(TypingFrame {
                    text,
                    delay: PAUSE_DELAY,
                });
            }
            return Some(TypingFrame {
                text,
                delay: TYPING_DELAY,
            });
        }

        self.char_index -= 1;
        let text: String = title[..self.char_index].iter().collect();
        if self.char_index == 0 {
            self.deleting = false;
            self.title_index = (self.title_index + 1) % self.titles.len();
            return Some(TypingFrame {
                text,
                delay: TYPING_DELAY,
            });
        }
        Some(TypingFrame {
            text,
            delay: DELETING_DELAY,
        })
    }

    pub fn title_index(&self) -> usize {
        self.title_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
