#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub is_correct: bool,
    pub score: u32,
}

impl Question {
    pub fn new(is_correct: bool, score: u32) -> Self {
        Self { is_correct, score }
    }
}
