/// Prefix for every API path. Empty means the page's own origin.
pub(crate) const API_BASE: &str = match option_env!("AUTOCOMPLETE_API_BASE") {
    Some(base) => base,
    None => "",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
}

impl Question {
    pub fn button_id(&self) -> String {
        format!("{}_btn", self.id)
    }

    pub fn answer_id(&self) -> String {
        format!("{}_ans", self.id)
    }
}

pub(crate) const QUESTIONS: [Question; 4] = [
    Question {
        id: "q1",
        prompt: "What word most often follows \"the\"?",
    },
    Question {
        id: "q2",
        prompt: "What word most often follows \"i\"?",
    },
    Question {
        id: "q3",
        prompt: "What word most often follows \"to\"?",
    },
    Question {
        id: "q4",
        prompt: "What word most often follows \"is\"?",
    },
];
