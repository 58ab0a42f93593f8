use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::Question;

/// Inputs a handler reads at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    InputCorpus,
    PredictionPhrase,
    Question(Question),
}

impl Field {
    pub fn id(&self) -> String {
        match self {
            Field::InputCorpus => "input_corpus".to_owned(),
            Field::PredictionPhrase => "pred_phrase".to_owned(),
            Field::Question(question) => question.id.to_owned(),
        }
    }
}

/// Elements a handler writes a server result into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Prediction,
    Answer(Question),
}

impl Output {
    pub fn id(&self) -> String {
        match self {
            Output::Prediction => "prediction".to_owned(),
            Output::Answer(question) => question.answer_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Content {
    Text(String),
    // Server responses are never written as markup; this is the only way in.
    #[allow(dead_code)]
    Markup(String),
}

pub(crate) trait Page {
    fn read(&self, field: &Field) -> String;
    fn write(&self, output: &Output, content: Content);
    fn replace_documents(&self, documents: Vec<String>);
}

/// Page state backing the rendered components.
#[derive(Clone, Copy)]
pub(crate) struct PageState {
    pub input_corpus: RwSignal<String>,
    pub pred_phrase: RwSignal<String>,
    pub prediction: RwSignal<Option<Content>>,
    pub answers: RwSignal<HashMap<&'static str, Content>>,
    pub documents: RwSignal<Vec<String>>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            input_corpus: RwSignal::new(String::new()),
            pred_phrase: RwSignal::new(String::new()),
            prediction: RwSignal::new(None),
            answers: RwSignal::new(HashMap::new()),
            documents: RwSignal::new(Vec::new()),
        }
    }

    pub fn answer(&self, question: &Question) -> Option<Content> {
        self.answers.with(|answers| answers.get(question.id).cloned())
    }
}

impl Page for PageState {
    fn read(&self, field: &Field) -> String {
        match field {
            Field::InputCorpus => self.input_corpus.get_untracked(),
            Field::PredictionPhrase => self.pred_phrase.get_untracked(),
            // The prompt element renders the configured text verbatim.
            Field::Question(question) => question.prompt.to_owned(),
        }
    }

    fn write(&self, output: &Output, content: Content) {
        match output {
            Output::Prediction => self.prediction.set(Some(content)),
            Output::Answer(question) => self.answers.update(|answers| {
                answers.insert(question.id, content);
            }),
        }
    }

    fn replace_documents(&self, documents: Vec<String>) {
        self.documents.set(documents);
    }
}
