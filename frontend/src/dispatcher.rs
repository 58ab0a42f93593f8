use completion_api::{DeleteRequest, DeleteResult, Endpoint, TrainRequest};
use serde::de::DeserializeOwned;

use crate::{
    config::Question,
    error::ClientError,
    page::{Content, Field, Output, Page},
    transport::Transport,
};

/// One handler per button. Failures are logged and never touch the page.
#[derive(Clone)]
pub(crate) struct Dispatcher<P, T> {
    page: P,
    transport: T,
}

impl<P: Page, T: Transport> Dispatcher<P, T> {
    pub fn new(page: P, transport: T) -> Self {
        Self { page, transport }
    }

    pub async fn train(&self) {
        if let Err(e) = self.try_train().await {
            leptos::logging::error!("Training failed: {}", e);
        }
    }

    pub async fn complete(&self) {
        if let Err(e) = self.try_complete().await {
            leptos::logging::error!("Completion failed: {}", e);
        }
    }

    pub async fn drop_db(&self) {
        if let Err(e) = self.try_drop_db().await {
            leptos::logging::error!("Dropping database failed: {}", e);
        }
    }

    pub async fn delete(&self, document: String) {
        if let Err(e) = self.try_delete(document).await {
            leptos::logging::error!("Deleting input failed: {}", e);
        }
    }

    pub async fn answer(&self, question: Question) {
        if let Err(e) = self.try_answer(question).await {
            leptos::logging::error!("Answering {} failed: {}", question.id, e);
        }
    }

    async fn try_train(&self) -> Result<(), ClientError> {
        let input_corpus = self.page.read(&Field::InputCorpus);
        let result: serde_json::Value = self
            .call(Endpoint::Train(TrainRequest { input_corpus }))
            .await?;
        leptos::logging::log!("{{\"result\":{}}}", result);
        Ok(())
    }

    async fn try_complete(&self) -> Result<(), ClientError> {
        let phrase = self.page.read(&Field::PredictionPhrase);
        let result: String = self.call(Endpoint::Complete { phrase }).await?;
        self.page.write(&Output::Prediction, Content::Text(result));
        Ok(())
    }

    async fn try_drop_db(&self) -> Result<(), ClientError> {
        let result: serde_json::Value = self.call(Endpoint::DropDb).await?;
        leptos::logging::log!("{{\"result\":{}}}", result);
        Ok(())
    }

    async fn try_delete(&self, document: String) -> Result<(), ClientError> {
        let result: DeleteResult = self
            .call(Endpoint::Delete(DeleteRequest { document }))
            .await?;
        leptos::logging::log!(
            "Delete status {}, {} documents remain",
            result.status(),
            result.documents().len()
        );
        self.page.replace_documents(result.into_documents());
        Ok(())
    }

    async fn try_answer(&self, question: Question) -> Result<(), ClientError> {
        let text = self.page.read(&Field::Question(question));
        let result: String = self.call(Endpoint::Answer { question: text }).await?;
        self.page.write(
            &Output::Answer(question),
            Content::Text(format!("Ans: {}", result)),
        );
        Ok(())
    }

    async fn call<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, ClientError> {
        let request = endpoint
            .into_request()
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        leptos::logging::log!("{}", request);

        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ClientError::Server {
                status: resp.status,
                body: resp.body,
            });
        }

        completion_api::decode_response(&resp.body)
            .map_err(|e| ClientError::InvalidResponseShape(e.to_string()))
    }
}
