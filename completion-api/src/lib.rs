use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Characters `encodeURIComponent` leaves alone.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainRequest {
    pub input_corpus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteRequest {
    pub document: String,
}

/// Every endpoint wraps its payload in `{"result": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub result: T,
}

/// `/delete` answers with `[status, remaining_documents]`. Nothing says what
/// the status is, so it stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResult(pub serde_json::Value, pub Vec<String>);

impl DeleteResult {
    pub fn status(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn documents(&self) -> &[String] {
        &self.1
    }

    pub fn into_documents(self) -> Vec<String> {
        self.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Train(TrainRequest),
    Complete { phrase: String },
    DropDb,
    Delete(DeleteRequest),
    Answer { question: String },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Train(_) | Endpoint::Delete(_) => Method::Post,
            Endpoint::Complete { .. } | Endpoint::DropDb | Endpoint::Answer { .. } => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Train(_) => "/train".to_owned(),
            Endpoint::Complete { phrase } => format!("/complete/{}", encode_segment(phrase)),
            Endpoint::DropDb => "/dropdb".to_owned(),
            Endpoint::Delete(_) => "/delete".to_owned(),
            Endpoint::Answer { question } => format!("/answer/{}", encode_segment(question)),
        }
    }

    pub fn body(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            Endpoint::Train(form) => serde_json::to_string(form).map(Some),
            Endpoint::Delete(form) => serde_json::to_string(form).map(Some),
            _ => Ok(None),
        }
    }

    pub fn into_request(self) -> Result<ApiRequest, serde_json::Error> {
        Ok(ApiRequest {
            method: self.method(),
            path: self.path(),
            body: self.body()?,
        })
    }
}

/// A request as it goes over the wire, relative to the API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl std::fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str::<ApiResponse<T>>(body).map(|response| response.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_posts_json_corpus() {
        let request = Endpoint::Train(TrainRequest {
            input_corpus: "hello world".to_owned(),
        })
        .into_request()
        .unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/train");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"input_corpus":"hello world"}"#)
        );
    }

    #[test]
    fn complete_encodes_phrase_into_path() {
        let request = Endpoint::Complete {
            phrase: "the cat sat on".to_owned(),
        }
        .into_request()
        .unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/complete/the%20cat%20sat%20on");
        assert_eq!(request.body, None);
    }

    #[test]
    fn segments_keep_uri_component_marks() {
        assert_eq!(encode_segment("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_segment("café"), "caf%C3%A9");
        assert_eq!(encode_segment(""), "");
    }

    #[test]
    fn drop_db_has_no_body() {
        let request = Endpoint::DropDb.into_request().unwrap();
        assert_eq!(request.to_string(), "GET /dropdb");
        assert_eq!(request.body, None);
    }

    #[test]
    fn delete_posts_document() {
        let request = Endpoint::Delete(DeleteRequest {
            document: "foo".to_owned(),
        })
        .into_request()
        .unwrap();

        assert_eq!(request.to_string(), "POST /delete");
        assert_eq!(request.body.as_deref(), Some(r#"{"document":"foo"}"#));
    }

    #[test]
    fn answer_encodes_question() {
        let request = Endpoint::Answer {
            question: "what is next?".to_owned(),
        }
        .into_request()
        .unwrap();
        assert_eq!(request.path, "/answer/what%20is%20next%3F");
    }

    #[test]
    fn decodes_delete_result() {
        let result: DeleteResult = decode_response(r#"{"result":["ok",["foo","bar"]]}"#).unwrap();
        assert_eq!(result.status(), &serde_json::json!("ok"));
        assert_eq!(result.documents(), ["foo", "bar"]);
    }

    #[test]
    fn rejects_mismatched_shapes() {
        assert!(decode_response::<String>(r#"{"result":["a"]}"#).is_err());
        assert!(decode_response::<String>(r#"{"answer":"a"}"#).is_err());
        assert!(decode_response::<DeleteResult>(r#"{"result":["ok"]}"#).is_err());
        assert!(decode_response::<serde_json::Value>("not json").is_err());
    }

    #[test]
    fn any_result_is_accepted_for_untyped_endpoints() {
        let result: serde_json::Value = decode_response(r#"{"result":true}"#).unwrap();
        assert_eq!(result, serde_json::Value::Bool(true));
    }
}
