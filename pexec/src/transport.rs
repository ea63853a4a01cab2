//! Processing API transport contract and the reqwest multipart implementation.

use presult::{ProcessingResponse, ProcessingResult};
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use pcommon::BoxFuture;
use psession::{FileHandle, FileSource};

use crate::{ExecError, GENERIC_TRANSPORT_MESSAGE, SubmissionPayload};

/// Raw HTTP answer before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: &str) -> Self {
        Self::new(status, body.as_bytes().to_vec())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Maps the answer to a result or to the most specific error available.
    ///
    /// A non-2xx status with a parseable `error` string is an application
    /// error; without one it is a transport error. A 2xx body that is not an
    /// envelope is a transport error.
    pub fn interpret(self) -> Result<ProcessingResult, ExecError> {
        let status = self.status;
        let parsed = ProcessingResponse::from_slice(&self.body);

        if !self.is_success() {
            let message = parsed
                .as_ref()
                .ok()
                .and_then(ProcessingResponse::error_message)
                .map(str::to_string);

            return Err(match message {
                Some(message) => ExecError::application(message),
                None => ExecError::transport(GENERIC_TRANSPORT_MESSAGE),
            }
            .with_status(status));
        }

        match parsed {
            Ok(envelope) => envelope.into_result().map_err(ExecError::from),
            Err(_) => Err(ExecError::transport(GENERIC_TRANSPORT_MESSAGE).with_status(status)),
        }
    }
}

pub trait ProcessingTransport: Send + Sync + std::fmt::Debug {
    fn submit<'a>(
        &'a self,
        payload: SubmissionPayload,
    ) -> BoxFuture<'a, Result<TransportResponse, ExecError>>;
}

#[derive(Debug, Clone)]
pub struct HttpProcessingTransport {
    client: Client,
    base_url: String,
}

impl HttpProcessingTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn build_form(payload: SubmissionPayload) -> Result<Form, ExecError> {
        let mut form = Form::new();

        for file in payload.files {
            form = form.part(payload.file_field, Self::file_part(file).await?);
        }

        for (key, value) in payload.fields {
            form = form.text(key, value);
        }

        Ok(form)
    }

    async fn file_part(file: FileHandle) -> Result<Part, ExecError> {
        let bytes = match file.source {
            FileSource::Memory(bytes) => bytes.to_vec(),
            FileSource::Path(path) => tokio::fs::read(&path).await.map_err(|err| {
                ExecError::transport(format!("failed to read '{}': {err}", path.display()))
            })?,
        };

        let part = Part::bytes(bytes).file_name(file.name);
        if file.mime.trim().is_empty() {
            return Ok(part);
        }

        part.mime_str(&file.mime)
            .map_err(|err| ExecError::transport(format!("invalid MIME type '{}': {err}", file.mime)))
    }
}

impl ProcessingTransport for HttpProcessingTransport {
    fn submit<'a>(
        &'a self,
        payload: SubmissionPayload,
    ) -> BoxFuture<'a, Result<TransportResponse, ExecError>> {
        Box::pin(async move {
            let url = self.endpoint(&payload.endpoint);
            let form = Self::build_form(payload).await?;

            let response = self
                .client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ExecError::transport(format!("request timed out: {err}"))
                    } else {
                        ExecError::transport(format!("request failed: {err}"))
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| ExecError::transport(err.to_string()).with_status(status))?;

            Ok(TransportResponse::new(status, body.to_vec()))
        })
    }
}
