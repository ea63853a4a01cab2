//! Engine wiring: configuration, catalog, transport, hooks, and interpreter.

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;

use crate::{
    DirectoryDownloader, EngineConfig, EngineError, ExecError, ExecutionCoordinator,
    FileHandle, HttpProcessingTransport, OptionValue, ProcessingTransport, ResultInterpreter,
    ResultView, SafeSubmissionHooks, SessionView, SubmissionHooks, SubmitOutcome, ToolCatalog,
    ToolDefinition, TracingSubmissionHooks, builtin,
};

pub struct EngineBuilder {
    config: EngineConfig,
    catalog: Option<ToolCatalog>,
    client: Option<Client>,
    transport: Option<Arc<dyn ProcessingTransport>>,
    hooks: Option<Arc<dyn SubmissionHooks>>,
}

impl EngineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: None,
            client: None,
            transport: None,
            hooks: None,
        }
    }

    pub fn catalog(mut self, catalog: ToolCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn ProcessingTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn SubmissionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Validates the configuration and assembles the engine. Unset parts
    /// default to the built-in catalog, a reqwest client honoring the
    /// configured timeout, and panic-safe tracing hooks.
    pub fn build(self) -> Result<Engine, EngineError> {
        self.config.validate()?;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => builtin::catalog()?,
        };

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.config.timeout)
                .build()
                .map_err(|err| EngineError::config(format!("cannot build HTTP client: {err}")))?,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpProcessingTransport::new(
                client.clone(),
                self.config.base_url.clone(),
            )) as Arc<dyn ProcessingTransport>,
        };
        let hooks = match self.hooks {
            Some(hooks) => hooks,
            None => Arc::new(SafeSubmissionHooks::new(TracingSubmissionHooks))
                as Arc<dyn SubmissionHooks>,
        };

        let interpreter = ResultInterpreter::new()
            .with_download_base(self.config.download_base())
            .with_preview_limits(self.config.preview_limits());
        let coordinator = ExecutionCoordinator::builder(transport).hooks(hooks).build();

        tracing::debug!(
            base_url = %self.config.base_url,
            tools = catalog.len(),
            "engine ready"
        );

        Ok(Engine {
            config: self.config,
            catalog,
            client,
            coordinator,
            interpreter,
        })
    }
}

/// One processing screen bound to a tool catalog and a Processing API.
pub struct Engine {
    config: EngineConfig,
    catalog: ToolCatalog,
    client: Client,
    coordinator: ExecutionCoordinator,
    interpreter: ResultInterpreter,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::builder(config).build()
    }

    pub fn builder(config: EngineConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn coordinator(&self) -> &ExecutionCoordinator {
        &self.coordinator
    }

    pub fn tool(&self, tool_id: &str) -> Result<Arc<ToolDefinition>, EngineError> {
        Ok(self.catalog.require(tool_id)?)
    }

    pub fn activate(&self, tool_id: &str) -> Result<(), EngineError> {
        let tool = self.tool(tool_id)?;
        Ok(self.coordinator.activate_tool(tool)?)
    }

    pub fn select_files(&self, tool_id: &str, files: Vec<FileHandle>) -> Result<(), EngineError> {
        let tool = self.tool(tool_id)?;
        Ok(self.coordinator.select_files(tool, files)?)
    }

    pub fn attach_files(&self, files: Vec<FileHandle>) -> Result<(), EngineError> {
        Ok(self.coordinator.attach_files(files)?)
    }

    pub fn set_option(
        &self,
        key: &str,
        value: impl Into<OptionValue>,
    ) -> Result<Option<OptionValue>, EngineError> {
        Ok(self.coordinator.set_option(key, value)?)
    }

    pub fn view(&self) -> Result<SessionView, EngineError> {
        Ok(self.coordinator.view()?)
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, ExecError> {
        self.coordinator.submit().await
    }

    /// Display data for the current success, if there is one.
    pub fn result_view(&self) -> Result<Option<ResultView>, EngineError> {
        let session = self.coordinator.snapshot()?;

        let (Some(tool), Some(result)) = (session.active_tool(), session.result()) else {
            return Ok(None);
        };

        Ok(Some(self.interpreter.interpret(
            result,
            tool.category.fallback_filename(),
        )))
    }

    /// Download capability that saves artifacts under `directory`.
    pub fn downloader(&self, directory: impl Into<PathBuf>) -> DirectoryDownloader {
        DirectoryDownloader::new(self.client.clone(), directory)
    }
}
