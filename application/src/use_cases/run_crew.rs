//! Knowledge crew use case
//!
//! Runs the three-agent pipeline for one question: retrieve excerpts, draft
//! an answer, validate it, format it as a table. Stages run strictly in
//! sequence and each one feeds its output to the next as context.

use crate::ports::answer_engine::{AnswerEngine, AnswerError};
use crate::ports::crew_progress::{CrewProgressNotifier, NoCrewProgress};
use crate::ports::knowledge::KnowledgeRetriever;
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use docqa_domain::core::string::preview;
use docqa_domain::{CrewTask, LlmSettings, PromptTemplate, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sequential qa → validation → formatting crew.
pub struct KnowledgeCrew {
    gateway: Arc<dyn LlmGateway>,
    retriever: Arc<dyn KnowledgeRetriever>,
    settings: LlmSettings,
    top_k: usize,
    progress: Arc<dyn CrewProgressNotifier>,
}

impl KnowledgeCrew {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        retriever: Arc<dyn KnowledgeRetriever>,
        settings: LlmSettings,
        top_k: usize,
    ) -> Self {
        Self {
            gateway,
            retriever,
            settings,
            top_k,
            progress: Arc::new(NoCrewProgress),
        }
    }

    /// Attach a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn CrewProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the whole pipeline and return the formatter's output.
    pub async fn kickoff(&self, question: &Question) -> Result<String, AnswerError> {
        info!("Kicking off crew: {}", preview(question.content(), 100));

        self.progress.on_retrieval_start();
        let chunks = self.retriever.retrieve(question.content(), self.top_k).await?;
        self.progress.on_retrieval_complete(chunks.len());
        debug!("Retrieved {} excerpts", chunks.len());

        let excerpts = PromptTemplate::excerpts(&chunks);

        let mut output: Option<String> = None;
        for task in CrewTask::pipeline() {
            let result = self
                .run_task(&task, question, &excerpts, output.as_deref())
                .await?;
            output = Some(result);
        }

        output.ok_or_else(|| AnswerError::EmptyStageOutput {
            stage: "pipeline".to_string(),
        })
    }

    async fn run_task(
        &self,
        task: &CrewTask,
        question: &Question,
        excerpts: &str,
        context: Option<&str>,
    ) -> Result<String, AnswerError> {
        info!("Stage {}: {}", task.stage.ordinal(), task.stage);
        self.progress.on_stage_start(task.stage, task.agent);

        let result = self.send_task(task, question, excerpts, context).await;

        match &result {
            Ok(text) => {
                debug!("{} produced: {}", task.agent, preview(text, 120));
                self.progress.on_stage_complete(task.stage, true);
            }
            Err(e) => {
                warn!("{} failed: {}", task.stage, e);
                self.progress.on_stage_complete(task.stage, false);
            }
        }
        result
    }

    async fn send_task(
        &self,
        task: &CrewTask,
        question: &Question,
        excerpts: &str,
        context: Option<&str>,
    ) -> Result<String, AnswerError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.settings, &task.agent.system_prompt())
            .await?;

        let prompt = PromptTemplate::task_prompt(task, question.content(), excerpts, context);
        let text = session.send(&prompt).await?;

        if text.trim().is_empty() {
            return Err(AnswerError::EmptyStageOutput {
                stage: task.stage.to_string(),
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl AnswerEngine for KnowledgeCrew {
    async fn answer(&self, question: &Question) -> Result<String, AnswerError> {
        self.kickoff(question).await
    }
}
