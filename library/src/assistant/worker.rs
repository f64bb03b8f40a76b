use log::{debug, error, info};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use super::schema::{
    DescriptionRequest, FlowAnalysis, FlowAnalysisRequest, FlowGenerationRequest, GeneratedFlow,
};
use super::{FlowAssistant, analyze_or_default, describe_or_fallback};
use crate::error::FlowResult;
use crate::inspector::RequestTicket;

/// Called from the worker whenever an event is ready, e.g. to wake the UI.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

pub enum AssistantJob {
    Describe {
        ticket: RequestTicket,
        request: DescriptionRequest,
    },
    Generate(FlowGenerationRequest),
    Analyze(FlowAnalysisRequest),
}

enum WorkerMessage {
    Job(AssistantJob),
    Shutdown,
}

pub enum AssistantEvent {
    /// Always carries text: failures are already replaced by the fallback.
    Described {
        ticket: RequestTicket,
        description: String,
    },
    Generated(FlowResult<GeneratedFlow>),
    Analyzed(FlowAnalysis),
}

/// Runs assistant requests on a background thread so the canvas never
/// blocks. Results are polled with [`AssistantWorker::try_next`].
pub struct AssistantWorker {
    tx: Sender<WorkerMessage>,
    rx_event: Receiver<AssistantEvent>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AssistantWorker {
    pub fn spawn(
        assistant: Arc<dyn FlowAssistant>,
        notifier: Option<Notifier>,
    ) -> FlowResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("assistant-io")
            .enable_all()
            .build()?;
        let (tx, rx) = channel::<WorkerMessage>();
        let (tx_event, rx_event) = channel::<AssistantEvent>();

        let handle = thread::Builder::new()
            .name("assistant-worker".to_string())
            .spawn(move || {
                while let Ok(WorkerMessage::Job(job)) = rx.recv() {
                    let assistant = assistant.clone();
                    let tx_event = tx_event.clone();
                    let notifier = notifier.clone();
                    runtime.spawn(async move {
                        let event = run_job(assistant.as_ref(), job).await;
                        if tx_event.send(event).is_err() {
                            debug!("Assistant result dropped, worker owner is gone");
                            return;
                        }
                        if let Some(notify) = notifier {
                            notify();
                        }
                    });
                }
                info!("Assistant worker stopped");
            })?;

        Ok(Self {
            tx,
            rx_event,
            handle: Some(handle),
        })
    }

    pub fn submit(&self, job: AssistantJob) {
        if self.tx.send(WorkerMessage::Job(job)).is_err() {
            error!("Assistant worker is not running");
        }
    }

    pub fn try_next(&self) -> Option<AssistantEvent> {
        self.rx_event.try_recv().ok()
    }
}

impl Drop for AssistantWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Assistant worker panicked");
            }
        }
    }
}

async fn run_job(assistant: &dyn FlowAssistant, job: AssistantJob) -> AssistantEvent {
    match job {
        AssistantJob::Describe { ticket, request } => AssistantEvent::Described {
            description: describe_or_fallback(assistant, request).await,
            ticket,
        },
        AssistantJob::Generate(request) => {
            AssistantEvent::Generated(assistant.generate_flow(request).await)
        }
        AssistantJob::Analyze(request) => {
            AssistantEvent::Analyzed(analyze_or_default(assistant, request).await)
        }
    }
}
