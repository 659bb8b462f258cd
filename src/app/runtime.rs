use crate::app::state::{AppState, Effect, Event, UserEvent};
use crate::domain::model::Action;
use crate::domain::ports::{Presenter, ViewerBackend};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 使用者輸入端；全部 handle 被 drop 後，事件迴圈在進行中的請求結束後停止
#[derive(Debug, Clone)]
pub struct AppHandle {
    input: mpsc::UnboundedSender<UserEvent>,
}

impl AppHandle {
    pub fn send(&self, event: UserEvent) -> bool {
        self.input.send(event).is_ok()
    }

    pub fn select(&self, breed: impl Into<String>) -> bool {
        self.send(UserEvent::SelectionChanged(breed.into()))
    }

    pub fn click(&self) -> bool {
        self.send(UserEvent::CardClicked)
    }

    pub fn submit(&self, name: impl Into<String>, comment: impl Into<String>) -> bool {
        self.send(UserEvent::FormSubmitted {
            name: name.into(),
            comment: comment.into(),
        })
    }
}

/// 單一 task 的事件迴圈
///
/// 狀態只在這個 task 內修改；每個請求 spawn 成獨立 task，完成後把結果
/// 當成事件送回來，所以迴圈本身從不等待網路。
pub struct App<B: ViewerBackend + 'static, P: Presenter> {
    backend: Arc<B>,
    presenter: P,
    state: AppState,
    input: mpsc::UnboundedReceiver<UserEvent>,
    results_tx: mpsc::UnboundedSender<Event>,
    results_rx: mpsc::UnboundedReceiver<Event>,
    in_flight: usize,
}

impl<B: ViewerBackend + 'static, P: Presenter> App<B, P> {
    pub fn new(backend: Arc<B>, presenter: P) -> (Self, AppHandle) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let app = Self {
            backend,
            presenter,
            state: AppState::new(),
            input: input_rx,
            results_tx,
            results_rx,
            in_flight: 0,
        };

        (app, AppHandle { input: input_tx })
    }

    pub async fn run(mut self) -> (AppState, P) {
        tracing::info!("🐕 Loading breeds and a random image");
        self.spawn_startup();

        let mut input_open = true;
        loop {
            if !input_open && self.in_flight == 0 {
                break;
            }

            tokio::select! {
                Some(event) = self.results_rx.recv() => {
                    self.in_flight -= 1;
                    self.dispatch(event);
                }
                input = self.input.recv(), if input_open => match input {
                    Some(event) => self.dispatch(event.into()),
                    None => {
                        tracing::debug!("Input closed, waiting for {} request(s)", self.in_flight);
                        input_open = false;
                    }
                },
            }
        }

        (self.state, self.presenter)
    }

    fn dispatch(&mut self, event: Event) {
        for effect in self.state.update(event) {
            match effect {
                Effect::Render(view) => view.present(&mut self.presenter),
                Effect::FetchBreedImage { ticket, breed } => {
                    let backend = Arc::clone(&self.backend);
                    let aborted = Event::RequestAborted {
                        action: Action::BreedImage,
                        ticket: Some(ticket),
                    };
                    self.spawn(aborted, async move {
                        let result = backend.fetch_breed_image(&breed).await;
                        Event::BreedImageLoaded {
                            ticket,
                            breed,
                            result,
                        }
                    });
                }
                Effect::PostComment(submission) => {
                    let backend = Arc::clone(&self.backend);
                    let aborted = Event::RequestAborted {
                        action: Action::Comment,
                        ticket: None,
                    };
                    self.spawn(aborted, async move {
                        Event::CommentPosted(backend.submit_comment(&submission).await)
                    });
                }
            }
        }
    }

    fn spawn_startup(&mut self) {
        let backend = Arc::clone(&self.backend);
        let aborted = Event::RequestAborted {
            action: Action::Startup,
            ticket: None,
        };
        self.spawn(aborted, async move {
            Event::StartupFinished(backend.load_startup().await)
        });
    }

    fn spawn<F>(&mut self, aborted: Event, request: F)
    where
        F: std::future::Future<Output = Event> + Send + 'static,
    {
        let completion = Completion {
            results: self.results_tx.clone(),
            aborted: Some(aborted),
        };
        self.in_flight += 1;
        tokio::spawn(async move {
            let event = request.await;
            completion.finish(event);
        });
    }
}

/// 每個請求 task 都恰好送回一個事件；task panic 或被取消時在 drop 中送出 `aborted`
struct Completion {
    results: mpsc::UnboundedSender<Event>,
    aborted: Option<Event>,
}

impl Completion {
    fn finish(mut self, event: Event) {
        self.aborted = None;
        // 迴圈結束後接收端已關閉，此時結果無人需要
        let _ = self.results.send(event);
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(event) = self.aborted.take() {
            tracing::warn!("Request task ended without a result");
            let _ = self.results.send(event);
        }
    }
}
