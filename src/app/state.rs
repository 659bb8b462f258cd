//! 頁面狀態與事件處理
//!
//! 所有狀態變更只經過 [`AppState::update`]：輸入一個事件，回傳需要執行的
//! 副作用（發出請求或更新畫面）。圖片請求帶有 generation ticket，
//! 過期的回應到達時直接丟棄。

use crate::domain::model::{Action, BreedList, Card, CommentSubmission, ImageReference, StartupData};
use crate::domain::ports::Presenter;
use crate::utils::error::FetchError;

pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// 使用者可以觸發的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    SelectionChanged(String),
    CardClicked,
    FormSubmitted { name: String, comment: String },
}

#[derive(Debug)]
pub enum Event {
    StartupFinished(Result<StartupData, FetchError>),
    SelectionChanged(String),
    CardClicked,
    FormSubmitted {
        name: String,
        comment: String,
    },
    BreedImageLoaded {
        ticket: Ticket,
        breed: String,
        result: Result<ImageReference, FetchError>,
    },
    CommentPosted(Result<serde_json::Value, FetchError>),
    /// 請求 task 沒有回傳結果就結束（例如 backend panic）
    RequestAborted {
        action: Action,
        ticket: Option<Ticket>,
    },
}

impl From<UserEvent> for Event {
    fn from(event: UserEvent) -> Self {
        match event {
            UserEvent::SelectionChanged(breed) => Event::SelectionChanged(breed),
            UserEvent::CardClicked => Event::CardClicked,
            UserEvent::FormSubmitted { name, comment } => Event::FormSubmitted { name, comment },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Options {
        breeds: BreedList,
        selected: Option<String>,
    },
    Card(Card),
    Failure {
        action: Action,
        message: String,
    },
    CommentEcho(serde_json::Value),
}

impl View {
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        match self {
            View::Options { breeds, selected } => {
                presenter.set_options(breeds, selected.as_deref())
            }
            View::Card(card) => presenter.show_card(card),
            View::Failure { action, message } => presenter.show_failure(*action, message),
            View::CommentEcho(echo) => presenter.show_comment_echo(echo),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchBreedImage { ticket: Ticket, breed: String },
    PostComment(CommentSubmission),
    Render(View),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    phase: Phase,
    breeds: BreedList,
    selected: Option<String>,
    card: Option<Card>,
    image_generation: Ticket,
    last_error: Option<(Action, String)>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn image_generation(&self) -> Ticket {
        self.image_generation
    }

    pub fn last_error(&self) -> Option<&(Action, String)> {
        self.last_error.as_ref()
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::StartupFinished(Ok(data)) => self.on_startup(data),
            Event::StartupFinished(Err(e)) => {
                self.phase = Phase::Failed;
                vec![self.fail(Action::Startup, &e)]
            }
            Event::SelectionChanged(breed) => {
                self.selected = Some(breed.clone());
                vec![self.begin_image_request(breed)]
            }
            Event::CardClicked => {
                let breed = self.selected.clone().unwrap_or_default();
                vec![self.begin_image_request(breed)]
            }
            Event::FormSubmitted { name, comment } => {
                vec![Effect::PostComment(CommentSubmission::new(name, comment))]
            }
            Event::BreedImageLoaded {
                ticket,
                breed,
                result,
            } => self.on_breed_image(ticket, breed, result),
            Event::CommentPosted(Ok(echo)) => vec![Effect::Render(View::CommentEcho(echo))],
            Event::CommentPosted(Err(e)) => vec![self.fail(Action::Comment, &e)],
            Event::RequestAborted { action, ticket } => self.on_aborted(action, ticket),
        }
    }

    fn on_aborted(&mut self, action: Action, ticket: Option<Ticket>) -> Vec<Effect> {
        if ticket.is_some_and(|t| t != self.image_generation) {
            return Vec::new();
        }
        if action == Action::Startup {
            self.phase = Phase::Failed;
        }

        let message = "request ended without a response".to_string();
        self.last_error = Some((action, message.clone()));
        vec![Effect::Render(View::Failure { action, message })]
    }

    fn on_startup(&mut self, data: StartupData) -> Vec<Effect> {
        self.phase = Phase::Loaded;
        // 選取被重設，之前發出的圖片請求全部作廢
        self.image_generation += 1;
        self.selected = data.breeds.first().cloned();
        self.breeds = data.breeds;

        let card = Card::initial(data.image, self.selected.as_deref().unwrap_or_default());
        self.card = Some(card.clone());

        vec![
            Effect::Render(View::Options {
                breeds: self.breeds.clone(),
                selected: self.selected.clone(),
            }),
            Effect::Render(View::Card(card)),
        ]
    }

    fn begin_image_request(&mut self, breed: String) -> Effect {
        self.image_generation += 1;
        Effect::FetchBreedImage {
            ticket: self.image_generation,
            breed,
        }
    }

    fn on_breed_image(
        &mut self,
        ticket: Ticket,
        breed: String,
        result: Result<ImageReference, FetchError>,
    ) -> Vec<Effect> {
        if ticket != self.image_generation {
            tracing::debug!(
                "Discarding stale image response for '{}' (ticket {}, current {})",
                breed,
                ticket,
                self.image_generation
            );
            return Vec::new();
        }

        match result {
            Ok(image) => {
                let card = Card::for_breed(image, &breed);
                self.card = Some(card.clone());
                vec![Effect::Render(View::Card(card))]
            }
            Err(e) => vec![self.fail(Action::BreedImage, &e)],
        }
    }

    fn fail(&mut self, action: Action, error: &FetchError) -> Effect {
        let message = error.to_string();
        self.last_error = Some((action, message.clone()));
        Effect::Render(View::Failure { action, message })
    }
}
