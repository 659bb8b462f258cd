use crate::app::state::UserEvent;
use crate::domain::model::{Action, Card};
use crate::domain::ports::Presenter;
use std::io::Write;

/// 把畫面更新寫到終端機（或任何 writer）
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn set_options(&mut self, breeds: &[String], selected: Option<&str>) {
        writeln!(self.out, "🐕 Breeds ({}): {}", breeds.len(), breeds.join(", ")).ok();
        if let Some(selected) = selected {
            writeln!(self.out, "   Selected: {}", selected).ok();
        }
    }

    fn show_card(&mut self, card: &Card) {
        writeln!(self.out, "🖼  {}", card.image.url).ok();
        if !card.image.alt.is_empty() {
            writeln!(self.out, "   Alt: {}", card.image.alt).ok();
        }
        writeln!(self.out, "   {}", card.caption).ok();
    }

    fn show_failure(&mut self, action: Action, message: &str) {
        writeln!(self.out, "❌ {} failed: {}", action, message).ok();
    }

    fn show_comment_echo(&mut self, echo: &serde_json::Value) {
        writeln!(self.out, "📨 Server echo: {}", echo).ok();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(UserEvent),
    Help,
    Quit,
}

pub const HELP: &str = "Commands:
  select <breed>             show a random image of <breed>
  click                      another image of the selected breed
  submit <name> | <comment>  post a comment
  help                       show this message
  quit                       exit after pending requests finish";

/// 解析一行互動輸入；空白行回傳 `Ok(None)`
pub fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command {
        "select" => Input::Event(UserEvent::SelectionChanged(rest.to_string())),
        "click" => Input::Event(UserEvent::CardClicked),
        "submit" => {
            let (name, comment) = rest.split_once('|').unwrap_or((rest, ""));
            Input::Event(UserEvent::FormSubmitted {
                name: name.trim().to_string(),
                comment: comment.trim().to_string(),
            })
        }
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(format!("Unknown command '{}', type 'help'", other)),
    };

    Ok(Some(input))
}
