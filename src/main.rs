use breed_viewer::app::terminal::{parse_input, Input, TerminalPresenter, HELP};
use breed_viewer::utils::logger;
use breed_viewer::{
    App, AppHandle, Card, CliConfig, Command, CommentSubmission, LogFormat, Presenter,
    RemoteBackend, ViewerBackend, ViewerSettings,
};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    match settings.log_format().unwrap_or_default() {
        LogFormat::Compact => {
            logger::init_cli_logger(settings.verbose, settings.log_level.as_deref())
        }
        LogFormat::Json => logger::init_json_logger(settings.verbose, settings.log_level.as_deref()),
    }

    tracing::info!("Starting breed-viewer");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(cli.command(), &settings).await {
        tracing::error!("❌ breed-viewer failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(command: Command, settings: &ViewerSettings) -> breed_viewer::Result<()> {
    let backend = RemoteBackend::from_config(settings);
    let mut presenter = TerminalPresenter::stdout();

    match command {
        Command::Browse => browse(backend).await,
        Command::Startup => {
            let data = backend.load_startup().await?;
            let selected = data.breeds.first().cloned().unwrap_or_default();
            presenter.set_options(&data.breeds, Some(selected.as_str()));
            presenter.show_card(&Card::initial(data.image, &selected));
            Ok(())
        }
        Command::Image { breed } => {
            let image = backend.fetch_breed_image(&breed).await?;
            presenter.show_card(&Card::for_breed(image, &breed));
            Ok(())
        }
        Command::Comment { name, comment } => {
            let echo = backend
                .submit_comment(&CommentSubmission::new(name, comment))
                .await?;
            presenter.show_comment_echo(&echo);
            Ok(())
        }
    }
}

async fn browse(backend: RemoteBackend) -> breed_viewer::Result<()> {
    let (app, handle) = App::new(Arc::new(backend), TerminalPresenter::stdout());

    println!("{}", HELP);
    let reader = tokio::spawn(read_stdin(handle));

    let (state, _) = app.run().await;
    reader.await.ok();

    tracing::info!(
        "👋 Session ended (phase: {:?}, image requests: {})",
        state.phase(),
        state.image_generation()
    );
    Ok(())
}

/// 逐行讀取 stdin 並轉成事件；EOF 或 quit 時 drop handle
async fn read_stdin(handle: AppHandle) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_input(&line) {
            Ok(Some(Input::Event(event))) => {
                if !handle.send(event) {
                    break;
                }
            }
            Ok(Some(Input::Help)) => println!("{}", HELP),
            Ok(Some(Input::Quit)) => break,
            Ok(None) => {}
            Err(message) => eprintln!("{}", message),
        }
    }
}
