use clap::{Parser, ValueEnum};
use env_logger::Env;

use quiz_details::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    models::domain::{User, UserRole},
    routing::RouteParams,
    store::StoreAction,
    views::ViewAction,
};

/// Renders the quiz details page for a course quiz.
#[derive(Parser)]
struct Cli {
    /// Page location, e.g. /Courses/RS101/Quizzes/Q1
    #[clap(value_parser, value_name = "PATH")]
    path: String,

    /// Role of the signed-in user (FACULTY, ADMIN, STUDENT, ...)
    #[clap(short, long, value_parser, env = "QUIZ_USER_ROLE")]
    role: Option<String>,

    #[clap(short, long, value_parser, env = "QUIZ_USER_ID", default_value = "cli-user")]
    user_id: String,

    /// Button to press after the page has loaded
    #[clap(short, long, value_enum)]
    action: Option<Action>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    Publish,
    Preview,
    Edit,
    Start,
}

impl From<Action> for ViewAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Publish => ViewAction::TogglePublish,
            Action::Preview => ViewAction::Preview,
            Action::Edit => ViewAction::Edit,
            Action::Start => ViewAction::StartQuiz,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let state = AppState::new(Config::from_env())?;
    log::info!("Using quiz API at {}", state.config.api_base_url);

    let user = cli
        .role
        .as_deref()
        .map(|role| User::new(&cli.user_id, &cli.user_id, UserRole::parse(role)));
    state.store.dispatch(StoreAction::SetCurrentUser(user));

    let view = state.quiz_details_view(RouteParams::from_path(&cli.path)?)?;
    view.load().await;
    print!("{}", view.render());

    if let Some(action) = cli.action {
        let action = ViewAction::from(action);
        if !view.render().actions().contains(&action) {
            log::warn!("{:?} is not available on this page", action);
        }
        let outcome = view.perform(action).await;
        log::info!("{:?}", outcome);
        println!();
        print!("{}", view.render());
    }

    for path in state.navigator.history() {
        println!("-> {}", path);
    }

    Ok(())
}
