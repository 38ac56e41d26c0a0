use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::bank::QuestionRecord;
use quiz_core::model::Quiz;
use services::{Clock, QuizSessionService};
use storage::repository::{SessionId, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidSessionTtl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidSessionTtl { raw } => {
                write!(f, "invalid --session-ttl-mins value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_sessions: Arc<QuizSessionService>,
    session_id: SessionId,
}

impl UiApp for DesktopApp {
    fn quiz_sessions(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.quiz_sessions)
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- ui    [--db <sqlite_url>|memory] [--questions <json>] [--session-ttl-mins <n>]"
    );
    eprintln!("  cargo run -p app -- check [--questions <json>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --db memory");
    eprintln!("  --session-ttl-mins {}", QuizSessionService::DEFAULT_SESSION_TTL_MINS);
    eprintln!("  built-in question bank");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_QUESTIONS, QUIZ_SESSION_TTL_MINS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DbTarget {
    Memory,
    Sqlite(String),
}

#[derive(Debug)]
struct Args {
    db: DbTarget,
    questions: Option<PathBuf>,
    session_ttl: Duration,
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let db = match std::env::var("QUIZ_DB_URL") {
            Ok(raw) => parse_db_target(raw)?,
            Err(_) => DbTarget::Memory,
        };
        let questions = std::env::var_os("QUIZ_QUESTIONS").map(PathBuf::from);
        let session_ttl = match std::env::var("QUIZ_SESSION_TTL_MINS") {
            Ok(raw) => parse_ttl(&raw)?,
            Err(_) => Duration::minutes(QuizSessionService::DEFAULT_SESSION_TTL_MINS),
        };
        Ok(Self {
            db,
            questions,
            session_ttl,
        })
    }

    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut parsed = Self::from_env()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" if cmd == Command::Ui => {
                    parsed.db = parse_db_target(require_value(args, "--db")?)?;
                }
                "--session-ttl-mins" if cmd == Command::Ui => {
                    let value = require_value(args, "--session-ttl-mins")?;
                    parsed.session_ttl = parse_ttl(&value)?;
                }
                "--questions" => {
                    parsed.questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(parsed))
    }
}

fn parse_db_target(raw: String) -> Result<DbTarget, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw });
    }
    // A pooled `sqlite::memory:` gives every connection its own database, so
    // both spellings share the in-process store.
    if trimmed == "memory" || trimmed == "sqlite::memory:" {
        return Ok(DbTarget::Memory);
    }
    Ok(DbTarget::Sqlite(normalize_sqlite_url(trimmed)))
}

fn parse_ttl(raw: &str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|mins| *mins > 0)
        .and_then(Duration::try_minutes)
        .ok_or_else(|| ArgsError::InvalidSessionTtl {
            raw: raw.to_string(),
        })
}

fn normalize_sqlite_url(raw: &str) -> String {
    if raw.starts_with("sqlite://") {
        return raw.to_string();
    }

    let path_str = raw.strip_prefix("sqlite:").unwrap_or(raw);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_quiz(questions: Option<&PathBuf>) -> Result<Quiz, Box<dyn std::error::Error>> {
    let Some(path) = questions else {
        return Ok(Quiz::sample()?);
    };
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = records.len(), "loaded question bank");
    Ok(Quiz::from_records(records)?)
}

async fn open_storage(db: &DbTarget) -> Result<Storage, Box<dyn std::error::Error>> {
    match db {
        DbTarget::Memory => Ok(Storage::in_memory()),
        DbTarget::Sqlite(url) => {
            // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
            prepare_sqlite_file(url)?;
            Ok(Storage::sqlite(url).await?)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("app=info,services=info,storage=info,ui=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match Args::parse(cmd, &mut iter) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    let quiz = load_quiz(parsed.questions.as_ref())?;

    match cmd {
        Command::Check => {
            println!(
                "{} questions, max possible score {}",
                quiz.total_questions(),
                quiz.max_possible_score()
            );
            Ok(())
        }
        Command::Ui => {
            let storage = open_storage(&parsed.db).await?;
            info!(
                questions = quiz.total_questions(),
                db = ?parsed.db,
                session_ttl_mins = parsed.session_ttl.num_minutes(),
                "starting quiz"
            );

            let quiz_sessions = QuizSessionService::new(
                Clock::default_clock(),
                Arc::new(quiz),
                Arc::clone(&storage.sessions),
            )
            .with_session_ttl(parsed.session_ttl);

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_sessions: Arc::new(quiz_sessions),
                session_id: QuizSessionService::new_session_id(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_spellings_select_in_process_store() {
        assert_eq!(parse_db_target("memory".into()).unwrap(), DbTarget::Memory);
        assert_eq!(
            parse_db_target("sqlite::memory:".into()).unwrap(),
            DbTarget::Memory
        );
    }

    #[test]
    fn sqlite_urls_are_made_absolute() {
        let DbTarget::Sqlite(url) = parse_db_target("sqlite:quiz.sqlite3".into()).unwrap() else {
            panic!("expected sqlite target");
        };
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("quiz.sqlite3"), "{url}");

        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/q.db"),
            "sqlite:///tmp/q.db"
        );
    }

    #[test]
    fn blank_db_and_bad_ttl_are_rejected() {
        assert!(matches!(
            parse_db_target("  ".into()),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            parse_ttl("0"),
            Err(ArgsError::InvalidSessionTtl { .. })
        ));
        assert!(matches!(
            parse_ttl("ten"),
            Err(ArgsError::InvalidSessionTtl { .. })
        ));
        assert!(matches!(
            parse_ttl("1000000000000"),
            Err(ArgsError::InvalidSessionTtl { .. })
        ));
        assert_eq!(parse_ttl(" 15 ").unwrap(), Duration::minutes(15));
    }

    #[test]
    fn built_in_bank_loads_without_a_path() {
        let quiz = load_quiz(None).unwrap();
        assert_eq!(quiz.total_questions(), 7);
    }
}
