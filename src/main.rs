use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sea_catering::app::App;
use sea_catering::controllers::{AdminController, SubscribeForm};
use sea_catering::domain::auth::{RegisterRequest, Session};
use sea_catering::domain::shared::Pagination;
use sea_catering::domain::testimonial::TestimonialRequest;
use sea_catering::error::AppResult;
use sea_catering::infrastructure::config::{Config, LogFormat};
use sea_catering::infrastructure::repositories::FileTokenRepository;

#[derive(Parser)]
#[command(name = "sea-catering", about = "SEA Catering meal subscriptions", version)]
struct Cli {
    /// Backend base URL (overrides SEA_CATERING_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Evaluate subscription status on this date instead of today (YYYY-MM-DD).
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List meal plans and the pricing formula
    Plans,
    /// Quote a monthly price
    Price {
        #[arg(long)]
        plan: String,
        /// Meal types, comma separated (breakfast,lunch,dinner)
        #[arg(long, value_delimiter = ',', required = true)]
        meals: Vec<String>,
        /// Delivery days, comma separated (monday..sunday)
        #[arg(long, value_delimiter = ',', required = true)]
        days: Vec<String>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the profile, or rename with --name
    Me {
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a subscription
    Subscribe {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        plan: String,
        #[arg(long, value_delimiter = ',', required = true)]
        meals: Vec<String>,
        #[arg(long, value_delimiter = ',', required = true)]
        days: Vec<String>,
        #[arg(long)]
        allergies: Option<String>,
    },
    /// List your subscriptions
    Subscriptions,
    /// Show one subscription
    Status { id: i64 },
    /// Pause a subscription between two dates (inclusive)
    Pause {
        id: i64,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        until: NaiveDate,
    },
    Resume { id: i64 },
    Cancel { id: i64 },
    /// Approved testimonials, or your own with --mine
    Testimonials {
        #[arg(long)]
        mine: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Submit a testimonial
    Testimonial {
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        rating: u8,
    },
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand)]
enum AdminCommand {
    Subscriptions {
        #[command(flatten)]
        page: PageArgs,
    },
    Deactivate { id: i64 },
    Metrics {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Status counts and MRR computed locally
    Summary,
    Users {
        #[command(flatten)]
        page: PageArgs,
    },
    ActivateUser { id: i64 },
    DeactivateUser { id: i64 },
    MakeAdmin { id: i64 },
    PendingTestimonials {
        #[command(flatten)]
        page: PageArgs,
    },
    Approve { id: i64 },
    Reject { id: i64 },
}

#[derive(clap::Args)]
struct PageArgs {
    #[arg(long, default_value_t = 0)]
    skip: u32,
    #[arg(long, default_value_t = 100)]
    limit: u32,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Pagination {
            skip: args.skip,
            limit: args.limit,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match load_config(cli.api_url.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    // Initialize logging
    init_logging(&config);

    match run(cli, config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_config(api_url: Option<String>) -> AppResult<Config> {
    let config = Config::from_env()?;
    match api_url {
        Some(url) => config.with_api_base_url(url),
        None => Ok(config),
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<String> {
    tracing::debug!(api_base_url = %config.api_base_url, "Using backend");

    let tokens = Arc::new(FileTokenRepository::new(config.token_file.clone()));
    let app = App::new(&config.api_base_url, tokens)?;
    let mut session = app.auth.session()?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Command::Plans => app.pricing.plans(),
        Command::Price { plan, meals, days } => {
            app.pricing.price(&session, &plan, &meals, &days).await
        }
        Command::Login { email, password } => app.auth.login(&email, &password).await,
        Command::Register {
            name,
            email,
            password,
        } => {
            app.auth
                .register(RegisterRequest {
                    full_name: name,
                    email,
                    password,
                })
                .await
        }
        Command::Logout => app.auth.logout(&mut session).await,
        Command::Me { name } => app.auth.me(&mut session, name.as_deref()).await,
        Command::Subscribe {
            name,
            phone,
            plan,
            meals,
            days,
            allergies,
        } => {
            let form = SubscribeForm {
                name,
                phone,
                plan,
                meal_types: meals,
                delivery_days: days,
                allergies,
            };
            app.subscription.subscribe(&session, form, as_of).await
        }
        Command::Subscriptions => app.subscription.list(&session, as_of).await,
        Command::Status { id } => app.subscription.status(&session, id, as_of).await,
        Command::Pause { id, from, until } => {
            app.subscription
                .pause(&session, id, from, until, as_of)
                .await
        }
        Command::Resume { id } => app.subscription.resume(&session, id, as_of).await,
        Command::Cancel { id } => app.subscription.cancel(&session, id, as_of).await,
        Command::Testimonials { mine, page } => {
            app.testimonial.list(&session, mine, page.into()).await
        }
        Command::Testimonial {
            name,
            message,
            rating,
        } => {
            app.testimonial
                .submit(
                    &session,
                    TestimonialRequest {
                        name,
                        message,
                        rating,
                    },
                )
                .await
        }
        Command::Admin(command) => run_admin(&app.admin, &session, command, as_of).await,
    }
}

async fn run_admin(
    admin: &AdminController,
    session: &Session,
    command: AdminCommand,
    as_of: NaiveDate,
) -> AppResult<String> {
    match command {
        AdminCommand::Subscriptions { page } => {
            admin.subscriptions(session, page.into(), as_of).await
        }
        AdminCommand::Deactivate { id } => admin.deactivate(session, id).await,
        AdminCommand::Metrics { from, until } => admin.metrics(session, from, until).await,
        AdminCommand::Summary => admin.summary(session, as_of).await,
        AdminCommand::Users { page } => admin.users(session, page.into()).await,
        AdminCommand::ActivateUser { id } => admin.set_user_active(session, id, true).await,
        AdminCommand::DeactivateUser { id } => admin.set_user_active(session, id, false).await,
        AdminCommand::MakeAdmin { id } => admin.make_admin(session, id).await,
        AdminCommand::PendingTestimonials { page } => {
            admin.pending_testimonials(session, page.into()).await
        }
        AdminCommand::Approve { id } => admin.approve(session, id).await,
        AdminCommand::Reject { id } => admin.reject(session, id).await,
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.is_development() {
            "sea_catering=info".into()
        } else {
            "sea_catering=warn".into()
        }
    });

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
