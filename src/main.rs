use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use virality::api::client::ViralityClient;
use virality::api::types::{ContentType, MediaType};
use virality::assessment::grok::GrokProvider;
use virality::config::Config;
use virality::dashboard::{AccountForm, AccountPreset, Dashboard, Niche, PostDraft, PostTemplate, ResultTab};
use virality::disclaimer::{DisclaimerState, DISCLAIMER_TEXT};
use virality::output::terminal;

/// Virality: score X posts and accounts against the recommendation algorithm.
///
/// Talks to a scoring backend (VIRALITY_API_URL) and renders the results
/// as terminal panels.
#[derive(Parser)]
#[command(name = "virality", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a post's viral potential
    Analyze {
        #[command(flatten)]
        post: PostArgs,

        /// Detail view to show after the meter
        #[arg(long, value_enum, default_value = "breakdown")]
        tab: ResultTab,

        /// Show every detail view instead of a single tab
        #[arg(long)]
        all: bool,
    },

    /// Simulate an account's reach from its metrics
    Account {
        #[command(flatten)]
        account: AccountArgs,
    },

    /// Score a post and an account together
    Combined {
        #[command(flatten)]
        post: PostArgs,

        #[command(flatten)]
        account: AccountArgs,

        /// Post format
        #[arg(long, value_enum, default_value = "short")]
        content_type: ContentType,
    },

    /// Ask the AI model for a free-text assessment of a post
    Assess {
        #[command(flatten)]
        post: PostArgs,
    },

    /// Show the virality tier table
    Tiers {
        /// Fetch the backend's table instead of the local one
        #[arg(long)]
        remote: bool,
    },

    /// Show the algorithm's engagement signals and their weights
    Params,

    /// Check that the scoring backend is reachable
    Health,

    /// Stop showing the disclaimer banner
    DismissDisclaimer,
}

#[derive(Args)]
struct PostArgs {
    /// Post text (omit when using --template)
    content: Option<String>,

    /// Start from an example post
    #[arg(long, value_enum, conflicts_with = "content")]
    template: Option<PostTemplate>,

    /// Attached media
    #[arg(long, value_enum)]
    media: Option<MediaType>,

    /// Video length in seconds (only with --media video)
    #[arg(long)]
    video_seconds: Option<f64>,
}

impl PostArgs {
    fn to_draft(&self) -> Result<PostDraft> {
        let content = match (&self.content, self.template) {
            (Some(text), _) => text.clone(),
            (None, Some(template)) => template.text().to_string(),
            (None, None) => anyhow::bail!("Provide post text or pick a --template"),
        };

        let mut draft = PostDraft::new(content);
        draft.ensure_submittable()?;
        draft.set_media(self.media);
        if let Some(seconds) = self.video_seconds {
            draft.set_video_seconds(seconds);
        }
        Ok(draft)
    }
}

#[derive(Args)]
struct AccountArgs {
    /// Start from a canned audience size; explicit flags override it
    #[arg(long, value_enum)]
    preset: Option<AccountPreset>,

    #[arg(long)]
    followers: Option<u64>,

    #[arg(long)]
    following: Option<u64>,

    /// Average likes per post
    #[arg(long)]
    likes: Option<f64>,

    /// Average replies per post
    #[arg(long)]
    replies: Option<f64>,

    /// Average reposts per post
    #[arg(long)]
    retweets: Option<f64>,

    #[arg(long)]
    posts_per_week: Option<f64>,

    /// Account age in days
    #[arg(long)]
    age_days: Option<u32>,

    #[arg(long)]
    verified: bool,

    #[arg(long, value_enum)]
    niche: Option<Niche>,
}

impl AccountArgs {
    fn to_form(&self) -> AccountForm {
        let mut form = AccountForm::default();
        if let Some(preset) = self.preset {
            preset.apply(&mut form);
        }
        if let Some(v) = self.followers {
            form.followers_count = v;
        }
        if let Some(v) = self.following {
            form.following_count = v;
        }
        if let Some(v) = self.likes {
            form.avg_likes = v;
        }
        if let Some(v) = self.replies {
            form.avg_replies = v;
        }
        if let Some(v) = self.retweets {
            form.avg_retweets = v;
        }
        if let Some(v) = self.posts_per_week {
            form.posts_per_week = v;
        }
        if let Some(v) = self.age_days {
            form.account_age_days = v;
        }
        if let Some(v) = self.niche {
            form.niche = v;
        }
        form.is_verified = self.verified;
        form
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("virality=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { post, tab, all } => {
            print_banner(&config);
            let client = ViralityClient::new(&config.api_url)?;
            let mut dashboard = Dashboard::new(client);
            dashboard.post_draft = post.to_draft()?;
            dashboard.active_tab = tab;

            println!(
                "{} input_content {}",
                "$".green(),
                terminal::render_draft_counter(&dashboard.post_draft)
            );

            with_spinner("ANALYZING...", dashboard.analyze_post()).await;
            if let Some(error) = dashboard.post().error() {
                fail(error);
            }
            let Some(result) = dashboard.post().result().cloned() else {
                return Ok(());
            };

            print!("{}", terminal::render_virality_meter(&result));
            print!("{}", terminal::render_content_stats(&result.content_stats));
            if let Some(diversity) = &result.diversity {
                print!("{}", terminal::render_diversity(diversity));
            }

            let tabs: Vec<ResultTab> = if all {
                ResultTab::ALL.to_vec()
            } else {
                println!("\n{}", terminal::render_tabs(dashboard.active_tab));
                vec![dashboard.active_tab]
            };
            for tab in tabs {
                match tab {
                    ResultTab::Breakdown => {
                        print!("{}", terminal::render_score_breakdown(&result))
                    }
                    ResultTab::Tips => {
                        print!("{}", terminal::render_improvement_tips(&result.improvements))
                    }
                    ResultTab::Grok => run_assessment(&config, &mut dashboard).await,
                }
            }
        }

        Commands::Account { account } => {
            print_banner(&config);
            let client = ViralityClient::new(&config.api_url)?;
            let mut dashboard = Dashboard::new(client);
            dashboard.account_form = account.to_form();

            with_spinner("SIMULATING...", dashboard.simulate_account()).await;
            if let Some(error) = dashboard.account().error() {
                fail(error);
            }
            if let Some(result) = dashboard.account().result() {
                print!("{}", terminal::render_account_meter(result));
                print!("{}", terminal::render_account_metrics(result));
            }
        }

        Commands::Combined {
            post,
            account,
            content_type,
        } => {
            print_banner(&config);
            let client = ViralityClient::new(&config.api_url)?;
            let mut dashboard = Dashboard::new(client);
            dashboard.post_draft = post.to_draft()?;
            dashboard.account_form = account.to_form();
            dashboard.content_type = content_type;

            with_spinner("ANALYZING...", dashboard.analyze_combined()).await;
            if let Some(error) = dashboard.combined().error() {
                fail(error);
            }
            let Some(result) = dashboard.combined().result() else {
                return Ok(());
            };

            print!("{}", terminal::render_aggregate(result));
            print!("{}", terminal::render_account_meter(&result.account_score));
            print!("{}", terminal::render_virality_meter(&result.post_score));
            print!(
                "{}",
                terminal::render_combined_results(&result.post_score, &result.account_score)
            );
            if let Some(diversity) = &result.post_score.diversity {
                print!("{}", terminal::render_diversity(diversity));
            }
            if let Some(actions) = dashboard.actions() {
                print!("{}", terminal::render_actionables(&actions));
            }
        }

        Commands::Assess { post } => {
            let mut dashboard = Dashboard::new(ViralityClient::new(&config.api_url)?);
            dashboard.post_draft = post.to_draft()?;
            config.require_ai()?;
            let provider = GrokProvider::new(
                config.grok_api_key.clone(),
                &config.grok_api_url,
                config.grok_model.clone(),
            )?;

            with_spinner("Analyzing with AI...", dashboard.assess_draft(&provider)).await;
            if let Some(error) = dashboard.assessment().error() {
                fail(error);
            }
            if let Some(assessment) = dashboard.assessment().result() {
                print!("{}", terminal::render_assessment(assessment));
            }
        }

        Commands::Tiers { remote } => {
            if remote {
                let client = ViralityClient::new(&config.api_url)?;
                let tiers = client.tiers().await?;
                print!("{}", terminal::render_remote_tiers(&tiers));
            } else {
                print!("{}", terminal::render_tier_table());
            }
        }

        Commands::Params => {
            print!("{}", terminal::render_algorithm_params());
        }

        Commands::Health => {
            let client = ViralityClient::new(&config.api_url)?;
            info!(url = client.base_url(), "Checking backend health");
            match client.health().await {
                Ok(status) => println!("Backend at {}: {}", client.base_url(), status.green()),
                Err(e) => {
                    println!("Backend at {}: {}", client.base_url(), "unreachable".red());
                    return Err(e);
                }
            }
        }

        Commands::DismissDisclaimer => {
            let mut state = DisclaimerState::load(&config.disclaimer_path());
            state.dismiss()?;
            println!("Disclaimer dismissed.");
        }
    }

    Ok(())
}

/// Tier legend plus the disclaimer until it has been dismissed.
fn print_banner(config: &Config) {
    println!("{}", "VIRALITY_METER".green().bold());
    println!("{}\n", terminal::render_tier_legend());
    if DisclaimerState::load(&config.disclaimer_path()).should_show() {
        println!("{}\n", terminal::render_disclaimer(DISCLAIMER_TEXT));
    }
}

/// Run the AI assessment tab for the last analyzed post.
async fn run_assessment(config: &Config, dashboard: &mut Dashboard<ViralityClient>) {
    if let Err(e) = config.require_ai() {
        println!("\n{}", terminal::render_error(&e.to_string()));
        return;
    }
    let provider = match GrokProvider::new(
        config.grok_api_key.clone(),
        &config.grok_api_url,
        config.grok_model.clone(),
    ) {
        Ok(provider) => provider,
        Err(e) => {
            println!("\n{}", terminal::render_error(&e.to_string()));
            return;
        }
    };

    with_spinner("Analyzing with AI...", dashboard.assess(&provider)).await;
    if let Some(error) = dashboard.assessment().error() {
        println!("\n{}", terminal::render_error(error));
    } else if let Some(assessment) = dashboard.assessment().result() {
        print!("{}", terminal::render_assessment(assessment));
    }
}

/// Show a spinner while a request is in flight.
async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    let output = fut.await;
    pb.finish_and_clear();
    output
}

/// Print a panel error and exit non-zero.
fn fail(message: &str) -> ! {
    eprintln!("{}", terminal::render_error(message));
    std::process::exit(1);
}
