use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clinmatch::cli::{display, Cli, Commands};
use clinmatch::service::MatchService;
use clinmatch::storage::{seed_researchers, MemStorage, SqliteStorage, Storage};
use clinmatch::{NewProblem, ProblemId};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Backend selection happens once, here: a SQLite file when --db is
    // given, otherwise a throwaway in-memory store with the demo pool.
    let storage: Arc<dyn Storage> = match &cli.db {
        Some(path) => Arc::new(SqliteStorage::open(std::path::Path::new(path)).await?),
        None => Arc::new(MemStorage::seeded()),
    };
    let service = MatchService::new(storage);

    match cli.command {
        Commands::Seed => {
            for new in seed_researchers() {
                service.register_researcher(new).await?;
            }
            println!("seeded demo researcher pool");
        }
        Commands::Researchers => {
            let pool = service.all_researchers().await?;
            display::print_researchers(&pool);
        }
        Commands::Match {
            description,
            title,
            domain,
            keywords,
            top_n,
        } => {
            let result = service
                .submit_problem(
                    NewProblem {
                        description,
                        title,
                        domain,
                        keywords,
                    },
                    top_n,
                )
                .await?;
            display::print_matches(&result);
        }
        Commands::Show { problem_id } => {
            let result = service
                .matches_for_problem(&ProblemId(problem_id))
                .await?;
            display::print_matches(&result);
        }
    }
    Ok(())
}
