use clap::Parser;
use xcgen::{
    cli::args::{CliArgs, Command},
    config::XcgenConfig,
    Xcgen,
};

async fn run() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    let config = XcgenConfig::load()?;

    let mut builder = Xcgen::builder()
        .manifest_file_name(&cli_args.manifest_location)
        .lint_concurrency(config.lint_concurrency)
        .strict(cli_args.strict || config.lint_strict);
    if let Some(root) = &cli_args.root {
        builder = builder.root(root);
    }
    let xcgen = builder.try_build()?;

    match cli_args.cmd {
        Command::Lint => {
            xcgen.lint().await?;
        }
        Command::References => {
            for target in xcgen.references().await? {
                println!("{}/{}", target.project, target.target);
                for reference in &target.references {
                    println!("  {reference}");
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
