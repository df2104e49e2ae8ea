use isorun::{
    cli, errors,
    executor::{self, Context},
    picker::toml::Config,
};

use cli::Opts;
use errors::HarnessError;
use structopt::StructOpt;
use tokio::runtime;
use tracing_subscriber::EnvFilter;

fn run() -> Result<i32, HarnessError> {
    let opts = Opts::from_args();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(opts.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if opts.no_color {
        colored::control::set_override(false);
    }

    let config = Config::from_dir(&opts.dir)?;

    // Tests run strictly one after another.
    let runtime = runtime::Builder::new_current_thread().enable_all().build()?;

    runtime.block_on(async {
        let ctx = Context::prepare(&opts.dir, &config, executor::TIMEOUT).await?;
        let stdout = std::io::BufWriter::new(std::io::stdout());
        ctx.flat_summary(stdout).await
    })
}

fn main() {
    std::process::exit(match run() {
        Err(HarnessError(msg)) => {
            println!("error: {}", msg);
            1
        }
        Ok(0) => 0,
        Ok(_) => 1,
    })
}
