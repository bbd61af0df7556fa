use crate::demo::{run_demo, run_summary, DemoArgs, SummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use structural_summary::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "rorschach-cs",
    about = "Score coded Rorschach protocols into an Exner CS structural summary",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a protocol file and print the structural summary
    Summary(SummaryArgs),
    /// Score the bundled sample protocol
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Summary(args) => run_summary(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::OutputFormat;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rorschach-cs"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn summary_accepts_form_and_format_flags() {
        let cli = Cli::try_parse_from([
            "rorschach-cs",
            "summary",
            "--input",
            "protocol.json",
            "--form",
            "--format",
            "csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Summary(args)) => {
                assert!(args.form);
                assert_eq!(args.format, OutputFormat::Csv);
                assert_eq!(args.input.to_str(), Some("protocol.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_host_and_port() {
        let cli = Cli::try_parse_from(["rorschach-cs", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
