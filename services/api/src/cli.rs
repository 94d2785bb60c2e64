use crate::commands::{export_schema, list_templates, render_template, show_template};
use crate::infra::parse_category;
use crate::server;
use clap::{Args, Parser, Subcommand};
use contract_templates::error::AppError;
use contract_templates::templates::TemplateCategory;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "contract-templates",
    about = "Assemble Turkish petitions, notices and lease protocols from form data",
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
    /// Inspect the template catalog
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
    /// Validate and render one template from JSON form data
    Render(RenderArgs),
}

#[derive(Subcommand, Debug)]
enum TemplatesCommand {
    /// List template ids, titles and categories
    List(ListArgs),
    /// Print a template's field schema and default data as JSON
    Show(ShowArgs),
    /// Write every template's fields as CSV
    ExportSchema(ExportSchemaArgs),
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

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Only list templates in this category (housing, employment, family, commercial, petition)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<TemplateCategory>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Template id, e.g. rent-receipt
    pub(crate) id: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportSchemaArgs {
    /// Destination file (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Template id, e.g. eviction-notice
    pub(crate) id: String,
    /// JSON file with form values; `-` reads stdin. Omit to render an empty form.
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Print indented text instead of JSON
    #[arg(long)]
    pub(crate) plain: bool,
    /// Fill fields the data leaves out from the template's default data
    #[arg(long)]
    pub(crate) with_defaults: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Templates { command } => match command {
            TemplatesCommand::List(args) => list_templates(args),
            TemplatesCommand::Show(args) => show_template(args),
            TemplatesCommand::ExportSchema(args) => export_schema(args),
        },
        Command::Render(args) => render_template(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "contract-templates",
            "render",
            "rent-receipt",
            "--data",
            "-",
            "--plain",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Render(args)) => {
                assert_eq!(args.id, "rent-receipt");
                assert_eq!(args.data, Some(PathBuf::from("-")));
                assert!(args.plain);
                assert!(!args.with_defaults);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let result = Cli::try_parse_from([
            "contract-templates",
            "templates",
            "list",
            "--category",
            "tax",
        ]);
        assert!(result.is_err());
    }
}
